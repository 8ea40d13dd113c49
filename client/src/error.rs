//! Gateway error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("gateway request failed: {0}")]
    Request(String),

    #[error("gateway returned HTTP {0}")]
    Status(u16),

    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),

    #[error("gateway error: {0}")]
    Node(String),

    #[error("submission rejected: {0}")]
    Rejected(String),
}
