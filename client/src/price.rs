//! Native-currency price lookup.
//!
//! A display-only collaborator: the dashboard shows a USD equivalent next
//! to token amounts when a price endpoint is configured. Lookup failure
//! silently omits the price; it never blocks snapshot construction.

use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

use stakeview_types::TokenAmount;

/// Source of the token's USD price.
pub trait PriceSource: Send + Sync {
    /// Current USD price per whole token, or `None` when unavailable.
    fn token_price_usd(&self) -> impl Future<Output = Option<f64>> + Send;
}

/// HTTP price source: GET a configured endpoint returning `{"usd": <f64>}`.
#[derive(Clone)]
pub struct HttpPriceSource {
    http: reqwest::Client,
    url: String,
}

impl HttpPriceSource {
    pub fn new(url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            http,
            url: url.into(),
        }
    }
}

#[derive(Deserialize)]
struct PriceResult {
    usd: f64,
}

impl PriceSource for HttpPriceSource {
    async fn token_price_usd(&self) -> Option<f64> {
        let response = match self.http.get(&self.url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("price lookup failed: {e}");
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::debug!("price endpoint returned HTTP {}", response.status());
            return None;
        }
        match response.json::<PriceResult>().await {
            Ok(p) if p.usd.is_finite() && p.usd >= 0.0 => Some(p.usd),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("invalid price response: {e}");
                None
            }
        }
    }
}

/// Format an amount's USD equivalent, e.g. `"$31.20"`.
pub fn format_usd(amount: TokenAmount, price_usd: f64) -> String {
    format!("${:.2}", amount.as_tokens_f64() * price_usd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        let ten = TokenAmount::from_tokens(10);
        assert_eq!(format_usd(ten, 3.12), "$31.20");
        assert_eq!(format_usd(TokenAmount::ZERO, 3000.0), "$0.00");
    }

    #[test]
    fn test_price_result_parse() {
        let p: PriceResult = serde_json::from_str(r#"{"usd": 2998.4}"#).unwrap();
        assert!((p.usd - 2998.4).abs() < f64::EPSILON);
    }
}
