//! Nullable price source — fixed or absent price.

use stakeview_client::PriceSource;

/// A price source returning a fixed scripted price, or nothing.
#[derive(Default)]
pub struct NullPriceSource {
    price: Option<f64>,
}

impl NullPriceSource {
    /// A source with no price — exercises the silent-omission path.
    pub fn unavailable() -> Self {
        Self { price: None }
    }

    /// A source with a fixed USD price per token.
    pub fn fixed(price: f64) -> Self {
        Self { price: Some(price) }
    }
}

impl PriceSource for NullPriceSource {
    async fn token_price_usd(&self) -> Option<f64> {
        self.price
    }
}
