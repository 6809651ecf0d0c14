use cropwise_ai::{CentroidClassifier, ModelContext};
use cropwise_core::DomainResult;
use cropwise_market::{MarketSimulator, PriceBasis};

use crate::config::ApiConfig;

/// Engines shared (read-only) by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub model: ModelContext,
    pub market: MarketSimulator,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(model: ModelContext, market: MarketSimulator, config: ApiConfig) -> Self {
        Self {
            model,
            market,
            config,
        }
    }

    /// Reference classifier and price table, with the configured fallback price.
    pub fn reference(config: ApiConfig) -> DomainResult<Self> {
        let basis = PriceBasis::reference().with_fallback(config.fallback_price)?;
        Ok(Self::new(
            CentroidClassifier::reference().into_context(),
            MarketSimulator::new(basis),
            config,
        ))
    }
}
