use std::sync::Arc;

use chrono::Days;
use rand::Rng;

use cropwise_core::round_dp;

use crate::basis::PriceBasis;
use crate::clock::{Clock, SystemClock};
use crate::error::MarketError;
use crate::models::{
    CURRENCY, MarketTrend, PRICE_UNIT, PricePoint, PriceSnapshot, PriceStats, TrendDirection,
};

/// Default length of a price history request.
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Days sampled for trend classification.
pub const TREND_WINDOW_DAYS: u32 = 7;

/// Spot price swing around the base, in whole percent.
const SPOT_VARIATION_PCT: i32 = 5;

/// Daily history swing around the base, in whole percent.
const HISTORY_VARIATION_PCT: i32 = 15;

/// Points averaged at each end of the trend window.
const TREND_EDGE_POINTS: usize = 3;

const PRICE_DECIMALS: u32 = 2;

/// Synthetic market price generator.
///
/// Model:
/// - price = base * (1 + variation / 100), variation a uniform whole percent;
/// - every draw is independent (no random walk, no smoothing);
/// - the basis table and clock are shared read-only, so one simulator can
///   serve concurrent callers.
///
/// Each operation has a `*_with` form taking the random source explicitly;
/// the plain form draws from the thread-local generator.
#[derive(Clone)]
pub struct MarketSimulator {
    basis: Arc<PriceBasis>,
    clock: Arc<dyn Clock>,
}

impl core::fmt::Debug for MarketSimulator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MarketSimulator")
            .field("basis", &self.basis)
            .finish_non_exhaustive()
    }
}

impl Default for MarketSimulator {
    fn default() -> Self {
        Self::new(PriceBasis::reference())
    }
}

impl MarketSimulator {
    pub fn new(basis: PriceBasis) -> Self {
        Self::with_clock(basis, SystemClock)
    }

    pub fn with_clock(basis: PriceBasis, clock: impl Clock) -> Self {
        Self {
            basis: Arc::new(basis),
            clock: Arc::new(clock),
        }
    }

    pub fn basis(&self) -> &PriceBasis {
        &self.basis
    }

    pub fn current_price(&self, crop: &str) -> PriceSnapshot {
        self.current_price_with(crop, &mut rand::rng())
    }

    pub fn current_price_with<R: Rng>(&self, crop: &str, rng: &mut R) -> PriceSnapshot {
        let base = self.basis.base_price(crop);
        let variation = rng.random_range(-SPOT_VARIATION_PCT..=SPOT_VARIATION_PCT);
        let current_price = apply_variation(base, variation);

        tracing::debug!(
            crop,
            known = self.basis.contains(crop),
            base,
            variation,
            current_price,
            "simulated spot price"
        );

        PriceSnapshot {
            crop: crop.to_string(),
            current_price,
            base_price: base,
            variation,
            currency: CURRENCY.to_string(),
            unit: PRICE_UNIT.to_string(),
        }
    }

    pub fn price_history(&self, crop: &str, days: u32) -> Result<Vec<PricePoint>, MarketError> {
        self.price_history_with(crop, days, &mut rand::rng())
    }

    /// Daily prices for `[today - (days - 1), today]`, oldest first.
    ///
    /// Draws run from today backwards; each day gets its own variation.
    pub fn price_history_with<R: Rng>(
        &self,
        crop: &str,
        days: u32,
        rng: &mut R,
    ) -> Result<Vec<PricePoint>, MarketError> {
        if days == 0 {
            return Err(MarketError::EmptyWindow);
        }

        let base = self.basis.base_price(crop);
        let today = self.clock.today();

        let mut history = Vec::with_capacity(days as usize);
        for offset in 0..days {
            let date = today
                .checked_sub_days(Days::new(u64::from(offset)))
                .ok_or(MarketError::DateOutOfRange { days })?;
            let variation = rng.random_range(-HISTORY_VARIATION_PCT..=HISTORY_VARIATION_PCT);
            history.push(PricePoint {
                date,
                price: apply_variation(base, variation),
            });
        }
        history.reverse();

        tracing::debug!(
            crop,
            known = self.basis.contains(crop),
            base,
            days,
            %today,
            "simulated price history"
        );

        Ok(history)
    }

    pub fn price_stats(&self, crop: &str, days: u32) -> Result<PriceStats, MarketError> {
        self.price_stats_with(crop, days, &mut rand::rng())
    }

    pub fn price_stats_with<R: Rng>(
        &self,
        crop: &str,
        days: u32,
        rng: &mut R,
    ) -> Result<PriceStats, MarketError> {
        let history = self.price_history_with(crop, days, rng)?;
        let prices: Vec<f64> = history.iter().map(|p| p.price).collect();
        Ok(summarize(crop, &prices))
    }

    pub fn market_trend(&self, crop: &str) -> Result<MarketTrend, MarketError> {
        self.market_trend_with(crop, &mut rand::rng())
    }

    /// Compare the mean of the first and last three prices of a 7-day window.
    ///
    /// The direction is derived from the reported (rounded) change so the two
    /// always agree.
    pub fn market_trend_with<R: Rng>(
        &self,
        crop: &str,
        rng: &mut R,
    ) -> Result<MarketTrend, MarketError> {
        let history = self.price_history_with(crop, TREND_WINDOW_DAYS, rng)?;
        let prices: Vec<f64> = history.iter().map(|p| p.price).collect();

        let first = mean(&prices[..TREND_EDGE_POINTS]);
        let last = mean(&prices[prices.len() - TREND_EDGE_POINTS..]);
        let change_percent = round_dp((last - first) / first * 100.0, PRICE_DECIMALS);
        let trend = TrendDirection::from_change_percent(change_percent);

        tracing::debug!(crop, change_percent, trend = trend.as_str(), "classified market trend");

        Ok(MarketTrend {
            crop: crop.to_string(),
            trend,
            change_percent,
            forecast: trend.forecast().to_string(),
        })
    }
}

fn apply_variation(base: f64, variation: i32) -> f64 {
    round_dp(base * (1.0 + f64::from(variation) / 100.0), PRICE_DECIMALS)
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

// `prices` is non-empty: callers reject empty windows first.
fn summarize(crop: &str, prices: &[f64]) -> PriceStats {
    let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let current_price = prices.last().copied().unwrap_or(0.0);

    PriceStats {
        crop: crop.to_string(),
        min_price: round_dp(min_price, PRICE_DECIMALS),
        max_price: round_dp(max_price, PRICE_DECIMALS),
        avg_price: round_dp(mean(prices), PRICE_DECIMALS),
        current_price,
        days: prices.len(),
    }
}
