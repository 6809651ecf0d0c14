//! Market analytics for crops (simulated).
//!
//! Prices are synthetic: each reading is a crop's base price shifted by an
//! independent, uniformly drawn whole-percent variation. Nothing here fetches
//! live market data.

pub mod basis;
pub mod clock;
pub mod error;
pub mod models;
pub mod simulator;

pub use basis::{DEFAULT_FALLBACK_PRICE, PriceBasis};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::MarketError;
pub use models::{
    CURRENCY, MarketTrend, PricePoint, PriceSnapshot, PriceStats, PRICE_UNIT, TrendDirection,
};
pub use simulator::{DEFAULT_HISTORY_DAYS, MarketSimulator, TREND_WINDOW_DAYS};
