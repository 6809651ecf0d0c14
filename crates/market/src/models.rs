use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cropwise_core::ValueObject;

pub const CURRENCY: &str = "INR";
pub const PRICE_UNIT: &str = "per quintal";

/// Change (in percent) beyond which a trend counts as moving.
const TREND_THRESHOLD_PCT: f64 = 2.0;

/// Simulated spot price for a crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub crop: String,
    pub current_price: f64,
    pub base_price: f64,
    /// Whole-percent deviation from the base price.
    pub variation: i32,
    pub currency: String,
    pub unit: String,
}

/// One dated price reading (`date` serializes as `YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl ValueObject for PricePoint {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    pub crop: String,
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
    pub current_price: f64,
    pub days: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
}

impl TrendDirection {
    pub fn from_change_percent(change_percent: f64) -> Self {
        if change_percent > TREND_THRESHOLD_PCT {
            Self::Rising
        } else if change_percent < -TREND_THRESHOLD_PCT {
            Self::Falling
        } else {
            Self::Stable
        }
    }

    /// Advice shown with the trend. Falling and Stable share the same message.
    pub fn forecast(&self) -> &'static str {
        match self {
            Self::Rising => "Good time to sell",
            Self::Falling | Self::Stable => "Good time to buy inputs",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rising => "Rising",
            Self::Falling => "Falling",
            Self::Stable => "Stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrend {
    pub crop: String,
    pub trend: TrendDirection,
    pub change_percent: f64,
    pub forecast: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(TrendDirection::from_change_percent(2.0), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_change_percent(2.01), TrendDirection::Rising);
        assert_eq!(TrendDirection::from_change_percent(-2.0), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_change_percent(-2.01), TrendDirection::Falling);
        assert_eq!(TrendDirection::from_change_percent(0.0), TrendDirection::Stable);
    }

    #[test]
    fn only_rising_advises_selling() {
        assert_eq!(TrendDirection::Rising.forecast(), "Good time to sell");
        assert_eq!(TrendDirection::Stable.forecast(), "Good time to buy inputs");
        assert_eq!(TrendDirection::Falling.forecast(), "Good time to buy inputs");
    }

    #[test]
    fn price_point_serializes_iso_date() {
        let point = PricePoint {
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            price: 2625.0,
        };
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["date"], "2026-10-19");
        assert_eq!(json["price"], 2625.0);
    }

    #[test]
    fn trend_serializes_as_name() {
        let json = serde_json::to_value(TrendDirection::Falling).unwrap();
        assert_eq!(json, "Falling");
    }
}
