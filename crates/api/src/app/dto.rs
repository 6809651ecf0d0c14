use serde::{Deserialize, Serialize};

use cropwise_ai::Recommendation;
use cropwise_core::{DomainError, DomainResult};
use cropwise_market::{DEFAULT_HISTORY_DAYS, PricePoint};

// -------------------------
// Request DTOs
// -------------------------

/// `/predict` query string. The body is a `FeatureVector`.
#[derive(Debug, Default, Deserialize)]
pub struct PredictQuery {
    pub top_k: Option<i64>,
}

/// `days` query parameter for history and stats.
#[derive(Debug, Default, Deserialize)]
pub struct DaysQuery {
    pub days: Option<i64>,
}

impl PredictQuery {
    /// Requested recommendation count, or `default` when absent.
    pub fn resolve(&self, default: usize) -> DomainResult<usize> {
        match self.top_k {
            None => Ok(default),
            Some(k) if k >= 1 => Ok(usize::try_from(k).unwrap_or(usize::MAX)),
            Some(k) => Err(DomainError::validation(format!("top_k must be >= 1 (got {k})"))),
        }
    }
}

impl DaysQuery {
    /// Requested window in `1..=max`, default 30.
    pub fn resolve(&self, max: u32) -> DomainResult<u32> {
        let days = self.days.unwrap_or(i64::from(DEFAULT_HISTORY_DAYS));
        if days < 1 || days > i64::from(max) {
            return Err(DomainError::validation(format!(
                "days must be between 1 and {max} (got {days})"
            )));
        }
        Ok(days as u32)
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub crop: String,
    pub history: Vec<PricePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_k_defaults_and_validates() {
        assert_eq!(PredictQuery::default().resolve(3), Ok(3));
        assert_eq!(PredictQuery { top_k: Some(5) }.resolve(3), Ok(5));
        assert!(PredictQuery { top_k: Some(0) }.resolve(3).is_err());
        assert!(PredictQuery { top_k: Some(-2) }.resolve(3).is_err());
    }

    #[test]
    fn days_defaults_to_thirty_and_is_bounded() {
        assert_eq!(DaysQuery::default().resolve(365), Ok(30));
        assert_eq!(DaysQuery { days: Some(1) }.resolve(365), Ok(1));
        assert_eq!(DaysQuery { days: Some(365) }.resolve(365), Ok(365));
        assert!(DaysQuery { days: Some(0) }.resolve(365).is_err());
        assert!(DaysQuery { days: Some(366) }.resolve(365).is_err());
        assert!(DaysQuery { days: Some(-7) }.resolve(365).is_err());
    }
}
