use serde::{Deserialize, Serialize};

use cropwise_core::{DomainError, DomainResult, ValueObject};

/// Feature names in classifier input order.
pub const FEATURE_NAMES: [&str; 7] = ["N", "P", "K", "temperature", "humidity", "ph", "rainfall"];

/// Soil and climate measurements for one recommendation request.
///
/// Field order matches [`FEATURE_NAMES`]; the JSON form uses the same names
/// (`N`, `P`, `K` upper-case).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl ValueObject for FeatureVector {}

impl FeatureVector {
    pub fn from_array(values: [f64; 7]) -> Self {
        let [nitrogen, phosphorus, potassium, temperature, humidity, ph, rainfall] = values;
        Self {
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
        }
    }

    pub fn to_array(&self) -> [f64; 7] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }

    /// Reject non-finite measurements.
    pub fn validate(&self) -> DomainResult<()> {
        for (name, value) in FEATURE_NAMES.iter().zip(self.to_array()) {
            if !value.is_finite() {
                return Err(DomainError::validation(format!(
                    "feature {name} must be a finite number"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_order_matches_feature_names() {
        let v = FeatureVector::from_array([90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9]);
        assert_eq!(v.nitrogen, 90.0);
        assert_eq!(v.potassium, 43.0);
        assert_eq!(v.rainfall, 202.9);
        assert_eq!(v.to_array(), [90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9]);
    }

    #[test]
    fn deserializes_upper_case_nutrient_keys() {
        let v: FeatureVector = serde_json::from_str(
            r#"{"N":90,"P":42,"K":43,"temperature":20.8,"humidity":82,"ph":6.5,"rainfall":202.9}"#,
        )
        .unwrap();
        assert_eq!(v.phosphorus, 42.0);
        assert_eq!(v.ph, 6.5);
    }

    #[test]
    fn non_finite_feature_is_rejected() {
        let v = FeatureVector::from_array([90.0, f64::NAN, 43.0, 20.8, 82.0, 6.5, 202.9]);
        match v.validate() {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("feature P")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn finite_features_validate() {
        let v = FeatureVector::from_array([0.0, 0.0, 0.0, -5.0, 0.0, 0.0, 0.0]);
        assert!(v.validate().is_ok());
    }
}
