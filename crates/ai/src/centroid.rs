//! Reference nearest-centroid classifier.
//!
//! Each crop is described by a typical growing profile (mean soil nutrients and
//! climate). A request is scored by its standardized distance to every profile
//! and the scores are turned into probabilities with a softmax. This is the
//! default classification capability when no external model is injected.

use crate::classifier::{Classifier, ModelContext};
use crate::features::FeatureVector;
use crate::result::AiError;

/// Typical growing conditions for one crop.
#[derive(Debug, Clone, PartialEq)]
pub struct CropProfile {
    pub crop: String,
    pub centroid: FeatureVector,
}

impl CropProfile {
    pub fn new(crop: impl Into<String>, centroid: [f64; 7]) -> Self {
        Self {
            crop: crop.into(),
            centroid: FeatureVector::from_array(centroid),
        }
    }
}

/// Per-feature spread used to standardize distances
/// (N, P, K, temperature, humidity, ph, rainfall).
const REFERENCE_SPREAD: [f64; 7] = [36.9, 32.9, 50.6, 5.1, 22.3, 0.77, 55.0];

/// Reference profiles, alphabetical by crop name.
const REFERENCE_PROFILES: [(&str, [f64; 7]); 22] = [
    ("apple", [20.8, 134.2, 199.9, 22.6, 92.3, 5.9, 112.7]),
    ("banana", [100.2, 82.0, 50.1, 27.4, 80.4, 6.0, 104.6]),
    ("blackgram", [40.0, 67.5, 19.2, 30.0, 65.1, 7.1, 67.9]),
    ("chickpea", [40.1, 67.8, 79.9, 18.9, 16.9, 7.3, 80.1]),
    ("coconut", [22.0, 16.9, 30.6, 27.4, 94.8, 6.0, 175.7]),
    ("coffee", [101.2, 28.7, 29.9, 25.5, 58.9, 6.8, 158.1]),
    ("cotton", [117.8, 46.2, 19.6, 24.0, 79.8, 6.9, 80.4]),
    ("grapes", [23.2, 132.5, 200.1, 23.8, 81.9, 6.0, 69.6]),
    ("jute", [78.4, 46.9, 40.0, 25.0, 79.6, 6.7, 174.8]),
    ("kidneybeans", [20.8, 67.5, 20.1, 20.1, 21.6, 5.7, 105.9]),
    ("lentil", [18.8, 68.4, 19.4, 24.5, 64.8, 6.9, 45.7]),
    ("maize", [77.8, 48.4, 19.8, 22.4, 65.1, 6.2, 84.8]),
    ("mango", [20.1, 27.2, 29.9, 31.2, 50.2, 5.8, 94.7]),
    ("mothbeans", [21.4, 48.0, 20.2, 28.2, 53.2, 6.8, 51.2]),
    ("mungbean", [21.0, 47.3, 19.9, 28.5, 85.5, 6.7, 48.4]),
    ("muskmelon", [100.3, 17.7, 50.1, 28.7, 92.3, 6.4, 24.7]),
    ("orange", [19.6, 16.6, 10.0, 22.8, 92.2, 7.0, 110.5]),
    ("papaya", [49.9, 59.1, 50.0, 33.7, 92.4, 6.7, 142.6]),
    ("pigeonpeas", [20.7, 67.7, 20.3, 27.7, 48.1, 5.8, 149.5]),
    ("pomegranate", [18.9, 18.8, 40.2, 21.8, 90.1, 6.4, 107.5]),
    ("rice", [79.9, 47.6, 39.9, 23.7, 82.3, 6.4, 236.2]),
    ("watermelon", [99.4, 17.0, 50.2, 25.6, 85.2, 6.5, 50.8]),
];

/// Softmax over negative half squared standardized distance.
#[derive(Debug, Clone)]
pub struct CentroidClassifier {
    profiles: Vec<CropProfile>,
    spread: [f64; 7],
}

impl CentroidClassifier {
    pub fn new(profiles: Vec<CropProfile>, spread: [f64; 7]) -> Result<Self, AiError> {
        if profiles.is_empty() {
            return Err(AiError::InvalidInput(
                "at least one crop profile is required".to_string(),
            ));
        }
        if spread.iter().any(|s| !(s.is_finite() && *s > 0.0)) {
            return Err(AiError::InvalidInput(
                "feature spread must be finite and positive".to_string(),
            ));
        }
        Ok(Self { profiles, spread })
    }

    /// Built-in profiles for the 22 reference crops.
    pub fn reference() -> Self {
        let profiles = REFERENCE_PROFILES
            .iter()
            .map(|(crop, centroid)| CropProfile::new(*crop, *centroid))
            .collect();
        Self {
            profiles,
            spread: REFERENCE_SPREAD,
        }
    }

    /// Crop names in class index order.
    pub fn labels(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.crop.clone()).collect()
    }

    /// Wrap this classifier and its own labels in a [`ModelContext`].
    pub fn into_context(self) -> ModelContext {
        let labels = self.labels();
        ModelContext::new(self, labels)
    }

    fn score(&self, features: &FeatureVector, profile: &CropProfile) -> f64 {
        let x = features.to_array();
        let c = profile.centroid.to_array();
        let squared: f64 = x
            .iter()
            .zip(c.iter())
            .zip(self.spread.iter())
            .map(|((xi, ci), si)| {
                let z = (xi - ci) / si;
                z * z
            })
            .sum();
        -0.5 * squared
    }
}

impl Classifier for CentroidClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, AiError> {
        let scores: Vec<f64> = self
            .profiles
            .iter()
            .map(|p| self.score(features, p))
            .collect();

        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !max.is_finite() {
            return Err(AiError::InferenceFailed(
                "features produced no finite class score".to_string(),
            ));
        }

        let weights: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = weights.iter().sum();

        Ok(weights.into_iter().map(|w| w / total).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_of(crop: &str) -> FeatureVector {
        REFERENCE_PROFILES
            .iter()
            .find(|(name, _)| *name == crop)
            .map(|(_, c)| FeatureVector::from_array(*c))
            .unwrap()
    }

    #[test]
    fn reference_labels_are_sorted_and_unique() {
        let labels = CentroidClassifier::reference().labels();
        assert_eq!(labels.len(), 22);
        let mut sorted = labels.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, labels);
    }

    #[test]
    fn probabilities_form_a_distribution() {
        let clf = CentroidClassifier::reference();
        let probs = clf
            .predict_proba(&FeatureVector::from_array([50.0, 50.0, 50.0, 25.0, 70.0, 6.5, 100.0]))
            .unwrap();
        assert_eq!(probs.len(), 22);
        assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
        let total: f64 = probs.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn profile_centroid_ranks_its_own_crop_first() {
        let ctx = CentroidClassifier::reference().into_context();
        for crop in ["rice", "chickpea", "grapes", "coffee", "muskmelon"] {
            let out = ctx.recommend(&profile_of(crop), 1).unwrap();
            assert_eq!(out[0].crop, crop);
        }
    }

    #[test]
    fn far_away_input_still_yields_distribution() {
        let clf = CentroidClassifier::reference();
        let probs = clf
            .predict_proba(&FeatureVector::from_array([1.0e4, 1.0e4, 1.0e4, 500.0, 1.0e3, 14.0, 1.0e5]))
            .unwrap();
        let total: f64 = probs.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_features_fail_inference() {
        let clf = CentroidClassifier::reference();
        let err = clf
            .predict_proba(&FeatureVector::from_array([f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]))
            .unwrap_err();
        assert!(matches!(err, AiError::InferenceFailed(_)));
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        assert!(CentroidClassifier::new(Vec::new(), REFERENCE_SPREAD).is_err());
        let profiles = vec![CropProfile::new("rice", [0.0; 7])];
        assert!(CentroidClassifier::new(profiles, [1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0]).is_err());
    }
}
