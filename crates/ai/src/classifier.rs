use std::sync::Arc;

use crate::features::FeatureVector;
use crate::ranking::{Recommendation, rank_top_k};
use crate::result::AiError;

/// Number of recommendations returned when the caller does not ask for a count.
pub const DEFAULT_TOP_K: usize = 3;

/// A black-box crop classifier.
///
/// Returns one probability per known class, index-aligned with the label set
/// held by [`ModelContext`]. Must not mutate shared state.
pub trait Classifier: Send + Sync + 'static {
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, AiError>;
}

/// Loaded classifier plus its label set.
///
/// Built once at startup and shared immutably; cloning is cheap.
#[derive(Clone)]
pub struct ModelContext {
    classifier: Arc<dyn Classifier>,
    labels: Arc<[String]>,
}

impl core::fmt::Debug for ModelContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelContext")
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

impl ModelContext {
    pub fn new(classifier: impl Classifier, labels: Vec<String>) -> Self {
        Self::from_shared(Arc::new(classifier), labels)
    }

    pub fn from_shared(classifier: Arc<dyn Classifier>, labels: Vec<String>) -> Self {
        Self {
            classifier,
            labels: labels.into(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Classify `features` and return the `k` most probable crops.
    pub fn recommend(
        &self,
        features: &FeatureVector,
        k: usize,
    ) -> Result<Vec<Recommendation>, AiError> {
        let probabilities = self.classifier.predict_proba(features)?;
        let ranked = rank_top_k(&probabilities, self.labels(), k)?;

        tracing::debug!(
            k,
            classes = self.labels.len(),
            top = ranked.first().map(|r| r.crop.as_str()).unwrap_or(""),
            "ranked crop recommendations"
        );

        Ok(ranked)
    }
}
