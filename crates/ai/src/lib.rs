//! `cropwise-ai`
//!
//! **Responsibility:** crop recommendation boundary.
//!
//! - The classifier is a black box behind [`Classifier`]; this crate never
//!   trains or deserializes models.
//! - [`ModelContext`] holds the classifier and its label set for the process
//!   lifetime and turns raw probabilities into a ranked [`Recommendation`] list.

pub mod centroid;
pub mod classifier;
pub mod features;
pub mod ranking;
pub mod result;

pub use centroid::{CentroidClassifier, CropProfile};
pub use classifier::{Classifier, DEFAULT_TOP_K, ModelContext};
pub use features::{FEATURE_NAMES, FeatureVector};
pub use ranking::{Recommendation, rank_top_k};
pub use result::AiError;
