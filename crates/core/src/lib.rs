//! `cropwise-core`: shared building blocks.
//!
//! This crate contains **pure** primitives used by the recommendation and
//! market crates (no infrastructure concerns).

pub mod error;
pub mod rounding;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use rounding::round_dp;
pub use value_object::ValueObject;
