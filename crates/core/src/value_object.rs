//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: a feature vector
/// or a price point has no identity beyond its fields. To "modify" one, build
/// a new one.
///
/// The trait requires `Clone + PartialEq + Debug` so values can be copied
/// freely between callers, compared in tests, and logged.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
