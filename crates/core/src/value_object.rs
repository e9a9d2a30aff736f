//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values
/// (e.g. a `Price` of `"45.00"` equals any other `"45.00"`). They are immutable;
/// arithmetic returns a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
