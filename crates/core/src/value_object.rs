//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object carries no identity: two instances holding the same values
/// are interchangeable. [`crate::Rut`] is the canonical example in the portal;
/// two RUTs typed as `"12345678-5"` and `"12.345.678-5"` parse to equal values.
///
/// Value objects are immutable once constructed. To "change" one, parse or
/// build a new instance.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
