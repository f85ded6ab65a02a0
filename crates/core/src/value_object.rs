//! Value object trait: equality by value, not identity.
//!
//! Catalog products and marketplace listings carry no key of their own; two
//! records with the same attributes are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** once constructed and **compared by value**.
/// They are cloned freely, e.g. when a matched product is snapshotted into the
/// result mapping.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Listing {
///     title: String,
///     manufacturer: String,
/// }
///
/// impl ValueObject for Listing {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
