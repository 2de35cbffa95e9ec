//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (`Money(50000)` equals any other `Money(50000)`)
/// - **Entity**: Has identity (a `Play` is found by its `PlayId`)
///
/// Value objects are **immutable**. To "modify" one, build a new one, e.g.
/// `total.checked_add(fee)` returns a fresh `Money` instead of mutating `total`.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
