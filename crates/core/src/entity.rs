//! Entity trait: identity that outlives attribute values.

/// Entity marker + minimal interface.
///
/// Catalog entries are entities: two plays are the same play when their
/// identifiers match, whatever their display names say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
