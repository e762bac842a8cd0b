/// Something identified by a key rather than by its field values.
///
/// A cart line whose quantity changed is still the same line; two listing
/// entries with the same product id describe the same product.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
