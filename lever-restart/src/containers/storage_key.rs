/// A key which maps onto a dense index, e.g. the id of a variable.
///
/// Containers store the entry of a key at position [`StorageKey::index`], so the keys of one
/// container should form the range `0..n`.
pub trait StorageKey {
    fn index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}

impl StorageKey for usize {
    fn index(&self) -> usize {
        *self
    }

    fn create_from_index(index: usize) -> Self {
        index
    }
}
