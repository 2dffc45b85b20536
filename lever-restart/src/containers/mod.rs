//! Contains containers which are used by the restart subsystem and its collaborators.
mod key_value_heap;
mod storage_key;

pub use key_value_heap::KeyValueHeap;
pub use storage_key::StorageKey;
