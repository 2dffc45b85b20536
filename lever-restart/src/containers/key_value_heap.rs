//! A heap where the keys range from [0, ..., n - 1] and the values are nonnegative floating points.
//! The heap can be queried to return the key with the maximum value. Values can either be
//! increased one at a time (keeping the heap valid) or overwritten in bulk, after which the heap
//! is rebuilt in linear time.
use std::ops::AddAssign;

use super::StorageKey;
use crate::lever_assert_advanced;
use crate::lever_assert_eq_simple;
use crate::lever_assert_moderate;

/// A [max-heap](https://en.wikipedia.org/wiki/Binary_heap)
/// which allows for generalised `Key`s (required to implement [StorageKey]) and `Value`s (which are
/// required to be ordered and addable).
#[derive(Debug, Clone)]
pub struct KeyValueHeap<Key, Value> {
    /// Contains the values stored as a heap; the value of key `i` is at index
    /// [`KeyValueHeap::map_key_to_position\[i\]`][KeyValueHeap::map_key_to_position]
    values: Vec<Value>,
    /// `map_key_to_position[i]` is the index of the value of the key with index `i` in
    /// [`KeyValueHeap::values`]
    map_key_to_position: Vec<usize>,
    /// `map_position_to_key[i]` is the key which is associated with `i` in
    /// [`KeyValueHeap::values`]
    map_position_to_key: Vec<Key>,
    /// Set when a value has been overwritten through [`KeyValueHeap::set_value_unordered`] and
    /// the heap property has not been restored yet.
    needs_rebuild: bool,
}

impl<Key: StorageKey, Value> Default for KeyValueHeap<Key, Value> {
    fn default() -> Self {
        Self {
            values: Default::default(),
            map_key_to_position: Default::default(),
            map_position_to_key: Default::default(),
            needs_rebuild: false,
        }
    }
}

impl<Key, Value> KeyValueHeap<Key, Value>
where
    Key: StorageKey + Copy,
    Value: AddAssign<Value> + PartialOrd + Default + Copy,
{
    /// Get the keys in the heap.
    ///
    /// The order in which the keys are yielded is unspecified.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.map_position_to_key.iter().copied()
    }

    /// Return the key with maximum value from the heap, or None if the heap is empty.
    ///
    /// The time-complexity of this operation is O(1)
    pub fn peek_max(&self) -> Option<(&Key, &Value)> {
        lever_assert_moderate!(
            !self.needs_rebuild,
            "The heap was modified without being rebuilt"
        );
        if self.values.is_empty() {
            None
        } else {
            Some((&self.map_position_to_key[0], &self.values[0]))
        }
    }

    pub fn get_value(&self, key: Key) -> &Value {
        lever_assert_moderate!(
            key.index() < self.map_key_to_position.len(),
            "Attempted to get key with index {} for a map with length {}",
            key.index(),
            self.map_key_to_position.len()
        );
        &self.values[self.map_key_to_position[key.index()]]
    }

    /// Increments the value of the element of 'key' by 'increment'
    ///
    /// The worst-case time-complexity of this operation is O(logn); average case is likely to be
    /// better
    pub fn increment(&mut self, key: Key, increment: Value) {
        let position = self.map_key_to_position[key.index()];
        self.values[position] += increment;
        if !self.needs_rebuild {
            self.sift_up(position);
        }
    }

    /// Overwrites the value of 'key' without restoring the heap property; the heap can only be
    /// queried again after [`KeyValueHeap::rebuild`] has been called.
    ///
    /// The time-complexity of this operation is O(1)
    pub fn set_value_unordered(&mut self, key: Key, value: Value) {
        let position = self.map_key_to_position[key.index()];
        self.values[position] = value;
        self.needs_rebuild = true;
    }

    /// Restores the heap property after an arbitrary number of calls to
    /// [`KeyValueHeap::set_value_unordered`].
    ///
    /// The run-time complexity of this operation is O(n)
    pub fn rebuild(&mut self) {
        if self.values.len() > 1 {
            let last_parent =
                KeyValueHeap::<Key, Value>::get_parent_position(self.values.len() - 1);
            for position in (0..=last_parent).rev() {
                self.sift_down(position);
            }
        }
        self.needs_rebuild = false;
        lever_assert_advanced!(self.is_max_heap());
    }

    /// Returns how many elements are in the heap
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Adds `key` with `value` to the heap; keys are added in the order of their index, i.e. the
    /// `n`-th key which is added should have index `n`.
    pub fn grow(&mut self, key: Key, value: Value) {
        lever_assert_eq_simple!(
            key.index(),
            self.map_key_to_position.len(),
            "Keys should be added to the heap in the order of their index"
        );
        let last_index = self.values.len();
        self.values.push(value);
        // The key starts at the bottom of the heap and is sifted up from there
        self.map_key_to_position.push(last_index);
        self.map_position_to_key.push(key);
        if !self.needs_rebuild {
            self.sift_up(last_index);
        }
    }

    /// Returns whether every parent is at least as large as its children.
    pub fn is_max_heap(&self) -> bool {
        (1..self.values.len()).all(|position| {
            self.values[KeyValueHeap::<Key, Value>::get_parent_position(position)]
                >= self.values[position]
        })
    }

    fn swap_positions(&mut self, a: usize, b: usize) {
        let key_i = self.map_position_to_key[a];
        lever_assert_moderate!(self.map_key_to_position[key_i.index()] == a);
        let key_j = self.map_position_to_key[b];
        lever_assert_moderate!(self.map_key_to_position[key_j.index()] == b);

        self.values.swap(a, b);
        self.map_position_to_key.swap(a, b);
        self.map_key_to_position.swap(key_i.index(), key_j.index());

        lever_assert_moderate!(
            self.map_key_to_position[key_i.index()] == b
                && self.map_key_to_position[key_j.index()] == a
        );
    }

    fn sift_up(&mut self, position: usize) {
        // Only sift up if not at the root
        if position > 0 {
            let parent_position = KeyValueHeap::<Key, Value>::get_parent_position(position);
            // Continue sift up if the heap property is violated
            if self.values[parent_position] < self.values[position] {
                self.swap_positions(parent_position, position);
                self.sift_up(parent_position);
            }
        }
    }

    fn sift_down(&mut self, position: usize) {
        lever_assert_moderate!(position < self.values.len());

        if !self.is_heap_locally(position) {
            let largest_child_position = self.get_largest_child_position(position);
            self.swap_positions(largest_child_position, position);
            self.sift_down(largest_child_position);
        }
    }

    fn is_heap_locally(&self, position: usize) -> bool {
        // Either the node is a leaf, or it satisfies the heap property (the value of the parent is
        // at least as large as the values of its child)
        let left_child_position = KeyValueHeap::<Key, Value>::get_left_child_position(position);
        let right_child_position = KeyValueHeap::<Key, Value>::get_right_child_position(position);

        if self.is_leaf(position) {
            return true;
        }

        // if does not have right child, then just compare with left child.
        if right_child_position >= self.values.len() {
            return self.values[position] >= self.values[left_child_position];
        }

        // Otherwise the node has two children, compare with both.
        self.values[position] >= self.values[left_child_position]
            && self.values[position] >= self.values[right_child_position]
    }

    fn is_leaf(&self, position: usize) -> bool {
        KeyValueHeap::<Key, Value>::get_left_child_position(position) >= self.values.len()
    }

    fn get_largest_child_position(&self, position: usize) -> usize {
        lever_assert_moderate!(!self.is_leaf(position));

        let left_child_position = KeyValueHeap::<Key, Value>::get_left_child_position(position);
        let right_child_position = KeyValueHeap::<Key, Value>::get_right_child_position(position);

        if right_child_position < self.values.len()
            && self.values[right_child_position] > self.values[left_child_position]
        {
            right_child_position
        } else {
            left_child_position
        }
    }

    fn get_parent_position(child_position: usize) -> usize {
        lever_assert_moderate!(child_position > 0, "Root has no parent.");
        (child_position - 1) / 2
    }

    fn get_left_child_position(position: usize) -> usize {
        2 * position + 1
    }

    fn get_right_child_position(position: usize) -> usize {
        2 * position + 2
    }
}

#[cfg(test)]
mod test {
    use super::KeyValueHeap;

    #[test]
    fn grow_keeps_maximum_at_the_top() {
        let mut heap: KeyValueHeap<usize, u32> = KeyValueHeap::default();

        heap.grow(0, 5);
        heap.grow(1, 7);
        heap.grow(2, 6);

        assert_eq!(heap.peek_max(), Some((&1, &7)));
        assert!(heap.is_max_heap());
    }

    #[test]
    fn increment_moves_key_up() {
        let mut heap: KeyValueHeap<usize, u32> = KeyValueHeap::default();
        for key in 0..5 {
            heap.grow(key, 1);
        }

        heap.increment(3, 10);

        assert_eq!(heap.peek_max(), Some((&3, &11)));
        assert_eq!(*heap.get_value(3), 11);
    }

    #[test]
    fn rebuild_restores_heap_after_bulk_overwrite() {
        let mut heap: KeyValueHeap<usize, f64> = KeyValueHeap::default();
        for key in 0..10 {
            heap.grow(key, key as f64);
        }
        assert_eq!(heap.peek_max().map(|(key, _)| *key), Some(9));

        for key in 0..10 {
            heap.set_value_unordered(key, (10 - key) as f64);
        }
        heap.rebuild();

        assert!(heap.is_max_heap());
        assert_eq!(heap.peek_max(), Some((&0, &10.0)));
        for key in 0..10 {
            assert_eq!(*heap.get_value(key), (10 - key) as f64);
        }
    }

    #[test]
    fn rebuild_of_small_heaps() {
        let mut heap: KeyValueHeap<usize, f64> = KeyValueHeap::default();
        heap.rebuild();
        assert_eq!(heap.peek_max(), None);

        heap.grow(0, 1.0);
        heap.set_value_unordered(0, 0.5);
        heap.rebuild();
        assert_eq!(heap.peek_max(), Some((&0, &0.5)));
    }

    #[test]
    #[should_panic]
    fn keys_out_of_index_order_are_rejected() {
        let mut heap: KeyValueHeap<usize, f64> = KeyValueHeap::default();
        heap.grow(0, 1.0);
        heap.grow(2, 1.0);
    }
}
