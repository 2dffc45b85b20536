use crate::lever_assert_simple;

/// A ring buffer which holds the `capacity` most recently pushed entries; older entries are
/// overwritten.
#[derive(Debug, Clone)]
pub struct SlidingWindow<Entry> {
    /// Slots `0..entries.len()` are valid; once the window is full, `entries.len() == capacity`.
    entries: Vec<Entry>,
    capacity: usize,
    /// The slot which is written by the next push.
    cursor: usize,
    total_inserted: u64,
}

impl<Entry> SlidingWindow<Entry> {
    pub fn new(capacity: usize) -> Self {
        lever_assert_simple!(capacity > 0, "A sliding window cannot have capacity 0");
        SlidingWindow {
            entries: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
            total_inserted: 0,
        }
    }

    pub fn push(&mut self, entry: Entry) {
        if self.entries.len() < self.capacity {
            self.entries.push(entry);
        } else {
            self.entries[self.cursor] = entry;
        }
        self.cursor = (self.cursor + 1) % self.capacity;
        self.total_inserted += 1;
    }

    /// The number of valid entries, i.e. `min(total_inserted, capacity)`.
    pub fn effective_size(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the valid entries; the order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of entries which have ever been pushed.
    pub fn total_inserted(&self) -> u64 {
        self.total_inserted
    }
}
