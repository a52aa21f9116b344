use alloc::vec::Vec;

use crate::PositionRecord;

/// Append-only geometry cache for measured rows.
///
/// Records are contiguous from index 0: record `i` exists only if every record before it
/// does, and `records[i].top == records[i - 1].bottom`. Once written a record is never
/// changed, so `bottom` is non-decreasing and lookups can binary search.
#[derive(Clone, Debug, Default)]
pub struct PositionCache {
    records: Vec<PositionRecord>,
}

impl PositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PositionRecord> {
        self.records.get(index)
    }

    pub fn last(&self) -> Option<&PositionRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PositionRecord> {
        self.records.iter()
    }

    /// Total measured extent (bottom of the last record).
    pub fn extent(&self) -> f32 {
        self.records.last().map_or(0.0, |r| r.bottom)
    }

    /// Records the height of row `index`.
    ///
    /// Returns `false` without touching the cache when `index` is already recorded or is not
    /// the next contiguous index.
    pub fn push(&mut self, index: usize, height: f32) -> bool {
        if index != self.records.len() {
            return false;
        }
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        let top = self.extent();
        self.records.push(PositionRecord {
            index,
            height,
            top,
            bottom: top + height,
        });
        true
    }

    /// Index of the first record whose `bottom >= scroll_top`.
    pub fn first_visible(&self, scroll_top: f32) -> Option<usize> {
        let i = self.records.partition_point(|r| r.bottom < scroll_top);
        (i < self.records.len()).then_some(i)
    }

    /// Pixel offset where row `index` starts. Rows past the cache start at its extent.
    pub fn offset_of(&self, index: usize) -> f32 {
        match self.records.get(index) {
            Some(r) => r.top,
            None => self.extent(),
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
