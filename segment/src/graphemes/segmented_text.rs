// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Random access to the grapheme clusters of some text, by cluster index.
///
/// This is the only thing the word boundary queries in [`crate::word_boundaries`] need
/// from a text. [`crate::TextString`] is the main implementation. Any other backing store
/// (eg: a tree of text nodes in an editor) can implement it to get word boundaries for
/// free, as long as it can hand out each cluster as a `UTF-16` slice.
pub trait SegmentedText {
    /// Number of grapheme clusters.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool { self.len() == 0 }

    /// The cluster at `seg_index`, or [`None`] when `seg_index >= self.len()`. Never
    /// panics.
    fn read(&self, seg_index: usize) -> Option<&[u16]>;

    /// A new text over clusters `[start, end)`, clamped to `0..=self.len()`. When
    /// `start > end` the result is empty. `self` is not changed.
    #[must_use]
    fn substring(&self, start: usize, end: usize) -> Self
    where
        Self: Sized;
}

/// A plain list of pre-split clusters. Each inner [`Vec`] is one cluster.
impl SegmentedText for Vec<Vec<u16>> {
    fn len(&self) -> usize { Vec::len(self) }

    fn read(&self, seg_index: usize) -> Option<&[u16]> {
        self.get(seg_index).map(Vec::as_slice)
    }

    fn substring(&self, start: usize, end: usize) -> Self {
        let end = end.min(Vec::len(self));
        let start = start.min(end);
        self[start..end].to_vec()
    }
}
