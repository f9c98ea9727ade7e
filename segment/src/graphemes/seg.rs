// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

/// `Seg` is the code unit span of one grapheme cluster in a `UTF-16` buffer.
///
/// It does not allocate and is [Copy]. The buffer owns the memory, and a `Seg` is a view
/// into part of it. Use [`Seg::get_units()`] to get at the cluster.
///
/// ```
/// use r3bl_segment::split_cluster_segs;
/// let units: Vec<u16> = "a😀".encode_utf16().collect();
/// let segs = split_cluster_segs(&units);
/// assert_eq!(segs[1].start_unit_index, 1);
/// assert_eq!(segs[1].end_unit_index, 3);
/// assert_eq!(segs[1].unit_len(), 2);
/// assert_eq!(segs[1].get_units(&units), &units[1..3]);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seg {
    /// Offset (in code units) of the first code unit of the cluster.
    pub start_unit_index: usize,

    /// Offset (in code units) one past the last code unit of the cluster.
    pub end_unit_index: usize,
}

/// Compact, single line, easier to read than the derived output.
impl Debug for Seg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Seg[units: {s:>3}..{e:<3} size: {n}]",
            s = self.start_unit_index,
            e = self.end_unit_index,
            n = self.unit_len(),
        )
    }
}

impl Seg {
    #[must_use]
    pub fn new(start_unit_index: usize, end_unit_index: usize) -> Self {
        debug_assert!(start_unit_index <= end_unit_index);
        Self {
            start_unit_index,
            end_unit_index,
        }
    }

    #[must_use]
    pub fn unit_len(&self) -> usize { self.end_unit_index - self.start_unit_index }

    /// The slice of `units` covered by this segment. `units` must be the buffer this
    /// segment was computed from.
    #[must_use]
    pub fn get_units<'a>(&self, units: &'a [u16]) -> &'a [u16] {
        &units[self.start_unit_index..self.end_unit_index]
    }

    /// Whether the code unit offset falls inside this segment.
    #[must_use]
    pub fn contains_unit(&self, unit_index: usize) -> bool {
        (self.start_unit_index..self.end_unit_index).contains(&unit_index)
    }
}
