// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Splitting a `UTF-16` buffer into grapheme clusters.

use std::iter::FusedIterator;

use crate::{DEBUG_SEGMENT_MOD, Seg, match_cluster_at};

/// Walks a `UTF-16` buffer from the front, yielding one [`Seg`] per grapheme cluster.
///
/// Every segment is non-empty, segments are contiguous, and the last one ends at
/// `units.len()`.
#[derive(Debug, Clone)]
pub struct ClusterIter<'a> {
    units: &'a [u16],
    unit_index: usize,
}

impl<'a> ClusterIter<'a> {
    #[must_use]
    pub fn new(units: &'a [u16]) -> Self {
        Self {
            units,
            unit_index: 0,
        }
    }
}

impl Iterator for ClusterIter<'_> {
    type Item = Seg;

    fn next(&mut self) -> Option<Self::Item> {
        let (len, rule) = match_cluster_at(self.units, self.unit_index)?;
        let seg = Seg::new(self.unit_index, self.unit_index + len);
        self.unit_index = seg.end_unit_index;

        if DEBUG_SEGMENT_MOD {
            tracing::trace!(message = "✂️ cluster", ?seg, %rule);
        }

        Some(seg)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len().saturating_sub(self.unit_index);
        // A cluster can swallow everything that is left, or be a single code unit.
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for ClusterIter<'_> {}

/// Split `units` into the code unit spans of its grapheme clusters.
#[must_use]
pub fn split_cluster_segs(units: &[u16]) -> Vec<Seg> { ClusterIter::new(units).collect() }

/// Split `units` into grapheme clusters. Empty input gives an empty list, and joining
/// the clusters gives back `units`.
///
/// ```
/// use r3bl_segment::split_clusters;
/// let units: Vec<u16> = "e\u{301}x".encode_utf16().collect();
/// let clusters = split_clusters(&units);
/// assert_eq!(clusters, vec![&units[0..2], &units[2..3]]);
/// ```
#[must_use]
pub fn split_clusters(units: &[u16]) -> Vec<&[u16]> {
    ClusterIter::new(units)
        .map(|seg| seg.get_units(units))
        .collect()
}

/// Convenience for well formed text: encode `text` as `UTF-16`, split it, and decode
/// each cluster back into a [`String`].
#[must_use]
pub fn split_clusters_str(text: &str) -> Vec<String> {
    let units: Vec<u16> = text.encode_utf16().collect();
    split_clusters(&units)
        .into_iter()
        .map(String::from_utf16_lossy)
        .collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("", &[]; "empty")]
    #[test_case("Hello", &["H", "e", "l", "l", "o"]; "ascii")]
    #[test_case("a\r\nb", &["a", "\r\n", "b"]; "crlf")]
    #[test_case("\n\r", &["\n", "\r"]; "lf cr")]
    #[test_case("e\u{301}", &["e\u{301}"]; "combining acute")]
    #[test_case("\u{1F1EC}\u{1F1E7}", &["\u{1F1EC}\u{1F1E7}"]; "flag")]
    #[test_case("\u{1F600}\u{1F600}", &["\u{1F600}", "\u{1F600}"]; "emoji")]
    #[test_case("\u{1100}\u{1161}\u{11A8}a", &["\u{1100}\u{1161}\u{11A8}", "a"]; "hangul")]
    #[test_case("\u{1F64F}\u{1F3FD}!", &["\u{1F64F}\u{1F3FD}", "!"]; "skin tone")]
    #[test_case("世界", &["世", "界"]; "cjk")]
    #[test_case("\u{AC00}\u{301}", &["\u{AC00}\u{301}"]; "precomposed syllable and mark")]
    #[test_case("\u{1100}\u{1161}\u{301}", &["\u{1100}\u{1161}", "\u{301}"];
                "jamo sequence does not take a mark")]
    #[test_case("\u{1F1EC}\u{1F1E7}\u{301}", &["\u{1F1EC}\u{1F1E7}", "\u{301}"];
                "flag does not take a mark")]
    fn test_split_clusters_str(text: &str, expected: &[&str]) {
        assert_eq2!(split_clusters_str(text), expected.to_vec());
    }

    #[test]
    fn test_segs_are_contiguous_and_cover_input() {
        let units: Vec<u16> = "Hi \u{1F44B}\u{1F3FB} caf\u{65}\u{301}\r\n\u{1F1FA}\u{1F1F8}"
            .encode_utf16()
            .collect();
        let segs = split_cluster_segs(&units);

        let mut expected_start = 0;
        for seg in &segs {
            assert_eq2!(seg.start_unit_index, expected_start);
            assert!(seg.unit_len() > 0);
            expected_start = seg.end_unit_index;
        }
        assert_eq2!(expected_start, units.len());

        let rejoined: Vec<u16> = split_clusters(&units).concat();
        assert_eq2!(rejoined, units);
    }

    #[test]
    fn test_never_splits_a_surrogate_pair() {
        let units: Vec<u16> = "\u{10000}\u{1F4A9}\u{10FFFF}".encode_utf16().collect();
        let segs = split_cluster_segs(&units);
        assert_eq2!(segs, vec![Seg::new(0, 2), Seg::new(2, 4), Seg::new(4, 6)]);
    }

    #[test]
    fn test_unpaired_surrogates_pass_through() {
        let units = [0x0061, 0xDC00, 0xD800, 0x0062];
        assert_eq2!(
            split_clusters(&units),
            vec![&units[0..1], &units[1..2], &units[2..3], &units[3..4]]
        );
    }

    #[test]
    fn test_iterator_is_fused() {
        let units: Vec<u16> = "a".encode_utf16().collect();
        let mut iter = ClusterIter::new(&units);
        assert_eq2!(iter.next(), Some(Seg::new(0, 1)));
        assert_eq2!(iter.next(), None);
        assert_eq2!(iter.next(), None);
    }
}
