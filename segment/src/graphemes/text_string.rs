// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`TextString`] is an immutable, cluster indexed view over `UTF-16` text.

use std::{fmt::{Debug, Display, Formatter, Result as FmtResult},
          hash::{Hash, Hasher},
          ops::Range,
          sync::Arc};

use crate::{Seg, SegmentedText, split_cluster_segs};

/// Convenience constructor for [`TextString`].
#[must_use]
pub fn text_string(arg_from: impl Into<TextString>) -> TextString { arg_from.into() }

/// A fixed text, split into grapheme clusters once, and then addressed by cluster index.
///
/// Cloning and [`TextString::substring()`] are cheap: the code units and the [`Seg`] list
/// are shared (via [`Arc`]) between a text and all the substrings taken from it. Nothing
/// is ever mutated after construction.
///
/// ```
/// use r3bl_segment::TextString;
/// let text = TextString::from("ab\u{1F600}");
/// assert_eq!(text.len(), 3);
/// assert_eq!(text.read(2), Some(&[0xD83D_u16, 0xDE00][..]));
/// assert_eq!(text.read(3), None);
/// assert_eq!(text.substring(1, 3).to_string(), "b\u{1F600}");
/// ```
#[derive(Clone)]
pub struct TextString {
    units: Arc<[u16]>,
    /// Code unit spans into `units`, for the whole original text.
    segs: Arc<[Seg]>,
    /// The clusters (indices into `segs`) that this view exposes.
    seg_range: Range<usize>,
}

impl TextString {
    /// Copy `units` and split them into grapheme clusters.
    #[must_use]
    pub fn new(units: &[u16]) -> Self { Self::from(units.to_vec()) }

    /// Number of grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize { self.seg_range.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.seg_range.is_empty() }

    /// The cluster at `seg_index`, or [`None`] if it is out of bounds.
    #[must_use]
    pub fn read(&self, seg_index: usize) -> Option<&[u16]> {
        self.seg_at(seg_index).map(|seg| seg.get_units(&self.units))
    }

    /// The clusters `[start, end)`, clamped to `0..=self.len()`. An inverted range gives
    /// an empty text.
    #[must_use]
    pub fn substring(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        Self {
            units: Arc::clone(&self.units),
            segs: Arc::clone(&self.segs),
            seg_range: self.seg_range.start + start..self.seg_range.start + end,
        }
    }

    /// The code units of all the clusters, joined back together.
    #[must_use]
    pub fn to_text(&self) -> Vec<u16> { self.as_units().to_vec() }

    /// Decode [`Self::to_text()`], replacing unpaired surrogates with `U+FFFD`.
    #[must_use]
    pub fn to_string_lossy(&self) -> String { String::from_utf16_lossy(self.as_units()) }

    /// Number of code units across all the clusters.
    #[must_use]
    pub fn unit_len(&self) -> usize { self.as_units().len() }

    /// The code unit spans of the clusters. Offsets are relative to [`Self::to_text()`].
    pub fn segs(&self) -> impl Iterator<Item = Seg> + '_ {
        let base = self.base_unit_offset();
        self.visible_segs().iter().map(move |seg| {
            Seg::new(seg.start_unit_index - base, seg.end_unit_index - base)
        })
    }

    /// The clusters, in order.
    pub fn iter(&self) -> impl Iterator<Item = &[u16]> + '_ {
        self.visible_segs()
            .iter()
            .map(|seg| seg.get_units(&self.units))
    }

    /// Index of the cluster that contains the code unit at `unit_offset` (relative to
    /// [`Self::to_text()`]). [`None`] when `unit_offset >= self.unit_len()`.
    #[must_use]
    pub fn seg_index_at_unit(&self, unit_offset: usize) -> Option<usize> {
        let target = self.base_unit_offset().checked_add(unit_offset)?;
        let segs = self.visible_segs();
        let seg_index = segs.partition_point(|seg| seg.end_unit_index <= target);
        segs.get(seg_index)
            .filter(|seg| seg.contains_unit(target))
            .map(|_| seg_index)
    }

    /// Code unit offset (relative to [`Self::to_text()`]) where cluster `seg_index`
    /// starts. `self.len()` maps to [`Self::unit_len()`], anything past that is [`None`].
    #[must_use]
    pub fn unit_offset_of(&self, seg_index: usize) -> Option<usize> {
        match seg_index.cmp(&self.len()) {
            std::cmp::Ordering::Less => self
                .seg_at(seg_index)
                .map(|seg| seg.start_unit_index - self.base_unit_offset()),
            std::cmp::Ordering::Equal => Some(self.unit_len()),
            std::cmp::Ordering::Greater => None,
        }
    }

    fn seg_at(&self, seg_index: usize) -> Option<&Seg> { self.visible_segs().get(seg_index) }

    fn visible_segs(&self) -> &[Seg] { &self.segs[self.seg_range.clone()] }

    fn base_unit_offset(&self) -> usize {
        self.visible_segs()
            .first()
            .map_or(/* None */ 0, /* Some */ |seg| seg.start_unit_index)
    }

    fn as_units(&self) -> &[u16] {
        match (self.visible_segs().first(), self.visible_segs().last()) {
            (Some(first), Some(last)) => {
                &self.units[first.start_unit_index..last.end_unit_index]
            }
            _ => &[],
        }
    }
}

impl SegmentedText for TextString {
    fn len(&self) -> usize { TextString::len(self) }

    fn read(&self, seg_index: usize) -> Option<&[u16]> { TextString::read(self, seg_index) }

    fn substring(&self, start: usize, end: usize) -> Self {
        TextString::substring(self, start, end)
    }
}

impl From<Vec<u16>> for TextString {
    fn from(units: Vec<u16>) -> Self {
        let segs: Arc<[Seg]> = split_cluster_segs(&units).into();
        let seg_range = 0..segs.len();
        Self {
            units: units.into(),
            segs,
            seg_range,
        }
    }
}

impl From<&[u16]> for TextString {
    fn from(units: &[u16]) -> Self { Self::new(units) }
}

impl From<&str> for TextString {
    fn from(value: &str) -> Self { Self::from(value.encode_utf16().collect::<Vec<_>>()) }
}

impl From<String> for TextString {
    fn from(value: String) -> Self { Self::from(value.as_str()) }
}

impl From<&String> for TextString {
    fn from(value: &String) -> Self { Self::from(value.as_str()) }
}

impl<'a> IntoIterator for &'a TextString {
    type Item = &'a [u16];
    type IntoIter = Box<dyn Iterator<Item = &'a [u16]> + 'a>;

    fn into_iter(self) -> Self::IntoIter { Box::new(self.iter()) }
}

/// Two texts are equal when they have the same clusters, regardless of what larger text
/// they were cut from.
impl PartialEq for TextString {
    fn eq(&self, other: &Self) -> bool { self.iter().eq(other.iter()) }
}

impl Eq for TextString {}

impl Hash for TextString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for cluster in self {
            cluster.hash(state);
        }
    }
}

impl Debug for TextString {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "TextString({:?}, len: {})", self.to_string_lossy(), self.len())
    }
}

impl Display for TextString {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn utf16(text: &str) -> Vec<u16> { text.encode_utf16().collect() }

    #[test]
    fn test_read_and_len() {
        let text = TextString::from("a\r\nb\u{1F1EC}\u{1F1E7}");
        assert_eq2!(text.len(), 4);
        assert_eq2!(text.read(0), Some(&utf16("a")[..]));
        assert_eq2!(text.read(1), Some(&utf16("\r\n")[..]));
        assert_eq2!(text.read(3), Some(&utf16("\u{1F1EC}\u{1F1E7}")[..]));
        assert_eq2!(text.read(4), None);
        assert_eq2!(text.read(usize::MAX), None);
    }

    #[test]
    fn test_empty() {
        let text = TextString::from("");
        assert!(text.is_empty());
        assert_eq2!(text.read(0), None);
        assert_eq2!(text.to_text(), Vec::<u16>::new());
        assert_eq2!(text.substring(0, 10).len(), 0);
    }

    #[test]
    fn test_to_text_round_trips() {
        let units = utf16("caf\u{65}\u{301} \u{1F469}\u{1F3FE} \u{AC01}");
        let text = TextString::new(&units);
        assert_eq2!(text.to_text(), units);
        assert_eq2!(text.iter().collect::<Vec<_>>().concat(), units);
    }

    #[test]
    fn test_to_text_keeps_unpaired_surrogates() {
        let units = vec![0x0061, 0xD800, 0x0062];
        let text = TextString::from(units.clone());
        assert_eq2!(text.len(), 3);
        assert_eq2!(text.to_text(), units);
        assert_eq2!(text.to_string_lossy(), "a\u{FFFD}b");
    }

    #[test_case(0, 2, "he")]
    #[test_case(1, 4, "\u{65}\u{301}ll")]
    #[test_case(3, 99, "lo")]
    #[test_case(4, 2, ""; "inverted")]
    #[test_case(7, 9, ""; "past the end")]
    fn test_substring(start: usize, end: usize, expected: &str) {
        let text = TextString::from("h\u{65}\u{301}llo");
        let sub = text.substring(start, end);
        assert_eq2!(sub, TextString::from(expected));
        assert_eq2!(sub.to_string(), expected);
        // The receiver is untouched.
        assert_eq2!(text.len(), 5);
    }

    #[test]
    fn test_substring_of_substring() {
        let text = TextString::from("abcdef");
        let inner = text.substring(1, 5).substring(1, 3);
        assert_eq2!(inner.to_string(), "cd");
        assert_eq2!(inner.read(0), Some(&utf16("c")[..]));
        assert_eq2!(inner.read(2), None);
    }

    #[test]
    fn test_unit_offsets_in_substring() {
        // Clusters: "a" | "😀" | "b" | "e\u{301}".
        let text = TextString::from("a\u{1F600}be\u{301}");
        let sub = text.substring(1, 4);
        assert_eq2!(sub.unit_len(), 5);
        assert_eq2!(
            sub.segs().collect::<Vec<_>>(),
            vec![Seg::new(0, 2), Seg::new(2, 3), Seg::new(3, 5)]
        );

        assert_eq2!(sub.seg_index_at_unit(0), Some(0));
        assert_eq2!(sub.seg_index_at_unit(1), Some(0));
        assert_eq2!(sub.seg_index_at_unit(2), Some(1));
        assert_eq2!(sub.seg_index_at_unit(4), Some(2));
        assert_eq2!(sub.seg_index_at_unit(5), None);

        assert_eq2!(sub.unit_offset_of(0), Some(0));
        assert_eq2!(sub.unit_offset_of(2), Some(3));
        assert_eq2!(sub.unit_offset_of(3), Some(5));
        assert_eq2!(sub.unit_offset_of(4), None);
    }

    #[test]
    fn test_equality_ignores_origin() {
        let whole = TextString::from("xyz");
        assert_eq2!(whole.substring(1, 3), TextString::from("yz"));
        assert_ne!(whole.substring(0, 2), TextString::from("yz"));
    }

    #[test]
    fn test_debug_and_display() {
        let text = text_string("hi");
        assert_eq2!(format!("{text}"), "hi");
        assert_eq2!(format!("{text:?}"), "TextString(\"hi\", len: 2)");
    }

    #[test]
    fn test_for_loop() {
        let text = TextString::from("ab");
        let mut count = 0;
        for cluster in &text {
            assert_eq2!(cluster.len(), 1);
            count += 1;
        }
        assert_eq2!(count, 2);
    }
}
