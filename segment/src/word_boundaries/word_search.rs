// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Searching for the next / previous word boundary, eg: for "move cursor by word" and
//! "select word" in an editor.

use std::ops::Range;

use crate::{DEBUG_SEGMENT_MOD, SegmentedText, is_boundary, word_break_at};

/// Options for [`next_boundary()`], [`prev_boundary()`] and [`word_at()`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WordSearchOptions {
    /// When `false` (the default) every boundary is a stop, so punctuation and runs of
    /// spaces are tokens of their own. When `true` a boundary is only a stop if the
    /// cluster that starts there is a letter or digit (`ALetter`, `Numeric`, `Katakana`,
    /// `HebrewLetter`). That jumps from word start to word start in both directions.
    pub alpha_numeric_only: bool,
}

impl WordSearchOptions {
    /// Stop only at boundaries next to letters and digits.
    #[must_use]
    pub fn words() -> Self {
        Self {
            alpha_numeric_only: true,
        }
    }
}

/// The first boundary after `pos`. When there is none before the end (or `pos` is already
/// at the end) this is `text.len()`.
///
/// ```
/// use r3bl_segment::{TextString, WordSearchOptions, next_boundary};
/// let text = TextString::from("foo, bar");
/// assert_eq!(next_boundary(&text, 1, WordSearchOptions::default()), 3);
/// assert_eq!(next_boundary(&text, 1, WordSearchOptions::words()), 5);
/// ```
#[must_use]
pub fn next_boundary<T>(text: &T, pos: usize, options: WordSearchOptions) -> usize
where
    T: SegmentedText + ?Sized,
{
    let len = text.len();
    let found = (pos.saturating_add(1)..len)
        .find(|&candidate| {
            is_boundary(text, candidate) && accepts(text, candidate, options)
        })
        .unwrap_or(len);

    if DEBUG_SEGMENT_MOD {
        tracing::trace!(message = "⏩ next_boundary", pos, found, ?options);
    }

    found
}

/// The last boundary before `pos`. When there is none after the start (or `pos` is
/// already `0`) this is `0`. A `pos` past the end is treated as `text.len()`.
///
/// ```
/// use r3bl_segment::{TextString, WordSearchOptions, prev_boundary};
/// let text = TextString::from("foo, bar");
/// assert_eq!(prev_boundary(&text, 7, WordSearchOptions::default()), 5);
/// assert_eq!(prev_boundary(&text, 7, WordSearchOptions::words()), 5);
/// assert_eq!(prev_boundary(&text, 5, WordSearchOptions::words()), 0);
/// ```
#[must_use]
pub fn prev_boundary<T>(text: &T, pos: usize, options: WordSearchOptions) -> usize
where
    T: SegmentedText + ?Sized,
{
    let pos = pos.min(text.len());
    let found = (1..pos)
        .rev()
        .find(|&candidate| {
            is_boundary(text, candidate) && accepts(text, candidate, options)
        })
        .unwrap_or(0);

    if DEBUG_SEGMENT_MOD {
        tracing::trace!(message = "⏪ prev_boundary", pos, found, ?options);
    }

    found
}

/// All the cluster ranges between consecutive boundaries. They are non-empty, contiguous,
/// and cover `0..text.len()`. Empty text has none.
///
/// ```
/// use r3bl_segment::{TextString, word_ranges};
/// let text = TextString::from("hi, 3.14");
/// assert_eq!(word_ranges(&text), vec![0..2, 2..3, 3..4, 4..8]);
/// ```
#[must_use]
pub fn word_ranges<T>(text: &T) -> Vec<Range<usize>>
where
    T: SegmentedText + ?Sized,
{
    let len = text.len();
    let mut ranges = vec![];
    let mut start = 0;
    while start < len {
        let end = next_boundary(text, start, WordSearchOptions::default());
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// The range between boundaries that contains cluster `pos`, eg: the word under the
/// cursor for a double click. [`None`] when `pos` is out of bounds, or when
/// `alpha_numeric_only` is set and the range has no letters or digits in it.
///
/// ```
/// use r3bl_segment::{TextString, WordSearchOptions, word_at};
/// let text = TextString::from("foo, bar");
/// assert_eq!(word_at(&text, 6, WordSearchOptions::words()), Some(5..8));
/// assert_eq!(word_at(&text, 4, WordSearchOptions::words()), None);
/// assert_eq!(word_at(&text, 4, WordSearchOptions::default()), Some(4..5));
/// ```
#[must_use]
pub fn word_at<T>(text: &T, pos: usize, options: WordSearchOptions) -> Option<Range<usize>>
where
    T: SegmentedText + ?Sized,
{
    if pos >= text.len() {
        return None;
    }

    let start = (0..=pos)
        .rev()
        .find(|&candidate| is_boundary(text, candidate))
        .unwrap_or(0);
    let end = next_boundary(text, pos, WordSearchOptions::default());
    let range = start..end;

    // Without `alpha_numeric_only` every cluster is accepted.
    range
        .clone()
        .any(|seg_index| accepts(text, seg_index, options))
        .then_some(range)
}

/// With `alpha_numeric_only`, a boundary is a stop only if `seg_index` (the cluster that
/// starts at it) is a letter or digit.
fn accepts<T>(text: &T, seg_index: usize, options: WordSearchOptions) -> bool
where
    T: SegmentedText + ?Sized,
{
    !options.alpha_numeric_only
        || word_break_at(text, seg_index).is_some_and(|it| it.is_alpha_numeric())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{TextString, assert_eq2};

    #[test_case(0, 3)]
    #[test_case(1, 3)]
    #[test_case(3, 4)]
    #[test_case(4, 5)]
    #[test_case(5, 8)]
    #[test_case(8, 8; "at the end")]
    #[test_case(42, 8; "past the end")]
    fn test_next_boundary_tokens(pos: usize, expected: usize) {
        let text = TextString::from("foo, bar");
        assert_eq2!(next_boundary(&text, pos, WordSearchOptions::default()), expected);
    }

    #[test_case(0, 5)]
    #[test_case(1, 5; "inside foo")]
    #[test_case(3, 5)]
    #[test_case(5, 8; "at start of bar")]
    #[test_case(6, 8)]
    fn test_next_boundary_words(pos: usize, expected: usize) {
        let text = TextString::from("foo, bar");
        assert_eq2!(next_boundary(&text, pos, WordSearchOptions::words()), expected);
    }

    #[test_case(8, 5)]
    #[test_case(5, 4)]
    #[test_case(4, 3)]
    #[test_case(2, 0)]
    #[test_case(0, 0; "at the start")]
    #[test_case(42, 5; "past the end")]
    fn test_prev_boundary_tokens(pos: usize, expected: usize) {
        let text = TextString::from("foo, bar");
        assert_eq2!(prev_boundary(&text, pos, WordSearchOptions::default()), expected);
    }

    #[test_case(8, 5; "from the end")]
    #[test_case(6, 5; "inside bar")]
    #[test_case(5, 0; "at start of bar")]
    #[test_case(4, 0; "from the space")]
    #[test_case(3, 0)]
    #[test_case(0, 0; "at the start")]
    fn test_prev_boundary_words(pos: usize, expected: usize) {
        let text = TextString::from("foo, bar");
        assert_eq2!(prev_boundary(&text, pos, WordSearchOptions::words()), expected);
    }

    #[test]
    fn test_word_search_skips_punctuation_only_tail() {
        let text = TextString::from("end. ");
        assert_eq2!(next_boundary(&text, 0, WordSearchOptions::words()), 5);
        assert_eq2!(prev_boundary(&text, 5, WordSearchOptions::words()), 0);
    }

    #[test]
    fn test_word_search_stops_at_word_starts_both_ways() {
        // Boundaries: 0 3 4 5 8 9 10 13. Word starts: 0 5 10.
        let text = TextString::from("foo, bar; baz");
        let options = WordSearchOptions::words();
        assert_eq2!(next_boundary(&text, 0, options), 5);
        assert_eq2!(next_boundary(&text, 5, options), 10);
        assert_eq2!(prev_boundary(&text, 13, options), 10);
        assert_eq2!(prev_boundary(&text, 10, options), 5);
        assert_eq2!(prev_boundary(&text, 5, options), 0);
    }

    #[test]
    fn test_empty_text() {
        let text = TextString::from("");
        let options = WordSearchOptions::words();
        assert_eq2!(next_boundary(&text, 0, options), 0);
        assert_eq2!(prev_boundary(&text, 0, options), 0);
        assert_eq2!(word_ranges(&text), Vec::<Range<usize>>::new());
        assert_eq2!(word_at(&text, 0, options), None);
    }

    #[test]
    fn test_word_ranges_cover_text() {
        let text = TextString::from("It's 1,000\u{1F600}!\r\n\u{30A2}\u{30A4}");
        let ranges = word_ranges(&text);
        assert_eq2!(
            ranges,
            vec![0..4, 4..5, 5..10, 10..11, 11..12, 12..13, 13..15]
        );
    }

    #[test]
    fn test_word_at_multi_unit_clusters() {
        // Clusters: "c" "a" "f" "e\u{301}" " " "\u{1F600}".
        let text = TextString::from("cafe\u{301} \u{1F600}");
        assert_eq2!(word_at(&text, 3, WordSearchOptions::words()), Some(0..4));
        assert_eq2!(word_at(&text, 5, WordSearchOptions::default()), Some(5..6));
        assert_eq2!(word_at(&text, 5, WordSearchOptions::words()), None);
        assert_eq2!(word_at(&text, 6, WordSearchOptions::default()), None);
    }
}
