// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The boundary decision procedure. Positions are cluster indices: `pos` is the gap
//! between cluster `pos - 1` and cluster `pos`.

use crate::{SegmentedText, WordBreak, word_break_of};

/// Word break tag of the cluster at `seg_index`, or [`None`] when it is out of bounds.
#[must_use]
pub fn word_break_at<T>(text: &T, seg_index: usize) -> Option<WordBreak>
where
    T: SegmentedText + ?Sized,
{
    text.read(seg_index).map(word_break_of)
}

/// Whether there is a word boundary at cluster position `pos`.
///
/// The start and end of the text (and anything past the end) are always boundaries.
///
/// ```
/// use r3bl_segment::{TextString, is_boundary};
/// let text = TextString::from("x=3.14;");
/// let boundaries: Vec<usize> = (0..=text.len()).filter(|&p| is_boundary(&text, p)).collect();
/// assert_eq!(boundaries, vec![0, 1, 2, 6, 7]);
/// ```
#[must_use]
pub fn is_boundary<T>(text: &T, pos: usize) -> bool
where
    T: SegmentedText + ?Sized,
{
    if pos == 0 || pos >= text.len() {
        return true;
    }

    let (Some(left_raw), Some(right)) = (word_break_at(text, pos - 1), word_break_at(text, pos))
    else {
        return true;
    };

    // CR LF.
    if left_raw == WordBreak::Cr && right == WordBreak::Lf {
        return false;
    }

    // Around newlines.
    if left_raw.is_newline() || right.is_newline() {
        return true;
    }

    // Extend and Format attach to whatever precedes them.
    if right.is_ignorable() {
        return false;
    }

    // Collapse a run of Extend / Format into the base on its left.
    let Some(left_index) = skip_ignorable_left(text, pos - 1) else {
        return true;
    };
    let Some(left) = word_break_at(text, left_index) else {
        return true;
    };
    let left2 = left_index
        .checked_sub(1)
        .and_then(|index| skip_ignorable_left(text, index))
        .and_then(|index| word_break_at(text, index));
    let right2 =
        skip_ignorable_right(text, pos + 1).and_then(|index| word_break_at(text, index));

    !is_glued(left2, left, right, right2)
}

/// The rules that keep `left` and `right` together. `left2` and `right2` are the next
/// non ignorable tags further out, if any.
fn is_glued(
    left2: Option<WordBreak>,
    left: WordBreak,
    right: WordBreak,
    right2: Option<WordBreak>,
) -> bool {
    use WordBreak::{DoubleQuote, ExtendNumLet, HebrewLetter, Katakana, Numeric,
                    RegionalIndicator, SingleQuote};

    let left2_is = |pred: fn(WordBreak) -> bool| left2.is_some_and(pred);
    let right2_is = |pred: fn(WordBreak) -> bool| right2.is_some_and(pred);

    // Letters.
    if left.is_ah_letter() && right.is_ah_letter() {
        return true;
    }
    if left.is_ah_letter() && right.is_mid_letter_like() && right2_is(WordBreak::is_ah_letter)
    {
        return true;
    }
    if left2_is(WordBreak::is_ah_letter) && left.is_mid_letter_like() && right.is_ah_letter()
    {
        return true;
    }

    // Hebrew quotes.
    if left == HebrewLetter && right == SingleQuote {
        return true;
    }
    if left == HebrewLetter && right == DoubleQuote && right2 == Some(HebrewLetter) {
        return true;
    }
    if left2 == Some(HebrewLetter) && left == DoubleQuote && right == HebrewLetter {
        return true;
    }

    // Digits, and digits next to letters.
    let is_num = |it: WordBreak| it == Numeric;
    if (is_num(left) || left.is_ah_letter()) && is_num(right) {
        return true;
    }
    if is_num(left) && right.is_ah_letter() {
        return true;
    }

    // Decimal and thousands separators.
    if left2 == Some(Numeric) && left.is_mid_num_like() && is_num(right) {
        return true;
    }
    if is_num(left) && right.is_mid_num_like() && right2 == Some(Numeric) {
        return true;
    }

    if left == Katakana && right == Katakana {
        return true;
    }

    // Connector punctuation, eg: `snake_case`.
    let joins_extend_num_let = |it: WordBreak| it.is_ah_letter() || it == Numeric || it == Katakana;
    if (joins_extend_num_let(left) || left == ExtendNumLet) && right == ExtendNumLet {
        return true;
    }
    if left == ExtendNumLet && joins_extend_num_let(right) {
        return true;
    }

    left == RegionalIndicator && right == RegionalIndicator
}

/// Walk left from `seg_index` (inclusive) past `Extend` / `Format` clusters. [`None`] if
/// the walk runs off the start.
fn skip_ignorable_left<T>(text: &T, seg_index: usize) -> Option<usize>
where
    T: SegmentedText + ?Sized,
{
    let mut index = seg_index;
    loop {
        if !word_break_at(text, index)?.is_ignorable() {
            return Some(index);
        }
        index = index.checked_sub(1)?;
    }
}

/// Walk right from `seg_index` (inclusive) past `Extend` / `Format` clusters. [`None`] if
/// the walk runs off the end.
fn skip_ignorable_right<T>(text: &T, seg_index: usize) -> Option<usize>
where
    T: SegmentedText + ?Sized,
{
    (seg_index..text.len())
        .find(|&index| word_break_at(text, index).is_some_and(|it| !it.is_ignorable()))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{TextString, assert_eq2};

    fn boundaries(text: &str) -> Vec<usize> {
        let text = TextString::from(text);
        (0..=text.len()).filter(|&pos| is_boundary(&text, pos)).collect()
    }

    #[test_case("", &[0]; "empty")]
    #[test_case("hello world", &[0, 5, 6, 11]; "two words")]
    #[test_case("3.14", &[0, 4]; "decimal")]
    #[test_case("x=3.14;", &[0, 1, 2, 6, 7]; "assignment")]
    #[test_case("1,000", &[0, 5]; "thousands")]
    #[test_case("can't", &[0, 5]; "apostrophe")]
    #[test_case("e.g.", &[0, 3, 4]; "abbreviation")]
    #[test_case("a:b", &[0, 3]; "mid letter")]
    #[test_case("a:", &[0, 1, 2]; "trailing mid letter")]
    #[test_case("3.", &[0, 1, 2]; "trailing decimal point")]
    #[test_case("abc123", &[0, 6]; "letters and digits")]
    #[test_case("snake_case_1", &[0, 12]; "extend num let")]
    #[test_case("_", &[0, 1]; "lone underscore")]
    #[test_case("\u{30A2}\u{30A4}\u{30A6}", &[0, 3]; "katakana")]
    #[test_case("\u{30A2}\u{30FB}\u{30A4}", &[0, 1, 2, 3]; "katakana middle dot")]
    #[test_case("\u{30B8}\u{30E7}\u{30F3}\u{30FB}\u{30B9}\u{30DF}\u{30B9}", &[0, 3, 4, 7];
                "katakana name with middle dot")]
    #[test_case("\u{FF71}\u{FF65}\u{FF72}", &[0, 1, 2, 3]; "halfwidth katakana middle dot")]
    #[test_case("\u{5D0}'", &[0, 2]; "hebrew single quote")]
    #[test_case("\u{5D0}\"\u{5D1}", &[0, 3]; "hebrew double quote")]
    #[test_case("a\"b", &[0, 1, 2, 3]; "latin double quote")]
    #[test_case("a\r\nb", &[0, 1, 2, 3]; "crlf")]
    #[test_case("a\n\nb", &[0, 1, 2, 3, 4]; "two newlines")]
    #[test_case("a\u{85}b", &[0, 1, 2, 3]; "next line")]
    #[test_case("a\u{2028}b", &[0, 1, 2, 3]; "line separator")]
    #[test_case("\u{1F1EC}\u{AD}\u{1F1E7}", &[0, 3]; "regional indicators across format")]
    #[test_case("foo, bar", &[0, 3, 4, 5, 8]; "comma")]
    #[test_case("\u{4E16}\u{754C}", &[0, 1, 2]; "ideographs")]
    fn test_is_boundary(text: &str, expected: &[usize]) {
        assert_eq2!(boundaries(text), expected.to_vec());
    }

    #[test]
    fn test_format_is_transparent() {
        // Soft hyphen inside a word, and between digits.
        assert_eq2!(boundaries("ab\u{AD}cd"), vec![0, 5]);
        assert_eq2!(boundaries("1\u{AD}.\u{AD}5"), vec![0, 5]);
    }

    #[test]
    fn test_extend_after_newline_collapses_onto_the_newline() {
        // "\n" | "\u{301}" | "a": the mark is its own cluster. Its effective left tag is
        // `LF`, which glues to nothing.
        assert_eq2!(boundaries("\n\u{301}a"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_leading_format_is_a_boundary() {
        // The soft hyphen is its own cluster at the start. Walking left from it runs off
        // the start, so the position after it is a boundary.
        assert_eq2!(boundaries("\u{AD}a"), vec![0, 1, 2]);
    }

    #[test]
    fn test_past_the_end_is_a_boundary() {
        let text = TextString::from("ab");
        assert!(is_boundary(&text, 2));
        assert!(is_boundary(&text, 99));
    }

    #[test]
    fn test_word_break_at_out_of_bounds_is_none() {
        let text = TextString::from("a");
        assert_eq2!(word_break_at(&text, 0), Some(WordBreak::ALetter));
        assert_eq2!(word_break_at(&text, 1), None);
    }

    #[test]
    fn test_regional_indicator_pair_over_pre_split_clusters() {
        // Each flag half is handed in as its own cluster.
        let clusters: Vec<Vec<u16>> = ["\u{1F1EC}", "\u{1F1E7}", "a"]
            .iter()
            .map(|it| it.encode_utf16().collect())
            .collect();
        assert!(!is_boundary(&clusters, 1));
        assert!(is_boundary(&clusters, 2));
    }

    #[test]
    fn test_works_over_any_backing_store() {
        let clusters: Vec<Vec<u16>> = ["3", ".", "1", "4", " ", "x"]
            .iter()
            .map(|it| it.encode_utf16().collect())
            .collect();
        let found: Vec<usize> = (0..=clusters.len())
            .filter(|&pos| is_boundary(&clusters, pos))
            .collect();
        assert_eq2!(found, vec![0, 4, 5, 6]);
    }
}
