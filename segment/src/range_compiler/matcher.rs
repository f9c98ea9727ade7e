// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult, Write as _};

use super::{SurrogateBox, is_high_surrogate, is_low_surrogate, surrogate_boxes_for,
            surrogate_pair};
use crate::{ScalarRange, SegmentResult};

/// A compiled set of scalar values that tests UTF-16 code unit sequences.
///
/// Built by [`compile_matcher()`]. The three parts are tried as an ordered disjunction:
/// the BMP class, then the surrogate boxes, then the literal supplementary pairs. See the
/// [module docs](mod@super) for how ranges become boxes.
///
/// ```
/// use r3bl_segment::compile_matcher;
/// let matcher = compile_matcher([0x41_u32..=0x5A, 0x1_F600..=0x1_F64F]).unwrap();
/// let text: Vec<u16> = "A😀a".encode_utf16().collect();
/// assert_eq!(matcher.match_at(&text, 0), Some(1));
/// assert_eq!(matcher.match_at(&text, 1), Some(2));
/// // The low half of the pair on its own never matches.
/// assert_eq!(matcher.match_at(&text, 2), None);
/// assert_eq!(matcher.match_at(&text, 3), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matcher {
    bmp_class: Vec<(u16, u16)>,
    surrogate_boxes: Vec<SurrogateBox>,
    supplementary_singles: Vec<(u16, u16)>,
}

/// Compile a list of scalar ranges and single values into a [`Matcher`].
///
/// Ranges may be given in any order and may overlap each other. A range that straddles
/// `U+FFFF` is split between the BMP class and the surrogate boxes.
///
/// # Errors
///
/// Returns [`crate::SegmentError::InvalidRange`] for the first range that is inverted,
/// goes past `U+10FFFF`, or touches the surrogate band.
pub fn compile_matcher<I, R>(ranges: I) -> SegmentResult<Matcher>
where
    I: IntoIterator<Item = R>,
    R: Into<ScalarRange>,
{
    let mut bmp_class = vec![];
    let mut surrogate_boxes = vec![];
    let mut supplementary_singles = vec![];

    for range in ranges {
        let range: ScalarRange = range.into();
        range.validate()?;

        let (bmp_part, supplementary_part) = range.split_at_supplementary();

        if let Some(bmp_part) = bmp_part {
            bmp_class.push((to_code_unit(bmp_part.min), to_code_unit(bmp_part.max)));
        }

        if let Some(supplementary_part) = supplementary_part {
            if supplementary_part.is_single() {
                supplementary_singles.extend(surrogate_pair(supplementary_part.min));
            } else {
                surrogate_boxes.extend(surrogate_boxes_for(
                    supplementary_part.min,
                    supplementary_part.max,
                ));
            }
        }
    }

    supplementary_singles.sort_unstable();
    supplementary_singles.dedup();

    Ok(Matcher {
        bmp_class: merge_intervals(bmp_class),
        surrogate_boxes,
        supplementary_singles,
    })
}

/// Only called with validated BMP values.
#[allow(clippy::cast_possible_truncation)]
fn to_code_unit(scalar: u32) -> u16 { scalar as u16 }

fn merge_intervals(mut intervals: Vec<(u16, u16)>) -> Vec<(u16, u16)> {
    intervals.sort_unstable();
    let mut merged: Vec<(u16, u16)> = Vec::with_capacity(intervals.len());
    for (min, max) in intervals {
        match merged.last_mut() {
            Some(last) if u32::from(min) <= u32::from(last.1) + 1 => {
                last.1 = last.1.max(max);
            }
            _ => merged.push((min, max)),
        }
    }
    merged
}

impl Matcher {
    /// Try to match the scalar value that starts at `index`.
    ///
    /// Returns the number of code units consumed (1 for BMP, 2 for a surrogate pair), or
    /// [`None`] if the value is not in the set, `index` is out of bounds, or `index`
    /// points at an unpaired surrogate.
    #[must_use]
    pub fn match_at(&self, units: &[u16], index: usize) -> Option<usize> {
        let first = *units.get(index)?;

        if is_high_surrogate(first) {
            let second = *units.get(index + 1)?;
            if !is_low_surrogate(second) {
                return None;
            }
            return self.matches_pair(first, second).then_some(2);
        }

        if is_low_surrogate(first) {
            return None;
        }

        self.matches_bmp(first).then_some(1)
    }

    /// `true` if `units` is exactly one scalar value and it is in the set.
    #[must_use]
    pub fn is_match(&self, units: &[u16]) -> bool {
        self.match_at(units, 0) == Some(units.len())
    }

    /// Membership test by scalar value.
    #[must_use]
    pub fn contains_scalar(&self, scalar: u32) -> bool {
        match surrogate_pair(scalar) {
            Some((high, low)) => self.matches_pair(high, low),
            None => match u16::try_from(scalar) {
                Ok(unit) if !is_high_surrogate(unit) && !is_low_surrogate(unit) => {
                    self.matches_bmp(unit)
                }
                _ => false,
            },
        }
    }

    fn matches_bmp(&self, unit: u16) -> bool {
        let idx = self.bmp_class.partition_point(|&(_, max)| max < unit);
        self.bmp_class
            .get(idx)
            .is_some_and(|&(min, _)| min <= unit)
    }

    fn matches_pair(&self, high: u16, low: u16) -> bool {
        self.surrogate_boxes.iter().any(|it| it.contains(high, low))
            || self.supplementary_singles.binary_search(&(high, low)).is_ok()
    }

    #[must_use]
    pub fn bmp_class(&self) -> &[(u16, u16)] { &self.bmp_class }

    #[must_use]
    pub fn surrogate_boxes(&self) -> &[SurrogateBox] { &self.surrogate_boxes }

    #[must_use]
    pub fn supplementary_singles(&self) -> &[(u16, u16)] { &self.supplementary_singles }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bmp_class.is_empty()
            && self.surrogate_boxes.is_empty()
            && self.supplementary_singles.is_empty()
    }

    /// Render the matcher as regular expression source over UTF-16 code units, eg:
    /// `[A-Z]|\uD800[\uDC00-\uDE00]`. Used for logs and diagnostics.
    #[must_use]
    pub fn pattern(&self) -> String { self.to_string() }
}

impl Display for Matcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut alternatives: Vec<String> = vec![];

        match self.bmp_class.as_slice() {
            [] => {}
            [(min, max)] if min == max => alternatives.push(escape(*min)),
            class => alternatives.push(bracket(class)),
        }

        for it in &self.surrogate_boxes {
            alternatives.push(format!(
                "{}{}",
                interval_atom(it.high),
                interval_atom(it.low)
            ));
        }

        for (high, low) in &self.supplementary_singles {
            alternatives.push(format!("{}{}", escape(*high), escape(*low)));
        }

        if alternatives.is_empty() {
            // Matches nothing.
            return write!(f, "[]");
        }

        write!(f, "{}", alternatives.join("|"))
    }
}

fn escape(unit: u16) -> String { format!("\\u{unit:04X}") }

fn bracket(class: &[(u16, u16)]) -> String {
    let mut acc = String::from("[");
    for &(min, max) in class {
        if min == max {
            acc.push_str(&escape(min));
        } else {
            let _ = write!(acc, "{}-{}", escape(min), escape(max));
        }
    }
    acc.push(']');
    acc
}

fn interval_atom(interval: (u16, u16)) -> String {
    if interval.0 == interval.1 {
        escape(interval.0)
    } else {
        bracket(&[interval])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InvalidRangeReason, SegmentError, assert_eq2};

    fn utf16(scalar: u32) -> Vec<u16> {
        let ch = char::from_u32(scalar).unwrap();
        let mut buf = [0_u16; 2];
        ch.encode_utf16(&mut buf).to_vec()
    }

    #[test]
    fn test_rejects_surrogate_band() {
        assert_eq2!(
            compile_matcher([0xD800_u32..=0xD900]),
            Err(SegmentError::InvalidRange {
                min: 0xD800,
                max: 0xD900,
                reason: InvalidRangeReason::OverlapsSurrogates,
            })
        );
    }

    #[test]
    fn test_rejects_first_bad_range_in_list() {
        let result = compile_matcher([(0x41_u32, 0x5A_u32), (0x7A, 0x61)]);
        assert!(matches!(
            result,
            Err(SegmentError::InvalidRange {
                reason: InvalidRangeReason::Inverted,
                ..
            })
        ));
    }

    #[test]
    fn test_supplementary_span_accepts_every_value_and_rejects_neighbors() {
        let matcher = compile_matcher([0x1_0000_u32..=0x1_0200]).unwrap();
        for scalar in 0x1_0000..=0x1_0200 {
            assert!(matcher.is_match(&utf16(scalar)), "{scalar:#X}");
        }
        assert!(!matcher.is_match(&utf16(0xFFFF)));
        assert!(!matcher.is_match(&utf16(0x1_0201)));
    }

    #[test]
    fn test_three_box_span() {
        let matcher = compile_matcher([0x1_03F0_u32..=0x1_0C05]).unwrap();
        assert_eq2!(matcher.surrogate_boxes().len(), 3);
        for scalar in [0x1_03F0, 0x1_03FF, 0x1_0400, 0x1_0800, 0x1_0C00, 0x1_0C05] {
            assert!(matcher.contains_scalar(scalar), "{scalar:#X}");
        }
        for scalar in [0x1_03EF, 0x1_0C06, 0x1_03F0 - 0x400] {
            assert!(!matcher.contains_scalar(scalar), "{scalar:#X}");
        }
    }

    #[test]
    fn test_bmp_class_is_merged() {
        let matcher = compile_matcher([
            (0x61_u32, 0x7A_u32),
            (0x41, 0x5A),
            (0x5B, 0x5B),
            (0x50, 0x60),
        ])
        .unwrap();
        assert_eq2!(matcher.bmp_class(), &[(0x41, 0x7A)]);
        assert!(matcher.contains_scalar('q' as u32));
        assert!(!matcher.contains_scalar('{' as u32));
    }

    #[test]
    fn test_straddling_range_is_split() {
        let matcher = compile_matcher([0xFFF0_u32..=0x1_0010]).unwrap();
        assert_eq2!(matcher.bmp_class(), &[(0xFFF0, 0xFFFF)]);
        assert_eq2!(matcher.surrogate_boxes().len(), 1);
        assert!(matcher.contains_scalar(0xFFFF));
        assert!(matcher.contains_scalar(0x1_0000));
        assert!(matcher.contains_scalar(0x1_0010));
        assert!(!matcher.contains_scalar(0x1_0011));
    }

    #[test]
    fn test_never_splits_a_pair() {
        // The class contains every BMP value except the surrogates.
        let matcher = compile_matcher([0x0_u32..=0xD7FF, 0xE000..=0xFFFF]).unwrap();
        let units = utf16(0x1_F600);
        assert_eq2!(matcher.match_at(&units, 0), None);
        assert_eq2!(matcher.match_at(&units, 1), None);
        // An unpaired high surrogate at the end of input.
        assert_eq2!(matcher.match_at(&[0x61, 0xD83D], 1), None);
    }

    #[test]
    fn test_supplementary_singles() {
        let matcher = compile_matcher([0x1_F1EC_u32, 0x1_F1E7, 0x1_F1EC]).unwrap();
        assert_eq2!(
            matcher.supplementary_singles(),
            &[(0xD83C, 0xDDE7), (0xD83C, 0xDDEC)]
        );
        assert!(matcher.is_match(&utf16(0x1_F1E7)));
        assert!(!matcher.is_match(&utf16(0x1_F1E8)));
    }

    #[test]
    fn test_pattern() {
        let matcher = compile_matcher([
            ScalarRange::new(0x41, 0x5A),
            ScalarRange::single(0x5F),
            ScalarRange::new(0x1_0000, 0x1_0200),
            ScalarRange::single(0x1_F1EC),
        ])
        .unwrap();
        assert_eq2!(
            matcher.pattern(),
            "[\\u0041-\\u005A\\u005F]|\\uD800[\\uDC00-\\uDE00]|\\uD83C\\uDDEC"
        );
    }

    #[test]
    fn test_pattern_lone_bmp_value_is_unbracketed() {
        let matcher = compile_matcher([0x27_u32]).unwrap();
        assert_eq2!(matcher.pattern(), "\\u0027");
    }

    #[test]
    fn test_empty_matcher() {
        let matcher = compile_matcher(Vec::<ScalarRange>::new()).unwrap();
        assert!(matcher.is_empty());
        assert_eq2!(matcher.pattern(), "[]");
        assert_eq2!(matcher.match_at(&[0x41], 0), None);
    }
}
