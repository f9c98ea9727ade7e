// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The "do not break here" rules for grapheme clusters. Each rule is a function that
//! returns how many code units it would keep together starting at a given offset, or
//! [`None`] if it doesn't apply there. See the [module docs](mod@super) for the list.

use strum_macros::{Display, EnumIter};

use crate::{PropertyClass, code_point_at, is_surrogate, matcher_for};

/// The cluster rules, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ClusterRule {
    CrLf,
    Control,
    HangulSyllable,
    RegionalIndicators,
    BaseWithMarks,
    AnyScalar,
}

impl ClusterRule {
    /// Number of code units this rule keeps together at `unit_index`.
    #[must_use]
    pub fn match_at(self, units: &[u16], unit_index: usize) -> Option<usize> {
        match self {
            Self::CrLf => match_cr_lf(units, unit_index),
            Self::Control => match_control(units, unit_index),
            Self::HangulSyllable => match_hangul_syllable(units, unit_index),
            Self::RegionalIndicators => match_regional_indicators(units, unit_index),
            Self::BaseWithMarks => match_base_with_marks(units, unit_index),
            Self::AnyScalar => match_any_scalar(units, unit_index),
        }
    }
}

/// Length (in code units, always `>= 1`) of the grapheme cluster that starts at
/// `unit_index`, and the rule that produced it. [`None`] only when `unit_index` is at or
/// past the end of `units`.
///
/// The longest match wins, and ties go to the rule listed first in [`ClusterRule`].
#[must_use]
pub fn match_cluster_at(units: &[u16], unit_index: usize) -> Option<(usize, ClusterRule)> {
    if unit_index >= units.len() {
        return None;
    }

    let mut best: Option<(usize, ClusterRule)> = None;
    for rule in [
        ClusterRule::CrLf,
        ClusterRule::Control,
        ClusterRule::HangulSyllable,
        ClusterRule::RegionalIndicators,
        ClusterRule::BaseWithMarks,
        ClusterRule::AnyScalar,
    ] {
        if let Some(len) = rule.match_at(units, unit_index) {
            // Strictly greater, so an earlier rule keeps a tie.
            if best.is_none_or(|(best_len, _)| len > best_len) {
                best = Some((len, rule));
            }
        }
    }
    best
}

fn is(class: PropertyClass, units: &[u16], unit_index: usize) -> Option<usize> {
    matcher_for(class).match_at(units, unit_index)
}

/// Consume zero or more consecutive matches of `class`, returning the end offset.
fn run_of(class: PropertyClass, units: &[u16], unit_index: usize) -> usize {
    let matcher = matcher_for(class);
    let mut end = unit_index;
    while let Some(len) = matcher.match_at(units, end) {
        end += len;
    }
    end
}

fn non_empty(start: usize, end: usize) -> Option<usize> { (end > start).then(|| end - start) }

fn match_cr_lf(units: &[u16], unit_index: usize) -> Option<usize> {
    let cr = is(PropertyClass::GraphemeCr, units, unit_index)?;
    let lf = is(PropertyClass::GraphemeLf, units, unit_index + cr)?;
    Some(cr + lf)
}

fn is_control_like(units: &[u16], unit_index: usize) -> Option<usize> {
    is(PropertyClass::GraphemeCr, units, unit_index)
        .or_else(|| is(PropertyClass::GraphemeLf, units, unit_index))
        .or_else(|| is(PropertyClass::GraphemeControl, units, unit_index))
}

fn match_control(units: &[u16], unit_index: usize) -> Option<usize> {
    is_control_like(units, unit_index)
}

fn match_hangul_syllable(units: &[u16], unit_index: usize) -> Option<usize> {
    use PropertyClass::{HangulL, HangulLv, HangulLvt, HangulT, HangulV};

    let after_l = run_of(HangulL, units, unit_index);
    let mut candidates = [None; 5];

    // L* V+ T*
    let after_v = run_of(HangulV, units, after_l);
    if after_v > after_l {
        candidates[0] = non_empty(unit_index, run_of(HangulT, units, after_v));
    }

    // L* LV V* T*
    if let Some(len) = is(HangulLv, units, after_l) {
        let after_v = run_of(HangulV, units, after_l + len);
        candidates[1] = non_empty(unit_index, run_of(HangulT, units, after_v));
    }

    // L* LVT T*
    if let Some(len) = is(HangulLvt, units, after_l) {
        candidates[2] = non_empty(unit_index, run_of(HangulT, units, after_l + len));
    }

    // L+
    candidates[3] = non_empty(unit_index, after_l);

    // T+
    candidates[4] = non_empty(unit_index, run_of(HangulT, units, unit_index));

    candidates.into_iter().flatten().max()
}

fn match_regional_indicators(units: &[u16], unit_index: usize) -> Option<usize> {
    non_empty(
        unit_index,
        run_of(PropertyClass::GraphemeRegionalIndicator, units, unit_index),
    )
}

/// A base is any single scalar value that is not `Control` / `CR` / `LF` and not an
/// unpaired surrogate.
fn match_base_with_marks(units: &[u16], unit_index: usize) -> Option<usize> {
    if is_control_like(units, unit_index).is_some() {
        return None;
    }
    let (code_point, base_len) = code_point_at(units, unit_index)?;
    if base_len == 1 && u16::try_from(code_point).is_ok_and(is_surrogate) {
        return None;
    }

    let marks_start = unit_index + base_len;
    let mut end = marks_start;
    while let Some(len) = is(PropertyClass::GraphemeExtend, units, end)
        .or_else(|| is(PropertyClass::GraphemeSpacingMark, units, end))
    {
        end += len;
    }

    (end > marks_start).then(|| end - unit_index)
}

/// One scalar value (1 or 2 code units), or one unpaired surrogate code unit.
fn match_any_scalar(units: &[u16], unit_index: usize) -> Option<usize> {
    code_point_at(units, unit_index).map(|(_, len)| len)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn utf16(text: &str) -> Vec<u16> { text.encode_utf16().collect() }

    #[test_case("\r\n", 2, ClusterRule::CrLf)]
    #[test_case("\r", 1, ClusterRule::Control)]
    #[test_case("\u{7}x", 1, ClusterRule::Control)]
    #[test_case("\u{1100}\u{1161}\u{11A8}", 3, ClusterRule::HangulSyllable; "l v t")]
    #[test_case("\u{1100}\u{AC00}\u{1161}\u{11A8}", 4, ClusterRule::HangulSyllable; "l lv v t")]
    #[test_case("\u{AC01}\u{11A8}\u{11A8}", 3, ClusterRule::HangulSyllable; "lvt t t")]
    #[test_case("\u{1100}\u{1100}", 2, ClusterRule::HangulSyllable; "l l")]
    #[test_case("\u{11A8}\u{11A8}x", 2, ClusterRule::HangulSyllable; "t t")]
    #[test_case("\u{1F1EC}\u{1F1E7}", 4, ClusterRule::RegionalIndicators)]
    #[test_case("e\u{301}\u{302}", 3, ClusterRule::BaseWithMarks)]
    #[test_case("\u{1F44D}\u{1F3FD}", 4, ClusterRule::BaseWithMarks; "emoji modifier")]
    #[test_case("\u{915}\u{93F}", 2, ClusterRule::BaseWithMarks; "spacing mark")]
    #[test_case("ab", 1, ClusterRule::AnyScalar)]
    #[test_case("\u{1F600}", 2, ClusterRule::AnyScalar)]
    fn test_match_cluster_at(text: &str, len: usize, rule: ClusterRule) {
        assert_eq2!(match_cluster_at(&utf16(text), 0), Some((len, rule)));
    }

    #[test]
    fn test_control_is_never_a_base() {
        let units = utf16("\r\u{301}");
        assert_eq2!(match_cluster_at(&units, 0), Some((1, ClusterRule::Control)));
        assert_eq2!(match_cluster_at(&units, 1), Some((1, ClusterRule::AnyScalar)));
    }

    #[test]
    fn test_hangul_syllable_with_mark_takes_longest_match() {
        // LV followed by a combining mark: the base rule keeps 2, the Hangul rule keeps 1.
        let units = utf16("\u{AC00}\u{301}");
        assert_eq2!(
            match_cluster_at(&units, 0),
            Some((2, ClusterRule::BaseWithMarks))
        );
    }

    #[test]
    fn test_unpaired_surrogates_are_single_units() {
        let units = [0xD83D, 0x0301, 0xDE00];
        assert_eq2!(match_cluster_at(&units, 0), Some((1, ClusterRule::AnyScalar)));
        assert_eq2!(match_cluster_at(&units, 2), Some((1, ClusterRule::AnyScalar)));
    }

    #[test]
    fn test_past_the_end() {
        assert_eq2!(match_cluster_at(&utf16("a"), 1), None);
        assert_eq2!(match_cluster_at(&[], 0), None);
    }
}
