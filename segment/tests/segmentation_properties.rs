// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Property tests for the whole pipeline: matchers, grapheme clusters, [`TextString`],
//! and word boundaries.
//!
//! 1. Splitting is lossless, for any code unit sequence (including unpaired surrogates).
//! 2. No cluster boundary falls between a high surrogate and its low surrogate.
//! 3. `TextString::substring()` agrees with the cluster list.
//! 4. Boundary search always moves, and the ends of the text are boundaries.
//! 5. A compiled matcher accepts exactly the scalar values in its ranges.

use proptest::prelude::*;
use r3bl_segment::{InvalidRangeReason, SegmentError, TextString, WordSearchOptions,
                   compile_matcher, is_boundary, is_high_surrogate, is_low_surrogate,
                   next_boundary, prev_boundary, split_cluster_segs, split_clusters,
                   split_clusters_str, surrogate_pair, word_ranges};

// ── Helpers ─────────────────────────────────────────────────────────────

/// Pieces of text that exercise most of the cluster and word rules.
const SNIPPETS: &[&str] = &[
    "a", "Z", "foo", " ", "  ", ",", ".", "'", "\"", ":", ";", "_", "3", "14", "\r", "\n",
    "\r\n", "\u{85}", "\u{AD}", "\u{200D}", "e\u{301}", "\u{301}", "\u{915}\u{93F}",
    "\u{1100}\u{1161}\u{11A8}", "\u{AC00}", "\u{1F1EC}\u{1F1E7}", "\u{1F1FA}", "\u{1F600}",
    "\u{1F44D}\u{1F3FD}", "\u{30A2}\u{30A4}", "\u{5D0}", "\u{4E16}", "\u{1D7CE}",
];

fn snippet_text() -> impl Strategy<Value = Vec<u16>> {
    proptest::collection::vec(proptest::sample::select(SNIPPETS), 0..24)
        .prop_map(|parts| parts.concat().encode_utf16().collect())
}

/// Any code units at all, biased towards surrogates.
fn raw_units() -> impl Strategy<Value = Vec<u16>> {
    let unit = prop_oneof![
        3 => any::<u16>(),
        1 => 0xD800_u16..=0xDBFF,
        1 => 0xDC00_u16..=0xDFFF,
        1 => 0x0300_u16..=0x036F,
    ];
    proptest::collection::vec(unit, 0..48)
}

fn any_text() -> impl Strategy<Value = Vec<u16>> {
    prop_oneof![snippet_text(), raw_units()]
}

fn bmp_scalar() -> impl Strategy<Value = u32> {
    prop_oneof![0_u32..0xD800, 0xE000_u32..0x1_0000]
}

// ═════════════════════════════════════════════════════════════════════════
// 1 & 2. Splitting is lossless and respects surrogate pairs
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn split_round_trips(units in any_text()) {
        prop_assert_eq!(split_clusters(&units).concat(), units);
    }

    #[test]
    fn clusters_are_non_empty_and_contiguous(units in any_text()) {
        let mut expected_start = 0;
        for seg in split_cluster_segs(&units) {
            prop_assert_eq!(seg.start_unit_index, expected_start);
            prop_assert!(seg.unit_len() > 0);
            expected_start = seg.end_unit_index;
        }
        prop_assert_eq!(expected_start, units.len());
    }

    #[test]
    fn no_boundary_inside_a_surrogate_pair(units in any_text()) {
        for seg in split_cluster_segs(&units) {
            let end = seg.end_unit_index;
            if end < units.len() {
                prop_assert!(
                    !(is_high_surrogate(units[end - 1]) && is_low_surrogate(units[end])),
                    "split a pair at {} in {:04X?}", end, units
                );
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. TextString
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn text_string_matches_clusters(
        units in any_text(),
        start in 0_usize..32,
        end in 0_usize..32,
    ) {
        let clusters = split_clusters(&units);
        let text = TextString::new(&units);

        prop_assert_eq!(text.len(), clusters.len());
        prop_assert_eq!(text.to_text(), units.clone());
        for (index, cluster) in clusters.iter().enumerate() {
            prop_assert_eq!(text.read(index), Some(*cluster));
        }
        prop_assert_eq!(text.read(clusters.len()), None);

        let sub = text.substring(start, end);
        let end = end.min(clusters.len());
        let start = start.min(end);
        prop_assert_eq!(sub.len(), end - start);
        prop_assert_eq!(sub.to_text(), clusters[start..end].concat());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Word boundaries
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn boundary_search_always_moves(units in any_text(), words in any::<bool>()) {
        let text = TextString::new(&units);
        let len = text.len();
        let options = WordSearchOptions { alpha_numeric_only: words };

        for pos in 0..=len {
            let next = next_boundary(&text, pos, options);
            let prev = prev_boundary(&text, pos, options);
            if pos < len {
                prop_assert!(next > pos && next <= len);
            } else {
                prop_assert_eq!(next, len);
            }
            if pos > 0 {
                prop_assert!(prev < pos);
            } else {
                prop_assert_eq!(prev, 0);
            }
        }
    }

    #[test]
    fn token_search_lands_on_boundaries(units in snippet_text()) {
        let text = TextString::new(&units);
        for pos in 0..=text.len() {
            let options = WordSearchOptions::default();
            prop_assert!(is_boundary(&text, next_boundary(&text, pos, options)));
            prop_assert!(is_boundary(&text, prev_boundary(&text, pos, options)));
        }
    }

    #[test]
    fn ends_are_boundaries_and_ranges_cover(units in any_text()) {
        let text = TextString::new(&units);
        prop_assert!(is_boundary(&text, 0));
        prop_assert!(is_boundary(&text, text.len()));

        let mut expected_start = 0;
        for range in word_ranges(&text) {
            prop_assert_eq!(range.start, expected_start);
            prop_assert!(range.end > range.start);
            expected_start = range.end;
        }
        prop_assert_eq!(expected_start, text.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Matchers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn supplementary_range_membership(
        a in 0x1_0000_u32..=0x10_FFFF,
        b in 0x1_0000_u32..=0x10_FFFF,
        probe in 0x1_0000_u32..=0x10_FFFF,
    ) {
        let (min, max) = (a.min(b), a.max(b));
        let matcher = compile_matcher([min..=max]).unwrap();
        prop_assert_eq!(matcher.contains_scalar(probe), (min..=max).contains(&probe));
        prop_assert!(matcher.contains_scalar(min));
        prop_assert!(matcher.contains_scalar(max));
    }

    #[test]
    fn bmp_range_membership(a in bmp_scalar(), b in bmp_scalar(), probe in bmp_scalar()) {
        let (min, max) = (a.min(b), a.max(b));
        match compile_matcher([min..=max]) {
            Ok(matcher) => {
                prop_assert_eq!(matcher.contains_scalar(probe), (min..=max).contains(&probe));
            }
            // The range spans the surrogate band.
            Err(error) => {
                prop_assert!(min < 0xD800 && max >= 0xE000, "{}", error);
            }
        }
    }

    #[test]
    fn matcher_never_matches_a_lone_half(scalar in 0x1_0000_u32..=0x10_FFFF) {
        let matcher = compile_matcher([0x1_0000_u32..=0x10_FFFF]).unwrap();
        let (high, low) = surrogate_pair(scalar).unwrap();
        prop_assert_eq!(matcher.match_at(&[high, low], 0), Some(2));
        prop_assert_eq!(matcher.match_at(&[high], 0), None);
        prop_assert_eq!(matcher.match_at(&[low], 0), None);
        prop_assert_eq!(matcher.match_at(&[low, high], 0), None);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Fixed examples
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn crlf_is_one_cluster() {
    assert_eq!(split_clusters_str("a\r\nb"), vec!["a", "\r\n", "b"]);
}

#[test]
fn combining_mark_attaches_to_base() {
    assert_eq!(split_clusters_str("e\u{301}"), vec!["e\u{301}"]);
}

#[test]
fn flag_is_one_cluster() {
    let units = [0xD83C, 0xDDEC, 0xD83C, 0xDDE7];
    assert_eq!(split_clusters(&units), vec![&units[..]]);
}

#[test]
fn digits_glue_across_separators() {
    let text = TextString::from("3.14");
    assert!((1..4).all(|pos| !is_boundary(&text, pos)));

    let text = TextString::from("x=3.14;");
    let boundaries: Vec<usize> =
        (0..=text.len()).filter(|&pos| is_boundary(&text, pos)).collect();
    assert_eq!(boundaries, vec![0, 1, 2, 6, 7]);
}

#[test]
fn range_compiler_validation() {
    assert_eq!(
        compile_matcher([0xD800_u32..=0xD900]),
        Err(SegmentError::InvalidRange {
            min: 0xD800,
            max: 0xD900,
            reason: InvalidRangeReason::OverlapsSurrogates,
        })
    );

    let matcher = compile_matcher([0x1_0000_u32..=0x1_0200]).unwrap();
    for scalar in 0x1_0000..=0x1_0200 {
        let (high, low) = surrogate_pair(scalar).unwrap();
        assert_eq!(matcher.match_at(&[high, low], 0), Some(2), "{scalar:#X}");
    }
    assert!(!matcher.contains_scalar(0xFFFF));
    assert!(!matcher.contains_scalar(0x1_0201));
}

#[test]
fn alpha_numeric_search_skips_punctuation() {
    let text = TextString::from("foo, bar");
    assert_eq!(next_boundary(&text, 1, WordSearchOptions::words()), 5);
    assert_eq!(next_boundary(&text, 1, WordSearchOptions::default()), 3);
}
