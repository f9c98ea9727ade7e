// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use super::ucd_tables;
use crate::{SegmentError, SegmentResult};

/// Every named scalar range set known to the engine.
///
/// The grapheme break and word break property value sets overlap in name (both have an
/// `Extend`, a `CR`, etc.) but not in content, so each gets its own variant. The display
/// name of a variant is its UCD style name, and [`PropertyClass::from_name()`] accepts
/// the same names.
///
/// ```
/// use r3bl_segment::PropertyClass;
/// let class = PropertyClass::from_name("ALetter").unwrap();
/// assert_eq!(class, PropertyClass::ALetter);
/// assert!(class.contains('x' as u32));
/// assert!(!class.contains('1' as u32));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    EnumCount,
)]
pub enum PropertyClass {
    // Core derived properties.
    #[strum(to_string = "Alphabetic")]
    Alphabetic,
    #[strum(to_string = "M")]
    Mark,
    #[strum(to_string = "Pc")]
    ConnectorPunctuation,

    // Grapheme_Cluster_Break.
    #[strum(to_string = "Grapheme_CR")]
    GraphemeCr,
    #[strum(to_string = "Grapheme_LF")]
    GraphemeLf,
    #[strum(to_string = "Grapheme_Control")]
    GraphemeControl,
    #[strum(to_string = "Grapheme_Extend")]
    GraphemeExtend,
    #[strum(to_string = "Grapheme_Regional_Indicator")]
    GraphemeRegionalIndicator,
    #[strum(to_string = "Grapheme_SpacingMark")]
    GraphemeSpacingMark,
    #[strum(to_string = "L")]
    HangulL,
    #[strum(to_string = "V")]
    HangulV,
    #[strum(to_string = "T")]
    HangulT,
    #[strum(to_string = "LV")]
    HangulLv,
    #[strum(to_string = "LVT")]
    HangulLvt,

    // Word_Break.
    #[strum(to_string = "Word_CR")]
    WordCr,
    #[strum(to_string = "Word_LF")]
    WordLf,
    #[strum(to_string = "Newline")]
    Newline,
    #[strum(to_string = "Word_Extend")]
    WordExtend,
    #[strum(to_string = "Format")]
    Format,
    #[strum(to_string = "Word_Regional_Indicator")]
    WordRegionalIndicator,
    #[strum(to_string = "Katakana")]
    Katakana,
    #[strum(to_string = "HebrewLetter")]
    HebrewLetter,
    #[strum(to_string = "DoubleQuote")]
    DoubleQuote,
    #[strum(to_string = "SingleQuote")]
    SingleQuote,
    #[strum(to_string = "MidNumLet")]
    MidNumLet,
    #[strum(to_string = "MidLetter")]
    MidLetter,
    #[strum(to_string = "MidNum")]
    MidNum,
    #[strum(to_string = "Numeric")]
    Numeric,
    #[strum(to_string = "ExtendNumLet")]
    ExtendNumLet,
    #[strum(to_string = "ALetter")]
    ALetter,
}

impl PropertyClass {
    /// The static range table for this class. Sorted, disjoint, inclusive.
    #[must_use]
    pub fn ranges(self) -> &'static [(u32, u32)] {
        match self {
            Self::Alphabetic => ucd_tables::ALPHABETIC,
            Self::Mark => ucd_tables::MARK,
            Self::ConnectorPunctuation => ucd_tables::CONNECTOR_PUNCTUATION,
            Self::GraphemeCr => ucd_tables::GRAPHEME_CR,
            Self::GraphemeLf => ucd_tables::GRAPHEME_LF,
            Self::GraphemeControl => ucd_tables::GRAPHEME_CONTROL,
            Self::GraphemeExtend => ucd_tables::GRAPHEME_EXTEND,
            Self::GraphemeRegionalIndicator => ucd_tables::GRAPHEME_REGIONAL_INDICATOR,
            Self::GraphemeSpacingMark => ucd_tables::GRAPHEME_SPACING_MARK,
            Self::HangulL => ucd_tables::GRAPHEME_L,
            Self::HangulV => ucd_tables::GRAPHEME_V,
            Self::HangulT => ucd_tables::GRAPHEME_T,
            Self::HangulLv => ucd_tables::GRAPHEME_LV,
            Self::HangulLvt => ucd_tables::GRAPHEME_LVT,
            Self::WordCr => ucd_tables::WORD_CR,
            Self::WordLf => ucd_tables::WORD_LF,
            Self::Newline => ucd_tables::WORD_NEWLINE,
            Self::WordExtend => ucd_tables::WORD_EXTEND,
            Self::Format => ucd_tables::WORD_FORMAT,
            Self::WordRegionalIndicator => ucd_tables::WORD_REGIONAL_INDICATOR,
            Self::Katakana => ucd_tables::WORD_KATAKANA,
            Self::HebrewLetter => ucd_tables::WORD_HEBREW_LETTER,
            Self::DoubleQuote => ucd_tables::WORD_DOUBLE_QUOTE,
            Self::SingleQuote => ucd_tables::WORD_SINGLE_QUOTE,
            Self::MidNumLet => ucd_tables::WORD_MID_NUM_LET,
            Self::MidLetter => ucd_tables::WORD_MID_LETTER,
            Self::MidNum => ucd_tables::WORD_MID_NUM,
            Self::Numeric => ucd_tables::WORD_NUMERIC,
            Self::ExtendNumLet => ucd_tables::WORD_EXTEND_NUM_LET,
            Self::ALetter => ucd_tables::WORD_ALETTER,
        }
    }

    /// Binary search the raw table. The segmentation hot paths go through the compiled
    /// [`crate::Matcher`] instead; this is for diagnostics and tests.
    #[must_use]
    pub fn contains(self, scalar: u32) -> bool {
        self.ranges()
            .binary_search_by(|&(min, max)| {
                if max < scalar {
                    std::cmp::Ordering::Less
                } else if min > scalar {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Look up a class by its UCD style name, eg: `"MidNumLet"`, `"Grapheme_Extend"`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::UnknownPropertyClass`] if no class has that name.
    pub fn from_name(name: &str) -> SegmentResult<Self> {
        Self::from_str(name).map_err(|_| SegmentError::UnknownPropertyClass {
            name: name.to_string(),
        })
    }

    /// Position of this class in declaration order. Used to index per class caches.
    #[must_use]
    pub fn ordinal(self) -> usize { self as usize }

    /// All the grapheme break classes, in declaration order.
    pub fn grapheme_break_classes() -> impl Iterator<Item = Self> {
        Self::iter().filter(|it| {
            (Self::GraphemeCr.ordinal()..=Self::HangulLvt.ordinal()).contains(&it.ordinal())
        })
    }

    /// All the word break classes, in declaration order. Tagging a cluster does not depend
    /// on this order since the word break tables are disjoint.
    pub fn word_break_classes() -> impl Iterator<Item = Self> {
        Self::iter().filter(|it| it.ordinal() >= Self::WordCr.ordinal())
    }
}

#[cfg(test)]
mod tests {
    use strum::EnumCount;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_tables_are_sorted_disjoint_and_scalar() {
        for class in PropertyClass::iter() {
            let ranges = class.ranges();
            assert!(!ranges.is_empty(), "{class} is empty");
            for &(min, max) in ranges {
                assert!(min <= max, "{class}: {min:#X} > {max:#X}");
                assert!(max <= 0x10_FFFF, "{class}: {max:#X} too large");
                assert!(max < 0xD800 || min > 0xDFFF, "{class}: touches surrogates");
            }
            for pair in ranges.windows(2) {
                assert!(pair[0].1 < pair[1].0, "{class}: unsorted or overlapping");
            }
        }
    }

    #[test]
    fn test_word_break_classes_are_disjoint() {
        let classes: Vec<_> = PropertyClass::word_break_classes().collect();
        for (i, lhs) in classes.iter().enumerate() {
            for rhs in &classes[i + 1..] {
                for &(min, max) in lhs.ranges() {
                    assert!(!rhs.contains(min), "{lhs} and {rhs} share {min:#X}");
                    assert!(!rhs.contains(max), "{lhs} and {rhs} share {max:#X}");
                }
            }
        }
    }

    #[test_case(PropertyClass::ALetter, 'a' as u32, true)]
    #[test_case(PropertyClass::ALetter, 0x05D0, false; "hebrew alef is not aletter")]
    #[test_case(PropertyClass::HebrewLetter, 0x05D0, true)]
    #[test_case(PropertyClass::Numeric, '7' as u32, true)]
    #[test_case(PropertyClass::MidNumLet, '.' as u32, true)]
    #[test_case(PropertyClass::MidNum, ',' as u32, true)]
    #[test_case(PropertyClass::MidLetter, ':' as u32, true)]
    #[test_case(PropertyClass::SingleQuote, '\'' as u32, true)]
    #[test_case(PropertyClass::DoubleQuote, '"' as u32, true)]
    #[test_case(PropertyClass::ExtendNumLet, '_' as u32, true)]
    #[test_case(PropertyClass::Katakana, 0x30A2, true)]
    #[test_case(PropertyClass::Katakana, 0x30FB, false; "katakana middle dot")]
    #[test_case(PropertyClass::Katakana, 0xFF65, false; "halfwidth katakana middle dot")]
    #[test_case(PropertyClass::Katakana, 0xFF66, true; "halfwidth wo")]
    #[test_case(PropertyClass::GraphemeExtend, 0x0301, true)]
    #[test_case(PropertyClass::GraphemeRegionalIndicator, 0x1F1EC, true)]
    #[test_case(PropertyClass::GraphemeControl, 0x0007, true)]
    #[test_case(PropertyClass::GraphemeControl, 0x000D, false; "cr has its own class")]
    #[test_case(PropertyClass::HangulLv, 0xAC00, true)]
    #[test_case(PropertyClass::HangulLvt, 0xAC01, true)]
    #[test_case(PropertyClass::Newline, 0x2028, true)]
    fn test_contains(class: PropertyClass, scalar: u32, expected: bool) {
        assert_eq2!(class.contains(scalar), expected);
    }

    #[test]
    fn test_from_name() {
        assert_eq2!(
            PropertyClass::from_name("Grapheme_Extend"),
            Ok(PropertyClass::GraphemeExtend)
        );
        assert_eq2!(PropertyClass::from_name("LVT"), Ok(PropertyClass::HangulLvt));
        assert_eq2!(
            PropertyClass::from_name("Bogus"),
            Err(SegmentError::UnknownPropertyClass {
                name: "Bogus".to_string()
            })
        );
    }

    #[test]
    fn test_names_round_trip() {
        for class in PropertyClass::iter() {
            assert_eq2!(PropertyClass::from_name(class.as_ref()), Ok(class));
        }
    }

    #[test]
    fn test_class_iterators_are_in_declaration_order() {
        let grapheme: Vec<_> = PropertyClass::grapheme_break_classes().collect();
        assert_eq2!(grapheme.first(), Some(&PropertyClass::GraphemeCr));
        assert_eq2!(grapheme.last(), Some(&PropertyClass::HangulLvt));
        assert!(grapheme.windows(2).all(|pair| pair[0] < pair[1]));

        let word: Vec<_> = PropertyClass::word_break_classes().collect();
        assert_eq2!(word.first(), Some(&PropertyClass::WordCr));
        assert_eq2!(word.last(), Some(&PropertyClass::ALetter));
        assert!(word.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_class_partitions() {
        assert_eq2!(PropertyClass::grapheme_break_classes().count(), 11);
        assert_eq2!(PropertyClass::word_break_classes().count(), 16);
        assert_eq2!(PropertyClass::COUNT, 30);
    }
}
