// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

use crate::{PropertyClass, matcher_for};

/// The `Word_Break` property value of a grapheme cluster, taken from its first scalar
/// value. [`WordBreak::Other`] covers everything that is in none of the tables (spaces,
/// most punctuation, ideographs, unpaired surrogates, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum WordBreak {
    Cr,
    Lf,
    Newline,
    Extend,
    Format,
    RegionalIndicator,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    Other,
}

impl WordBreak {
    /// The table backing this value. [`None`] for [`WordBreak::Other`].
    #[must_use]
    pub fn property_class(self) -> Option<PropertyClass> {
        Some(match self {
            Self::Cr => PropertyClass::WordCr,
            Self::Lf => PropertyClass::WordLf,
            Self::Newline => PropertyClass::Newline,
            Self::Extend => PropertyClass::WordExtend,
            Self::Format => PropertyClass::Format,
            Self::RegionalIndicator => PropertyClass::WordRegionalIndicator,
            Self::Katakana => PropertyClass::Katakana,
            Self::HebrewLetter => PropertyClass::HebrewLetter,
            Self::ALetter => PropertyClass::ALetter,
            Self::SingleQuote => PropertyClass::SingleQuote,
            Self::DoubleQuote => PropertyClass::DoubleQuote,
            Self::MidNumLet => PropertyClass::MidNumLet,
            Self::MidLetter => PropertyClass::MidLetter,
            Self::MidNum => PropertyClass::MidNum,
            Self::Numeric => PropertyClass::Numeric,
            Self::ExtendNumLet => PropertyClass::ExtendNumLet,
            Self::Other => return None,
        })
    }

    /// `ALetter` or `HebrewLetter`.
    #[must_use]
    pub fn is_ah_letter(self) -> bool { matches!(self, Self::ALetter | Self::HebrewLetter) }

    /// `CR`, `LF` or `Newline`.
    #[must_use]
    pub fn is_newline(self) -> bool { matches!(self, Self::Cr | Self::Lf | Self::Newline) }

    /// `Extend` or `Format`. These attach to whatever comes before them.
    #[must_use]
    pub fn is_ignorable(self) -> bool { matches!(self, Self::Extend | Self::Format) }

    /// Separators allowed between two letters.
    #[must_use]
    pub fn is_mid_letter_like(self) -> bool {
        matches!(self, Self::MidLetter | Self::MidNumLet | Self::SingleQuote)
    }

    /// Separators allowed between two digits.
    #[must_use]
    pub fn is_mid_num_like(self) -> bool {
        matches!(self, Self::MidNum | Self::MidNumLet | Self::SingleQuote)
    }

    /// What a "word" is made of, when searching with
    /// [`crate::WordSearchOptions::alpha_numeric_only`].
    #[must_use]
    pub fn is_alpha_numeric(self) -> bool {
        matches!(
            self,
            Self::ALetter | Self::Numeric | Self::Katakana | Self::HebrewLetter
        )
    }
}

/// Tag a cluster by the word break class of its first scalar value. The word break
/// tables are disjoint, so at most one class matches.
///
/// ```
/// use r3bl_segment::{WordBreak, word_break_of};
/// let units: Vec<u16> = "7".encode_utf16().collect();
/// assert_eq!(word_break_of(&units), WordBreak::Numeric);
/// ```
#[must_use]
pub fn word_break_of(cluster: &[u16]) -> WordBreak {
    use strum::IntoEnumIterator;

    WordBreak::iter()
        .find(|word_break| {
            word_break
                .property_class()
                .is_some_and(|class| matcher_for(class).match_at(cluster, 0).is_some())
        })
        .unwrap_or(WordBreak::Other)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn tag(text: &str) -> WordBreak {
        let units: Vec<u16> = text.encode_utf16().collect();
        word_break_of(&units)
    }

    #[test_case("\r", WordBreak::Cr)]
    #[test_case("\n", WordBreak::Lf)]
    #[test_case("\u{85}", WordBreak::Newline)]
    #[test_case("\u{2028}", WordBreak::Newline; "line separator")]
    #[test_case("\u{301}", WordBreak::Extend)]
    #[test_case("\u{200D}", WordBreak::Extend; "zwj")]
    #[test_case("\u{AD}", WordBreak::Format)]
    #[test_case("\u{1F1FA}", WordBreak::RegionalIndicator)]
    #[test_case("\u{30A2}", WordBreak::Katakana)]
    #[test_case("\u{5D0}", WordBreak::HebrewLetter)]
    #[test_case("a", WordBreak::ALetter)]
    #[test_case("\u{E9}", WordBreak::ALetter; "latin small e acute")]
    #[test_case("'", WordBreak::SingleQuote)]
    #[test_case("\"", WordBreak::DoubleQuote)]
    #[test_case(".", WordBreak::MidNumLet)]
    #[test_case(":", WordBreak::MidLetter)]
    #[test_case(",", WordBreak::MidNum)]
    #[test_case(";", WordBreak::MidNum; "semicolon")]
    #[test_case("0", WordBreak::Numeric)]
    #[test_case("_", WordBreak::ExtendNumLet)]
    #[test_case(" ", WordBreak::Other; "space")]
    #[test_case("=", WordBreak::Other; "equals")]
    #[test_case("\u{4E16}", WordBreak::Other; "ideograph")]
    #[test_case("\u{1F600}", WordBreak::Other; "emoji")]
    fn test_word_break_of(text: &str, expected: WordBreak) {
        assert_eq2!(tag(text), expected);
    }

    #[test]
    fn test_tags_by_first_scalar_only() {
        assert_eq2!(tag("e\u{301}"), WordBreak::ALetter);
        assert_eq2!(tag("\u{1D7CE}"), WordBreak::Numeric);
    }

    #[test]
    fn test_empty_and_ill_formed_clusters_are_other() {
        assert_eq2!(word_break_of(&[]), WordBreak::Other);
        assert_eq2!(word_break_of(&[0xD800]), WordBreak::Other);
    }

    #[test]
    fn test_every_tag_but_other_has_a_class() {
        use strum::IntoEnumIterator;
        for word_break in WordBreak::iter() {
            assert_eq2!(
                word_break.property_class().is_none(),
                word_break == WordBreak::Other
            );
        }
    }
}
