// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for the segmentation engine. See [`SegmentError`] for details.
//!
//! Only construction time problems are errors. Reading past either end of a
//! [`crate::TextString`] is not a fault, and is represented by [`None`] instead.

use strum_macros::Display;

/// Type alias for results produced by this crate.
pub type SegmentResult<T> = Result<T, SegmentError>;

/// Errors from [`crate::compile_matcher()`] and class name lookups.
///
/// | Variant                  | Cause                                              | Recoverable? |
/// | :----------------------- | :------------------------------------------------- | :----------- |
/// | [`InvalidRange`]         | A hand authored range list is malformed            | No           |
/// | [`UnknownPropertyClass`] | [`crate::PropertyClass`] name lookup found nothing | No           |
///
/// [`InvalidRange`]: Self::InvalidRange
/// [`UnknownPropertyClass`]: Self::UnknownPropertyClass
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SegmentError {
    /// A scalar range can't be compiled into a matcher.
    #[error("Invalid scalar range [{min:#06X}, {max:#06X}]: {reason}")]
    #[diagnostic(
        code(r3bl_segment::range_compiler::invalid_range),
        help(
            "Ranges must satisfy min <= max <= 0x10FFFF and must not touch the \
             surrogate band 0xD800..=0xDFFF"
        )
    )]
    InvalidRange {
        min: u32,
        max: u32,
        reason: InvalidRangeReason,
    },

    /// No [`crate::PropertyClass`] has the given name.
    #[error("Unknown property class: '{name}'")]
    #[diagnostic(
        code(r3bl_segment::property_tables::unknown_property_class),
        help("Use a UCD style name such as \"ALetter\" or \"Grapheme_Extend\"")
    )]
    UnknownPropertyClass { name: String },
}

/// Why a [`crate::ScalarRange`] was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidRangeReason {
    #[strum(to_string = "min is greater than max")]
    Inverted,
    #[strum(to_string = "endpoint is above U+10FFFF")]
    AboveMaxScalar,
    #[strum(to_string = "range overlaps the surrogate band")]
    OverlapsSurrogates,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_invalid_range_message() {
        let error = SegmentError::InvalidRange {
            min: 0xD800,
            max: 0xD900,
            reason: InvalidRangeReason::OverlapsSurrogates,
        };
        assert_eq2!(
            error.to_string(),
            "Invalid scalar range [0xD800, 0xD900]: range overlaps the surrogate band"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;
        let error = SegmentError::UnknownPropertyClass {
            name: "Nope".to_string(),
        };
        let code = error.code().map(|it| it.to_string());
        assert_eq2!(
            code.as_deref(),
            Some("r3bl_segment::property_tables::unknown_property_class")
        );
    }
}
