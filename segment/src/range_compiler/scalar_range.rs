// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::RangeInclusive;

use super::{MAX_SCALAR, SUPPLEMENTARY_MIN};
use crate::{InvalidRangeReason, SegmentError, SegmentResult};

const SURROGATE_BAND: RangeInclusive<u32> = 0xD800..=0xDFFF;

/// An inclusive range of Unicode scalar values. A single value is the degenerate range
/// where `min == max`.
///
/// Construction does not validate; [`ScalarRange::validate()`] does, and
/// [`crate::compile_matcher()`] calls it for every input.
///
/// ```
/// use r3bl_segment::ScalarRange;
/// assert_eq!(ScalarRange::from(0x41_u32), ScalarRange::single(0x41));
/// assert_eq!(ScalarRange::from(0x41_u32..=0x5A), ScalarRange::new(0x41, 0x5A));
/// assert!(ScalarRange::new(0xD800, 0xD900).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScalarRange {
    pub min: u32,
    pub max: u32,
}

impl ScalarRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self { Self { min, max } }

    #[must_use]
    pub const fn single(value: u32) -> Self { Self { min: value, max: value } }

    #[must_use]
    pub const fn is_single(&self) -> bool { self.min == self.max }

    /// Fits in one UTF-16 code unit.
    #[must_use]
    pub const fn is_bmp(&self) -> bool { self.max < SUPPLEMENTARY_MIN }

    /// Needs surrogate pairs for every value.
    #[must_use]
    pub const fn is_supplementary(&self) -> bool { self.min >= SUPPLEMENTARY_MIN }

    #[must_use]
    pub fn contains(&self, scalar: u32) -> bool { (self.min..=self.max).contains(&scalar) }

    /// Check the invariants: `min <= max`, `max <= U+10FFFF`, and no overlap with the
    /// surrogate band `U+D800..=U+DFFF`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidRange`] naming the first invariant that is broken.
    pub fn validate(&self) -> SegmentResult<()> {
        let reason = if self.min > self.max {
            Some(InvalidRangeReason::Inverted)
        } else if self.max > MAX_SCALAR {
            Some(InvalidRangeReason::AboveMaxScalar)
        } else if self.min <= *SURROGATE_BAND.end() && self.max >= *SURROGATE_BAND.start()
        {
            Some(InvalidRangeReason::OverlapsSurrogates)
        } else {
            None
        };

        match reason {
            None => Ok(()),
            Some(reason) => Err(SegmentError::InvalidRange {
                min: self.min,
                max: self.max,
                reason,
            }),
        }
    }

    /// Split a range that straddles `U+FFFF` into its BMP part and its supplementary
    /// part. Either side is [`None`] when the range has nothing there.
    #[must_use]
    pub fn split_at_supplementary(&self) -> (Option<Self>, Option<Self>) {
        if self.is_bmp() {
            (Some(*self), None)
        } else if self.is_supplementary() {
            (None, Some(*self))
        } else {
            (
                Some(Self::new(self.min, SUPPLEMENTARY_MIN - 1)),
                Some(Self::new(SUPPLEMENTARY_MIN, self.max)),
            )
        }
    }
}

impl From<u32> for ScalarRange {
    fn from(value: u32) -> Self { Self::single(value) }
}

impl From<char> for ScalarRange {
    fn from(value: char) -> Self { Self::single(u32::from(value)) }
}

impl From<(u32, u32)> for ScalarRange {
    fn from((min, max): (u32, u32)) -> Self { Self::new(min, max) }
}

impl From<RangeInclusive<u32>> for ScalarRange {
    fn from(range: RangeInclusive<u32>) -> Self { Self::new(*range.start(), *range.end()) }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(0x41, 0x5A)]
    #[test_case(0x0, 0xD7FF; "up to the surrogate band")]
    #[test_case(0xE000, 0x10_FFFF; "from the surrogate band to the end")]
    #[test_case(0x1_0000, 0x1_0200)]
    fn test_validate_ok(min: u32, max: u32) {
        assert_eq2!(ScalarRange::new(min, max).validate(), Ok(()));
    }

    #[test_case(0x5A, 0x41, InvalidRangeReason::Inverted)]
    #[test_case(0x10_FFFF, 0x11_0000, InvalidRangeReason::AboveMaxScalar)]
    #[test_case(0xD800, 0xD900, InvalidRangeReason::OverlapsSurrogates)]
    #[test_case(0xD7FF, 0xD800, InvalidRangeReason::OverlapsSurrogates; "touches start")]
    #[test_case(0xDFFF, 0xE000, InvalidRangeReason::OverlapsSurrogates; "touches end")]
    #[test_case(0x0, 0xFFFF, InvalidRangeReason::OverlapsSurrogates; "contains band")]
    fn test_validate_err(min: u32, max: u32, reason: InvalidRangeReason) {
        assert_eq2!(
            ScalarRange::new(min, max).validate(),
            Err(SegmentError::InvalidRange { min, max, reason })
        );
    }

    #[test]
    fn test_split_at_supplementary() {
        assert_eq2!(
            ScalarRange::new(0xE000, 0x1_0005).split_at_supplementary(),
            (
                Some(ScalarRange::new(0xE000, 0xFFFF)),
                Some(ScalarRange::new(0x1_0000, 0x1_0005))
            )
        );
        assert_eq2!(
            ScalarRange::single(0x41).split_at_supplementary(),
            (Some(ScalarRange::single(0x41)), None)
        );
        assert_eq2!(
            ScalarRange::single(0x1_F600).split_at_supplementary(),
            (None, Some(ScalarRange::single(0x1_F600)))
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq2!(ScalarRange::from('a'), ScalarRange::single(0x61));
        assert_eq2!(ScalarRange::from((1_u32, 2_u32)), ScalarRange::new(1, 2));
        assert!(ScalarRange::from(3_u32..=9).contains(9));
    }
}
