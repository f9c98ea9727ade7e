// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bit level UTF-16 surrogate pair arithmetic.

use smallvec::{SmallVec, smallvec};

pub const HIGH_SURROGATE_MIN: u16 = 0xD800;
pub const HIGH_SURROGATE_MAX: u16 = 0xDBFF;
pub const LOW_SURROGATE_MIN: u16 = 0xDC00;
pub const LOW_SURROGATE_MAX: u16 = 0xDFFF;

/// Smallest scalar value that needs a surrogate pair.
pub const SUPPLEMENTARY_MIN: u32 = 0x1_0000;
/// Largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

#[must_use]
pub fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX).contains(&unit)
}

#[must_use]
pub fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&unit)
}

#[must_use]
pub fn is_surrogate(unit: u16) -> bool { is_high_surrogate(unit) || is_low_surrogate(unit) }

/// Encode a supplementary plane scalar value as `(high, low)`. Returns [`None`] for BMP
/// values and for values above [`MAX_SCALAR`].
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn surrogate_pair(scalar: u32) -> Option<(u16, u16)> {
    if !(SUPPLEMENTARY_MIN..=MAX_SCALAR).contains(&scalar) {
        return None;
    }
    let offset = scalar - SUPPLEMENTARY_MIN;
    // offset is 20 bits wide, so both halves fit in 10 bits.
    let high = HIGH_SURROGATE_MIN + (offset >> 10) as u16;
    let low = LOW_SURROGATE_MIN + (offset & 0x3FF) as u16;
    Some((high, low))
}

/// Inverse of [`surrogate_pair()`]. The caller must pass a high then a low surrogate.
#[must_use]
pub fn decode_surrogate_pair(high: u16, low: u16) -> u32 {
    debug_assert!(is_high_surrogate(high) && is_low_surrogate(low));
    let high_bits = u32::from(high - HIGH_SURROGATE_MIN);
    let low_bits = u32::from(low - LOW_SURROGATE_MIN);
    SUPPLEMENTARY_MIN + ((high_bits << 10) | low_bits)
}

/// Decode the code point that starts at `index`.
///
/// Returns the value and how many code units it occupies. A well formed surrogate pair
/// decodes to its scalar value (2 units). An unpaired surrogate decodes to its own code
/// unit value (1 unit), so callers can always make progress through ill formed text.
#[must_use]
pub fn code_point_at(units: &[u16], index: usize) -> Option<(u32, usize)> {
    let first = *units.get(index)?;
    if is_high_surrogate(first) {
        if let Some(&second) = units.get(index + 1) {
            if is_low_surrogate(second) {
                return Some((decode_surrogate_pair(first, second), 2));
            }
        }
    }
    Some((u32::from(first), 1))
}

/// A pair of inclusive code unit intervals. The box matches a high surrogate in `high`
/// immediately followed by a low surrogate in `low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurrogateBox {
    pub high: (u16, u16),
    pub low: (u16, u16),
}

impl SurrogateBox {
    #[must_use]
    pub fn contains(&self, high: u16, low: u16) -> bool {
        (self.high.0..=self.high.1).contains(&high) && (self.low.0..=self.low.1).contains(&low)
    }

    /// Number of scalar values covered.
    #[must_use]
    pub fn scalar_count(&self) -> usize {
        let highs = usize::from(self.high.1 - self.high.0) + 1;
        let lows = usize::from(self.low.1 - self.low.0) + 1;
        highs * lows
    }
}

/// Decompose `[min, max]` (both supplementary, `min <= max`) into at most three boxes that
/// cover exactly that span.
///
/// 1. Leading partial box: `min`'s high surrogate, low from `min`'s low to `DFFF`.
/// 2. Middle full box: every high surrogate strictly between the partial boxes, low
///    `DC00-DFFF`.
/// 3. Trailing partial box: `max`'s high surrogate, low from `DC00` to `max`'s low.
///
/// A partial box that would span the full low range is folded into the middle box.
#[must_use]
pub fn surrogate_boxes_for(min: u32, max: u32) -> SmallVec<[SurrogateBox; 3]> {
    let (Some((high_min, low_min)), Some((high_max, low_max))) =
        (surrogate_pair(min), surrogate_pair(max))
    else {
        return SmallVec::new();
    };

    if high_min == high_max {
        return smallvec![SurrogateBox {
            high: (high_min, high_min),
            low: (low_min, low_max),
        }];
    }

    let mut leading = None;
    let mut trailing = None;
    let mut middle_start = high_min;
    let mut middle_end = high_max;

    if low_min != LOW_SURROGATE_MIN {
        leading = Some(SurrogateBox {
            high: (high_min, high_min),
            low: (low_min, LOW_SURROGATE_MAX),
        });
        middle_start = high_min + 1;
    }
    if low_max != LOW_SURROGATE_MAX {
        trailing = Some(SurrogateBox {
            high: (high_max, high_max),
            low: (LOW_SURROGATE_MIN, low_max),
        });
        middle_end = high_max - 1;
    }

    let mut boxes = SmallVec::new();
    boxes.extend(leading);
    if middle_start <= middle_end {
        boxes.push(SurrogateBox {
            high: (middle_start, middle_end),
            low: (LOW_SURROGATE_MIN, LOW_SURROGATE_MAX),
        });
    }
    boxes.extend(trailing);
    boxes
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(0x1_0000, (0xD800, 0xDC00))]
    #[test_case(0x1_F1EC, (0xD83C, 0xDDEC))]
    #[test_case(0x1_F600, (0xD83D, 0xDE00))]
    #[test_case(0x10_FFFF, (0xDBFF, 0xDFFF))]
    fn test_surrogate_pair(scalar: u32, expected: (u16, u16)) {
        assert_eq2!(surrogate_pair(scalar), Some(expected));
        assert_eq2!(decode_surrogate_pair(expected.0, expected.1), scalar);
    }

    #[test]
    fn test_surrogate_pair_matches_std() {
        for scalar in [0x1_0000, 0x1_0400, 0x2_0BB7, 0xE_0001, 0x10_FFFF] {
            let ch = char::from_u32(scalar).unwrap();
            let mut buf = [0_u16; 2];
            let encoded = ch.encode_utf16(&mut buf);
            assert_eq2!(surrogate_pair(scalar), Some((encoded[0], encoded[1])));
        }
    }

    #[test]
    fn test_surrogate_pair_rejects_bmp_and_out_of_range() {
        assert_eq2!(surrogate_pair(0xFFFF), None);
        assert_eq2!(surrogate_pair(0x11_0000), None);
    }

    #[test]
    fn test_code_point_at() {
        let units = [0x0061, 0xD83D, 0xDE00, 0xD800, 0x0062, 0xDC00];
        assert_eq2!(code_point_at(&units, 0), Some((0x61, 1)));
        assert_eq2!(code_point_at(&units, 1), Some((0x1_F600, 2)));
        // Unpaired high surrogate followed by a BMP value.
        assert_eq2!(code_point_at(&units, 3), Some((0xD800, 1)));
        // Lone low surrogate.
        assert_eq2!(code_point_at(&units, 5), Some((0xDC00, 1)));
        assert_eq2!(code_point_at(&units, 6), None);
    }

    #[test]
    fn test_boxes_same_high_surrogate() {
        let boxes = surrogate_boxes_for(0x1_0000, 0x1_0200);
        assert_eq2!(
            boxes.as_slice(),
            &[SurrogateBox {
                high: (0xD800, 0xD800),
                low: (0xDC00, 0xDE00),
            }]
        );
    }

    #[test]
    fn test_boxes_three_way_split() {
        let boxes = surrogate_boxes_for(0x1_03F0, 0x1_0C05);
        assert_eq2!(
            boxes.as_slice(),
            &[
                SurrogateBox {
                    high: (0xD800, 0xD800),
                    low: (0xDFF0, 0xDFFF),
                },
                SurrogateBox {
                    high: (0xD801, 0xD802),
                    low: (0xDC00, 0xDFFF),
                },
                SurrogateBox {
                    high: (0xD803, 0xD803),
                    low: (0xDC00, 0xDC05),
                },
            ]
        );
    }

    #[test]
    fn test_boxes_adjacent_high_surrogates_have_no_middle() {
        let boxes = surrogate_boxes_for(0x1_03FF, 0x1_0400);
        assert_eq2!(boxes.len(), 2);
        assert_eq2!(boxes.iter().map(SurrogateBox::scalar_count).sum::<usize>(), 2);
    }

    #[test]
    fn test_boxes_aligned_span_is_one_full_box() {
        // Starts at a DC00 low and ends at a DFFF low, so no partial boxes.
        let boxes = surrogate_boxes_for(0x2_0000, 0x2_FFFF);
        assert_eq2!(
            boxes.as_slice(),
            &[SurrogateBox {
                high: (0xD840, 0xD87F),
                low: (0xDC00, 0xDFFF),
            }]
        );
    }

    #[test]
    fn test_boxes_cover_exactly_the_span() {
        for (min, max) in [(0x1_0001, 0x1_0001), (0x1_0123, 0x1_2345), (0x1_F000, 0x1_FFFF)] {
            let boxes = surrogate_boxes_for(min, max);
            let covered: usize = boxes.iter().map(SurrogateBox::scalar_count).sum();
            assert_eq2!(covered, (max - min + 1) as usize);
            for scalar in [min.saturating_sub(1), min, max, max + 1] {
                let (high, low) = surrogate_pair(scalar).unwrap();
                let inside = (min..=max).contains(&scalar);
                assert_eq2!(boxes.iter().any(|it| it.contains(high, low)), inside);
            }
        }
    }
}
