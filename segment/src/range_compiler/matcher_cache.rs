// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Process wide cache of compiled [`Matcher`]s, one slot per [`PropertyClass`].
//!
//! Each slot is a [`OnceLock`], so the first caller to ask for a class compiles it and
//! everyone after that gets the same `&'static` reference. If two threads race on the
//! first access, one of them wins the write and the other result is dropped. Compiling is
//! a pure function of static data, so there is nothing to corrupt.

use std::sync::OnceLock;

use strum::{EnumCount, IntoEnumIterator};

use super::{Matcher, compile_matcher};
use crate::PropertyClass;

static MATCHERS: [OnceLock<Matcher>; PropertyClass::COUNT] =
    [const { OnceLock::new() }; PropertyClass::COUNT];

/// Get the compiled matcher for `class`, compiling it on first use.
#[must_use]
pub fn matcher_for(class: PropertyClass) -> &'static Matcher {
    MATCHERS[class.ordinal()].get_or_init(|| compile_property_class(class))
}

/// Compile every class now, instead of lazily on first use. Useful to keep the one time
/// cost off a latency sensitive path (eg: the first keystroke in an editor).
pub fn warm_up_matchers() {
    for class in PropertyClass::iter() {
        let _ = matcher_for(class);
    }
    tracing::debug!(
        message = "🔤 warmed up matchers",
        count = PropertyClass::COUNT
    );
}

/// The generated tables are trusted input. If one ever fails validation, log it and fall
/// back to a matcher that matches nothing, rather than taking the process down.
fn compile_property_class(class: PropertyClass) -> Matcher {
    match compile_matcher(class.ranges().iter().copied()) {
        Ok(matcher) => {
            tracing::debug!(
                message = "🔤 compiled property class",
                class = %class,
                ranges = class.ranges().len(),
                bmp_intervals = matcher.bmp_class().len(),
                surrogate_boxes = matcher.surrogate_boxes().len(),
                supplementary_singles = matcher.supplementary_singles().len(),
            );
            matcher
        }
        Err(error) => {
            tracing::error!(
                message = "🔤 property table failed validation",
                class = %class,
                error = %error,
            );
            Matcher::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_matcher_for_is_memoized() {
        let first = matcher_for(PropertyClass::ALetter);
        let second = matcher_for(PropertyClass::ALetter);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_every_class_compiles_to_a_non_empty_matcher() {
        warm_up_matchers();
        for class in PropertyClass::iter() {
            assert!(!matcher_for(class).is_empty(), "{class}");
        }
    }

    #[test]
    fn test_compiled_matcher_agrees_with_table() {
        for class in PropertyClass::iter() {
            let matcher = matcher_for(class);
            for &(min, max) in class.ranges().iter().take(64) {
                for scalar in [min, max] {
                    assert!(matcher.contains_scalar(scalar), "{class} {scalar:#X}");
                }
                if !class.contains(max + 1) && max + 1 <= 0x10_FFFF && max + 1 != 0xD800 {
                    assert!(!matcher.contains_scalar(max + 1), "{class} {:#X}", max + 1);
                }
            }
        }
    }

    #[test]
    fn test_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| matcher_for(PropertyClass::Mark)))
            .collect();
        let matchers: Vec<&'static Matcher> =
            handles.into_iter().map(|it| it.join().unwrap()).collect();
        assert_eq2!(matchers.len(), 8);
        assert!(matchers.windows(2).all(|pair| std::ptr::eq(pair[0], pair[1])));
    }
}
