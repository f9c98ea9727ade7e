// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given value in [`Ok`], or return `Ok(())` when called with no arguments.
///
/// ```
/// use r3bl_segment::ok;
/// fn it() -> miette::Result<()> { ok!() }
/// fn it_with_value() -> miette::Result<u8> { ok!(42) }
/// assert!(it().is_ok());
/// assert_eq!(it_with_value().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Drop in replacement for [`assert_eq!`] that prints a colorized diff of the left and
/// right values using [`pretty_assertions`](https://docs.rs/pretty_assertions). The
/// calling crate must depend on `pretty_assertions` (a dev dependency is enough).
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
