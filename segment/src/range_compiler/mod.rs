// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The Range-to-Matcher Compiler.
//!
//! Text in this crate is UTF-16, so a scalar value is either one code unit (the Basic
//! Multilingual Plane, `U+0000..=U+FFFF` minus the surrogate band) or a high surrogate
//! followed by a low surrogate (everything above `U+FFFF`). A set of scalar value ranges
//! therefore compiles into three parts:
//!
//! 1. A BMP character class: sorted, merged code unit intervals.
//! 2. Surrogate boxes: `(high interval, low interval)` pairs whose Cartesian product is
//!    exactly a contiguous span of supplementary scalar values. See [`SurrogateBox`].
//! 3. Supplementary single values, kept as literal `(high, low)` pairs.
//!
//! ```text
//! [U+10000, U+10200]
//!
//!   U+10000 → D800 DC00          U+10200 → D800 DE00
//!   same high surrogate, so one box:  D800 × [DC00-DE00]
//!
//! [U+103F0, U+10C05]
//!
//!   U+103F0 → D800 DFF0          U+10C05 → D803 DC05
//!   box 1: D800        × [DFF0-DFFF]
//!   box 2: [D801-D802] × [DC00-DFFF]
//!   box 3: D803        × [DC00-DC05]
//! ```
//!
//! A [`Matcher`] never matches a high surrogate without its paired low surrogate, and never
//! matches a surrogate code unit on its own, so it can't split a pair.

// Attach sources.
pub mod matcher;
pub mod matcher_cache;
pub mod scalar_range;
pub mod surrogate;

// Re-export.
pub use matcher::*;
pub use matcher_cache::*;
pub use scalar_range::*;
pub use surrogate::*;
