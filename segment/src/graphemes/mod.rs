// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Grapheme cluster splitting and the [`TextString`] view built on top of it.
//!
//! Text in this crate is `UTF-16`: a sequence of 16 bit code units. A Unicode scalar
//! value takes either one code unit (the Basic Multilingual Plane) or two (a surrogate
//! pair, for everything above `U+FFFF`). A grapheme cluster is a user-perceived character,
//! and it can span many code units:
//!
//! | Text            | Scalar values         | Code units | Clusters |
//! | --------------- | --------------------- | ---------- | -------- |
//! | `H`             | `U+0048`              | 1          | 1        |
//! | `é` (decomposed)| `U+0065 U+0301`       | 2          | 1        |
//! | `😀`            | `U+1F600`             | 2          | 1        |
//! | `🇬🇧`            | `U+1F1EC U+1F1E7`     | 4          | 1        |
//! | `\r\n`          | `U+000D U+000A`       | 2          | 1        |
//!
//! # Cluster rules
//!
//! At each position every rule in [`cluster_rules`] is tried, the longest match wins, and
//! ties go to the rule that comes first:
//!
//! 1. `CR LF`.
//! 2. A single `Control`, `CR`, or `LF`.
//! 3. A Hangul syllable sequence (`L* V+ T*`, `L* LV V* T*`, `L* LVT T*`, `L+`, `T+`).
//! 4. A run of `Regional_Indicator`s (flags).
//! 5. A base followed by one or more `Extend` / `SpacingMark`s.
//! 6. Any single scalar value (or a single unpaired surrogate code unit).
//!
//! The base of rule 5 is always a single scalar value. A multi scalar match from rule 3
//! or rule 4 never absorbs the marks after it, so `"\u{1100}\u{1161}\u{301}"` splits
//! into `["\u{1100}\u{1161}", "\u{301}"]` and the mark stands alone. This is narrower
//! than UAX #29 GB9, and it is the intended behavior of this rule set.
//!
//! No rule matches half of a surrogate pair, so clusters never split one. Splitting is
//! lossless: concatenating the clusters gives back the input code units exactly.
//!
//! # Two kinds of index
//!
//! - A code unit offset is a position in the `u16` buffer. [`Seg`] records the code unit
//!   span of one cluster.
//! - A cluster index (aka "seg index") counts clusters. It is the unit of position for
//!   [`TextString::read()`] and for all the word boundary queries in
//!   [`crate::word_boundaries`].
//!
//! [`TextString::seg_index_at_unit()`] and [`TextString::unit_offset_of()`] convert
//! between the two.

// Attach sources.
pub mod cluster_iter;
pub mod cluster_rules;
pub mod seg;
pub mod segmented_text;
pub mod text_string;
pub mod text_string_ext;

// Re-export.
pub use cluster_iter::*;
pub use cluster_rules::*;
pub use seg::*;
pub use segmented_text::*;
pub use text_string::*;
pub use text_string_ext::*;
