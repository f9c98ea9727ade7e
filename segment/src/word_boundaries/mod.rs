// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Word boundaries in the style of Unicode Standard Annex #29, at grapheme cluster
//! granularity.
//!
//! Every cluster is tagged with the [`WordBreak`] value of its first scalar value. A
//! position `pos` (a cluster index, `0..=len`) is the gap in front of cluster `pos`, and
//! [`is_boundary()`] decides whether a word starts or ends there:
//!
//! - The start and end of the text are boundaries.
//! - `CR LF` is never split. Any other newline has a boundary on both sides.
//! - `Extend` and `Format` attach to the cluster on their left, and are skipped when
//!   looking at neighbors.
//! - Letters and digits stick to each other in any order. A single
//!   `MidLetter`-ish separator between two letters (`can't`, `e.g`) or `MidNum`-ish
//!   separator between two digits (`3.14`, `1,000`) does not break.
//! - Hebrew letters keep a trailing `'`, and a `"` between two Hebrew letters.
//! - Katakana sticks to Katakana. Regional indicators stick together.
//! - `_` (and the other `ExtendNumLet`s) sticks to words on either side, and to itself.
//! - Everything else is a boundary.
//!
//! ```text
//! "x=3.14;"   → x | = | 3.14 | ;
//! "foo, bar"  → foo | , |   | bar
//! "snake_case" → snake_case
//! ```
//!
//! The queries work over anything that implements [`crate::SegmentedText`].
//! [`next_boundary()`] and [`prev_boundary()`] move between boundaries, optionally
//! skipping the ones that do not start a word (see [`WordSearchOptions`]).

// Attach sources.
pub mod word_boundary_detection;
pub mod word_break;
pub mod word_search;

// Re-export.
pub use word_boundary_detection::*;
pub use word_break::*;
pub use word_search::*;
