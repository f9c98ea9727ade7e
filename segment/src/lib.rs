// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_segment
//!
//! Unicode text segmentation for `UTF-16` text, for use by text editing components that
//! need to move a cursor, delete, or select by user-perceived character and by word.
//!
//! The pieces, bottom up:
//!
//! 1. [`property_tables`]: static Unicode Character Database range tables, named by
//!    [`PropertyClass`].
//! 2. [`range_compiler`]: turns a list of scalar value ranges into a [`Matcher`] that
//!    matches one scalar value at a time in `UTF-16` code units, and never matches half of
//!    a surrogate pair. [`matcher_for()`] caches one compiled matcher per class.
//! 3. [`graphemes`]: splits text into grapheme clusters, and wraps the result in
//!    [`TextString`], a random access view addressed by cluster index.
//! 4. [`word_boundaries`]: decides where words start and end, and searches for the
//!    next / previous word boundary.
//!
//! ```
//! use r3bl_segment::{TextStringExt, WordSearchOptions, is_boundary, next_boundary,
//!                    split_clusters_str};
//!
//! // Grapheme clusters.
//! assert_eq!(split_clusters_str("a\r\nb"), vec!["a", "\r\n", "b"]);
//! assert_eq!(split_clusters_str("e\u{301}").len(), 1);
//!
//! // Word boundaries, by cluster index.
//! let text = "foo, bar".text_string();
//! assert!(is_boundary(&text, 3));
//! assert_eq!(next_boundary(&text, 1, WordSearchOptions::words()), 5);
//! ```
//!
//! Everything is synchronous and pure, apart from the lazily filled matcher cache, which
//! is safe to share between threads. Call [`warm_up_matchers()`] to pay the compile cost
//! up front. Logging goes through [`tracing`]; see [`mod@log`] for a ready made setup.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Set to `true` to get `trace!` events for every cluster split and boundary search.
pub const DEBUG_SEGMENT_MOD: bool = false;

// Attach sources.
pub mod common;
pub mod graphemes;
pub mod log;
pub mod property_tables;
pub mod range_compiler;
pub mod word_boundaries;

// Re-export.
pub use common::*;
pub use graphemes::*;
pub use log::*;
pub use property_tables::*;
pub use range_compiler::*;
pub use word_boundaries::*;
