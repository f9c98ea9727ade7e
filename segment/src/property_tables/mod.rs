// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The Property Table Store: named, immutable sets of Unicode scalar value ranges taken
//! from the Unicode Character Database.
//!
//! The data in [`ucd_tables`] is generated, never edited by hand, and lives in `static`
//! memory for the life of the process. Nothing here has behavior beyond lookup, so it is
//! safe to share between threads without synchronization.
//!
//! [`PropertyClass`] is the name space for these tables. The compiled form of each class
//! (a [`crate::Matcher`]) is produced lazily by [`crate::matcher_for()`].

// Attach sources.
pub mod property_class;
pub mod ucd_tables;

// Re-export.
pub use property_class::*;
