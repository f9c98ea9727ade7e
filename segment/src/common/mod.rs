// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod decl_macros;
pub mod segment_error;

// Re-export.
pub use segment_error::*;
