// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional [`tracing`] setup for callers that don't configure a subscriber of their own.
//!
//! The library only emits events (matcher compilation at `debug`, cluster and boundary
//! search details at `trace` when [`crate::DEBUG_SEGMENT_MOD`] is on). Nothing is printed
//! until a subscriber is installed, either by the caller or with [`init_tracing()`] /
//! [`try_initialize_logging()`].

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
