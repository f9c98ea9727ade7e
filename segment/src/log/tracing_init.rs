// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, TracingScope, WriterConfig,
            rolling_file_appender_impl};
use crate::ok;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install a subscriber built from `tracing_config`.
///
/// - [`TracingScope::Global`]: sets the global default (only once per process), and
///   returns [`None`].
/// - [`TracingScope::ThreadLocal`]: sets the default for the current thread, and returns
///   the guard. Dropping the guard restores the previous subscriber.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber is
/// already set.
pub fn init_tracing(tracing_config: TracingConfig) -> miette::Result<Option<DefaultGuard>> {
    let layers = try_create_layers(&tracing_config)?;
    match tracing_config.scope {
        TracingScope::Global => {
            tracing_subscriber::registry()
                .with(layers)
                .try_init()
                .into_diagnostic()?;
            ok!(None)
        }
        TracingScope::ThreadLocal => {
            let it = tracing_subscriber::registry().with(layers).set_default();
            ok!(Some(it))
        }
    }
}

/// Shortcut for [`init_tracing()`]. Logging is off by default: with
/// [`LevelFilter::OFF`] this does nothing and returns [`None`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let tracing_config: TracingConfig = options.into();

    // Early return if the level filter is off.
    if tracing_config.get_level_filter() == LevelFilter::OFF {
        return ok!(None);
    }

    init_tracing(tracing_config)
}

/// Returns the layers. This does not install them.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Applies to every layer below.
    return_it.push(Box::new(level_filter));

    if let Some(layer) = try_create_display_layer(level_filter, &writer_config) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        return_it.push(layer);
    }

    ok!(return_it)
}

/// A `fmt` layer writing to stdout or stderr, if `writer_config` asks for one.
#[must_use]
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let (WriterConfig::Display(display_pref) | WriterConfig::DisplayAndFile(display_pref, _)) =
        writer_config
    else {
        return None;
    };

    let fmt_layer = create_fmt!();

    let layer: Box<DynLayer<S>> = match display_pref {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    };
    Some(layer)
}

/// A `fmt` layer writing to a file, if `writer_config` asks for one.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let (WriterConfig::File(file_path) | WriterConfig::DisplayAndFile(_, file_path)) =
        writer_config
    else {
        return ok!(None);
    };

    let file = rolling_file_appender_impl::try_create(file_path)?;
    let layer: Box<DynLayer<S>> = Box::new(
        create_fmt!()
            .with_ansi(false)
            .with_writer(file)
            .with_filter(level_filter),
    );
    ok!(Some(layer))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                &WriterConfig::Display(DisplayPreference::Stdout),
            );
        assert!(layer.is_some());
    }

    #[test]
    fn test_try_create_both_layers() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("segment.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let tracing_config = TracingConfig::from(WriterConfig::DisplayAndFile(
            DisplayPreference::Stderr,
            file_path.clone(),
        ));

        let layers = try_create_layers(&tracing_config).unwrap();
        assert_eq2!(layers.len(), 3);
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_off_is_a_no_op() {
        let guard = try_initialize_logging(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn test_thread_local_file_logging() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("segment.log");

        let guard = try_initialize_logging(TracingConfig::new_file(Some(
            file_path.to_str().unwrap().to_string(),
        )))
        .unwrap();
        assert!(guard.is_some());

        tracing::debug!(message = "🧪 hello from the test");
        tracing::trace!(message = "🧪 filtered out");

        drop(guard);

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("hello from the test"));
        assert!(!contents.contains("filtered out"));
    }
}
