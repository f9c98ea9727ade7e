// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "segment_log.txt";

/// Where the logs go, how verbose they are, and whether the subscriber is installed for
/// the whole process or only the current thread. Pass it to [`crate::init_tracing()`].
///
/// Anything that converts into a `TracingConfig` ([`LevelFilter`], [`tracing::Level`],
/// [`DisplayPreference`], [`WriterConfig`]) can be used, and two configs can be merged
/// with `+`:
///
/// ```
/// use r3bl_segment::{DisplayPreference, TracingConfig, WriterConfig};
/// use tracing_core::LevelFilter;
///
/// let config = TracingConfig::from(LevelFilter::TRACE) + DisplayPreference::Stderr.into();
/// assert_eq!(config.level_filter, LevelFilter::TRACE);
/// assert_eq!(
///     config.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "segment_log.txt".into())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
    pub scope: TracingScope,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

/// A [`TracingScope::Global`] subscriber can't be changed once set, which suits apps. A
/// [`TracingScope::ThreadLocal`] one is undone when its guard is dropped, which suits
/// tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingScope {
    Global,
    #[default]
    ThreadLocal,
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(display_preference: DisplayPreference) -> Self {
        Self::from(display_preference)
    }

    #[must_use]
    pub fn new_file(file_path: Option<String>) -> Self {
        Self::from(WriterConfig::File(
            file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
        ))
    }

    #[must_use]
    pub fn with_scope(mut self, scope: TracingScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { Self::from(LevelFilter::from_level(level)) }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            scope: TracingScope::default(),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(display_preference: DisplayPreference) -> Self {
        Self::from(WriterConfig::Display(display_preference))
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
            scope: TracingScope::default(),
        }
    }
}

/// The more verbose level filter wins, the writers are merged, and the `rhs` scope wins.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
            scope: rhs.scope,
        }
    }
}

/// Merge two writer configs. When both sides set the same thing, `rhs` wins.
///
/// - `Display(a) + File(f) = DisplayAndFile(a, f)`.
/// - `Display(a) + Display(b) = Display(b)`.
/// - `None + x = x + None = x`.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            // No collision.
            (None, rhs) => rhs,
            (lhs, None) => lhs,
            (Display(display), File(file)) | (File(file), Display(display)) => {
                DisplayAndFile(display, file)
            }

            // Collision, rhs wins.
            (_, DisplayAndFile(display, file)) => DisplayAndFile(display, file),
            (Display(_), Display(display)) => Display(display),
            (File(_), File(file)) => File(file),
            (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),
            (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_add_writer_configs() {
        let stdout = WriterConfig::Display(DisplayPreference::Stdout);
        let stderr = WriterConfig::Display(DisplayPreference::Stderr);
        let file_a = WriterConfig::File("a.log".into());
        let file_b = WriterConfig::File("b.log".into());
        let stdout_and_a =
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a.log".into());
        let stderr_and_a =
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "a.log".into());
        let stdout_and_b =
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "b.log".into());

        // No collision.
        assert_eq2!(WriterConfig::None + WriterConfig::None, WriterConfig::None);
        assert_eq2!(WriterConfig::None + stdout.clone(), stdout);
        assert_eq2!(file_a.clone() + WriterConfig::None, file_a);
        assert_eq2!(stdout.clone() + file_a.clone(), stdout_and_a);
        assert_eq2!(file_a.clone() + stdout.clone(), stdout_and_a);

        // Collision, rhs wins.
        assert_eq2!(stdout.clone() + stderr.clone(), stderr);
        assert_eq2!(file_a.clone() + file_b.clone(), file_b);
        assert_eq2!(stdout_and_a.clone() + stderr.clone(), stderr_and_a);
        assert_eq2!(stdout_and_a.clone() + file_b.clone(), stdout_and_b);
        assert_eq2!(stderr.clone() + stdout_and_a.clone(), stdout_and_a);
        assert_eq2!(file_b.clone() + stdout_and_a.clone(), stdout_and_a);
        assert_eq2!(stderr_and_a + stdout_and_b.clone(), stdout_and_b);
    }

    #[test]
    fn test_add_tracing_configs() {
        let config = TracingConfig::from(tracing::Level::INFO)
            + TracingConfig::from(DisplayPreference::Stdout).with_scope(TracingScope::Global);

        assert_eq2!(config.level_filter, LevelFilter::DEBUG);
        assert_eq2!(config.scope, TracingScope::Global);
        assert_eq2!(
            config.writer_config,
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stdout,
                DEFAULT_LOG_FILE_NAME.to_string()
            )
        );
    }

    #[test]
    fn test_new_file_defaults_the_path() {
        assert_eq2!(
            TracingConfig::new_file(None).writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
        assert_eq2!(
            TracingConfig::new_display(DisplayPreference::Stderr).scope,
            TracingScope::ThreadLocal
        );
    }
}
