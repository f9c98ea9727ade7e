// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_appender::rolling::RollingFileAppender;

/// Create a file appender that never rotates, writing to `path_str`. The parent folder
/// must already exist.
///
/// # Errors
///
/// Returns an error if the path has no parent folder or no file name.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            code = "r3bl_segment::log::no_parent_folder",
            "Can't get the parent folder of log file path {}",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            code = "r3bl_segment::log::no_file_name",
            "Can't get the file name of log file path {}",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_try_create_makes_the_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("segment.log");
        let _appender = try_create(file_path.to_str().unwrap()).unwrap();
        assert!(file_path.exists());
    }

    #[test]
    fn test_try_create_rejects_a_root_path() {
        assert!(try_create("/").is_err());
    }
}
