//! Default configuration template and file creation utilities.
//!
//! Provides a well-commented TOML template that matches `Config::default()`
//! and functions to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A well-commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# wake-clock configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/wake-clock/config.toml

# ==============================================================================
# Countdown
# ==============================================================================

[countdown]

# Length of the countdown started by the wake-up button, in seconds.
# Zero or a negative value shows the completion message immediately.
initial_seconds = 3600

# ==============================================================================
# Clock
# ==============================================================================

[clock]

# How often the home view clock is refreshed.
# Missed refreshes are not caught up.
# Examples: "1s", "500ms"
refresh_interval = "1s"

# ==============================================================================
# Display
# ==============================================================================

[display]

# Greeting shown at the top of the home view.
greeting = "おはようございます"

# Label of the wake-up button.
wake_label = "起床"

# Shown in place of the countdown once it reaches zero.
done_message = "時間です"

# Long-form date style on the home view.
# Options: "japanese", "english", "iso"
#   japanese - 2026年10月16日金曜日
#   english  - Friday, October 16, 2026
#   iso      - 2026-10-16 (Friday)
date_style = "japanese"

# Delay before the countdown panel is drawn at full intensity.
reveal_delay = "10ms"

# ==============================================================================
# TUI
# ==============================================================================

[tui]

# Render tick rate as a human-readable duration.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Logging verbosity level.
# Options: "error", "warn", "info", "debug", "trace"
# The WAKE_CLOCK_LOG environment variable overrides this value.
log_level = "info"

# Path to log file. Empty string discards log output, since the
# terminal is owned by the clock display.
# Examples: "~/.local/state/wake-clock/wake-clock.log"
log_file = ""
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };

    xdg::ensure_config_dir().map_err(write_err)?;
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_err)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Config;
    use serial_test::serial;

    /// Run closure with `XDG_CONFIG_HOME` temporarily pointed at `dir`.
    fn with_xdg_config<F: FnOnce()>(dir: &Path, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", dir);
        f();
        match original {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    // -- Template validity --------------------------------------------------

    #[test]
    fn template_values_match_config_default() {
        let from_template: Config =
            toml::from_str(DEFAULT_CONFIG_TEMPLATE).expect("template should parse");
        assert_eq!(from_template, Config::default());
    }

    #[test]
    fn template_contains_all_section_headers() {
        for section in ["[countdown]", "[clock]", "[display]", "[tui]", "[logging]"] {
            assert!(
                DEFAULT_CONFIG_TEMPLATE.contains(section),
                "missing {section} section"
            );
        }
    }

    #[test]
    fn template_is_commented() {
        let comment_lines = DEFAULT_CONFIG_TEMPLATE
            .lines()
            .filter(|l| l.trim_start().starts_with('#'))
            .count();
        assert!(
            comment_lines > 20,
            "expected >20 comment lines, got {comment_lines}"
        );
    }

    // -- create_default_config ----------------------------------------------

    #[test]
    #[serial]
    fn create_without_force_returns_already_exists() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(tmp.path(), || {
            create_default_config(false).expect("first call should succeed");
            let err = create_default_config(false).expect_err("should fail with AlreadyExists");
            match err {
                ConfigError::AlreadyExists { .. } => {}
                other => panic!("expected AlreadyExists, got: {other:?}"),
            }
        });
    }

    #[test]
    #[serial]
    fn create_with_force_creates_backup() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(tmp.path(), || {
            let path = create_default_config(false).expect("first call should succeed");
            fs::write(&path, "# custom content\n").expect("overwrite for test");

            let new_path = create_default_config(true).expect("force should succeed");
            assert_eq!(new_path, path);

            let backup = path.with_extension("toml.backup");
            let backup_content = fs::read_to_string(&backup).expect("read backup");
            assert_eq!(backup_content, "# custom content\n");

            let content = fs::read_to_string(&path).expect("read new");
            assert_eq!(content, DEFAULT_CONFIG_TEMPLATE);
        });
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn file_permissions_are_0600() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(tmp.path(), || {
            let path = create_default_config(false).expect("should succeed");
            let mode = fs::metadata(&path).expect("metadata").permissions().mode();
            assert_eq!(mode & 0o777, 0o600, "file should be owner-only read/write");
        });
    }
}
