//! Reads `config.toml` for wake-clock.
//!
//! An explicit `--config` path must exist. The XDG location is optional: when
//! nothing is there the built-in defaults apply. TOML errors are reported as
//! `path:line:column` so a typo in `[countdown]` points at the right line.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Entry points for reading the configuration file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads and parses the file at `path`.
    ///
    /// A missing file is `ConfigError::NotFound`; any other I/O failure
    /// (permissions, a directory) is `ConfigError::ReadError`.
    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config = Self::parse_toml(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Reads `$XDG_CONFIG_HOME/wake-clock/config.toml`, or returns the
    /// defaults when that file does not exist.
    pub fn load_default() -> Result<Config, ConfigError> {
        let path = xdg::config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }
        Self::load_from_path(&path)
    }

    /// Reads `path` when given, otherwise the XDG location.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => Self::load_default(),
        }
    }

    fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(|e| {
            let (line, column) = e
                .span()
                .map(|span| line_column(content, span.start))
                .unwrap_or((0, 0));
            ConfigError::ParseError {
                path: path.to_path_buf(),
                line,
                column,
                message: e.message().to_string(),
            }
        })
    }
}

/// One-based line and column of byte `offset` in `content`.
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset];
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |p| p + 1);
    (line, offset - line_start + 1)
}
