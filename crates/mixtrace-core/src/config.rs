//! Configuration types for mixtrace.
//!
//! Nothing is read from disk unless a file is named explicitly:
//! [`Config::load`] layers that file over the embedded defaults, and
//! [`Config::defaults`] returns the defaults alone.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[input]
lossy_utf8 = true

[output]
delimiter      = ","
count_sentinel = -1
header         = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[input]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Replace invalid UTF-8 instead of failing the run.
    #[serde(default = "default_lossy_utf8")]
    pub lossy_utf8: bool,
}

fn default_lossy_utf8() -> bool { true }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            lossy_utf8: default_lossy_utf8(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Written to the `Count` column for events that carry no count.
    #[serde(default = "default_count_sentinel")]
    pub count_sentinel: i64,
    #[serde(default = "default_header")]
    pub header: bool,
}

fn default_delimiter() -> String { ",".to_string() }
fn default_count_sentinel() -> i64 { -1 }
fn default_header() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            count_sentinel: default_count_sentinel(),
            header: default_header(),
        }
    }
}

impl OutputConfig {
    /// The delimiter as the single byte the csv writer expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() && !matches!(b, b'"' | b'\n' | b'\r') => Ok(*b),
            _ => Err(Error::InvalidConfig(format!(
                "output.delimiter must be one ASCII character other than a quote or line break, got {:?}",
                self.delimiter
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path`, layered on top of the built-in defaults. The file must
    /// exist; its format is taken from the extension (TOML when absent).
    pub fn load(path: &Path) -> Result<Self> {
        let file = match path.extension() {
            Some(_) => config::File::from(path),
            None => config::File::from(path).format(config::FileFormat::Toml),
        };
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file.required(true))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn validate(&self) -> Result<()> {
        self.output.delimiter_byte().map(drop)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
