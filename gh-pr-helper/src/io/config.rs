//! Optional helper configuration loaded from a TOML file (`--config`).

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::command::DEFAULT_PROGRAM;
use crate::io::csv_source::CsvFormat;

/// Helper configuration (TOML).
///
/// Every field is optional in the file. Command-line flags override the
/// values read here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HelperConfig {
    /// Program invoked for each row, resolved on `PATH` unless absolute.
    pub gh_program: String,

    /// Kill `gh` after this many seconds. Unset waits indefinitely.
    pub timeout_secs: Option<u64>,

    pub csv: CsvConfig,
}

/// How the comments file is split into fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CsvConfig {
    /// Field delimiter, a single ASCII character.
    pub delimiter: char,

    /// Quote character, a single ASCII character. Ignored when `quoting` is off.
    pub quote: char,

    /// When false, quote characters are ordinary field content.
    pub quoting: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            quote: '"',
            quoting: true,
        }
    }
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            gh_program: DEFAULT_PROGRAM.to_string(),
            timeout_secs: None,
            csv: CsvConfig::default(),
        }
    }
}

impl HelperConfig {
    pub fn validate(&self) -> Result<()> {
        if self.gh_program.trim().is_empty() {
            return Err(anyhow!("gh_program must be non-empty"));
        }
        if self.timeout_secs == Some(0) {
            return Err(anyhow!("timeout_secs must be > 0"));
        }
        self.csv.validate()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl CsvConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, '\n' | '\r') {
            return Err(anyhow!(
                "csv.delimiter must be a single ASCII character other than a line break"
            ));
        }
        if self.quoting {
            if !self.quote.is_ascii() {
                return Err(anyhow!("csv.quote must be a single ASCII character"));
            }
            if self.quote == self.delimiter {
                return Err(anyhow!("csv.quote must differ from csv.delimiter"));
            }
        }
        Ok(())
    }

    /// Convert to the reader's format. Call after [`CsvConfig::validate`].
    pub fn format(&self) -> CsvFormat {
        CsvFormat {
            delimiter: self.delimiter as u8,
            quote: self.quoting.then_some(self.quote as u8),
            has_headers: true,
        }
    }
}

/// Load config from a TOML file.
///
/// Unlike an implicit default location, a path given on the command line must
/// exist.
pub fn load_config(path: &Path) -> Result<HelperConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: HelperConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load config if a path was given, otherwise return the defaults.
pub fn load_optional_config(path: Option<&Path>) -> Result<HelperConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(HelperConfig::default()),
    }
}
