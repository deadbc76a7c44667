//! Report schedule and its YAML config file.
use std::fs;
use std::path::Path;
use std::time::Duration;
use serde::Deserialize;
use crate::error::{Error, Result};

/// Pause between two reports when nothing else is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// Settings read from a config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub interval_secs: Option<u64>,
    pub iterations: Option<u64>,
}

impl FileConfig {
    pub fn from_yaml(data: &str) -> std::result::Result<FileConfig, serde_yaml::Error> {
        // An empty document is a valid, empty config
        if data.trim().is_empty() {
            return Ok(FileConfig::default());
        }
        serde_yaml::from_str(data)
    }
}

/// Load a config file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let data = fs::read_to_string(path)
        .map_err(|err| Error::Io(path.to_path_buf(), err))?;
    FileConfig::from_yaml(&data)
        .map_err(|err| Error::Config(path.to_path_buf(), err))
}

/// When and how often to report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    /// Pause after each report
    pub interval: Duration,
    /// Number of reports to emit, `None` to run forever
    pub iterations: Option<u64>,
}

impl Default for Schedule {
    fn default() -> Schedule {
        Schedule {
            interval: DEFAULT_INTERVAL,
            iterations: None,
        }
    }
}

impl Schedule {
    /// Combine defaults, the config file and explicit overrides, in order of
    /// increasing precedence.
    pub fn resolve(
        file: Option<&FileConfig>,
        interval_secs: Option<u64>,
        iterations: Option<u64>,
    ) -> Schedule {
        let mut schedule = Schedule::default();
        if let Some(file) = file {
            schedule.apply(file.interval_secs, file.iterations);
        }
        schedule.apply(interval_secs, iterations);
        schedule
    }

    fn apply(&mut self, interval_secs: Option<u64>, iterations: Option<u64>) {
        if let Some(secs) = interval_secs {
            self.interval = Duration::from_secs(secs);
        }
        if iterations.is_some() {
            self.iterations = iterations;
        }
    }

    /// Whether the report numbered `count` (1-based) is the last one.
    pub(crate) fn is_last(&self, count: u64) -> bool {
        matches!(self.iterations, Some(n) if count >= n)
    }
}
