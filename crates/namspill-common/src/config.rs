//! Configuration model for task discovery.

use std::ffi::OsString;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PROC_ROOT, PROC_ROOT_ENV};
use crate::error::Result;

/// Where and for which process to discover tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Mount point of the procfs instance to read from.
    pub proc_root: PathBuf,
    /// Process to inspect; `None` means the calling process.
    pub pid: Option<u32>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
            pid: None,
        }
    }
}

impl DiscoveryConfig {
    /// Returns the default configuration with the procfs root taken from
    /// `NAMSPILL_PROC_ROOT`, if set and non-empty.
    ///
    /// Only discovery through this configuration honours the variable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(PROC_ROOT_ENV))
    }

    fn from_env_value(proc_root: Option<OsString>) -> Self {
        let mut config = Self::default();
        if let Some(root) = proc_root.filter(|r| !r.is_empty()) {
            config.proc_root = PathBuf::from(root);
        }
        config
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns a copy of this configuration targeting `pid`.
    #[must_use]
    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }
}
