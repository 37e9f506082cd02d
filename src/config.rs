//! Runtime configuration.
//!
//! Read from the environment first, then overridden by command-line flags:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PIXEL_GUESS_ASSETS` | `./assets` |
//! | `PIXEL_GUESS_PREFS` | `<config dir>/pixel-guess/preferences.json` |
//! | `PIXEL_GUESS_LOG` | unset (no log file) |
//! | `PIXEL_GUESS_SEED` | unset (seeded from the clock) |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root holding the catalog JSON files and image folders.
    pub assets_dir: PathBuf,
    pub prefs_path: PathBuf,
    pub log_file: Option<PathBuf>,
    pub seed: Option<u32>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let assets_dir = non_empty("PIXEL_GUESS_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("assets"));
        let prefs_path = non_empty("PIXEL_GUESS_PREFS")
            .map(PathBuf::from)
            .unwrap_or_else(default_prefs_path);
        let log_file = non_empty("PIXEL_GUESS_LOG").map(PathBuf::from);
        let seed = non_empty("PIXEL_GUESS_SEED").and_then(|s| s.parse().ok());

        Self {
            assets_dir,
            prefs_path,
            log_file,
            seed,
        }
    }

    /// Apply command-line overrides; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        assets_dir: Option<PathBuf>,
        prefs_path: Option<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = assets_dir {
            self.assets_dir = dir;
        }
        if let Some(path) = prefs_path {
            self.prefs_path = path;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// `<config dir>/pixel-guess/preferences.json`, or a file in the working
/// directory when the platform has no config dir.
pub fn default_prefs_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("pixel-guess"))
        .unwrap_or_default()
        .join("preferences.json")
}
