//! Engine configuration management.
//!
//! This module provides configuration loading, global verbose flag management,
//! and the engine defaults read from `shadowlift.yml`.

mod defaults;


pub use defaults::EngineDefaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::{Deserialize, Serialize};

use crate::pipeline::EngineOptions;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "SHADOWLIFT_CONFIG";

/// Candidate config file names searched on disk.
const CONFIG_FILENAMES: &[&str] = &["shadowlift.yml", "shadowlift.yaml"];

/// Loaded configuration together with its source path and warnings.
pub struct EngineConfigHandle {
    pub config: EngineConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl EngineConfigHandle {
    fn with_config(config: EngineConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub defaults: EngineDefaults,
}

impl EngineConfig {
    fn sanitize(mut self) -> Self {
        self.defaults.sanitize();
        self
    }

    /// Engine options derived from the configured defaults
    pub fn engine_options(&self) -> EngineOptions {
        self.defaults.to_engine_options()
    }
}

/// Parse a YAML config document
pub fn parse_engine_config(contents: &str) -> Result<EngineConfig, String> {
    serde_yaml::from_str::<EngineConfig>(contents)
        .map(EngineConfig::sanitize)
        .map_err(|e| format!("Failed to parse engine config: {}", e))
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Unreadable or unparsable candidates become warnings and the search
/// continues; with no usable file the built-in defaults are returned.
pub fn load_engine_config(custom_path: Option<&Path>) -> EngineConfigHandle {
    let mut warnings = Vec::new();
    let candidates = get_config_candidates(custom_path);

    for candidate in candidates {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match parse_engine_config(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return EngineConfigHandle::with_config(config, Some(source), warnings);
                }
                Err(err) => warnings.push(format!("{} ({})", err, candidate.display())),
            },
            Err(err) => warnings.push(format!(
                "Failed to read engine config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No engine config found; using built-in defaults.".to_string());
    EngineConfigHandle::with_config(EngineConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
        }
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("shadowlift").join(name));
        }
    }

    candidates
}

static ENGINE_CONFIG_HANDLE: OnceLock<EngineConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global engine configuration (loaded once per process).
pub fn config_handle() -> &'static EngineConfigHandle {
    ENGINE_CONFIG_HANDLE.get_or_init(|| load_engine_config(None))
}

/// Load the global configuration from an explicit path.
///
/// Only the first initialisation wins; later calls return the handle that
/// is already in place.
pub fn init_config(custom_path: Option<&Path>) -> &'static EngineConfigHandle {
    ENGINE_CONFIG_HANDLE.get_or_init(|| load_engine_config(custom_path))
}

/// Print config source and warnings the first time it is requested (only in verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[shadowlift] Loaded engine config from {}", source.display());
        } else {
            eprintln!("[shadowlift] Using built-in engine defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[shadowlift] Config warning: {}", warning);
        }
    });
}
