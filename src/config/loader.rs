//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::PackageStatus;
use crate::error::{RentvixError, RentvixResult};

use super::types::{Config, Verbosity};

/// Config file looked up in the project directory
pub const PROJECT_CONFIG_FILE: &str = "rentvix.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RentvixResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RentvixError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults; env overrides last.
///
/// A config file that fails to parse is reported and skipped.
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                debug!(path = %path.display(), "config loaded");
                return (with_env_overrides(config), warnings);
            }
            Err(err) => warn!(path = %path.display(), error = %err, "ignoring unreadable config"),
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

/// Apply environment variable overrides (RENTVIX_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply RENTVIX_* overrides read through `lookup`.
///
/// Unparseable values are ignored so a typo in the environment never stops
/// the builder from starting.
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // RENTVIX_DATA_DIR
    if let Some(dir) = lookup("RENTVIX_DATA_DIR").filter(|d| !d.trim().is_empty()) {
        config.data.dir = PathBuf::from(dir);
    }

    // RENTVIX_DEBOUNCE_MS
    if let Some(ms) = lookup("RENTVIX_DEBOUNCE_MS").and_then(|v| v.trim().parse().ok()) {
        config.autosave.debounce_ms = ms;
    }

    // RENTVIX_STATUS
    if let Some(status) = lookup("RENTVIX_STATUS").and_then(|v| v.parse::<PackageStatus>().ok()) {
        config.autosave.status = status;
    }

    // RENTVIX_VERBOSITY
    if let Some(verbosity) = lookup("RENTVIX_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

/// `$XDG_CONFIG_HOME/rentvix/config.toml`, else `~/.config/rentvix/config.toml`
fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("rentvix").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "data",
        "dir",
        "autosave",
        "debounce_ms",
        "status",
        "output",
        "verbosity",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
