//! # Generator Configuration
//!
//! Settings that shape a generation run. Values are layered:
//!
//! 1. Built-in defaults ([`GeneratorConfig::default`])
//! 2. `nestgen.toml`, passed explicitly or auto-detected next to the schema
//! 3. Environment variables
//!
//! ## `nestgen.toml`
//!
//! ```toml
//! # Models whose mutation endpoints get an auth guard
//! protected_models = ["User", "Invoice"]
//! io_timeout_ms = 5000
//! debounce_ms = 100
//! ```
//!
//! ## Environment Variables
//!
//! - `NESTGEN_IO_TIMEOUT_MS` - bound on every schema read, mkdir and write
//! - `NESTGEN_DEBOUNCE_MS` - settle window after a schema change event
//! - `NESTGEN_PROTECTED_MODELS` - comma-separated list, replaces the file value

use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the config file looked up next to the schema.
pub const CONFIG_FILE_NAME: &str = "nestgen.toml";

/// Schema location used when neither CLI nor config name one.
pub const DEFAULT_SCHEMA_PATH: &str = "prisma/schema.prisma";

const DEFAULT_IO_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_DEBOUNCE_MS: u64 = 100;
const DEFAULT_PROTECTED_MODELS: &[&str] = &["User", "Role"];

/// Configuration threaded through every generation call.
///
/// Nothing in the pipeline reads the working directory or other process
/// state; the output root is always passed alongside this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Schema file read by one-shot generation
    pub schema_path: PathBuf,
    /// Upper bound for each filesystem operation
    pub io_timeout: Duration,
    /// Quiet period after a change event before a batch starts
    pub debounce: Duration,
    /// Class names whose create/update/delete endpoints are guarded
    pub protected_models: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            io_timeout: Duration::from_millis(DEFAULT_IO_TIMEOUT_MS),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            protected_models: DEFAULT_PROTECTED_MODELS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

/// On-disk shape of `nestgen.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub protected_models: Option<Vec<String>>,
    #[serde(default)]
    pub io_timeout_ms: Option<u64>,
    #[serde(default)]
    pub debounce_ms: Option<u64>,
}

impl GeneratorConfig {
    /// Defaults for the given schema path.
    pub fn for_schema(schema_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_path: schema_path.into(),
            ..Self::default()
        }
    }

    /// Full layering: defaults, config file (explicit or auto-detected), env.
    pub fn load(schema_path: &Path, explicit_config: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = Self::for_schema(schema_path);
        if let Some(path) = resolve_config_path(explicit_config, schema_path) {
            if let Some(file) = load_config_file(&path)? {
                config.apply_file(file);
            }
        }
        config.apply_env();
        Ok(config)
    }

    /// Overlay values present in a parsed config file.
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(models) = file.protected_models {
            self.protected_models = models;
        }
        if let Some(ms) = file.io_timeout_ms {
            self.io_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = file.debounce_ms {
            self.debounce = Duration::from_millis(ms);
        }
    }

    /// Overlay `NESTGEN_*` environment variables. Unparseable values are ignored.
    pub fn apply_env(&mut self) {
        if let Some(ms) = env_millis("NESTGEN_IO_TIMEOUT_MS") {
            self.io_timeout = ms;
        }
        if let Some(ms) = env_millis("NESTGEN_DEBOUNCE_MS") {
            self.debounce = ms;
        }
        if let Ok(list) = env::var("NESTGEN_PROTECTED_MODELS") {
            self.protected_models = parse_model_list(&list);
        }
    }

    /// Whether mutation endpoints of `class_name` should be guarded.
    #[must_use]
    pub fn is_protected(&self, class_name: &str) -> bool {
        self.protected_models.iter().any(|m| m == class_name)
    }
}

fn env_millis(key: &str) -> Option<Duration> {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Split a comma-separated model list, dropping empty entries.
pub fn parse_model_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Load `nestgen.toml`.
///
/// Returns `Ok(None)` when the file does not exist, `Err` when it exists but
/// cannot be read or parsed.
pub fn load_config_file(config_path: &Path) -> anyhow::Result<Option<ConfigFile>> {
    if !config_path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let file: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;
    Ok(Some(file))
}

/// Resolve the config path.
///
/// Priority:
/// 1. Explicitly provided path (via CLI), if it exists
/// 2. `nestgen.toml` in the schema's directory
/// 3. None
pub fn resolve_config_path(explicit_path: Option<&Path>, schema_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }
    let candidate = schema_path.parent()?.join(CONFIG_FILE_NAME);
    candidate.exists().then_some(candidate)
}
