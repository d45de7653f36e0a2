//! Console configuration loading and validation.
//!
//! # Responsibility
//! - Parse `ConsoleConfig` from JSON files or strings.
//! - Apply `ORGDESK_*` environment overrides on top of file values.
//!
//! # Invariants
//! - Missing JSON keys fall back to `ConsoleConfig::default()`.
//! - `validate` rejects configs that cannot build a console.

use crate::model::query::DEFAULT_PAGE_SIZE;
use crate::remote::params::PageBase;
use crate::service::mock_service::DEFAULT_ACTOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_PREFIX: &str = "ORGDESK_";

const KNOWN_RESOURCES: &[&str] = &[
    "competencies",
    "courses",
    "course-events",
    "departments",
    "employees",
];

/// Where a resource reads and writes its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    #[default]
    Mock,
    Remote,
}

impl DataMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mock" => Some(Self::Mock),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Mode used by every resource without an entry in `modes`.
    pub mode: DataMode,
    /// Per-resource overrides keyed by resource path (`course-events`, ...).
    pub modes: BTreeMap<String, DataMode>,
    pub base_url: String,
    pub request_timeout_ms: Option<u64>,
    pub mock_latency_ms: u64,
    pub actor: String,
    pub default_page_size: u32,
    pub wire_page_base: PageBase,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            mode: DataMode::Mock,
            modes: BTreeMap::new(),
            base_url: "http://localhost:8080/api".to_string(),
            request_timeout_ms: Some(10_000),
            mock_latency_ms: 0,
            actor: DEFAULT_ACTOR.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            wire_page_base: PageBase::Zero,
            log_level: None,
            log_dir: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    InvalidValue { key: &'static str, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

fn invalid(key: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        message: message.into(),
    }
}

impl ConsoleConfig {
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Mode for one resource, honoring per-resource overrides.
    pub fn mode_for(&self, resource: &str) -> DataMode {
        self.modes.get(resource).copied().unwrap_or(self.mode)
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    pub fn uses_remote(&self) -> bool {
        KNOWN_RESOURCES
            .iter()
            .any(|resource| self.mode_for(resource) == DataMode::Remote)
    }

    /// Applies overrides read through `lookup`, keyed by the suffix after
    /// `ORGDESK_` (`MODE`, `BASE_URL`, `LOG_DIR`, ...).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("MODE") {
            self.mode = DataMode::parse(&raw)
                .ok_or_else(|| invalid("mode", format!("expected mock|remote, got `{raw}`")))?;
        }
        if let Some(raw) = lookup("BASE_URL") {
            self.base_url = raw.trim().to_string();
        }
        if let Some(raw) = lookup("REQUEST_TIMEOUT_MS") {
            self.request_timeout_ms = Some(parse_number("request_timeout_ms", &raw)?);
        }
        if let Some(raw) = lookup("MOCK_LATENCY_MS") {
            self.mock_latency_ms = parse_number("mock_latency_ms", &raw)?;
        }
        if let Some(raw) = lookup("ACTOR") {
            self.actor = raw.trim().to_string();
        }
        if let Some(raw) = lookup("PAGE_SIZE") {
            self.default_page_size = parse_number::<u32>("default_page_size", &raw)?;
        }
        if let Some(raw) = lookup("WIRE_PAGE_BASE") {
            self.wire_page_base = match raw.trim() {
                "zero" | "0" => PageBase::Zero,
                "one" | "1" => PageBase::One,
                other => {
                    return Err(invalid(
                        "wire_page_base",
                        format!("expected zero|one, got `{other}`"),
                    ))
                }
            };
        }
        if let Some(raw) = lookup("LOG_LEVEL") {
            self.log_level = Some(raw.trim().to_string());
        }
        if let Some(raw) = lookup("LOG_DIR") {
            self.log_dir = Some(PathBuf::from(raw.trim()));
        }
        self.validate()
    }

    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|suffix| std::env::var(format!("{ENV_PREFIX}{suffix}")).ok())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_page_size == 0 {
            return Err(invalid("default_page_size", "must be greater than zero"));
        }
        if self.actor.trim().is_empty() {
            return Err(invalid("actor", "cannot be empty"));
        }
        if let Some(resource) = self
            .modes
            .keys()
            .find(|resource| !KNOWN_RESOURCES.contains(&resource.as_str()))
        {
            return Err(invalid("modes", format!("unknown resource `{resource}`")));
        }
        if self.uses_remote() {
            let base_url = self.base_url.trim();
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(invalid(
                    "base_url",
                    format!("expected an http(s) url, got `{base_url}`"),
                ));
            }
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> ConfigResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| invalid(key, format!("expected a non-negative integer, got `{raw}`")))
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ConsoleConfig, DataMode};
    use crate::remote::params::PageBase;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn empty_object_uses_defaults() {
        let config = ConsoleConfig::from_json_str("{}").expect("empty object parses");
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.mode_for("competencies"), DataMode::Mock);
    }

    #[test]
    fn per_resource_mode_overrides_global_mode() {
        let config = ConsoleConfig::from_json_str(
            r#"{"mode":"mock","modes":{"employees":"remote"},"wire_page_base":"one"}"#,
        )
        .expect("mode overrides parse");
        assert_eq!(config.mode_for("employees"), DataMode::Remote);
        assert_eq!(config.mode_for("courses"), DataMode::Mock);
        assert_eq!(config.wire_page_base, PageBase::One);
        assert!(config.uses_remote());
    }

    #[test]
    fn unknown_resource_mode_is_rejected() {
        let err = ConsoleConfig::from_json_str(r#"{"modes":{"projects":"remote"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "modes", .. }));
    }

    #[test]
    fn reads_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"mock_latency_ms":25,"actor":"auditor","default_page_size":20}}"#
        )
        .expect("write config");

        let config = ConsoleConfig::from_file(file.path()).expect("config file parses");
        assert_eq!(config.mock_latency().as_millis(), 25);
        assert_eq!(config.actor, "auditor");
        assert_eq!(config.default_page_size, 20);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = ConsoleConfig::from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("MODE", "remote"),
            ("BASE_URL", "https://hr.example.com/api"),
            ("PAGE_SIZE", "25"),
            ("WIRE_PAGE_BASE", "1"),
        ]);
        let mut config = ConsoleConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|value| value.to_string()))
            .expect("overrides apply");

        assert_eq!(config.mode, DataMode::Remote);
        assert_eq!(config.base_url, "https://hr.example.com/api");
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.wire_page_base, PageBase::One);
    }

    #[test]
    fn invalid_override_values_are_rejected() {
        let mut config = ConsoleConfig::default();
        let err = config
            .apply_overrides(|key| (key == "PAGE_SIZE").then(|| "ten".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "default_page_size",
                ..
            }
        ));

        let mut config = ConsoleConfig::default();
        let err = config
            .apply_overrides(|key| (key == "PAGE_SIZE").then(|| "0".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn remote_mode_requires_http_base_url() {
        let err = ConsoleConfig::from_json_str(r#"{"mode":"remote","base_url":"ftp://x"}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "base_url", .. }));
    }
}
