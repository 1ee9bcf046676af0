//! Settings resolution and credential validation.
//!
//! All tunable parameters come from environment variables with documented
//! defaults. Settings are resolved once into an immutable [`Settings`]
//! value at process entry and passed to dependent components; nothing here
//! reads the environment after load. Tests resolve from a synthetic map
//! instead of the process environment.

use crate::error::ConfigError;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Fully-resolved application settings.
///
/// Every field is total after load: either the environment value or the
/// documented default. Construct via [`Settings::from_env`] or
/// [`Settings::from_map`].
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root directory for the data and log layout.
    pub root: PathBuf,

    /// Primary vision LLM key (`OPENAI_API_KEY`, mandatory).
    pub openai_api_key: Option<String>,
    /// Primary vision model (`OPENAI_MODEL`, default `gpt-5-mini`).
    pub openai_model: String,

    /// Fallback vision LLM key (`GEMINI_API_KEY`, optional).
    pub gemini_api_key: Option<String>,
    /// Fallback vision model (`GEMINI_MODEL`, default `gemini-1.5-pro`).
    pub gemini_model: String,

    /// Auxiliary text LLM key (`DEEPSEEK_API_KEY`, optional).
    pub deepseek_api_key: Option<String>,
    /// Auxiliary text model (`DEEPSEEK_MODEL`, default `deepseek-chat`).
    pub deepseek_model: String,
    /// Auxiliary text API endpoint (`DEEPSEEK_BASE_URL`).
    pub deepseek_base_url: String,

    /// Maximum navigation steps per audit session (`MAX_STEPS`).
    pub max_steps: u32,
    /// Screenshot capture timeout in milliseconds (`SCREENSHOT_TIMEOUT`).
    pub screenshot_timeout_ms: u64,
    /// Browser viewport width in pixels (`DEFAULT_VIEWPORT_WIDTH`).
    pub viewport_width: u32,
    /// Browser viewport height in pixels (`DEFAULT_VIEWPORT_HEIGHT`).
    pub viewport_height: u32,

    /// Overlay grid cell size in pixels (`GRID_SIZE`).
    pub grid_size: u32,
    /// Overlay grid color as a CSS color string (`GRID_COLOR`).
    pub grid_color: String,

    /// Page navigation timeout in milliseconds (`NAVIGATION_TIMEOUT`).
    pub navigation_timeout_ms: u64,
    /// Post-navigation settle wait in milliseconds (`PAGE_LOAD_WAIT`).
    pub page_load_wait_ms: u64,

    /// Log level name (`LOG_LEVEL`, default `INFO`).
    pub log_level: String,
}

fn default_openai_model() -> String {
    "gpt-5-mini".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_deepseek_model() -> String {
    "deepseek-chat".to_string()
}

fn default_deepseek_base_url() -> String {
    "https://api.deepseek.com".to_string()
}

fn default_grid_color() -> String {
    "rgba(255,0,0,0.3)".to_string()
}

fn default_log_level() -> String {
    "INFO".to_string()
}

/// Outcome of the credential check: every mandatory and optional key is
/// inspected before success or failure is decided, so one run surfaces all
/// problems at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialReport {
    /// Missing mandatory credentials. Any entry here fails validation.
    pub errors: Vec<String>,
    /// Missing optional credentials. Reported, never fatal.
    pub warnings: Vec<String>,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::resolve(root.into(), |name| std::env::var(name).ok())
    }

    /// Resolve settings from a synthetic variable map.
    ///
    /// Keys absent from the map fall back to their defaults, exactly as
    /// unset environment variables do.
    pub fn from_map(
        root: impl Into<PathBuf>,
        vars: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        Self::resolve(root.into(), |name| vars.get(name).cloned())
    }

    fn resolve(
        root: PathBuf,
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            root,
            openai_api_key: get("OPENAI_API_KEY").filter(|v| !v.is_empty()),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(default_openai_model),
            gemini_api_key: get("GEMINI_API_KEY").filter(|v| !v.is_empty()),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(default_gemini_model),
            deepseek_api_key: get("DEEPSEEK_API_KEY").filter(|v| !v.is_empty()),
            deepseek_model: get("DEEPSEEK_MODEL").unwrap_or_else(default_deepseek_model),
            deepseek_base_url: get("DEEPSEEK_BASE_URL").unwrap_or_else(default_deepseek_base_url),
            max_steps: parse_numeric("MAX_STEPS", get("MAX_STEPS"), 15)?,
            screenshot_timeout_ms: parse_numeric(
                "SCREENSHOT_TIMEOUT",
                get("SCREENSHOT_TIMEOUT"),
                30_000,
            )?,
            viewport_width: parse_numeric(
                "DEFAULT_VIEWPORT_WIDTH",
                get("DEFAULT_VIEWPORT_WIDTH"),
                1920,
            )?,
            viewport_height: parse_numeric(
                "DEFAULT_VIEWPORT_HEIGHT",
                get("DEFAULT_VIEWPORT_HEIGHT"),
                1080,
            )?,
            grid_size: parse_numeric("GRID_SIZE", get("GRID_SIZE"), 100)?,
            grid_color: get("GRID_COLOR").unwrap_or_else(default_grid_color),
            navigation_timeout_ms: parse_numeric(
                "NAVIGATION_TIMEOUT",
                get("NAVIGATION_TIMEOUT"),
                30_000,
            )?,
            page_load_wait_ms: parse_numeric("PAGE_LOAD_WAIT", get("PAGE_LOAD_WAIT"), 2_000)?,
            log_level: get("LOG_LEVEL").unwrap_or_else(default_log_level),
        })
    }

    /// Directory for captured screenshots.
    pub fn screenshots_dir(&self) -> PathBuf {
        self.root.join("data").join("screenshots")
    }

    /// Directory for generated reports.
    pub fn reports_dir(&self) -> PathBuf {
        self.root.join("data").join("reports")
    }

    /// Directory for log files.
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    /// Path of the audit log file.
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join("audit.log")
    }

    /// Create the directory layout, including intermediate parents.
    ///
    /// Idempotent: a second call on an established layout is a no-op.
    /// Filesystem errors propagate unmodified.
    pub fn ensure_directories(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(self.screenshots_dir())?;
        fs::create_dir_all(self.reports_dir())?;
        fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }

    /// Inspect every credential and report what is missing.
    pub fn check_credentials(&self) -> CredentialReport {
        let mut report = CredentialReport::default();

        if self.openai_api_key.is_none() {
            report
                .errors
                .push("OPENAI_API_KEY is not set (required for primary LLM)".to_string());
        }

        if self.gemini_api_key.is_none() {
            report
                .warnings
                .push("GEMINI_API_KEY is not set (optional fallback)".to_string());
        }

        if self.deepseek_api_key.is_none() {
            report
                .warnings
                .push("DEEPSEEK_API_KEY is not set (optional auxiliary LLM)".to_string());
        }

        report
    }

    /// Validate that mandatory credentials are present.
    ///
    /// Missing optional credentials are printed to stdout as warnings and
    /// never block startup. Missing mandatory credentials are aggregated
    /// into a single [`ConfigError::MissingCredentials`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let report = self.check_credentials();

        if !report.warnings.is_empty() {
            println!("⚠ Warnings: {}", report.warnings.join(", "));
        }

        if report.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingCredentials(report.errors.join(", ")))
        }
    }

    /// Redacted view of the resolved settings for display.
    pub fn summary(&self) -> SettingsSummary {
        SettingsSummary {
            openai_model: self.openai_model.clone(),
            openai_key_set: self.openai_api_key.is_some(),
            gemini_model: self.gemini_model.clone(),
            gemini_key_set: self.gemini_api_key.is_some(),
            deepseek_model: self.deepseek_model.clone(),
            deepseek_base_url: self.deepseek_base_url.clone(),
            deepseek_key_set: self.deepseek_api_key.is_some(),
            max_steps: self.max_steps,
            screenshot_timeout_ms: self.screenshot_timeout_ms,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            grid_size: self.grid_size,
            grid_color: self.grid_color.clone(),
            navigation_timeout_ms: self.navigation_timeout_ms,
            page_load_wait_ms: self.page_load_wait_ms,
            log_level: self.log_level.clone(),
            screenshots_dir: self.screenshots_dir(),
            reports_dir: self.reports_dir(),
            logs_dir: self.logs_dir(),
        }
    }
}

/// Parse a numeric variable, falling back to the default when unset.
///
/// A present but non-numeric value is a startup error, never silently
/// replaced by the default.
fn parse_numeric<T>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match raw {
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::MalformedSetting { name, value }),
        },
        None => Ok(default),
    }
}

/// Resolved settings with credential values reduced to presence flags.
///
/// Safe to print or serialize; key material never leaves [`Settings`].
#[derive(Debug, Clone, Serialize)]
pub struct SettingsSummary {
    pub openai_model: String,
    pub openai_key_set: bool,
    pub gemini_model: String,
    pub gemini_key_set: bool,
    pub deepseek_model: String,
    pub deepseek_base_url: String,
    pub deepseek_key_set: bool,
    pub max_steps: u32,
    pub screenshot_timeout_ms: u64,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub grid_size: u32,
    pub grid_color: String,
    pub navigation_timeout_ms: u64,
    pub page_load_wait_ms: u64,
    pub log_level: String,
    pub screenshots_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub logs_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn empty_env() -> HashMap<String, String> {
        HashMap::new()
    }

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_map(Path::new("/tmp/uxaudit"), &vars)
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_map(Path::new("."), &empty_env()).unwrap();

        assert_eq!(settings.openai_api_key, None);
        assert_eq!(settings.openai_model, "gpt-5-mini");
        assert_eq!(settings.gemini_model, "gemini-1.5-pro");
        assert_eq!(settings.deepseek_model, "deepseek-chat");
        assert_eq!(settings.deepseek_base_url, "https://api.deepseek.com");
        assert_eq!(settings.max_steps, 15);
        assert_eq!(settings.screenshot_timeout_ms, 30_000);
        assert_eq!(settings.viewport_width, 1920);
        assert_eq!(settings.viewport_height, 1080);
        assert_eq!(settings.grid_size, 100);
        assert_eq!(settings.grid_color, "rgba(255,0,0,0.3)");
        assert_eq!(settings.navigation_timeout_ms, 30_000);
        assert_eq!(settings.page_load_wait_ms, 2_000);
        assert_eq!(settings.log_level, "INFO");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let settings = settings_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-5.2"),
            ("MAX_STEPS", "30"),
            ("DEFAULT_VIEWPORT_WIDTH", "1280"),
            ("GRID_COLOR", "rgba(0,0,255,0.5)"),
        ])
        .unwrap();

        assert_eq!(settings.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(settings.openai_model, "gpt-5.2");
        assert_eq!(settings.max_steps, 30);
        assert_eq!(settings.viewport_width, 1280);
        assert_eq!(settings.grid_color, "rgba(0,0,255,0.5)");
        // Untouched settings keep their defaults.
        assert_eq!(settings.viewport_height, 1080);
        assert_eq!(settings.grid_size, 100);
    }

    #[test]
    fn test_malformed_numeric_fails_load() {
        let err = settings_from(&[("MAX_STEPS", "abc")]).unwrap_err();
        match err {
            ConfigError::MalformedSetting { name, value } => {
                assert_eq!(name, "MAX_STEPS");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_key_counts_as_unset() {
        let settings = settings_from(&[("OPENAI_API_KEY", "")]).unwrap();
        assert_eq!(settings.openai_api_key, None);
    }

    #[test]
    fn test_check_reports_all_problems_at_once() {
        let settings = Settings::from_map(Path::new("."), &empty_env()).unwrap();
        let report = settings.check_credentials();

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("OPENAI_API_KEY"));
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("GEMINI_API_KEY"));
        assert!(report.warnings[1].contains("DEEPSEEK_API_KEY"));
    }

    #[test]
    fn test_validate_fails_without_primary_key() {
        let settings = Settings::from_map(Path::new("."), &empty_env()).unwrap();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_validate_succeeds_with_primary_key_only() {
        let settings = settings_from(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        // Optional keys are still reported as warnings, never as errors.
        let report = settings.check_credentials();
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 2);

        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_directory_layout() {
        let settings = Settings::from_map(Path::new("/srv/audit"), &empty_env()).unwrap();
        assert_eq!(
            settings.screenshots_dir(),
            PathBuf::from("/srv/audit/data/screenshots")
        );
        assert_eq!(
            settings.reports_dir(),
            PathBuf::from("/srv/audit/data/reports")
        );
        assert_eq!(settings.logs_dir(), PathBuf::from("/srv/audit/logs"));
        assert_eq!(settings.log_file(), PathBuf::from("/srv/audit/logs/audit.log"));
    }

    #[test]
    fn test_ensure_directories_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = Settings::from_map(tmp.path(), &empty_env()).unwrap();

        settings.ensure_directories().unwrap();
        settings.ensure_directories().unwrap();

        assert!(settings.screenshots_dir().is_dir());
        assert!(settings.reports_dir().is_dir());
        assert!(settings.logs_dir().is_dir());
    }

    #[test]
    fn test_summary_redacts_keys() {
        let settings = settings_from(&[("OPENAI_API_KEY", "sk-secret")]).unwrap();
        let summary = settings.summary();

        assert!(summary.openai_key_set);
        assert!(!summary.gemini_key_set);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("sk-secret"));
    }
}
