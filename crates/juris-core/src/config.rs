//! Configuration types for juris.
//!
//! [`Config::load`] reads `~/.config/juris/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. Environment variables of the
//! form `JURIS__SECTION__KEY` override the file. [`Config::defaults`]
//! returns the built-in defaults without touching the filesystem or the
//! environment (useful in tests).

use crate::validation::ProcessNumberRule;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[webhooks]
process_url       = "https://n8n.trocaze.com.br/webhook-test/21ea845a-5ef0-412f-8286-d45ad5550480"
jurisprudence_url = "https://webhook.trocaze.com.br/webhook/98b33bb0-3564-4cac-b59b-6530707f4281"
# No default endpoint exists for movement summaries; set one to enable them.
summary_url       = ""
timeout_secs      = 30

[validation]
# "min_digits" (at least 20) or "exact_digits" (exactly 20)
process_number_rule = "min_digits"

[ui]
# "inline" (alert inside the form) or "toast" (notification + modal)
error_presentation = "inline"
toast_seconds      = 4
theme              = "default"
page_size          = 10
"#;

const ENV_PREFIX: &str = "JURIS";
const ENV_SEPARATOR: &str = "__";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub webhooks: WebhooksConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[webhooks]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhooksConfig {
    #[serde(default = "default_process_url")]
    pub process_url: String,
    #[serde(default = "default_jurisprudence_url")]
    pub jurisprudence_url: String,
    /// Empty disables the movement summary.
    #[serde(default)]
    pub summary_url: String,
    /// Budget for the jurisprudence request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_process_url() -> String {
    "https://n8n.trocaze.com.br/webhook-test/21ea845a-5ef0-412f-8286-d45ad5550480".to_string()
}
fn default_jurisprudence_url() -> String {
    "https://webhook.trocaze.com.br/webhook/98b33bb0-3564-4cac-b59b-6530707f4281".to_string()
}
fn default_timeout_secs() -> u64 { 30 }

impl Default for WebhooksConfig {
    fn default() -> Self {
        Self {
            process_url: default_process_url(),
            jurisprudence_url: default_jurisprudence_url(),
            summary_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[validation]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub process_number_rule: ProcessNumberRule,
}

/// Where query errors and "not found" results are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPresentation {
    /// Alert box inside the form / result pane.
    #[default]
    Inline,
    /// Transient toast; "not found" opens a modal.
    Toast,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub error_presentation: ErrorPresentation,
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_toast_seconds() -> u64 { 4 }
fn default_theme() -> String { "default".to_string() }
fn default_page_size() -> u32 { 10 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            error_presentation: ErrorPresentation::default(),
            toast_seconds: default_toast_seconds(),
            theme: default_theme(),
            page_size: default_page_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/juris/config.toml`, layered on top of the
    /// built-in defaults and under the environment. Creates the file with
    /// defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "config: wrote defaults");
        }

        Self::build(Some((&path, false)), environment())
    }

    /// Load from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::build(Some((path, true)), environment())
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

    fn build(file: Option<(&Path, bool)>, env: config::Environment) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some((path, required)) = file {
            builder = builder.add_source(config::File::from(path).required(required));
        }
        let cfg: Config = builder.add_source(env).build()?.try_deserialize()?;
        tracing::debug!(
            rule = %cfg.validation.process_number_rule,
            presentation = ?cfg.ui.error_presentation,
            timeout = cfg.webhooks.timeout_secs,
            "config: loaded"
        );
        Ok(cfg)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Default location of the user configuration file.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("juris")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        environment().source(Some(map))
    }

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.webhooks.timeout_secs, 30);
        assert!(cfg.webhooks.summary_url.is_empty());
        assert!(cfg.webhooks.jurisprudence_url.starts_with("https://"));
        assert_eq!(cfg.validation.process_number_rule, ProcessNumberRule::MinDigits);
        assert_eq!(cfg.ui.error_presentation, ErrorPresentation::Inline);
        assert_eq!(cfg.ui.page_size, 10);
        assert_eq!(cfg.ui.theme, "default");
    }

    #[test]
    fn serde_defaults_match_embedded_toml() {
        let d = Config::defaults();
        assert_eq!(d.webhooks.process_url, WebhooksConfig::default().process_url);
        assert_eq!(d.webhooks.jurisprudence_url, WebhooksConfig::default().jurisprudence_url);
        assert_eq!(d.ui.toast_seconds, UiConfig::default().toast_seconds);
    }

    #[test]
    fn user_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[validation]\nprocess_number_rule = \"exact_digits\"\n\n[ui]\nerror_presentation = \"toast\"\n",
        )
        .unwrap();

        let cfg = Config::build(Some((&path, true)), env_from(&[])).unwrap();
        assert_eq!(cfg.validation.process_number_rule, ProcessNumberRule::ExactDigits);
        assert_eq!(cfg.ui.error_presentation, ErrorPresentation::Toast);
        assert_eq!(cfg.webhooks.timeout_secs, 30);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[webhooks]\ntimeout_secs = 10\n").unwrap();

        let env = env_from(&[
            ("JURIS__WEBHOOKS__TIMEOUT_SECS", "5"),
            ("JURIS__WEBHOOKS__SUMMARY_URL", "http://localhost:9/resumo"),
        ]);
        let cfg = Config::build(Some((&path, true)), env).unwrap();
        assert_eq!(cfg.webhooks.timeout_secs, 5);
        assert_eq!(cfg.webhooks.summary_url, "http://localhost:9/resumo");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn invalid_rule_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[validation]\nprocess_number_rule = \"qualquer\"\n").unwrap();
        assert!(Config::build(Some((&path, true)), env_from(&[])).is_err());
    }
}
