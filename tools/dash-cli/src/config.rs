//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use dash_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_NAMES: [&str; 3] = ["dash.toml", ".dash.toml", "dash.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashConfig {
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Page rendering configuration.
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashConfig {
    /// Load config from a file, TOML or JSON by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config text.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Check the config for problems that parsing cannot catch.
    pub fn validate(&self) -> Validation {
        let mut validation = Validation::default();

        if self.render.title.trim().is_empty() {
            validation.errors.push("render.title must not be empty".to_string());
        }

        if self.render.output.trim().is_empty() {
            validation.errors.push("render.output must not be empty".to_string());
        } else if !has_extension(&self.render.output, &["html", "htm"]) {
            validation.warnings.push(format!(
                "render.output '{}' does not end in .html",
                self.render.output
            ));
        }

        if let Some(path) = &self.catalog.path {
            if path.trim().is_empty() {
                validation
                    .errors
                    .push("catalog.path must not be empty when set".to_string());
            } else if !has_extension(path, &["json"]) {
                validation.warnings.push(format!(
                    "catalog.path '{}' is read as JSON but does not end in .json",
                    path
                ));
            }
        }

        validation
    }
}

/// Problems found by [`DashConfig::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Page rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Page title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Output file for `dash render`.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_title() -> String {
    dashboard::DEFAULT_TITLE.to_string()
}

fn default_output() -> String {
    "dashboard.html".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output: default_output(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

fn has_extension(path: &str, extensions: &[&str]) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| {
            extensions.iter().any(|ext| e.eq_ignore_ascii_case(ext))
        })
}

/// Generate a default dash.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Catalog dashboard configuration

[catalog]
# JSON array of products; omit to use the built-in catalog.
# path = "catalog.json"

[render]
title = "{title}"
output = "dashboard.html"

[logging]
# trace | debug | info | warn | error
level = "info"
# human | json
format = "human"
"#,
        title = dashboard::DEFAULT_TITLE
    )
}
