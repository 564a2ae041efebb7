//! Configuration file support for license-builder.
//!
//! Provides YAML-based configuration through `license-builder.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::license_generation::domain::{ProductType, ServerInfoPatch};
use crate::license_generation::services::{ParseOptions, UnknownProductPolicy};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-builder.config.yml";
pub const DEFAULT_STATE_FILE: &str = ".license-builder/state.json";
pub const DEFAULT_LICENSE_EXTENSION: &str = "lic";

/// A port given either as a YAML number or a string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(u64),
    Text(String),
}

impl PortValue {
    fn is_valid(&self) -> bool {
        match self {
            PortValue::Number(n) => u16::try_from(*n).is_ok(),
            PortValue::Text(s) => s.trim().parse::<u16>().is_ok(),
        }
    }
}

impl fmt::Display for PortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortValue::Number(n) => write!(f, "{}", n),
            PortValue::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub state_file: Option<PathBuf>,
    pub communication_port: Option<PortValue>,
    pub isv_port: Option<PortValue>,
    pub destination_folder: Option<PathBuf>,
    pub search_folder: Option<PathBuf>,
    pub license_extension: Option<String>,
    pub fallback_product: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Server values applied to a state that has never been saved or was cleared.
    pub fn server_defaults(&self) -> ServerInfoPatch {
        ServerInfoPatch {
            communication_port: self.communication_port.as_ref().map(|p| p.to_string()),
            isv_port: self.isv_port.as_ref().map(|p| p.to_string()),
            ..Default::default()
        }
    }

    pub fn state_file(&self) -> PathBuf {
        self.state_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE))
    }

    pub fn license_extension(&self) -> String {
        self.license_extension
            .as_deref()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .unwrap_or_else(|| DEFAULT_LICENSE_EXTENSION.to_string())
    }

    /// Parser options for `load`; `cli_fallback` wins over the config value.
    pub fn parse_options(&self, cli_fallback: Option<ProductType>) -> Result<ParseOptions> {
        let fallback = match cli_fallback {
            Some(product) => Some(product),
            None => self
                .fallback_product
                .as_deref()
                .map(|name| name.parse::<ProductType>().map_err(anyhow::Error::msg))
                .transpose()?,
        };
        Ok(ParseOptions {
            unknown_product: fallback
                .map(UnknownProductPolicy::Fallback)
                .unwrap_or_default(),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref extension) = config.license_extension {
        if extension.trim().trim_start_matches('.').is_empty() {
            bail!(
                "Invalid config: license_extension must not be empty.\n\n\
                 💡 Hint: Use the extension without a dot, e.g. \"lic\"."
            );
        }
    }

    if let Some(ref name) = config.fallback_product {
        if ProductType::from_license_name(name).is_none() {
            let known = ProductType::ALL
                .iter()
                .map(|p| p.label())
                .collect::<Vec<_>>()
                .join(", ");
            bail!(
                "Invalid config: fallback_product '{}' is not a known product.\n\n\
                 💡 Hint: Use one of: {}.",
                name,
                known
            );
        }
    }

    for (field, value) in [
        ("communication_port", &config.communication_port),
        ("isv_port", &config.isv_port),
    ] {
        if let Some(port) = value {
            if !port.is_valid() {
                bail!(
                    "Invalid config: {} '{}' is not a valid port number.\n\n\
                     💡 Hint: Use a number between 0 and 65535.",
                    field,
                    port
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
