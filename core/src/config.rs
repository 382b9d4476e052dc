/// Configuration for a harvesting session
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestConfig {
    /// Function names recognized as message-extraction call sites,
    /// each taking `(id, domain)` as its first two literal arguments.
    #[serde(default = "default_extraction_functions")]
    pub extraction_functions: Vec<String>,

    /// Lower-cased extensions of translatable source files.
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    /// Lower-cased extensions of pre-existing catalog files.
    #[serde(default = "default_catalog_extensions")]
    pub catalog_extensions: Vec<String>,

    /// Target languages for this session.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Pause between consecutive offers to the download sink.
    #[serde(default = "default_download_delay_ms")]
    pub download_delay_ms: u64,

    /// Overrides the translation service endpoint.
    #[serde(default)]
    pub translation_endpoint: Option<String>,
}

fn default_extraction_functions() -> Vec<String> {
    vec![
        "__".to_string(),
        "_e".to_string(),
        "esc_attr__".to_string(),
        "esc_attr_e".to_string(),
        "esc_html__".to_string(),
        "esc_html_e".to_string(),
    ]
}

fn default_source_extensions() -> Vec<String> {
    vec!["php".to_string()]
}

fn default_catalog_extensions() -> Vec<String> {
    vec!["po".to_string()]
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_download_delay_ms() -> u64 {
    100
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            extraction_functions: default_extraction_functions(),
            source_extensions: default_source_extensions(),
            catalog_extensions: default_catalog_extensions(),
            languages: default_languages(),
            download_delay_ms: default_download_delay_ms(),
            translation_endpoint: None,
        }
    }
}

impl HarvestConfig {
    /// Loads a JSON config file; missing keys fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
