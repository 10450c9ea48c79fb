// src/config.rs

use serde::Deserialize;
use std::{fs, path::Path};
use toml_edit::{DocumentMut, value};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub llm: LlmSection,
    pub pricing: PricingSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LlmSection {
    pub base_url: String,
    pub model: String,
    /// Response token budget; the extraction JSON is small.
    pub max_tokens: u32,
}

impl Default for LlmSection {
    fn default() -> Self {
        LlmSection {
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1024,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PricingSection {
    /// Operator-tunable fuel surcharge as a fraction of freight.
    pub fuel_surcharge_percent: f64,
    /// Mandatory pause between successive vision calls.
    pub page_delay_ms: u64,
}

impl Default for PricingSection {
    fn default() -> Self {
        PricingSection {
            fuel_surcharge_percent: 0.24,
            page_delay_ms: 2000,
        }
    }
}

impl Config {
    /// Load from a TOML file; a missing file means all defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Persist a new fuel surcharge without clobbering the rest of the
    /// file (comments and unrelated keys survive).
    pub fn update_fuel_surcharge(
        path: impl AsRef<Path>,
        new_percent: f64,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = fs::read_to_string(&path).unwrap_or_default();
        let mut doc = content.parse::<DocumentMut>()?;

        doc["pricing"]["fuel_surcharge_percent"] = value(new_percent);

        fs::write(&path, doc.to_string())?;
        Ok(())
    }
}
