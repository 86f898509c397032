use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::types::{ResourceConsumption, ScoringPolicy};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub policy: Option<ScoringPolicy>,
    pub strict: Option<bool>,
    pub min_score: Option<i64>,
    pub defaults: Option<ResourceConsumption>,
    pub reductions: Option<ResourceConsumption>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let config: Config =
            toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
        Ok(config)
    }

    pub fn discover() -> Option<Self> {
        let path = Path::new("ecosim.toml");
        if path.exists() {
            Config::load(path).ok()
        } else {
            None
        }
    }
}
