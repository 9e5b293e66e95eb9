// src/config.rs

use crate::core::error::ConfigError;
use crate::core::models::RuleId;
use crate::core::rules::Rule;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// Which rules are switched on for one scan.
///
/// Rules the config does not mention keep their catalog default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanConfig {
    rules: BTreeMap<RuleId, bool>,
}

impl ScanConfig {
    pub fn from_entries(entries: impl IntoIterator<Item = (RuleId, bool)>) -> Self {
        Self { rules: entries.into_iter().collect() }
    }

    pub fn is_enabled(&self, rule: &Rule) -> bool {
        self.get(rule.id).unwrap_or(rule.enabled_by_default)
    }

    /// Explicit setting for a rule, if the config had one.
    pub fn get(&self, id: RuleId) -> Option<bool> {
        self.rules.get(&id).copied()
    }

    /// Parses a YAML mapping of rule names to booleans.
    ///
    /// Besides YAML booleans, the YAML 1.1 spellings `yes`/`no`/`on`/`off`/`y`/`n`
    /// are accepted in any case, so older config files keep their meaning.
    /// Unknown keys are ignored, as are known keys with a non-boolean value. When
    /// both `passwords` and its legacy name `password_inputs` are present, the
    /// canonical key wins. An empty document is an empty config.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let mapping = match serde_yaml::from_str::<Value>(content)? {
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            _ => return Err(ConfigError::NotAMapping),
        };

        let mut rules = BTreeMap::new();
        for (key, value) in &mapping {
            let Some(name) = key.as_str() else {
                warn!(key = ?key, "Ignoring non-string config key.");
                continue;
            };
            let Ok(id) = RuleId::from_str(name) else {
                info!(key = name, "Ignoring unknown config key.");
                continue;
            };
            let Some(enabled) = parse_bool(value) else {
                warn!(key = name, value = ?value, "Ignoring config key with non-boolean value.");
                eprintln!("Config warning: `{}` is not a boolean, keeping the default for this check.", name);
                continue;
            };

            if name == id.to_string() {
                rules.insert(id, enabled);
            } else {
                rules.entry(id).or_insert(enabled);
            }
        }

        Ok(Self { rules })
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }
}

fn parse_bool(value: &Value) -> Option<bool> {
    if let Some(b) = value.as_bool() {
        return Some(b);
    }
    match value.as_str()?.to_ascii_lowercase().as_str() {
        "yes" | "y" | "on" | "true" => Some(true),
        "no" | "n" | "off" | "false" => Some(false),
        _ => None,
    }
}

/// Loads the config for this invocation. Never fails: without a path, or when the
/// file cannot be read or parsed, every rule keeps its default.
pub fn load_config(path: Option<&Path>) -> ScanConfig {
    let Some(path) = path else {
        return ScanConfig::default();
    };

    match ScanConfig::from_path(path) {
        Ok(config) => {
            info!(path = %path.display(), config = ?config, "Loaded config.");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Falling back to default config.");
            eprintln!("Config error: {}. Using default configuration.", e);
            ScanConfig::default()
        }
    }
}
