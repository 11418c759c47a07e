use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::formation::Formation;

/// The roster the renderer has always lined up when no config is given.
pub const DEFAULT_ROSTER: [&str; 6] = ["steve", "carl", "rachel", "tom", "mary", "butch"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct LineConfig {
    #[serde(default)]
    pub formation: Formation,
    #[serde(default)]
    pub actors: Vec<String>,
}

impl LineConfig {
    pub fn default_roster() -> Self {
        LineConfig {
            formation: Formation::default(),
            actors: DEFAULT_ROSTER.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: LineConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml_string = serde_yaml::to_string(self)?;
        fs::write(path, yaml_string)?;
        Ok(())
    }
}
