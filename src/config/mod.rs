//! @acp:module "Configuration"
//! @acp:summary "Framework configuration record, partial updates and file loading"
//! @acp:domain config
//! @acp:layer config
//!
//! The configuration record held by the framework, its partial update form,
//! and loading/saving from JSON or YAML files.

mod environment;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

pub use environment::Environment;

/// Conventional file name for a project configuration
pub const DEFAULT_CONFIG_FILE: &str = "apex.config.json";

/// @acp:summary "Framework configuration for a consuming project"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApexConfig {
    /// Display name of the consuming project
    pub name: String,

    /// Project version, kept as an opaque string
    pub version: String,

    /// Deployment environment
    pub environment: Environment,
}

impl ApexConfig {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            environment,
        }
    }

    /// Apply a partial update field by field; absent fields are kept
    pub fn merge(&mut self, update: ConfigUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(version) = update.version {
            self.version = version;
        }
        if let Some(environment) = update.environment {
            self.environment = environment;
        }
    }

    /// @acp:summary "Load config from a JSON file, or YAML when the extension says so"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        if is_yaml(path) {
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }

    /// @acp:summary "Save config to a file, format chosen by extension"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

/// Partial configuration; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.version.is_none() && self.environment.is_none()
    }

    /// Parse a partial update from JSON; missing keys stay unset
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Names of the fields this update sets
    pub(crate) fn field_names(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.version.is_some() {
            fields.push("version");
        }
        if self.environment.is_some() {
            fields.push("environment");
        }
        fields
    }
}
