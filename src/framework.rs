//! @acp:module "Framework"
//! @acp:summary "Configuration holder with announce and partial update"
//! @acp:domain config
//! @acp:layer service
//!
//! `ApexFramework` owns exactly one [`ApexConfig`] and mediates every read and
//! write to it. Reads hand out clones, writes are field-wise merges, and
//! [`ApexFramework::announce`] reports the current values to a line sink.

use std::io::Write;
use std::path::Path;

use crate::config::{ApexConfig, ConfigUpdate};
use crate::error::Result;

/// Name printed in the announcement banner
pub const FRAMEWORK_NAME: &str = "APEX Enhanced Framework";

/// @acp:summary "Holder for the framework configuration"
#[derive(Debug, Clone)]
pub struct ApexFramework {
    config: ApexConfig,
}

impl ApexFramework {
    /// Create a holder that takes ownership of `config`
    pub fn new(config: ApexConfig) -> Self {
        Self { config }
    }

    /// Load a config file and build a holder from it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = ApexConfig::load(path)?;
        tracing::debug!("Loaded configuration for {} from {}", config.name, path.display());
        Ok(Self::new(config))
    }

    /// Write the banner, project and environment lines to `sink`
    ///
    /// Write failures are returned unchanged as [`crate::ApexError::Io`].
    pub fn announce<W: Write>(&self, sink: &mut W) -> Result<()> {
        let config = &self.config;
        writeln!(sink, "{} v{} initialized", FRAMEWORK_NAME, config.version)?;
        writeln!(sink, "Project: {}", config.name)?;
        writeln!(sink, "Environment: {}", config.environment)?;
        sink.flush()?;

        tracing::debug!(
            name = %config.name,
            version = %config.version,
            environment = %config.environment,
            "Framework announced"
        );
        Ok(())
    }

    /// Announce to standard output
    pub fn announce_stdout(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.announce(&mut lock)
    }

    /// Owned copy of the current configuration
    pub fn get_config(&self) -> ApexConfig {
        self.config.clone()
    }

    /// Borrowed, read-only view of the current configuration
    pub fn config(&self) -> &ApexConfig {
        &self.config
    }

    /// Merge `update` into the held configuration
    pub fn update_config(&mut self, update: ConfigUpdate) {
        if update.is_empty() {
            return;
        }
        tracing::trace!(fields = ?update.field_names(), "Updating configuration");
        self.config.merge(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use pretty_assertions::assert_eq;

    fn factory() -> ApexFramework {
        ApexFramework::new(ApexConfig::new(
            "Factory Test",
            "1.0.0",
            Environment::Development,
        ))
    }

    fn announced(framework: &ApexFramework) -> Vec<String> {
        let mut sink = Vec::new();
        framework.announce(&mut sink).unwrap();
        String::from_utf8(sink)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_new_holds_config() {
        let config = ApexConfig::new("Test Project", "1.0.0", Environment::Test);
        let framework = ApexFramework::new(config.clone());
        assert_eq!(framework.get_config(), config);
        assert_eq!(framework.config(), &config);
    }

    #[test]
    fn test_returned_copy_is_independent() {
        let framework = factory();
        let mut copy = framework.get_config();
        copy.name = "Mutated".into();
        copy.environment = Environment::Production;

        assert_eq!(framework.get_config().name, "Factory Test");
        assert_eq!(framework.get_config().environment, Environment::Development);
    }

    #[test]
    fn test_update_partial() {
        let mut framework = factory();
        framework.update_config(ConfigUpdate::new().name("Updated Project").version("2.0.0"));

        assert_eq!(
            framework.get_config(),
            ApexConfig::new("Updated Project", "2.0.0", Environment::Development)
        );
    }

    #[test]
    fn test_update_empty_is_noop() {
        let mut framework = factory();
        let before = framework.get_config();
        framework.update_config(ConfigUpdate::default());
        assert_eq!(framework.get_config(), before);
    }

    #[test]
    fn test_announce_lines() {
        let framework =
            ApexFramework::new(ApexConfig::new("Test Project", "1.0.0", Environment::Test));
        assert_eq!(
            announced(&framework),
            vec![
                "APEX Enhanced Framework v1.0.0 initialized",
                "Project: Test Project",
                "Environment: test",
            ]
        );
    }

    #[test]
    fn test_announce_reflects_updates() {
        let mut framework = factory();
        framework.update_config(ConfigUpdate::new().environment(Environment::Production));

        let lines = announced(&framework);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Environment: production");
        assert_eq!(framework.get_config().environment, Environment::Production);
    }

    #[test]
    fn test_announce_stdout() {
        let framework = factory();
        assert!(framework.announce_stdout().is_ok());
        assert_eq!(framework.get_config().name, "Factory Test");
    }

    #[test]
    fn test_announce_does_not_mutate() {
        let framework = factory();
        let before = framework.get_config();
        announced(&framework);
        announced(&framework);
        assert_eq!(framework.get_config(), before);
    }
}
