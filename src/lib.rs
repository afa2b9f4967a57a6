#![forbid(unsafe_code)]

//! @acp:module "APEX Library"
//! @acp:summary "Configuration holder for the APEX Enhanced workflow"
//! @acp:domain config
//! @acp:layer api
//! @acp:stability stable
//!
//! # APEX Enhanced
//!
//! Configuration holder for projects that follow the APEX Enhanced workflow.
//!
//! ## Example
//!
//! ```rust
//! use apex::{ApexConfig, ApexFramework, ConfigUpdate, Environment};
//!
//! fn main() -> apex::Result<()> {
//!     let mut framework = ApexFramework::new(ApexConfig::new(
//!         "My Project",
//!         "1.0.0",
//!         Environment::Development,
//!     ));
//!
//!     framework.update_config(ConfigUpdate::new().version("1.1.0"));
//!
//!     let mut out = Vec::new();
//!     framework.announce(&mut out)?;
//!     assert!(String::from_utf8_lossy(&out).contains("v1.1.0"));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod framework;
pub mod logging;

// Re-exports
pub use config::{ApexConfig, ConfigUpdate, Environment, DEFAULT_CONFIG_FILE};
pub use error::{ApexError, Result};
pub use framework::{ApexFramework, FRAMEWORK_NAME};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
