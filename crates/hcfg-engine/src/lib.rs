//! Configuration engine for Hadoop-ecosystem services
//!
//! Takes `(component, raw name, raw value[, file])` from a remote command
//! dispatcher and turns it into a validated, format-preserving edit of the
//! right config file.
//!
//! # Pipeline
//!
//! 1. **Canonicalize**: map the raw name onto one registered parameter
//! 2. **Validate**: check the value against the parameter's semantic type
//! 3. **Locate**: find (or create) the config file across install layouts
//! 4. **Mutate**: update or append the entry and persist the file
//! 5. **Report**: fold the outcome into a [`StatusReport`]
//!
//! # Example
//!
//! ```no_run
//! use hcfg_engine::{ConfigEngine, ConfigRequest, EngineConfig};
//! use hcfg_registry::Component;
//!
//! let engine = ConfigEngine::new(EngineConfig::default())?;
//! let report = engine.execute(&ConfigRequest::new(Component::Hdfs, "dfs_replication", "3"));
//! println!("{}", report.to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod engine;
mod error;
pub mod logging;
mod request;
mod status;

pub use config::{ConfigError, EngineConfig};
pub use engine::ConfigEngine;
pub use error::EngineError;
pub use request::{AppliedChange, ConfigRequest, ResolvedParam};
pub use status::{Status, StatusReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
