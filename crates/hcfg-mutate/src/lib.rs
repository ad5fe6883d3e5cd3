//! Config file location and format-preserving mutation
//!
//! Finds a component's config file across install layouts and applies a
//! single-key update to it without disturbing anything else in the file.
//!
//! # Core Concepts
//!
//! - [`Locator`]: probes `$HOME`-relative, configured and OS-default directories
//! - [`XmlConfig`]: Hadoop property XML and flat-element XML documents
//! - [`LineConfig`]: properties, `key: value`, spark-defaults, env and ini files
//! - [`Mutator`]: locate → load → scan → update/append → persist
//!
//! # Example
//!
//! ```no_run
//! use hcfg_mutate::{Locator, Mutator};
//! use hcfg_registry::Component;
//!
//! let mutator = Mutator::new(Locator::new());
//! let outcome = mutator.apply(Component::Hdfs, "hdfs-site.xml", "dfs.replication", "3")?;
//! println!("wrote {}", outcome.path.display());
//! # Ok::<(), hcfg_mutate::MutationError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod lines;
mod locate;
mod mutator;
mod persist;
mod xml;

pub use error::MutationError;
pub use lines::LineConfig;
pub use locate::{ConfigFileLocation, EnvSource, Locator, MapEnv, ProcessEnv};
pub use mutator::{read_at, MutationAction, MutationOutcome, MutationStage, Mutator};
pub use xml::{XmlConfig, XmlShape, DEFAULT_DECLARATION};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
