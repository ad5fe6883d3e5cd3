//! Parameter registries for Hadoop-ecosystem components
//!
//! Static, per-component product data and the canonicalizer that resolves
//! arbitrary spellings of a parameter name to one registered entry.
//!
//! # Core Concepts
//!
//! - [`Component`]: the closed set of managed services
//! - [`Registry`]: ordered, immutable list of [`ParamSpec`] entries
//! - [`canonicalize`]: raw name → [`CanonicalMatch`] (first match wins)
//! - [`ConfigFormat`]: how a component's target file is structured
//! - [`ComponentLayout`]: where the component's config directory may live
//!
//! # Example
//!
//! ```
//! use hcfg_registry::{Component, Registry};
//!
//! let hdfs = Registry::for_component(Component::Hdfs);
//! let found = hdfs.canonicalize("dfs_replication").unwrap();
//! assert_eq!(found.canonical_name, "dfs.replication");
//! assert_eq!(found.target_file, "hdfs-site.xml");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod canonical;
mod component;
mod data;
mod error;
mod format;
mod layout;
mod registry;

// Re-exports
pub use canonical::{canonicalize, canonicalize_in_file, CanonicalMatch};
pub use component::Component;
pub use data::{table, ComponentTable};
pub use error::RegistryError;
pub use format::{ConfigFileSpec, ConfigFormat, LineStyle};
pub use layout::ComponentLayout;
pub use registry::{param, param_re, ParamSpec, PatternStyle, Registry, SpecDef};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
