//! Semantic validation of parameter values
//!
//! Given a canonical name and a raw value, decide whether the value is
//! acceptable. Unknown names and blank values are rejected first; then an
//! exact per-component rule is applied, falling back to name heuristics,
//! and finally to accepting anything.
//!
//! # Example
//!
//! ```
//! use hcfg_registry::Component;
//! use hcfg_validate::{Validator, ValidationError};
//!
//! let hdfs = Validator::for_component(Component::Hdfs);
//! assert!(hdfs.validate("dfs.replication", "3").is_ok());
//! assert!(matches!(
//!     hdfs.validate("dfs.replication", "-1"),
//!     Err(ValidationError::ConstraintViolated { .. })
//! ));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod checks;
mod error;
mod profiles;
mod rules;
mod validator;

pub use error::{ValidationError, Violation};
pub use profiles::{profile, Profile};
pub use rules::{heuristic_rule, Heuristic, Rule, HEURISTICS};
pub use validator::{validate, RuleSource, Validator};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
