//! Engine error type

use crate::config::ConfigError;
use hcfg_mutate::MutationError;
use hcfg_registry::RegistryError;
use hcfg_validate::ValidationError;

/// Any failure of a configuration request
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Lookup or value rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// File could not be located, read, updated or written
    #[error(transparent)]
    Mutation(#[from] MutationError),

    /// Unknown component or broken registry
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Engine configuration problem
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Whether the request was rejected before touching the filesystem
    #[inline]
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Registry(_))
    }
}
