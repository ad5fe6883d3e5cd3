//! Error types for registry construction and lookup

/// Errors raised while building or addressing a parameter registry
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    /// A `matchPattern` failed to compile
    #[error("invalid match pattern for '{canonical}': {message}")]
    InvalidPattern { canonical: String, message: String },

    /// The dispatcher named a component this engine does not manage
    #[error("unknown component: '{0}'")]
    UnknownComponent(String),
}

impl RegistryError {
    /// Create invalid pattern error for a canonical name
    pub fn invalid_pattern(canonical: impl Into<String>, source: &regex::Error) -> Self {
        Self::InvalidPattern {
            canonical: canonical.into(),
            message: source.to_string(),
        }
    }
}
