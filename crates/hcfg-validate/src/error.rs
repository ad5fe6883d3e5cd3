//! Validation error taxonomy

/// Why a value was not accepted for a parameter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The canonical name is not registered for the component
    #[error("parameter not found: '{name}'")]
    ParamNotFound { name: String },

    /// The value was empty or whitespace only
    #[error("empty value for '{name}'")]
    ValueEmpty { name: String },

    /// The value is not syntactically of the required type
    #[error("invalid format for '{name}': '{value}' is not {expected}")]
    InvalidFormat {
        name: String,
        value: String,
        expected: &'static str,
    },

    /// The value is well-formed but outside the allowed domain
    #[error("constraint violated for '{name}': '{value}' {reason}")]
    ConstraintViolated {
        name: String,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    /// Create parameter-not-found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ParamNotFound { name: name.into() }
    }

    /// Parameter name the error refers to
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ParamNotFound { name }
            | Self::ValueEmpty { name }
            | Self::InvalidFormat { name, .. }
            | Self::ConstraintViolated { name, .. } => name,
        }
    }
}

/// Failure of a single checker, before the parameter name is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Not of the expected type; carries a short description of the type
    Format(&'static str),
    /// Right type, disallowed value; carries the reason
    Constraint(String),
}

impl Violation {
    /// Attach parameter name and value
    #[must_use]
    pub fn into_error(self, name: &str, value: &str) -> ValidationError {
        match self {
            Violation::Format(expected) => ValidationError::InvalidFormat {
                name: name.to_string(),
                value: value.to_string(),
                expected,
            },
            Violation::Constraint(reason) => ValidationError::ConstraintViolated {
                name: name.to_string(),
                value: value.to_string(),
                reason,
            },
        }
    }
}
