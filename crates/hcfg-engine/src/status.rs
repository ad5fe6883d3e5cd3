//! Status taxonomy reported back to the command dispatcher

use crate::config::ConfigError;
use crate::error::EngineError;
use crate::request::{AppliedChange, ResolvedParam};
use hcfg_mutate::MutationError;
use hcfg_registry::RegistryError;
use hcfg_validate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Outcome of a configuration request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    ParamNotFound,
    ValueEmpty,
    InvalidFormat,
    ConstraintViolated,
    FileNotFound,
    FileReadError,
    FileWriteError,
    XmlParseError,
    XmlInvalidRoot,
    XmlUpdateError,
    InvalidConfigFileType,
    SaveFailed,
}

impl Status {
    /// Every status, ordered by numeric code
    pub const ALL: [Status; 13] = [
        Status::Success,
        Status::ParamNotFound,
        Status::ValueEmpty,
        Status::InvalidFormat,
        Status::ConstraintViolated,
        Status::FileNotFound,
        Status::FileReadError,
        Status::FileWriteError,
        Status::XmlParseError,
        Status::XmlInvalidRoot,
        Status::XmlUpdateError,
        Status::InvalidConfigFileType,
        Status::SaveFailed,
    ];

    /// Stable string code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::ParamNotFound => "PARAM_NOT_FOUND",
            Status::ValueEmpty => "VALUE_EMPTY",
            Status::InvalidFormat => "INVALID_FORMAT",
            Status::ConstraintViolated => "CONSTRAINT_VIOLATED",
            Status::FileNotFound => "FILE_NOT_FOUND",
            Status::FileReadError => "FILE_READ_ERROR",
            Status::FileWriteError => "FILE_WRITE_ERROR",
            Status::XmlParseError => "XML_PARSE_ERROR",
            Status::XmlInvalidRoot => "XML_INVALID_ROOT",
            Status::XmlUpdateError => "XML_UPDATE_ERROR",
            Status::InvalidConfigFileType => "INVALID_CONFIG_FILE_TYPE",
            Status::SaveFailed => "SAVE_FAILED",
        }
    }

    /// Stable numeric code, `0` for success
    #[inline]
    #[must_use]
    pub const fn numeric(self) -> u8 {
        self as u8
    }

    #[inline]
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&ValidationError> for Status {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::ParamNotFound { .. } => Status::ParamNotFound,
            ValidationError::ValueEmpty { .. } => Status::ValueEmpty,
            ValidationError::InvalidFormat { .. } => Status::InvalidFormat,
            ValidationError::ConstraintViolated { .. } => Status::ConstraintViolated,
        }
    }
}

impl From<&MutationError> for Status {
    fn from(err: &MutationError) -> Self {
        match err {
            MutationError::FileNotFound { .. } => Status::FileNotFound,
            MutationError::FileReadError { .. } => Status::FileReadError,
            MutationError::FileWriteError { .. } => Status::FileWriteError,
            MutationError::XmlParseError { .. } => Status::XmlParseError,
            MutationError::XmlInvalidRoot { .. } => Status::XmlInvalidRoot,
            MutationError::XmlUpdateError { .. } => Status::XmlUpdateError,
            MutationError::InvalidConfigFileType { .. } => Status::InvalidConfigFileType,
            MutationError::SaveFailed { .. } => Status::SaveFailed,
        }
    }
}

impl From<&EngineError> for Status {
    fn from(err: &EngineError) -> Self {
        match err {
            EngineError::Validation(e) => e.into(),
            EngineError::Mutation(e) => e.into(),
            // No registry means nothing can be looked up
            EngineError::Registry(RegistryError::UnknownComponent(_) | RegistryError::InvalidPattern { .. }) => {
                Status::ParamNotFound
            }
            EngineError::Config(ConfigError::Io { .. }) => Status::FileReadError,
            EngineError::Config(_) => Status::InvalidConfigFileType,
        }
    }
}

/// What the dispatcher receives for each request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: Status,
    /// Numeric form of `status`
    pub code: u8,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<ResolvedParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StatusReport {
    /// Report with no parameter or path attached
    #[must_use]
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            code: status.numeric(),
            message: message.into(),
            param: None,
            path: None,
        }
    }

    /// Successful change
    #[must_use]
    pub fn applied(change: &AppliedChange) -> Self {
        let verb = match change.action {
            hcfg_mutate::MutationAction::Updated => "updated",
            hcfg_mutate::MutationAction::Appended => "added",
        };
        let message = format!(
            "{} {} = {} in {}",
            verb,
            change.param.canonical_name,
            change.param.value,
            change.param.config_file
        );
        Self {
            param: Some(change.param.clone()),
            path: Some(change.path.clone()),
            ..Self::new(Status::Success, message)
        }
    }

    /// Failed request
    #[must_use]
    pub fn failed(err: &EngineError) -> Self {
        let mut report = Self::new(Status::from(err), err.to_string());
        if let EngineError::Mutation(e) = err {
            report.path = e.path().map(PathBuf::from);
        }
        report
    }

    /// Attach a resolved parameter (builder pattern)
    #[must_use]
    pub fn with_param(mut self, param: ResolvedParam) -> Self {
        self.param = Some(param);
        self
    }

    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Serialize for the dispatcher
    ///
    /// # Errors
    /// Propagates `serde_json` failures
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
