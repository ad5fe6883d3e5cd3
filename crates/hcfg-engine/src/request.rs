//! Request and result types

use hcfg_mutate::MutationAction;
use hcfg_registry::Component;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One incoming "set parameter" command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRequest {
    pub component: Component,
    /// Parameter name as typed by the operator
    pub raw_name: String,
    pub raw_value: String,
    /// Restricts the lookup to one file when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_file: Option<String>,
}

impl ConfigRequest {
    #[must_use]
    pub fn new(component: Component, raw_name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            component,
            raw_name: raw_name.into(),
            raw_value: raw_value.into(),
            explicit_file: None,
        }
    }

    /// Target a specific file (builder pattern)
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.explicit_file = Some(file.into());
        self
    }
}

/// A request after canonicalization and validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedParam {
    pub canonical_name: String,
    /// Trimmed value that will be written
    pub value: String,
    pub config_file: String,
}

/// A change that was written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedChange {
    pub param: ResolvedParam,
    /// Full path of the file written
    pub path: PathBuf,
    pub action: MutationAction,
    /// The file did not exist before this change
    pub created: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_from_dispatcher_json() {
        let req: ConfigRequest = serde_json::from_str(
            r#"{"component":"kafka","rawName":"log_retention_hours","rawValue":"72"}"#,
        )
        .unwrap();
        assert_eq!(req, ConfigRequest::new(Component::Kafka, "log_retention_hours", "72"));

        let with_file: ConfigRequest = serde_json::from_str(
            r#"{"component":"kafka","rawName":"log4j.rootLogger","rawValue":"INFO, stdout","explicitFile":"connect-log4j.properties"}"#,
        )
        .unwrap();
        assert_eq!(with_file.explicit_file.as_deref(), Some("connect-log4j.properties"));
    }

    #[test]
    fn resolved_param_uses_camel_case() {
        let param = ResolvedParam {
            canonical_name: "dfs.replication".into(),
            value: "3".into(),
            config_file: "hdfs-site.xml".into(),
        };
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["canonicalName"], "dfs.replication");
        assert_eq!(json["configFile"], "hdfs-site.xml");
    }
}
