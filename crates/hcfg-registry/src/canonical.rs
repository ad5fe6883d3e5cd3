//! Canonicalization: raw parameter name → registered parameter
//!
//! Resolution is a linear scan in declaration order; registries hold tens to
//! a few hundred entries, so the scan is cheaper than any index over the
//! compiled patterns.

use crate::registry::{ParamSpec, Registry};
use serde::Serialize;

/// A raw name resolved to a registered parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalMatch {
    /// Canonical parameter name
    pub canonical_name: String,
    /// Config file the parameter lives in
    pub target_file: String,
}

impl CanonicalMatch {
    /// Create a match
    #[inline]
    #[must_use]
    pub fn new(canonical_name: impl Into<String>, target_file: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            target_file: target_file.into(),
        }
    }
}

impl From<&ParamSpec> for CanonicalMatch {
    fn from(spec: &ParamSpec) -> Self {
        Self::new(spec.canonical_name(), spec.target_file())
    }
}

/// Resolve `raw_name` against `registry`; first matching entry wins
#[must_use]
pub fn canonicalize(raw_name: &str, registry: &Registry) -> Option<CanonicalMatch> {
    let raw_name = raw_name.trim();
    let found = registry
        .entries()
        .iter()
        .find(|spec| spec.matches(raw_name))
        .map(CanonicalMatch::from);
    if found.is_none() {
        tracing::debug!(component = %registry.component(), raw_name, "no registry entry matches");
    }
    found
}

/// Resolve `raw_name` among the entries declared for `target_file` only
///
/// Used when the caller names the file explicitly, which disambiguates
/// canonical names shared by several files (`log4j.rootLogger`).
#[must_use]
pub fn canonicalize_in_file(
    raw_name: &str,
    target_file: &str,
    registry: &Registry,
) -> Option<CanonicalMatch> {
    let raw_name = raw_name.trim();
    registry
        .entries()
        .iter()
        .filter(|spec| spec.target_file() == target_file)
        .find(|spec| spec.matches(raw_name))
        .map(CanonicalMatch::from)
}

impl Registry {
    /// Method form of [`canonicalize`]
    #[inline]
    #[must_use]
    pub fn canonicalize(&self, raw_name: &str) -> Option<CanonicalMatch> {
        canonicalize(raw_name, self)
    }

    /// Method form of [`canonicalize_in_file`]
    #[inline]
    #[must_use]
    pub fn canonicalize_in_file(&self, raw_name: &str, target_file: &str) -> Option<CanonicalMatch> {
        canonicalize_in_file(raw_name, target_file, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::registry::{param, param_re, PatternStyle};
    use proptest::prelude::*;

    fn hdfs() -> &'static Registry {
        Registry::for_component(Component::Hdfs)
    }

    #[test]
    fn dfs_replication_resolves_to_hdfs_site() {
        let m = canonicalize("dfs.replication", hdfs()).unwrap();
        assert_eq!(m, CanonicalMatch::new("dfs.replication", "hdfs-site.xml"));
    }

    #[test]
    fn separator_class_registry_is_separator_insensitive() {
        for raw in ["dfs.replication", "dfs_replication", "dfs-replication"] {
            let m = canonicalize(raw, hdfs()).unwrap();
            assert_eq!(m.canonical_name, "dfs.replication", "raw name {raw}");
        }
    }

    #[test]
    fn escaped_dot_registry_rejects_other_separators() {
        let registry = Registry::from_specs(
            Component::Hdfs,
            PatternStyle::EscapedDots,
            &[param("dfs.replication", "hdfs-site.xml")],
        )
        .unwrap();

        assert!(canonicalize("dfs.replication", &registry).is_some());
        assert!(canonicalize("dfs_replication", &registry).is_none());
        assert!(canonicalize("dfs-replication", &registry).is_none());
    }

    #[test]
    fn builtin_hbase_is_separator_sensitive() {
        let hbase = Registry::for_component(Component::Hbase);
        assert!(canonicalize("hbase.rootdir", hbase).is_some());
        assert!(canonicalize("hbase_rootdir", hbase).is_none());
    }

    #[test]
    fn explicit_pattern_accepts_legacy_alias() {
        let m = canonicalize("fs.default.name", hdfs()).unwrap();
        assert_eq!(m.canonical_name, "fs.defaultFS");
        assert_eq!(m.target_file, "core-site.xml");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(canonicalize("  dfs.blocksize\t", hdfs()).is_some());
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert!(canonicalize("dfs.replicas", hdfs()).is_none());
        assert!(canonicalize("", hdfs()).is_none());
    }

    #[test]
    fn first_declaration_wins_for_overlapping_patterns() {
        let registry = Registry::from_specs(
            Component::Kafka,
            PatternStyle::SeparatorClass,
            &[
                param_re("log.retention.hours", r"^log[._-]retention[._-]hours?$", "server.properties"),
                param("log.retention.hour", "other.properties"),
            ],
        )
        .unwrap();
        let m = canonicalize("log.retention.hour", &registry).unwrap();
        assert_eq!(m.canonical_name, "log.retention.hours");
    }

    #[test]
    fn duplicate_name_resolution_by_file() {
        let kafka = Registry::for_component(Component::Kafka);
        let bare = canonicalize("log4j.rootLogger", kafka).unwrap();
        assert_eq!(bare.target_file, "log4j.properties");

        let scoped = canonicalize_in_file("log4j.rootLogger", "connect-log4j.properties", kafka).unwrap();
        assert_eq!(scoped.target_file, "connect-log4j.properties");

        assert!(canonicalize_in_file("log4j.rootLogger", "server.properties", kafka).is_none());
    }

    #[test]
    fn serializes_in_camel_case() {
        let json = serde_json::to_value(CanonicalMatch::new("a", "b")).unwrap();
        assert_eq!(json["canonicalName"], "a");
        assert_eq!(json["targetFile"], "b");
    }

    proptest! {
        #[test]
        fn prop_separator_choice_does_not_change_resolution(
            seps in proptest::collection::vec(prop_oneof![Just('.'), Just('_'), Just('-')], 3)
        ) {
            let raw = format!("dfs{}namenode{}handler{}count", seps[0], seps[1], seps[2]);
            let m = canonicalize(&raw, hdfs()).unwrap();
            prop_assert_eq!(m.canonical_name, "dfs.namenode.handler.count");
        }

        #[test]
        fn prop_every_canonical_name_resolves_to_itself(idx in 0usize..1000) {
            for c in Component::ALL {
                let registry = Registry::for_component(c);
                let entry = &registry.entries()[idx % registry.len()];
                let m = canonicalize(entry.canonical_name(), registry).unwrap();
                prop_assert_eq!(&m.canonical_name, entry.canonical_name());
            }
        }
    }
}
