//! Value validation against a component's registry and profile

use crate::error::ValidationError;
use crate::profiles::{profile, Profile};
use crate::rules::{heuristic_rule, Rule};
use hcfg_registry::{Component, Registry};
use tracing::debug;

/// Where the rule applied to a parameter came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource {
    /// Exact-name rule from the component profile
    Exact(Rule),
    /// Name-fragment heuristic
    Heuristic(Rule),
    /// No rule; any non-empty value is accepted
    Unchecked,
}

impl RuleSource {
    /// Rule to run, if any
    #[inline]
    #[must_use]
    pub fn rule(self) -> Option<Rule> {
        match self {
            RuleSource::Exact(rule) | RuleSource::Heuristic(rule) => Some(rule),
            RuleSource::Unchecked => None,
        }
    }
}

/// Validator bound to one component
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    registry: &'a Registry,
    profile: &'static Profile,
}

impl Validator<'static> {
    /// Validator over the built-in registry
    #[must_use]
    pub fn for_component(component: Component) -> Self {
        Self::new(Registry::for_component(component))
    }
}

impl<'a> Validator<'a> {
    /// Validator over an arbitrary registry, using its component's profile
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            profile: profile(registry.component()),
        }
    }

    /// Component this validator checks
    #[inline]
    #[must_use]
    pub fn component(&self) -> Component {
        self.registry.component()
    }

    /// Rule selected for `canonical_name`
    #[must_use]
    pub fn rule_for(&self, canonical_name: &str) -> RuleSource {
        if let Some(rule) = self.profile.exact_rule(canonical_name) {
            RuleSource::Exact(rule)
        } else if let Some(rule) = heuristic_rule(canonical_name) {
            RuleSource::Heuristic(rule)
        } else {
            RuleSource::Unchecked
        }
    }

    /// Validate `raw_value` for a canonical parameter name
    ///
    /// The name must be registered exactly; callers canonicalize first.
    /// Surrounding whitespace in the value is ignored.
    pub fn validate(&self, canonical_name: &str, raw_value: &str) -> Result<(), ValidationError> {
        if !self.registry.exists_exact(canonical_name) {
            return Err(ValidationError::not_found(canonical_name));
        }

        let value = raw_value.trim();
        if value.is_empty() {
            return Err(ValidationError::ValueEmpty {
                name: canonical_name.to_string(),
            });
        }

        let source = self.rule_for(canonical_name);
        debug!(
            component = %self.component(),
            name = canonical_name,
            rule = ?source,
            "validating value"
        );

        match source.rule() {
            Some(rule) => rule
                .check(value, self.profile.duration_units)
                .map_err(|v| v.into_error(canonical_name, value)),
            None => Ok(()),
        }
    }
}

/// Validate with the built-in registry for `component`
pub fn validate(component: Component, canonical_name: &str, raw_value: &str) -> Result<(), ValidationError> {
    Validator::for_component(component).validate(canonical_name, raw_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcfg_registry::{param, PatternStyle};
    use proptest::prelude::*;

    fn hdfs() -> Validator<'static> {
        Validator::for_component(Component::Hdfs)
    }

    #[test]
    fn replication_accepts_positive_values() {
        assert_eq!(hdfs().validate("dfs.replication", "3"), Ok(()));
        assert_eq!(hdfs().validate("dfs.replication", " 3 "), Ok(()));
    }

    #[test]
    fn replication_rejects_negative_as_constraint() {
        let err = hdfs().validate("dfs.replication", "-1").unwrap_err();
        assert!(matches!(err, ValidationError::ConstraintViolated { .. }), "{err:?}");
        let err = hdfs().validate("dfs.replication", "0").unwrap_err();
        assert!(matches!(err, ValidationError::ConstraintViolated { .. }), "{err:?}");
    }

    #[test]
    fn replication_rejects_text_as_format() {
        let err = hdfs().validate("dfs.replication", "three").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }), "{err:?}");
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert_eq!(
            hdfs().validate("dfs.replicaton", "3"),
            Err(ValidationError::not_found("dfs.replicaton"))
        );
    }

    #[test]
    fn variant_spellings_are_not_validated_directly() {
        assert_eq!(
            hdfs().validate("dfs_replication", "3"),
            Err(ValidationError::not_found("dfs_replication"))
        );
    }

    #[test]
    fn unknown_name_wins_over_empty_value() {
        assert!(matches!(
            hdfs().validate("nope", ""),
            Err(ValidationError::ParamNotFound { .. })
        ));
    }

    #[test]
    fn state_backend_enum() {
        let flink = Validator::for_component(Component::Flink);
        assert_eq!(flink.validate("state.backend", "rocksdb"), Ok(()));
        assert_eq!(flink.validate("state.backend", "hashmap"), Ok(()));
        assert!(matches!(
            flink.validate("state.backend", "memory"),
            Err(ValidationError::ConstraintViolated { .. })
        ));
    }

    #[test]
    fn exact_rule_overrides_heuristic() {
        let flink = Validator::for_component(Component::Flink);
        assert_eq!(
            flink.rule_for("jobmanager.rpc.address"),
            RuleSource::Exact(Rule::NonEmpty)
        );
        assert_eq!(flink.validate("jobmanager.rpc.address", "jm-host"), Ok(()));
    }

    #[test]
    fn exact_rule_corrects_mid_name_fragment() {
        let kafka = Validator::for_component(Component::Kafka);
        assert_eq!(
            kafka.rule_for("zookeeper.connection.timeout.ms"),
            RuleSource::Exact(Rule::PositiveInteger)
        );
        assert_eq!(kafka.validate("zookeeper.connection.timeout.ms", "18000"), Ok(()));
    }

    #[test]
    fn heuristics_apply_without_exact_rule() {
        let hdfs = hdfs();
        assert_eq!(
            hdfs.rule_for("dfs.namenode.rpc-address"),
            RuleSource::Heuristic(Rule::HostPort)
        );
        assert_eq!(hdfs.validate("dfs.namenode.rpc-address", "nn1:8020"), Ok(()));
        assert!(hdfs.validate("dfs.namenode.rpc-address", "nn1").is_err());
        assert_eq!(hdfs.validate("dfs.namenode.name.dir", "/data/nn"), Ok(()));
        assert_eq!(hdfs.validate("dfs.webhdfs.enabled", "true"), Ok(()));
        assert!(hdfs.validate("dfs.webhdfs.enabled", "yes").is_err());
    }

    #[test]
    fn component_duration_units() {
        let flink = Validator::for_component(Component::Flink);
        assert_eq!(flink.validate("execution.checkpointing.interval", "10 min"), Ok(()));
        let hdfs = hdfs();
        assert!(matches!(
            hdfs.validate("fs.trash.interval", "10min"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn unchecked_names_accept_any_value() {
        let kafka = Validator::for_component(Component::Kafka);
        assert_eq!(kafka.rule_for("group.id"), RuleSource::Unchecked);
        assert_eq!(kafka.validate("group.id", "anything at all"), Ok(()));
    }

    #[test]
    fn port_boundaries_through_heuristic() {
        let spark = Validator::for_component(Component::Spark);
        assert_eq!(spark.validate("spark.ui.port", "65535"), Ok(()));
        assert!(matches!(
            spark.validate("spark.ui.port", "65536"),
            Err(ValidationError::ConstraintViolated { .. })
        ));
    }

    #[test]
    fn custom_registry_uses_component_profile() {
        let registry = Registry::from_specs(
            Component::Hdfs,
            PatternStyle::SeparatorClass,
            &[param("dfs.replication", "hdfs-site.xml")],
        )
        .unwrap();
        let validator = Validator::new(&registry);
        assert!(validator.validate("dfs.replication", "0").is_err());
        assert!(matches!(
            validator.validate("dfs.blocksize", "128m"),
            Err(ValidationError::ParamNotFound { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_blank_values_are_empty(ws in "[ \t]{0,4}") {
            for c in Component::ALL {
                let registry = Registry::for_component(c);
                for spec in registry.entries() {
                    let result = Validator::new(registry).validate(spec.canonical_name(), &ws);
                    prop_assert!(
                        matches!(result, Err(ValidationError::ValueEmpty { .. })),
                        "{}: {} -> {:?}", c, spec.canonical_name(), result
                    );
                }
            }
        }

        #[test]
        fn prop_positive_integers_pass_replication(n in 1u32..10_000) {
            prop_assert_eq!(validate(Component::Hdfs, "dfs.replication", &n.to_string()), Ok(()));
        }
    }
}
