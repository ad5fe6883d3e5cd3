//! Rule kinds and the ordered name heuristics

use crate::checks;
use crate::error::Violation;
use std::fmt;

/// Semantic type a parameter value must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    PositiveInteger,
    NonNegativeInteger,
    IntRange(i64, i64),
    Port,
    Boolean,
    MemorySize,
    DataSize,
    Duration,
    Fraction,
    Percentage,
    PositiveNumber,
    HostPort,
    HostPortList,
    Url,
    Uri,
    CommaList,
    Path,
    NonEmpty,
    OneOf(&'static [&'static str]),
}

impl Rule {
    /// Run the rule against a trimmed value
    ///
    /// `duration_units` extends the base s/m/h/d unit set for [`Rule::Duration`].
    pub fn check(self, value: &str, duration_units: &[&str]) -> Result<(), Violation> {
        match self {
            Rule::PositiveInteger => checks::check_positive_integer(value),
            Rule::NonNegativeInteger => checks::check_non_negative_integer(value),
            Rule::IntRange(min, max) => checks::check_int_range(value, min, max),
            Rule::Port => checks::check_port(value),
            Rule::Boolean => checks::check_boolean(value),
            Rule::MemorySize => checks::check_memory_size(value),
            Rule::DataSize => checks::check_data_size(value),
            Rule::Duration => checks::check_duration(value, duration_units),
            Rule::Fraction => checks::check_fraction(value),
            Rule::Percentage => checks::check_percentage(value),
            Rule::PositiveNumber => checks::check_positive_number(value),
            Rule::HostPort => checks::check_host_port(value),
            Rule::HostPortList => checks::check_host_port_list(value),
            Rule::Url => checks::check_url(value),
            Rule::Uri => checks::check_uri(value),
            Rule::CommaList => checks::check_comma_list(value),
            Rule::Path => checks::check_path(value),
            Rule::NonEmpty => checks::check_non_empty(value),
            Rule::OneOf(allowed) => checks::check_one_of(value, allowed),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::PositiveInteger => write!(f, "positive integer"),
            Rule::NonNegativeInteger => write!(f, "non-negative integer"),
            Rule::IntRange(min, max) => write!(f, "integer in [{min}, {max}]"),
            Rule::Port => write!(f, "port"),
            Rule::Boolean => write!(f, "boolean"),
            Rule::MemorySize => write!(f, "memory size"),
            Rule::DataSize => write!(f, "data size"),
            Rule::Duration => write!(f, "duration"),
            Rule::Fraction => write!(f, "fraction"),
            Rule::Percentage => write!(f, "percentage"),
            Rule::PositiveNumber => write!(f, "positive number"),
            Rule::HostPort => write!(f, "host:port"),
            Rule::HostPortList => write!(f, "host:port list"),
            Rule::Url => write!(f, "URL"),
            Rule::Uri => write!(f, "URI"),
            Rule::CommaList => write!(f, "comma separated list"),
            Rule::Path => write!(f, "path"),
            Rule::NonEmpty => write!(f, "non-empty"),
            Rule::OneOf(allowed) => write!(f, "one of {{{}}}", allowed.join(", ")),
        }
    }
}

/// Name-fragment heuristic
#[derive(Debug, Clone, Copy)]
pub struct Heuristic {
    pub fragments: &'static [&'static str],
    pub rule: Rule,
}

/// Generic rules keyed on fragments of the canonical name, tried in order
///
/// A rule fires when the name contains one of its fragments anywhere, so
/// `hbase.master.port.range` is checked as a port and a timeout counted in
/// milliseconds (`zookeeper.connection.timeout.ms`) as a duration. These
/// misfires are known; per-component exact rules take precedence and are the
/// place to correct them.
pub const HEURISTICS: &[Heuristic] = &[
    Heuristic { fragments: &[".port"], rule: Rule::Port },
    Heuristic { fragments: &[".enabled", ".required"], rule: Rule::Boolean },
    Heuristic { fragments: &[".timeout", ".interval", ".age"], rule: Rule::Duration },
    Heuristic { fragments: &["-mb", "-vcores"], rule: Rule::NonNegativeInteger },
    Heuristic { fragments: &[".ratio", ".fraction"], rule: Rule::Fraction },
    Heuristic { fragments: &[".address", "-address"], rule: Rule::HostPort },
    Heuristic { fragments: &[".dir", ".dirs"], rule: Rule::Path },
];

/// First heuristic rule with a fragment contained in `name`
#[must_use]
pub fn heuristic_rule(name: &str) -> Option<Rule> {
    HEURISTICS
        .iter()
        .find(|h| h.fragments.iter().any(|f| name.contains(f)))
        .map(|h| h.rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_map_to_rules() {
        assert_eq!(heuristic_rule("rest.port"), Some(Rule::Port));
        assert_eq!(heuristic_rule("dfs.webhdfs.enabled"), Some(Rule::Boolean));
        assert_eq!(heuristic_rule("akka.ask.timeout"), Some(Rule::Duration));
        assert_eq!(
            heuristic_rule("yarn.nodemanager.resource.memory-mb"),
            Some(Rule::NonNegativeInteger)
        );
        assert_eq!(heuristic_rule("spark.memory.fraction"), Some(Rule::Fraction));
        assert_eq!(heuristic_rule("dfs.namenode.rpc-address"), Some(Rule::HostPort));
        assert_eq!(heuristic_rule("dfs.namenode.name.dir"), Some(Rule::Path));
        assert_eq!(heuristic_rule("log.dirs"), Some(Rule::Path));
        assert_eq!(heuristic_rule("broker.id"), None);
    }

    #[test]
    fn fragments_match_anywhere_in_the_name() {
        assert_eq!(heuristic_rule("hbase.master.port.range"), Some(Rule::Port));
        assert_eq!(heuristic_rule("dfs.ha.enabled.list"), Some(Rule::Boolean));
        assert_eq!(heuristic_rule("zookeeper.connection.timeout.ms"), Some(Rule::Duration));
        assert_eq!(heuristic_rule("yarn.nodemanager.vmem-pmem-ratio"), None);
    }

    #[test]
    fn earlier_heuristics_win() {
        // both .port and .address appear; .port is listed first
        assert_eq!(heuristic_rule("ui.port.address"), Some(Rule::Port));
    }

    #[test]
    fn duration_rule_uses_extra_units() {
        assert!(Rule::Duration.check("100ms", &[]).is_err());
        assert!(Rule::Duration.check("100ms", &["ms"]).is_ok());
    }

    #[test]
    fn display_names() {
        assert_eq!(Rule::IntRange(1, 10).to_string(), "integer in [1, 10]");
        assert_eq!(Rule::OneOf(&["a", "b"]).to_string(), "one of {a, b}");
    }
}
