//! Reusable value checkers
//!
//! Each `check_*` function returns `Err(Violation::Format)` when the value is
//! not of the expected type and `Err(Violation::Constraint)` when it is, but
//! falls outside the allowed domain. The `is_*` wrappers collapse that to a
//! boolean for callers that only need acceptance.
//!
//! Values are expected pre-trimmed; the validator trims before dispatching.

use crate::error::Violation;
use std::num::IntErrorKind;

const INTEGER: &str = "an integer";
const NUMBER: &str = "a number";

fn parse_int(value: &str) -> Result<i64, Violation> {
    value.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Violation::Constraint("is out of the 64-bit integer range".to_string())
        }
        _ => Violation::Format(INTEGER),
    })
}

fn parse_number(value: &str) -> Result<f64, Violation> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(Violation::Format(NUMBER)),
    }
}

/// Split `"128 m"` into `(negative, "128", "m")`
///
/// Returns `None` unless the value is digits followed by an optional,
/// optionally space-separated, alphabetic unit.
fn split_quantity(value: &str) -> Option<(bool, &str, &str)> {
    let (negative, rest) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let (digits, unit) = rest.split_at(digits_end);
    let unit = unit.trim_start();
    if !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((negative, digits, unit))
}

/// Integer ≥ 1
pub fn check_positive_integer(value: &str) -> Result<(), Violation> {
    if parse_int(value)? < 1 {
        return Err(Violation::Constraint("must be at least 1".to_string()));
    }
    Ok(())
}

/// Integer ≥ 0
pub fn check_non_negative_integer(value: &str) -> Result<(), Violation> {
    if parse_int(value)? < 0 {
        return Err(Violation::Constraint("must not be negative".to_string()));
    }
    Ok(())
}

/// Integer within `[min, max]`
pub fn check_int_range(value: &str, min: i64, max: i64) -> Result<(), Violation> {
    let n = parse_int(value)?;
    if n < min || n > max {
        return Err(Violation::Constraint(format!("must be between {min} and {max}")));
    }
    Ok(())
}

/// TCP/UDP port, 1–65535
pub fn check_port(value: &str) -> Result<(), Violation> {
    let port = parse_int(value).map_err(|_| Violation::Format("a port number"))?;
    if !(1..=65535).contains(&port) {
        return Err(Violation::Constraint("must be a port between 1 and 65535".to_string()));
    }
    Ok(())
}

/// Exactly `true` or `false`
pub fn check_boolean(value: &str) -> Result<(), Violation> {
    match value {
        "true" | "false" => Ok(()),
        _ => Err(Violation::Format("'true' or 'false'")),
    }
}

/// Integer with an optional k/m/g/t unit (JVM style: `512m`, `4g`)
pub fn check_memory_size(value: &str) -> Result<(), Violation> {
    let (negative, _, unit) = split_quantity(value).ok_or(Violation::Format("a memory size"))?;
    if !matches!(unit.to_ascii_lowercase().as_str(), "" | "k" | "m" | "g" | "t") {
        return Err(Violation::Format("a memory size"));
    }
    if negative {
        return Err(Violation::Constraint("must not be negative".to_string()));
    }
    Ok(())
}

/// Memory size that may also carry a trailing `b` (`256MB`, `50GB`, `1024b`)
pub fn check_data_size(value: &str) -> Result<(), Violation> {
    let (negative, _, unit) = split_quantity(value).ok_or(Violation::Format("a data size"))?;
    let unit = unit.to_ascii_lowercase();
    let unit = unit.strip_suffix('b').unwrap_or(&unit);
    if !matches!(unit, "" | "k" | "m" | "g" | "t") {
        return Err(Violation::Format("a data size"));
    }
    if negative {
        return Err(Violation::Constraint("must not be negative".to_string()));
    }
    Ok(())
}

/// Integer with an optional s/m/h/d unit, or one of `extra_units`
pub fn check_duration(value: &str, extra_units: &[&str]) -> Result<(), Violation> {
    let (negative, _, unit) = split_quantity(value).ok_or(Violation::Format("a duration"))?;
    let unit = unit.to_ascii_lowercase();
    let known = matches!(unit.as_str(), "" | "s" | "m" | "h" | "d")
        || extra_units.iter().any(|u| u.eq_ignore_ascii_case(&unit));
    if !known {
        return Err(Violation::Format("a duration"));
    }
    if negative {
        return Err(Violation::Constraint("must not be negative".to_string()));
    }
    Ok(())
}

/// Floating point number in `[0, 1]`
pub fn check_fraction(value: &str) -> Result<(), Violation> {
    let n = parse_number(value)?;
    if !(0.0..=1.0).contains(&n) {
        return Err(Violation::Constraint("must be between 0 and 1".to_string()));
    }
    Ok(())
}

/// Floating point number in `[0, 100]`
pub fn check_percentage(value: &str) -> Result<(), Violation> {
    let n = parse_number(value)?;
    if !(0.0..=100.0).contains(&n) {
        return Err(Violation::Constraint("must be between 0 and 100".to_string()));
    }
    Ok(())
}

/// Floating point number > 0
pub fn check_positive_number(value: &str) -> Result<(), Violation> {
    if parse_number(value)? <= 0.0 {
        return Err(Violation::Constraint("must be greater than 0".to_string()));
    }
    Ok(())
}

fn is_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

/// `host:port`
pub fn check_host_port(value: &str) -> Result<(), Violation> {
    let (host, port) = value.rsplit_once(':').ok_or(Violation::Format("host:port"))?;
    if !is_host(host) {
        return Err(Violation::Format("host:port"));
    }
    check_port(port)
}

/// Comma separated `host:port` entries
pub fn check_host_port_list(value: &str) -> Result<(), Violation> {
    for token in value.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(Violation::Format("a comma separated host:port list"));
        }
        check_host_port(token)?;
    }
    Ok(())
}

/// `http://`, `https://` or `jceks://` URL
pub fn check_url(value: &str) -> Result<(), Violation> {
    let lower = value.to_ascii_lowercase();
    let rest = ["http://", "https://", "jceks://"]
        .iter()
        .find_map(|scheme| lower.strip_prefix(scheme))
        .ok_or(Violation::Format("an http, https or jceks URL"))?;
    if rest.is_empty() {
        return Err(Violation::Format("an http, https or jceks URL"));
    }
    Ok(())
}

/// Generic `scheme://rest` URI
pub fn check_uri(value: &str) -> Result<(), Violation> {
    let (scheme, rest) = value.split_once("://").ok_or(Violation::Format("a scheme:// URI"))?;
    let mut chars = scheme.chars();
    let scheme_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'));
    if !scheme_ok || rest.is_empty() {
        return Err(Violation::Format("a scheme:// URI"));
    }
    Ok(())
}

/// Comma separated list without empty tokens
pub fn check_comma_list(value: &str) -> Result<(), Violation> {
    if value.split(',').any(|t| t.trim().is_empty()) {
        return Err(Violation::Format("a comma separated list without empty entries"));
    }
    Ok(())
}

/// Comma separated absolute paths, `scheme://` URIs or `$VAR`/`${var}` references
pub fn check_path(value: &str) -> Result<(), Violation> {
    for token in value.split(',') {
        let token = token.trim();
        let ok = token.starts_with('/') || token.starts_with('$') || check_uri(token).is_ok();
        if !ok {
            return Err(Violation::Format("an absolute path or URI"));
        }
    }
    Ok(())
}

/// Any non-blank value
pub fn check_non_empty(value: &str) -> Result<(), Violation> {
    if value.trim().is_empty() {
        return Err(Violation::Format("a non-empty value"));
    }
    Ok(())
}

/// One of a fixed, case-sensitive set
pub fn check_one_of(value: &str, allowed: &[&str]) -> Result<(), Violation> {
    if !allowed.contains(&value) {
        return Err(Violation::Constraint(format!("must be one of {}", allowed.join(", "))));
    }
    Ok(())
}

macro_rules! bool_wrappers {
    ($($(#[$doc:meta])* $is:ident => $check:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            #[must_use]
            pub fn $is(value: &str) -> bool {
                $check(value).is_ok()
            }
        )*
    };
}

bool_wrappers! {
    /// See [`check_positive_integer`]
    is_positive_integer => check_positive_integer;
    /// See [`check_non_negative_integer`]
    is_non_negative_integer => check_non_negative_integer;
    /// See [`check_port`]
    is_valid_port => check_port;
    /// See [`check_boolean`]
    is_valid_boolean => check_boolean;
    /// See [`check_memory_size`]
    is_memory_size => check_memory_size;
    /// See [`check_data_size`]
    is_data_size => check_data_size;
    /// See [`check_fraction`]
    is_fraction => check_fraction;
    /// See [`check_host_port`]
    is_valid_host_port => check_host_port;
    /// See [`check_host_port_list`]
    is_valid_host_port_list => check_host_port_list;
    /// See [`check_url`]
    is_valid_url => check_url;
    /// See [`check_uri`]
    is_valid_uri => check_uri;
    /// See [`check_comma_list`]
    is_valid_comma_separated_list => check_comma_list;
    /// See [`check_path`]
    is_valid_path => check_path;
}

/// See [`check_duration`]
#[inline]
#[must_use]
pub fn is_valid_duration(value: &str, extra_units: &[&str]) -> bool {
    check_duration(value, extra_units).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_constraint(r: Result<(), Violation>) -> bool {
        matches!(r, Err(Violation::Constraint(_)))
    }

    fn is_format(r: Result<(), Violation>) -> bool {
        matches!(r, Err(Violation::Format(_)))
    }

    #[test]
    fn zero_separates_positive_from_non_negative() {
        assert!(!is_positive_integer("0"));
        assert!(is_non_negative_integer("0"));
        assert!(is_constraint(check_positive_integer("0")));
    }

    #[test]
    fn negative_integer_is_a_constraint_violation() {
        assert!(is_constraint(check_positive_integer("-1")));
        assert!(is_constraint(check_non_negative_integer("-1")));
        assert!(is_format(check_positive_integer("three")));
        assert!(is_format(check_positive_integer("3.0")));
    }

    #[test]
    fn overflowing_integer_is_a_constraint_violation() {
        assert!(is_constraint(check_non_negative_integer("99999999999999999999")));
    }

    #[test]
    fn port_boundaries() {
        assert!(is_valid_port("1"));
        assert!(is_valid_port("65535"));
        assert!(is_constraint(check_port("65536")));
        assert!(is_constraint(check_port("0")));
        assert!(is_format(check_port("http")));
    }

    #[test]
    fn boolean_is_strict() {
        assert!(is_valid_boolean("true"));
        assert!(is_valid_boolean("false"));
        assert!(!is_valid_boolean("TRUE"));
        assert!(!is_valid_boolean("yes"));
        assert!(!is_valid_boolean("1"));
    }

    #[test]
    fn memory_size_units() {
        for ok in ["1024", "512m", "4G", "1 g", "2t", "64k"] {
            assert!(is_memory_size(ok), "{ok}");
        }
        for bad in ["4gb", "4x", "m", "", "1.5g"] {
            assert!(!is_memory_size(bad), "{bad}");
        }
        assert!(is_constraint(check_memory_size("-1g")));
    }

    #[test]
    fn data_size_accepts_byte_suffix() {
        for ok in ["50GB", "256MB", "1024", "100b", "8kb"] {
            assert!(is_data_size(ok), "{ok}");
        }
        assert!(!is_data_size("50GiB"));
    }

    #[test]
    fn duration_units_are_component_dependent() {
        assert!(is_valid_duration("30s", &[]));
        assert!(is_valid_duration("10", &[]));
        assert!(is_valid_duration("2h", &[]));
        assert!(!is_valid_duration("500ms", &[]));
        assert!(is_valid_duration("500ms", &["ms"]));
        assert!(is_valid_duration("10 min", &["ms", "min"]));
        assert!(is_format(check_duration("soon", &[])));
        assert!(is_constraint(check_duration("-5s", &[])));
    }

    #[test]
    fn fraction_bounds() {
        assert!(is_fraction("0"));
        assert!(is_fraction("1"));
        assert!(is_fraction("0.75"));
        assert!(is_constraint(check_fraction("1.5")));
        assert!(is_constraint(check_fraction("-0.1")));
        assert!(is_format(check_fraction("half")));
        assert!(is_format(check_fraction("NaN")));
    }

    #[test]
    fn percentage_and_positive_number() {
        assert!(check_percentage("100").is_ok());
        assert!(is_constraint(check_percentage("100.5")));
        assert!(check_positive_number("2.1").is_ok());
        assert!(is_constraint(check_positive_number("0")));
    }

    #[test]
    fn host_port_forms() {
        assert!(is_valid_host_port("0.0.0.0:9870"));
        assert!(is_valid_host_port("nn1.example.com:8020"));
        assert!(!is_valid_host_port("nn1.example.com"));
        assert!(!is_valid_host_port(":8020"));
        assert!(is_constraint(check_host_port("nn1:70000")));
    }

    #[test]
    fn host_port_list_forms() {
        assert!(is_valid_host_port_list("zk1:2181,zk2:2181, zk3:2181"));
        assert!(!is_valid_host_port_list("zk1:2181,,zk2:2181"));
        assert!(!is_valid_host_port_list("zk1,zk2"));
    }

    #[test]
    fn url_schemes() {
        assert!(is_valid_url("http://coordinator:8080"));
        assert!(is_valid_url("HTTPS://example.com"));
        assert!(is_valid_url("jceks://file/etc/hadoop/creds.jceks"));
        assert!(!is_valid_url("hdfs://nn:8020"));
        assert!(!is_valid_url("http://"));
    }

    #[test]
    fn uri_accepts_any_scheme() {
        assert!(is_valid_uri("hdfs://nn:8020"));
        assert!(is_valid_uri("thrift://metastore:9083"));
        assert!(is_valid_uri("file:///tmp"));
        assert!(!is_valid_uri("nn:8020"));
        assert!(!is_valid_uri("9ab://x"));
    }

    #[test]
    fn comma_list_rejects_empty_tokens() {
        assert!(is_valid_comma_separated_list("a,b,c"));
        assert!(is_valid_comma_separated_list("single"));
        assert!(!is_valid_comma_separated_list("a,,b"));
        assert!(!is_valid_comma_separated_list("a,"));
    }

    #[test]
    fn path_forms() {
        assert!(is_valid_path("/data/nn"));
        assert!(is_valid_path("/data/1,/data/2"));
        assert!(is_valid_path("file:///data/nn"));
        assert!(is_valid_path("hdfs://nn:8020/flink/checkpoints"));
        assert!(is_valid_path("${hadoop.tmp.dir}/dfs/name"));
        assert!(!is_valid_path("data/nn"));
        assert!(!is_valid_path("/data/1,,/data/2"));
    }

    #[test]
    fn one_of_is_case_sensitive() {
        let set = &["rocksdb", "filesystem", "hashmap"];
        assert!(check_one_of("rocksdb", set).is_ok());
        assert!(is_constraint(check_one_of("RocksDB", set)));
    }

    #[test]
    fn int_range_bounds() {
        assert!(check_int_range("-1", -1, 10).is_ok());
        assert!(is_constraint(check_int_range("-2", -1, 10)));
        assert!(is_constraint(check_int_range("11", -1, 10)));
    }
}
