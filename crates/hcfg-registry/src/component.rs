//! Managed service identifiers
//!
//! Provides [`Component`], the closed set of services whose configuration the
//! engine knows how to canonicalize and mutate.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A managed Hadoop-ecosystem service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    /// HDFS (core-site, hdfs-site)
    Hdfs,
    /// YARN and MapReduce
    Yarn,
    /// HBase
    Hbase,
    /// Hive metastore and HiveServer2
    Hive,
    /// Kafka brokers and clients
    Kafka,
    /// Flink
    Flink,
    /// Presto
    Presto,
    /// Solr
    Solr,
    /// Zeppelin
    Zeppelin,
    /// Spark
    Spark,
    /// ZooKeeper
    Zookeeper,
}

impl Component {
    /// Every component, in registry index order
    pub const ALL: [Component; 11] = [
        Component::Hdfs,
        Component::Yarn,
        Component::Hbase,
        Component::Hive,
        Component::Kafka,
        Component::Flink,
        Component::Presto,
        Component::Solr,
        Component::Zeppelin,
        Component::Spark,
        Component::Zookeeper,
    ];

    /// Lowercase identifier used by the command dispatcher
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Component::Hdfs => "hdfs",
            Component::Yarn => "yarn",
            Component::Hbase => "hbase",
            Component::Hive => "hive",
            Component::Kafka => "kafka",
            Component::Flink => "flink",
            Component::Presto => "presto",
            Component::Solr => "solr",
            Component::Zeppelin => "zeppelin",
            Component::Spark => "spark",
            Component::Zookeeper => "zookeeper",
        }
    }

    /// Position in [`Component::ALL`]
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Component::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RegistryError::UnknownComponent(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("HDFS".parse::<Component>().unwrap(), Component::Hdfs);
        assert_eq!(" zookeeper ".parse::<Component>().unwrap(), Component::Zookeeper);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "cassandra".parse::<Component>().unwrap_err();
        assert!(matches!(err, RegistryError::UnknownComponent(ref id) if id == "cassandra"));
    }

    #[test]
    fn index_matches_all_order() {
        for (i, c) in Component::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for c in Component::ALL {
            assert_eq!(c.to_string().parse::<Component>().unwrap(), c);
        }
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Component::Flink).unwrap();
        assert_eq!(json, "\"flink\"");
    }
}
