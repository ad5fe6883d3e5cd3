//! Per-component exact-name rules
//!
//! Exact rules win over the name heuristics, which also lets a profile
//! correct a heuristic that would misfire (`jobmanager.rpc.address` is a bare
//! host, not `host:port`).

use crate::rules::Rule;
use hcfg_registry::Component;

/// Validation data for one component
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    /// Duration units accepted on top of s/m/h/d
    pub duration_units: &'static [&'static str],
    /// Exact canonical name → rule
    pub exact: &'static [(&'static str, Rule)],
}

impl Profile {
    /// Exact rule for `name`, if declared
    #[must_use]
    pub fn exact_rule(&self, name: &str) -> Option<Rule> {
        self.exact.iter().find(|(n, _)| *n == name).map(|(_, r)| *r)
    }
}

/// Largest Java `int`, the ceiling of most broker and server counters
const JAVA_INT_MAX: i64 = 2_147_483_647;

const LOG_LEVELS: &[&str] = &["ALL", "TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL", "OFF"];

const HDFS: Profile = Profile {
    duration_units: &[],
    exact: &[
        ("fs.defaultFS", Rule::Uri),
        ("dfs.replication", Rule::PositiveInteger),
        ("dfs.blocksize", Rule::DataSize),
        ("io.file.buffer.size", Rule::PositiveInteger),
        ("dfs.namenode.handler.count", Rule::PositiveInteger),
        ("dfs.datanode.handler.count", Rule::PositiveInteger),
        ("dfs.datanode.max.transfer.threads", Rule::PositiveInteger),
        ("dfs.datanode.du.reserved", Rule::NonNegativeInteger),
        ("dfs.namenode.safemode.threshold-pct", Rule::Fraction),
        ("dfs.namenode.checkpoint.period", Rule::Duration),
        ("dfs.client.socket-timeout", Rule::Duration),
        ("hadoop.security.authentication", Rule::OneOf(&["simple", "kerberos"])),
        ("hadoop.security.authorization", Rule::Boolean),
        ("hadoop.security.credential.provider.path", Rule::Url),
        ("ha.zookeeper.quorum", Rule::HostPortList),
        ("log4j.appender.RFA.MaxFileSize", Rule::DataSize),
        ("log4j.appender.RFA.MaxBackupIndex", Rule::NonNegativeInteger),
        ("HADOOP_HEAPSIZE", Rule::MemorySize),
        ("HADOOP_LOG_DIR", Rule::Path),
        ("JAVA_HOME", Rule::Path),
    ],
};

const YARN: Profile = Profile {
    duration_units: &[],
    exact: &[
        ("yarn.resourcemanager.zk-address", Rule::HostPortList),
        ("yarn.nodemanager.vmem-pmem-ratio", Rule::PositiveNumber),
        ("yarn.nodemanager.aux-services", Rule::CommaList),
        ("yarn.nodemanager.local-dirs", Rule::Path),
        ("yarn.nodemanager.log-dirs", Rule::Path),
        ("yarn.log-aggregation-enable", Rule::Boolean),
        ("yarn.log-aggregation.retain-seconds", Rule::IntRange(-1, i64::MAX)),
        ("mapreduce.framework.name", Rule::OneOf(&["local", "classic", "yarn"])),
        ("mapreduce.map.memory.mb", Rule::PositiveInteger),
        ("mapreduce.reduce.memory.mb", Rule::PositiveInteger),
        ("yarn.scheduler.capacity.maximum-applications", Rule::PositiveInteger),
        ("yarn.scheduler.capacity.maximum-am-resource-percent", Rule::Fraction),
        ("yarn.scheduler.capacity.root.queues", Rule::CommaList),
        ("yarn.scheduler.capacity.root.default.capacity", Rule::Percentage),
        ("YARN_RESOURCEMANAGER_HEAPSIZE", Rule::MemorySize),
        ("YARN_NODEMANAGER_HEAPSIZE", Rule::MemorySize),
    ],
};

const HBASE: Profile = Profile {
    duration_units: &["ms"],
    exact: &[
        ("hbase.rootdir", Rule::Path),
        ("hbase.cluster.distributed", Rule::Boolean),
        ("hbase.zookeeper.quorum", Rule::CommaList),
        ("hbase.zookeeper.property.clientPort", Rule::Port),
        ("hbase.regionserver.handler.count", Rule::PositiveInteger),
        ("hbase.hregion.max.filesize", Rule::PositiveInteger),
        ("hbase.hregion.memstore.flush.size", Rule::PositiveInteger),
        ("hbase.regionserver.global.memstore.size", Rule::Fraction),
        ("hfile.block.cache.size", Rule::Fraction),
        ("hbase.security.authentication", Rule::OneOf(&["simple", "kerberos"])),
        ("hbase.unsafe.stream.capability.enforce", Rule::Boolean),
        ("HBASE_HEAPSIZE", Rule::MemorySize),
        ("HBASE_MANAGES_ZK", Rule::Boolean),
    ],
};

const HIVE: Profile = Profile {
    duration_units: &["ms", "sec", "min"],
    exact: &[
        ("javax.jdo.option.ConnectionURL", Rule::NonEmpty),
        ("hive.metastore.uris", Rule::Uri),
        ("hive.metastore.schema.verification", Rule::Boolean),
        ("hive.execution.engine", Rule::OneOf(&["mr", "tez", "spark"])),
        ("hive.exec.dynamic.partition.mode", Rule::OneOf(&["strict", "nonstrict"])),
        ("hive.support.concurrency", Rule::Boolean),
        ("hive.server2.enable.doAs", Rule::Boolean),
        ("property.hive.log.level", Rule::OneOf(LOG_LEVELS)),
        ("rootLogger.level", Rule::OneOf(LOG_LEVELS)),
        ("HADOOP_HEAPSIZE", Rule::MemorySize),
    ],
};

const KAFKA: Profile = Profile {
    duration_units: &["ms"],
    exact: &[
        ("broker.id", Rule::IntRange(-1, JAVA_INT_MAX)),
        ("listeners", Rule::CommaList),
        ("advertised.listeners", Rule::CommaList),
        ("num.network.threads", Rule::PositiveInteger),
        ("num.io.threads", Rule::PositiveInteger),
        ("num.partitions", Rule::PositiveInteger),
        ("default.replication.factor", Rule::PositiveInteger),
        ("min.insync.replicas", Rule::PositiveInteger),
        ("offsets.topic.replication.factor", Rule::PositiveInteger),
        ("transaction.state.log.replication.factor", Rule::PositiveInteger),
        ("socket.send.buffer.bytes", Rule::IntRange(-1, JAVA_INT_MAX)),
        ("socket.receive.buffer.bytes", Rule::IntRange(-1, JAVA_INT_MAX)),
        ("socket.request.max.bytes", Rule::PositiveInteger),
        ("message.max.bytes", Rule::PositiveInteger),
        ("log.retention.hours", Rule::IntRange(-1, JAVA_INT_MAX)),
        ("log.retention.bytes", Rule::IntRange(-1, i64::MAX)),
        ("log.segment.bytes", Rule::PositiveInteger),
        ("log.retention.check.interval.ms", Rule::PositiveInteger),
        ("zookeeper.connect", Rule::NonEmpty),
        ("zookeeper.connection.timeout.ms", Rule::PositiveInteger),
        ("group.initial.rebalance.delay.ms", Rule::NonNegativeInteger),
        ("auto.create.topics.enable", Rule::Boolean),
        ("delete.topic.enable", Rule::Boolean),
        ("unclean.leader.election.enable", Rule::Boolean),
        (
            "compression.type",
            Rule::OneOf(&["none", "gzip", "snappy", "lz4", "zstd", "producer", "uncompressed"]),
        ),
        ("bootstrap.servers", Rule::HostPortList),
        ("acks", Rule::OneOf(&["all", "-1", "0", "1"])),
        ("batch.size", Rule::NonNegativeInteger),
        ("linger.ms", Rule::NonNegativeInteger),
        ("auto.offset.reset", Rule::OneOf(&["latest", "earliest", "none"])),
        ("enable.auto.commit", Rule::Boolean),
    ],
};

const FLINK: Profile = Profile {
    duration_units: &["ms", "min"],
    exact: &[
        ("jobmanager.rpc.address", Rule::NonEmpty),
        ("jobmanager.memory.process.size", Rule::DataSize),
        ("taskmanager.memory.process.size", Rule::DataSize),
        ("taskmanager.numberOfTaskSlots", Rule::PositiveInteger),
        ("parallelism.default", Rule::PositiveInteger),
        ("state.backend", Rule::OneOf(&["rocksdb", "filesystem", "hashmap"])),
        ("state.backend.incremental", Rule::Boolean),
        ("restart-strategy", Rule::OneOf(&["none", "fixed-delay", "failure-rate", "exponential-delay"])),
        ("restart-strategy.fixed-delay.attempts", Rule::PositiveInteger),
        ("restart-strategy.fixed-delay.delay", Rule::Duration),
        ("rest.address", Rule::NonEmpty),
        ("rest.bind-address", Rule::NonEmpty),
        ("high-availability.storageDir", Rule::Path),
        ("high-availability.zookeeper.quorum", Rule::HostPortList),
        ("classloader.resolve-order", Rule::OneOf(&["child-first", "parent-first"])),
        ("rootLogger.level", Rule::OneOf(LOG_LEVELS)),
        ("logger.akka.level", Rule::OneOf(LOG_LEVELS)),
    ],
};

const PRESTO: Profile = Profile {
    duration_units: &["ms"],
    exact: &[
        ("coordinator", Rule::Boolean),
        ("node-scheduler.include-coordinator", Rule::Boolean),
        ("query.max-memory", Rule::DataSize),
        ("query.max-memory-per-node", Rule::DataSize),
        ("query.max-total-memory-per-node", Rule::DataSize),
        ("query.max-run-time", Rule::Duration),
        ("discovery.uri", Rule::Url),
        ("node.data-dir", Rule::Path),
        ("com.facebook.presto", Rule::OneOf(&["DEBUG", "INFO", "WARN", "ERROR"])),
        ("hive.metastore.uri", Rule::Uri),
    ],
};

const SOLR: Profile = Profile {
    duration_units: &["ms"],
    exact: &[
        ("maxBooleanClauses", Rule::PositiveInteger),
        ("hostPort", Rule::Port),
        ("zkClientTimeout", Rule::PositiveInteger),
        ("genericCoreNodeNames", Rule::Boolean),
        ("distribUpdateSoTimeout", Rule::PositiveInteger),
        ("SOLR_HEAP", Rule::MemorySize),
        ("SOLR_PORT", Rule::Port),
        ("ZK_HOST", Rule::NonEmpty),
        ("SOLR_LOGS_DIR", Rule::Path),
    ],
};

const ZEPPELIN: Profile = Profile {
    duration_units: &["ms"],
    exact: &[
        ("zeppelin.ssl", Rule::Boolean),
        ("zeppelin.anonymous.allowed", Rule::Boolean),
        ("zeppelin.interpreter.connect.timeout", Rule::PositiveInteger),
        ("zeppelin.websocket.max.text.message.size", Rule::PositiveInteger),
        ("ZEPPELIN_PORT", Rule::Port),
        ("ZEPPELIN_LOG_DIR", Rule::Path),
        ("SPARK_HOME", Rule::Path),
        ("securityManager.sessionManager.globalSessionTimeout", Rule::PositiveInteger),
    ],
};

const SPARK: Profile = Profile {
    duration_units: &["ms", "min"],
    exact: &[
        ("spark.submit.deployMode", Rule::OneOf(&["client", "cluster"])),
        ("spark.driver.memory", Rule::MemorySize),
        ("spark.executor.memory", Rule::MemorySize),
        ("spark.executor.cores", Rule::PositiveInteger),
        ("spark.executor.instances", Rule::PositiveInteger),
        ("spark.executor.heartbeatInterval", Rule::Duration),
        ("spark.default.parallelism", Rule::PositiveInteger),
        ("spark.sql.shuffle.partitions", Rule::PositiveInteger),
        ("spark.eventLog.enabled", Rule::Boolean),
        ("spark.eventLog.dir", Rule::Path),
        ("spark.history.fs.logDirectory", Rule::Path),
        ("spark.memory.storageFraction", Rule::Fraction),
        ("SPARK_MASTER_PORT", Rule::Port),
        ("SPARK_WORKER_CORES", Rule::PositiveInteger),
        ("SPARK_WORKER_MEMORY", Rule::MemorySize),
        ("SPARK_LOG_DIR", Rule::Path),
        ("rootLogger.level", Rule::OneOf(LOG_LEVELS)),
        ("logger.repl.level", Rule::OneOf(LOG_LEVELS)),
    ],
};

const ZOOKEEPER: Profile = Profile {
    duration_units: &[],
    exact: &[
        ("tickTime", Rule::PositiveInteger),
        ("initLimit", Rule::PositiveInteger),
        ("syncLimit", Rule::PositiveInteger),
        ("dataDir", Rule::Path),
        ("dataLogDir", Rule::Path),
        ("clientPort", Rule::Port),
        ("maxClientCnxns", Rule::NonNegativeInteger),
        ("autopurge.snapRetainCount", Rule::IntRange(3, JAVA_INT_MAX)),
        ("autopurge.purgeInterval", Rule::NonNegativeInteger),
        ("admin.enableServer", Rule::Boolean),
        ("4lw.commands.whitelist", Rule::CommaList),
        ("ZOO_LOG_DIR", Rule::Path),
        ("ZK_SERVER_HEAP", Rule::PositiveInteger),
        ("JAVA_HOME", Rule::Path),
    ],
};

/// Profile for `component`
#[must_use]
pub fn profile(component: Component) -> &'static Profile {
    match component {
        Component::Hdfs => &HDFS,
        Component::Yarn => &YARN,
        Component::Hbase => &HBASE,
        Component::Hive => &HIVE,
        Component::Kafka => &KAFKA,
        Component::Flink => &FLINK,
        Component::Presto => &PRESTO,
        Component::Solr => &SOLR,
        Component::Zeppelin => &ZEPPELIN,
        Component::Spark => &SPARK,
        Component::Zookeeper => &ZOOKEEPER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcfg_registry::Registry;

    #[test]
    fn java_int_ceiling() {
        assert_eq!(JAVA_INT_MAX, i64::from(i32::MAX));
        let rule = profile(Component::Kafka).exact_rule("broker.id").unwrap();
        assert_eq!(rule, Rule::IntRange(-1, JAVA_INT_MAX));
        assert!(rule.check("2147483647", &[]).is_ok());
        assert!(rule.check("2147483648", &[]).is_err());
    }

    #[test]
    fn exact_rules_name_registered_parameters() {
        for c in Component::ALL {
            let registry = Registry::for_component(c);
            for (name, _) in profile(c).exact {
                assert!(registry.exists_exact(name), "{c}: '{name}' has a rule but no entry");
            }
        }
    }

    #[test]
    fn exact_rules_are_declared_once() {
        for c in Component::ALL {
            let exact = profile(c).exact;
            for (i, (name, _)) in exact.iter().enumerate() {
                assert!(exact[i + 1..].iter().all(|(n, _)| n != name), "{c}: {name}");
            }
        }
    }

    #[test]
    fn flink_state_backend_is_an_enum() {
        let rule = profile(Component::Flink).exact_rule("state.backend");
        assert_eq!(rule, Some(Rule::OneOf(&["rocksdb", "filesystem", "hashmap"])));
    }
}
