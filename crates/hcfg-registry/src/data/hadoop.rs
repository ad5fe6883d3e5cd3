use super::ComponentTable;
use crate::component::Component;
use crate::format::{ConfigFileSpec, ConfigFormat, LineStyle};
use crate::layout::ComponentLayout;
use crate::registry::{param, param_re, PatternStyle, SpecDef};

const HADOOP_DIRS: &[&str] = &[
    "/etc/hadoop/conf",
    "/usr/lib/hadoop/etc/hadoop",
    "/usr/hdp/current/hadoop-client/conf",
    "/opt/hadoop/etc/hadoop",
    "/usr/local/hadoop/etc/hadoop",
];

const HADOOP_LAYOUT: ComponentLayout = ComponentLayout::new("HADOOP_HOME", "etc/hadoop", HADOOP_DIRS);

const HDFS_FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new("core-site.xml", ConfigFormat::HADOOP_XML),
    ConfigFileSpec::new("hdfs-site.xml", ConfigFormat::HADOOP_XML),
    ConfigFileSpec::new("log4j.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("httpfs-log4j.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("hadoop-env.sh", ConfigFormat::Lines(LineStyle::Export)),
];

const HDFS_PARAMS: &[SpecDef] = &[
    // core-site.xml
    param_re("fs.defaultFS", r"^fs[._-](defaultFS|default[._-]name)$", "core-site.xml"),
    param("hadoop.tmp.dir", "core-site.xml"),
    param("io.file.buffer.size", "core-site.xml"),
    param("fs.trash.interval", "core-site.xml"),
    param("hadoop.security.authentication", "core-site.xml"),
    param("hadoop.security.authorization", "core-site.xml"),
    param("hadoop.security.credential.provider.path", "core-site.xml"),
    param("hadoop.http.staticuser.user", "core-site.xml"),
    param("ipc.client.connect.timeout", "core-site.xml"),
    param("ha.zookeeper.quorum", "core-site.xml"),
    // hdfs-site.xml
    param_re("dfs.replication", r"^dfs[._-]replication$", "hdfs-site.xml"),
    param("dfs.namenode.name.dir", "hdfs-site.xml"),
    param("dfs.datanode.data.dir", "hdfs-site.xml"),
    param("dfs.journalnode.edits.dir", "hdfs-site.xml"),
    param("dfs.blocksize", "hdfs-site.xml"),
    param("dfs.namenode.handler.count", "hdfs-site.xml"),
    param("dfs.datanode.handler.count", "hdfs-site.xml"),
    param("dfs.datanode.max.transfer.threads", "hdfs-site.xml"),
    param("dfs.permissions.enabled", "hdfs-site.xml"),
    param("dfs.webhdfs.enabled", "hdfs-site.xml"),
    param("dfs.ha.automatic-failover.enabled", "hdfs-site.xml"),
    param("dfs.namenode.rpc-address", "hdfs-site.xml"),
    param("dfs.namenode.http-address", "hdfs-site.xml"),
    param("dfs.namenode.secondary.http-address", "hdfs-site.xml"),
    param("dfs.datanode.address", "hdfs-site.xml"),
    param("dfs.datanode.du.reserved", "hdfs-site.xml"),
    param("dfs.namenode.safemode.threshold-pct", "hdfs-site.xml"),
    param("dfs.namenode.checkpoint.period", "hdfs-site.xml"),
    param("dfs.heartbeat.interval", "hdfs-site.xml"),
    param("dfs.client.socket-timeout", "hdfs-site.xml"),
    // log4j.properties
    param("log4j.rootLogger", "log4j.properties"),
    param("hadoop.root.logger", "log4j.properties"),
    param("hadoop.log.dir", "log4j.properties"),
    param("log4j.appender.RFA.MaxFileSize", "log4j.properties"),
    param("log4j.appender.RFA.MaxBackupIndex", "log4j.properties"),
    param("log4j.rootLogger", "httpfs-log4j.properties"),
    // hadoop-env.sh
    param("HADOOP_HEAPSIZE", "hadoop-env.sh"),
    param("HADOOP_LOG_DIR", "hadoop-env.sh"),
    param("JAVA_HOME", "hadoop-env.sh"),
];

pub(super) const HDFS: ComponentTable = ComponentTable {
    component: Component::Hdfs,
    style: PatternStyle::SeparatorClass,
    params: HDFS_PARAMS,
    files: HDFS_FILES,
    layout: HADOOP_LAYOUT,
};

const YARN_FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new("yarn-site.xml", ConfigFormat::HADOOP_XML),
    ConfigFileSpec::new("mapred-site.xml", ConfigFormat::HADOOP_XML),
    ConfigFileSpec::new("capacity-scheduler.xml", ConfigFormat::HADOOP_XML),
    ConfigFileSpec::new("log4j.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("yarn-env.sh", ConfigFormat::Lines(LineStyle::Export)),
];

const YARN_PARAMS: &[SpecDef] = &[
    // yarn-site.xml
    param("yarn.resourcemanager.hostname", "yarn-site.xml"),
    param("yarn.resourcemanager.address", "yarn-site.xml"),
    param("yarn.resourcemanager.webapp.address", "yarn-site.xml"),
    param("yarn.resourcemanager.scheduler.class", "yarn-site.xml"),
    param("yarn.resourcemanager.ha.enabled", "yarn-site.xml"),
    param("yarn.resourcemanager.zk-address", "yarn-site.xml"),
    param("yarn.nodemanager.resource.memory-mb", "yarn-site.xml"),
    param("yarn.nodemanager.resource.cpu-vcores", "yarn-site.xml"),
    param("yarn.nodemanager.vmem-pmem-ratio", "yarn-site.xml"),
    param("yarn.nodemanager.aux-services", "yarn-site.xml"),
    param("yarn.nodemanager.local-dirs", "yarn-site.xml"),
    param("yarn.nodemanager.log-dirs", "yarn-site.xml"),
    param("yarn.scheduler.minimum-allocation-mb", "yarn-site.xml"),
    param("yarn.scheduler.maximum-allocation-mb", "yarn-site.xml"),
    param("yarn.log-aggregation-enable", "yarn-site.xml"),
    param("yarn.log-aggregation.retain-seconds", "yarn-site.xml"),
    // mapred-site.xml
    param("mapreduce.framework.name", "mapred-site.xml"),
    param("mapreduce.map.memory.mb", "mapred-site.xml"),
    param("mapreduce.reduce.memory.mb", "mapred-site.xml"),
    param("mapreduce.map.java.opts", "mapred-site.xml"),
    param("mapreduce.reduce.java.opts", "mapred-site.xml"),
    param("mapreduce.jobhistory.address", "mapred-site.xml"),
    param("mapreduce.jobhistory.webapp.address", "mapred-site.xml"),
    param("mapreduce.task.timeout", "mapred-site.xml"),
    // capacity-scheduler.xml
    param("yarn.scheduler.capacity.maximum-applications", "capacity-scheduler.xml"),
    param("yarn.scheduler.capacity.maximum-am-resource-percent", "capacity-scheduler.xml"),
    param("yarn.scheduler.capacity.root.queues", "capacity-scheduler.xml"),
    param("yarn.scheduler.capacity.root.default.capacity", "capacity-scheduler.xml"),
    // log4j.properties
    param("log4j.rootLogger", "log4j.properties"),
    param("log4j.logger.org.apache.hadoop.yarn", "log4j.properties"),
    // yarn-env.sh
    param("YARN_RESOURCEMANAGER_HEAPSIZE", "yarn-env.sh"),
    param("YARN_NODEMANAGER_HEAPSIZE", "yarn-env.sh"),
];

pub(super) const YARN: ComponentTable = ComponentTable {
    component: Component::Yarn,
    style: PatternStyle::SeparatorClass,
    params: YARN_PARAMS,
    files: YARN_FILES,
    layout: HADOOP_LAYOUT,
};
