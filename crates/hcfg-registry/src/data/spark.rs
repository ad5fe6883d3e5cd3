use super::ComponentTable;
use crate::component::Component;
use crate::format::{ConfigFileSpec, ConfigFormat, LineStyle};
use crate::layout::ComponentLayout;
use crate::registry::{param, PatternStyle, SpecDef};

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new("spark-defaults.conf", ConfigFormat::Lines(LineStyle::Space)),
    ConfigFileSpec::new("spark-env.sh", ConfigFormat::Lines(LineStyle::Export)),
    ConfigFileSpec::new("log4j2.properties", ConfigFormat::PROPERTIES),
];

const PARAMS: &[SpecDef] = &[
    // spark-defaults.conf
    param("spark.master", "spark-defaults.conf"),
    param("spark.submit.deployMode", "spark-defaults.conf"),
    param("spark.driver.memory", "spark-defaults.conf"),
    param("spark.driver.port", "spark-defaults.conf"),
    param("spark.executor.memory", "spark-defaults.conf"),
    param("spark.executor.cores", "spark-defaults.conf"),
    param("spark.executor.instances", "spark-defaults.conf"),
    param("spark.executor.heartbeatInterval", "spark-defaults.conf"),
    param("spark.default.parallelism", "spark-defaults.conf"),
    param("spark.sql.shuffle.partitions", "spark-defaults.conf"),
    param("spark.serializer", "spark-defaults.conf"),
    param("spark.eventLog.enabled", "spark-defaults.conf"),
    param("spark.eventLog.dir", "spark-defaults.conf"),
    param("spark.history.fs.logDirectory", "spark-defaults.conf"),
    param("spark.dynamicAllocation.enabled", "spark-defaults.conf"),
    param("spark.shuffle.service.enabled", "spark-defaults.conf"),
    param("spark.network.timeout", "spark-defaults.conf"),
    param("spark.memory.fraction", "spark-defaults.conf"),
    param("spark.memory.storageFraction", "spark-defaults.conf"),
    param("spark.ui.port", "spark-defaults.conf"),
    // spark-env.sh
    param("SPARK_MASTER_HOST", "spark-env.sh"),
    param("SPARK_MASTER_PORT", "spark-env.sh"),
    param("SPARK_WORKER_CORES", "spark-env.sh"),
    param("SPARK_WORKER_MEMORY", "spark-env.sh"),
    param("SPARK_LOG_DIR", "spark-env.sh"),
    // log4j2.properties
    param("rootLogger.level", "log4j2.properties"),
    param("logger.repl.level", "log4j2.properties"),
];

pub(super) const TABLE: ComponentTable = ComponentTable {
    component: Component::Spark,
    style: PatternStyle::SeparatorClass,
    params: PARAMS,
    files: FILES,
    layout: ComponentLayout::new(
        "SPARK_HOME",
        "conf",
        &["/etc/spark/conf", "/usr/lib/spark/conf", "/opt/spark/conf", "/usr/local/spark/conf"],
    ),
};
