use super::ComponentTable;
use crate::component::Component;
use crate::format::{ConfigFileSpec, ConfigFormat, LineStyle};
use crate::layout::ComponentLayout;
use crate::registry::{param, param_re, PatternStyle, SpecDef};

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new("flink-conf.yaml", ConfigFormat::Lines(LineStyle::Colon)),
    ConfigFileSpec::new("log4j.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("log4j-cli.properties", ConfigFormat::PROPERTIES),
];

const PARAMS: &[SpecDef] = &[
    // flink-conf.yaml
    param("jobmanager.rpc.address", "flink-conf.yaml"),
    param("jobmanager.rpc.port", "flink-conf.yaml"),
    param("jobmanager.memory.process.size", "flink-conf.yaml"),
    param("taskmanager.memory.process.size", "flink-conf.yaml"),
    param("taskmanager.memory.managed.fraction", "flink-conf.yaml"),
    param("taskmanager.memory.network.fraction", "flink-conf.yaml"),
    param("taskmanager.numberOfTaskSlots", "flink-conf.yaml"),
    param("parallelism.default", "flink-conf.yaml"),
    param_re("state.backend", r"^state\.backend(\.type)?$", "flink-conf.yaml"),
    param("state.backend.incremental", "flink-conf.yaml"),
    param("state.checkpoints.dir", "flink-conf.yaml"),
    param("state.savepoints.dir", "flink-conf.yaml"),
    param("execution.checkpointing.interval", "flink-conf.yaml"),
    param("restart-strategy", "flink-conf.yaml"),
    param("restart-strategy.fixed-delay.attempts", "flink-conf.yaml"),
    param("restart-strategy.fixed-delay.delay", "flink-conf.yaml"),
    param("rest.address", "flink-conf.yaml"),
    param("rest.bind-address", "flink-conf.yaml"),
    param("rest.port", "flink-conf.yaml"),
    param("high-availability.storageDir", "flink-conf.yaml"),
    param("high-availability.zookeeper.quorum", "flink-conf.yaml"),
    param("io.tmp.dirs", "flink-conf.yaml"),
    param("web.upload.dir", "flink-conf.yaml"),
    param("classloader.resolve-order", "flink-conf.yaml"),
    param("akka.ask.timeout", "flink-conf.yaml"),
    param("heartbeat.interval", "flink-conf.yaml"),
    param("heartbeat.timeout", "flink-conf.yaml"),
    param("security.ssl.enabled", "flink-conf.yaml"),
    // log4j.properties
    param("rootLogger.level", "log4j.properties"),
    param("logger.akka.level", "log4j.properties"),
    param("appender.main.fileName", "log4j.properties"),
    param("rootLogger.level", "log4j-cli.properties"),
];

pub(super) const TABLE: ComponentTable = ComponentTable {
    component: Component::Flink,
    style: PatternStyle::EscapedDots,
    params: PARAMS,
    files: FILES,
    layout: ComponentLayout::new(
        "FLINK_HOME",
        "conf",
        &["/etc/flink/conf", "/usr/lib/flink/conf", "/opt/flink/conf", "/usr/local/flink/conf"],
    ),
};
