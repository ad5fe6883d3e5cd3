use super::ComponentTable;
use crate::component::Component;
use crate::format::{ConfigFileSpec, ConfigFormat};
use crate::layout::ComponentLayout;
use crate::registry::{param, PatternStyle, SpecDef};

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new("config.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("node.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("log.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("catalog/hive.properties", ConfigFormat::PROPERTIES),
];

const PARAMS: &[SpecDef] = &[
    // config.properties
    param("coordinator", "config.properties"),
    param("node-scheduler.include-coordinator", "config.properties"),
    param("http-server.http.port", "config.properties"),
    param("http-server.https.enabled", "config.properties"),
    param("http-server.https.port", "config.properties"),
    param("query.max-memory", "config.properties"),
    param("query.max-memory-per-node", "config.properties"),
    param("query.max-total-memory-per-node", "config.properties"),
    param("query.max-run-time", "config.properties"),
    param("discovery-server.enabled", "config.properties"),
    param("discovery.uri", "config.properties"),
    // node.properties
    param("node.environment", "node.properties"),
    param("node.id", "node.properties"),
    param("node.data-dir", "node.properties"),
    // log.properties
    param("com.facebook.presto", "log.properties"),
    // catalog/hive.properties
    param("connector.name", "catalog/hive.properties"),
    param("hive.metastore.uri", "catalog/hive.properties"),
    param("hive.config.resources", "catalog/hive.properties"),
];

pub(super) const TABLE: ComponentTable = ComponentTable {
    component: Component::Presto,
    style: PatternStyle::SeparatorClass,
    params: PARAMS,
    files: FILES,
    layout: ComponentLayout::new(
        "PRESTO_HOME",
        "etc",
        &["/etc/presto", "/usr/lib/presto/etc", "/opt/presto/etc", "/usr/local/presto/etc"],
    ),
};
