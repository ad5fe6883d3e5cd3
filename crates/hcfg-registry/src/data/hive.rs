use super::ComponentTable;
use crate::component::Component;
use crate::format::{ConfigFileSpec, ConfigFormat, LineStyle};
use crate::layout::ComponentLayout;
use crate::registry::{param, PatternStyle, SpecDef};

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new("hive-site.xml", ConfigFormat::HADOOP_XML),
    ConfigFileSpec::new("hive-log4j2.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("hive-env.sh", ConfigFormat::Lines(LineStyle::Export)),
];

const PARAMS: &[SpecDef] = &[
    // hive-site.xml
    param("javax.jdo.option.ConnectionURL", "hive-site.xml"),
    param("javax.jdo.option.ConnectionDriverName", "hive-site.xml"),
    param("javax.jdo.option.ConnectionUserName", "hive-site.xml"),
    param("javax.jdo.option.ConnectionPassword", "hive-site.xml"),
    param("hive.metastore.uris", "hive-site.xml"),
    param("hive.metastore.warehouse.dir", "hive-site.xml"),
    param("hive.metastore.schema.verification", "hive-site.xml"),
    param("hive.exec.scratchdir", "hive-site.xml"),
    param("hive.execution.engine", "hive-site.xml"),
    param("hive.exec.dynamic.partition.mode", "hive-site.xml"),
    param("hive.support.concurrency", "hive-site.xml"),
    param("hive.server2.thrift.port", "hive-site.xml"),
    param("hive.server2.thrift.bind.host", "hive-site.xml"),
    param("hive.server2.webui.port", "hive-site.xml"),
    param("hive.server2.enable.doAs", "hive-site.xml"),
    param("hive.server2.session.check.interval", "hive-site.xml"),
    param("hive.server2.idle.session.timeout", "hive-site.xml"),
    // hive-log4j2.properties
    param("property.hive.log.dir", "hive-log4j2.properties"),
    param("property.hive.log.level", "hive-log4j2.properties"),
    param("rootLogger.level", "hive-log4j2.properties"),
    // hive-env.sh
    param("HADOOP_HEAPSIZE", "hive-env.sh"),
    param("HIVE_CONF_DIR", "hive-env.sh"),
    param("HIVE_AUX_JARS_PATH", "hive-env.sh"),
];

pub(super) const TABLE: ComponentTable = ComponentTable {
    component: Component::Hive,
    style: PatternStyle::EscapedDots,
    params: PARAMS,
    files: FILES,
    layout: ComponentLayout::new(
        "HIVE_HOME",
        "conf",
        &["/etc/hive/conf", "/usr/lib/hive/conf", "/opt/hive/conf", "/usr/local/hive/conf"],
    ),
};
