use super::ComponentTable;
use crate::component::Component;
use crate::format::{ConfigFileSpec, ConfigFormat, LineStyle};
use crate::layout::ComponentLayout;
use crate::registry::{param, PatternStyle, SpecDef};

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new("zoo.cfg", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("log4j.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("zookeeper-env.sh", ConfigFormat::Lines(LineStyle::Export)),
];

const PARAMS: &[SpecDef] = &[
    // zoo.cfg
    param("tickTime", "zoo.cfg"),
    param("initLimit", "zoo.cfg"),
    param("syncLimit", "zoo.cfg"),
    param("dataDir", "zoo.cfg"),
    param("dataLogDir", "zoo.cfg"),
    param("clientPort", "zoo.cfg"),
    param("maxClientCnxns", "zoo.cfg"),
    param("autopurge.snapRetainCount", "zoo.cfg"),
    param("autopurge.purgeInterval", "zoo.cfg"),
    param("admin.enableServer", "zoo.cfg"),
    param("admin.serverPort", "zoo.cfg"),
    param("4lw.commands.whitelist", "zoo.cfg"),
    // log4j.properties
    param("log4j.rootLogger", "log4j.properties"),
    param("zookeeper.root.logger", "log4j.properties"),
    param("zookeeper.log.dir", "log4j.properties"),
    // zookeeper-env.sh
    param("ZOO_LOG_DIR", "zookeeper-env.sh"),
    param("ZK_SERVER_HEAP", "zookeeper-env.sh"),
    param("JAVA_HOME", "zookeeper-env.sh"),
];

pub(super) const TABLE: ComponentTable = ComponentTable {
    component: Component::Zookeeper,
    style: PatternStyle::SeparatorClass,
    params: PARAMS,
    files: FILES,
    layout: ComponentLayout::new(
        "ZOOKEEPER_HOME",
        "conf",
        &[
            "/etc/zookeeper/conf",
            "/usr/lib/zookeeper/conf",
            "/opt/zookeeper/conf",
            "/usr/local/zookeeper/conf",
        ],
    ),
};
