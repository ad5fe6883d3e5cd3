use super::ComponentTable;
use crate::component::Component;
use crate::format::{ConfigFileSpec, ConfigFormat, LineStyle};
use crate::layout::ComponentLayout;
use crate::registry::{param, PatternStyle, SpecDef};

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new("hbase-site.xml", ConfigFormat::HADOOP_XML),
    ConfigFileSpec::new("log4j.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("hbase-env.sh", ConfigFormat::Lines(LineStyle::Export)),
];

const PARAMS: &[SpecDef] = &[
    // hbase-site.xml
    param("hbase.rootdir", "hbase-site.xml"),
    param("hbase.cluster.distributed", "hbase-site.xml"),
    param("hbase.tmp.dir", "hbase-site.xml"),
    param("hbase.zookeeper.quorum", "hbase-site.xml"),
    param("hbase.zookeeper.property.clientPort", "hbase-site.xml"),
    param("hbase.zookeeper.property.dataDir", "hbase-site.xml"),
    param("hbase.master.port", "hbase-site.xml"),
    param("hbase.master.info.port", "hbase-site.xml"),
    param("hbase.regionserver.port", "hbase-site.xml"),
    param("hbase.regionserver.info.port", "hbase-site.xml"),
    param("hbase.regionserver.handler.count", "hbase-site.xml"),
    param("hbase.hregion.max.filesize", "hbase-site.xml"),
    param("hbase.hregion.memstore.flush.size", "hbase-site.xml"),
    param("hbase.regionserver.global.memstore.size", "hbase-site.xml"),
    param("hfile.block.cache.size", "hbase-site.xml"),
    param("zookeeper.session.timeout", "hbase-site.xml"),
    param("hbase.security.authentication", "hbase-site.xml"),
    param("hbase.unsafe.stream.capability.enforce", "hbase-site.xml"),
    // log4j.properties
    param("log4j.rootLogger", "log4j.properties"),
    param("hbase.root.logger", "log4j.properties"),
    param("hbase.log.dir", "log4j.properties"),
    // hbase-env.sh
    param("HBASE_HEAPSIZE", "hbase-env.sh"),
    param("HBASE_MANAGES_ZK", "hbase-env.sh"),
    param("HBASE_LOG_DIR", "hbase-env.sh"),
    param("JAVA_HOME", "hbase-env.sh"),
];

pub(super) const TABLE: ComponentTable = ComponentTable {
    component: Component::Hbase,
    style: PatternStyle::EscapedDots,
    params: PARAMS,
    files: FILES,
    layout: ComponentLayout::new(
        "HBASE_HOME",
        "conf",
        &[
            "/etc/hbase/conf",
            "/usr/lib/hbase/conf",
            "/usr/hdp/current/hbase-client/conf",
            "/opt/hbase/conf",
            "/usr/local/hbase/conf",
        ],
    ),
};
