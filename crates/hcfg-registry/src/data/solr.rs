use super::ComponentTable;
use crate::component::Component;
use crate::format::{ConfigFileSpec, ConfigFormat};
use crate::layout::ComponentLayout;
use crate::registry::{param, PatternStyle, SpecDef};

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new("solr.xml", ConfigFormat::XmlFlat { root: "solr" }),
    ConfigFileSpec::new("solr.in.sh", ConfigFormat::PROPERTIES),
];

const PARAMS: &[SpecDef] = &[
    // solr.xml
    param("sharedLib", "solr.xml"),
    param("coreRootDirectory", "solr.xml"),
    param("allowPaths", "solr.xml"),
    param("maxBooleanClauses", "solr.xml"),
    param("host", "solr.xml"),
    param("hostPort", "solr.xml"),
    param("hostContext", "solr.xml"),
    param("zkHost", "solr.xml"),
    param("zkClientTimeout", "solr.xml"),
    param("genericCoreNodeNames", "solr.xml"),
    param("distribUpdateSoTimeout", "solr.xml"),
    // solr.in.sh
    param("SOLR_HEAP", "solr.in.sh"),
    param("SOLR_JAVA_MEM", "solr.in.sh"),
    param("SOLR_HOST", "solr.in.sh"),
    param("SOLR_PORT", "solr.in.sh"),
    param("ZK_HOST", "solr.in.sh"),
    param("SOLR_LOGS_DIR", "solr.in.sh"),
];

pub(super) const TABLE: ComponentTable = ComponentTable {
    component: Component::Solr,
    style: PatternStyle::EscapedDots,
    params: PARAMS,
    files: FILES,
    layout: ComponentLayout::new(
        "SOLR_HOME",
        "",
        &["/var/solr/data", "/etc/solr", "/opt/solr/server/solr", "/usr/local/solr/server/solr"],
    ),
};
