use super::ComponentTable;
use crate::component::Component;
use crate::format::{ConfigFileSpec, ConfigFormat, LineStyle};
use crate::layout::ComponentLayout;
use crate::registry::{param, PatternStyle, SpecDef};

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new("zeppelin-site.xml", ConfigFormat::HADOOP_XML),
    ConfigFileSpec::new("zeppelin-env.sh", ConfigFormat::Lines(LineStyle::Export)),
    ConfigFileSpec::new("shiro.ini", ConfigFormat::Lines(LineStyle::Ini)),
];

const PARAMS: &[SpecDef] = &[
    // zeppelin-site.xml
    param("zeppelin.server.addr", "zeppelin-site.xml"),
    param("zeppelin.server.port", "zeppelin-site.xml"),
    param("zeppelin.server.ssl.port", "zeppelin-site.xml"),
    param("zeppelin.server.context.path", "zeppelin-site.xml"),
    param("zeppelin.ssl", "zeppelin-site.xml"),
    param("zeppelin.notebook.dir", "zeppelin-site.xml"),
    param("zeppelin.notebook.storage", "zeppelin-site.xml"),
    param("zeppelin.interpreter.dir", "zeppelin-site.xml"),
    param("zeppelin.interpreter.connect.timeout", "zeppelin-site.xml"),
    param("zeppelin.anonymous.allowed", "zeppelin-site.xml"),
    param("zeppelin.websocket.max.text.message.size", "zeppelin-site.xml"),
    // zeppelin-env.sh
    param("ZEPPELIN_PORT", "zeppelin-env.sh"),
    param("ZEPPELIN_MEM", "zeppelin-env.sh"),
    param("ZEPPELIN_INTP_MEM", "zeppelin-env.sh"),
    param("ZEPPELIN_LOG_DIR", "zeppelin-env.sh"),
    param("SPARK_HOME", "zeppelin-env.sh"),
    // shiro.ini
    param("sessionManager", "shiro.ini"),
    param("securityManager.sessionManager", "shiro.ini"),
    param("securityManager.sessionManager.globalSessionTimeout", "shiro.ini"),
    param("shiro.loginUrl", "shiro.ini"),
];

pub(super) const TABLE: ComponentTable = ComponentTable {
    component: Component::Zeppelin,
    style: PatternStyle::EscapedDots,
    params: PARAMS,
    files: FILES,
    layout: ComponentLayout::new(
        "ZEPPELIN_HOME",
        "conf",
        &[
            "/etc/zeppelin/conf",
            "/usr/lib/zeppelin/conf",
            "/opt/zeppelin/conf",
            "/usr/local/zeppelin/conf",
        ],
    ),
};
