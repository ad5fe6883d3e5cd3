//! Built-in product data: parameters, files and layouts per component

use crate::component::Component;
use crate::format::ConfigFileSpec;
use crate::layout::ComponentLayout;
use crate::registry::{PatternStyle, SpecDef};

mod flink;
mod hadoop;
mod hbase;
mod hive;
mod kafka;
mod presto;
mod solr;
mod spark;
mod zeppelin;
mod zookeeper;

/// Everything the engine knows about one component
#[derive(Debug, Clone, Copy)]
pub struct ComponentTable {
    /// Owning component
    pub component: Component,
    /// Pattern derivation for entries without an explicit pattern
    pub style: PatternStyle,
    /// Registry entries, in declaration order
    pub params: &'static [SpecDef],
    /// Files the component owns and their formats
    pub files: &'static [ConfigFileSpec],
    /// Install layout
    pub layout: ComponentLayout,
}

/// Static table for `component`
#[must_use]
pub fn table(component: Component) -> &'static ComponentTable {
    match component {
        Component::Hdfs => &hadoop::HDFS,
        Component::Yarn => &hadoop::YARN,
        Component::Hbase => &hbase::TABLE,
        Component::Hive => &hive::TABLE,
        Component::Kafka => &kafka::TABLE,
        Component::Flink => &flink::TABLE,
        Component::Presto => &presto::TABLE,
        Component::Solr => &solr::TABLE,
        Component::Zeppelin => &zeppelin::TABLE,
        Component::Spark => &spark::TABLE,
        Component::Zookeeper => &zookeeper::TABLE,
    }
}

impl Component {
    /// Install layout for this component
    #[inline]
    #[must_use]
    pub fn layout(self) -> &'static ComponentLayout {
        &table(self).layout
    }

    /// Files this component declares
    #[inline]
    #[must_use]
    pub fn config_files(self) -> &'static [ConfigFileSpec] {
        table(self).files
    }
}
