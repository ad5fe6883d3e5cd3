//! On-disk config file formats
//!
//! Each component declares the files it owns together with their format.
//! Files outside that table fall back to a guess from the file extension.

use crate::component::Component;
use crate::data;
use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// How `key`/`value` pairs are rendered in a line-oriented file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Java properties: `key=value`
    Equals,
    /// YAML-flavoured flat files (flink-conf.yaml): `key: value`
    Colon,
    /// Whitespace separated (spark-defaults.conf): `key value`
    Space,
    /// Shell environment files: `export KEY=value`
    Export,
    /// INI-like security config (shiro.ini): `key=value`, `[section]` markers ignored
    Ini,
}

impl LineStyle {
    /// Render a full line (without terminator) for this style
    #[must_use]
    pub fn render(self, key: &str, value: &str) -> String {
        match self {
            LineStyle::Equals | LineStyle::Ini => format!("{key}={value}"),
            LineStyle::Colon => format!("{key}: {value}"),
            LineStyle::Space => format!("{key} {value}"),
            LineStyle::Export => format!("export {key}={value}"),
        }
    }
}

/// Structural format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// `<root><property><name/><value/></property>...</root>`
    XmlProperty { root: &'static str },
    /// `<root><paramName>value</paramName>...</root>`
    XmlFlat { root: &'static str },
    /// One `key<sep>value` pair per line
    Lines(LineStyle),
}

impl ConfigFormat {
    /// Hadoop-style `<configuration>` property file
    pub const HADOOP_XML: ConfigFormat = ConfigFormat::XmlProperty {
        root: "configuration",
    };

    /// Java properties file
    pub const PROPERTIES: ConfigFormat = ConfigFormat::Lines(LineStyle::Equals);

    /// Resolve the format of `file` for `component`
    ///
    /// Declared files win; otherwise the extension decides. Returns `None`
    /// when neither knows the file.
    #[must_use]
    pub fn for_file(component: Component, file: &str) -> Option<ConfigFormat> {
        data::table(component)
            .files
            .iter()
            .find(|spec| spec.name == file)
            .map(|spec| spec.format)
            .or_else(|| Self::guess(file))
    }

    /// Guess a format from the file extension alone
    #[must_use]
    pub fn guess(file: &str) -> Option<ConfigFormat> {
        let ext = Path::new(file).extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "xml" => Some(Self::HADOOP_XML),
            "properties" | "cfg" => Some(Self::PROPERTIES),
            "yaml" | "yml" => Some(ConfigFormat::Lines(LineStyle::Colon)),
            "conf" => Some(ConfigFormat::Lines(LineStyle::Space)),
            "sh" => Some(ConfigFormat::Lines(LineStyle::Export)),
            "ini" => Some(ConfigFormat::Lines(LineStyle::Ini)),
            _ => None,
        }
    }

    /// Whether the format is one of the XML shapes
    #[inline]
    #[must_use]
    pub fn is_xml(self) -> bool {
        matches!(self, ConfigFormat::XmlProperty { .. } | ConfigFormat::XmlFlat { .. })
    }
}

impl Display for ConfigFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::XmlProperty { root } => write!(f, "xml-property<{root}>"),
            ConfigFormat::XmlFlat { root } => write!(f, "xml-flat<{root}>"),
            ConfigFormat::Lines(style) => write!(f, "lines({style:?})"),
        }
    }
}

/// A config file owned by a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigFileSpec {
    /// File name, relative to the component's config directory
    pub name: &'static str,
    /// Format used when reading and rewriting it
    pub format: ConfigFormat,
}

impl ConfigFileSpec {
    /// Declare a file
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, format: ConfigFormat) -> Self {
        Self { name, format }
    }
}
