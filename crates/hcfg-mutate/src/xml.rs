//! XML config documents
//!
//! Two shapes are supported:
//!
//! - property: `<configuration><property><name>k</name><value>v</value></property></configuration>`
//! - flat: `<solr><k>v</k></solr>`
//!
//! The body is held as an [`xmltree::Element`] DOM. Everything before the
//! root element (XML declaration, stylesheet instructions, license comments)
//! is kept verbatim and written back unchanged.

use crate::error::MutationError;
use crate::mutator::MutationAction;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use xmltree::{Element, EmitterConfig, XMLNode};

/// Declaration written at the top of newly created documents
pub const DEFAULT_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Layout of entries below the root element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlShape {
    /// `<property><name/><value/></property>` children
    Property,
    /// `<paramName>value</paramName>` children
    Flat,
}

/// A parsed XML config file
#[derive(Debug, Clone)]
pub struct XmlConfig {
    path: PathBuf,
    prolog: String,
    root: Element,
    shape: XmlShape,
}

impl XmlConfig {
    /// Empty document with the expected root
    #[must_use]
    pub fn fresh(path: impl Into<PathBuf>, root: &str, shape: XmlShape) -> Self {
        Self {
            path: path.into(),
            prolog: DEFAULT_DECLARATION.to_string(),
            root: Element::new(root),
            shape,
        }
    }

    /// Read and parse `path`
    ///
    /// A missing or blank file yields a fresh document when `create` is set.
    ///
    /// # Errors
    /// `FileNotFound`, `FileReadError`, `XmlParseError` or `XmlInvalidRoot`
    pub fn load(path: &Path, root: &str, shape: XmlShape, create: bool) -> Result<Self, MutationError> {
        match fs::read_to_string(path) {
            Ok(text) if text.trim().is_empty() => {
                if create {
                    Ok(Self::fresh(path, root, shape))
                } else {
                    Err(MutationError::xml_parse(path, "document is empty"))
                }
            }
            Ok(text) => Self::parse(path, &text, root, shape),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if create {
                    Ok(Self::fresh(path, root, shape))
                } else {
                    Err(MutationError::not_found(path, "file does not exist"))
                }
            }
            Err(e) => Err(MutationError::read_error(path, e)),
        }
    }

    /// Parse document text; `path` is only used for error reporting
    ///
    /// # Errors
    /// `XmlParseError` for malformed text, `XmlInvalidRoot` for a root other
    /// than `root`
    pub fn parse(path: &Path, text: &str, root: &str, shape: XmlShape) -> Result<Self, MutationError> {
        let (prolog, body) = split_prolog(text);
        let mut element = Element::parse(body.as_bytes()).map_err(|e| MutationError::xml_parse(path, e))?;
        if element.name != root {
            return Err(MutationError::XmlInvalidRoot {
                path: path.to_path_buf(),
                expected: root.to_string(),
                found: element.name,
            });
        }
        normalize_text(&mut element);
        Ok(Self {
            path: path.to_path_buf(),
            prolog: prolog.to_string(),
            root: element,
            shape,
        })
    }

    /// File this document belongs to
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entry shape
    #[inline]
    #[must_use]
    pub fn shape(&self) -> XmlShape {
        self.shape
    }

    /// Number of entries (properties or flat elements) below the root
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// Whether the root has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> impl Iterator<Item = &Element> {
        let shape = self.shape;
        self.root.children.iter().filter_map(move |node| match node {
            XMLNode::Element(e) if shape == XmlShape::Flat || e.name == "property" => Some(e),
            _ => None,
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.root.children.iter().position(|node| match node {
            XMLNode::Element(e) => self.is_entry_for(e, name),
            _ => false,
        })
    }

    fn is_entry_for(&self, element: &Element, name: &str) -> bool {
        match self.shape {
            XmlShape::Property => element.name == "property" && property_name(element).as_deref() == Some(name),
            XmlShape::Flat => element.name == name,
        }
    }

    /// Current value of `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let XMLNode::Element(entry) = &self.root.children[self.position(name)?] else {
            return None;
        };
        let holder = match self.shape {
            XmlShape::Property => entry.get_child("value"),
            XmlShape::Flat => Some(entry),
        };
        Some(
            holder
                .and_then(Element::get_text)
                .map(|t| t.into_owned())
                .unwrap_or_default(),
        )
    }

    /// Set `name` to `value`, replacing the first matching entry or appending
    ///
    /// # Errors
    /// `XmlUpdateError` when `name` cannot be an element name in flat shape
    pub fn set(&mut self, name: &str, value: &str) -> Result<MutationAction, MutationError> {
        if self.shape == XmlShape::Flat && !is_element_name(name) {
            return Err(MutationError::xml_update(
                &self.path,
                format!("'{name}' is not a valid element name"),
            ));
        }

        if let Some(i) = self.position(name) {
            if let XMLNode::Element(entry) = &mut self.root.children[i] {
                match self.shape {
                    XmlShape::Property => set_child_text(entry, "value", value),
                    XmlShape::Flat => entry.children = vec![text_node(value)],
                }
            }
            return Ok(MutationAction::Updated);
        }

        let entry = match self.shape {
            XmlShape::Property => {
                let mut property = Element::new("property");
                set_child_text(&mut property, "name", name);
                set_child_text(&mut property, "value", value);
                property
            }
            XmlShape::Flat => text_element(name, value),
        };
        self.root.children.push(XMLNode::Element(entry));
        Ok(MutationAction::Appended)
    }

    /// Serialize the document: prolog, then the pretty-printed root
    ///
    /// # Errors
    /// `XmlUpdateError` if the emitter fails
    pub fn render(&self, indent: &str) -> Result<String, MutationError> {
        let config = EmitterConfig::new()
            .perform_indent(true)
            .indent_string(indent.to_string())
            .write_document_declaration(false);
        let mut buf = Vec::new();
        self.root
            .write_with_config(&mut buf, config)
            .map_err(|e| MutationError::xml_update(&self.path, e))?;
        let body = String::from_utf8(buf).map_err(|e| MutationError::xml_update(&self.path, e))?;

        let mut out = String::with_capacity(self.prolog.len() + body.len() + 2);
        if !self.prolog.is_empty() {
            out.push_str(&self.prolog);
            out.push('\n');
        }
        out.push_str(body.trim());
        out.push('\n');
        Ok(out)
    }
}

fn property_name(property: &Element) -> Option<String> {
    property
        .get_child("name")?
        .get_text()
        .map(|t| t.trim().to_string())
}

fn text_element(tag: &str, text: &str) -> Element {
    let mut element = Element::new(tag);
    element.children.push(text_node(text));
    element
}

fn set_child_text(parent: &mut Element, tag: &str, text: &str) {
    match parent.get_mut_child(tag) {
        Some(child) => child.children = vec![text_node(text)],
        None => parent.children.push(XMLNode::Element(text_element(tag, text))),
    }
}

fn is_blank(text: &str) -> bool {
    !text.is_empty() && text.trim().is_empty()
}

/// Blank text is kept as CDATA; the parser drops whitespace-only character data
fn text_node(text: &str) -> XMLNode {
    if is_blank(text) {
        XMLNode::CData(text.to_string())
    } else {
        XMLNode::Text(text.to_string())
    }
}

/// Drop indentation between elements so re-indenting is stable
fn normalize_text(element: &mut Element) {
    if element.children.iter().any(|n| matches!(n, XMLNode::Element(_))) {
        element
            .children
            .retain(|node| !matches!(node, XMLNode::Text(t) if t.trim().is_empty()));
    }
    for node in &mut element.children {
        match node {
            XMLNode::Element(child) => normalize_text(child),
            XMLNode::Text(t) if is_blank(t) => {
                let blank = std::mem::take(t);
                *node = XMLNode::CData(blank);
            }
            _ => {}
        }
    }
}

/// XML name without namespace prefix
fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !name.to_ascii_lowercase().starts_with("xml")
}

/// Split `text` into (prolog, body) at the root element's start tag
fn split_prolog(text: &str) -> (&str, &str) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut consumed = 0;
    loop {
        let rest = &text[consumed..];
        let trimmed = rest.trim_start();
        let end = if trimmed.starts_with("<?") {
            trimmed.find("?>").map(|i| i + 2)
        } else if trimmed.starts_with("<!--") {
            trimmed.find("-->").map(|i| i + 3)
        } else if trimmed.starts_with("<!DOCTYPE") {
            doctype_end(trimmed)
        } else {
            None
        };
        match end {
            Some(n) => consumed += rest.len() - trimmed.len() + n,
            None => break,
        }
    }
    (text[..consumed].trim(), &text[consumed..])
}

fn doctype_end(s: &str) -> Option<usize> {
    let gt = s.find('>')?;
    if s[..gt].contains('[') {
        s.find("]>").map(|i| i + 2)
    } else {
        Some(gt + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HDFS_SITE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<?xml-stylesheet type="text/xsl" href="configuration.xsl"?>
<!--
  Licensed under the Apache License, Version 2.0
-->
<configuration>
  <!-- replication -->
  <property>
    <name>dfs.replication</name>
    <value>3</value>
  </property>
  <property>
    <name>dfs.namenode.name.dir</name>
    <value>/data/nn</value>
  </property>
</configuration>
"#;

    fn parse(text: &str) -> XmlConfig {
        XmlConfig::parse(Path::new("hdfs-site.xml"), text, "configuration", XmlShape::Property).unwrap()
    }

    #[test]
    fn blank_values_survive_a_reparse() {
        let mut doc = parse(HDFS_SITE);
        doc.set("dfs.replication", " ").unwrap();
        doc.set("dfs.datanode.du.reserved", " 1024 ").unwrap();
        let rendered = doc.render("  ").unwrap();

        let reparsed = parse(&rendered);
        assert_eq!(reparsed.get("dfs.replication").as_deref(), Some(" "));
        assert_eq!(reparsed.get("dfs.datanode.du.reserved").as_deref(), Some(" 1024 "));
        assert_eq!(reparsed.get("dfs.namenode.name.dir").as_deref(), Some("/data/nn"));
        assert_eq!(reparsed.render("  ").unwrap(), rendered);
    }

    #[test]
    fn prolog_is_split_verbatim() {
        let (prolog, body) = split_prolog(HDFS_SITE);
        assert!(prolog.starts_with("<?xml version"));
        assert!(prolog.ends_with("-->"));
        assert!(prolog.contains("xml-stylesheet"));
        assert!(body.trim_start().starts_with("<configuration>"));
    }

    #[test]
    fn doctype_is_part_of_prolog() {
        let (prolog, body) = split_prolog("<!DOCTYPE configuration [ <!ENTITY x \"y\"> ]>\n<configuration/>");
        assert!(prolog.starts_with("<!DOCTYPE"));
        assert_eq!(body.trim(), "<configuration/>");
    }

    #[test]
    fn get_reads_property_values() {
        let doc = parse(HDFS_SITE);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("dfs.replication").as_deref(), Some("3"));
        assert_eq!(doc.get("dfs.blocksize"), None);
    }

    #[test]
    fn name_match_ignores_surrounding_whitespace() {
        let doc = parse("<configuration><property><name> a.b </name><value>1</value></property></configuration>");
        assert_eq!(doc.get("a.b").as_deref(), Some("1"));
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut doc = parse(HDFS_SITE);
        assert_eq!(doc.set("dfs.replication", "2").unwrap(), MutationAction::Updated);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("dfs.replication").as_deref(), Some("2"));
    }

    #[test]
    fn set_appends_missing_property_last() {
        let mut doc = parse(HDFS_SITE);
        assert_eq!(doc.set("dfs.blocksize", "256m").unwrap(), MutationAction::Appended);
        let rendered = doc.render("  ").unwrap();
        let last = rendered.rfind("<name>").unwrap();
        assert!(rendered[last..].starts_with("<name>dfs.blocksize</name>"));
    }

    #[test]
    fn set_creates_missing_value_element() {
        let mut doc = parse("<configuration><property><name>a</name></property></configuration>");
        assert_eq!(doc.set("a", "1").unwrap(), MutationAction::Updated);
        assert_eq!(doc.get("a").as_deref(), Some("1"));
    }

    #[test]
    fn render_keeps_prolog() {
        let mut doc = parse(HDFS_SITE);
        doc.set("dfs.replication", "2").unwrap();
        let out = doc.render("  ").unwrap();
        let (prolog, _) = split_prolog(HDFS_SITE);
        assert!(out.starts_with(prolog));
        assert!(out.ends_with("</configuration>\n"));
    }

    #[test]
    fn render_is_stable() {
        let mut doc = parse(HDFS_SITE);
        doc.set("dfs.replication", "2").unwrap();
        let once = doc.render("  ").unwrap();
        let mut again = parse(&once);
        again.set("dfs.replication", "2").unwrap();
        assert_eq!(again.render("  ").unwrap(), once);
    }

    #[test]
    fn fresh_document_has_declaration_and_root() {
        let mut doc = XmlConfig::fresh("core-site.xml", "configuration", XmlShape::Property);
        doc.set("fs.defaultFS", "hdfs://nn:8020").unwrap();
        let out = doc.render("  ").unwrap();
        assert!(out.starts_with(DEFAULT_DECLARATION));
        let reparsed = parse(&out);
        assert_eq!(reparsed.len(), 1);
        assert_eq!(reparsed.get("fs.defaultFS").as_deref(), Some("hdfs://nn:8020"));
    }

    #[test]
    fn special_characters_round_trip() {
        let mut doc = XmlConfig::fresh("hive-site.xml", "configuration", XmlShape::Property);
        let url = "jdbc:mysql://db:3306/hive?createDatabaseIfNotExist=true&useSSL=false";
        doc.set("javax.jdo.option.ConnectionURL", url).unwrap();
        let reparsed = parse(&doc.render("  ").unwrap());
        assert_eq!(reparsed.get("javax.jdo.option.ConnectionURL").as_deref(), Some(url));
    }

    #[test]
    fn wrong_root_is_rejected() {
        let err = XmlConfig::parse(Path::new("x.xml"), "<beans/>", "configuration", XmlShape::Property).unwrap_err();
        match err {
            MutationError::XmlInvalidRoot { expected, found, .. } => {
                assert_eq!(expected, "configuration");
                assert_eq!(found, "beans");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = XmlConfig::parse(
            Path::new("x.xml"),
            "<configuration><property></configuration>",
            "configuration",
            XmlShape::Property,
        )
        .unwrap_err();
        assert!(matches!(err, MutationError::XmlParseError { .. }), "{err:?}");
    }

    #[test]
    fn flat_shape_updates_elements() {
        let mut doc = XmlConfig::parse(
            Path::new("solr.xml"),
            "<solr>\n  <zkHost>zk1:2181</zkHost>\n</solr>\n",
            "solr",
            XmlShape::Flat,
        )
        .unwrap();
        assert_eq!(doc.set("zkHost", "zk2:2181").unwrap(), MutationAction::Updated);
        assert_eq!(doc.set("hostPort", "8983").unwrap(), MutationAction::Appended);
        assert_eq!(doc.get("zkHost").as_deref(), Some("zk2:2181"));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn flat_shape_rejects_invalid_element_names() {
        let mut doc = XmlConfig::fresh("solr.xml", "solr", XmlShape::Flat);
        for bad in ["1host", "a b", "ns:tag", "xmlThing", ""] {
            assert!(
                matches!(doc.set(bad, "v"), Err(MutationError::XmlUpdateError { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn missing_file_without_create_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("core-site.xml");
        let err = XmlConfig::load(&path, "configuration", XmlShape::Property, false).unwrap_err();
        assert!(matches!(err, MutationError::FileNotFound { .. }));
        let doc = XmlConfig::load(&path, "configuration", XmlShape::Property, true).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn blank_file_is_treated_as_new() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("core-site.xml");
        fs::write(&path, "\n  \n").unwrap();
        let doc = XmlConfig::load(&path, "configuration", XmlShape::Property, true).unwrap();
        assert!(doc.is_empty());
        assert!(doc.render("  ").unwrap().starts_with(DEFAULT_DECLARATION));
    }
}
