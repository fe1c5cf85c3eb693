//! Owned XML document tree over quick-xml events.
//!
//! The mapping pass needs a mutable tree: locate text at a field locator,
//! substitute it in place, serialize once at the end. quick-xml is an event
//! stream, so this module materializes the events into a small node tree and
//! replays the tree back through a writer.
//!
//! Serialization unescapes the character entities the writer introduced, so
//! the output carries literal Unicode text rather than `&#...;`/named
//! entities.

use std::path::Path;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{CoreError, CoreResult};

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// An element with attributes and children.
    Element(XmlElement),
    /// Character data (stored unescaped).
    Text(String),
    /// A CDATA section.
    CData(String),
    /// A comment.
    Comment(String),
    /// The XML declaration.
    Declaration {
        version: String,
        encoding: Option<String>,
        standalone: Option<String>,
    },
    /// A processing instruction (raw content between `<?` and `?>`).
    ProcessingInstruction(String),
    /// A DOCTYPE declaration (raw content).
    DocType(String),
}

/// An element: name, attributes, ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// New element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Direct child elements, in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            _ => None,
        })
    }

    /// First direct child element with this name.
    pub fn find_child(&self, name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|el| el.name == name)
    }

    /// All descendant elements in document order (self excluded).
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }

    /// All descendant elements with this name, in document order.
    pub fn descendants_named(&self, name: &str) -> Vec<&XmlElement> {
        self.descendants()
            .into_iter()
            .filter(|el| el.name == name)
            .collect()
    }

    /// The element's text when its content is a single text or CDATA node.
    ///
    /// Elements with child elements or mixed content yield `None`; they are
    /// containers, not text carriers.
    pub fn text(&self) -> Option<&str> {
        match self.children.as_slice() {
            [XmlNode::Text(s)] | [XmlNode::CData(s)] => Some(s),
            _ => None,
        }
    }

    /// Replaces the element's content with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![XmlNode::Text(text.into())];
    }

    /// Visits every direct child element with this name, mutably, in order.
    pub fn for_each_child_mut(&mut self, name: &str, f: &mut dyn FnMut(&mut XmlElement)) {
        for node in &mut self.children {
            if let XmlNode::Element(el) = node {
                if el.name == name {
                    f(el);
                }
            }
        }
    }

    /// Visits every descendant element with this name, mutably, in document
    /// order (matching [`descendants_named`](Self::descendants_named)).
    pub fn for_each_descendant_mut(&mut self, name: &str, f: &mut dyn FnMut(&mut XmlElement)) {
        for node in &mut self.children {
            if let XmlNode::Element(el) = node {
                if el.name == name {
                    f(el);
                }
                el.for_each_descendant_mut(name, f);
            }
        }
    }
}

fn collect_descendants<'a>(el: &'a XmlElement, out: &mut Vec<&'a XmlElement>) {
    for node in &el.children {
        if let XmlNode::Element(child) = node {
            out.push(child);
            collect_descendants(child, out);
        }
    }
}

/// The full parsed document: prolog, root element, epilog, all as nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlDocument {
    pub nodes: Vec<XmlNode>,
}

impl XmlDocument {
    /// Reads and parses an XML file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let xml = std::fs::read_to_string(path).map_err(|e| CoreError::FileRead {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        Self::parse_str(&xml)
    }

    /// Parses XML text into a document tree.
    pub fn parse_str(xml: &str) -> CoreResult<Self> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut nodes: Vec<XmlNode> = Vec::new();

        let parse_err = |e: &dyn std::fmt::Display| CoreError::XmlParse(e.to_string());

        loop {
            let event = reader.read_event().map_err(|e| parse_err(&e))?;
            match event {
                Event::Start(start) => {
                    stack.push(element_from_start(&start)?);
                }
                Event::Empty(start) => {
                    let el = element_from_start(&start)?;
                    attach(&mut stack, &mut nodes, XmlNode::Element(el));
                }
                Event::End(_) => {
                    let el = stack
                        .pop()
                        .ok_or_else(|| CoreError::XmlParse("unexpected closing tag".into()))?;
                    attach(&mut stack, &mut nodes, XmlNode::Element(el));
                }
                Event::Text(t) => {
                    let text = t.unescape().map_err(|e| parse_err(&e))?.into_owned();
                    attach(&mut stack, &mut nodes, XmlNode::Text(text));
                }
                Event::CData(c) => {
                    let text = String::from_utf8_lossy(&c).into_owned();
                    attach(&mut stack, &mut nodes, XmlNode::CData(text));
                }
                Event::Comment(t) => {
                    let text = t.unescape().map_err(|e| parse_err(&e))?.into_owned();
                    attach(&mut stack, &mut nodes, XmlNode::Comment(text));
                }
                Event::Decl(d) => {
                    let version = d
                        .version()
                        .map(|v| String::from_utf8_lossy(&v).into_owned())
                        .unwrap_or_else(|_| "1.0".to_string());
                    let encoding = d
                        .encoding()
                        .and_then(std::result::Result::ok)
                        .map(|v| String::from_utf8_lossy(&v).into_owned());
                    let standalone = d
                        .standalone()
                        .and_then(std::result::Result::ok)
                        .map(|v| String::from_utf8_lossy(&v).into_owned());
                    attach(
                        &mut stack,
                        &mut nodes,
                        XmlNode::Declaration {
                            version,
                            encoding,
                            standalone,
                        },
                    );
                }
                Event::PI(pi) => {
                    let content = String::from_utf8_lossy(&pi).into_owned();
                    attach(&mut stack, &mut nodes, XmlNode::ProcessingInstruction(content));
                }
                Event::DocType(t) => {
                    let content = String::from_utf8_lossy(&t).into_owned();
                    attach(&mut stack, &mut nodes, XmlNode::DocType(content));
                }
                Event::Eof => break,
            }
        }

        if !stack.is_empty() {
            return Err(CoreError::XmlParse("unexpected end of document".into()));
        }
        Ok(Self { nodes })
    }

    /// Serializes the tree back to XML text.
    ///
    /// Entities the writer escaped on the way out are decoded again, so the
    /// returned text contains literal characters.
    pub fn to_xml_string(&self) -> CoreResult<String> {
        let mut writer = Writer::new(Vec::new());
        for node in &self.nodes {
            write_node(&mut writer, node)?;
        }
        let xml = String::from_utf8(writer.into_inner())
            .map_err(|e| CoreError::XmlSerialize(e.to_string()))?;
        Ok(match unescape(&xml) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => xml,
        })
    }

    /// Serializes the tree and writes it to `path` as UTF-8.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let xml = self.to_xml_string()?;
        std::fs::write(path, xml.as_bytes()).map_err(|e| CoreError::FileWrite {
            path: path.display().to_string(),
            detail: e.to_string(),
        })
    }

    /// Number of elements with this name anywhere in the document.
    pub fn count_elements(&self, name: &str) -> usize {
        let mut count = 0;
        self.walk(&mut |el| {
            if el.name == name {
                count += 1;
            }
        });
        count
    }

    /// First element with this name, in document order.
    pub fn first_element(&self, name: &str) -> Option<&XmlElement> {
        for node in &self.nodes {
            if let XmlNode::Element(el) = node {
                if el.name == name {
                    return Some(el);
                }
                if let Some(found) = find_in(el, name) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// The n-th element (0-indexed, document order) with this name.
    pub fn nth_element(&self, name: &str, n: usize) -> Option<&XmlElement> {
        let mut seen = 0;
        let mut found: Option<&XmlElement> = None;
        self.walk(&mut |el| {
            if el.name == name {
                if seen == n && found.is_none() {
                    found = Some(el);
                }
                seen += 1;
            }
        });
        found
    }

    /// Mutable access to the n-th element (0-indexed, document order) with
    /// this name. Enumeration order matches [`nth_element`](Self::nth_element).
    pub fn nth_element_mut(&mut self, name: &str, n: usize) -> Option<&mut XmlElement> {
        let mut seen = 0;
        for node in &mut self.nodes {
            if let XmlNode::Element(el) = node {
                if let Some(found) = nth_in_mut(el, name, n, &mut seen) {
                    return Some(found);
                }
            }
        }
        None
    }

    fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a XmlElement)) {
        for node in &self.nodes {
            if let XmlNode::Element(el) = node {
                walk_element(el, f);
            }
        }
    }
}

fn walk_element<'a>(el: &'a XmlElement, f: &mut dyn FnMut(&'a XmlElement)) {
    f(el);
    for node in &el.children {
        if let XmlNode::Element(child) = node {
            walk_element(child, f);
        }
    }
}

fn find_in<'a>(el: &'a XmlElement, name: &str) -> Option<&'a XmlElement> {
    for node in &el.children {
        if let XmlNode::Element(child) = node {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = find_in(child, name) {
                return Some(found);
            }
        }
    }
    None
}

fn nth_in_mut<'a>(
    el: &'a mut XmlElement,
    name: &str,
    n: usize,
    seen: &mut usize,
) -> Option<&'a mut XmlElement> {
    if el.name == name {
        if *seen == n {
            return Some(el);
        }
        *seen += 1;
    }
    for node in &mut el.children {
        if let XmlNode::Element(child) = node {
            if let Some(found) = nth_in_mut(child, name, n, seen) {
                return Some(found);
            }
        }
    }
    None
}

fn element_from_start(start: &BytesStart<'_>) -> CoreResult<XmlElement> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| CoreError::XmlParse(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| CoreError::XmlParse(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn attach(stack: &mut [XmlElement], nodes: &mut Vec<XmlNode>, node: XmlNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else {
        nodes.push(node);
    }
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> CoreResult<()> {
    let write_err = |e: &dyn std::fmt::Display| CoreError::XmlSerialize(e.to_string());
    match node {
        XmlNode::Element(el) => write_element(writer, el)?,
        XmlNode::Text(s) => {
            writer
                .write_event(Event::Text(BytesText::new(s)))
                .map_err(|e| write_err(&e))?;
        }
        XmlNode::CData(s) => {
            writer
                .write_event(Event::CData(BytesCData::new(s)))
                .map_err(|e| write_err(&e))?;
        }
        XmlNode::Comment(s) => {
            writer
                .write_event(Event::Comment(BytesText::new(s)))
                .map_err(|e| write_err(&e))?;
        }
        XmlNode::Declaration {
            version,
            encoding,
            standalone,
        } => {
            writer
                .write_event(Event::Decl(BytesDecl::new(
                    version,
                    encoding.as_deref(),
                    standalone.as_deref(),
                )))
                .map_err(|e| write_err(&e))?;
        }
        XmlNode::ProcessingInstruction(s) => {
            writer
                .write_event(Event::PI(BytesPI::new(s)))
                .map_err(|e| write_err(&e))?;
        }
        XmlNode::DocType(s) => {
            writer
                .write_event(Event::DocType(BytesText::new(s)))
                .map_err(|e| write_err(&e))?;
        }
    }
    Ok(())
}

fn write_element(writer: &mut Writer<Vec<u8>>, el: &XmlElement) -> CoreResult<()> {
    let write_err = |e: &dyn std::fmt::Display| CoreError::XmlSerialize(e.to_string());
    let mut start = BytesStart::new(el.name.as_str());
    for (key, value) in &el.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    if el.children.is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| write_err(&e))?;
        return Ok(());
    }
    writer
        .write_event(Event::Start(start))
        .map_err(|e| write_err(&e))?;
    for child in &el.children {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(el.name.as_str())))
        .map_err(|e| write_err(&e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<catalog>
  <product sku="A-1">
    <name>Wireless Mouse</name>
    <category>Electronics</category>
    <category>Accessories</category>
    <attribute>
      <name>Color</name>
      <label>Matte black</label>
    </attribute>
  </product>
</catalog>"#;

    #[test]
    fn parse_builds_tree() {
        let doc = XmlDocument::parse_str(CATALOG).unwrap();
        let product = doc.first_element("product").unwrap();
        assert_eq!(product.attributes, vec![("sku".into(), "A-1".into())]);
        assert_eq!(
            product.find_child("name").unwrap().text(),
            Some("Wireless Mouse")
        );
        assert_eq!(product.descendants_named("category").len(), 2);
    }

    #[test]
    fn text_is_none_for_containers() {
        let doc = XmlDocument::parse_str(CATALOG).unwrap();
        let product = doc.first_element("product").unwrap();
        // product has element children and indentation text, not a sole text node
        assert_eq!(product.text(), None);
        let attribute = product.find_child("attribute").unwrap();
        assert_eq!(attribute.find_child("label").unwrap().text(), Some("Matte black"));
    }

    #[test]
    fn round_trip_preserves_layout() {
        let doc = XmlDocument::parse_str(CATALOG).unwrap();
        let out = doc.to_xml_string().unwrap();
        assert_eq!(out, CATALOG);
    }

    #[test]
    fn serialization_unescapes_entities() {
        let doc = XmlDocument::parse_str("<product><name>Tom &amp; Jerry</name></product>")
            .unwrap();
        let out = doc.to_xml_string().unwrap();
        assert_eq!(out, "<product><name>Tom & Jerry</name></product>");
    }

    #[test]
    fn set_text_replaces_content_only() {
        let mut doc = XmlDocument::parse_str(CATALOG).unwrap();
        let product = doc.nth_element_mut("product", 0).unwrap();
        let mut seen = Vec::new();
        product.for_each_descendant_mut("category", &mut |el| {
            seen.push(el.text().unwrap_or_default().to_string());
            el.set_text("Electronice");
        });
        assert_eq!(seen, vec!["Electronics", "Accessories"]);
        let out = doc.to_xml_string().unwrap();
        assert!(out.contains("<category>Electronice</category>"));
        assert!(out.contains("sku=\"A-1\""));
        assert!(!out.contains("Accessories"));
    }

    #[test]
    fn nth_element_orders_match() {
        let xml = "<r><product id=\"1\"/><wrap><product id=\"2\"/></wrap><product id=\"3\"/></r>";
        let mut doc = XmlDocument::parse_str(xml).unwrap();
        for n in 0..3 {
            let id = doc.nth_element("product", n).unwrap().attributes[0].1.clone();
            let id_mut = doc.nth_element_mut("product", n).unwrap().attributes[0].1.clone();
            assert_eq!(id, id_mut);
            assert_eq!(id, (n + 1).to_string());
        }
        assert!(doc.nth_element("product", 3).is_none());
    }

    #[test]
    fn count_includes_nested_elements() {
        let xml = "<r><product><product/></product></r>";
        let doc = XmlDocument::parse_str(xml).unwrap();
        assert_eq!(doc.count_elements("product"), 2);
    }

    #[test]
    fn parse_failure_is_soft_error() {
        assert!(matches!(
            XmlDocument::parse_str("<a><b></a>"),
            Err(CoreError::XmlParse(_))
        ));
    }

    #[test]
    fn missing_file_is_file_read_error() {
        let err = XmlDocument::load(Path::new("/nonexistent/input.xml")).unwrap_err();
        assert!(matches!(err, CoreError::FileRead { .. }));
    }

    #[test]
    fn empty_element_round_trips() {
        let doc = XmlDocument::parse_str("<r><product/></r>").unwrap();
        assert_eq!(doc.to_xml_string().unwrap(), "<r><product/></r>");
    }
}
