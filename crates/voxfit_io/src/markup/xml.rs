use super::MarkupTree;
use crate::error::{IoError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

const ROOT: usize = 0;

#[derive(Debug, Clone, Default, PartialEq)]
struct Node {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<usize>,
}

/// In-memory XML document.
///
/// Nodes live in an arena; index 0 is an unnamed document node whose
/// children are the top-level elements.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlTree {
    nodes: Vec<Node>,
    cursor: Vec<usize>,
}

impl Default for XmlTree {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlTree {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            cursor: vec![ROOT],
        }
    }

    /// Sections between the cursor and the document node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.cursor.len() - 1
    }

    /// Moves the cursor back to the document node.
    pub fn rewind(&mut self) {
        self.cursor.truncate(1);
    }

    fn current(&self) -> usize {
        self.cursor.last().copied().unwrap_or(ROOT)
    }

    fn push_child(&mut self, node: Node) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(node);
        let parent = self.current();
        self.nodes[parent].children.push(idx);
        idx
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.nodes[self.current()]
            .children
            .iter()
            .copied()
            .filter(move |&idx| self.nodes[idx].name == name)
    }

    /// Serializes the whole document, independent of the cursor.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", None, None)))
            .map_err(|e| write_failed("?xml", e))?;
        for &child in &self.nodes[ROOT].children {
            self.write_node(&mut writer, child)?;
        }
        String::from_utf8(writer.into_inner())
            .map_err(|e| IoError::markup(format!("XML output is not UTF-8: {e}")))
    }

    fn write_node<W: Write>(&self, writer: &mut Writer<W>, idx: usize) -> Result<()> {
        let node = &self.nodes[idx];
        let mut start = BytesStart::new(node.name.as_str());
        for (key, value) in &node.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if node.children.is_empty() && node.text.is_none() {
            return writer
                .write_event(Event::Empty(start))
                .map_err(|e| write_failed(&node.name, e));
        }

        writer
            .write_event(Event::Start(start))
            .map_err(|e| write_failed(&node.name, e))?;
        if let Some(text) = &node.text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| write_failed(&node.name, e))?;
        }
        for &child in &node.children {
            self.write_node(writer, child)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(node.name.as_str())))
            .map_err(|e| write_failed(&node.name, e))
    }

    /// Parses a document. The cursor starts at the document node.
    pub fn parse(xml: &str) -> Result<Self> {
        if xml.trim().is_empty() {
            return Err(IoError::validation("Empty markup document"));
        }

        // Leaf text is kept byte for byte; layout whitespace between child
        // elements is dropped when each element closes.
        let mut reader = Reader::from_str(xml);
        let mut tree = Self::new();

        loop {
            let event = reader
                .read_event()
                .map_err(|e| IoError::markup(format!("XML parse failed: {e}")))?;
            match event {
                Event::Start(start) => {
                    let node = Self::node_from(&start)?;
                    let idx = tree.push_child(node);
                    tree.cursor.push(idx);
                }
                Event::Empty(start) => {
                    let node = Self::node_from(&start)?;
                    tree.push_child(node);
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| IoError::markup(format!("Bad text content: {e}")))?;
                    tree.append_text(&text);
                }
                Event::CData(data) => {
                    let text = String::from_utf8_lossy(&data).into_owned();
                    tree.append_text(&text);
                }
                Event::End(_) => {
                    tree.drop_layout_text(tree.current());
                    if tree.cursor.len() > 1 {
                        tree.cursor.pop();
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if tree.depth() != 0 {
            return Err(IoError::markup(format!(
                "Unclosed element <{}>",
                tree.nodes[tree.current()].name
            )));
        }
        tree.drop_layout_text(ROOT);
        Ok(tree)
    }

    fn node_from(start: &BytesStart<'_>) -> Result<Node> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| IoError::markup(format!("Bad attribute on <{name}>: {e}")))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| IoError::markup(format!("Bad attribute on <{name}>: {e}")))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Node {
            name,
            attributes,
            ..Node::default()
        })
    }

    fn drop_layout_text(&mut self, idx: usize) {
        let node = &mut self.nodes[idx];
        let blank = node.text.as_deref().is_some_and(|t| t.trim().is_empty());
        if blank && !node.children.is_empty() {
            node.text = None;
        }
    }

    fn append_text(&mut self, text: &str) {
        let idx = self.current();
        self.nodes[idx]
            .text
            .get_or_insert_with(String::new)
            .push_str(text);
    }
}

fn write_failed<E: std::fmt::Display>(name: &str, err: E) -> IoError {
    IoError::markup(format!("XML write failed for <{name}>: {err}"))
}

impl MarkupTree for XmlTree {
    fn down_level(&mut self, name: &str) {
        let idx = self.push_child(Node {
            name: name.to_string(),
            ..Node::default()
        });
        self.cursor.push(idx);
    }

    fn up_level(&mut self) {
        if self.cursor.len() > 1 {
            self.cursor.pop();
        } else {
            tracing::warn!("up_level at document root ignored");
        }
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        let idx = self.current();
        let attributes = &mut self.nodes[idx].attributes;
        match attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.nodes[self.current()]
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn write_leaf(&mut self, name: &str, text: &str) {
        self.push_child(Node {
            name: name.to_string(),
            text: Some(text.to_string()),
            ..Node::default()
        });
    }

    fn section_count(&self, name: &str) -> usize {
        self.children_named(name).count()
    }

    fn enter_section(&mut self, name: &str, index: usize) -> bool {
        let found = self.children_named(name).nth(index);
        match found {
            Some(idx) => {
                self.cursor.push(idx);
                true
            }
            None => false,
        }
    }

    fn leaf_text(&self, name: &str) -> Option<&str> {
        let idx = self.children_named(name).next()?;
        let node = &self.nodes[idx];
        match &node.text {
            Some(text) => Some(text.as_str()),
            None if node.children.is_empty() => Some(""),
            None => None,
        }
    }
}
