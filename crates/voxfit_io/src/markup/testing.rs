//! Test double that logs every tree operation.

use super::{MarkupTree, XmlTree};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Down(String),
    Up,
    Attr(String, String),
    Leaf(String, String),
}

/// Delegates to an [`XmlTree`] and records the write-side calls.
#[derive(Debug, Default)]
pub(crate) struct RecordingTree {
    pub tree: XmlTree,
    pub ops: Vec<Op>,
}

impl RecordingTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every `Down` is closed by an `Up` and depth never goes negative.
    pub fn balanced(&self) -> bool {
        let mut depth: i64 = 0;
        for op in &self.ops {
            match op {
                Op::Down(_) => depth += 1,
                Op::Up => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }

    pub fn leaves_named(&self, name: &str) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Leaf(n, text) if n == name => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn downs_named(&self, name: &str) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Down(n) if n == name))
            .count()
    }
}

impl MarkupTree for RecordingTree {
    fn down_level(&mut self, name: &str) {
        self.ops.push(Op::Down(name.to_string()));
        self.tree.down_level(name);
    }

    fn up_level(&mut self) {
        self.ops.push(Op::Up);
        self.tree.up_level();
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.ops.push(Op::Attr(name.to_string(), value.to_string()));
        self.tree.set_attribute(name, value);
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.tree.attribute(name)
    }

    fn write_leaf(&mut self, name: &str, text: &str) {
        self.ops.push(Op::Leaf(name.to_string(), text.to_string()));
        self.tree.write_leaf(name, text);
    }

    fn section_count(&self, name: &str) -> usize {
        self.tree.section_count(name)
    }

    fn enter_section(&mut self, name: &str, index: usize) -> bool {
        self.tree.enter_section(name, index)
    }

    fn leaf_text(&self, name: &str) -> Option<&str> {
        self.tree.leaf_text(name)
    }
}
