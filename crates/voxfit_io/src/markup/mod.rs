//! Hierarchical markup documents.
//!
//! [`MarkupTree`] is the capability the writers and readers depend on: a
//! cursor over a tree of named sections and leaves. [`XmlTree`] is the
//! in-memory implementation used for files.

mod xml;

#[cfg(test)]
pub(crate) mod testing;

pub use xml::XmlTree;

use thiserror::Error;

/// Cursor-based tree builder and reader.
///
/// Writing and reading share one cursor: `down_level` and `enter_section`
/// both move into a child, `up_level` moves back out.
pub trait MarkupTree {
    /// Appends a new section under the cursor and moves into it.
    fn down_level(&mut self, name: &str);

    /// Moves the cursor to the parent section.
    fn up_level(&mut self);

    /// Sets an attribute on the section under the cursor.
    fn set_attribute(&mut self, name: &str, value: &str);

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Appends a leaf holding `text` under the cursor.
    fn write_leaf(&mut self, name: &str, text: &str);

    /// Number of children called `name` under the cursor.
    fn section_count(&self, name: &str) -> usize;

    /// Moves into the `index`-th child called `name`. Returns `false` and
    /// leaves the cursor in place when there is no such child.
    fn enter_section(&mut self, name: &str, index: usize) -> bool;

    /// Text of the first leaf called `name` under the cursor.
    fn leaf_text(&self, name: &str) -> Option<&str>;
}

/// Scalar types that can be stored as leaf text.
pub trait MarkupValue: Sized {
    fn to_markup(&self) -> String;
    fn from_markup(text: &str) -> Option<Self>;
}

impl MarkupValue for f64 {
    fn to_markup(&self) -> String {
        self.to_string()
    }

    fn from_markup(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }
}

impl MarkupValue for i32 {
    fn to_markup(&self) -> String {
        self.to_string()
    }

    fn from_markup(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }
}

impl MarkupValue for i64 {
    fn to_markup(&self) -> String {
        self.to_string()
    }

    fn from_markup(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }
}

impl MarkupValue for bool {
    fn to_markup(&self) -> String {
        let text = if *self { "1" } else { "0" };
        text.to_string()
    }

    fn from_markup(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(true),
            "0" => Some(false),
            t if t.eq_ignore_ascii_case("true") => Some(true),
            t if t.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }
}

impl MarkupValue for String {
    fn to_markup(&self) -> String {
        self.clone()
    }

    fn from_markup(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

/// Why a leaf could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeafError {
    #[error("missing")]
    Missing,
    /// The leaf exists but its text does not parse as the requested type.
    #[error("unparseable value {0:?}")]
    Malformed(String),
}

/// Typed and scoped helpers over any [`MarkupTree`].
pub trait MarkupTreeExt: MarkupTree {
    fn element<V: MarkupValue>(&mut self, name: &str, value: &V) {
        self.write_leaf(name, &value.to_markup());
    }

    fn load_element<V: MarkupValue>(&self, name: &str) -> Result<V, LeafError> {
        let text = self.leaf_text(name).ok_or(LeafError::Missing)?;
        V::from_markup(text).ok_or_else(|| LeafError::Malformed(text.to_string()))
    }

    /// Moves into the first child called `name`.
    fn find_section(&mut self, name: &str) -> bool {
        self.enter_section(name, 0)
    }

    /// Writes a new section; the cursor returns to the parent after `f`.
    fn section<F, R>(&mut self, name: &str, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.down_level(name);
        let out = f(self);
        self.up_level();
        out
    }

    /// Runs `f` inside the `index`-th existing child called `name`, if any.
    fn within<F, R>(&mut self, name: &str, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut Self) -> R,
    {
        if !self.enter_section(name, index) {
            return None;
        }
        let out = f(self);
        self.up_level();
        Some(out)
    }
}

impl<T: MarkupTree + ?Sized> MarkupTreeExt for T {}
