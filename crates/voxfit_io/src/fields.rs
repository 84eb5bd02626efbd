//! Field descriptors for configuration loads.
//!
//! Each optional field is described by its leaf name and the value it takes
//! when the leaf is absent or unparseable. Fields resolve independently, so a
//! bad leaf never affects its neighbours.

use crate::markup::{LeafError, MarkupTree, MarkupTreeExt, MarkupValue};
use thiserror::Error;

/// A named leaf with a fallback value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef<V> {
    pub name: &'static str,
    pub default: V,
}

/// Outcome of resolving one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<V> {
    pub value: V,
    pub issue: Option<FieldIssue>,
}

impl<V> FieldDef<V> {
    pub const fn new(name: &'static str, default: V) -> Self {
        Self { name, default }
    }
}

impl<V: MarkupValue + Clone> FieldDef<V> {
    /// Reads the leaf under the cursor, falling back to the default.
    pub fn resolve<T: MarkupTree + ?Sized>(&self, doc: &T) -> Resolved<V> {
        match doc.load_element::<V>(self.name) {
            Ok(value) => Resolved { value, issue: None },
            Err(LeafError::Missing) => {
                tracing::debug!(field = self.name, "Field absent, using default");
                Resolved {
                    value: self.default.clone(),
                    issue: Some(FieldIssue::Missing { field: self.name }),
                }
            }
            Err(LeafError::Malformed(text)) => {
                tracing::warn!(field = self.name, text = %text, "Unparseable field, using default");
                Resolved {
                    value: self.default.clone(),
                    issue: Some(FieldIssue::Malformed {
                        field: self.name,
                        text,
                    }),
                }
            }
        }
    }
}

/// Why a field ended up at its default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldIssue {
    #[error("{field} missing")]
    Missing { field: &'static str },
    #[error("{field} has unparseable value {text:?}")]
    Malformed { field: &'static str, text: String },
    /// An integer tag outside the enumeration it names.
    #[error("{field} tag {tag} out of range")]
    OutOfRange { field: &'static str, tag: i32 },
}

impl FieldIssue {
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            FieldIssue::Missing { field }
            | FieldIssue::Malformed { field, .. }
            | FieldIssue::OutOfRange { field, .. } => *field,
        }
    }

    /// Missing leaves are routine; the others point at a damaged document.
    #[must_use]
    pub fn is_diagnostic(&self) -> bool {
        !matches!(self, FieldIssue::Missing { .. })
    }
}

/// Report of a configuration load. Loads always succeed; this only says
/// which fields fell back to defaults and why.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadOutcome {
    /// Whether the section existed at all.
    pub section_found: bool,
    pub issues: Vec<FieldIssue>,
}

impl LoadOutcome {
    #[must_use]
    pub fn section_absent() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn section_present() -> Self {
        Self {
            section_found: true,
            issues: Vec::new(),
        }
    }

    /// Unwraps a resolved field, keeping its issue.
    pub fn take<V>(&mut self, resolved: Resolved<V>) -> V {
        if let Some(issue) = resolved.issue {
            self.issues.push(issue);
        }
        resolved.value
    }

    pub fn push(&mut self, issue: FieldIssue) {
        self.issues.push(issue);
    }

    /// Names of every field that was defaulted.
    #[must_use]
    pub fn defaulted(&self) -> Vec<&'static str> {
        self.issues.iter().map(FieldIssue::field).collect()
    }

    /// Human-readable summary of damaged fields, if there were any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let problems: Vec<String> = self
            .issues
            .iter()
            .filter(|issue| issue.is_diagnostic())
            .map(ToString::to_string)
            .collect();
        if problems.is_empty() {
            None
        } else {
            Some(format!("Defaulted fields: {}", problems.join("; ")))
        }
    }
}
