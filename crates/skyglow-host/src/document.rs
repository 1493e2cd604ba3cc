//! Document root manipulation.
//!
//! The theme only touches the root element: one class list and inline CSS
//! custom properties. [`MemoryDocument`] keeps that state in memory,
//! [`ScriptDocument`] records it as JavaScript for a webview to evaluate.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use crate::theme_bridge::{
    class_toggle_js, remove_property_js, set_property_js, wrap_statements, CssValueKind,
};

/// Mutations on the document's root element.
pub trait Document: Send + Sync {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_property(&self, name: &str, value: &str);
    fn remove_property(&self, name: &str);

    fn toggle_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

// =============================================================================
// MEMORY DOCUMENT
// =============================================================================

/// Classes and inline custom properties of a root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    pub classes: BTreeSet<String>,
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    root: Mutex<RootElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> RootElement {
        match self.root.lock() {
            Ok(root) => root.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.snapshot().classes.contains(class)
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.snapshot().properties.get(name).cloned()
    }

    fn with_root(&self, f: impl FnOnce(&mut RootElement)) {
        if let Ok(mut root) = self.root.lock() {
            f(&mut root);
        }
    }
}

impl Document for MemoryDocument {
    fn add_class(&self, class: &str) {
        self.with_root(|root| {
            root.classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, class: &str) {
        self.with_root(|root| {
            root.classes.remove(class);
        });
    }

    fn set_property(&self, name: &str, value: &str) {
        self.with_root(|root| {
            root.properties.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_property(&self, name: &str) {
        self.with_root(|root| {
            root.properties.remove(name);
        });
    }
}

// =============================================================================
// SCRIPT DOCUMENT
// =============================================================================

/// Records root-element mutations as sanitized JavaScript statements.
///
/// Unsafe class names, property names or values are dropped with a warning.
#[derive(Debug, Default)]
pub struct ScriptDocument {
    statements: Mutex<Vec<String>>,
}

impl ScriptDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of statements recorded since the last [`ScriptDocument::take_script`].
    pub fn pending(&self) -> usize {
        self.statements.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Drain the recorded statements into one self-contained script.
    pub fn take_script(&self) -> String {
        let statements = match self.statements.lock() {
            Ok(mut statements) => std::mem::take(&mut *statements),
            Err(_) => Vec::new(),
        };
        wrap_statements(&statements)
    }

    fn push(&self, statement: Option<String>) {
        if let (Some(statement), Ok(mut statements)) = (statement, self.statements.lock()) {
            statements.push(statement);
        }
    }
}

impl Document for ScriptDocument {
    fn add_class(&self, class: &str) {
        self.push(class_toggle_js(class, true));
    }

    fn remove_class(&self, class: &str) {
        self.push(class_toggle_js(class, false));
    }

    fn set_property(&self, name: &str, value: &str) {
        self.push(set_property_js(name, value, CssValueKind::of(value)));
    }

    fn remove_property(&self, name: &str) {
        self.push(remove_property_js(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_document_classes() {
        let doc = MemoryDocument::new();
        doc.add_class("dark");
        doc.add_class("dark");
        assert!(doc.has_class("dark"));
        assert_eq!(doc.snapshot().classes.len(), 1);

        doc.remove_class("dark");
        assert!(!doc.has_class("dark"));
        // Removing an absent class is a no-op.
        doc.remove_class("dark");
    }

    #[test]
    fn memory_document_properties() {
        let doc = MemoryDocument::new();
        doc.set_property("--background", "#16213e");
        assert_eq!(doc.property("--background").as_deref(), Some("#16213e"));

        doc.set_property("--background", "#000000");
        assert_eq!(doc.property("--background").as_deref(), Some("#000000"));

        doc.remove_property("--background");
        assert_eq!(doc.property("--background"), None);
    }

    #[test]
    fn toggle_class_adds_and_removes() {
        let doc = MemoryDocument::new();
        doc.toggle_class("dark", true);
        assert!(doc.has_class("dark"));
        doc.toggle_class("dark", false);
        assert!(!doc.has_class("dark"));
    }

    #[test]
    fn script_document_records_in_order() {
        let doc = ScriptDocument::new();
        doc.add_class("dark");
        doc.set_property("--background", "#16213e");
        doc.remove_property("--background");
        assert_eq!(doc.pending(), 3);

        let js = doc.take_script();
        let add = js.find("root.classList.add('dark');").unwrap();
        let set = js
            .find("root.style.setProperty('--background', '#16213e');")
            .unwrap();
        let remove = js.find("root.style.removeProperty('--background');").unwrap();
        assert!(add < set && set < remove);

        assert_eq!(doc.pending(), 0);
    }

    #[test]
    fn script_document_drops_unsafe_values() {
        let doc = ScriptDocument::new();
        doc.set_property("--background", "#000'); alert(1); ('");
        doc.add_class("dark\"");
        assert_eq!(doc.pending(), 0);
        assert!(!doc.take_script().contains("alert"));
    }

    #[test]
    fn script_document_accepts_gradients() {
        let doc = ScriptDocument::new();
        doc.set_property(
            "--sky-gradient",
            "linear-gradient(180deg, #1a1a2e 0%, #0f3460 100%)",
        );
        assert_eq!(doc.pending(), 1);
    }
}
