//! Assembly and rendering of the decoded state document.

use log::debug;

use crate::qsettings::types::models::{Diagnostic, Item, StateDocument};

/// Accumulates decoded items in input order.
///
/// Items are only appended once fully decoded, so a document never holds a
/// partially read record.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    marker: i32,
    version: i32,
    items: Vec<Item>,
    truncated: bool,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&mut self, marker: i32, version: i32) {
        self.marker = marker;
        self.version = version;
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Marks the document as stopped before the input was fully consumed.
    pub fn truncate(&mut self) {
        self.truncated = true;
    }

    pub fn finish(self, diagnostics: Vec<Diagnostic>) -> StateDocument {
        debug!(
            "Document finished: {} items, truncated={}, {} diagnostics",
            self.items.len(),
            self.truncated,
            diagnostics.len()
        );
        StateDocument {
            marker: self.marker,
            version: self.version,
            items: self.items,
            truncated: self.truncated,
            diagnostics,
        }
    }
}

impl StateDocument {
    /// Renders the document as indented JSON with object keys sorted.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        // `Value` maps iterate in key order.
        let value = serde_json::to_value(self)?;
        serde_json::to_string_pretty(&value)
    }
}
