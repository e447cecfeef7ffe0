//! Window-state format parsing layer.
//!
//! This module provides the decoders that turn the raw blob written by the
//! toolkit's "save window state" call into the typed tree of
//! [`models`](crate::qsettings::types::models).
//!
//! # Module Organization
//!
//! - [`state`]: Validates the header and dispatches top-level items
//! - [`dock`]: Decodes dock areas and the recursive dock node tree
//! - [`toolbar`]: Decodes toolbar areas, including packed geometry
//!
//! # Architecture
//!
//! ```text
//! Blob Structure:
//! ┌─────────────────────┐
//! │ marker, version     │ ← state::decode()
//! ├─────────────────────┤
//! │ tag │ item payload  │ ← dock::decode_dock_area()
//! │ tag │ item payload  │   dock::decode_dock_node()
//! │ ... │               │   toolbar::decode_toolbar_area()
//! └─────────────────────┘
//! ```

pub mod dock;
pub mod state;
pub mod toolbar;

use log::warn;

use crate::qsettings::cursor::ByteCursor;
use crate::qsettings::types::models::Diagnostic;
use crate::qsettings::types::options::DecodeOptions;

/// Decoding context threaded through every decoder.
///
/// Decoders return the subtrees they build; only the cursor and the
/// diagnostics sink are shared.
pub struct StateReader<'a> {
    pub cursor: ByteCursor<'a>,
    pub options: DecodeOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> StateReader<'a> {
    pub fn new(data: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Records a diagnostic anchored at `offset`.
    pub fn note_at(&mut self, offset: usize, message: impl Into<String>) {
        let message = message.into();
        warn!("offset {:#x}: {}", offset, message);
        self.diagnostics.push(Diagnostic { offset, message });
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
