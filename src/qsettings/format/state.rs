//! Header validation and top-level item dispatch.
//!
//! # Blob Structure
//! ```text
//! [i32] marker (0xFF)
//! [i32] version
//! repeated until end of input:
//!   [u8]  item tag
//!         0xFD dock area, 0xF9 floating tab,
//!         0xFE toolbar area, 0xFC extended toolbar area
//!   [...] item payload
//! ```
//!
//! Decoding is best-effort: a fault inside an item drops that item, keeps
//! everything decoded before it, and ends the pass with a diagnostic.

use log::{debug, info};

use super::{StateReader, dock, toolbar};
use crate::qsettings::document::DocumentBuilder;
use crate::qsettings::types::error::Result;
use crate::qsettings::types::models::{Item, ItemMarker, StateDocument, VERSION_MARKER};
use crate::qsettings::types::options::DecodeOptions;

/// Decodes a complete state blob.
///
/// Never fails: structural problems end the pass early and are reported
/// through [`StateDocument::diagnostics`] and [`StateDocument::truncated`].
pub fn decode(data: &[u8], options: DecodeOptions) -> StateDocument {
    info!("Decoding window state: {} bytes", data.len());
    let mut reader = StateReader::new(data, options);
    let mut builder = DocumentBuilder::new();

    let marker = reader.cursor.read_i32().unwrap_or_default();
    let version = reader.cursor.read_i32().unwrap_or_default();
    builder.header(marker, version);

    if let Some(error) = reader.cursor.fault().cloned() {
        reader.note_at(error.offset(), format!("incomplete header: {}", error));
        builder.truncate();
        return builder.finish(reader.into_diagnostics());
    }
    if marker != VERSION_MARKER {
        reader.note_at(
            0,
            format!(
                "unexpected header marker {:#x}, expected {:#x}",
                marker, VERSION_MARKER
            ),
        );
        builder.truncate();
        return builder.finish(reader.into_diagnostics());
    }
    debug!("Header accepted: version={}", version);

    while !reader.cursor.is_faulted() && !reader.cursor.is_exhausted() {
        let offset = reader.cursor.position();
        let Ok(tag) = reader.cursor.read_u8() else {
            break;
        };

        let item_marker = match ItemMarker::try_from(tag) {
            Ok(item_marker) => item_marker,
            Err(value) => {
                reader.note_at(offset, format!("unknown item marker {:#04x}, stopping", value));
                builder.truncate();
                break;
            }
        };

        match decode_item(&mut reader, item_marker) {
            Ok(item) => builder.push(item),
            Err(error) => {
                reader.note_at(
                    error.offset(),
                    format!(
                        "{:?} item at {:#x} abandoned: {}",
                        item_marker, offset, error
                    ),
                );
                builder.truncate();
                break;
            }
        }
    }

    builder.finish(reader.into_diagnostics())
}

fn decode_item(reader: &mut StateReader<'_>, item_marker: ItemMarker) -> Result<Item> {
    match item_marker {
        ItemMarker::DockArea => dock::decode_dock_area(reader).map(Item::DockArea),
        ItemMarker::FloatingTab => {
            let geometry = reader.cursor.read_rect()?;
            let tree = dock::decode_dock_node(reader, 1)?;
            Ok(Item::FloatingTab { geometry, tree })
        }
        ItemMarker::ToolBarArea => {
            toolbar::decode_toolbar_area(reader, false).map(Item::ToolBarArea)
        }
        ItemMarker::ToolBarAreaEx => {
            toolbar::decode_toolbar_area(reader, true).map(Item::ToolBarArea)
        }
    }
}
