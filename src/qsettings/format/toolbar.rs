//! Toolbar area decoding.
//!
//! # Structure
//! ```text
//! [i32]  line count
//! per line:
//!   [i32]  position (0..=3: left, right, top, bottom)
//!   [i32]  item count
//!   per item:
//!     [text] name
//!     [u8]   shown
//!     [i32]  position
//!     [i32]  size
//!     [i32]  geom0
//!     [i32]  geom1   (extended variant only)
//! ```

use log::{debug, trace};

use super::StateReader;
use crate::qsettings::types::error::{DecodeError, Result};
use crate::qsettings::types::models::{Edge, Rect, ToolBarArea, ToolBarItem, ToolBarLine};

/// Bias added to packed x/y coordinates so negative values fit 16 bits.
const COORD_BIAS: i32 = 0x7FFF;

/// Decodes one toolbar area group.
///
/// `extended` selects the revision that carries packed floating geometry.
/// A line position outside `0..=3` aborts the whole area.
pub fn decode_toolbar_area(reader: &mut StateReader<'_>, extended: bool) -> Result<ToolBarArea> {
    let line_count = reader.cursor.read_i32()?;
    debug!(
        "Decoding toolbar area: {} lines (extended={})",
        line_count, extended
    );

    let mut lines = Vec::new();
    for _ in 0..line_count.max(0) {
        let offset = reader.cursor.position();
        let position = reader.cursor.read_i32()?;
        let edge = Edge::try_from(position)
            .map_err(|position| reader.cursor.fail(DecodeError::LinePosition { offset, position }))?;

        let item_count = reader.cursor.read_i32()?;
        let mut items = Vec::new();
        for _ in 0..item_count.max(0) {
            items.push(decode_item(reader, extended)?);
        }

        lines.push(ToolBarLine {
            // `Edge::try_from` accepted it, so it is 0..=3.
            position: position as u8,
            edge,
            items,
        });
    }

    Ok(ToolBarArea { lines })
}

fn decode_item(reader: &mut StateReader<'_>, extended: bool) -> Result<ToolBarItem> {
    let name = reader.cursor.read_text()?;
    let shown = reader.cursor.read_u8()?;
    let position = reader.cursor.read_i32()?;
    let size = reader.cursor.read_i32()?;
    let geom0 = reader.cursor.read_i32()?;

    let (rect, floating) = if extended {
        let geom1 = reader.cursor.read_i32()?;
        let rect = unpack_rect(geom0, geom1);
        (rect, rect.is_some())
    } else {
        (None, false)
    };
    trace!("Toolbar item '{}' shown={} floating={}", name, shown, floating);

    Ok(ToolBarItem {
        name,
        shown,
        position,
        size,
        rect,
        floating,
    })
}

/// Unpacks the floating rectangle of an extended toolbar item.
///
/// Bit 0 of `geom0` is the floating flag. Above it, `geom0` holds the
/// biased x in 16 bits then the width; `geom1` holds the biased y in its
/// low 16 bits then the height. Returns `None` when the flag is clear.
pub fn unpack_rect(geom0: i32, geom1: i32) -> Option<Rect> {
    if geom0 & 1 == 0 {
        return None;
    }
    let packed_x = (geom0 as u32) >> 1;
    let packed_y = geom1 as u32;

    Some(Rect {
        x: (packed_x & 0xFFFF) as i32 - COORD_BIAS,
        y: (packed_y & 0xFFFF) as i32 - COORD_BIAS,
        w: ((packed_x >> 16) & 0xFFFF) as i32,
        h: ((packed_y >> 16) & 0xFFFF) as i32,
    })
}
