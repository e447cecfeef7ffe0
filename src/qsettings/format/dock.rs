//! Dock area and dock node tree decoding.
//!
//! # Dock Area Structure
//! ```text
//! [i32]  dock count
//! per dock:
//!   [i32]      position
//!   [i32 i32]  size
//!   [node]     dock tree
//! [i32 i32]  central widget size
//! [i32 x 4]  corner owners
//! ```
//!
//! # Node Structure
//! ```text
//! [u8] 0xFA  Tab:      [i32] index, [u8] orientation, children
//! [u8] 0xFC  Sequence: [i32 x 4] position/size/extra, children
//! children:  [i32] count, then per child:
//!   [u8] 0xFB  Widget:   [text] name, [u8] flags, [i32 x 4] geometry
//!   [u8] 0xFC  Sequence: [i32 x 4] position/size/extra, [node] subtree
//! ```

use log::{debug, trace};

use super::StateReader;
use crate::qsettings::types::error::{DecodeError, Result};
use crate::qsettings::types::models::{
    ChildMarker, Corner, Dock, DockArea, DockChild, DockNode, NodeMarker, Orientation, Rect,
    WidgetLayout,
};

/// Widget flag bit: the widget is shown.
const WIDGET_VISIBLE: u8 = 0x01;
/// Widget flag bit: the widget floats outside its dock area.
const WIDGET_FLOATING: u8 = 0x02;

/// Decodes one dock area group.
///
/// Any fault aborts the whole area; the caller discards it.
pub fn decode_dock_area(reader: &mut StateReader<'_>) -> Result<DockArea> {
    let count = reader.cursor.read_i32()?;
    debug!("Decoding dock area: {} docks", count);

    let mut docks = Vec::new();
    for _ in 0..count.max(0) {
        let position = reader.cursor.read_i32()?;
        let size = reader.cursor.read_size()?;
        let tree = decode_dock_node(reader, 1)?;
        docks.push(Dock {
            position,
            size,
            tree,
        });
    }

    let central_size = reader.cursor.read_size()?;
    let mut corners = [Corner::Unknown(0); 4];
    for corner in corners.iter_mut() {
        *corner = Corner::from(reader.cursor.read_i32()?);
    }

    Ok(DockArea {
        docks,
        central_size,
        corners,
    })
}

/// Decodes one dock node and everything below it.
///
/// `depth` counts nesting from 1 at the top of a dock tree. An unrecognized
/// node tag yields [`DockNode::Unrecognized`] and a diagnostic instead of a
/// fault.
pub fn decode_dock_node(reader: &mut StateReader<'_>, depth: usize) -> Result<DockNode> {
    let offset = reader.cursor.position();
    if depth > reader.options.max_depth {
        let limit = reader.options.max_depth;
        return Err(reader.cursor.fail(DecodeError::DepthExceeded { offset, limit }));
    }

    let tag = reader.cursor.read_u8()?;
    match NodeMarker::try_from(tag) {
        Ok(NodeMarker::Tab) => {
            let index = reader.cursor.read_i32()?;
            let orientation = Orientation::from(reader.cursor.read_u8()?);
            if let Orientation::Unrecognized(value) = orientation {
                debug!("Tab at {:#x} has unrecognized orientation {}", offset, value);
            }
            let children = decode_children(reader, depth)?;
            Ok(DockNode::Tab {
                index,
                orientation,
                children,
            })
        }
        Ok(NodeMarker::Sequence) => {
            let [position, size, extra1, extra2] = read_sequence_header(reader)?;
            let children = decode_children(reader, depth)?;
            Ok(DockNode::Sequence {
                position,
                size,
                extra1,
                extra2,
                children,
            })
        }
        Err(tag) => {
            reader.note_at(offset, format!("unrecognized dock node marker {:#04x}", tag));
            Ok(DockNode::Unrecognized { tag })
        }
    }
}

fn decode_children(reader: &mut StateReader<'_>, depth: usize) -> Result<Vec<DockChild>> {
    let count = reader.cursor.read_i32()?;
    trace!("Decoding {} dock children at depth {}", count, depth);

    let mut children = Vec::new();
    for _ in 0..count.max(0) {
        let offset = reader.cursor.position();
        let tag = reader.cursor.read_u8()?;
        let child = match ChildMarker::try_from(tag) {
            Ok(ChildMarker::Widget) => decode_widget(reader)?,
            Ok(ChildMarker::Sequence) => {
                let [position, size, extra1, extra2] = read_sequence_header(reader)?;
                let subtree = decode_dock_node(reader, depth + 1)?;
                DockChild::NestedSequence {
                    position,
                    size,
                    extra1,
                    extra2,
                    subtree,
                }
            }
            // The child's length is unknown, so the siblings cannot be found.
            Err(tag) => {
                return Err(reader.cursor.fail(DecodeError::UnknownChildTag { offset, tag }));
            }
        };
        children.push(child);
    }
    Ok(children)
}

fn decode_widget(reader: &mut StateReader<'_>) -> Result<DockChild> {
    let name = reader.cursor.read_text()?;
    let flags = reader.cursor.read_u8()?;
    let Rect { x, y, w, h } = reader.cursor.read_rect()?;
    let visible = flags & WIDGET_VISIBLE != 0;

    let layout = if name.is_empty() {
        WidgetLayout::Placeholder {
            d1: x,
            d2: y,
            d3: w,
            d4: h,
        }
    } else if flags & WIDGET_FLOATING != 0 {
        WidgetLayout::Floating {
            x,
            y,
            w,
            h,
            visible,
        }
    } else {
        WidgetLayout::Docked {
            pos: x,
            size: y,
            extra1: w,
            extra2: h,
            visible,
        }
    };
    trace!("Dock widget '{}' flags={:#04x}", name, flags);

    Ok(DockChild::Widget {
        name,
        flags,
        layout,
    })
}

fn read_sequence_header(reader: &mut StateReader<'_>) -> Result<[i32; 4]> {
    Ok([
        reader.cursor.read_i32()?,
        reader.cursor.read_i32()?,
        reader.cursor.read_i32()?,
        reader.cursor.read_i32()?,
    ])
}
