//! Core data structures for decoded window-state documents.
//!
//! This module defines:
//! - The marker enumerations for each tag namespace of the binary format
//! - The decoded document tree (items, dock nodes, toolbar lines)
//! - Small geometry value types shared by both decoders
//!
//! Every type here is a plain value. Decoders build them bottom-up and
//! the finished [`StateDocument`] is never mutated afterwards.

use serde::Serialize;

/// Header marker every well-formed state blob starts with.
pub const VERSION_MARKER: i32 = 0xFF;

/// Tag byte introducing a top-level item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemMarker {
    DockArea,
    FloatingTab,
    ToolBarArea,
    ToolBarAreaEx,
}

impl TryFrom<u8> for ItemMarker {
    type Error = u8;
    fn try_from(value: u8) -> std::result::Result<Self, u8> {
        match value {
            0xFD => Ok(Self::DockArea),
            0xF9 => Ok(Self::FloatingTab),
            0xFE => Ok(Self::ToolBarArea),
            0xFC => Ok(Self::ToolBarAreaEx),
            other => Err(other),
        }
    }
}

/// Tag byte introducing a dock node. Independent of [`ItemMarker`] even
/// where the numeric values coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMarker {
    Tab,
    Sequence,
}

impl TryFrom<u8> for NodeMarker {
    type Error = u8;
    fn try_from(value: u8) -> std::result::Result<Self, u8> {
        match value {
            0xFA => Ok(Self::Tab),
            0xFC => Ok(Self::Sequence),
            other => Err(other),
        }
    }
}

/// Tag byte introducing one child inside a tab or sequence node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildMarker {
    Widget,
    Sequence,
}

impl TryFrom<u8> for ChildMarker {
    type Error = u8;
    fn try_from(value: u8) -> std::result::Result<Self, u8> {
        match value {
            0xFB => Ok(Self::Widget),
            0xFC => Ok(Self::Sequence),
            other => Err(other),
        }
    }
}

/// A decoded window-state blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateDocument {
    pub marker: i32,
    pub version: i32,
    pub items: Vec<Item>,
    /// Decoding stopped early; unread or partially read bytes remain.
    pub truncated: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// A problem noticed during decoding, anchored at a byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub offset: usize,
    pub message: String,
}

/// One top-level record of the state blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    DockArea(DockArea),
    FloatingTab { geometry: Rect, tree: DockNode },
    ToolBarArea(ToolBarArea),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DockArea {
    pub docks: Vec<Dock>,
    pub central_size: Size,
    pub corners: [Corner; 4],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dock {
    pub position: i32,
    pub size: Size,
    pub tree: DockNode,
}

/// A node of the dock layout tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DockNode {
    Tab {
        index: i32,
        orientation: Orientation,
        children: Vec<DockChild>,
    },
    Sequence {
        position: i32,
        size: i32,
        extra1: i32,
        extra2: i32,
        children: Vec<DockChild>,
    },
    /// Empty stand-in for a node whose tag byte was not recognized.
    Unrecognized { tag: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DockChild {
    Widget {
        name: String,
        flags: u8,
        layout: WidgetLayout,
    },
    NestedSequence {
        position: i32,
        size: i32,
        extra1: i32,
        extra2: i32,
        subtree: DockNode,
    },
}

/// Placement of a dock widget.
///
/// `Docked` fields are opaque numbers of the toolkit's layout engine;
/// `Placeholder` slots are raw sentinels written for unnamed widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetLayout {
    Placeholder {
        d1: i32,
        d2: i32,
        d3: i32,
        d4: i32,
    },
    Floating {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        visible: bool,
    },
    Docked {
        pos: i32,
        size: i32,
        extra1: i32,
        extra2: i32,
        visible: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
    Unrecognized(u8),
}

impl From<u8> for Orientation {
    fn from(value: u8) -> Self {
        match value {
            1 => Orientation::Horizontal,
            2 => Orientation::Vertical,
            other => Orientation::Unrecognized(other),
        }
    }
}

/// Which dock area owns a window corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    Left,
    Right,
    Top,
    Bottom,
    Unknown(i32),
}

impl From<i32> for Corner {
    fn from(value: i32) -> Self {
        match value {
            1 => Corner::Left,
            2 => Corner::Right,
            4 => Corner::Top,
            8 => Corner::Bottom,
            other => Corner::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolBarArea {
    pub lines: Vec<ToolBarLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolBarLine {
    pub position: u8,
    pub edge: Edge,
    pub items: Vec<ToolBarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolBarItem {
    pub name: String,
    pub shown: u8,
    pub position: i32,
    pub size: i32,
    pub rect: Option<Rect>,
    pub floating: bool,
}

/// Window edge a toolbar line is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl TryFrom<i32> for Edge {
    type Error = i32;
    fn try_from(value: i32) -> std::result::Result<Self, i32> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            2 => Ok(Self::Top),
            3 => Ok(Self::Bottom),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}
