//! Byte builders for hand-assembled window-state blobs.
#![allow(dead_code)]

pub const ITEM_DOCK_AREA: u8 = 0xFD;
pub const ITEM_FLOATING_TAB: u8 = 0xF9;
pub const ITEM_TOOLBAR: u8 = 0xFE;
pub const ITEM_TOOLBAR_EX: u8 = 0xFC;

pub const NODE_TAB: u8 = 0xFA;
pub const NODE_SEQUENCE: u8 = 0xFC;

pub const CHILD_WIDGET: u8 = 0xFB;
pub const CHILD_SEQUENCE: u8 = 0xFC;

/// Big-endian writer mirroring the toolkit's stream layout.
#[derive(Default)]
pub struct StateWriter {
    buf: Vec<u8>,
}

impl StateWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a blob with a valid header.
    pub fn with_header(version: i32) -> Self {
        let mut writer = Self::new();
        writer.i32(0xFF).i32(version);
        writer
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn i32s(&mut self, values: &[i32]) -> &mut Self {
        for v in values {
            self.i32(*v);
        }
        self
    }

    /// Byte length prefix followed by UTF-16BE code units.
    pub fn text(&mut self, s: &str) -> &mut Self {
        let units: Vec<u16> = s.encode_utf16().collect();
        self.buf
            .extend_from_slice(&((units.len() * 2) as u32).to_be_bytes());
        for unit in units {
            self.buf.extend_from_slice(&unit.to_be_bytes());
        }
        self
    }

    pub fn widget(&mut self, name: &str, flags: u8, geometry: [i32; 4]) -> &mut Self {
        self.u8(CHILD_WIDGET).text(name).u8(flags).i32s(&geometry)
    }

    /// Dock area with no docks, the given central size and corners 1, 2, 4, 8.
    pub fn empty_dock_area(&mut self, width: i32, height: i32) -> &mut Self {
        self.u8(ITEM_DOCK_AREA)
            .i32(0)
            .i32s(&[width, height])
            .i32s(&[1, 2, 4, 8])
    }

    /// Dock area holding one dock whose tree is a tab with a single widget.
    pub fn tab_dock_area(&mut self, widget: &str) -> &mut Self {
        self.u8(ITEM_DOCK_AREA)
            .i32(1)
            .i32(1)
            .i32s(&[250, 600])
            .u8(NODE_TAB)
            .i32(0)
            .u8(2)
            .i32(1)
            .widget(widget, 0x01, [0, 150, 0, 0])
            .i32s(&[640, 480])
            .i32s(&[1, 2, 4, 8])
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buf.clone()
    }
}

/// Packs a floating toolbar rectangle the way the extended variant stores it.
pub fn pack_rect(x: i32, y: i32, w: i32, h: i32) -> (i32, i32) {
    let geom0 = ((((w as u32) << 16) | ((x + 0x7FFF) as u32 & 0xFFFF)) << 1) | 1;
    let geom1 = ((h as u32) << 16) | ((y + 0x7FFF) as u32 & 0xFFFF);
    (geom0 as i32, geom1 as i32)
}
