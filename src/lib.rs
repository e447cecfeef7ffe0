//! # qsettings-decoder
//!
//! Prints settings written by the Qt toolkit in human readable form:
//! single values from INI settings files, and the binary window layout
//! blob saved by a main window's "save state" call, decoded into a
//! document of dock areas, floating tabs, and toolbar areas.
pub mod cli;
pub mod qsettings;

// Re-export the main types for convenience
pub use qsettings::{
    DecodeError, DecodeOptions, SettingsError, decode_state, decode_state_with,
    store::{SettingsFile, SettingsValue},
    types::models::{
        Corner, Diagnostic, Dock, DockArea, DockChild, DockNode, Edge, Item, Orientation, Rect,
        Size, StateDocument, ToolBarArea, ToolBarItem, ToolBarLine, WidgetLayout,
    },
};
