//! Error types for state decoding and settings lookup.

use std::path::PathBuf;
use thiserror::Error;

/// A structural fault raised while decoding a window-state blob.
///
/// Every variant carries the cursor offset at which it was detected. The
/// type is `Clone` so a faulted cursor can hand the same fault back to
/// every later read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended before a fixed-width field could be read.
    #[error("unexpected end of data at offset {offset:#x} (need {need} bytes, have {have})")]
    UnexpectedEof {
        offset: usize,
        need: usize,
        have: usize,
    },

    /// A text length prefix that is odd or larger than the remaining input.
    #[error("invalid text length {length} at offset {offset:#x}")]
    InvalidTextLength { offset: usize, length: u32 },

    /// Dock nesting went deeper than the configured limit.
    #[error("dock tree nesting exceeds {limit} levels at offset {offset:#x}")]
    DepthExceeded { offset: usize, limit: usize },

    /// A dock child carried a tag that is neither a widget nor a sequence.
    #[error("unknown dock child marker {tag:#04x} at offset {offset:#x}")]
    UnknownChildTag { offset: usize, tag: u8 },

    /// A toolbar line position outside `0..=3`.
    #[error("toolbar line position {position} out of range at offset {offset:#x}")]
    LinePosition { offset: usize, position: i32 },
}

impl DecodeError {
    /// Byte offset at which the fault was detected.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::UnexpectedEof { offset, .. }
            | DecodeError::InvalidTextLength { offset, .. }
            | DecodeError::DepthExceeded { offset, .. }
            | DecodeError::UnknownChildTag { offset, .. }
            | DecodeError::LinePosition { offset, .. } => *offset,
        }
    }
}

/// Errors raised while reading a settings file or resolving a key path.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input path does not exist or is not a regular file.
    #[error("Input file '{}' does not exist.", .0.display())]
    MissingFile(PathBuf),

    /// The key path has no components.
    #[error("key path empty")]
    EmptyPath,

    /// A path component looked like an array index but could not be split.
    #[error("Bad path component '{0}'")]
    BadPath(String),

    /// The resolved key is not present in the file.
    #[error("Key '{0}' not set")]
    NotFound(String),
}

/// Convenience alias for decoder results.
pub type Result<T> = std::result::Result<T, DecodeError>;
