//! Core decoding module
//!
//! - [`format`]: Window-state blob decoders
//! - [`document`]: Document assembly and JSON rendering
//! - [`store`]: Settings file lookup
//! - [`types`]: Data model, errors, and options

pub mod cursor;
pub mod document;
pub mod format;
pub mod store;
pub mod types;

use types::models::StateDocument;
pub use types::error::{DecodeError, Result, SettingsError};
pub use types::options::{DEFAULT_MAX_DEPTH, DecodeOptions};

/// Decodes a saved window-state blob with default options.
///
/// Decoding is best-effort and never fails; see
/// [`StateDocument::truncated`] and [`StateDocument::diagnostics`].
pub fn decode_state(data: &[u8]) -> StateDocument {
    decode_state_with(data, DecodeOptions::default())
}

/// Decodes a saved window-state blob with explicit options.
pub fn decode_state_with(data: &[u8], options: DecodeOptions) -> StateDocument {
    format::state::decode(data, options)
}
