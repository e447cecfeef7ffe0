//! Typed settings values.

use std::io::{self, Write};

use super::ini;

/// A single value read from a settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsValue {
    Text(String),
    List(Vec<String>),
    /// `@ByteArray(...)` payloads and opaque `@Variant(...)` blobs.
    Bytes(Vec<u8>),
    /// An explicit `@Invalid()` entry.
    Invalid,
}

impl SettingsValue {
    /// Converts raw INI value text into a typed value.
    pub fn from_raw(raw: &str) -> Self {
        let (mut elements, is_list) = ini::unescape_value(raw);
        if is_list {
            return SettingsValue::List(elements);
        }
        let text = elements.pop().unwrap_or_default();
        Self::from_text(text)
    }

    fn from_text(text: String) -> Self {
        if !text.starts_with('@') {
            return SettingsValue::Text(text);
        }
        if let Some(literal) = text.strip_prefix("@@") {
            return SettingsValue::Text(format!("@{}", literal));
        }
        if text == "@Invalid()" {
            return SettingsValue::Invalid;
        }
        if let Some(inner) = wrapped(&text, "@ByteArray(").or_else(|| wrapped(&text, "@Variant(")) {
            return SettingsValue::Bytes(latin1_bytes(inner));
        }
        for prefix in ["@Rect(", "@Size(", "@Point("] {
            if let Some(inner) = wrapped(&text, prefix) {
                return SettingsValue::Text(inner.to_string());
            }
        }
        SettingsValue::Text(text)
    }

    /// Writes the value the way the CLI prints it: bytes raw, everything
    /// else as a line of text.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            SettingsValue::Bytes(bytes) => out.write_all(bytes),
            SettingsValue::Text(text) => writeln!(out, "{}", text),
            SettingsValue::List(elements) => writeln!(out, "{}", elements.join(", ")),
            SettingsValue::Invalid => writeln!(out),
        }
    }
}

fn wrapped<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.strip_prefix(prefix)?.strip_suffix(')')
}

/// Maps each char to one byte; chars above U+00FF become `?`.
fn latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
