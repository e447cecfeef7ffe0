//! Single-value lookup in the toolkit's INI settings files.
//!
//! Key paths are slash separated. A group component written `name[i]`
//! selects element `i` of the settings array `name`, which the toolkit
//! stores under `name/<i + 1>/`. A final `name[i]` that is not itself a key
//! selects element `i` of the list value `name`.

mod ini;
mod value;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::qsettings::types::error::SettingsError;
pub use value::SettingsValue;

/// A parsed settings file.
#[derive(Debug, Clone, Default)]
pub struct SettingsFile {
    entries: BTreeMap<String, String>,
}

impl SettingsFile {
    /// Reads and parses the settings file at `path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The path does not exist or is not a regular file
    /// - The file cannot be read
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SettingsError::MissingFile(path.to_path_buf()));
        }
        info!("Reading settings file: {}", path.display());
        let bytes = fs::read(path)?;
        let settings = Self::parse(&String::from_utf8_lossy(&bytes));
        debug!("Settings file holds {} keys", settings.entries.len());
        Ok(settings)
    }

    /// Parses settings from INI text.
    pub fn parse(text: &str) -> Self {
        Self {
            entries: ini::parse(text),
        }
    }

    /// Resolves `key_path` to a single value.
    pub fn lookup(&self, key_path: &str) -> Result<SettingsValue, SettingsError> {
        if key_path.is_empty() {
            return Err(SettingsError::EmptyPath);
        }
        let components: Vec<&str> = key_path.split('/').collect();
        let Some((last, groups)) = components.split_last() else {
            return Err(SettingsError::EmptyPath);
        };

        let mut prefix = String::new();
        for component in groups {
            match parse_indexed(component)? {
                Some((name, index)) => prefix.push_str(&format!("{}/{}/", name, index + 1)),
                None => {
                    prefix.push_str(component);
                    prefix.push('/');
                }
            }
        }

        let key = format!("{}{}", prefix, last);
        debug!("Resolved key path '{}' to '{}'", key_path, key);
        if let Some(raw) = self.entries.get(&key) {
            return Ok(SettingsValue::from_raw(raw));
        }

        if let Some((name, index)) = parse_indexed(last)?
            && let Some(raw) = self.entries.get(&format!("{}{}", prefix, name))
        {
            let element = match SettingsValue::from_raw(raw) {
                SettingsValue::List(elements) => elements.into_iter().nth(index),
                SettingsValue::Text(text) if index == 0 => Some(text),
                _ => None,
            };
            if let Some(element) = element {
                return Ok(SettingsValue::Text(element));
            }
        }

        Err(SettingsError::NotFound(last.to_string()))
    }
}

/// Splits `name[index]`. Components without a trailing `]` are plain names.
fn parse_indexed(component: &str) -> Result<Option<(&str, usize)>, SettingsError> {
    if !component.ends_with(']') {
        return Ok(None);
    }
    let parts: Vec<&str> = component.split('[').collect();
    let [name, index_text] = parts.as_slice() else {
        return Err(SettingsError::BadPath(component.to_string()));
    };
    let digits = index_text.trim_end_matches(']');
    // Unparsable indices select element 0.
    let index = digits.parse::<usize>().unwrap_or(0);
    Ok(Some((*name, index)))
}
