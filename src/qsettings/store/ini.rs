//! Reader for the toolkit's INI settings format.
//!
//! # Format
//! ```text
//! [General]                  ← root group
//! geometry=@ByteArray(\0\0\0\xff...)
//! [MainWindow]
//! recent\size=2              ← `\` separates nested groups
//! recent\1\path=/tmp/a
//! names=alpha, "beta, gamma" ← unquoted commas make a list
//! ```
//!
//! Keys are percent-escaped (`%XX`, `%UXXXX`); values use C-style escapes.

use std::collections::BTreeMap;
use std::iter::Peekable;
use std::str::Chars;

use log::{debug, trace};

/// Name of the section that maps to the root group.
const ROOT_SECTION: &str = "General";

/// UTF-8 byte-order mark some editors write at the start of the file.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Parses INI text into a map from slash-separated key to raw value text.
///
/// Later duplicates of a key replace earlier ones.
pub fn parse(text: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    let mut prefix = String::new();
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(section) = line.strip_prefix('[') {
            let section = section.strip_suffix(']').unwrap_or(section);
            let group = unescape_key(section);
            prefix = if group.is_empty() || group == ROOT_SECTION {
                String::new()
            } else {
                format!("{}/", group)
            };
            trace!("Entering group '{}'", group);
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            debug!("Skipping settings line without '=': {}", line);
            continue;
        };

        let mut value = raw_value.trim_start().to_string();
        while continues_on_next_line(&value) {
            value.pop();
            match lines.next() {
                Some(next) => value.push_str(next.trim_start()),
                None => break,
            }
        }

        let key = unescape_key(&raw_key.trim().replace('\\', "/"));
        entries.insert(format!("{}{}", prefix, key), value);
    }

    entries
}

/// An odd run of trailing backslashes ends in an unescaped one, which
/// joins the next line.
fn continues_on_next_line(value: &str) -> bool {
    value.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Decodes `%XX` and `%UXXXX` escapes in a key or section name.
pub fn unescape_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        let digits = if chars.peek() == Some(&'U') {
            chars.next();
            4
        } else {
            2
        };
        let code: String = chars.by_ref().take(digits).collect();
        match u32::from_str_radix(&code, 16).ok().and_then(char::from_u32) {
            Some(decoded) if code.len() == digits => out.push(decoded),
            _ => {
                out.push('%');
                if digits == 4 {
                    out.push('U');
                }
                out.push_str(&code);
            }
        }
    }

    out
}

/// Unescapes a raw value into its string elements.
///
/// Returns the elements and whether an unquoted comma made it a list.
pub fn unescape_value(raw: &str) -> (Vec<String>, bool) {
    let mut elements = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut is_list = false;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            '\\' => {
                if let Some(escaped) = unescape_sequence(&mut chars) {
                    current.push(escaped);
                }
            }
            ',' if !in_quotes => {
                is_list = true;
                elements.push(finish_element(&mut current, quoted));
                quoted = false;
            }
            ';' if !in_quotes => break,
            c if c.is_whitespace() && !in_quotes && current.is_empty() => {}
            other => current.push(other),
        }
    }
    elements.push(finish_element(&mut current, quoted));

    (elements, is_list)
}

fn finish_element(current: &mut String, quoted: bool) -> String {
    let element = std::mem::take(current);
    if quoted {
        element
    } else {
        element.trim().to_string()
    }
}

fn unescape_sequence(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    let ch = chars.next()?;
    let decoded = match ch {
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0c}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0b}',
        'x' => return char::from_u32(read_radix(chars, 0, 16)),
        '0'..='7' => return char::from_u32(read_radix(chars, ch as u32 - '0' as u32, 8)),
        other => other,
    };
    Some(decoded)
}

/// Consumes a run of digits in `radix`, accumulating onto `value`.
fn read_radix(chars: &mut Peekable<Chars<'_>>, mut value: u32, radix: u32) -> u32 {
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(radix)) {
        value = value.wrapping_mul(radix).wrapping_add(digit);
        chars.next();
    }
    value
}
