//! Java `.properties` text codec.
//!
//! A `\uXXXX` escape must carry exactly four hex digits; anything else is a
//! [`Error::MalformedProperties`]. Other unknown escapes keep the escaped
//! character and a trailing lone backslash is dropped.

use super::PropertySet;
use crate::error::{Error, Result};

const WHITESPACE: &[char] = &[' ', '\t', '\x0c'];
const BOM: char = '\u{feff}';

/// Parse `.properties` text into a [`PropertySet`].
///
/// Later duplicates of a key replace earlier ones.
///
/// # Errors
///
/// Returns [`Error::MalformedProperties`] for a `\u` escape that is not
/// followed by four hex digits.
///
/// # Examples
///
/// ```
/// use dtconf::properties::parse;
///
/// let set = parse("# comment\nglobal.feature.info = false\nglobal.css.class:display").unwrap();
/// assert_eq!(set.get("global.feature.info"), Some("false"));
/// assert_eq!(set.get("global.css.class"), Some("display"));
///
/// assert!(parse("global.css.class=\\u12").is_err());
/// ```
pub fn parse(input: &str) -> Result<PropertySet> {
    let input = input.strip_prefix(BOM).unwrap_or(input);
    let mut set = PropertySet::new();
    let mut lines = input.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let trimmed = line.trim_start_matches(WHITESPACE);
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(WHITESPACE)),
                None => break,
            }
        }

        let (key, value) = split_key_value(&logical);
        let malformed = |reason| Error::MalformedProperties {
            line: index + 1,
            reason,
        };
        set.insert(
            unescape(key).map_err(malformed)?,
            unescape(value).map_err(malformed)?,
        );
    }

    Ok(set)
}

/// Render a [`PropertySet`] as `.properties` text, one `key=value` per line.
#[must_use]
pub fn write(set: &PropertySet) -> String {
    let mut out = String::new();
    for (key, value) in set.iter() {
        out.push_str(&escape(key, true));
        out.push('=');
        out.push_str(&escape(value, false));
        out.push('\n');
    }
    out
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || WHITESPACE.contains(&c) {
            key_end = idx;
            break;
        }
    }

    let key = &line[..key_end];
    let rest = &line[key_end..];

    let rest = if rest.starts_with('=') || rest.starts_with(':') {
        &rest[1..]
    } else {
        let rest = rest.trim_start_matches(WHITESPACE);
        rest.strip_prefix('=')
            .or_else(|| rest.strip_prefix(':'))
            .unwrap_or(rest)
    };

    (key, rest.trim_start_matches(WHITESPACE))
}

fn unescape(raw: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let high = read_code_unit(&mut chars)?;
                if (0xD800..=0xDBFF).contains(&high) {
                    // Surrogate pair: a second `\uXXXX` unit may follow.
                    let mut lookahead = chars.clone();
                    let low = match (lookahead.next(), lookahead.next()) {
                        (Some('\\'), Some('u')) => Some(read_code_unit(&mut lookahead)?),
                        _ => None,
                    };
                    match low
                        .filter(|low| (0xDC00..=0xDFFF).contains(low))
                        .and_then(|low| {
                            char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
                        }) {
                        Some(ch) => {
                            out.push(ch);
                            chars = lookahead;
                        }
                        None => out.push(char::REPLACEMENT_CHARACTER),
                    }
                } else {
                    out.push(char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_code_unit(chars: &mut std::str::Chars<'_>) -> std::result::Result<u32, String> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("malformed \\uxxxx encoding '\\u{hex}'"));
    }
    u32::from_str_radix(&hex, 16).map_err(|e| e.to_string())
}

fn escape(raw: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for (idx, c) in raw.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            ' ' if is_key || idx == 0 => out.push_str("\\ "),
            '=' | ':' | '#' | '!' if is_key => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
