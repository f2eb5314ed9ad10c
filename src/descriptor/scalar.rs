//! Scalar decoding for header values.

use serde_json::{Number, Value};

/// Values that open a block scalar; the header keeps them as opaque mappings.
const BLOCK_INDICATORS: &[&str] = &["|", ">", "|-", ">-", "|+", ">+"];

pub(crate) fn is_block_indicator(raw: &str) -> bool {
    BLOCK_INDICATORS.contains(&raw)
}

/// Decode a non-empty scalar token.
pub(crate) fn decode_scalar(raw: &str) -> Value {
    match raw {
        "[]" => return Value::Array(Vec::new()),
        "null" | "~" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if is_integer(raw) {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Number(n.into());
        }
    }
    if is_integer(raw) || is_decimal(raw) {
        if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    }

    Value::String(strip_quotes(raw).to_string())
}

/// Remove one matching pair of surrounding `"` or `'`.
pub(crate) fn strip_quotes(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

/// Drop a trailing `# comment` that sits outside quotes and follows whitespace.
///
/// A quote character only opens a quoted span at the start of the line or after
/// whitespace or `:`; an apostrophe inside a word is plain text.
pub(crate) fn strip_inline_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;

    for (idx, ch) in line.char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' if opens_quote(prev) => quote = Some(ch),
                '#' if prev.is_some_and(char::is_whitespace) => {
                    return line[..idx].trim_end()
                }
                _ => {}
            },
        }
        prev = Some(ch);
    }
    line
}

fn opens_quote(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => c.is_whitespace() || c == ':',
    }
}

fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    match unsigned.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && !frac.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
