//! Header block parser.
//!
//! Lines are consumed one at a time by a small state machine. Open mappings live
//! on a scope stack keyed by the indentation of the line that opened them; a key
//! line closes every scope whose indentation is not strictly less than its own.
//! A key with an empty value opens a tentative mapping that a directly following
//! list block replaces.

use super::scalar::{decode_scalar, is_block_indicator, strip_inline_comment, strip_quotes};
use serde_json::{Map, Value};

/// Parsed header: insertion-ordered mapping of keys to values.
pub type Header = Map<String, Value>;

/// Parse the lines between the header markers.
pub fn parse_header(block: &str) -> Header {
    let mut parser = HeaderParser::default();
    for line in block.lines() {
        parser.feed(line);
    }
    parser.finish()
}

/// A nested mapping that is still open.
struct Scope {
    key: String,
    indent: usize,
    map: Header,
    /// Opened by an empty value and still childless.
    awaiting_list: bool,
}

#[derive(Default)]
enum LineState {
    #[default]
    Mapping,
    CollectingList {
        key: String,
        items: Vec<Value>,
    },
}

enum Line<'a> {
    Blank,
    Malformed,
    ListItem(&'a str),
    Entry {
        indent: usize,
        key: &'a str,
        value: &'a str,
    },
}

#[derive(Default)]
struct HeaderParser {
    root: Header,
    scopes: Vec<Scope>,
    state: LineState,
}

impl HeaderParser {
    fn feed(&mut self, raw: &str) {
        match classify(raw) {
            Line::Blank => {}
            Line::Malformed => self.flush_list(),
            Line::ListItem(value) => self.push_list_item(value),
            Line::Entry { indent, key, value } => {
                self.flush_list();
                self.insert_entry(indent, key, value);
            }
        }
    }

    fn finish(mut self) -> Header {
        self.flush_list();
        while !self.scopes.is_empty() {
            self.close_scope();
        }
        self.root
    }

    fn parent_map(&mut self) -> &mut Header {
        match self.scopes.last_mut() {
            Some(scope) => &mut scope.map,
            None => &mut self.root,
        }
    }

    fn push_list_item(&mut self, raw: &str) {
        let item = Value::String(strip_quotes(raw).to_string());

        if let LineState::CollectingList { items, .. } = &mut self.state {
            items.push(item);
            return;
        }

        let opens_list = self.scopes.last().is_some_and(|s| s.awaiting_list);
        if opens_list {
            if let Some(scope) = self.scopes.pop() {
                self.state = LineState::CollectingList {
                    key: scope.key,
                    items: vec![item],
                };
            }
        }
        // A list item with no pending key has nowhere to go.
    }

    fn flush_list(&mut self) {
        if let LineState::CollectingList { key, items } = std::mem::take(&mut self.state) {
            self.parent_map().insert(key, Value::Array(items));
        }
    }

    fn insert_entry(&mut self, indent: usize, key: &str, value: &str) {
        while self.scopes.last().is_some_and(|s| s.indent >= indent) {
            self.close_scope();
        }
        if let Some(parent) = self.scopes.last_mut() {
            parent.awaiting_list = false;
        }

        if value.is_empty() || is_block_indicator(value) {
            // Placeholder keeps the key's position; replaced when the scope closes.
            self.parent_map()
                .insert(key.to_string(), Value::Object(Map::new()));
            self.scopes.push(Scope {
                key: key.to_string(),
                indent,
                map: Map::new(),
                awaiting_list: true,
            });
        } else {
            self.parent_map()
                .insert(key.to_string(), decode_scalar(value));
        }
    }

    fn close_scope(&mut self) {
        if let Some(scope) = self.scopes.pop() {
            self.parent_map()
                .insert(scope.key, Value::Object(scope.map));
        }
    }
}

fn classify(raw: &str) -> Line<'_> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Blank;
    }

    let indent = raw.len() - trimmed.len();
    let content = strip_inline_comment(trimmed);

    if content == "-" {
        return Line::ListItem("");
    }
    if let Some(item) = content.strip_prefix("- ") {
        return Line::ListItem(item.trim());
    }

    let Some((key, value)) = content.split_once(':') else {
        return Line::Malformed;
    };
    let key = key.trim_end();
    if !is_valid_key(key) {
        return Line::Malformed;
    }

    Line::Entry {
        indent,
        key,
        value: value.trim(),
    }
}

fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if is_word_char(first) => {
            chars.all(|c| is_word_char(c) || c == '-' || c == '.')
        }
        _ => false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
