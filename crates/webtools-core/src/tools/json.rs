//! JSON validation, pretty-printing and minification.
//!
//! Object key order is preserved unless sorting is requested. Numbers keep
//! their source text, so exponents and integers wider than 64 bits survive.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::error::JsonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    TwoSpaces,
    FourSpaces,
    Tab,
}

impl Indent {
    pub const ALL: [Indent; 3] = [Self::TwoSpaces, Self::FourSpaces, Self::Tab];

    fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::TwoSpaces => b"  ",
            Self::FourSpaces => b"    ",
            Self::Tab => b"\t",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TwoSpaces => "2 spaces",
            Self::FourSpaces => "4 spaces",
            Self::Tab => "Tab",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub indent: Indent,
    pub sort_keys: bool,
}

/// Shape of a valid document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSummary {
    pub root: &'static str,
    /// Nesting depth; scalars have depth 0.
    pub depth: usize,
    /// Number of values, including the root.
    pub nodes: usize,
}

fn parse(input: &str) -> Result<Value, JsonError> {
    if input.trim().is_empty() {
        return Err(JsonError::Empty);
    }
    serde_json::from_str(input).map_err(|e| JsonError::Syntax {
        line: e.line(),
        column: e.column(),
        message: syntax_message(&e),
    })
}

/// The error text without serde_json's trailing " at line X column Y".
fn syntax_message(err: &serde_json::Error) -> String {
    let text = err.to_string();
    match text.rfind(" at line ") {
        Some(pos) => text[..pos].to_string(),
        None => text,
    }
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

fn prepare(input: &str, sort: bool) -> Result<Value, JsonError> {
    let value = parse(input)?;
    Ok(if sort { sort_keys(value) } else { value })
}

/// Pretty-print with the chosen indentation.
pub fn format(input: &str, options: FormatOptions) -> Result<String, JsonError> {
    let value = prepare(input, options.sort_keys)?;

    let mut out = Vec::with_capacity(input.len() * 2);
    let formatter = PrettyFormatter::with_indent(options.indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| JsonError::Serialize(e.to_string()))?;

    String::from_utf8(out).map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Remove all insignificant whitespace.
pub fn minify(input: &str, sort: bool) -> Result<String, JsonError> {
    let value = prepare(input, sort)?;
    serde_json::to_string(&value).map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Check the document and describe its shape.
pub fn validate(input: &str) -> Result<JsonSummary, JsonError> {
    let value = parse(input)?;
    Ok(JsonSummary {
        root: kind(&value),
        depth: depth(&value),
        nodes: count_nodes(&value),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(depth).max().unwrap_or(0),
        _ => 0,
    }
}

fn count_nodes(value: &Value) -> usize {
    1 + match value {
        Value::Array(items) => items.iter().map(count_nodes).sum(),
        Value::Object(map) => map.values().map(count_nodes).sum(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_two_spaces() {
        let out = format(r#"{"b":1,"a":[true,null]}"#, FormatOptions::default()).unwrap();
        assert_eq!(
            out,
            "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}"
        );
    }

    #[test]
    fn test_format_tab_sorted() {
        let options = FormatOptions {
            indent: Indent::Tab,
            sort_keys: true,
        };
        let out = format(r#"{"b":{"d":1,"c":2},"a":0}"#, options).unwrap();
        assert_eq!(out, "{\n\t\"a\": 0,\n\t\"b\": {\n\t\t\"c\": 2,\n\t\t\"d\": 1\n\t}\n}");
    }

    #[test]
    fn test_minify_preserves_order() {
        let input = "{\n  \"z\": 1,\n  \"a\": \"x y\"\n}";
        assert_eq!(minify(input, false).unwrap(), r#"{"z":1,"a":"x y"}"#);
        assert_eq!(minify(input, true).unwrap(), r#"{"a":"x y","z":1}"#);
    }

    #[test]
    fn test_numbers_keep_their_text() {
        let input = r#"{"a":1e2,"b":1.0,"c":123456789012345678901234}"#;
        assert_eq!(minify(input, false).unwrap(), input);

        let out = format(input, FormatOptions::default()).unwrap();
        assert!(out.contains("\"a\": 1e2"), "{out}");
        assert!(out.contains("\"c\": 123456789012345678901234"), "{out}");
    }

    #[test]
    fn test_sort_reaches_into_arrays() {
        let out = minify(r#"[{"b":1,"a":2}]"#, true).unwrap();
        assert_eq!(out, r#"[{"a":2,"b":1}]"#);
    }

    #[test]
    fn test_syntax_error_location() {
        let err = validate("{\n  \"a\": 1,\n}").unwrap_err();
        match err {
            JsonError::Syntax { line, column, message } => {
                assert_eq!(line, 3);
                assert_eq!(column, 1);
                assert!(!message.contains("at line"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate("   "), Err(JsonError::Empty));
        assert_eq!(format("", FormatOptions::default()), Err(JsonError::Empty));
    }

    #[test]
    fn test_validate_summary() {
        let summary = validate(r#"{"a":[1,2,{"b":null}]}"#).unwrap();
        assert_eq!(
            summary,
            JsonSummary {
                root: "object",
                depth: 3,
                nodes: 6,
            }
        );
        assert_eq!(validate("42").unwrap().root, "number");
    }

    #[test]
    fn test_indent_labels() {
        for indent in Indent::ALL {
            assert_eq!(Indent::from_label(indent.label()), Some(indent));
        }
    }
}
