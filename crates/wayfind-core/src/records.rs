//! Utilities for records output format

use std::path::Path;

/// Build an `H` header line: `H wayfind=1 records=1 mode=<mode> k=v ...`
pub fn header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H wayfind=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        line.push_str(&field_value(value));
    }
    line
}

/// Escape double quotes (and the escape character) for a quoted field
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

/// Quote a `k=v` value when it would otherwise split the record line
fn field_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '=' || c == '\\');
    if needs_quotes {
        format!("\"{}\"", escape_quotes(value))
    } else {
        value.to_string()
    }
}

/// Convert an absolute path to a path relative to the current working directory
pub fn path_relative_to_cwd(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        path.strip_prefix(&cwd)
            .ok()
            .map(|p| {
                let s = p.display().to_string();
                if s.is_empty() {
                    ".".to_string()
                } else {
                    s
                }
            })
            .unwrap_or_else(|| path.display().to_string())
    } else {
        path.display().to_string()
    }
}
