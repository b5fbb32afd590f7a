//! Delimited row reading shared by the edge and heuristic loaders

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::error::{Result, WayfindError};

/// One non-blank input row with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Split every non-blank line of `reader` into trimmed fields.
///
/// A field wrapped in double quotes has the quotes removed. Embedded
/// delimiters inside quotes are not supported.
pub fn read_rows<R: BufRead>(reader: R, delimiter: char) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fields = trimmed
            .split(delimiter)
            .map(|field| unquote(field.trim()).to_string())
            .collect();
        rows.push(Row {
            line: idx + 1,
            fields,
        });
    }
    Ok(rows)
}

fn unquote(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field)
}

/// Resolve an input path, appending `extension` when the bare name is
/// missing and has none of its own (`graph` -> `graph.csv`).
pub fn resolve_input_path(path: &Path, extension: &str) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if path.extension().is_none() && !extension.is_empty() {
        let with_ext = path.with_extension(extension);
        if with_ext.is_file() {
            return Ok(with_ext);
        }
    }
    Err(WayfindError::InputNotFound {
        path: path.to_path_buf(),
    })
}

/// Read all rows from a file on disk
pub fn read_rows_from_path(path: &Path, delimiter: char) -> Result<Vec<Row>> {
    let file = fs::File::open(path)?;
    read_rows(std::io::BufReader::new(file), delimiter)
}
