//! Input file handling

pub mod rows;

pub use rows::{read_rows, read_rows_from_path, resolve_input_path, Row};
