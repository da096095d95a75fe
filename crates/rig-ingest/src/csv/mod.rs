//! CSV catalog reading.

mod reader;

pub use reader::{parse_csv_rows, read_csv_rows};
