pub mod csv_parser;
pub mod price_series;

pub use price_series::{load_from_path, load_from_reader, InputFormat};
