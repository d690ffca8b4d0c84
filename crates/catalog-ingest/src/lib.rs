pub mod error;
pub mod parser;

pub use error::IngestError;
pub use parser::{load_catalog_records, parse_line, parse_record};
