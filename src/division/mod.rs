pub mod parser;
pub mod snapshot;

pub use parser::{load_division_file, parse_division, read_division};
pub use snapshot::{Division, TeamRecord};
