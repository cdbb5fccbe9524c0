mod error;
mod extract_header;
mod extractor;

pub use error::*;
pub use extract_header::*;
pub use extractor::*;
