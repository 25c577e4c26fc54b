pub mod error;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use parser::parse_articles;
pub use types::{RawArticle, SelectionResult, SummarizedArticle};
