pub mod extract;
pub mod models;
pub mod selector;
pub mod summarizer;

pub use models::{create_model, GenerativeModel};
pub use selector::Selector;
pub use summarizer::{Summarizer, MAX_ARTICLES};

/// Configuration for the generative model, built once at startup from the
/// CLI and the environment, then passed down to the clients.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub model_url: Option<String>,
}

pub mod prelude {
    pub use super::models::create_model;
    pub use super::Config;
    pub use nd_core::{Error, RawArticle, Result, SelectionResult, SummarizedArticle};
}
