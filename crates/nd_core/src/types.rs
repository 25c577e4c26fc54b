use serde::{Deserialize, Serialize};

/// An article as read from the input file, before any model call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawArticle {
    pub title: String,
    pub content: String,
}

/// One article after summarization: a rewritten headline plus a short summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizedArticle {
    pub title: String,
    pub summary: String,
}

/// The final digest picked from the summarized set.
///
/// `relevant_news` is absent in the fallback produced when no article could
/// be summarized, so it is optional and skipped when missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionResult {
    pub best_news: SummarizedArticle,
    pub most_viral_news: SummarizedArticle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_news: Option<SummarizedArticle>,
}

impl SelectionResult {
    pub fn fallback() -> Self {
        let placeholder = SummarizedArticle {
            title: "Error".to_string(),
            summary: "Could not extract any news.".to_string(),
        };
        Self {
            best_news: placeholder.clone(),
            most_viral_news: placeholder,
            relevant_news: None,
        }
    }
}
