use std::sync::Arc;

use tracing::{info, warn};

use nd_core::{RawArticle, Result, SummarizedArticle};

use crate::extract::extract;
use crate::models::GenerativeModel;

/// Only the first articles of a run are summarized; the rest are ignored.
pub const MAX_ARTICLES: usize = 10;

const SUMMARIZE_PROMPT: &str = r#"You are a professional AI news summarizer.

Your task is to read the news article provided and generate a summary in the following strict JSON format:

{
  "title": "<Rewrite the original title into a more attractive, attention-grabbing headline>",
  "summary": "<Write a clear, concise summary in 3-4 sentences. Emphasize 3-5 key terms (such as names, technologies, companies, or events) using **double asterisks**. Do not include irrelevant details or opinions.>"
}

Only return the JSON output - no extra text, explanations, or commentary.

News:
Title: {title}
Content: {content}
"#;

pub struct Summarizer {
    model: Arc<dyn GenerativeModel>,
}

impl Summarizer {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Summarize one article. `Ok(None)` means the model replied but no
    /// usable JSON could be extracted; transport errors propagate.
    pub async fn summarize(&self, article: &RawArticle) -> Result<Option<SummarizedArticle>> {
        let prompt = SUMMARIZE_PROMPT
            .replace("{title}", &article.title)
            .replace("{content}", &article.content);
        let reply = self.model.generate(&prompt).await?;

        match extract::<SummarizedArticle>(&reply) {
            Some(summary) if !summary.title.is_empty() && !summary.summary.is_empty() => {
                Ok(Some(summary))
            }
            _ => {
                warn!("⚠️ Could not extract a summary from the model reply:\n{}", reply);
                Ok(None)
            }
        }
    }

    /// Summarize the first [`MAX_ARTICLES`] articles in order, one call at a
    /// time. Articles whose reply yields no summary are skipped; the
    /// survivors keep their source order.
    pub async fn summarize_batch(&self, articles: &[RawArticle]) -> Result<Vec<SummarizedArticle>> {
        let mut summaries = Vec::new();
        for (idx, article) in articles.iter().take(MAX_ARTICLES).enumerate() {
            info!("🤖 Summarizing article {}...", idx + 1);
            match self.summarize(article).await? {
                Some(summary) => summaries.push(summary),
                None => warn!("⚠️ Skipping article {}: {}", idx + 1, article.title),
            }
        }
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DummyModel;
    use crate::Config;

    fn article(n: usize) -> RawArticle {
        RawArticle {
            title: format!("Article {}", n),
            content: format!("Content of article {}.", n),
        }
    }

    #[tokio::test]
    async fn test_summarize_single_article() {
        let summarizer = Summarizer::new(Arc::new(DummyModel::new(&Config::default()).unwrap()));
        let summary = summarizer.summarize(&article(1)).await.unwrap().unwrap();
        assert_eq!(summary.title, "Article 1");
        assert!(!summary.summary.is_empty());
    }

    #[tokio::test]
    async fn test_batch_caps_at_ten_articles() {
        let summarizer = Summarizer::new(Arc::new(DummyModel::new(&Config::default()).unwrap()));
        let articles: Vec<RawArticle> = (1..=12).map(article).collect();
        let summaries = summarizer.summarize_batch(&articles).await.unwrap();
        assert_eq!(summaries.len(), MAX_ARTICLES);
        assert_eq!(summaries[0].title, "Article 1");
        assert_eq!(summaries[9].title, "Article 10");
        assert!(!summaries.iter().any(|s| s.title == "Article 11"));
    }

    #[tokio::test]
    async fn test_extraction_failure_is_skipped() {
        #[derive(Debug)]
        struct NoJsonModel;

        #[async_trait::async_trait]
        impl GenerativeModel for NoJsonModel {
            fn name(&self) -> &str {
                "NoJson"
            }

            async fn generate(&self, _prompt: &str) -> Result<String> {
                Ok("I refuse to answer in JSON.".to_string())
            }
        }

        let summarizer = Summarizer::new(Arc::new(NoJsonModel));
        assert!(summarizer.summarize(&article(1)).await.unwrap().is_none());

        let articles: Vec<RawArticle> = (1..=3).map(article).collect();
        let summaries = summarizer.summarize_batch(&articles).await.unwrap();
        assert!(summaries.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        #[derive(Debug)]
        struct FailingModel;

        #[async_trait::async_trait]
        impl GenerativeModel for FailingModel {
            fn name(&self) -> &str {
                "Failing"
            }

            async fn generate(&self, _prompt: &str) -> Result<String> {
                Err(nd_core::Error::Inference("model unavailable".to_string()))
            }
        }

        let summarizer = Summarizer::new(Arc::new(FailingModel));
        assert!(summarizer.summarize(&article(1)).await.is_err());
    }
}
