use std::path::Path;
use std::sync::Arc;

use tracing::info;

use nd_core::{parse_articles, Result, SelectionResult};
use nd_inference::{GenerativeModel, Selector, Summarizer};

/// Single-pass driver: parse the raw text, summarize the leading articles,
/// then either ask the model to pick the digest or fall back to the fixed
/// placeholder when nothing survived summarization.
pub struct DigestPipeline {
    summarizer: Summarizer,
    selector: Selector,
}

impl DigestPipeline {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            summarizer: Summarizer::new(model.clone()),
            selector: Selector::new(model),
        }
    }

    pub async fn digest(&self, raw: &str) -> Result<SelectionResult> {
        let articles = parse_articles(raw);
        info!("📰 Parsed {} articles", articles.len());

        let summaries = self.summarizer.summarize_batch(&articles).await?;
        info!("✨ Summarized {} articles", summaries.len());

        if summaries.is_empty() {
            return Ok(SelectionResult::fallback());
        }

        match self.selector.select(&summaries).await? {
            Some(selection) => Ok(selection),
            None => Ok(SelectionResult::fallback()),
        }
    }

    pub async fn run(&self, input: &Path, output: &Path) -> Result<()> {
        let raw = tokio::fs::read_to_string(input).await?;
        let selection = self.digest(&raw).await?;

        let json = serde_json::to_string_pretty(&selection)?;
        tokio::fs::write(output, json).await?;
        info!("✅ Done! Check {}", output.display());
        Ok(())
    }
}
