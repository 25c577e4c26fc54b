use std::sync::Arc;

use tracing::warn;

use nd_core::{Result, SelectionResult, SummarizedArticle};

use crate::extract::extract;
use crate::models::GenerativeModel;

const SELECT_PROMPT: &str = r#"You are an expert AI news evaluator and communicator.

Below is a list of summarized AI news articles.

Your task:
1. **Select the most important, relevant, and impactful article** as "best_news". It should be the most recent and have significant real-world consequences or major industry developments.
2. **Select the most viral and attention-grabbing article** as "most_viral_news". It should be the one most likely to spark curiosity, discussions, or go viral on social media.
3. **Select a third article** as "relevant_news". This should be related in theme, topic, or industry to either "best_news" or "most_viral_news", but must be different from them in content and angle.
4. **Refine the summaries** into clear, concise, and engaging language that is both:
   - **AI-enhanced** (well-structured, professional wording)
   - **Human-friendly** (easy for a general audience to understand)
5. Ensure summaries are **1-3 sentences** with strong keywords that make the news sound interesting without distorting facts.

Return ONLY in the following JSON format (no extra text, no explanations):
{
  "best_news": {
    "title": "<title of the most important news>",
    "summary": "<AI-refined human-friendly summary of the most important news>"
  },
  "most_viral_news": {
    "title": "<title of the most viral news>",
    "summary": "<AI-refined human-friendly summary of the most viral news>"
  },
  "relevant_news": {
    "title": "<title of the related but different news>",
    "summary": "<AI-refined human-friendly summary of the related but different news>"
  }
}

Summarized News List:
{summaries}
"#;

pub struct Selector {
    model: Arc<dyn GenerativeModel>,
}

impl Selector {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Ask the model to pick the best, most viral, and related stories out
    /// of the summarized set. Callers only invoke this with a non-empty
    /// set; `Ok(None)` means the reply carried no usable JSON.
    pub async fn select(&self, summaries: &[SummarizedArticle]) -> Result<Option<SelectionResult>> {
        let listing = serde_json::to_string_pretty(summaries)?;
        let prompt = SELECT_PROMPT.replace("{summaries}", &listing);
        let reply = self.model.generate(&prompt).await?;

        match extract::<SelectionResult>(&reply) {
            Some(selection) => Ok(Some(selection)),
            None => {
                warn!("⚠️ Could not extract a selection from the model reply:\n{}", reply);
                Ok(None)
            }
        }
    }
}
