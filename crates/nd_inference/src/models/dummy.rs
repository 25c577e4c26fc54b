use nd_core::Result;

use super::GenerativeModel;
use crate::Config;

/// Offline stand-in used in tests and keyless local runs. Replies with
/// shape-correct JSON derived from the prompt itself.
#[derive(Debug)]
pub struct DummyModel;

impl DummyModel {
    pub fn new(_config: &Config) -> Result<Self> {
        Ok(Self)
    }
}

#[async_trait::async_trait]
impl GenerativeModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        // Selection prompts carry the output field names; everything else is
        // treated as a summarization prompt.
        if prompt.contains("best_news") {
            let selection = serde_json::json!({
                "best_news": {"title": "Dummy pick", "summary": "Dummy summary."},
                "most_viral_news": {"title": "Dummy viral pick", "summary": "Dummy summary."},
                "relevant_news": {"title": "Dummy related pick", "summary": "Dummy summary."},
            });
            return Ok(selection.to_string());
        }

        let title = prompt
            .lines()
            .find_map(|line| line.strip_prefix("Title: "))
            .unwrap_or("Untitled")
            .trim();
        let reply = serde_json::json!({
            "title": title,
            "summary": format!("Dummy summary of {}.", title),
        });
        Ok(reply.to_string())
    }
}
