use std::fmt;
use std::sync::Arc;

use nd_core::Result;

use crate::Config;

pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Send one prompt and return the raw textual reply.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Create the model named in the configuration. Defaults to Gemini.
pub async fn create_model(config: Option<Config>) -> Result<Arc<dyn GenerativeModel>> {
    let config = config.unwrap_or_default();
    let model_name = config.model_name.as_deref().unwrap_or("gemini");

    match model_name {
        "gemini" => Ok(Arc::new(GeminiModel::new(&config)?)),
        "dummy" => Ok(Arc::new(DummyModel::new(&config)?)),
        // Concrete variant names (e.g. gemini-2.5-flash) go straight to the
        // Gemini client, which picks the variant up from the config.
        name if name.starts_with("gemini-") => Ok(Arc::new(GeminiModel::new(&config)?)),
        other => Err(nd_core::Error::Inference(format!(
            "Unknown model: {}. Available models: gemini, dummy",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_model_defaults_to_gemini() {
        let config = Config {
            api_key: Some("test-key".to_string()),
            ..Config::default()
        };
        let model = create_model(Some(config)).await.unwrap();
        assert_eq!(model.name(), "Gemini");
    }

    #[tokio::test]
    async fn test_create_model_accepts_concrete_gemini_variant() {
        let config = Config {
            api_key: Some("test-key".to_string()),
            model_name: Some("gemini-2.5-flash".to_string()),
            ..Config::default()
        };
        let model = create_model(Some(config)).await.unwrap();
        assert_eq!(model.name(), "Gemini");
    }

    #[tokio::test]
    async fn test_create_model_rejects_unknown_name() {
        let config = Config {
            model_name: Some("gpt-oss".to_string()),
            ..Config::default()
        };
        assert!(create_model(Some(config)).await.is_err());
    }

    #[tokio::test]
    async fn test_create_dummy_model() {
        let config = Config {
            model_name: Some("dummy".to_string()),
            ..Config::default()
        };
        let model = create_model(Some(config)).await.unwrap();
        assert_eq!(model.name(), "Dummy");
    }
}
