use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use nd_core::Result;
use nd_inference::{create_model, Config};

mod pipeline;

use pipeline::DigestPipeline;

const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input text file with articles separated by `===` lines
    #[arg(long, default_value = "raw_articles.txt")]
    input: PathBuf,
    /// Where to write the selection JSON
    #[arg(long, default_value = "output.json")]
    output: PathBuf,
    #[arg(long, default_value = "gemini", help = "Model to use for inference. Available models: gemini (default), dummy, or a concrete gemini-* variant")]
    model: String,
    /// Override the model API base URL
    #[arg(long)]
    model_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = Config {
        api_key: std::env::var(API_KEY_ENV).ok(),
        model_name: Some(cli.model.clone()),
        model_url: cli.model_url.clone(),
    };
    let model = create_model(Some(config)).await?;
    info!("🧠 Inference model initialized successfully (using {})", model.name());

    let pipeline = DigestPipeline::new(model);
    pipeline.run(&cli.input, &cli.output).await?;

    Ok(())
}
