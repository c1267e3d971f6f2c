use anyhow::{bail, Context};
use clap::Parser;
use nc_pipeline::classifier::FixedClassifier;
use nc_pipeline::normalizer::TextNormalizer;
use nc_pipeline::stopwords::StopwordSet;
use nc_pipeline::vectorizer::{TfidfVectorizer, VectorizerArtifact};
use nc_pipeline::{Pipeline, PipelineConfig};
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "newscheck")]
#[command(about = "Classify a news article as real or fake")]
#[command(version)]
struct Cli {
    /// Path to the trained classifier artifact
    #[arg(long, default_value = "fake_news_model.json")]
    model: PathBuf,

    /// Path to the fitted tf-idf vectorizer artifact
    #[arg(long, default_value = "tfidf_vectorizer.json")]
    vectorizer: PathBuf,

    /// Optional newline-delimited stopword list; bundled English list by default
    #[arg(long)]
    stopwords: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Classify one article and print the verdict
    Predict {
        /// Article text; reads stdin when neither this nor --file is given
        text: Option<String>,

        /// Read the article from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Serve the prediction API over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        listen: String,

        /// Run with a fixed demo classifier instead of loading artifacts
        #[arg(long)]
        demo: bool,
    },
}

fn load_pipeline(cli: &Cli) -> anyhow::Result<Pipeline> {
    let pipeline = Pipeline::load(&PipelineConfig {
        model_path: cli.model.clone(),
        vectorizer_path: cli.vectorizer.clone(),
        stopwords_path: cli.stopwords.clone(),
    })?;
    Ok(pipeline)
}

/// Tiny fixed pipeline for `serve --demo`: two-term vocabulary and a
/// classifier that always answers FAKE at 9% real confidence.
fn demo_pipeline() -> anyhow::Result<Pipeline> {
    let vectorizer = TfidfVectorizer::from_artifact(VectorizerArtifact {
        vocabulary: HashMap::from([("moon".to_string(), 0), ("cheese".to_string(), 1)]),
        idf: vec![1.0, 1.0],
    })?;
    let pipeline = Pipeline::new(
        TextNormalizer::new(StopwordSet::bundled()),
        vectorizer,
        Arc::new(FixedClassifier::new(0, [0.91, 0.09], 2)),
    )?;
    Ok(pipeline)
}

fn read_article(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read article from {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("cannot read article from stdin")?;
    Ok(buffer)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Predict { text, file } => {
            let article = read_article(text.clone(), file.clone())?;
            if article.trim().is_empty() {
                bail!("article text is empty; nothing to classify");
            }

            let pipeline = load_pipeline(&cli)?;
            let verdict = pipeline.analyze(&article)?;

            println!("{}", verdict.label);
            println!("Confidence (real): {:.2}%", verdict.confidence_real_percent);
        }
        Commands::Serve { listen, demo } => {
            let pipeline = if *demo {
                info!("Running in demo mode with a fixed classifier");
                demo_pipeline()?
            } else {
                load_pipeline(&cli)?
            };

            let state = nc_web::AppState::new(Arc::new(pipeline));
            let listener = tokio::net::TcpListener::bind(listen)
                .await
                .with_context(|| format!("cannot bind {}", listen))?;
            info!("Listening on {}", listen);
            nc_web::serve(state, listener).await?;
        }
    }

    Ok(())
}
