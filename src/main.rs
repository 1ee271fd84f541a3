// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use patent_gauge::{
    sanitize_patent_number, utils::logging, Config, DocumentLoader, FeatureVector, PatentPipeline,
    PatentRecord,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "patent_gauge")]
#[command(version = "0.1.0")]
#[command(about = "Feature extraction and usefulness scoring for Google Patents pages", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a patent page and predict its usefulness
    Predict {
        /// Patent number, e.g. US7948209B2 or WO2015120197A1
        patent_number: String,
    },

    /// Fetch a patent page and print the extracted fields
    Extract {
        patent_number: String,

        #[arg(long)]
        json: bool,
    },

    /// Load the model artifacts and cross-check their shapes
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logger(cli.color, cli.verbose);

    info!("Patent Gauge");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Predict { patent_number } => {
            cmd_predict(&config, &patent_number).await?;
        }
        Commands::Extract {
            patent_number,
            json,
        } => {
            cmd_extract(&config, &patent_number, json).await?;
        }
        Commands::Verify => {
            cmd_verify(&config)?;
        }
    }

    Ok(())
}

async fn cmd_predict(config: &Config, patent_number: &str) -> Result<()> {
    let pipeline = PatentPipeline::from_config(config).context("Failed to build pipeline")?;

    let prediction = pipeline
        .analyze(patent_number)
        .await
        .context("Prediction failed")?;

    println!();
    println!("Patent:  {}", prediction.patent_number);
    println!("Title:   {}", prediction.title);
    println!("P(useful): {:.4}", prediction.probability_useful);

    let verdict = if prediction.useful {
        logging::format_useful("likely useful")
    } else {
        logging::format_not_useful("likely not useful")
    };
    println!("Verdict: {}", verdict);

    Ok(())
}

async fn cmd_extract(config: &Config, patent_number: &str, json: bool) -> Result<()> {
    // Extraction needs no model artifacts, only the page.
    let patent = sanitize_patent_number(patent_number).context("Invalid patent number")?;
    let loader = DocumentLoader::new(&config.scrape).context("Failed to build loader")?;
    let doc = loader.load(&patent).await.context("Fetch failed")?;
    let record = PatentRecord::from_document(&doc, patent.layout);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!();
    println!("Title:                 {}", record.title);
    println!("Classification:        {}", record.classification);
    println!("Applications:          {}", record.num_applications);
    println!("Patent citations:      {}", record.patent_citations);
    println!("Non-patent citations:  {}", record.non_patent_citations);
    println!("Claims:                {}", record.num_claims);
    println!("Similar prior art:     {}", record.num_similar_prior_art);
    println!("Inventors:             {}", record.num_inventors);
    println!("Fee payments:          {}", record.fee_payments);
    if let Some(assignee) = &record.assignee {
        println!("Assignee:              {}", assignee);
    }
    if let Some(abstract_text) = &record.abstract_text {
        println!();
        println!("Abstract: {}", abstract_text);
    }

    Ok(())
}

fn cmd_verify(config: &Config) -> Result<()> {
    info!("Verifying model artifacts");

    let pipeline = PatentPipeline::from_config(config).context("Failed to load artifacts")?;
    pipeline
        .verify_artifacts()
        .context("Artifact shapes are inconsistent")?;

    println!(
        "{}",
        logging::format_info(&format!(
            "artifacts consistent: {} vocabulary entries, embedding dim {}, feature length {}",
            pipeline.embedding_model().vocabulary_size(),
            pipeline.embedding_model().dimension(),
            FeatureVector::LEN
        ))
    );

    Ok(())
}
