//! # gleam-cli: A CLI for `gleam`
//!
//! Generates a four-panel comic narrative from an article without running the server.

mod provider;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gleam::{
    constants::{ASPECT_RATIOS, DEFAULT_ASPECT_RATIO, DEFAULT_IMAGE_STYLE, IMAGE_STYLES},
    export::{export_file_name, render_markdown},
    ComicPipelineBuilder,
};
use provider::ProviderArgs;
use std::{fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Turn an article (raw text or URL) into a comic narrative
    Generate(GenerateArgs),
    /// List the available image styles and aspect ratios
    Styles,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// The article text, or a URL to fetch it from
    #[arg(long)]
    article: String,
    /// The image style descriptor
    #[arg(long, default_value = DEFAULT_IMAGE_STYLE)]
    style: String,
    /// The aspect ratio, e.g. "1:1" or "16:9"
    #[arg(long, default_value = DEFAULT_ASPECT_RATIO)]
    aspect_ratio: String,
    /// Write the text export here instead of printing JSON.
    /// A directory gets a file named after the title.
    #[arg(long)]
    export: Option<PathBuf>,
    #[command(flatten)]
    provider: ProviderArgs,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable.
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => handle_generate(args).await,
        Commands::Styles => {
            handle_styles();
            Ok(())
        }
    }
}

// --- Command Handlers ---

async fn handle_generate(args: GenerateArgs) -> Result<()> {
    let ai_provider = args.provider.build()?;
    let pipeline = ComicPipelineBuilder::new().ai_provider(ai_provider).build()?;

    let narrative = pipeline
        .run(&args.article, &args.style, &args.aspect_ratio)
        .await?;

    match args.export {
        Some(target) => {
            let path = if target.is_dir() {
                target.join(export_file_name(&narrative.article_title))
            } else {
                target
            };
            fs::write(&path, render_markdown(&narrative))
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            info!("Export written to {}", path.display());
            println!("{}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&narrative)?),
    }
    Ok(())
}

fn handle_styles() {
    println!("Image styles:");
    for style in IMAGE_STYLES {
        println!("  {} : {}", style.name, style.value);
    }
    println!("Aspect ratios:");
    for ratio in ASPECT_RATIOS {
        println!("  {} : {}", ratio.name, ratio.value);
    }
}
