use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use viva_common::{export_filename, VivaConfig};
use viva_core::{export, logging, SlideRegistry};

#[derive(Parser)]
#[command(name = "viva")]
#[command(about = "Present the ULS reform viva slides in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// JSON deck to present instead of the bundled one
    #[arg(long, global = true)]
    pub deck: Option<PathBuf>,

    /// Configuration file (TOML or JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive full-screen presentation
    Present,
    /// List slide titles
    List,
    /// Print one slide as plain text
    Show {
        /// Slide number, starting at 1
        number: usize,
    },
    /// Write the deck as markdown
    Export {
        /// Output path (defaults to the deck name as a slug)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let mut config = VivaConfig::load(cli.config.as_deref())?;
    if let Some(deck) = &cli.deck {
        config.deck = Some(deck.clone());
    }

    // Only the interactive presenter logs to file; the print commands stay quiet.
    let presenting = matches!(cli.command, None | Some(Commands::Present));
    let _guard = if presenting {
        logging::init_logging(&config.logging, cli.debug)?
    } else {
        None
    };

    let registry = load_registry(config.deck.as_deref()).await?;

    match cli.command {
        Some(Commands::Present) | None => {
            viva_tui::run_presentation(registry, &config).await?;
        }
        Some(Commands::List) => {
            print!("{}", list_slides(&registry));
        }
        Some(Commands::Show { number }) => {
            print!("{}", show_slide(&registry, number)?);
        }
        Some(Commands::Export { output }) => {
            let path = output.unwrap_or_else(|| export_filename(registry.name()));
            export_deck(&registry, &path).await?;
            println!("Slides saved to: {}", path.display());
        }
    }

    Ok(())
}

async fn load_registry(deck: Option<&Path>) -> Result<SlideRegistry> {
    SlideRegistry::load_or_bundled(deck)
        .await
        .with_context(|| match deck {
            Some(path) => format!("can't load deck {}", path.display()),
            None => "bundled deck is invalid".to_string(),
        })
}

fn list_slides(registry: &SlideRegistry) -> String {
    registry
        .iter()
        .map(|(index, slide)| format!("{:>2}. {}\n", index + 1, slide.title))
        .collect()
}

fn show_slide(registry: &SlideRegistry, number: usize) -> Result<String> {
    let index = number
        .checked_sub(1)
        .with_context(|| format!("slide numbers start at 1 (got {number})"))?;
    let slide = registry
        .slide(index)
        .with_context(|| format!("no slide {number}"))?;
    Ok(export::slide_to_text(index, registry.len(), slide))
}

async fn export_deck(registry: &SlideRegistry, path: &Path) -> Result<()> {
    let markdown = export::deck_to_markdown(registry);
    tokio::fs::write(path, markdown)
        .await
        .with_context(|| format!("can't write {}", path.display()))?;
    tracing::info!("exported {} slides to {}", registry.len(), path.display());
    Ok(())
}
