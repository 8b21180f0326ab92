use clap::{Parser, Subcommand};
use folio_gallery::{config, manifest, output, page::Page, render, script, surface::DocumentState};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio-gallery")]
#[command(about = "Headless driver for the portfolio gallery and lightbox")]
#[command(long_about = "\
Headless driver for the portfolio gallery and lightbox

The page is described by a gallery manifest (JSON):

  {
    \"filters\": [\"all\", \"portrait\", \"street\"],
    \"items\": [
      { \"tag\": \"portrait\", \"src\": \"img/p1.jpg\", \"alt\": \"Sara\", \"caption\": \"Studio\" }
    ],
    \"concepts\": [ { \"id\": \"light\", \"label\": \"Light\", \"slides\": [] } ]
  }

Event scripts hold one event per line:

  filter street      click 3      next / prev      close / backdrop / content
  key Escape         tab light    slide next / slide prev / slide 2

Set RUST_LOG=debug to log every state transition.")]
#[command(version)]
struct Cli {
    /// Viewer configuration file (stock defaults when absent)
    #[arg(long, default_value = "folio.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a gallery manifest and list its contents
    Check {
        /// Gallery manifest (JSON)
        manifest: PathBuf,
    },
    /// Replay an event script against a gallery and print the trace
    Replay {
        /// Gallery manifest (JSON)
        manifest: PathBuf,
        /// Event script, one event per line
        script: PathBuf,
        /// Write an HTML snapshot of the final state
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Print a stock folio.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { manifest } => {
            let manifest = manifest::load_manifest(&manifest)?;
            output::print_check_output(&manifest);
            println!("==> Manifest is valid");
        }
        Command::Replay {
            manifest,
            script,
            html,
        } => {
            let viewer_config = config::load_config(&cli.config)?;
            let bound = manifest::load_manifest(&manifest)?;
            let events = script::load_script(&script)?;

            let mut page = Page::new(&bound, &viewer_config);
            let mut doc = DocumentState::new(&bound);
            let steps = script::replay(&mut page, &mut doc, &events);
            output::print_replay_output(&steps, &doc);

            if let Some(html_path) = html {
                let title = manifest
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "gallery".to_string());
                let markup = render::render_document(&title, &bound, &doc);
                std::fs::write(&html_path, markup.into_string())?;
                println!("==> Snapshot written to {}", html_path.display());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
