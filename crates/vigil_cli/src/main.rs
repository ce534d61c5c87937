//! Vigil CLI
//!
//! Inspect a theme file and resolve component styles from the shell:
//!
//! ```text
//! vigil theme --config ./vigil.toml
//! vigil resolve button primary --size lg
//! vigil matrix
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vigil_theme::{ComponentKind, Density, Size, Variant};

#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(about = "Theme inspector for the Vigil admin console")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the active theme settings
    Theme {
        /// Theme file or directory holding vigil.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a vigil.toml with the default theme
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Resolve one component style under the active theme
    Resolve {
        /// Component kind (button, badge, card, input, select, modal)
        kind: ComponentKind,

        /// Variant id (primary, danger, ...)
        variant: Variant,

        #[arg(long, default_value = "md")]
        size: Size,

        /// Override the theme density for this request
        #[arg(long)]
        density: Option<Density>,

        #[arg(long)]
        disabled: bool,

        #[arg(long)]
        hoverable: bool,

        #[arg(long)]
        leading_icon: bool,

        /// Theme file or directory holding vigil.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Resolve every declared component variant under every theme
    Matrix,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Theme { config } => {
            let settings = commands::load_settings(config.as_deref())?;
            print!("{}", commands::describe_theme(&settings));
        }
        Command::Init { dir, force } => {
            let path = commands::init_config(&dir, force)?;
            tracing::info!(path = %path.display(), "wrote default theme");
        }
        Command::Resolve {
            kind,
            variant,
            size,
            density,
            disabled,
            hoverable,
            leading_icon,
            config,
        } => {
            let settings = commands::load_settings(config.as_deref())?;
            let mut request = vigil_theme::StyleRequest::new(kind, variant)
                .size(size)
                .disabled(disabled)
                .hoverable(hoverable)
                .leading_icon(leading_icon);
            if let Some(density) = density {
                request = request.density(density);
            }
            print!("{}", commands::describe_style(&settings, &request)?);
        }
        Command::Matrix => {
            let report = commands::matrix();
            println!(
                "{} themes, {} resolutions, {} failures",
                report.themes,
                report.resolved,
                report.failures.len()
            );
            for failure in &report.failures {
                println!("  {failure}");
            }
            if !report.failures.is_empty() {
                anyhow::bail!("{} style resolutions failed", report.failures.len());
            }
        }
    }

    Ok(())
}
