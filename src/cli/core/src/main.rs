/* src/cli/core/src/main.rs */

mod build;
mod check;
mod config;
mod load;
mod routes;
mod serve;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{CanisConfig, find_canis_config, load_canis_config};

#[derive(Parser)]
#[command(name = "canis", about = "Canis Vet site tooling", version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Validate catalogs and templates without writing anything
  Check {
    /// Path to canis.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Render every page into the output directory
  Build {
    /// Path to canis.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// List every (locale, page) pair with its canonical path
  Routes {
    /// Path to canis.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Serve pages and public assets over HTTP
  Serve {
    /// Path to canis.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Port to listen on (defaults to serve.port)
    #[arg(short, long)]
    port: Option<u16>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, CanisConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_canis_config(&cwd)?
    }
  };
  let config = load_canis_config(&path)?;
  Ok((path, config))
}

fn base_dir(config_path: &Path) -> &Path {
  config_path.parent().unwrap_or_else(|| Path::new("."))
}

async fn run(command: Command) -> Result<()> {
  match command {
    Command::Check { config } => {
      let (path, cfg) = resolve_config(config)?;
      check::run_check(&cfg, base_dir(&path))
    }
    Command::Build { config } => {
      let (path, cfg) = resolve_config(config)?;
      build::run_build(&cfg, base_dir(&path)).await
    }
    Command::Routes { config } => {
      let (path, cfg) = resolve_config(config)?;
      routes::run_routes(&cfg, base_dir(&path))
    }
    Command::Serve { config, port } => {
      let (path, cfg) = resolve_config(config)?;
      serve::run_serve(&cfg, base_dir(&path), port).await
    }
  }
}

#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  if let Err(e) = run(cli.command).await {
    ui::fail(&format!("{e:#}"));
    std::process::exit(1);
  }
}
