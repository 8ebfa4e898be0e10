use anyhow::Context;
use clap::Parser;
use showcase::config::Config;
use showcase::logging::init_tracing;
use showcase::shutdown::ShutdownHandle;
use showcase::ui::app::App;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Browse a small marketing site in the terminal")]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/showcase/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file (default: <cache dir>/showcase/showcase.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Number of catalogue pages; extra pages get placeholder titles
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pages: Option<u16>,

    /// Keep the catalogue still until a page is picked by hand
    #[arg(long)]
    no_auto_advance: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;

    if let Some(pages) = cli.pages {
        config.carousel.resize_pages(usize::from(pages));
    }
    if cli.no_auto_advance {
        config.carousel.auto_advance = false;
    }

    let log_path = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(Config::default_log_path);
    init_tracing(&log_path, &config.logging.level)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    info!(
        pages = config.carousel.pages.len(),
        auto_advance = config.carousel.auto_advance,
        "showcase: starting"
    );

    let shutdown = ShutdownHandle::new();
    if let Err(err) = shutdown.install_signal_handlers() {
        warn!(error = %err, "showcase: signal handlers not installed");
    }

    let app = App::new(config).context("failed to build page")?;
    showcase::ui::run(app, shutdown).context("terminal UI failed")?;
    info!("showcase: exited");
    Ok(())
}
