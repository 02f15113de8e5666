#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]
use std::path::PathBuf;

use clap::Parser;

use calendar::loader;
use config::{Config, InputKind};
use logger::LogExt;

mod calendar;
mod cli;
mod config;
mod logger;
mod views;

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = cli::Cli::parse();
    let config = config::init(&cli).log_error("Could not load the configuration")?;

    let path = run(&config)?;
    log::info!("saved {}", path.display());

    Ok(())
}

fn run(config: &Config) -> anyhow::Result<PathBuf> {
    let loaded = match config.input.kind {
        InputKind::Events => loader::load_events(&config.input.path),
        InputKind::Deadlines => loader::load_deadlines(&config.input.path),
    };
    let (events, report) = loaded.log_error("Could not load the input file")?;
    log::info!("{report}");
    log::debug!("{} events on {} days", events.len_events(), events.len_days());

    if events.is_empty() {
        log::warn!("no events found in {}", config.input.path.display());
    }

    let view = views::YearView::new(config.year, config.title(), &events);
    let svg = views::Canvas::new(&config.page)
        .render(&view.shapes())
        .log_error("Could not render the page")?;

    let path = config.output_path();
    views::export::save(&path, &svg).log_error("Could not save the page")?;

    Ok(path)
}
