// src/main.rs
//
// Opens the journal, reports what it holds and writes it back.
// Menu and GUI front ends drive the same AppState.

use env_logger::{Builder, Target};
use log::LevelFilter;

use media_journal::{AppState, Config};

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("media_journal", LevelFilter::Info)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = Config::load()?;
    let state = AppState::new(&config);

    let loaded = state.session_service.load();
    println!("{}", loaded);
    if loaded.is_failure() {
        anyhow::bail!("could not open the journal in {}", config.storage.data_dir.display());
    }

    let stats = state.statistics_service.summary()?;
    println!(
        "{} books ({} read), {} movies ({} seen), {} series ({} of {} seasons seen)",
        stats.books.total,
        stats.books.seen,
        stats.movies.total,
        stats.movies.seen,
        stats.series.total,
        stats.seen_seasons,
        stats.total_seasons,
    );

    println!("{}", state.session_service.save());
    Ok(())
}
