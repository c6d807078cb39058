use std::io::Write as _;
use std::num::NonZeroU32;

use anyhow::Context as _;
use boardgame_catalog::atlas::{CatalogFetcher, CategoryFetcher};
use boardgame_catalog::catalog::{self, GameStore, MemoryStore};
use boardgame_catalog::config::{QueryConfig, Settings};
use boardgame_catalog::global::Global;
use boardgame_catalog::types::CatalogEntry;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Settings::new().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy(&config.logging.level),
        )
        .init();

    tracing::info!("starting board game catalog ingestion");

    let global = Global::init(config)?;
    let count = NonZeroU32::new(global.config.catalog.game_count)
        .context("catalog.game_count must be greater than zero")?;

    let categories = CategoryFetcher::new(&global)
        .fetch_all_categories()
        .context("fetching categories")?;
    let games = CatalogFetcher::new(&global)
        .fetch_games(count)
        .context("fetching games")?;

    let mut store = MemoryStore::default();
    store.save_all(catalog::resolve(&games, &categories));

    let selected = select(&store, &global.config.query);

    tracing::info!(
        categories = categories.len(),
        games = store.len(),
        selected = selected.len(),
        "catalog ready"
    );

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &selected)?;
    writeln!(stdout)?;

    Ok(())
}

fn select<'a>(store: &'a MemoryStore, query: &QueryConfig) -> Vec<&'a CatalogEntry> {
    let mut selected = match (query.max_playtime, query.category.as_deref()) {
        (Some(minutes), Some(category)) => {
            store.find_by_play_time_at_most_and_category(minutes, category)
        }
        (Some(minutes), None) => store.find_by_play_time_at_most(minutes),
        (None, Some(category)) => store.find_by_category(category),
        (None, None) => store.all(),
    };

    if let Some((min, max)) = query.player_range() {
        let fitting = store.find_by_player_count(min, max);
        selected.retain(|entry| fitting.iter().any(|f| std::ptr::eq(*f, *entry)));
    }

    selected
}
