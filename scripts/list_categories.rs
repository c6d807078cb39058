use boardgame_catalog::{
    atlas::CategoryFetcher, config::Settings, global::Global, types::FetchOutcome,
};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let config = Settings::new()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.logging.level))
        .with(fmt_layer)
        .init();

    let global = Global::init(config)?;

    let outcome = CategoryFetcher::new(&global)
        .try_fetch_all_categories()
        .map(|mut categories| {
            categories.sort_by(|a, b| a.name.cmp(&b.name));
            categories
        });

    match outcome {
        FetchOutcome::Fetched(categories) => {
            for category in &categories {
                println!("{}\t{}", category.id, category.name);
            }
            tracing::info!(count = categories.len(), "listed categories");
        }
        FetchOutcome::Empty => tracing::warn!("upstream returned no categories"),
        FetchOutcome::Failed(e) => return Err(e.into()),
    }

    Ok(())
}
