use anyhow::{Context, Result};
use clap::Parser;
use filmstats::Catalog;
use filmstats::config::{Cli, Command};
use filmstats::server::{self, AppState};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    info!(
        threads = polars_core::POOL.current_num_threads(),
        "polars thread pool"
    );

    let paths = cli.data.paths();
    let db = Catalog::load(&paths)
        .with_context(|| format!("loading dataset from {}", cli.data.data_dir.display()))?;

    match cli.command {
        Command::Serve { bind } => server::serve(AppState::new(db), bind)
            .await
            .with_context(|| format!("serving on {bind}"))?,
        Command::Query { query, argument } => println!("{}", query.run(&db, &argument)),
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries query output in `query` mode
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
