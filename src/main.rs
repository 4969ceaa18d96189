use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::args::Args;
use catalog::config::Config;
use catalog::container::Container;
use catalog::logging::init_tracing;
use catalog::navigation::NavStack;
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply_to(&mut config);
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let container = Container::new(&config, runtime.handle().clone());
    let navigator = Arc::new(NavStack::new(config.ui.start_route()));
    tracing::info!(route = %navigator.current(), "Starting catalog");

    catalog::ui::runtime::run(container, navigator, config.ui.tick_rate())
        .context("Terminal UI failed")?;

    runtime.shutdown_background();
    Ok(())
}
