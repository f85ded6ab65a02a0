use listmatch_cli::config::log_format_from_env;
use listmatch_cli::{run, Config};

fn main() -> anyhow::Result<()> {
    listmatch_observability::init(log_format_from_env()?);
    let config = Config::from_env()?;

    let stats = run(&config)?;
    tracing::info!(
        listings = stats.listings,
        matched = stats.matched,
        "done"
    );
    Ok(())
}
