use clap::Parser;
use pricebook_cli::{run, Cli};
use pricebook_store::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pricebook=info,pricebook_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::load_from(&cli.config_dir)?;
    tracing::info!(
        "Loaded config from {} (cache key scheme {:?})",
        cli.config_dir.display(),
        config.cache.key_scheme
    );

    let stdout = std::io::stdout();
    run(&cli.command, &config, &mut stdout.lock())
}
