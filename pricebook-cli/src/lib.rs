use anyhow::Context;
use clap::{Parser, Subcommand};
use pricebook_accounts::SortMode;
use pricebook_catalog::PricingCache;
use pricebook_store::{seed_accounts, seed_catalog, Config};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pricebook", about = "Price orders against a product catalog")]
pub struct Cli {
    /// Directory holding default.toml and the optional overrides
    #[arg(long, default_value = "config")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price an order through the cache
    Price {
        /// Product names; none prices an empty order
        items: Vec<String>,

        /// How many times to submit the same order
        #[arg(long, default_value_t = 2)]
        repeat: u32,
    },
    /// List the seeded catalog
    Products,
    /// List the seeded accounts
    Accounts {
        /// name-asc, name-desc or balance-desc
        #[arg(long, default_value = "name-asc")]
        sort: SortMode,
    },
}

pub fn run(command: &Command, config: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::Price { items, repeat } => {
            let catalog = seed_catalog(config)?;
            let mut cache = PricingCache::new(config.cache.key_scheme);

            let mut total = 0.0;
            for _ in 0..(*repeat).max(1) {
                total = cache.price(items.as_slice(), &catalog)
                    .with_context(|| format!("cannot price order {:?}", items))?;
            }

            writeln!(out, "total: {}", total)?;
            writeln!(out, "cache: {}", serde_json::to_string(&cache.stats())?)?;
        }
        Command::Products => {
            let catalog = seed_catalog(config)?;
            for product in catalog.products() {
                writeln!(out, "{}\t{}", product.name, product.price)?;
            }
        }
        Command::Accounts { sort } => {
            let registry = seed_accounts(config)?;
            for row in registry.sorted_view(*sort) {
                writeln!(out, "{}\t{}\t{}", row.login, row.account.owner, row.account.balance)?;
            }
        }
    }

    Ok(())
}
