use crate::app_config::Config;
use pricebook_accounts::{Account, AccountError, AccountRegistry};
use pricebook_catalog::{Catalog, CatalogError};

/// Build a catalog from the configured product table
pub fn seed_catalog(config: &Config) -> Result<Catalog, SeedError> {
    let mut catalog = Catalog::new();

    for (name, price) in &config.catalog.products {
        catalog.add_product(name, *price)?;
    }

    tracing::info!("Seeded catalog with {} products", catalog.len());
    Ok(catalog)
}

/// Build an account registry from the configured accounts
pub fn seed_accounts(config: &Config) -> Result<AccountRegistry, SeedError> {
    let mut registry = AccountRegistry::new();

    for (login, entry) in &config.accounts {
        let owner = entry.owner.clone().unwrap_or_else(|| login.clone());
        registry.add_account(login, &Account::new(owner, entry.balance))?;
    }

    tracing::info!("Seeded registry with {} accounts", registry.len());
    Ok(registry)
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Invalid catalog seed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid account seed: {0}")]
    Account(#[from] AccountError),
}
