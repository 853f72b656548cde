pub mod product;
pub mod pricing;

pub use product::{Catalog, CatalogError, PriceSource, Product};
pub use pricing::{
    CacheEntry, CacheStats, OrderSignature, PricingCache, PricingEngine, PricingError,
    SignatureScheme,
};
