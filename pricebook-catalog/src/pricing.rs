use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;

use crate::product::PriceSource;

/// Prices orders against a price source
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Total price of an order, summed left to right.
    ///
    /// An empty order is free. The first item missing from `source` fails
    /// the whole order; no partial total is returned.
    pub fn price<S, P>(&self, order: &[S], source: &P) -> Result<f64, PricingError>
    where
        S: AsRef<str>,
        P: PriceSource + ?Sized,
    {
        let mut total = 0.0;

        for item in order {
            let item = item.as_ref();
            let price = source.price_of(item)
                .ok_or_else(|| PricingError::ItemNotFound(item.to_string()))?;
            total += price;
        }

        Ok(total)
    }
}

/// How an order is reduced to a cache key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureScheme {
    /// Sorted item names kept as a list. Distinct orders never share a key.
    #[default]
    Structural,
    /// Sorted item names joined without a separator, so `["ab"]` and
    /// `["a", "b"]` share a key.
    Concatenated,
}

/// Order-insensitive cache key for an order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderSignature(Vec<String>);

impl OrderSignature {
    pub fn new<S: AsRef<str>>(order: &[S], scheme: SignatureScheme) -> Self {
        let mut items: Vec<String> = order.iter().map(|item| item.as_ref().to_string()).collect();
        items.sort();

        match scheme {
            SignatureScheme::Structural => Self(items),
            SignatureScheme::Concatenated => Self(vec![items.concat()]),
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for OrderSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// A memoized order total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub total: f64,
    pub computed_at: DateTime<Utc>,
}

/// Cache usage counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Misses whose pricing failed and were therefore not stored
    pub failures: u64,
}

/// Memoizing wrapper around [`PricingEngine`].
///
/// Entries are never evicted and are not invalidated when the catalog
/// changes; call [`PricingCache::clear`] after editing prices.
#[derive(Debug, Default)]
pub struct PricingCache {
    engine: PricingEngine,
    scheme: SignatureScheme,
    entries: HashMap<OrderSignature, CacheEntry>,
    stats: CacheStats,
}

impl PricingCache {
    pub fn new(scheme: SignatureScheme) -> Self {
        Self {
            engine: PricingEngine::new(),
            scheme,
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Price an order, reusing a stored total when the same set of items
    /// was priced before.
    pub fn price<S, P>(&mut self, order: &[S], source: &P) -> Result<f64, PricingError>
    where
        S: AsRef<str>,
        P: PriceSource + ?Sized,
    {
        let signature = OrderSignature::new(order, self.scheme);

        if let Some(entry) = self.entries.get(&signature) {
            self.stats.hits += 1;
            tracing::debug!("Pricing cache hit for {}: {}", signature, entry.total);
            return Ok(entry.total);
        }

        self.stats.misses += 1;
        match self.engine.price(order, source) {
            Ok(total) => {
                tracing::debug!("Pricing cache miss for {}, stored {}", signature, total);
                self.entries.insert(signature, CacheEntry {
                    total,
                    computed_at: Utc::now(),
                });
                Ok(total)
            }
            Err(e) => {
                self.stats.failures += 1;
                tracing::debug!("Pricing failed for {}: {}", signature, e);
                Err(e)
            }
        }
    }

    pub fn get(&self, signature: &OrderSignature) -> Option<f64> {
        self.entries.get(signature).map(|entry| entry.total)
    }

    pub fn entry(&self, signature: &OrderSignature) -> Option<&CacheEntry> {
        self.entries.get(signature)
    }

    pub fn contains(&self, signature: &OrderSignature) -> bool {
        self.entries.contains_key(signature)
    }

    /// Drop every stored total
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

/// Pricing-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Item not found in catalog: {0}")]
    ItemNotFound(String),
}
