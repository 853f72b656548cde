use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single priced entry in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

/// Read-only price lookup used by the pricing engine
pub trait PriceSource {
    /// Price of the named product, if it is listed
    fn price_of(&self, name: &str) -> Option<f64>;
}

/// In-memory product catalog keyed by product name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    products: HashMap<String, f64>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// Register a new product
    pub fn add_product(&mut self, name: &str, price: f64) -> Result<(), CatalogError> {
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        validate_price(name, price)?;

        if self.products.contains_key(name) {
            return Err(CatalogError::AlreadyExists(name.to_string()));
        }

        self.products.insert(name.to_string(), price);
        Ok(())
    }

    /// Overwrite the price of an existing product
    pub fn change_price(&mut self, name: &str, price: f64) -> Result<(), CatalogError> {
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        validate_price(name, price)?;

        let current = self.products.get_mut(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        *current = price;

        Ok(())
    }

    /// Move a product's price under a new name.
    ///
    /// An existing product called `new_name` is replaced.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), CatalogError> {
        if old_name.is_empty() || new_name.is_empty() {
            return Err(CatalogError::EmptyName);
        }

        let price = self.products.remove(old_name)
            .ok_or_else(|| CatalogError::NotFound(old_name.to_string()))?;

        if let Some(replaced) = self.products.insert(new_name.to_string(), price) {
            tracing::warn!(
                "Rename {} -> {} replaced existing product priced {}",
                old_name, new_name, replaced
            );
        }

        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.products.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products ordered by name
    pub fn products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.iter()
            .map(|(name, price)| Product { name: name.clone(), price: *price })
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }
}

impl PriceSource for Catalog {
    fn price_of(&self, name: &str) -> Option<f64> {
        self.lookup(name)
    }
}

impl PriceSource for HashMap<String, f64> {
    fn price_of(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

fn validate_price(name: &str, price: f64) -> Result<(), CatalogError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::InvalidPrice {
            name: name.to_string(),
            price,
        });
    }
    Ok(())
}

/// Catalog-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Product name must not be empty")]
    EmptyName,

    #[error("Product already exists: {0}")]
    AlreadyExists(String),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid price {price} for product {name}")]
    InvalidPrice {
        name: String,
        price: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn shop() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_product("a", 1.0).unwrap();
        catalog.add_product("b", 10.0).unwrap();
        catalog
    }

    #[test]
    fn test_add_product() {
        let mut catalog = shop();

        catalog.add_product("xxx", 100.0).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.lookup("xxx"), Some(100.0));
    }

    #[rstest]
    #[case::empty_name("", 10.0, CatalogError::EmptyName)]
    #[case::empty_name_zero_price("", 0.0, CatalogError::EmptyName)]
    #[case::already_exists("a", 1.0, CatalogError::AlreadyExists("a".to_string()))]
    fn test_add_product_rejected(#[case] name: &str, #[case] price: f64, #[case] expected: CatalogError) {
        let mut catalog = shop();

        let err = catalog.add_product(name, price).unwrap_err();

        assert_eq!(err, expected);
        assert_eq!(catalog, shop());
    }

    #[rstest]
    #[case::negative(-1.0)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn test_invalid_price_rejected(#[case] price: f64) {
        let mut catalog = shop();

        assert!(matches!(
            catalog.add_product("c", price),
            Err(CatalogError::InvalidPrice { .. })
        ));
        assert!(matches!(
            catalog.change_price("a", price),
            Err(CatalogError::InvalidPrice { .. })
        ));
        assert_eq!(catalog, shop());
    }

    #[test]
    fn test_change_price() {
        let mut catalog = shop();

        catalog.change_price("a", 10.0).unwrap();

        assert_eq!(catalog.lookup("a"), Some(10.0));
        assert_eq!(catalog.lookup("b"), Some(10.0));
    }

    #[test]
    fn test_change_price_errors() {
        let mut catalog = shop();

        assert_eq!(catalog.change_price("", 10.0), Err(CatalogError::EmptyName));
        assert_eq!(
            catalog.change_price("xxx", 101.0),
            Err(CatalogError::NotFound("xxx".to_string()))
        );
        assert_eq!(catalog, shop());
    }

    #[test]
    fn test_rename() {
        let mut catalog = shop();

        catalog.rename("a", "aa").unwrap();

        assert_eq!(catalog.lookup("a"), None);
        assert_eq!(catalog.lookup("aa"), Some(1.0));
        assert_eq!(catalog.len(), 2);
    }

    #[rstest]
    #[case::empty_new("a", "", CatalogError::EmptyName)]
    #[case::empty_old("", "aa", CatalogError::EmptyName)]
    #[case::missing("xxx", "aa", CatalogError::NotFound("xxx".to_string()))]
    fn test_rename_rejected(#[case] old: &str, #[case] new: &str, #[case] expected: CatalogError) {
        let mut catalog = shop();

        assert_eq!(catalog.rename(old, new), Err(expected));
        assert_eq!(catalog, shop());
    }

    #[test]
    fn test_rename_overwrites_existing_destination() {
        let mut catalog = shop();

        catalog.rename("a", "b").unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("b"), Some(1.0));
    }

    #[test]
    fn test_catalog_serializes_price_table() {
        let json = serde_json::to_value(shop()).unwrap();

        assert_eq!(json, serde_json::json!({ "products": { "a": 1.0, "b": 10.0 } }));
    }

    #[test]
    fn test_products_sorted_by_name() {
        let mut catalog = shop();
        catalog.add_product("0", 5.0).unwrap();

        let names: Vec<String> = catalog.products().into_iter().map(|p| p.name).collect();

        assert_eq!(names, vec!["0", "a", "b"]);
    }
}
