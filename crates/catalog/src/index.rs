//! Per-manufacturer catalog index.
//!
//! Built once through [`CatalogBuilder`]; the resulting [`CatalogIndex`] only
//! exposes read-only views, so nothing can be inserted while lookups are running.

use std::collections::HashMap;

use crate::model::Product;

/// Accumulates products in catalog order.
///
/// No deduplication and no validation: every added product is kept.
#[derive(Debug, Default, Clone)]
pub struct CatalogBuilder {
    products: Vec<Product>,
    by_manufacturer: HashMap<String, Vec<usize>>,
    manufacturers: Vec<String>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `product`, filing it under its own `manufacturer` key.
    pub fn add(&mut self, product: Product) -> &mut Self {
        let position = self.products.len();
        match self.by_manufacturer.get_mut(product.manufacturer()) {
            Some(bucket) => bucket.push(position),
            None => {
                self.manufacturers.push(product.manufacturer().to_string());
                self.by_manufacturer
                    .insert(product.manufacturer().to_string(), vec![position]);
            }
        }
        self.products.push(product);
        self
    }

    pub fn build(self) -> CatalogIndex {
        tracing::debug!(
            products = self.products.len(),
            manufacturers = self.manufacturers.len(),
            "catalog index built"
        );
        CatalogIndex {
            products: self.products,
            by_manufacturer: self.by_manufacturer,
            manufacturers: self.manufacturers,
        }
    }
}

impl Extend<Product> for CatalogBuilder {
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        for product in iter {
            self.add(product);
        }
    }
}

/// Read-only catalog with manufacturer lookup.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    products: Vec<Product>,
    by_manufacturer: HashMap<String, Vec<usize>>,
    manufacturers: Vec<String>,
}

impl CatalogIndex {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Every product, in the order it was added.
    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    /// Products filed under exactly `manufacturer` (no case folding), in
    /// insertion order. Unknown manufacturers yield an empty sequence.
    pub fn candidates_for(&self, manufacturer: &str) -> Vec<&Product> {
        self.by_manufacturer
            .get(manufacturer)
            .map(|positions| positions.iter().map(|&i| &self.products[i]).collect())
            .unwrap_or_default()
    }

    /// Distinct manufacturer keys, in first-seen order.
    pub fn manufacturers(&self) -> &[String] {
        &self.manufacturers
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for CatalogIndex {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut builder = CatalogBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}
