use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use listmatch_core::ValueObject;

/// A canonical catalog product.
///
/// `product_name` is keyword-delimited by `_` or `-` (e.g. `Canon_PowerShot_A20`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    manufacturer: String,
    model: String,
    product_name: String,
    #[serde(rename = "announced-date")]
    announced_date: String,
    #[serde(default)]
    family: Option<String>,
}

impl Product {
    pub fn new(
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        product_name: impl Into<String>,
        announced_date: impl Into<String>,
        family: Option<String>,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            product_name: product_name.into(),
            announced_date: announced_date.into(),
            family,
        }
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Opaque announcement date, kept as supplied by the catalog feed.
    pub fn announced_date(&self) -> &str {
        &self.announced_date
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Name keywords in order: `product_name` split on `_` and `-`, uppercased.
    ///
    /// Empty segments are kept (`"A__B"` yields `["A", "", "B"]`).
    pub fn keywords(&self) -> Vec<String> {
        self.product_name
            .split(['_', '-'])
            .map(str::to_uppercase)
            .collect()
    }
}

impl ValueObject for Product {}

/// A free-text marketplace offer awaiting reconciliation.
///
/// `manufacturer` is self-reported by the listing source and is not trusted for
/// matching; the title is what gets resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    title: String,
    manufacturer: String,
    currency: String,
    price: JsonValue,
}

impl Listing {
    pub fn new(
        title: impl Into<String>,
        manufacturer: impl Into<String>,
        currency: impl Into<String>,
        price: impl Into<JsonValue>,
    ) -> Self {
        Self {
            title: title.into(),
            manufacturer: manufacturer.into(),
            currency: currency.into(),
            price: price.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Price as supplied (number or string); never inspected by the matcher.
    pub fn price(&self) -> &JsonValue {
        &self.price
    }
}

impl ValueObject for Listing {}

/// Flat snapshot of a matched product, detached from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_name: String,
    pub manufacturer: String,
    pub model: String,
    pub announced_date: String,
    pub family: Option<String>,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            manufacturer: product.manufacturer.clone(),
            model: product.model.clone(),
            announced_date: product.announced_date.clone(),
            family: product.family.clone(),
        }
    }
}

impl ValueObject for ProductRecord {}
