//! The product catalogue.
//!
//! A catalogue is an ordered, immutable list of products, built once at
//! startup from a JSON document and shared by reference afterwards.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Category, Price, ProductId};

/// Errors raised while building a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("Failed to parse catalogue: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),
    #[error("Negative price for product {0}")]
    NegativePrice(ProductId),
}

/// A single catalogue item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Zero means the item is a free download.
    pub price: Price,
    /// Image path relative to the asset root.
    pub image: String,
    /// Downloadable file path relative to the asset root.
    pub file: String,
    /// Grouping key on the catalogue page.
    pub category: Category,
}

impl Product {
    /// Whether the product is offered as a free download instead of a purchase.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price.is_free()
    }
}

/// On-disk shape of a product; prices are plain USD amounts.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    description: String,
    price: Decimal,
    image: String,
    file: String,
    category: Category,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price: Price::new(record.price),
            image: record.image,
            file: record.file,
            category: record.category,
        }
    }
}

/// The immutable product list.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: Vec<Product>,
}

impl Catalogue {
    /// Build a catalogue, validating that ids are unique and prices non-negative.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::DuplicateId` or `CatalogueError::NegativePrice`
    /// for the first offending product.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.price.amount < Decimal::ZERO {
                return Err(CatalogueError::NegativePrice(product.id.clone()));
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogueError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalogue from a JSON array of product records.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        Self::new(records.into_iter().map(Product::from).collect())
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// All products in catalogue order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Group products by category.
    ///
    /// Categories appear in first-seen order; products keep catalogue order
    /// within their category.
    #[must_use]
    pub fn by_category(&self) -> Vec<(&Category, Vec<&Product>)> {
        let mut groups: Vec<(&Category, Vec<&Product>)> = Vec::new();
        for product in &self.products {
            match groups.iter_mut().find(|(c, _)| *c == &product.category) {
                Some((_, members)) => members.push(product),
                None => groups.push((&product.category, vec![product])),
            }
        }
        groups
    }
}
