//! The visitor's cart: an ordered mapping of product id to quantity.
//!
//! The cart keeps entries in insertion order so the cart page lists items in
//! the order they were first added. Quantities are always positive: every
//! operation that would leave a zero or negative quantity removes the entry
//! instead.
//!
//! # Wire format
//!
//! Serialized as a flat JSON object, e.g. `{"advent": 1, "lent": 2}`. On
//! deserialization, non-positive quantities are dropped and a repeated key
//! keeps its first position with the last value.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalogue::{Catalogue, Product};
use crate::types::{Price, ProductId};

/// Ordered product-id → quantity mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<(ProductId, u32)>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Quantity stored for a product, if any.
    #[must_use]
    pub fn quantity(&self, id: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|(line_id, _)| line_id.as_str() == id)
            .map(|(_, quantity)| *quantity)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, u32)> {
        self.lines.iter().map(|(id, quantity)| (id, *quantity))
    }

    /// Total number of items (sum of quantities).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, (_, quantity)| acc.saturating_add(*quantity))
    }

    /// Increment a product's quantity by one, inserting it with quantity 1 if absent.
    ///
    /// Returns the new quantity.
    pub fn increment(&mut self, id: ProductId) -> u32 {
        if let Some((_, quantity)) = self.lines.iter_mut().find(|(line_id, _)| *line_id == id) {
            *quantity = quantity.saturating_add(1);
            return *quantity;
        }
        self.lines.push((id, 1));
        1
    }

    /// Remove a product's entry.
    ///
    /// Returns the quantity it held, or `None` if the product was not in the cart.
    pub fn remove(&mut self, id: &str) -> Option<u32> {
        self.position(id).map(|index| self.lines.remove(index).1)
    }

    /// Set a product's quantity exactly.
    ///
    /// A quantity of zero or less removes the entry. An existing entry keeps
    /// its position.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        match u32::try_from(quantity) {
            Ok(0) => {
                self.remove(id.as_str());
            }
            Ok(quantity) => self.upsert(id, quantity),
            Err(_) if quantity < 0 => {
                self.remove(id.as_str());
            }
            Err(_) => self.upsert(id, u32::MAX),
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Entries whose product exists in the catalogue, paired with that product.
    ///
    /// Orphan entries are skipped.
    pub fn resolve<'a>(
        &'a self,
        catalogue: &'a Catalogue,
    ) -> impl Iterator<Item = (&'a Product, u32)> + 'a {
        self.lines
            .iter()
            .filter_map(|(id, quantity)| catalogue.find(id.as_str()).map(|p| (p, *quantity)))
    }

    /// Sum of `price × quantity` over entries resolvable in the catalogue.
    #[must_use]
    pub fn total(&self, catalogue: &Catalogue) -> Price {
        self.resolve(catalogue)
            .fold(Price::ZERO, |total, (product, quantity)| {
                total.plus(&product.price.times(quantity))
            })
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.lines.iter().position(|(line_id, _)| line_id.as_str() == id)
    }

    fn upsert(&mut self, id: ProductId, quantity: u32) {
        match self.lines.iter_mut().find(|(line_id, _)| *line_id == id) {
            Some((_, stored)) => *stored = quantity,
            None => self.lines.push((id, quantity)),
        }
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lines.len()))?;
        for (id, quantity) in &self.lines {
            map.serialize_entry(id, quantity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CartVisitor)
    }
}

struct CartVisitor;

impl<'de> Visitor<'de> for CartVisitor {
    type Value = Cart;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of product ids to integer quantities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Cart, A::Error> {
        let mut cart = Cart::new();
        while let Some((id, quantity)) = access.next_entry::<ProductId, i64>()? {
            if quantity > i64::from(u32::MAX) {
                return Err(de::Error::custom(format!(
                    "quantity {quantity} for {id} is out of range"
                )));
            }
            cart.set_quantity(id, quantity);
        }
        Ok(cart)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn catalogue() -> Catalogue {
        let product = |id: &str, price: u32| Product {
            id: ProductId::new(id),
            name: id.to_uppercase(),
            description: String::new(),
            price: Price::usd(price),
            image: String::new(),
            file: String::new(),
            category: Category::new("c"),
        };
        Catalogue::new(vec![product("advent", 0), product("lent", 10), product("easter", 15)])
            .unwrap()
    }

    #[test]
    fn test_increment_inserts_then_adds() {
        let mut cart = Cart::new();
        assert_eq!(cart.increment(ProductId::new("lent")), 1);
        assert_eq!(cart.increment(ProductId::new("lent")), 2);
        assert_eq!(cart.quantity("lent"), Some(2));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_set_quantity_non_positive_removes() {
        let mut cart = Cart::new();
        cart.set_quantity(ProductId::new("lent"), 3);
        cart.set_quantity(ProductId::new("lent"), 0);
        assert!(cart.is_empty());

        cart.set_quantity(ProductId::new("easter"), 2);
        cart.set_quantity(ProductId::new("easter"), -4);
        assert!(!cart.contains("easter"));
    }

    #[test]
    fn test_set_quantity_keeps_position() {
        let mut cart = Cart::new();
        cart.increment(ProductId::new("advent"));
        cart.increment(ProductId::new("lent"));
        cart.set_quantity(ProductId::new("advent"), 5);
        let order: Vec<&str> = cart.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, ["advent", "lent"]);
    }

    #[test]
    fn test_remove_absent_returns_none() {
        let mut cart = Cart::new();
        assert_eq!(cart.remove("lent"), None);
        cart.increment(ProductId::new("lent"));
        assert_eq!(cart.remove("lent"), Some(1));
    }

    #[test]
    fn test_total_saturates_for_extreme_prices() {
        let pricey = Product {
            id: ProductId::new("pricey"),
            name: "Pricey".to_string(),
            description: String::new(),
            price: Price::new(rust_decimal::Decimal::MAX),
            image: String::new(),
            file: String::new(),
            category: Category::new("c"),
        };
        let catalogue = Catalogue::new(vec![pricey]).unwrap();
        let mut cart = Cart::new();
        cart.set_quantity(ProductId::new("pricey"), i64::from(u32::MAX));
        cart.increment(ProductId::new("pricey"));

        assert_eq!(cart.total(&catalogue).amount, rust_decimal::Decimal::MAX);
    }

    #[test]
    fn test_serialization_preserves_order() {
        let mut cart = Cart::new();
        cart.increment(ProductId::new("lent"));
        cart.increment(ProductId::new("advent"));
        cart.increment(ProductId::new("lent"));
        assert_eq!(
            serde_json::to_string(&cart).unwrap(),
            r#"{"lent":2,"advent":1}"#
        );

        let parsed: Cart = serde_json::from_str(r#"{"lent":2,"advent":1}"#).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_deserialize_drops_non_positive_entries() {
        let cart: Cart = serde_json::from_str(r#"{"lent":0,"advent":-2,"easter":1}"#).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity("easter"), Some(1));
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        assert!(serde_json::from_str::<Cart>("[1,2]").is_err());
        assert!(serde_json::from_str::<Cart>(r#"{"lent":"two"}"#).is_err());
        assert!(serde_json::from_str::<Cart>(r#"{"lent":1.5}"#).is_err());
        assert!(serde_json::from_str::<Cart>(r#"{"lent":99999999999}"#).is_err());
    }

    #[test]
    fn test_total_skips_orphans() {
        let mut cart = Cart::new();
        cart.set_quantity(ProductId::new("advent"), 1);
        cart.set_quantity(ProductId::new("lent"), 2);
        cart.set_quantity(ProductId::new("retired"), 7);

        let catalogue = catalogue();
        assert_eq!(cart.total(&catalogue).to_string(), "20.00 USD");
        assert_eq!(cart.resolve(&catalogue).count(), 2);
        assert_eq!(cart.item_count(), 10);
    }
}
