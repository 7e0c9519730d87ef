//! Product catalog types for the showcase section.

use crate::error::{ModelError, Result};
use crate::slide::ImageRef;

/// Strongly typed product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductId(pub u32);

impl ProductId {
    /// Parse from the raw string an add-to-cart event carries.
    /// Malformed input yields `None`; callers treat that as a no-op.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().map(Self)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Currency amount in integer cents. Displayed as dollars (`$45.00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price(pub u64);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A purchasable product shown in the horizontal showcase.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: ImageRef,
    /// Alt text for the rendered image element.
    pub alt: String,
}

/// Fixed, ordered product catalog with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(ModelError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    pub fn lookup(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, cents: u64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            price: Price::from_cents(cents),
            image: ImageRef::new("images/p.png"),
            alt: format!("Product {id}"),
        }
    }

    #[test]
    fn price_displays_as_dollars() {
        assert_eq!(Price::from_cents(4500).to_string(), "$45.00");
        assert_eq!(Price::from_cents(3805).to_string(), "$38.05");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn lookup_finds_by_id() {
        let catalog =
            Catalog::new(vec![product(101, 4500), product(102, 3800)]).unwrap();
        assert_eq!(catalog.lookup(ProductId(102)).unwrap().price.cents(), 3800);
        assert!(catalog.lookup(ProductId(999)).is_none());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err =
            Catalog::new(vec![product(101, 4500), product(101, 100)]).unwrap_err();
        assert!(matches!(err, ModelError::InvalidCatalog(_)));
    }

    #[test]
    fn product_id_parses_raw_event_data() {
        assert_eq!(ProductId::parse("101"), Some(ProductId(101)));
        assert_eq!(ProductId::parse(" 104 "), Some(ProductId(104)));
        assert_eq!(ProductId::parse("abc"), None);
        assert_eq!(ProductId::parse(""), None);
    }
}
