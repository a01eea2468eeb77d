//! # Catalog
//!
//! The ordered collection of admitted products.
//!
//! ## State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Catalog                                       │
//! │                                                                         │
//! │   Catalog::new() ──► [ ]                                                │
//! │                                                                         │
//! │   add(Laptop)    ──► [ Laptop ]                                         │
//! │   add(T-Shirt)   ──► [ Laptop, T-Shirt ]                                │
//! │   add(Socks $0)  ──► [ Laptop, T-Shirt ]          Err(InvalidProduct)   │
//! │   add(Phones)    ──► [ Laptop, T-Shirt, Phones ]                        │
//! │                                                                         │
//! │   Only grows. No removal, no reordering, no deduplication.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog owns its products and only lends them out immutably, so an
//! admitted product can never be changed into one that would have been
//! rejected.

use serde::{Deserialize, Serialize};
use std::slice;

use crate::error::InvalidProductError;
use crate::money::Money;
use crate::product::{Discountable, Product};
use crate::validation::validate_product;

/// One report row: what the presentation layer shows for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountLine {
    pub name: String,
    pub quantity: i64,
    pub discount: Money,
}

impl From<&Product> for DiscountLine {
    fn from(product: &Product) -> Self {
        DiscountLine {
            name: product.name().to_string(),
            quantity: product.quantity(),
            discount: product.calculate_discount(),
        }
    }
}

/// Products that passed admission, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Admits every product in order, collecting the ones that were refused.
    ///
    /// A rejection does not stop the products after it from being added.
    pub fn with_products<I>(products: I) -> (Self, Vec<InvalidProductError>)
    where
        I: IntoIterator<Item = Product>,
    {
        let mut catalog = Catalog::new();
        let rejected = products
            .into_iter()
            .filter_map(|product| catalog.add(product).err())
            .collect();
        (catalog, rejected)
    }

    /// Validates `product` and appends it.
    ///
    /// ## Errors
    /// [`InvalidProductError`] when `quantity <= 0` or `price <= 0`. The
    /// catalog is left untouched in that case.
    pub fn add(&mut self, product: Product) -> Result<&Product, InvalidProductError> {
        if let Err(reason) = validate_product(&product) {
            return Err(InvalidProductError::new(product.name(), reason));
        }

        self.products.push(product);
        let index = self.products.len() - 1;
        Ok(&self.products[index])
    }

    /// Iterates the admitted products in insertion order.
    ///
    /// Every call starts a fresh pass over the current contents.
    pub fn iter(&self) -> slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// One [`DiscountLine`] per product, in insertion order.
    pub fn discount_report(&self) -> Vec<DiscountLine> {
        self.iter().map(DiscountLine::from).collect()
    }

    /// Sum of every product's discount, saturating at `i64::MAX`.
    pub fn total_discount(&self) -> Money {
        self.iter().map(Discountable::calculate_discount).sum()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Category;

    fn laptop() -> Product {
        Product::electronics("Laptop", Money::from_major(50000), 2)
    }

    fn t_shirt() -> Product {
        Product::clothing("T-Shirt", Money::from_major(500), 6)
    }

    fn headphones() -> Product {
        Product::electronics("Headphones", Money::from_major(2000), 1)
    }

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.iter().map(Product::name).collect()
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.iter().count(), 0);
        assert!(catalog.total_discount().is_zero());
    }

    #[test]
    fn test_add_valid_product() {
        let mut catalog = Catalog::new();
        let stored = catalog.add(laptop()).unwrap();
        assert_eq!(stored.name(), "Laptop");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_rejects_zero_price() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add(Product::clothing("Socks", Money::zero(), 3))
            .unwrap_err();

        assert_eq!(err.name, "Socks");
        assert_eq!(err.field(), "price");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        let mut catalog = Catalog::new();
        catalog.add(laptop()).unwrap();

        let err = catalog
            .add(Product::electronics("Charger", Money::from_major(25), 0))
            .unwrap_err();

        assert_eq!(err.name, "Charger");
        assert_eq!(err.field(), "quantity");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_rejects_negative_values() {
        let mut catalog = Catalog::new();
        assert!(catalog.add(Product::clothing("Belt", Money::from_cents(-1), 1)).is_err());
        assert!(catalog.add(Product::clothing("Belt", Money::from_cents(1), -1)).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_insertion_order_skips_rejected() {
        let mut catalog = Catalog::new();
        catalog.add(laptop()).unwrap();
        catalog.add(t_shirt()).unwrap();
        assert!(catalog
            .add(Product::clothing("Socks", Money::zero(), 3))
            .is_err());
        catalog.add(headphones()).unwrap();

        assert_eq!(names(&catalog), vec!["Laptop", "T-Shirt", "Headphones"]);
    }

    #[test]
    fn test_iteration_is_repeatable() {
        let mut catalog = Catalog::new();
        catalog.add(laptop()).unwrap();
        catalog.add(t_shirt()).unwrap();

        let first: Vec<&Product> = catalog.iter().collect();
        let second: Vec<&Product> = (&catalog).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut catalog = Catalog::new();
        catalog.add(t_shirt()).unwrap();
        catalog.add(t_shirt()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_get() {
        let mut catalog = Catalog::new();
        catalog.add(laptop()).unwrap();
        assert_eq!(catalog.get(0).map(Product::category), Some(Category::Electronics));
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_discount_report() {
        let mut catalog = Catalog::new();
        catalog.add(laptop()).unwrap();
        catalog.add(t_shirt()).unwrap();
        catalog.add(headphones()).unwrap();

        let report = catalog.discount_report();
        assert_eq!(
            report,
            vec![
                DiscountLine {
                    name: "Laptop".to_string(),
                    quantity: 2,
                    discount: Money::from_major(10000),
                },
                DiscountLine {
                    name: "T-Shirt".to_string(),
                    quantity: 6,
                    discount: Money::from_major(600),
                },
                DiscountLine {
                    name: "Headphones".to_string(),
                    quantity: 1,
                    discount: Money::from_major(200),
                },
            ]
        );
        assert_eq!(catalog.total_discount(), Money::from_major(10800));
    }

    #[test]
    fn test_with_products_collects_rejections() {
        let (catalog, rejected) = Catalog::with_products(vec![
            laptop(),
            Product::clothing("Socks", Money::zero(), 3),
            t_shirt(),
            Product::electronics("Charger", Money::from_major(25), 0),
        ]);

        assert_eq!(names(&catalog), vec!["Laptop", "T-Shirt"]);
        let rejected_names: Vec<&str> = rejected.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(rejected_names, vec!["Socks", "Charger"]);
    }

    #[test]
    fn test_admitted_line_near_i64_max_reports_positive_discount() {
        let mut catalog = Catalog::new();
        catalog
            .add(Product::electronics("Server", Money::from_cents(i64::MAX / 2), 3))
            .unwrap();
        catalog
            .add(Product::clothing("Rack", Money::from_cents(i64::MAX), i64::MAX))
            .unwrap();

        let report = catalog.discount_report();
        assert_eq!(report[0].discount.cents(), 1_383_505_805_528_216_371);
        assert_eq!(report[1].discount, Money::from_cents(i64::MAX));
        assert_eq!(catalog.total_discount(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_report_goes_through_discountable() {
        let mut catalog = Catalog::new();
        catalog.add(t_shirt()).unwrap();

        let via_trait: Money = catalog
            .iter()
            .map(|p| p as &dyn Discountable)
            .map(|d| d.calculate_discount())
            .sum();
        assert_eq!(catalog.total_discount(), via_trait);
        assert_eq!(catalog.discount_report()[0].discount, via_trait);
    }

    #[test]
    fn test_discount_line_serializes() {
        let line = DiscountLine::from(&t_shirt());
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "T-Shirt", "quantity": 6, "discount": 60000 })
        );
    }
}
