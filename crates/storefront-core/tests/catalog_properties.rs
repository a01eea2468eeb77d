//! Property tests for catalog admission and discount math.

use proptest::prelude::*;
use storefront_core::{Catalog, Category, Discountable, Money, Product};

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Electronics), Just(Category::Clothing)]
}

fn product(price_cents: i64, quantity: i64, category: Category) -> Product {
    Product::new("Item", Money::from_cents(price_cents), quantity, category)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    /// Property: valid products are always admitted and grow the catalog by one.
    #[test]
    fn valid_products_are_admitted(
        price in 1i64..10_000_000,
        quantity in 1i64..10_000,
        category in category(),
        preloaded in 0usize..5,
    ) {
        let mut catalog = Catalog::new();
        for _ in 0..preloaded {
            catalog.add(product(100, 1, Category::Clothing)).unwrap();
        }

        let before = catalog.len();
        prop_assert!(catalog.add(product(price, quantity, category)).is_ok());
        prop_assert_eq!(catalog.len(), before + 1);
    }

    /// Property: a non-positive price or quantity is always refused and
    /// leaves the catalog as it was.
    #[test]
    fn invalid_products_are_refused(
        (price, quantity) in prop_oneof![
            (-10_000_000i64..=0, -10_000i64..10_000),
            (-10_000_000i64..10_000_000, -10_000i64..=0),
        ],
        category in category(),
    ) {
        let mut catalog = Catalog::new();
        catalog.add(product(100, 1, Category::Electronics)).unwrap();

        let err = catalog.add(product(price, quantity, category)).unwrap_err();
        prop_assert_eq!(err.name, "Item");
        prop_assert_eq!(catalog.len(), 1);
    }

    /// Property: the discount is a pure function of the product.
    #[test]
    fn discount_is_deterministic(
        price in 0i64..10_000_000,
        quantity in 0i64..10_000,
        category in category(),
    ) {
        let item = product(price, quantity, category);
        prop_assert_eq!(item.calculate_discount(), item.calculate_discount());
        prop_assert!(!item.calculate_discount().is_negative());
    }

    /// Property: an admitted product never yields a negative discount, nor one
    /// larger than its subtotal, across the whole positive `i64` range.
    #[test]
    fn admitted_discount_stays_within_subtotal(
        price in 1i64..=i64::MAX,
        quantity in 1i64..=i64::MAX,
        category in category(),
    ) {
        let mut catalog = Catalog::new();
        let item = catalog.add(product(price, quantity, category)).unwrap();
        let discount = item.calculate_discount();
        prop_assert!(!discount.is_negative());
        prop_assert!(discount <= item.subtotal());
        prop_assert!(!catalog.total_discount().is_negative());
    }

    /// Property: whole-unit prices produce exact discounts.
    #[test]
    fn discount_matches_formula(
        price_major in 0i64..100_000,
        quantity in 0i64..1_000,
        category in category(),
    ) {
        let item = Product::new("Item", Money::from_major(price_major), quantity, category);
        let bps = category.discount_rate().bps() as i64;
        let expected = Money::from_cents(price_major * 100 * quantity * bps / 10_000);
        prop_assert_eq!(item.calculate_discount(), expected);
    }

    /// Property: iteration preserves insertion order of admitted products only.
    #[test]
    fn iteration_preserves_admission_order(
        quantities in prop::collection::vec(-3i64..5, 0..20),
    ) {
        let mut catalog = Catalog::new();
        let mut expected = Vec::new();
        for (i, quantity) in quantities.iter().enumerate() {
            let name = format!("item-{i}");
            if catalog.add(Product::clothing(name.clone(), Money::from_major(1), *quantity)).is_ok() {
                expected.push(name);
            }
        }

        let first: Vec<String> = catalog.iter().map(|p| p.name().to_string()).collect();
        let second: Vec<String> = catalog.iter().map(|p| p.name().to_string()).collect();
        prop_assert_eq!(&first, &expected);
        prop_assert_eq!(first, second);
    }
}
