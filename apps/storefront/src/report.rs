//! Rendering of the discount report.

use storefront_core::{Catalog, DiscountLine};

/// One line per product: `Product: Laptop, Quantity: 2, Discount: $10000.00`.
pub fn render_text(lines: &[DiscountLine]) -> String {
    lines
        .iter()
        .map(|line| {
            format!(
                "Product: {}, Quantity: {}, Discount: {}",
                line.name, line.quantity, line.discount
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The report as a pretty-printed JSON array. Discounts are in cents.
pub fn render_json(lines: &[DiscountLine]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(lines)
}

/// Renders the whole catalog in the requested format.
pub fn render(catalog: &Catalog, json: bool) -> serde_json::Result<String> {
    let lines = catalog.discount_report();
    if json {
        render_json(&lines)
    } else {
        Ok(render_text(&lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Money, Product};

    fn catalog() -> Catalog {
        let (catalog, rejected) = Catalog::with_products(vec![
            Product::electronics("Laptop", Money::from_major(50000), 2),
            Product::clothing("T-Shirt", Money::from_major(500), 6),
            Product::electronics("Headphones", Money::from_major(2000), 1),
        ]);
        assert!(rejected.is_empty());
        catalog
    }

    #[test]
    fn test_render_text() {
        let text = render(&catalog(), false).unwrap();
        assert_eq!(
            text,
            "Product: Laptop, Quantity: 2, Discount: $10000.00\n\
             Product: T-Shirt, Quantity: 6, Discount: $600.00\n\
             Product: Headphones, Quantity: 1, Discount: $200.00"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&Catalog::new(), false).unwrap(), "");
        assert_eq!(render(&Catalog::new(), true).unwrap(), "[]");
    }

    #[test]
    fn test_render_json() {
        let json = render(&catalog(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Laptop");
        assert_eq!(value[1]["quantity"], 6);
        assert_eq!(value[2]["discount"], 20000);
    }
}
