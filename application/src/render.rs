//! Text rendering of filtered catalog listings.

use std::fmt::Write as _;

use colored::Colorize as _;
use itertools::Itertools as _;
use service::domain::{
    product::{partition_by_availability, Brand, Category, Subcategory},
    FilterState, Product, Tags,
};

use crate::display;

/// Renders a single [`Product`] line.
///
/// The line shows the effective price, followed by the regular price and the
/// discount if the [`Product`] is on sale.
#[must_use]
pub fn product(product: &Product) -> String {
    let category = display::category(product.category);
    let brand = display::brand(&product.brand);

    let mut line = format!(
        "{} #{:<4} {} {} {}",
        category.icon,
        u32::from(product.id),
        product.name.as_str().bold(),
        brand.paint(product.brand.as_str()),
        product.effective_price().to_string().green(),
    );
    if let Some(discount) = product.discount() {
        _ = write!(line, " (was {}, -{discount})", product.price);
    }
    if let Some(badge) = &product.badge {
        _ = write!(line, " [{badge}]");
    }
    line
}

/// Renders the provided [`Tags`] as a single line of styled labels.
#[must_use]
pub fn tags(tags: &Tags) -> String {
    tags.iter()
        .map(|t| {
            let style = display::feature(t);
            format!("{} {}", style.icon, style.paint(t))
        })
        .join(", ")
}

/// Renders the header describing the provided [`FilterState`] and the number
/// of `found` [`Product`]s.
#[must_use]
pub fn header(state: &FilterState, found: usize) -> String {
    let range = state.query().price_range;
    let mut out = format!(
        "{found} product(s) priced {}..={}",
        range.min(),
        range.max(),
    );
    match state.active_filters_count() {
        0 => {}
        1 => out.push_str(", 1 active filter"),
        n => {
            _ = write!(out, ", {n} active filters");
        }
    }
    out
}

/// Renders the whole listing of the `found` [`Product`]s.
///
/// Available [`Product`]s go first, then the unavailable ones in a separate
/// section. `tags_of` is called for every [`Product`] to render its feature
/// line, if it returns any [`Tags`].
pub fn listing<'p, F>(
    state: &FilterState,
    found: &'p [Product],
    mut tags_of: F,
) -> String
where
    F: FnMut(&'p Product) -> Option<Tags>,
{
    let (available, unavailable) = partition_by_availability(found);

    let mut out = header(state, found.len());
    let mut section = |out: &mut String, products: Vec<&'p Product>| {
        for p in products {
            out.push('\n');
            out.push_str(&product(p));
            if let Some(t) = tags_of(p).filter(|t| !t.is_empty()) {
                _ = write!(out, "\n      {}", tags(&t));
            }
        }
    };

    section(&mut out, available);
    if !unavailable.is_empty() {
        _ = write!(out, "\n\n{}", "Out of stock:".dimmed());
        section(&mut out, unavailable);
    }
    out
}

/// Renders the values available for filtering: every [`Category`] and the
/// provided [`Brand`]s and [`Subcategory`]s present in the catalog.
#[must_use]
pub fn choices(brands: &[Brand], subcategories: &[Subcategory]) -> String {
    let categories = Category::all()
        .map(|c| format!("{} {c}", display::category(c).icon))
        .join(", ");
    let brands = brands
        .iter()
        .map(|b| display::brand(b).paint(b.as_str()).to_string())
        .join(", ");
    let subcategories = subcategories.iter().join(", ");

    format!(
        "{} {categories}\n{} {brands}\n{} {subcategories}",
        "Categories:".bold(),
        "Brands:".bold(),
        "Subcategories:".bold(),
    )
}

#[cfg(test)]
mod spec {
    use common::Money;
    use service::domain::{
        product::{Badge, Brand, Category, Id, Subcategory},
        FilterState, PriceRange, Product, Tags,
    };

    fn product(id: u32, name: &str, price: u64) -> Product {
        serde_json::from_value::<Product>(serde_json::json!({
            "id": id,
            "name": name,
            "category": "laptops",
            "brand": "Dell",
            "price": price,
            "features": [],
        }))
        .unwrap()
    }

    fn state() -> FilterState {
        FilterState::new(PriceRange::new(
            Money::ZERO,
            Money::from_minor(500_000),
        ))
    }

    #[test]
    fn renders_sale_product() {
        colored::control::set_override(false);
        let mut xps = product(7, "XPS 15", 189_900);
        xps.sale_price = Some(Money::from_minor(161_415));
        xps.badge = Some(Badge::new("Hot").unwrap());

        let line = super::product(&xps);

        assert_eq!(
            line,
            "💻 #7    XPS 15 Dell $1614.15 (was $1899.00, -15%) [Hot]",
        );
    }

    #[test]
    fn renders_regular_product() {
        colored::control::set_override(false);
        let mut p = product(12, "Pixel 9", 79_900);
        p.category = Category::Phones;
        p.brand = Brand::new("Google").unwrap();

        assert_eq!(super::product(&p), "📱 #12   Pixel 9 Google $799.00");
    }

    #[test]
    fn renders_header() {
        let mut state = state();
        assert_eq!(
            super::header(&state, 3),
            "3 product(s) priced $0.00..=$5000.00",
        );

        state.set_selected_categories([Category::Tvs]);
        state.set_selected_brands([Brand::new("LG").unwrap()]);
        assert_eq!(
            super::header(&state, 1),
            "1 product(s) priced $0.00..=$5000.00, 2 active filters",
        );
    }

    #[test]
    fn separates_out_of_stock_products() {
        colored::control::set_override(false);
        let first = product(1, "Inspiron", 59_900);
        let mut second = product(2, "Latitude", 99_900);
        second.in_stock = false;
        let third = product(3, "Vostro", 49_900);
        let found = [first, second, third];

        let out = super::listing(&state(), &found, |p| {
            (p.id == Id::from(3)).then(|| Tags::derive(p))
        });
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "3 product(s) priced $0.00..=$5000.00");
        assert!(lines[1].contains("Inspiron"));
        assert!(lines[2].contains("Vostro"));
        assert!(lines[3].contains("Budget Friendly"));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Out of stock:");
        assert!(lines[6].contains("Latitude"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn renders_choices() {
        colored::control::set_override(false);
        let brands =
            [Brand::new("Dell").unwrap(), Brand::new("Apple").unwrap()];
        let subcategories = [Subcategory::new("business").unwrap()];

        let out = super::choices(&brands, &subcategories);
        let lines = out.lines().collect::<Vec<_>>();

        assert!(lines[0].starts_with("Categories: 💻 laptops, 📱 phones"));
        assert!(lines[0].ends_with("🔌 accessories"));
        assert_eq!(lines[1], "Brands: Dell, Apple");
        assert_eq!(lines[2], "Subcategories: business");
    }
}
