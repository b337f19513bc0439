//! [`Args`] definitions.

use clap::Parser;
use common::Money;
use service::domain::{
    product::{Brand, Category, Feature, Subcategory},
    FilterState, PriceRange,
};

/// Browser of the electronics store catalog.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Path to the catalog file, overriding the configured one.
    #[arg(long)]
    pub catalog: Option<String>,

    /// Lowest effective price to list, in major units (e.g. `199.99`).
    #[arg(long, value_name = "PRICE")]
    pub min_price: Option<Money>,

    /// Highest effective price to list, in major units (e.g. `1500`).
    #[arg(long, value_name = "PRICE")]
    pub max_price: Option<Money>,

    /// Brand to list (may be repeated).
    #[arg(short, long = "brand", value_name = "BRAND")]
    pub brands: Vec<Brand>,

    /// Category to list (may be repeated).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    /// Subcategory to list (may be repeated).
    #[arg(long = "subcategory", value_name = "SUBCATEGORY")]
    pub subcategories: Vec<Subcategory>,

    /// Feature label to look for, like `4K` or `gaming` (may be repeated).
    #[arg(short, long = "feature", value_name = "FEATURE")]
    pub features: Vec<Feature>,

    /// Print the combined feature set of every listed product.
    #[arg(short, long)]
    pub tags: bool,

    /// Print the values available for filtering instead of listing products.
    #[arg(long)]
    pub choices: bool,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Applies filters of these [`Args`] to the provided [`FilterState`].
    ///
    /// A price bound that is not provided keeps its default, unless the
    /// provided one lies beyond it, in which case the range is left open on
    /// that side.
    pub fn apply(&self, state: &mut FilterState) {
        let defaults = state.default_price_range();
        let range = match (self.min_price, self.max_price) {
            (None, None) => None,
            (Some(min), Some(max)) => Some(PriceRange::new(min, max)),
            (Some(min), None) => {
                let max = if min > defaults.max() {
                    Money::MAX
                } else {
                    defaults.max()
                };
                Some(PriceRange::new(min, max))
            }
            (None, Some(max)) => {
                let min = if max < defaults.min() {
                    Money::ZERO
                } else {
                    defaults.min()
                };
                Some(PriceRange::new(min, max))
            }
        };
        if let Some(range) = range {
            state.set_price_range(range);
        }
        state.set_selected_brands(self.brands.iter().cloned());
        state.set_selected_categories(self.categories.iter().copied());
        state.set_selected_subcategories(self.subcategories.iter().cloned());
        state.set_selected_features(self.features.iter().cloned());
    }
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use common::Money;
    use service::domain::{product::Category, FilterState, PriceRange};

    use super::Args;

    fn state() -> FilterState {
        FilterState::new(PriceRange::new(
            Money::ZERO,
            Money::from_minor(500_000),
        ))
    }

    #[test]
    fn applies_nothing_by_default() {
        let args = Args::try_parse_from(["storefront"]).unwrap();
        let mut state = state();

        args.apply(&mut state);

        assert_eq!(args.config, "config.toml");
        assert!(!args.choices);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn applies_filters() {
        let args = Args::try_parse_from([
            "storefront",
            "--max-price",
            "1000",
            "-b",
            "Apple",
            "--brand",
            "Dell",
            "--category",
            "laptops",
            "-f",
            "4K",
        ])
        .unwrap();
        let mut state = state();

        args.apply(&mut state);

        assert_eq!(state.active_filters_count(), 4);
        assert_eq!(
            state.query().price_range,
            PriceRange::new(Money::ZERO, Money::from_minor(100_000)),
        );
        assert_eq!(state.selected_brands().len(), 2);
        assert!(state.selected_categories().contains(&Category::Laptops));
    }

    #[test]
    fn opens_range_beyond_default_bound() {
        let args = Args::try_parse_from(["storefront", "--min-price", "6000"])
            .unwrap();
        let mut state = state();

        args.apply(&mut state);

        assert_eq!(
            state.query().price_range,
            PriceRange::new(Money::from_minor(600_000), Money::MAX),
        );
    }

    #[test]
    fn opens_range_below_default_bound() {
        let args = Args::try_parse_from(["storefront", "--max-price", "10"])
            .unwrap();
        let mut state = FilterState::new(PriceRange::new(
            Money::from_minor(5_000),
            Money::from_minor(500_000),
        ));

        args.apply(&mut state);

        assert_eq!(
            state.query().price_range,
            PriceRange::new(Money::ZERO, Money::from_minor(1_000)),
        );
    }

    #[test]
    fn keeps_default_for_missing_bound_within_range() {
        let args = Args::try_parse_from(["storefront", "--min-price", "100"])
            .unwrap();
        let mut state = state();

        args.apply(&mut state);

        assert_eq!(
            state.query().price_range,
            PriceRange::new(
                Money::from_minor(10_000),
                Money::from_minor(500_000),
            ),
        );
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(
            Args::try_parse_from(["storefront", "--category", "fridges"])
                .is_err(),
        );
        assert!(
            Args::try_parse_from(["storefront", "--min-price", "-5"]).is_err(),
        );
        assert!(Args::try_parse_from(["storefront", "--brand", ""]).is_err());
    }
}
