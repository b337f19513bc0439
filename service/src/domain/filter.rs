//! [`Product`] filtering definitions.

use std::collections::BTreeSet;

use common::Money;

use super::{
    feature::Tags,
    product::{Brand, Category, Feature, Subcategory},
    Product,
};

/// Closed interval of prices, inclusive on both ends.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PriceRange {
    /// Lowest price in this [`PriceRange`].
    min: Money,

    /// Highest price in this [`PriceRange`].
    max: Money,
}

impl PriceRange {
    /// [`PriceRange`] containing every possible price.
    pub const FULL: Self = Self {
        min: Money::ZERO,
        max: Money::MAX,
    };

    /// Creates a new [`PriceRange`] between the provided bounds.
    ///
    /// Inverted bounds are swapped, so the resulting range is never empty.
    #[must_use]
    pub fn new(min: Money, max: Money) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Returns the lowest price in this [`PriceRange`].
    #[must_use]
    pub const fn min(&self) -> Money {
        self.min
    }

    /// Returns the highest price in this [`PriceRange`].
    #[must_use]
    pub const fn max(&self) -> Money {
        self.max
    }

    /// Indicates whether the provided `price` lies within this [`PriceRange`].
    #[must_use]
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Query selecting [`Product`]s from a catalog.
///
/// Dimensions are combined with AND, while values selected within a single
/// dimension are combined with OR. An empty selection puts no constraint on
/// its dimension.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterQuery {
    /// [`PriceRange`] the effective price must lie within.
    pub price_range: PriceRange,

    /// Selected [`Brand`]s.
    pub brands: BTreeSet<Brand>,

    /// Selected [`Category`]s.
    pub categories: BTreeSet<Category>,

    /// Selected [`Subcategory`]s.
    pub subcategories: BTreeSet<Subcategory>,

    /// Selected [`Feature`] labels, matched against combined feature sets.
    pub features: BTreeSet<Feature>,
}

impl FilterQuery {
    /// Creates a new [`FilterQuery`] with the provided [`PriceRange`] and no
    /// other constraints.
    #[must_use]
    pub fn new(price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..Self::default()
        }
    }

    /// Indicates whether the provided [`Product`] with its combined feature
    /// [`Tags`] satisfies this [`FilterQuery`].
    #[must_use]
    pub fn matches(&self, product: &Product, tags: &Tags) -> bool {
        self.price_range.contains(product.effective_price())
            && (self.categories.is_empty()
                || self.categories.contains(&product.category))
            && (self.subcategories.is_empty()
                || product
                    .subcategory
                    .as_ref()
                    .is_some_and(|s| self.subcategories.contains(s)))
            && (self.brands.is_empty() || self.brands.contains(&product.brand))
            && (self.features.is_empty()
                || self.features.iter().any(|f| tags.matches(f)))
    }

    /// Returns number of dimensions this [`FilterQuery`] constrains beyond
    /// the provided `defaults`.
    ///
    /// The price dimension counts once, no matter how far it has moved.
    #[must_use]
    pub fn active_dimensions(&self, defaults: &PriceRange) -> usize {
        [
            self.price_range != *defaults,
            !self.brands.is_empty(),
            !self.categories.is_empty(),
            !self.subcategories.is_empty(),
            !self.features.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Selects [`Product`]s of the `catalog` satisfying the provided
/// [`FilterQuery`].
///
/// The catalog order is preserved. Combined feature [`Tags`] are derived
/// anew for every [`Product`].
#[must_use]
pub fn filter<'c>(
    catalog: &'c [Product],
    query: &FilterQuery,
) -> Vec<&'c Product> {
    catalog
        .iter()
        .filter(|p| query.matches(p, &Tags::derive(p)))
        .collect()
}
