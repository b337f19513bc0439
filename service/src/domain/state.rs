//! [`FilterState`] definitions.

use std::collections::BTreeSet;

use super::{
    filter::{FilterQuery, PriceRange},
    product::{Brand, Category, Feature, Subcategory},
};

/// Current [`FilterQuery`] of a single listing view.
///
/// Every listing view owns its own [`FilterState`], created when the view is
/// opened and dropped with it. Setters replace a whole dimension at once.
#[derive(Clone, Debug)]
pub struct FilterState {
    /// [`PriceRange`] a fresh [`FilterQuery`] starts with.
    default_price_range: PriceRange,

    /// Current [`FilterQuery`].
    query: FilterQuery,
}

impl FilterState {
    /// Creates a new [`FilterState`] with no constraints beyond the provided
    /// default [`PriceRange`].
    #[must_use]
    pub fn new(default_price_range: PriceRange) -> Self {
        Self {
            default_price_range,
            query: FilterQuery::new(default_price_range),
        }
    }

    /// Returns the current [`FilterQuery`].
    #[must_use]
    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    /// Returns the default [`PriceRange`] of this [`FilterState`].
    #[must_use]
    pub fn default_price_range(&self) -> PriceRange {
        self.default_price_range
    }

    /// Replaces the [`PriceRange`].
    pub fn set_price_range(&mut self, range: PriceRange) {
        self.query.price_range = range;
    }

    /// Replaces the selected [`Brand`]s.
    pub fn set_selected_brands(
        &mut self,
        brands: impl IntoIterator<Item = Brand>,
    ) {
        self.query.brands = brands.into_iter().collect();
    }

    /// Replaces the selected [`Category`]s.
    pub fn set_selected_categories(
        &mut self,
        categories: impl IntoIterator<Item = Category>,
    ) {
        self.query.categories = categories.into_iter().collect();
    }

    /// Replaces the selected [`Subcategory`]s.
    pub fn set_selected_subcategories(
        &mut self,
        subcategories: impl IntoIterator<Item = Subcategory>,
    ) {
        self.query.subcategories = subcategories.into_iter().collect();
    }

    /// Replaces the selected [`Feature`] labels.
    pub fn set_selected_features(
        &mut self,
        features: impl IntoIterator<Item = Feature>,
    ) {
        self.query.features = features.into_iter().collect();
    }

    /// Resets every dimension to its default at once.
    pub fn clear_all_filters(&mut self) {
        self.query = FilterQuery::new(self.default_price_range);
    }

    /// Indicates whether any dimension differs from its default.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.active_filters_count() > 0
    }

    /// Returns number of dimensions differing from their defaults.
    #[must_use]
    pub fn active_filters_count(&self) -> usize {
        self.query.active_dimensions(&self.default_price_range)
    }

    /// Returns the selected [`Brand`]s.
    #[must_use]
    pub fn selected_brands(&self) -> &BTreeSet<Brand> {
        &self.query.brands
    }

    /// Returns the selected [`Category`]s.
    #[must_use]
    pub fn selected_categories(&self) -> &BTreeSet<Category> {
        &self.query.categories
    }

    /// Returns the selected [`Subcategory`]s.
    #[must_use]
    pub fn selected_subcategories(&self) -> &BTreeSet<Subcategory> {
        &self.query.subcategories
    }

    /// Returns the selected [`Feature`] labels.
    #[must_use]
    pub fn selected_features(&self) -> &BTreeSet<Feature> {
        &self.query.features
    }
}
