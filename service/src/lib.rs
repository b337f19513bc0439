//! Service contains the business logic of the storefront catalog.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod infra;
pub mod query;

use derive_more::Debug;
use smart_default::SmartDefault;

use self::domain::{FilterState, PriceRange};
#[cfg(doc)]
use self::infra::Database;

pub use self::query::Query;

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// [`PriceRange`] every new [`FilterState`] starts with.
    #[default(PriceRange::FULL)]
    pub default_price_range: PriceRange,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    #[debug(skip)]
    database: Db,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, database: Db) -> Self {
        Self { config, database }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Creates a new [`FilterState`] for a listing view.
    ///
    /// Every call returns an independent [`FilterState`] with no active
    /// filters.
    #[must_use]
    pub fn filter_state(&self) -> FilterState {
        FilterState::new(self.config.default_price_range)
    }
}
