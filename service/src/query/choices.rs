//! [`Query`] collection of values available for filtering.

use common::operations::By;

use crate::domain::product::{Brand, Subcategory};
#[cfg(doc)]
use crate::{domain::Product, Query};

use super::DatabaseQuery;

/// Queries distinct [`Brand`]s of the catalog [`Product`]s, in the order they
/// first occur.
pub type Brands = DatabaseQuery<By<Vec<Brand>, ()>>;

/// Queries distinct [`Subcategory`]s of the catalog [`Product`]s, in the
/// order they first occur.
pub type Subcategories = DatabaseQuery<By<Vec<Subcategory>, ()>>;
