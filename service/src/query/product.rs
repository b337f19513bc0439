//! [`Query`] collection related to a single [`Product`].

use common::operations::By;

use crate::domain::{product, Product, Tags};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Product`] by its [`product::Id`].
pub type ById = DatabaseQuery<By<Option<Product>, product::Id>>;

/// Queries combined feature [`Tags`] of a [`Product`] by its
/// [`product::Id`].
pub type TagsById = DatabaseQuery<By<Option<Tags>, product::Id>>;
