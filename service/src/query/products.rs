//! [`Query`] collection related to the multiple [`Product`]s.

use common::operations::By;

use crate::domain::{FilterQuery, Product};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries [`Product`]s satisfying a [`FilterQuery`], in catalog order.
pub type List = DatabaseQuery<By<Vec<Product>, FilterQuery>>;
