//! [`Product`]-related [`Memory`] implementations.

use std::convert::Infallible;

use common::operations::{By, Select};
use tracing as log;

use crate::{
    domain::{
        product::{self, Brand, Subcategory},
        FilterQuery, Product, Tags,
    },
    infra::{Database, Memory},
};

impl Database<Select<By<Vec<Product>, FilterQuery>>> for Memory {
    type Ok = Vec<Product>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Product>, FilterQuery>>,
    ) -> Result<Self::Ok, Self::Err> {
        let query = by.into_inner();

        let found = self
            .entries
            .iter()
            .filter(|e| query.matches(&e.product, &e.tags))
            .map(|e| e.product.clone())
            .collect::<Vec<_>>();

        log::debug!(
            total = self.entries.len(),
            matched = found.len(),
            "filtered catalog",
        );
        Ok(found)
    }
}

impl Database<Select<By<Option<Product>, product::Id>>> for Memory {
    type Ok = Option<Product>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Option<Product>, product::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.entry(by.into_inner()).map(|e| e.product.clone()))
    }
}

impl Database<Select<By<Option<Tags>, product::Id>>> for Memory {
    type Ok = Option<Tags>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Option<Tags>, product::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.entry(by.into_inner()).map(|e| e.tags.clone()))
    }
}

impl Database<Select<By<Vec<Brand>, ()>>> for Memory {
    type Ok = Vec<Brand>;
    type Err = Infallible;

    fn execute(
        &self,
        _: Select<By<Vec<Brand>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(distinct(self.entries.iter().map(|e| &e.product.brand)))
    }
}

impl Database<Select<By<Vec<Subcategory>, ()>>> for Memory {
    type Ok = Vec<Subcategory>;
    type Err = Infallible;

    fn execute(
        &self,
        _: Select<By<Vec<Subcategory>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(distinct(
            self.entries
                .iter()
                .filter_map(|e| e.product.subcategory.as_ref()),
        ))
    }
}

/// Collects distinct values in the order they're first seen.
fn distinct<'a, T>(values: impl IntoIterator<Item = &'a T>) -> Vec<T>
where
    T: Clone + PartialEq + 'a,
{
    let mut out = Vec::<T>::new();
    for v in values {
        if !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}
