//! In-memory [`Database`] implementation.

mod impls;

use std::{collections::HashSet, fs, io, path::Path, sync::Arc};

use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::infra::Database;
use crate::{
    domain::{product, Product, Tags},
    infra::database,
};

/// Read-only snapshot of a product catalog.
///
/// Combined feature [`Tags`] of every [`Product`] are derived once, when the
/// snapshot is created, as [`Product`]s never change afterwards.
#[derive(Clone, Debug)]
pub struct Memory {
    /// [`Entry`]s of this [`Memory`], in catalog order.
    entries: Arc<[Entry]>,
}

/// [`Product`] stored in a [`Memory`] along with its derived [`Tags`].
#[derive(Clone, Debug)]
struct Entry {
    /// Stored [`Product`].
    product: Product,

    /// Combined feature [`Tags`] of the [`Product`].
    tags: Tags,
}

impl Memory {
    /// Creates a new [`Memory`] snapshot of the provided [`Product`]s.
    ///
    /// # Errors
    ///
    /// If any [`product::Id`] occurs more than once.
    pub fn new(
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, Traced<database::Error>> {
        let mut ids = HashSet::new();
        let entries = products
            .into_iter()
            .map(|product| {
                if !ids.insert(product.id) {
                    return Err(tracerr::new!(Error::DuplicateId(product.id)));
                }
                let tags = Tags::derive(&product);
                Ok(Entry { product, tags })
            })
            .collect::<Result<Arc<[_]>, _>>()
            .map_err(tracerr::map_from)?;

        Ok(Self { entries })
    }

    /// Loads a new [`Memory`] snapshot from the JSON file at the provided
    /// `path`, containing an array of [`Product`]s.
    ///
    /// # Errors
    ///
    /// - If the file cannot be read.
    /// - If the file contents are not a valid list of [`Product`]s.
    /// - If any [`product::Id`] occurs more than once.
    pub fn load(
        path: impl AsRef<Path>,
    ) -> Result<Self, Traced<database::Error>> {
        let path = path.as_ref();

        let bytes = fs::read(path)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        let products = serde_json::from_slice::<Vec<Product>>(&bytes)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        let this = Self::new(products).map_err(tracerr::wrap!())?;
        log::info!(
            "loaded {} products from `{}`",
            this.entries.len(),
            path.display(),
        );
        Ok(this)
    }

    /// Returns number of [`Product`]s in this [`Memory`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Indicates whether this [`Memory`] contains no [`Product`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the [`Entry`] of the [`Product`] with the provided
    /// [`product::Id`], if any.
    fn entry(&self, id: product::Id) -> Option<&Entry> {
        self.entries.iter().find(|e| e.product.id == id)
    }
}

/// [`Memory`] database error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Catalog file cannot be read.
    #[display("Failed to read catalog: {_0}")]
    Read(io::Error),

    /// Catalog file is malformed.
    #[display("Failed to decode catalog: {_0}")]
    Decode(serde_json::Error),

    /// [`Product`] with the same [`product::Id`] occurs more than once.
    #[display("`Product(id: {_0})` occurs more than once")]
    #[from(ignore)]
    DuplicateId(#[error(not(source))] product::Id),
}
