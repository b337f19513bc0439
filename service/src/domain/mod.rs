//! Domain definitions.

pub mod feature;
pub mod filter;
pub mod product;
pub mod state;

pub use self::{
    feature::Tags,
    filter::{FilterQuery, PriceRange},
    product::Product,
    state::FilterState,
};
