//! Everything the user does with the catalog beyond raw CRUD: looking up and
//! adding movies, searching, sorting, filtering and rating statistics.

mod query;
mod service;
mod stats;
mod validate;

pub use query::*;
pub use service::{AddError, MovieCandidate, MovieLibrary};
pub use stats::{statistics, CatalogStatistics};
pub use validate::*;
