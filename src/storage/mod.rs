//! In-memory storage for tutorials.
//!
//! The dataset is built once by [`populate`] and owned by a read-only
//! [`Catalog`] for the lifetime of the process.

mod catalog;
mod seed;

pub use catalog::Catalog;
pub use seed::populate;
