//! Data models for tutgraph.
//!
//! - [`Tutorial`]: a tutorial with its embedded author and comments
//! - [`Author`]: the author's name and the tutorial ids they wrote
//! - [`Comment`]: a single comment body

mod tutorial;

pub use tutorial::{Author, Comment, Tutorial};
