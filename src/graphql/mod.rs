//! GraphQL schema and resolvers for tutgraph.
//!
//! Mirrors the in-memory tutorial records into GraphQL object types and
//! exposes two read-only root fields.
//!
//! ## Usage
//!
//! ```bash
//! # Run the built-in demonstration query
//! tutgraph
//!
//! # Execute any query from the CLI
//! tutgraph query '{ tutorial(id: 1) { title author { Name } } }'
//! ```
//!
//! ## Schema
//!
//! - **Root type**: `RootQuery`
//! - **Queries**: `tutorial(id: Int)`, `list`
//! - **Objects**: `Tutorials`, `Author`, `Comment`

mod schema;
mod types;

pub use schema::{QueryRoot, TutorialSchema, build_schema, execute};
pub use types::*;

/// The query run when tutgraph is invoked without a subcommand.
pub const DEMO_QUERY: &str = r#"
    {
        list {
            id
            title
            comments {
                body
            }
            author {
                Name
                Tutorials
            }
        }
    }
"#;
