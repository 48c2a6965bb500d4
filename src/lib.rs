//! # tutgraph - an in-memory GraphQL schema over tutorials
//!
//! tutgraph builds a GraphQL schema over a fixed, in-memory dataset of
//! tutorials, their authors and comments, executes queries against it and
//! prints the JSON response.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demonstration query
//! tutgraph
//!
//! # Fetch one tutorial by id
//! tutgraph query '{ tutorial(id: 1) { title comments { body } } }'
//!
//! # Print the schema
//! tutgraph schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`logging`]: Tracing subscriber setup
//! - [`model`]: Data models (Tutorial, Author, Comment)
//! - [`storage`]: Seed dataset and the read-only catalog

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles optional `.tutgraph.toml` files discovered upward from the
/// working directory.
pub mod config;

/// Error types and result aliases.
///
/// Defines `TutgraphError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema over the tutorial catalog.
pub mod graphql;

/// Logging setup.
///
/// Installs the tracing subscriber: stderr output plus an optional JSON log file.
pub mod logging;

/// Data models for tutorials, authors and comments.
pub mod model;

/// In-memory storage layer.
pub mod storage;
