//! GraphQL API over the portfolio render trees.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /)
//! folio serve --port 4000
//!
//! # Execute a query from CLI
//! folio query '{ sections { slug label } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `sections`, `section`, `charts`, `footer`
//! - **Mutations**: `submitContact`

mod schema;
mod server;
mod types;

pub use schema::{FolioSchema, build_schema};
pub use server::{app, run_server};
pub use types::*;
