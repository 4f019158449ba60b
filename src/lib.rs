//! SQL exercises over a pre-seeded movie dataset.
//!
//! # Intention
//!
//! - Run hand-written SQL against a known dataset and compare the rows with
//!   golden results.
//! - Keep the database layer thin: SQLite does the parsing, planning and
//!   execution, this crate only opens connections, seeds fixtures and reads
//!   rows back as ordered column/value maps.
//!
//! # Architectural Boundaries
//!
//! - Engine errors are passed through unchanged.
//! - No query building, pooling or caching.

pub mod config;
pub mod database;
pub mod error;
pub mod fixture;
pub mod queries;
pub mod schema;
pub mod value;

pub use config::DatabaseConfig;
pub use database::Database;
pub use error::{Error, Result};
pub use fixture::{Fixture, FixtureKind};
pub use value::{Row, Value};
