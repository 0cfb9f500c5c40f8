//! SQLite storage for plans and their generated structure.
//!
//! The store persists the whole Plan → Phase → Week → Day tree and
//! implements [`crate::resolver::PlanRepository`] so the context resolver can
//! read through it. Dates are stored as ISO `YYYY-MM-DD` text, which keeps
//! range comparisons in SQL lexicographic.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod day_queries;
pub mod migrations;
pub mod plan_queries;
pub mod structure_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, mainly for tests and embedding.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
