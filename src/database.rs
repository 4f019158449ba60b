//! The query wrapper: one SQLite connection, two ways to read results.

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};
use crate::fixture::{self, Fixture};
use crate::schema::Schema;
use crate::value::Row;
use rusqlite::backup::Progress;
use rusqlite::{Connection, DatabaseName};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single connection to a SQLite database.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open or create a database file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened database");
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Create a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        debug!("opened in-memory database");
        Ok(Self { conn, path: None })
    }

    /// Materialize dataset `source` as `<db_dir>/<target>.db` and open it.
    ///
    /// The source is the database left behind by an earlier exercise
    /// (`<db_dir>/<source>.db`) when one exists, otherwise the fixture of the
    /// same id. Any previous `<target>.db` is replaced.
    pub fn from_existing(source: &str, target: &str, config: &DatabaseConfig) -> Result<Self> {
        fs::create_dir_all(&config.db_dir).map_err(|e| Error::io(&config.db_dir, e))?;
        let target_path = config.db_path(target);
        let previous = config.db_path(source);

        if previous != target_path && previous.exists() {
            let db = fixture::build_into(&target_path, |staging| {
                fs::copy(&previous, staging)
                    .map(drop)
                    .map_err(|e| Error::io(&previous, e))
            })?;
            debug!(from = %previous.display(), to = %target_path.display(), "copied database");
            return Ok(db);
        }

        Fixture::locate(source, &config.fixtures_dir)?.materialize(&target_path)
    }

    /// Open an empty database at `<db_dir>/<id>.db`, deleting any previous one.
    pub fn from_scratch(id: &str, config: &DatabaseConfig) -> Result<Self> {
        fs::create_dir_all(&config.db_dir).map_err(|e| Error::io(&config.db_dir, e))?;
        let path = config.db_path(id);
        fixture::remove_if_exists(&path)?;
        Self::open(path)
    }

    /// The backing file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run a single statement that returns no rows. Returns the number of
    /// rows changed.
    pub fn execute(&self, sql: &str) -> Result<usize> {
        debug!(sql = sql.trim(), "execute");
        Ok(self.conn.execute(sql, [])?)
    }

    /// Run a script of one or more statements.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        debug!(len = sql.len(), "execute batch");
        Ok(self.conn.execute_batch(sql)?)
    }

    /// Run a seed script inside one transaction. Nothing is kept if any
    /// statement fails.
    pub fn seed(&mut self, script: &str) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(script)?;
        tx.commit()?;
        Ok(())
    }

    /// Replace the contents of this database with the database file at `path`.
    pub fn restore_from(&mut self, path: &Path) -> Result<()> {
        self.conn
            .restore(DatabaseName::Main, path, None::<fn(Progress)>)?;
        debug!(from = %path.display(), "restored database");
        Ok(())
    }

    /// Create every table and index of `schema`.
    pub fn create_schema(&self, schema: &Schema) -> Result<()> {
        debug!(tables = schema.tables.len(), "creating schema");
        self.execute_batch(&schema.to_sql())
    }

    /// Execute a query and return its first row, if any.
    pub fn select_single_row(&self, sql: &str) -> Result<Option<Row>> {
        debug!(sql = sql.trim(), "select single row");
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let first = match rows.next()? {
            Some(row) => Some(Row::from_sqlite(row)?),
            None => None,
        };
        Ok(first)
    }

    /// Execute a query and return all of its rows in result order.
    pub fn select_multiple_rows(&self, sql: &str) -> Result<Vec<Row>> {
        debug!(sql = sql.trim(), "select multiple rows");
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map([], Row::from_sqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(count = rows.len(), "selected rows");
        Ok(rows)
    }
}
