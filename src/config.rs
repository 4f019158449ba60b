use std::path::{Path, PathBuf};

/// Overrides the directory fixtures are read from.
pub const FIXTURES_DIR_ENV: &str = "SQL_MOVIES_FIXTURES_DIR";
/// Overrides the directory database files are written to.
pub const DB_DIR_ENV: &str = "SQL_MOVIES_DB_DIR";

/// Where fixtures live and where materialized databases are written.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub fixtures_dir: PathBuf,
    pub db_dir: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        Self {
            fixtures_dir: root.join("fixtures"),
            db_dir: root.join("db"),
        }
    }
}

impl DatabaseConfig {
    pub fn new(fixtures_dir: impl Into<PathBuf>, db_dir: impl Into<PathBuf>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.into(),
            db_dir: db_dir.into(),
        }
    }

    /// Defaults, overridden by `SQL_MOVIES_FIXTURES_DIR` and `SQL_MOVIES_DB_DIR`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(FIXTURES_DIR_ENV) {
            config.fixtures_dir = dir.into();
        }
        if let Some(dir) = std::env::var_os(DB_DIR_ENV) {
            config.db_dir = dir.into();
        }
        config
    }

    pub fn with_fixtures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures_dir = dir.into();
        self
    }

    pub fn with_db_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.db_dir = dir.into();
        self
    }

    /// Path of the database file for a dataset id, e.g. `db/07.db`.
    pub fn db_path(&self, id: &str) -> PathBuf {
        self.db_dir.join(format!("{id}.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_relative_to_crate() {
        let config = DatabaseConfig::default();
        assert!(config.fixtures_dir.ends_with("fixtures"));
        assert!(config.fixtures_dir.join("sample.sql").exists());
        assert_eq!(config.db_path("07"), config.db_dir.join("07.db"));
    }

    #[test]
    fn builders_override() {
        let config = DatabaseConfig::default()
            .with_fixtures_dir("/data/fixtures")
            .with_db_dir("/tmp/dbs");
        assert_eq!(config, DatabaseConfig::new("/data/fixtures", "/tmp/dbs"));
        assert_eq!(config.db_path("06"), PathBuf::from("/tmp/dbs/06.db"));
    }
}
