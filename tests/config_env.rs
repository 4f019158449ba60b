//! Runs in its own test binary so the environment it sets is not shared
//! with other tests.

use sql_movies::config::{DB_DIR_ENV, FIXTURES_DIR_ENV};
use sql_movies::{row, Database, DatabaseConfig};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn env_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let fixtures = dir.path().join("fixtures");
    let dbs = dir.path().join("dbs");
    std::fs::create_dir_all(&fixtures)?;
    std::fs::write(
        fixtures.join("tiny.sql"),
        "INSERT INTO GENRES (id, genre) VALUES (1, 'Music');",
    )?;

    std::env::set_var(FIXTURES_DIR_ENV, &fixtures);
    std::env::set_var(DB_DIR_ENV, &dbs);
    let config = DatabaseConfig::from_env();
    std::env::remove_var(FIXTURES_DIR_ENV);
    std::env::remove_var(DB_DIR_ENV);

    assert_eq!(config, DatabaseConfig::new(&fixtures, &dbs));
    assert_eq!(config.db_path("07"), PathBuf::from(&dbs).join("07.db"));

    let db = Database::from_existing("tiny", "07", &config)?;
    assert_eq!(db.path(), Some(dbs.join("07.db").as_path()));
    assert_eq!(
        db.select_single_row("SELECT genre FROM GENRES")?,
        Some(row! { "genre" => "Music" })
    );
    Ok(())
}
