//! Named, versioned datasets that seed a database before tests run.
//!
//! A fixture with id `06` is either a SQLite snapshot `06.db`, copied as is,
//! or a seed script `06.sql`, applied to a fresh database holding the movie
//! schema. Snapshots win when both exist.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::schema::movie_schema;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureKind {
    /// A complete SQLite database file.
    Snapshot,
    /// SQL statements run against an empty movie schema.
    Seed,
}

impl FixtureKind {
    fn extension(self) -> &'static str {
        match self {
            FixtureKind::Snapshot => "db",
            FixtureKind::Seed => "sql",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub id: String,
    pub path: PathBuf,
    pub kind: FixtureKind,
}

impl Fixture {
    /// Find fixture `id` in `dir`.
    pub fn locate(id: &str, dir: &Path) -> Result<Self> {
        [FixtureKind::Snapshot, FixtureKind::Seed]
            .into_iter()
            .map(|kind| Fixture {
                id: id.to_string(),
                path: dir.join(format!("{id}.{}", kind.extension())),
                kind,
            })
            .find(|fixture| fixture.path.is_file())
            .ok_or_else(|| Error::FixtureNotFound {
                id: id.to_string(),
                dir: dir.to_path_buf(),
            })
    }

    /// Write this dataset to `target`, replacing any file there, and open it.
    ///
    /// On failure no file is left at `target`.
    pub fn materialize(&self, target: &Path) -> Result<Database> {
        let db = build_into(target, |staging| match self.kind {
            FixtureKind::Snapshot => fs::copy(&self.path, staging)
                .map(drop)
                .map_err(|e| Error::io(&self.path, e)),
            FixtureKind::Seed => {
                let script = fs::read_to_string(&self.path)
                    .map_err(|e| Error::io(&self.path, e))?;
                let mut db = Database::open(staging)?;
                db.create_schema(&movie_schema())?;
                db.seed(&script)
            }
        })?;
        info!(
            fixture = %self.id,
            kind = ?self.kind,
            target = %target.display(),
            "materialized fixture"
        );
        Ok(db)
    }

    /// Load this dataset into a fresh in-memory database.
    pub fn load_in_memory(&self) -> Result<Database> {
        match self.kind {
            FixtureKind::Snapshot => {
                let mut db = Database::open_in_memory()?;
                db.restore_from(&self.path)?;
                Ok(db)
            }
            FixtureKind::Seed => {
                let script = fs::read_to_string(&self.path)
                    .map_err(|e| Error::io(&self.path, e))?;
                let mut db = Database::open_in_memory()?;
                db.create_schema(&movie_schema())?;
                db.seed(&script)?;
                Ok(db)
            }
        }
    }
}

/// Replace `target` with a database file written by `build`.
///
/// `build` writes to a sibling staging path, which is renamed onto `target`
/// only once it succeeds. Any previous `target` is removed first, so a
/// failed build leaves neither file behind.
pub(crate) fn build_into<F>(target: &Path, build: F) -> Result<Database>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let staging = staging_path(target);
    remove_if_exists(target)?;
    remove_if_exists(&staging)?;
    if let Err(e) = build(&staging) {
        // The build error is the one worth reporting.
        let _ = remove_if_exists(&staging);
        return Err(e);
    }
    fs::rename(&staging, target).map_err(|e| Error::io(&staging, e))?;
    Database::open(target)
}

fn staging_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}

pub(crate) fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(Error::io(path, e)),
        _ => Ok(()),
    }
}
