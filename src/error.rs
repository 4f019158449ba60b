use std::path::PathBuf;

/// Errors raised by the database wrapper and fixture loader.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Any failure reported by SQLite, passed through untouched.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture {id:?} not found in {}", .dir.display())]
    FixtureNotFound { id: String, dir: PathBuf },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
