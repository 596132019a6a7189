use std::io;

/// Error type for storage-metrics operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A byte quantity was constructed with a negative magnitude.
    #[error("invalid size magnitude '{0}'")]
    InvalidMagnitude(f64),

    /// A unit symbol did not match any entry in the unit table.
    #[error("invalid size unit '{0}'")]
    UnknownUnit(String),

    /// The native volume-statistics call failed for the given path.
    #[error("volume statistics failed for '{path}': {source}")]
    VolumeStat {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn unknown_unit(unit: impl Into<String>) -> Self {
        Error::UnknownUnit(unit.into())
    }

    pub(crate) fn volume_stat(path: impl Into<String>, source: io::Error) -> Self {
        Error::VolumeStat { path: path.into(), source }
    }
}

/// Result type for storage-metrics operations
pub type Result<T> = std::result::Result<T, Error>;
