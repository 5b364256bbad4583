use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("received no AWS groups")]
    NoGroupsSupplied,

    #[error("can't compile regex {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read group listing '{path}'")]
    ReadGroups {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse group listing '{path}'")]
    ParseGroups {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Match(#[from] MatchError),
}

pub type Result<T> = std::result::Result<T, Error>;
