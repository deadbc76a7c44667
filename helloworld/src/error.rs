//! Error types for the reporter.
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. All of them happen before the first report is written.
#[derive(Error, Debug)]
pub enum Error {
    /// The MPI runtime could not be initialized
    #[error("failed to initialize the MPI runtime")]
    InitFailure,

    /// Processor name returned by the runtime was not UTF-8
    #[error("invalid processor name: {0}")]
    ProcessorName(#[source] FromUtf8Error),

    /// Runtime reported a rank outside of [0, size) or an empty group
    #[error("invalid membership: rank {rank} out of {size} processors")]
    InvalidMembership { rank: i32, size: i32 },

    /// Config file could not be read
    #[error("failed to read config file {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),

    /// Config file could not be parsed
    #[error("failed to parse config file {}: {}", .0.display(), .1)]
    Config(PathBuf, #[source] serde_yaml::Error),
}
