use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal conversion failures. Symlink problems are not in here: they are
/// recorded in the `EmitReport` and conversion carries on.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to open RC script {}: {source}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read RC script {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("RC script {} line {line} is {len} bytes long (limit {max})", path.display())]
    LineTooLong {
        path: PathBuf,
        line: usize,
        len: usize,
        max: usize,
    },

    #[error("Failed to open {} for writing: {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
