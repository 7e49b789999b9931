mod config;
mod io;

pub use config::ConfigError;
pub use io::IoError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("walk cancelled")]
    Cancelled,

    #[error("background worker exited without reporting a result")]
    WorkerLost,
}

pub type Result<T> = std::result::Result<T, Error>;
