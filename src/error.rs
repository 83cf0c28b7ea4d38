use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A song referenced an album that is not in the catalog.
    #[error("invalid album name: '{album}'")]
    InvalidReference { album: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
