mod album;
mod catalog;
mod error;
pub mod import;
pub mod report;
mod song;

pub use album::Album;
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use song::Song;
