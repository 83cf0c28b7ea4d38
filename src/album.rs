use serde::Deserialize;

/// A borrowed view of one catalog album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Album<'a> {
    pub name: &'a str,
    pub year: i32,
}

/// One row of an album CSV file.
#[derive(Debug, Deserialize)]
pub struct AlbumRow {
    #[serde(alias = "Album Name")]
    pub name: String,
    #[serde(alias = "Year")]
    pub year: i32,
}
