use serde::Serialize;
use std::fmt;

use crate::catalog::Catalog;

/// Printed in place of a query result that has no answer.
pub const ABSENT: &str = "-";

#[derive(Debug, Clone, Serialize)]
pub struct AlbumSummary {
    pub name: String,
    pub year: i32,
    pub songs: usize,
    pub average_duration: Option<f64>,
    pub length: f64,
}

/// Aggregate view of a whole catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub albums: Vec<AlbumSummary>,
    pub songs: usize,
    pub songs_in_no_album: usize,
    pub longest_song: Option<String>,
    pub longest_album: Option<String>,
}

impl From<&Catalog> for Summary {
    fn from(catalog: &Catalog) -> Self {
        let albums = catalog
            .albums()
            .map(|album| AlbumSummary {
                name: album.name.to_string(),
                year: album.year,
                songs: catalog.count_songs(album.name),
                average_duration: catalog.average_duration_of_songs(album.name),
                length: catalog.album_length(album.name),
            })
            .collect();

        Summary {
            albums,
            songs: catalog.song_count(),
            songs_in_no_album: catalog.count_songs_in_no_album(),
            longest_song: catalog.longest_song().map(str::to_string),
            longest_album: catalog.longest_album().map(str::to_string),
        }
    }
}

impl Summary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for album in &self.albums {
            write!(
                f,
                "{} ({}): {} songs, {:.2} s",
                album.name, album.year, album.songs, album.length
            )?;
            if let Some(average) = album.average_duration {
                write!(f, ", avg {:.2} s", average)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Songs without album: {}", self.songs_in_no_album)?;
        writeln!(f, "Total songs: {}", self.songs)?;
        writeln!(
            f,
            "Longest song: {}",
            self.longest_song.as_deref().unwrap_or(ABSENT)
        )?;
        write!(
            f,
            "Longest album: {}",
            self.longest_album.as_deref().unwrap_or(ABSENT)
        )
    }
}
