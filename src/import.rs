use csv::ReaderBuilder;
use log::{debug, info, warn};
use serde::Serialize;
use std::{fs::File, io::Read, path::Path};

use crate::{
    album::AlbumRow,
    catalog::Catalog,
    error::{Error, Result},
    song::SongRow,
};

/// Outcome of loading CSV rows into a catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Album rows applied, including year overwrites.
    pub albums: usize,
    /// Songs actually inserted. Duplicate rows are not counted.
    pub songs: usize,
    /// Rows that could not be parsed or referenced an unknown album.
    pub skipped: usize,
}

impl ImportSummary {
    fn merge(self, other: ImportSummary) -> Self {
        ImportSummary {
            albums: self.albums + other.albums,
            songs: self.songs + other.songs,
            skipped: self.skipped + other.skipped,
        }
    }
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Reads `name,year` rows into the catalog.
pub fn read_albums<R: Read>(catalog: &mut Catalog, input: R) -> Result<ImportSummary> {
    let mut reader = reader(input);
    reader.headers()?;

    let mut summary = ImportSummary::default();
    for result in reader.deserialize::<AlbumRow>() {
        match result {
            Ok(row) => {
                catalog.add_album(row.name, row.year);
                summary.albums += 1;
            }
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("Skipping invalid album row: {}", e);
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}

/// Reads `name,album,duration` rows into the catalog. Albums must be loaded first.
pub fn read_songs<R: Read>(catalog: &mut Catalog, input: R) -> Result<ImportSummary> {
    let mut reader = reader(input);
    reader.headers()?;

    let mut summary = ImportSummary::default();
    for result in reader.deserialize::<SongRow>() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("Skipping invalid song row: {}", e);
                summary.skipped += 1;
                continue;
            }
        };

        let album = row.album.as_deref().filter(|a| !a.is_empty());
        let before = catalog.song_count();
        match catalog.add_song(row.name, album, row.duration) {
            Ok(()) if catalog.song_count() > before => summary.songs += 1,
            Ok(()) => debug!("Ignoring duplicate song row"),
            Err(Error::InvalidReference { album }) => {
                warn!("Skipping song of unknown album '{}'", album);
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(summary)
}

/// Loads an album file and then a song file into a new catalog.
pub fn load(albums: &Path, songs: &Path) -> Result<(Catalog, ImportSummary)> {
    let mut catalog = Catalog::new();

    let summary = read_albums(&mut catalog, File::open(albums)?)?
        .merge(read_songs(&mut catalog, File::open(songs)?)?);

    info!(
        "Catalog loaded with {} albums and {} songs ({} rows skipped).",
        catalog.album_count(),
        catalog.song_count(),
        summary.skipped
    );
    Ok((catalog, summary))
}
