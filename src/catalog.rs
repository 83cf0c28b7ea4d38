use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use crate::{
    album::Album,
    error::{Error, Result},
    song::Song,
};

/// In-memory catalog of albums and songs.
///
/// Both collections are append-only and keep insertion order, which makes
/// every query deterministic: ties in `longest_song` and `longest_album` go
/// to whichever entry was added first.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    albums: IndexMap<String, i32>,
    songs: IndexSet<Song>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an album, or overwrites the year of an existing one.
    pub fn add_album(&mut self, name: impl Into<String>, year: i32) {
        let name = name.into();
        debug!("Adding album '{}' ({})", name, year);
        if let Some(previous) = self.albums.insert(name, year) {
            trace!("Overwrote previous year {}", previous);
        }
    }

    /// Adds a song. Fails if `album` names an album that is not in the catalog.
    /// Adding a song identical to an existing one changes nothing.
    pub fn add_song(
        &mut self,
        name: impl Into<String>,
        album: Option<&str>,
        duration: f64,
    ) -> Result<()> {
        if let Some(album) = album
            && !self.albums.contains_key(album)
        {
            return Err(Error::InvalidReference {
                album: album.to_string(),
            });
        }

        let song = Song::new(name, album, duration);
        debug!("Adding song {}", song);
        if !self.songs.insert(song) {
            trace!("Song was already in the catalog");
        }
        Ok(())
    }

    /// All song names in ascending lexicographic order, once per song.
    pub fn ordered_song_names(&self) -> impl Iterator<Item = &str> {
        let mut names: Vec<&str> = self.songs.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.into_iter()
    }

    /// All album names, in the order they were first added.
    pub fn album_names(&self) -> impl Iterator<Item = &str> {
        self.albums.keys().map(String::as_str)
    }

    pub fn albums_in_year(&self, year: i32) -> impl Iterator<Item = &str> {
        self.albums
            .iter()
            .filter(move |(_, y)| **y == year)
            .map(|(name, _)| name.as_str())
    }

    /// Counts the songs whose album is exactly `album`. Unknown albums count 0.
    pub fn count_songs(&self, album: &str) -> usize {
        self.songs_in_album(album).count()
    }

    pub fn count_songs_in_no_album(&self) -> usize {
        self.songs.iter().filter(|s| s.album.is_none()).count()
    }

    /// Mean duration of the songs of `album`, `None` if it has no songs.
    pub fn average_duration_of_songs(&self, album: &str) -> Option<f64> {
        let (count, total) = self
            .songs_in_album(album)
            .fold((0usize, 0.0f64), |(count, total), song| {
                (count + 1, total + song.duration)
            });
        if count == 0 {
            return None;
        }
        Some(total / count as f64)
    }

    /// Name of the song with the greatest duration.
    pub fn longest_song(&self) -> Option<&str> {
        self.songs
            .iter()
            .fold(None::<&Song>, |longest, song| match longest {
                Some(l) if song.duration.total_cmp(&l.duration).is_le() => Some(l),
                _ => Some(song),
            })
            .map(|s| s.name.as_str())
    }

    /// Name of the album with the greatest total length.
    /// Albums without songs are never returned.
    pub fn longest_album(&self) -> Option<&str> {
        self.album_names()
            .filter(|name| self.count_songs(name) > 0)
            .map(|name| (name, self.album_length(name)))
            .fold(None::<(&str, f64)>, |longest, (name, length)| match longest {
                Some(l) if length.total_cmp(&l.1).is_le() => Some(l),
                _ => Some((name, length)),
            })
            .map(|(name, _)| name)
    }

    pub fn album_year(&self, album: &str) -> Option<i32> {
        self.albums.get(album).copied()
    }

    pub fn albums(&self) -> impl Iterator<Item = Album<'_>> {
        self.albums.iter().map(|(name, year)| Album {
            name: name.as_str(),
            year: *year,
        })
    }

    /// All songs, in the order they were first added.
    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty() && self.songs.is_empty()
    }

    /// Total length of an album: song count times average duration.
    pub(crate) fn album_length(&self, album: &str) -> f64 {
        self.count_songs(album) as f64 * self.average_duration_of_songs(album).unwrap_or(0.0)
    }

    fn songs_in_album<'a>(&'a self, album: &'a str) -> impl Iterator<Item = &'a Song> {
        self.songs.iter().filter(move |s| s.is_in_album(album))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jarre() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_album("Oxygene", 1976);
        catalog.add_album("Equinoxe", 1978);
        catalog.add_album("Zoolook", 1984);
        catalog.add_song("Oxygene Part 1", Some("Oxygene"), 7.6).unwrap();
        catalog.add_song("Oxygene Part 4", Some("Oxygene"), 4.1).unwrap();
        catalog.add_song("Equinoxe Part 5", Some("Equinoxe"), 3.8).unwrap();
        catalog.add_song("Rendez-Vous", None, 9.0).unwrap();
        catalog
    }

    #[test]
    fn add_album_overwrites_year_in_place() {
        let mut catalog = jarre();
        catalog.add_album("Oxygene", 1977);
        assert_eq!(catalog.album_year("Oxygene"), Some(1977));
        assert_eq!(catalog.album_count(), 3);
        assert_eq!(
            catalog.album_names().collect::<Vec<_>>(),
            ["Oxygene", "Equinoxe", "Zoolook"]
        );
    }

    #[test]
    fn add_song_rejects_unknown_album() {
        let mut catalog = jarre();
        let err = catalog
            .add_song("Ethnicolor", Some("zoolook"), 11.7)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidReference { ref album } if album == "zoolook"));
        assert_eq!(catalog.song_count(), 4);
    }

    #[test]
    fn albums_in_year() {
        let mut catalog = jarre();
        catalog.add_album("Chronologie", 1978);
        assert_eq!(
            catalog.albums_in_year(1978).collect::<Vec<_>>(),
            ["Equinoxe", "Chronologie"]
        );
        assert_eq!(catalog.albums_in_year(2000).count(), 0);
    }

    #[test]
    fn counts_are_exact_matches() {
        let catalog = jarre();
        assert_eq!(catalog.count_songs("Oxygene"), 2);
        assert_eq!(catalog.count_songs("oxygene"), 0);
        assert_eq!(catalog.count_songs("Zoolook"), 0);
        assert_eq!(catalog.count_songs_in_no_album(), 1);
    }

    #[test]
    fn average_duration() {
        let catalog = jarre();
        let average = catalog.average_duration_of_songs("Oxygene").unwrap();
        assert!((average - 5.85).abs() < 1e-9);
        assert_eq!(catalog.average_duration_of_songs("Zoolook"), None);
        assert_eq!(catalog.average_duration_of_songs("Missing"), None);
    }

    #[test]
    fn album_length() {
        let catalog = jarre();
        assert!((catalog.album_length("Oxygene") - 11.7).abs() < 1e-9);
        assert_eq!(catalog.album_length("Zoolook"), 0.0);
    }

    #[test]
    fn longest_song_and_album() {
        let catalog = jarre();
        assert_eq!(catalog.longest_song(), Some("Rendez-Vous"));
        assert_eq!(catalog.longest_album(), Some("Oxygene"));
    }

    #[test]
    fn ties_go_to_the_first_added() {
        let mut catalog = Catalog::new();
        catalog.add_album("B", 2001);
        catalog.add_album("A", 2000);
        catalog.add_song("second", Some("B"), 5.0).unwrap();
        catalog.add_song("first", Some("A"), 5.0).unwrap();
        assert_eq!(catalog.longest_song(), Some("second"));
        assert_eq!(catalog.longest_album(), Some("B"));
    }

    #[test]
    fn albums_without_songs_never_win() {
        let mut catalog = Catalog::new();
        catalog.add_album("Empty", 1990);
        catalog.add_song("Loose", None, 3.0).unwrap();
        assert_eq!(catalog.longest_album(), None);
        assert_eq!(catalog.longest_song(), Some("Loose"));
    }
}
