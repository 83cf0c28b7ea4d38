use serde::Deserialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single song of the catalog.
///
/// Two songs are the same entity when name, album and duration all match.
/// Durations are compared by bit pattern so `Eq` and `Hash` agree.
#[derive(Debug, Clone)]
pub struct Song {
    pub name: String,
    pub album: Option<String>,
    /// Length in seconds.
    pub duration: f64,
}

impl Song {
    pub fn new(name: impl Into<String>, album: Option<&str>, duration: f64) -> Self {
        Song {
            name: name.into(),
            album: album.map(str::to_string),
            duration,
        }
    }

    pub fn is_in_album(&self, album: &str) -> bool {
        self.album.as_deref() == Some(album)
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.album == other.album
            && self.duration.to_bits() == other.duration.to_bits()
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.album.hash(state);
        self.duration.to_bits().hash(state);
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.album {
            Some(ref album) => write!(f, "{} [{}] ({} s)", self.name, album, self.duration),
            None => write!(f, "{} ({} s)", self.name, self.duration),
        }
    }
}

/// One row of a song CSV file. An empty album cell means no album.
#[derive(Debug, Deserialize)]
pub struct SongRow {
    #[serde(alias = "Track Name")]
    pub name: String,
    #[serde(alias = "Album Name", default)]
    pub album: Option<String>,
    #[serde(alias = "Duration")]
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_is_structural() {
        let a = Song::new("Equinoxe", Some("Equinoxe"), 300.5);
        let b = Song::new("Equinoxe", Some("Equinoxe"), 300.5);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn any_differing_field_makes_a_different_song() {
        let base = Song::new("Equinoxe", Some("Equinoxe"), 300.5);
        assert_ne!(base, Song::new("Equinoxe 2", Some("Equinoxe"), 300.5));
        assert_ne!(base, Song::new("Equinoxe", None, 300.5));
        assert_ne!(base, Song::new("Equinoxe", Some("Equinoxe"), 300.25));
    }

    #[test]
    fn display() {
        assert_eq!(
            Song::new("Oxygene Part 4", Some("Oxygene"), 4.5).to_string(),
            "Oxygene Part 4 [Oxygene] (4.5 s)"
        );
        assert_eq!(Song::new("Unknown", None, 3.0).to_string(), "Unknown (3 s)");
    }
}
