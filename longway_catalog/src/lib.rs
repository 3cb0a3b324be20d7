// Shared song catalog crate.
//
// Provides the read-only chart catalog the run map draws challenges from.
// The map generator never imports a global song list: callers load a
// `Catalog` and hand it to the generator explicitly.
//
// Architecture:
// - `song.rs`: `Song` record, difficulty tiers, `DifficultyRule`
// - `lib.rs` (this file): `Catalog` struct, loads and queries the JSON catalog
//
// The catalog is loaded from JSON via `Catalog::from_json()` (JSON string in,
// typed struct out) or from disk via `Catalog::load()`. The
// `default_catalog()` convenience function uses `include_str!` to embed
// `data/songs.json` at compile time.
//
// Entry order is preserved exactly as in the source file. Filtering keeps
// that order, which is what makes sampling by index reproducible.

pub mod song;

pub use song::{DifficultyRule, MAX_DIFFICULTY, MIN_DIFFICULTY, Song};

use std::path::{Path, PathBuf};

/// Errors raised while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The JSON did not match the catalog format.
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog needs at least one song (the boss fallback is the first entry).
    #[error("catalog contains no songs")]
    Empty,
}

/// The top-level JSON structure for the catalog file.
#[derive(Debug, serde::Deserialize)]
struct CatalogFile {
    songs: Vec<Song>,
}

/// A loaded song catalog with query methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Build a catalog from songs in their canonical order.
    pub fn new(songs: Vec<Song>) -> Result<Self, CatalogError> {
        if songs.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Catalog { songs })
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Catalog::new(file.songs)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Catalog::from_json(&json)
    }

    /// All songs, in catalog order.
    pub fn all(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Always false: construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// The first song. Exists for every constructed catalog.
    pub fn first(&self) -> &Song {
        &self.songs[0]
    }

    /// First song whose title matches exactly.
    pub fn find_by_title(&self, title: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.title == title)
    }

    /// Songs admitted by `rule`, in catalog order.
    pub fn filtered(&self, rule: DifficultyRule) -> Vec<&Song> {
        self.songs.iter().filter(|s| rule.admits(s)).collect()
    }
}

/// Load the default catalog embedded at compile time.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_catalog() -> Catalog {
    let json = include_str!("../../data/songs.json");
    Catalog::from_json(json).expect("embedded songs.json is malformed")
}
