use std::path::Path;

use anyhow::Context;

use crate::{
    catalog::playlist::{PlaylistTracksResponse, songs_from_playlist_response},
    foundation::error::{SongTilesError, SongTilesResult},
};

/// URI-scheme prefix of catalog track identifiers.
pub const TRACK_URI_PREFIX: &str = "spotify:track:";
/// Web-browsable prefix that replaces [`TRACK_URI_PREFIX`] in scannable links.
pub const TRACK_URL_PREFIX: &str = "https://open.spotify.com/track/";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One song, rendered as one tile. Position in the input list is the tile index.
pub struct Song {
    /// Track title, printed in the middle of the front.
    pub title: String,
    /// Primary artist, printed at the top of the front.
    pub artist: String,
    /// Release year, printed large at the bottom of the front.
    #[serde(default)]
    pub year: Option<i32>,
    /// Catalog track identifier (`spotify:track:<id>`) encoded on the back.
    #[serde(alias = "spotifyUri")]
    pub track_uri: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        year: Option<i32>,
        track_uri: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            year,
            track_uri: track_uri.into(),
        }
    }

    /// Scannable web link for this song's track.
    pub fn track_url(&self) -> String {
        track_url(&self.track_uri)
    }

    /// Year as printed on the front; a missing or zero year prints as an empty string.
    pub fn year_label(&self) -> String {
        match self.year {
            Some(y) if y != 0 => y.to_string(),
            _ => String::new(),
        }
    }
}

/// Convert a catalog track URI to its web URL by swapping the scheme prefix.
///
/// Identifiers that do not carry the prefix are returned unchanged.
pub fn track_url(track_uri: &str) -> String {
    match track_uri.find(TRACK_URI_PREFIX) {
        Some(at) => {
            let mut out = String::with_capacity(track_uri.len() + 16);
            out.push_str(&track_uri[..at]);
            out.push_str(TRACK_URL_PREFIX);
            out.push_str(&track_uri[at + TRACK_URI_PREFIX.len()..]);
            out
        }
        None => track_uri.to_string(),
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum SongListJson {
    Songs(Vec<Song>),
    Playlist(PlaylistTracksResponse),
}

/// Parse a song list: either a JSON array of songs or a raw catalog playlist response.
pub fn songs_from_json_slice(bytes: &[u8]) -> SongTilesResult<Vec<Song>> {
    let parsed: SongListJson = serde_json::from_slice(bytes)
        .map_err(|e| SongTilesError::serde(format!("parse song list: {e}")))?;
    Ok(match parsed {
        SongListJson::Songs(songs) => songs,
        SongListJson::Playlist(resp) => songs_from_playlist_response(resp),
    })
}

/// Read a song list JSON file (see [`songs_from_json_slice`]).
pub fn load_songs(path: &Path) -> SongTilesResult<Vec<Song>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read song list '{}'", path.display()))?;
    songs_from_json_slice(&bytes)
}

/// Write a song list as pretty JSON, creating parent directories as needed.
pub fn save_songs(path: &Path, songs: &[Song]) -> SongTilesResult<()> {
    let json = serde_json::to_vec_pretty(songs)
        .map_err(|e| SongTilesError::serde(format!("encode song list: {e}")))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("write song list '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/model/song.rs"]
mod tests;
