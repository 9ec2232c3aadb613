use crate::{
    foundation::error::{SongTilesError, SongTilesResult},
    model::song::Song,
};

/// Field selector sent with playlist track requests; keeps responses to what a tile needs.
pub const PLAYLIST_TRACK_FIELDS: &str = "items(track(uri,name,artists(name),album(release_date)))";

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Catalog response for a playlist's tracks (restricted to [`PLAYLIST_TRACK_FIELDS`]).
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PlaylistItem {
    /// Null for removed or unavailable tracks.
    #[serde(default)]
    pub track: Option<CatalogTrack>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CatalogTrack {
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<CatalogArtist>,
    #[serde(default)]
    pub album: CatalogAlbum,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CatalogArtist {
    pub name: String,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct CatalogAlbum {
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD` depending on catalog precision.
    #[serde(default)]
    pub release_date: String,
}

/// Extract a playlist id from a catalog URI, a web URL, or a bare id.
///
/// Forms are tried in order: `spotify:playlist:<id>`, `.../playlist/<id>`, `<id>`.
/// Ids are non-empty ASCII alphanumeric runs. A bare id must be the whole input, so
/// surrounding whitespace is rejected.
pub fn extract_playlist_id(input: &str) -> SongTilesResult<String> {
    for marker in ["spotify:playlist:", "playlist/"] {
        for (at, _) in input.match_indices(marker) {
            let id = leading_alnum(&input[at + marker.len()..]);
            if !id.is_empty() {
                return Ok(id.to_string());
            }
        }
    }

    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Ok(input.to_string());
    }

    Err(SongTilesError::validation(format!(
        "invalid playlist URL or ID: '{input}'"
    )))
}

fn leading_alnum(s: &str) -> &str {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_alphanumeric())
        .unwrap_or(s.len());
    &s[..end]
}

/// Map a playlist response to songs, skipping items whose track is missing.
pub fn songs_from_playlist_response(resp: PlaylistTracksResponse) -> Vec<Song> {
    resp.items
        .into_iter()
        .filter_map(|item| item.track)
        .map(song_from_track)
        .collect()
}

fn song_from_track(track: CatalogTrack) -> Song {
    let artist = track
        .artists
        .into_iter()
        .next()
        .map(|a| a.name)
        .unwrap_or_default();
    let year = release_year(&track.album.release_date);
    Song {
        title: track.name,
        artist,
        year,
        track_uri: track.uri,
    }
}

/// Year from the first four characters of a release date.
pub fn release_year(release_date: &str) -> Option<i32> {
    release_date.get(..4)?.parse().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/playlist.rs"]
mod tests;
