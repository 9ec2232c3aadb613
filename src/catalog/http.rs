use std::time::Duration;

use crate::{
    catalog::playlist::{PLAYLIST_TRACK_FIELDS, PlaylistTracksResponse, songs_from_playlist_response},
    foundation::error::{SongTilesError, SongTilesResult},
    model::song::Song,
};

/// Default catalog Web API base.
pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1";

/// Source of song lists, keyed by playlist id.
pub trait TrackCatalog {
    /// Fetch every track of a playlist, in playlist order. Fails as a whole; no partial lists.
    fn playlist_tracks(&self, playlist_id: &str) -> SongTilesResult<Vec<Song>>;
}

#[derive(serde::Deserialize)]
struct TokenResponse {
    token: String,
}

/// [`TrackCatalog`] backed by the catalog Web API.
///
/// Access tokens come from a token source endpoint answering `{"token": "..."}`.
pub struct HttpCatalog {
    agent: ureq::Agent,
    token_url: String,
    api_base: String,
}

impl HttpCatalog {
    pub fn new(token_url: impl Into<String>, api_base: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            agent,
            token_url: token_url.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn access_token(&self) -> SongTilesResult<String> {
        let resp = self
            .agent
            .get(&self.token_url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| SongTilesError::catalog(format!("fetch access token: {e}")))?;
        let body: TokenResponse = resp
            .into_json()
            .map_err(|e| SongTilesError::catalog(format!("parse access token: {e}")))?;
        Ok(body.token)
    }

    fn playlist_tracks_url(&self, playlist_id: &str) -> String {
        format!(
            "{}/playlists/{}/tracks?fields={}",
            self.api_base, playlist_id, PLAYLIST_TRACK_FIELDS
        )
    }
}

impl TrackCatalog for HttpCatalog {
    #[tracing::instrument(skip(self))]
    fn playlist_tracks(&self, playlist_id: &str) -> SongTilesResult<Vec<Song>> {
        let token = self.access_token()?;
        let resp = self
            .agent
            .get(&self.playlist_tracks_url(playlist_id))
            .set("Authorization", &format!("Bearer {token}"))
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => SongTilesError::catalog(format!(
                    "failed to fetch playlist data (status {code})"
                )),
                other => SongTilesError::catalog(format!("failed to fetch playlist data: {other}")),
            })?;
        let body: PlaylistTracksResponse = resp
            .into_json()
            .map_err(|e| SongTilesError::catalog(format!("parse playlist data: {e}")))?;

        let songs = songs_from_playlist_response(body);
        tracing::debug!(count = songs.len(), "fetched playlist tracks");
        Ok(songs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/http.rs"]
mod tests;
