use super::*;

#[test]
fn extracts_id_from_uri_url_and_bare_id() {
    assert_eq!(
        extract_playlist_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").unwrap(),
        "37i9dQZF1DXcBWIGoYBM5M"
    );
    assert_eq!(
        extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DX4o1oenSJRJd?si=abc")
            .unwrap(),
        "37i9dQZF1DX4o1oenSJRJd"
    );
    assert_eq!(extract_playlist_id("abc123").unwrap(), "abc123");
}

#[test]
fn bare_id_must_span_whole_input() {
    assert!(matches!(
        extract_playlist_id("  abc123  "),
        Err(SongTilesError::Validation(_))
    ));
    assert!(extract_playlist_id("abc123\n").is_err());
    // URI and URL forms match anywhere in the input.
    assert_eq!(
        extract_playlist_id(" spotify:playlist:abc123 ").unwrap(),
        "abc123"
    );
}

#[test]
fn rejects_malformed_identifiers() {
    for bad in ["", "https://open.spotify.com/album/xyz", "not an id", "playlist/"] {
        let err = extract_playlist_id(bad).unwrap_err();
        assert!(
            matches!(err, SongTilesError::Validation(_)),
            "expected validation error for {bad:?}"
        );
    }
}

#[test]
fn release_year_handles_partial_and_garbage_dates() {
    assert_eq!(release_year("1969-09-26"), Some(1969));
    assert_eq!(release_year("1969"), Some(1969));
    assert_eq!(release_year("69"), None);
    assert_eq!(release_year("abcd-01-01"), None);
    assert_eq!(release_year(""), None);
}

#[test]
fn response_mapping_skips_null_tracks_and_uses_first_artist() {
    let resp: PlaylistTracksResponse = serde_json::from_str(
        r#"{"items": [
            {"track": {"uri": "spotify:track:1", "name": "One",
                       "artists": [{"name": "Lead"}, {"name": "Feature"}],
                       "album": {"release_date": "1991-01-01"}}},
            {"track": null},
            {"track": {"uri": "spotify:track:2", "name": "Two", "artists": [],
                       "album": {"release_date": ""}}}
        ]}"#,
    )
    .unwrap();

    let songs = songs_from_playlist_response(resp);
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0], Song::new("One", "Lead", Some(1991), "spotify:track:1"));
    assert_eq!(songs[1], Song::new("Two", "", None, "spotify:track:2"));
}
