use super::*;

#[test]
fn track_url_swaps_scheme_prefix() {
    assert_eq!(
        track_url("spotify:track:ABC123"),
        "https://open.spotify.com/track/ABC123"
    );
    let song = Song::new("t", "a", Some(1999), "spotify:track:4uLU6hMCjMI75M1A2tKUQC");
    assert_eq!(
        song.track_url(),
        "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"
    );
}

#[test]
fn track_url_passes_through_other_identifiers() {
    assert_eq!(
        track_url("https://example.com/song/1"),
        "https://example.com/song/1"
    );
    assert_eq!(track_url(""), "");
}

#[test]
fn year_label_blank_when_missing_or_zero() {
    assert_eq!(Song::new("t", "a", Some(1984), "u").year_label(), "1984");
    assert_eq!(Song::new("t", "a", None, "u").year_label(), "");
    assert_eq!(Song::new("t", "a", Some(0), "u").year_label(), "");
}

#[test]
fn parses_song_array_with_legacy_uri_field_and_null_year() {
    let json = br#"[
        {"title": "Song A", "artist": "Artist A", "year": 1977, "trackUri": "spotify:track:a"},
        {"title": "Song B", "artist": "Artist B", "year": null, "spotifyUri": "spotify:track:b"},
        {"title": "Song C", "artist": "Artist C", "trackUri": "spotify:track:c"}
    ]"#;
    let songs = songs_from_json_slice(json).unwrap();
    assert_eq!(songs.len(), 3);
    assert_eq!(songs[0].year, Some(1977));
    assert_eq!(songs[1].track_uri, "spotify:track:b");
    assert_eq!(songs[1].year, None);
    assert_eq!(songs[2].year, None);
}

#[test]
fn parses_catalog_playlist_response() {
    let json = br#"{"items": [
        {"track": {"uri": "spotify:track:x", "name": "X", "artists": [{"name": "Ax"}],
                   "album": {"release_date": "2001-05-01"}}},
        {"track": null}
    ]}"#;
    let songs = songs_from_json_slice(json).unwrap();
    assert_eq!(songs, vec![Song::new("X", "Ax", Some(2001), "spotify:track:x")]);
}

#[test]
fn rejects_malformed_song_list() {
    let err = songs_from_json_slice(br#"{"nope": 1}"#).unwrap_err();
    assert!(matches!(err, SongTilesError::Serde(_)));
}

#[test]
fn save_then_load_preserves_order() {
    let dir = std::path::PathBuf::from("target").join("unit_song_io");
    let path = dir.join("songs.json");
    let songs = vec![
        Song::new("First", "One", Some(1960), "spotify:track:1"),
        Song::new("Second", "Two", None, "spotify:track:2"),
    ];
    save_songs(&path, &songs).unwrap();
    assert_eq!(load_songs(&path).unwrap(), songs);
}
