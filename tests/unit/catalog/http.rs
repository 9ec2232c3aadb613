use std::{
    io::{Read, Write},
    net::TcpListener,
    thread::JoinHandle,
};

use super::*;

/// Serve one canned response per connection, in order, and hand back each request head.
fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let handle = std::thread::spawn(move || {
        let mut heads = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            heads.push(String::from_utf8_lossy(&buf).into_owned());

            let reply = format!(
                "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(reply.as_bytes()).unwrap();
        }
        heads
    });
    (base, handle)
}

fn catalog_at(base: &str) -> HttpCatalog {
    HttpCatalog::new(format!("{base}/token"), format!("{base}/v1"))
}

#[test]
fn playlist_url_includes_field_selector_and_trims_base() {
    let c = HttpCatalog::new("http://localhost/token", "https://api.example.com/v1/");
    assert_eq!(
        c.playlist_tracks_url("abc"),
        "https://api.example.com/v1/playlists/abc/tracks?fields=items(track(uri,name,artists(name),album(release_date)))"
    );
}

#[test]
fn fetches_tracks_with_bearer_token() {
    let (base, server) = serve(vec![
        (200, r#"{"token":"t0k"}"#),
        (
            200,
            r#"{"items":[{"track":{"uri":"spotify:track:1","name":"One","artists":[{"name":"Lead"}],"album":{"release_date":"1999-01-01"}}},{"track":null}]}"#,
        ),
    ]);

    let songs = catalog_at(&base).playlist_tracks("abc").unwrap();
    assert_eq!(songs, vec![Song::new("One", "Lead", Some(1999), "spotify:track:1")]);

    let heads = server.join().unwrap();
    assert!(heads[0].starts_with("GET /token "), "{}", heads[0]);
    assert!(heads[1].starts_with("GET /v1/playlists/abc/tracks?fields="), "{}", heads[1]);
    assert!(heads[1].to_ascii_lowercase().contains("authorization: bearer t0k"));
}

#[test]
fn non_success_playlist_response_is_catalog_error() {
    let (base, server) = serve(vec![
        (200, r#"{"token":"t"}"#),
        (404, r#"{"error":{"status":404,"message":"Not found."}}"#),
    ]);

    let err = catalog_at(&base).playlist_tracks("missing").unwrap_err();
    match err {
        SongTilesError::Catalog(msg) => assert!(msg.contains("404"), "{msg}"),
        other => panic!("expected catalog error, got {other:?}"),
    }
    assert_eq!(server.join().unwrap().len(), 2);
}

#[test]
fn token_endpoint_failure_is_catalog_error() {
    let (base, server) = serve(vec![(500, r#"{"error":"boom"}"#)]);

    let err = catalog_at(&base).playlist_tracks("abc").unwrap_err();
    match err {
        SongTilesError::Catalog(msg) => assert!(msg.contains("access token"), "{msg}"),
        other => panic!("expected catalog error, got {other:?}"),
    }
    // The playlist endpoint is never reached.
    assert_eq!(server.join().unwrap().len(), 1);
}
