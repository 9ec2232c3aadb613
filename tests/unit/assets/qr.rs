use super::*;

#[test]
fn encodes_track_url_as_square_raster_with_margin() {
    let enc = QrCodeEncoder::default();
    let img = enc
        .encode("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC")
        .unwrap();
    assert_eq!(img.width(), img.height());
    assert!(img.width() >= QR_MIN_PIXELS);

    // Margin is white; the symbol's top-left finder pattern starts dark right after it.
    assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
    let has_dark = img.pixels().any(|p| p.0[0] == 0);
    assert!(has_dark);
}

#[test]
fn zero_margin_starts_with_finder_pattern() {
    let enc = QrCodeEncoder {
        min_pixels: 50,
        margin_modules: 0,
    };
    let img = enc.encode("hello").unwrap();
    assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
}

#[test]
fn oversized_payload_is_an_error() {
    let payload = "x".repeat(5000);
    let err = QrCodeEncoder::default().encode(&payload).unwrap_err();
    assert!(matches!(err, SongTilesError::Qr(_)));
}
