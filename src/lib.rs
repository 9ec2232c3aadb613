//! songtiles turns an ordered song list into a printable, double-sided A4 sheet of 6cm tiles.
//!
//! Each tile's front shows artist, title and year over a color gradient; its back shows a
//! QR code linking to the track, optionally over a randomly chosen background photo.
//!
//! # Pipeline overview
//!
//! 1. **Paginate**: `song count -> [PageDescriptor]` (front 0, back 0, front 1, back 1, ...)
//! 2. **Compose**: `songs + photos -> SheetPlan` (per-page draw operations, per-tile report)
//! 3. **Render**: `SheetPlan -> DocumentBackend` (PDF via `printpdf`)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Print alignment**: back pages mirror tile columns so a sheet flipped about its
//!   vertical axis puts every back tile under its front tile.
//! - **Deterministic fronts**: front-page output depends only on the song list. Photo
//!   choice on backs is random but seedable.
//! - **Best-effort backs**: a tile whose code fails to encode is reported as degraded and
//!   the sheet still renders.
#![forbid(unsafe_code)]

mod assets;
mod catalog;
mod compile;
mod foundation;
mod layout;
mod model;
mod paint;
mod pipeline;
mod render;

pub use assets::photo::{PHOTO_PIXELS, Photo, PhotoId, PhotoPicker, PhotoPool, decode_photo};
pub use assets::qr::{QR_MIN_PIXELS, QrCodeEncoder, QrEncoder};
pub use catalog::http::{DEFAULT_API_BASE, HttpCatalog, TrackCatalog};
pub use catalog::playlist::{
    CatalogAlbum, CatalogArtist, CatalogTrack, PLAYLIST_TRACK_FIELDS, PlaylistItem,
    PlaylistTracksResponse, extract_playlist_id, release_year, songs_from_playlist_response,
};
pub use compile::compositor::{ComposeOpts, DEFAULT_FOOTER_TEXT, QrPlacement, compose_sheet};
pub use compile::plan::{
    DrawOp, ImageSource, PagePlan, RasterId, SheetPlan, SheetReport, TextAlign, TextOp,
    TileOutcome, TileReport,
};
pub use foundation::core::{CM_PER_PT, Point, Rect, Rgb8, TilePosition, Vec2};
pub use foundation::error::{SongTilesError, SongTilesResult};
pub use layout::grid::{
    GridCell, MARGIN_CM, PAGE_HEIGHT_CM, PAGE_WIDTH_CM, ROWS_PER_PAGE, SPACING_CM, TILE_SIZE_CM,
    TILES_PER_PAGE, TILES_PER_ROW, back_cell, back_position, front_cell, front_position,
};
pub use layout::paginate::{PageDescriptor, PageSide, page_pair_count, paginate};
pub use model::song::{
    Song, TRACK_URI_PREFIX, TRACK_URL_PREFIX, load_songs, save_songs, songs_from_json_slice,
    track_url,
};
pub use paint::gradient::{
    FillStrip, GRADIENT_STEPS, GradientPair, PALETTE, STRIP_OVERLAP_RATIO, background_for,
    gradient_for, palette_index,
};
pub use pipeline::{
    DEFAULT_TITLE, SheetDocument, SheetOptions, generate_sheet, render_sheet, write_sheet_pdf,
};
pub use render::backend::{DocumentBackend, execute_plan};
pub use render::pdf::PdfBackend;
pub use render::text::{LINE_HEIGHT_FACTOR, line_height_cm, text_width_cm, wrap_lines};
