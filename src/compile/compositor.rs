use rand::Rng;

use crate::{
    assets::{
        photo::{PhotoId, PhotoPicker, PhotoPool},
        qr::QrEncoder,
    },
    compile::plan::{
        DrawOp, ImageSource, PagePlan, SheetPlan, TextAlign, TextOp, TileOutcome, TileReport,
    },
    foundation::core::{Point, Rect, Rgb8, TilePosition},
    layout::{
        grid::{PAGE_HEIGHT_CM, PAGE_WIDTH_CM, TILE_SIZE_CM, back_position, front_position},
        paginate::{PageSide, paginate},
    },
    model::song::Song,
    paint::gradient::background_for,
};

/// Footer stamped at the bottom center of every page.
pub const DEFAULT_FOOTER_TEXT: &str = "generate.blindsongscanner.com";

const BORDER_WIDTH_CM: f64 = 0.01;
const FOOTER_SIZE_PT: f32 = 8.0;
const FOOTER_COLOR: Rgb8 = Rgb8::gray(100);
const FOOTER_BASELINE_FROM_BOTTOM_CM: f64 = 0.5;
/// Front text may use the tile width minus a small inner margin.
const TEXT_MAX_WIDTH_CM: f64 = TILE_SIZE_CM - 0.5;

/// `(baseline offset from tile top, font size)` for the three front fields.
const ARTIST_LINE: (f64, f32) = (1.0, 12.0);
const TITLE_LINE: (f64, f32) = (3.0, 14.0);
const YEAR_LINE: (f64, f32) = (5.3, 18.0);

#[derive(Clone, Copy, Debug, PartialEq)]
/// Placement of the code square inside a back tile.
pub struct QrPlacement {
    /// Inset from the tile's top and left edges.
    pub offset_cm: f64,
    pub size_cm: f64,
}

impl QrPlacement {
    /// Over a photo: smaller code, so the photo shows as a frame around it.
    pub const OVER_PHOTO: Self = Self::centered(0.8);
    /// On a plain tile: larger code.
    pub const PLAIN: Self = Self::centered(0.3);

    const fn centered(offset_cm: f64) -> Self {
        Self {
            offset_cm,
            size_cm: TILE_SIZE_CM - 2.0 * offset_cm,
        }
    }

    pub fn for_tile(has_photo: bool) -> Self {
        if has_photo {
            Self::OVER_PHOTO
        } else {
            Self::PLAIN
        }
    }

    pub fn rect(self, tile: TilePosition) -> Rect {
        tile.inset_square(self.offset_cm, self.size_cm)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComposeOpts {
    pub footer_text: String,
}

impl Default for ComposeOpts {
    fn default() -> Self {
        Self {
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
        }
    }
}

/// Lay out `songs` as alternating front/back pages.
///
/// Never fails: a tile whose code cannot be generated keeps its border and photo, is logged,
/// and is reported as [`TileOutcome::Degraded`].
#[tracing::instrument(skip_all, fields(songs = songs.len(), photos = photos.len()))]
pub fn compose_sheet<R, Q>(
    songs: &[Song],
    photos: &PhotoPool,
    picker: &mut PhotoPicker<R>,
    qr: &Q,
    opts: &ComposeOpts,
) -> SheetPlan
where
    R: Rng,
    Q: QrEncoder + ?Sized,
{
    let mut plan = SheetPlan::default();

    for page in paginate(songs.len()) {
        let mut ops = Vec::new();
        push_footer(&mut ops, &opts.footer_text);

        match page.side {
            PageSide::Front => {
                for (_, idx) in page.slots() {
                    push_front_tile(&mut ops, idx, &songs[idx]);
                }
            }
            PageSide::Back => {
                for (slot, idx) in page.slots() {
                    let photo = picker.pick(photos);
                    let tile = back_position(slot);
                    let outcome =
                        push_back_tile(&mut plan, &mut ops, tile, &songs[idx], photo, qr);
                    if let TileOutcome::Degraded { reason } = &outcome {
                        tracing::warn!(
                            song_index = idx,
                            %reason,
                            "qr code generation failed; tile left without code"
                        );
                    }
                    plan.report.tiles.push(TileReport {
                        song_index: idx,
                        photo,
                        outcome,
                    });
                }
            }
        }

        tracing::debug!(
            side = ?page.side,
            pair = page.pair,
            tiles = page.tile_count,
            ops = ops.len(),
            "composed page"
        );
        plan.pages.push(PagePlan {
            descriptor: page,
            ops,
        });
    }

    plan
}

fn push_footer(ops: &mut Vec<DrawOp>, text: &str) {
    if text.is_empty() {
        return;
    }
    ops.push(DrawOp::Text(TextOp {
        text: text.to_string(),
        anchor: Point::new(
            PAGE_WIDTH_CM / 2.0,
            PAGE_HEIGHT_CM - FOOTER_BASELINE_FROM_BOTTOM_CM,
        ),
        size_pt: FOOTER_SIZE_PT,
        color: FOOTER_COLOR,
        align: TextAlign::Center,
        max_width_cm: None,
    }));
}

fn push_border(ops: &mut Vec<DrawOp>, tile: TilePosition) {
    ops.push(DrawOp::StrokeRect {
        rect: tile.square(TILE_SIZE_CM),
        color: Rgb8::BLACK,
        width_cm: BORDER_WIDTH_CM,
    });
}

fn push_front_tile(ops: &mut Vec<DrawOp>, index: usize, song: &Song) {
    let tile = front_position(index);

    for strip in background_for(index, tile, TILE_SIZE_CM) {
        ops.push(DrawOp::FillRect {
            rect: strip.rect,
            color: strip.color,
        });
    }
    push_border(ops, tile);

    let center_x = tile.x + TILE_SIZE_CM / 2.0;
    let fields = [
        (song.artist.clone(), ARTIST_LINE),
        (song.title.clone(), TITLE_LINE),
        (song.year_label(), YEAR_LINE),
    ];
    for (text, (baseline, size_pt)) in fields {
        ops.push(DrawOp::Text(TextOp {
            text,
            anchor: Point::new(center_x, tile.y + baseline),
            size_pt,
            color: Rgb8::WHITE,
            align: TextAlign::Center,
            max_width_cm: Some(TEXT_MAX_WIDTH_CM),
        }));
    }
}

fn push_back_tile<Q: QrEncoder + ?Sized>(
    plan: &mut SheetPlan,
    ops: &mut Vec<DrawOp>,
    tile: TilePosition,
    song: &Song,
    photo: Option<PhotoId>,
    qr: &Q,
) -> TileOutcome {
    if let Some(id) = photo {
        ops.push(DrawOp::Image {
            source: ImageSource::Photo(id),
            rect: tile.square(TILE_SIZE_CM),
        });
    }
    push_border(ops, tile);

    match qr.encode(&song.track_url()) {
        Ok(code) => {
            let raster = plan.push_raster(code);
            ops.push(DrawOp::Image {
                source: ImageSource::Raster(raster),
                rect: QrPlacement::for_tile(photo.is_some()).rect(tile),
            });
            TileOutcome::Drawn
        }
        Err(e) => TileOutcome::Degraded {
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compositor.rs"]
mod tests;
