use image::RgbImage;

use crate::{
    assets::photo::PhotoId,
    foundation::core::{Point, Rect, Rgb8},
    layout::paginate::{PageDescriptor, PageSide},
};

#[derive(Clone, Debug, Default)]
/// Backend-agnostic document plan for one sheet.
///
/// A plan consists of:
/// - pages in print order, each a list of primitive draw operations
/// - rasters generated during composition (QR codes), referenced by [`RasterId`]
/// - a per-tile report of back tiles that rendered degraded
///
/// Geometry is in centimeters with the origin at each page's top-left corner.
pub struct SheetPlan {
    pub pages: Vec<PagePlan>,
    pub rasters: Vec<RgbImage>,
    pub report: SheetReport,
}

impl SheetPlan {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages_on(&self, side: PageSide) -> impl Iterator<Item = &PagePlan> {
        self.pages.iter().filter(move |p| p.descriptor.side == side)
    }

    pub fn raster(&self, id: RasterId) -> Option<&RgbImage> {
        self.rasters.get(id.0)
    }

    pub(crate) fn push_raster(&mut self, image: RgbImage) -> RasterId {
        self.rasters.push(image);
        RasterId(self.rasters.len() - 1)
    }
}

#[derive(Clone, Debug)]
/// Draw operations for one page, in paint order.
pub struct PagePlan {
    pub descriptor: PageDescriptor,
    pub ops: Vec<DrawOp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Index of a raster in [`SheetPlan::rasters`].
pub struct RasterId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where the pixels of an [`DrawOp::Image`] come from.
pub enum ImageSource {
    Photo(PhotoId),
    Raster(RasterId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
/// Single-font text run. `anchor.y` is the first line's baseline; `anchor.x` is interpreted
/// according to `align`.
pub struct TextOp {
    pub text: String,
    pub anchor: Point,
    pub size_pt: f32,
    pub color: Rgb8,
    pub align: TextAlign,
    /// Wrap onto further lines below the first when wider than this.
    pub max_width_cm: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
/// Draw operation emitted by the compositor.
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgb8,
    },
    StrokeRect {
        rect: Rect,
        color: Rgb8,
        width_cm: f64,
    },
    /// Raster stretched to fill `rect`.
    Image {
        source: ImageSource,
        rect: Rect,
    },
    Text(TextOp),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// How a back tile came out.
pub enum TileOutcome {
    Drawn,
    /// Border and photo drawn, but no code.
    Degraded { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileReport {
    pub song_index: usize,
    pub photo: Option<PhotoId>,
    pub outcome: TileOutcome,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Outcome of every back tile, in song order.
pub struct SheetReport {
    pub tiles: Vec<TileReport>,
}

impl SheetReport {
    pub fn degraded_count(&self) -> usize {
        self.degraded().count()
    }

    pub fn degraded(&self) -> impl Iterator<Item = &TileReport> {
        self.tiles
            .iter()
            .filter(|t| matches!(t.outcome, TileOutcome::Degraded { .. }))
    }

    pub fn is_clean(&self) -> bool {
        self.degraded_count() == 0
    }
}
