pub use kurbo::{Point, Rect, Vec2};

/// Centimeters per typographic point (1pt = 1/72in).
pub const CM_PER_PT: f64 = 2.54 / 72.0;

/// Top-left corner of a tile in page space, in centimeters (origin at the page's top-left).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TilePosition {
    pub x: f64,
    pub y: f64,
}

impl TilePosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Square of side `side` anchored at this position.
    pub fn square(self, side: f64) -> Rect {
        Rect::new(self.x, self.y, self.x + side, self.y + side)
    }

    /// Square of side `side` inset by `offset` on the top and left edges.
    pub fn inset_square(self, offset: f64, side: f64) -> Rect {
        Rect::new(
            self.x + offset,
            self.y + offset,
            self.x + offset + side,
            self.y + offset + side,
        )
    }
}

/// Straight (non-premultiplied) RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Channel-wise linear interpolation, rounded to nearest.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn mix(a: u8, b: u8, t: f64) -> u8 {
            (f64::from(a) * (1.0 - t) + f64::from(b) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        }

        Self {
            r: mix(self.r, other.r, t),
            g: mix(self.g, other.g, t),
            b: mix(self.b, other.b, t),
        }
    }

    /// Unit-range components, as PDF color operators expect.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}
