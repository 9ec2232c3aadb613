use crate::foundation::core::{Rect, Rgb8, TilePosition};

/// Number of horizontal strips a gradient is painted with.
pub const GRADIENT_STEPS: usize = 20;
/// Extra height per strip, as a fraction of one strip, so neighbors overlap and no seam shows.
pub const STRIP_OVERLAP_RATIO: f64 = 0.4;

/// Start (top) and end (bottom) colors of one front-tile gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientPair {
    pub start: Rgb8,
    pub end: Rgb8,
}

impl GradientPair {
    const fn new(start: [u8; 3], end: [u8; 3]) -> Self {
        Self {
            start: Rgb8::new(start[0], start[1], start[2]),
            end: Rgb8::new(end[0], end[1], end[2]),
        }
    }
}

/// Front-tile palette, cycled by song index.
pub const PALETTE: [GradientPair; 6] = [
    GradientPair::new([255, 78, 155], [58, 141, 255]), // pink -> blue
    GradientPair::new([255, 180, 0], [0, 200, 83]),    // orange -> green
    GradientPair::new([156, 39, 176], [0, 229, 255]),  // purple -> turquoise
    GradientPair::new([255, 235, 59], [255, 87, 34]),  // yellow -> red
    GradientPair::new([0, 191, 255], [255, 0, 128]),   // light blue -> magenta
    GradientPair::new([76, 175, 80], [255, 193, 7]),   // green -> yellow
];

/// One filled strip of a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStrip {
    pub rect: Rect,
    pub color: Rgb8,
}

pub fn palette_index(index: usize) -> usize {
    index % PALETTE.len()
}

pub fn gradient_for(index: usize) -> GradientPair {
    PALETTE[palette_index(index)]
}

/// Strips painting the gradient for front tile `index` over a `side`-sized square at `origin`.
///
/// Strip `k` uses ratio `k / (steps - 1)`, so the first strip is exactly the start color and
/// the last exactly the end color. Strips are clipped to the tile square.
pub fn background_for(index: usize, origin: TilePosition, side: f64) -> Vec<FillStrip> {
    let GradientPair { start, end } = gradient_for(index);
    let tile = origin.square(side);
    let strip_h = side / GRADIENT_STEPS as f64;
    let overlap = strip_h * STRIP_OVERLAP_RATIO;

    (0..GRADIENT_STEPS)
        .map(|k| {
            let ratio = k as f64 / (GRADIENT_STEPS - 1) as f64;
            let y0 = origin.y + ratio * side - overlap / 2.0;
            FillStrip {
                rect: Rect::new(origin.x, y0, origin.x + side, y0 + strip_h + overlap)
                    .intersect(tile),
                color: start.lerp(end, ratio),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/paint/gradient.rs"]
mod tests;
