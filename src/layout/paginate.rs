use std::ops::Range;

use crate::layout::grid::TILES_PER_PAGE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which face of the sheet a page prints.
pub enum PageSide {
    Front,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One output page: its side and the contiguous run of songs it carries.
pub struct PageDescriptor {
    pub side: PageSide,
    /// Index of the front/back pair this page belongs to.
    pub pair: usize,
    /// Global index of the song in slot 0.
    pub first_song: usize,
    /// Occupied slots, `1..=TILES_PER_PAGE`.
    pub tile_count: usize,
}

impl PageDescriptor {
    pub fn songs(&self) -> Range<usize> {
        self.first_song..self.first_song + self.tile_count
    }

    /// `(slot, song index)` for every occupied slot, in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, usize)> {
        let first = self.first_song;
        (0..self.tile_count).map(move |slot| (slot, first + slot))
    }

    pub fn is_full(&self) -> bool {
        self.tile_count == TILES_PER_PAGE
    }
}

/// Number of front/back page pairs needed for `song_count` songs.
pub fn page_pair_count(song_count: usize) -> usize {
    song_count.div_ceil(TILES_PER_PAGE)
}

/// Page sequence for `song_count` songs: front 0, back 0, front 1, back 1, ...
///
/// Every pair covers the same songs on both sides, including a trailing partial pair.
pub fn paginate(song_count: usize) -> Vec<PageDescriptor> {
    let pairs = page_pair_count(song_count);
    let mut pages = Vec::with_capacity(pairs * 2);
    for pair in 0..pairs {
        let first_song = pair * TILES_PER_PAGE;
        let tile_count = (song_count - first_song).min(TILES_PER_PAGE);
        for side in [PageSide::Front, PageSide::Back] {
            pages.push(PageDescriptor {
                side,
                pair,
                first_song,
                tile_count,
            });
        }
    }
    pages
}

#[cfg(test)]
#[path = "../../tests/unit/layout/paginate.rs"]
mod tests;
