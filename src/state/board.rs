// Tile layout for the active theme.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Theme;

pub const TILE_RADIUS: f64 = 36.0;
pub const TILE_GAP: f64 = 14.0;

/// Logical size of the drawing surface in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 420.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Upper-case display character.
    pub ch: char,
    /// Center in canvas pixels.
    pub x: f64,
    pub y: f64,
    pub used: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileBoard {
    pub tiles: Vec<Tile>,
}

/// In-place Fisher–Yates: every ordering of `items` is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

impl TileBoard {
    /// Shuffles the theme's letters and lays them out as a centered row.
    pub fn layout<R: Rng + ?Sized>(theme: &Theme, surface: Surface, rng: &mut R) -> Self {
        let mut letters: Vec<char> = theme.letters.chars().collect();
        shuffle(&mut letters, rng);
        let pitch = TILE_RADIUS * 2.0 + TILE_GAP;
        let total_width = letters.len() as f64 * pitch - TILE_GAP;
        let start_x = (surface.width - total_width) / 2.0 + TILE_RADIUS;
        let y = surface.height / 2.0;
        let tiles = letters
            .into_iter()
            .enumerate()
            .map(|(i, c)| Tile {
                ch: c.to_ascii_uppercase(),
                x: start_x + i as f64 * pitch,
                y,
                used: false,
            })
            .collect();
        Self { tiles }
    }

    /// Index of the first tile whose center lies within the pick radius of `(px, py)`.
    pub fn hit_test(&self, px: f64, py: f64) -> Option<usize> {
        self.tiles.iter().position(|t| {
            let dx = px - t.x;
            let dy = py - t.y;
            dx * dx + dy * dy <= TILE_RADIUS * TILE_RADIUS
        })
    }
}
