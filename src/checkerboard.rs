//! Checkerboard transparency cue drawn behind the opacity slider.

use std::fmt;
use std::sync::Arc;

use floem::context::PaintCx;
use floem::kurbo::Rect;
use floem::peniko::Color as PaintColor;
use floem_renderer::Renderer;

use crate::constants;

/// One square RGBA8 tile: ink in the top-left and bottom-right quadrants,
/// transparent elsewhere. Built once and shared by clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerPattern {
    size: u32,
    ink: [u8; 4],
    pixels: Arc<[u8]>,
}

impl CheckerPattern {
    /// Rasterize a `size`×`size` tile. `size` is rounded up to even.
    pub fn new(size: u32, ink: [u8; 4]) -> Self {
        let size = (size.max(2) + 1) & !1;
        let cell = size / 2;
        let mut pixels = vec![0u8; (size * size * 4) as usize];
        for y in 0..size {
            for x in 0..size {
                if (x / cell) == (y / cell) {
                    let offset = ((y * size + x) * 4) as usize;
                    pixels[offset..offset + 4].copy_from_slice(&ink);
                }
            }
        }
        Self {
            size,
            ink,
            pixels: pixels.into(),
        }
    }

    /// Tile side in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Side of one checker cell.
    pub fn cell(&self) -> u32 {
        self.size / 2
    }

    /// Raw RGBA8 tile data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at `(x, y)` with the tile repeated infinitely.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let (x, y) = (x % self.size, y % self.size);
        let offset = ((y * self.size + x) * 4) as usize;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[offset..offset + 4]);
        px
    }
}

impl Default for CheckerPattern {
    fn default() -> Self {
        Self::new(constants::CHECKER_TILE, constants::CHECKER_INK)
    }
}

impl fmt::Display for CheckerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.ink;
        write!(f, "checkerboard({}px, rgb({r}, {g}, {b}))", self.size)
    }
}

const BASE: PaintColor = PaintColor::rgb8(255, 255, 255);

/// Tile `pattern` over `rect` on a white base, one cell at a time.
pub(crate) fn paint_checkerboard(cx: &mut PaintCx, rect: Rect, pattern: &CheckerPattern) {
    cx.fill(&rect, BASE, 0.0);
    let cell = pattern.cell();
    let step = cell as f64;
    let cols = (rect.width() / step).ceil() as u32;
    let rows = (rect.height() / step).ceil() as u32;
    for row in 0..rows {
        for col in 0..cols {
            let [r, g, b, a] = pattern.pixel(col * cell, row * cell);
            if a == 0 {
                continue;
            }
            let x = rect.x0 + col as f64 * step;
            let y = rect.y0 + row as f64 * step;
            let cell_rect = Rect::new(x, y, (x + step).min(rect.x1), (y + step).min(rect.y1));
            cx.fill(&cell_rect, PaintColor::rgba8(r, g, b, a), 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tile_matches_two_cell_layout() {
        let pattern = CheckerPattern::default();
        assert_eq!(pattern.size(), 6);
        assert_eq!(pattern.cell(), 3);
        assert_eq!(pattern.pixels().len(), 6 * 6 * 4);

        assert_eq!(pattern.pixel(0, 0), [204, 204, 204, 255]);
        assert_eq!(pattern.pixel(2, 2), [204, 204, 204, 255]);
        assert_eq!(pattern.pixel(3, 3), [204, 204, 204, 255]);
        assert_eq!(pattern.pixel(3, 0), [0, 0, 0, 0]);
        assert_eq!(pattern.pixel(0, 5), [0, 0, 0, 0]);
    }

    #[test]
    fn pixels_repeat_across_tiles() {
        let pattern = CheckerPattern::default();
        assert_eq!(pattern.pixel(6, 6), pattern.pixel(0, 0));
        assert_eq!(pattern.pixel(9, 1), pattern.pixel(3, 1));
    }

    #[test]
    fn odd_sizes_round_up() {
        assert_eq!(CheckerPattern::new(5, [0, 0, 0, 255]).size(), 6);
        assert_eq!(CheckerPattern::new(0, [0, 0, 0, 255]).size(), 2);
    }

    #[test]
    fn describes_itself() {
        assert_eq!(
            CheckerPattern::default().to_string(),
            "checkerboard(6px, rgb(204, 204, 204))"
        );
    }
}
