//! Rounded-rectangle clip mask.
//!
//! The mask decides, per pixel, whether a surface paints and receives input.
//! Pixels in the four `r×r` corner squares are kept only when their centre
//! lies within `r` of the corner's arc centre; everything else inside the
//! rectangle is kept. The native layer consumes the mask as a list of
//! horizontal bands (see [`RoundedMask::region`]).

use crate::types::geometry::Rect;

/// A rounded rectangle at a pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundedMask {
    bounds: Rect,
    radius: u32,
}

impl RoundedMask {
    /// Mask of a `width × height` surface at the origin.
    pub fn new(width: u32, height: u32, radius: u32) -> Self {
        Self::at(0, 0, width, height, radius)
    }

    /// Mask of a `width × height` surface whose top-left pixel is `(x, y)`.
    pub fn at(x: i32, y: i32, width: u32, height: u32, radius: u32) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
            radius,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The radius as configured.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// The radius actually drawn, limited to half of the shorter side.
    pub fn effective_radius(&self) -> u32 {
        self.radius
            .min(self.bounds.width / 2)
            .min(self.bounds.height / 2)
    }

    /// Mask of the content surface inside a border of `border` pixels.
    ///
    /// The inner surface keeps the same radius so the content corners follow
    /// the outer ones.
    pub fn inset(&self, border: u32) -> RoundedMask {
        RoundedMask {
            bounds: self.bounds.inset(border),
            radius: self.radius,
        }
    }

    /// Number of pixels cut off at each end of `row` (relative to the top edge).
    ///
    /// Rows outside the surface report the full width.
    pub fn row_inset(&self, row: u32) -> u32 {
        let height = self.bounds.height;
        let width = self.bounds.width;
        if row >= height {
            return width;
        }

        let r = self.effective_radius();
        let dy = row.min(height - 1 - row);
        if dy >= r {
            return 0;
        }
        (0..r).find(|&dx| inside_arc(r, dx, dy)).unwrap_or(r)
    }

    /// True when pixel `(px, py)` paints.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        if !self.bounds.contains(px, py) {
            return false;
        }
        let col = (px - self.bounds.x) as u32;
        let row = (py - self.bounds.y) as u32;
        let dx = col.min(self.bounds.width - 1 - col);
        dx >= self.row_inset(row)
    }

    /// Total number of pixels cut away by the rounded corners.
    pub fn excluded_pixels(&self) -> u64 {
        (0..self.bounds.height)
            .map(|row| u64::from(self.row_inset(row)) * 2)
            .sum()
    }

    /// The kept pixels as horizontal bands, top to bottom.
    ///
    /// Consecutive rows with the same inset share one rectangle, so a mask
    /// yields at most `2r + 1` rectangles.
    pub fn region(&self) -> Vec<Rect> {
        let mut bands: Vec<Rect> = Vec::new();
        let Rect {
            x,
            y,
            width,
            height,
        } = self.bounds;

        for row in 0..height {
            let inset = self.row_inset(row);
            let band_width = width - inset * 2;
            if band_width == 0 {
                continue;
            }
            let band_x = x + inset as i32;
            let band_y = y + row as i32;

            match bands.last_mut() {
                Some(last) if last.x == band_x && last.width == band_width && last.bottom() == band_y => {
                    last.height += 1;
                }
                _ => bands.push(Rect::new(band_x, band_y, band_width, 1)),
            }
        }
        bands
    }
}

/// Whether the pixel `dx` columns and `dy` rows from the corner has its
/// centre inside the quarter circle of radius `r`.
///
/// Works in doubled coordinates so the half-pixel centre stays integral.
fn inside_arc(r: u32, dx: u32, dy: u32) -> bool {
    let r2 = i64::from(r) * 2;
    let cx = r2 - i64::from(dx) * 2 - 1;
    let cy = r2 - i64::from(dy) * 2 - 1;
    cx * cx + cy * cy <= r2 * r2
}
