//! Coarse skin-likeness heuristic.
//!
//! Covers light and deep skin tones without any face detection. Some non-skin
//! surfaces (wood, leather) pass as well; the downstream statistics tolerate that.
use super::raster::{Pixel, RasterView};

/// Returns true if the pixel falls in either the light or the deep skin range.
pub fn is_skin_like(pixel: &Pixel) -> bool {
    let [r, g, b] = pixel.0;
    is_light_skin(r, g, b) || is_deep_skin(r, g, b)
}

fn is_light_skin(r: u8, g: u8, b: u8) -> bool {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    r > 95
        && g > 40
        && b > 20
        && max - min > 15
        && r.abs_diff(g) > 15
        && r > g
        && r > b
}

fn is_deep_skin(r: u8, g: u8, b: u8) -> bool {
    (41..95).contains(&r) && (21..80).contains(&g) && (16..70).contains(&b) && r > g && g >= b
}

/// Pixels of one raster that passed [`is_skin_like`], in scan order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkinPixelSet {
    pixels: Vec<Pixel>,
}

impl SkinPixelSet {
    pub fn collect(raster: &RasterView<'_>) -> Self {
        let pixels = raster.pixels().filter(is_skin_like).collect();
        Self { pixels }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Per-channel means, or `None` for an empty set.
    pub fn mean_rgb(&self) -> Option<(f64, f64, f64)> {
        if self.pixels.is_empty() {
            return None;
        }

        let (r, g, b) = self
            .pixels
            .iter()
            .fold((0u64, 0u64, 0u64), |(r, g, b), px| {
                (r + px[0] as u64, g + px[1] as u64, b + px[2] as u64)
            });
        let n = self.pixels.len() as f64;
        Some((r as f64 / n, g as f64 / n, b as f64 / n))
    }
}
