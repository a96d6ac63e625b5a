use serde::{Deserialize, Serialize};

use super::colorimetry::{LabStats, RgbStats};
use super::raster::RasterView;
use super::skin::SkinPixelSet;

/// Colour statistics of the skin-like region of one raster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinSample {
    pub rgb: RgbStats,
    pub lab: LabStats,
    pub skin_pixels: usize,
    pub total_pixels: usize,
}

impl SkinSample {
    /// Share of the raster judged skin-like, in [0, 1].
    pub fn coverage(&self) -> f64 {
        if self.total_pixels == 0 {
            0.0
        } else {
            self.skin_pixels as f64 / self.total_pixels as f64
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.skin_pixels == 0
    }
}

/// Scans a raster for skin-like pixels and reduces them to aggregate statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkinPixelExtractor;

impl SkinPixelExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, raster: &RasterView<'_>) -> SkinSample {
        let skin = SkinPixelSet::collect(raster);
        let total_pixels = raster.pixel_count();

        let (rgb, lab) = match skin.mean_rgb() {
            Some((r, g, b)) => (RgbStats::from_means(r, g, b), LabStats::from_srgb(r, g, b)),
            None => {
                tracing::warn!(
                    "No skin-like pixels in {} scanned, using neutral defaults",
                    total_pixels
                );
                (RgbStats::EMPTY, LabStats::EMPTY)
            }
        };

        tracing::debug!(
            skin_pixels = skin.len(),
            total_pixels,
            warmth = rgb.warmth,
            lightness = lab.l,
            "Extracted skin statistics"
        );

        SkinSample {
            rgb,
            lab,
            skin_pixels: skin.len(),
            total_pixels,
        }
    }
}
