//! Aggregate colour statistics and the sRGB -> CIE LAB transform.
use serde::{Deserialize, Serialize};

/// D65 reference white, scaled so Y = 100.
const WHITE_D65: [f64; 3] = [95.047, 100.0, 108.883];

/// Linear sRGB -> XYZ (sRGB primaries, D65).
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

const LAB_EPSILON: f64 = 0.008856;
const LAB_KAPPA_SLOPE: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Mean colour of the retained skin pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbStats {
    pub mean_r: f64,
    pub mean_g: f64,
    pub mean_b: f64,
    /// (R + G) / (R + G + 2B), in [0, 1].
    pub warmth: f64,
    /// (max - min) / max over the three means, in [0, 1].
    pub saturation: f64,
}

impl RgbStats {
    /// Fallback used when no skin pixel was found.
    pub const EMPTY: RgbStats = RgbStats {
        mean_r: 0.0,
        mean_g: 0.0,
        mean_b: 0.0,
        warmth: 0.5,
        saturation: 0.0,
    };

    pub fn from_means(mean_r: f64, mean_g: f64, mean_b: f64) -> Self {
        let denom = mean_r + mean_g + 2.0 * mean_b;
        let warmth = if denom > 0.0 {
            (mean_r + mean_g) / denom
        } else {
            0.5
        };

        let max = mean_r.max(mean_g).max(mean_b);
        let min = mean_r.min(mean_g).min(mean_b);
        let saturation = if max > 0.0 { (max - min) / max } else { 0.0 };

        Self {
            mean_r,
            mean_g,
            mean_b,
            warmth,
            saturation,
        }
    }
}

impl Default for RgbStats {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// CIE LAB coordinates of the mean skin colour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabStats {
    #[serde(rename = "L")]
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LabStats {
    /// Fallback used when no skin pixel was found.
    pub const EMPTY: LabStats = LabStats {
        l: 50.0,
        a: 0.0,
        b: 0.0,
    };

    /// Converts 8-bit-scale sRGB values (0-255, fractional allowed) to LAB.
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        let linear = [linearize(r / 255.0), linearize(g / 255.0), linearize(b / 255.0)];

        let mut xyz = [0.0; 3];
        for (out, row) in xyz.iter_mut().zip(SRGB_TO_XYZ.iter()) {
            *out = (row[0] * linear[0] + row[1] * linear[1] + row[2] * linear[2]) * 100.0;
        }

        let fx = lab_f(xyz[0] / WHITE_D65[0]);
        let fy = lab_f(xyz[1] / WHITE_D65[1]);
        let fz = lab_f(xyz[2] / WHITE_D65[2]);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl Default for LabStats {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// sRGB gamma decode of a channel in [0, 1].
fn linearize(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA_SLOPE * t + LAB_OFFSET
    }
}
