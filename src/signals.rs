//! Self-reported quiz answers.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Vein colour as seen on the inner wrist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VeinColor {
    Green,
    Blue,
    BlueGreen,
    Purple,
    #[serde(other)]
    Unsure,
}

/// Fixed (warm, cool, neutral) evidence for one answer. Components sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalTriple {
    pub warm: f64,
    pub cool: f64,
    pub neutral: f64,
}

impl VeinColor {
    pub const ALL: [VeinColor; 5] = [
        VeinColor::Green,
        VeinColor::Blue,
        VeinColor::BlueGreen,
        VeinColor::Purple,
        VeinColor::Unsure,
    ];

    pub fn evidence(self) -> SignalTriple {
        let (warm, cool, neutral) = match self {
            VeinColor::Green => (0.90, 0.05, 0.05),
            VeinColor::Blue => (0.05, 0.90, 0.05),
            VeinColor::Purple => (0.10, 0.80, 0.10),
            VeinColor::BlueGreen => (0.30, 0.30, 0.40),
            VeinColor::Unsure => (0.33, 0.33, 0.34),
        };
        SignalTriple {
            warm,
            cool,
            neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VeinColor::Green => "green",
            VeinColor::Blue => "blue",
            VeinColor::BlueGreen => "blue-green",
            VeinColor::Purple => "purple",
            VeinColor::Unsure => "unsure",
        }
    }
}

impl fmt::Display for VeinColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VeinColor {
    type Err = std::convert::Infallible;

    /// Unrecognized answers fall back to `Unsure`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_ascii_lowercase()
            .replace(|c: char| c == '_' || c == ' ', "-");
        let vein = match normalized.as_str() {
            "green" => VeinColor::Green,
            "blue" => VeinColor::Blue,
            "blue-green" => VeinColor::BlueGreen,
            "purple" => VeinColor::Purple,
            "unsure" => VeinColor::Unsure,
            _ => {
                tracing::warn!("Unrecognized vein color '{}', treating as unsure", s);
                VeinColor::Unsure
            }
        };
        Ok(vein)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JewelryPreference {
    Gold,
    Silver,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SunReaction {
    Burns,
    Tans,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WhiteClothingEffect {
    BrightWhite,
    OffWhite,
    Both,
}

/// Quiz answers that accompany the photo.
///
/// Only `vein_color` is scored today. The remaining answers are accepted and
/// carried through so new evidence channels can pick them up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserInput {
    pub vein_color: Option<VeinColor>,
    pub jewelry_preference: Option<JewelryPreference>,
    pub sun_reaction: Option<SunReaction>,
    pub white_clothing_effect: Option<WhiteClothingEffect>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

impl UserInput {
    pub fn with_vein_color(vein_color: VeinColor) -> Self {
        Self {
            vein_color: Some(vein_color),
            ..Self::default()
        }
    }
}
