use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::fusion::Undertone;

/// Palette family derived from undertone and lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSeason {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl ColorSeason {
    pub const ALL: [ColorSeason; 4] = [
        ColorSeason::Spring,
        ColorSeason::Summer,
        ColorSeason::Autumn,
        ColorSeason::Winter,
    ];

    /// Warm and cool undertones split on lightness. Neutral reads lean toward
    /// whichever of warm/cool scored higher, ignoring lightness.
    pub fn from_undertone(undertone: Undertone, is_light: bool, cool_leaning: bool) -> Self {
        match (undertone, is_light) {
            (Undertone::Warm, true) => ColorSeason::Spring,
            (Undertone::Warm, false) => ColorSeason::Autumn,
            (Undertone::Cool, true) => ColorSeason::Summer,
            (Undertone::Cool, false) => ColorSeason::Winter,
            (Undertone::Neutral, _) if cool_leaning => ColorSeason::Summer,
            (Undertone::Neutral, _) => ColorSeason::Autumn,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorSeason::Spring => "spring",
            ColorSeason::Summer => "summer",
            ColorSeason::Autumn => "autumn",
            ColorSeason::Winter => "winter",
        }
    }
}

impl fmt::Display for ColorSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSeason {
    type Err = std::convert::Infallible;

    /// Unknown names resolve to autumn.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let season = match s.trim().to_ascii_lowercase().as_str() {
            "spring" => ColorSeason::Spring,
            "summer" => ColorSeason::Summer,
            "autumn" | "fall" => ColorSeason::Autumn,
            "winter" => ColorSeason::Winter,
            _ => {
                tracing::warn!("Unknown season '{}', defaulting to autumn", s);
                ColorSeason::Autumn
            }
        };
        Ok(season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warm_and_cool_split_on_lightness() {
        assert_eq!(
            ColorSeason::from_undertone(Undertone::Warm, true, false),
            ColorSeason::Spring
        );
        assert_eq!(
            ColorSeason::from_undertone(Undertone::Warm, false, true),
            ColorSeason::Autumn
        );
        assert_eq!(
            ColorSeason::from_undertone(Undertone::Cool, true, true),
            ColorSeason::Summer
        );
        assert_eq!(
            ColorSeason::from_undertone(Undertone::Cool, false, false),
            ColorSeason::Winter
        );
    }

    #[test]
    fn test_neutral_follows_lean_not_lightness() {
        for is_light in [true, false] {
            assert_eq!(
                ColorSeason::from_undertone(Undertone::Neutral, is_light, true),
                ColorSeason::Summer
            );
            assert_eq!(
                ColorSeason::from_undertone(Undertone::Neutral, is_light, false),
                ColorSeason::Autumn
            );
        }
    }

    #[test]
    fn test_parse_falls_back_to_autumn() {
        assert_eq!("Winter".parse::<ColorSeason>().unwrap(), ColorSeason::Winter);
        assert_eq!("monsoon".parse::<ColorSeason>().unwrap(), ColorSeason::Autumn);
    }
}
