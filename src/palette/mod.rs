//! Curated palettes per colour season.
pub mod season;

pub use season::ColorSeason;

use serde::Serialize;

use crate::fusion::Undertone;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub season: ColorSeason,
    /// Hex colours, `#RRGGBB`.
    pub colors: [&'static str; 8],
    pub description: &'static str,
    /// Garment colour families that clash with the season.
    pub avoid: &'static [&'static str],
}

static SPRING: Palette = Palette {
    season: ColorSeason::Spring,
    colors: [
        "#FF7F50", "#FFB07C", "#FFD966", "#F4E1A1", "#8FD694", "#40E0D0", "#F88379", "#C19A6B",
    ],
    description: "Light and warm: clear, fresh colours with a golden base.",
    avoid: &["black", "icy pastels", "dusty muted tones"],
};

static SUMMER: Palette = Palette {
    season: ColorSeason::Summer,
    colors: [
        "#B0C4DE", "#E6E6FA", "#D8BFD8", "#98B4D4", "#F4C2C2", "#778899", "#9DC3C2", "#C8A2C8",
    ],
    description: "Light and cool: soft, muted colours with a blue base.",
    avoid: &["orange", "golden yellow", "stark black"],
};

static AUTUMN: Palette = Palette {
    season: ColorSeason::Autumn,
    colors: [
        "#CC5500", "#8B4513", "#DAA520", "#6B8E23", "#B7410E", "#D2B48C", "#800000", "#556B2F",
    ],
    description: "Deep and warm: rich, earthy colours with a golden base.",
    avoid: &["icy pastels", "fuchsia", "cool greys"],
};

static WINTER: Palette = Palette {
    season: ColorSeason::Winter,
    colors: [
        "#000000", "#FFFFFF", "#0047AB", "#DC143C", "#50C878", "#4B0082", "#C71585", "#36454F",
    ],
    description: "Deep and cool: saturated, high-contrast colours with a blue base.",
    avoid: &["beige", "orange", "muted earth tones"],
};

impl Palette {
    pub fn for_season(season: ColorSeason) -> &'static Palette {
        match season {
            ColorSeason::Spring => &SPRING,
            ColorSeason::Summer => &SUMMER,
            ColorSeason::Autumn => &AUTUMN,
            ColorSeason::Winter => &WINTER,
        }
    }

    /// Lookup by season name; unknown names get the autumn palette.
    pub fn for_season_name(name: &str) -> &'static Palette {
        let season = name.parse().unwrap_or(ColorSeason::Autumn);
        Self::for_season(season)
    }
}

/// Answer to a "which colours suit me" query from the rendering side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub season: ColorSeason,
    pub undertone: Undertone,
    pub palette: &'static Palette,
}

pub fn recommended_colors(season: ColorSeason, undertone: Undertone) -> Recommendation {
    Recommendation {
        season,
        undertone,
        palette: Palette::for_season(season),
    }
}
