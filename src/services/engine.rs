use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::{RasterView, SkinPixelExtractor, SkinSample};
use crate::config::FusionConfig;
use crate::error::RasterError;
use crate::fusion::{Classification, UndertoneClassifier};
use crate::palette::{ColorSeason, Palette};
use crate::signals::UserInput;

/// Everything the rendering side needs for one quiz submission.
#[derive(Debug, Clone, Serialize)]
pub struct StyleReport {
    pub id: Uuid,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    pub classification: Classification,
    pub skin: SkinSample,
    pub season: ColorSeason,
    pub palette: &'static Palette,
}

/// Raster -> skin statistics -> classification -> palette.
///
/// Holds no mutable state; one engine can serve any number of concurrent callers.
pub struct UndertoneEngine {
    extractor: SkinPixelExtractor,
    classifier: UndertoneClassifier,
}

impl UndertoneEngine {
    pub fn new(config: FusionConfig) -> Self {
        Self {
            extractor: SkinPixelExtractor::new(),
            classifier: UndertoneClassifier::new(config),
        }
    }

    /// Classify an already validated raster.
    pub fn classify(&self, raster: &RasterView<'_>, user: Option<&UserInput>) -> StyleReport {
        let skin = self.extractor.extract(raster);
        let classification = self.classifier.classify(&skin.rgb, &skin.lab, user);
        let season = classification.season;

        StyleReport {
            id: Uuid::new_v4(),
            created_at: Utc::now().timestamp_millis(),
            classification,
            skin,
            season,
            palette: Palette::for_season(season),
        }
    }

    /// Validate a flat buffer at the boundary, then classify it.
    pub fn classify_buffer(
        &self,
        width: u32,
        height: u32,
        channels: usize,
        data: &[u8],
        user: Option<&UserInput>,
    ) -> Result<StyleReport, RasterError> {
        let raster = RasterView::new(width, height, channels, data)?;
        Ok(self.classify(&raster, user))
    }
}

impl Default for UndertoneEngine {
    fn default() -> Self {
        Self::new(FusionConfig::default())
    }
}
