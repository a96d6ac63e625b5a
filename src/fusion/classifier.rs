use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::{LabStats, RgbStats};
use crate::config::FusionConfig;
use crate::palette::ColorSeason;
use crate::signals::UserInput;

use super::channels::{default_channels, EvidenceChannel, FusionInput};
use super::evidence::EvidenceScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Undertone::Warm => "warm",
            Undertone::Cool => "cool",
            Undertone::Neutral => "neutral",
        })
    }
}

/// Confidence tier. The current rules only ever produce `Medium` or `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub undertone: Undertone,
    pub confidence: Confidence,
    pub season: ColorSeason,
    /// Normalized evidence, summing to 100.
    pub scores: EvidenceScore,
    pub rgb: RgbStats,
    pub lab: LabStats,
}

/// Fuses image statistics and quiz answers into an undertone, confidence and season.
pub struct UndertoneClassifier {
    config: FusionConfig,
    channels: Vec<Box<dyn EvidenceChannel>>,
}

impl UndertoneClassifier {
    pub fn new(config: FusionConfig) -> Self {
        let channels = default_channels(&config);
        Self { config, channels }
    }

    pub fn fuse(
        &self,
        rgb: &RgbStats,
        lab: &LabStats,
        user: Option<&UserInput>,
    ) -> EvidenceScore {
        let input = FusionInput { rgb, lab, user };
        let mut raw = EvidenceScore::default();

        for channel in &self.channels {
            if !channel.can_process(&input) {
                tracing::debug!("Channel {} skipped", channel.name());
                continue;
            }
            channel.contribute(&input, &mut raw);
        }

        tracing::debug!(?raw, "Fused raw evidence");
        raw.normalized()
    }

    pub fn classify(
        &self,
        rgb: &RgbStats,
        lab: &LabStats,
        user: Option<&UserInput>,
    ) -> Classification {
        let scores = self.fuse(rgb, lab, user);
        let (undertone, confidence) = self.decide(&scores);
        let season = self.season(undertone, &scores, lab);

        tracing::debug!(
            %undertone,
            ?confidence,
            %season,
            warm = scores.warm,
            cool = scores.cool,
            neutral = scores.neutral,
            "Classified undertone"
        );

        Classification {
            undertone,
            confidence,
            season,
            scores,
            rgb: *rgb,
            lab: *lab,
        }
    }

    /// Pick the undertone from normalized scores. First matching rule wins.
    pub fn decide(&self, scores: &EvidenceScore) -> (Undertone, Confidence) {
        let cfg = &self.config;
        let tier = |value: f64| {
            if value > cfg.high_confidence_threshold {
                Confidence::High
            } else {
                Confidence::Medium
            }
        };

        if scores.warm > cfg.dominance_threshold {
            (Undertone::Warm, tier(scores.warm))
        } else if scores.cool > cfg.dominance_threshold {
            (Undertone::Cool, tier(scores.cool))
        } else if (scores.warm - scores.cool).abs() < cfg.neutral_margin {
            (Undertone::Neutral, Confidence::High)
        } else {
            // One side leads but not by enough to call it.
            (Undertone::Neutral, Confidence::Medium)
        }
    }

    pub fn season(
        &self,
        undertone: Undertone,
        scores: &EvidenceScore,
        lab: &LabStats,
    ) -> ColorSeason {
        let is_light = lab.l > self.config.light_threshold;
        ColorSeason::from_undertone(undertone, is_light, scores.cool > scores.warm)
    }
}

impl Default for UndertoneClassifier {
    fn default() -> Self {
        Self::new(FusionConfig::default())
    }
}
