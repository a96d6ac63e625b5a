//! Independent weighted evidence sources.
//!
//! Contributions are additive, so the order channels run in never changes the
//! fused result.
use crate::analysis::{LabStats, RgbStats};
use crate::config::FusionConfig;
use crate::signals::UserInput;

use super::evidence::EvidenceScore;

/// Everything a channel may look at.
#[derive(Debug, Clone, Copy)]
pub struct FusionInput<'a> {
    pub rgb: &'a RgbStats,
    pub lab: &'a LabStats,
    pub user: Option<&'a UserInput>,
}

/// A single source of undertone evidence.
pub trait EvidenceChannel: Send + Sync {
    /// Add this channel's weighted contribution to the accumulator.
    fn contribute(&self, input: &FusionInput<'_>, score: &mut EvidenceScore);

    fn name(&self) -> &'static str;

    /// Channels whose input is missing are skipped entirely.
    fn can_process(&self, _input: &FusionInput<'_>) -> bool {
        true
    }
}

/// Votes on the mean-RGB warmth ratio. Exactly one bucket receives the weight.
#[derive(Debug, Clone)]
pub struct RgbWarmthChannel {
    pub weight: f64,
    pub warm_above: f64,
    pub cool_below: f64,
}

impl RgbWarmthChannel {
    pub fn from_config(config: &FusionConfig) -> Self {
        Self {
            weight: config.rgb_weight,
            warm_above: config.warmth_high,
            cool_below: config.warmth_low,
        }
    }
}

impl EvidenceChannel for RgbWarmthChannel {
    fn contribute(&self, input: &FusionInput<'_>, score: &mut EvidenceScore) {
        let warmth = input.rgb.warmth;
        if warmth > self.warm_above {
            score.add_warm(self.weight);
        } else if warmth < self.cool_below {
            score.add_cool(self.weight);
        } else {
            score.add_neutral(self.weight);
        }
    }

    fn name(&self) -> &'static str {
        "RgbWarmthChannel"
    }
}

/// LAB `a` (red-green) axis.
///
/// Above the threshold the ratio `a / scale` credits warm (capped at 1) and
/// credits cool with `1 - ratio` uncapped, so a strongly red read subtracts
/// from cool.
#[derive(Debug, Clone)]
pub struct LabRedGreenChannel {
    pub weight: f64,
    pub threshold: f64,
    pub scale: f64,
}

impl LabRedGreenChannel {
    pub fn from_config(config: &FusionConfig) -> Self {
        Self {
            weight: config.lab_a_weight,
            threshold: config.lab_a_threshold,
            scale: config.lab_a_scale,
        }
    }
}

impl EvidenceChannel for LabRedGreenChannel {
    fn contribute(&self, input: &FusionInput<'_>, score: &mut EvidenceScore) {
        let a = input.lab.a;
        if a > self.threshold {
            let ratio = a / self.scale;
            score.add_warm(self.weight * ratio.min(1.0));
            score.add_cool(self.weight * (1.0 - ratio));
        }
    }

    fn name(&self) -> &'static str {
        "LabRedGreenChannel"
    }
}

/// LAB `b` (yellow-blue) axis: yellow scales into warm, clear blue is full cool.
#[derive(Debug, Clone)]
pub struct LabYellowBlueChannel {
    pub weight: f64,
    pub threshold: f64,
    pub scale: f64,
}

impl LabYellowBlueChannel {
    pub fn from_config(config: &FusionConfig) -> Self {
        Self {
            weight: config.lab_b_weight,
            threshold: config.lab_b_threshold,
            scale: config.lab_b_scale,
        }
    }
}

impl EvidenceChannel for LabYellowBlueChannel {
    fn contribute(&self, input: &FusionInput<'_>, score: &mut EvidenceScore) {
        let b = input.lab.b;
        if b > self.threshold {
            score.add_warm(self.weight * (b / self.scale).min(1.0));
        } else if b < -self.threshold {
            score.add_cool(self.weight);
        }
    }

    fn name(&self) -> &'static str {
        "LabYellowBlueChannel"
    }
}

/// Self-reported vein colour.
#[derive(Debug, Clone)]
pub struct VeinColorChannel {
    pub weight: f64,
}

impl VeinColorChannel {
    pub fn from_config(config: &FusionConfig) -> Self {
        Self {
            weight: config.user_weight,
        }
    }
}

impl EvidenceChannel for VeinColorChannel {
    fn contribute(&self, input: &FusionInput<'_>, score: &mut EvidenceScore) {
        if let Some(vein) = input.user.and_then(|u| u.vein_color) {
            score.add_weighted(vein.evidence(), self.weight);
        }
    }

    fn name(&self) -> &'static str {
        "VeinColorChannel"
    }

    fn can_process(&self, input: &FusionInput<'_>) -> bool {
        input.user.is_some_and(|u| u.vein_color.is_some())
    }
}

/// The four channels in their documented order.
pub fn default_channels(config: &FusionConfig) -> Vec<Box<dyn EvidenceChannel>> {
    vec![
        Box::new(RgbWarmthChannel::from_config(config)),
        Box::new(LabRedGreenChannel::from_config(config)),
        Box::new(LabYellowBlueChannel::from_config(config)),
        Box::new(VeinColorChannel::from_config(config)),
    ]
}
