pub mod analysis;
pub mod config;
pub mod error;
pub mod fusion;
pub mod palette;
pub mod services;
pub mod signals;

pub use error::{AppError, ConfigError, RasterError};

pub use analysis::{LabStats, RasterView, RgbStats, SkinPixelExtractor, SkinSample};
pub use config::{FusionConfig, Settings};
pub use fusion::{Classification, Confidence, EvidenceScore, Undertone, UndertoneClassifier};
pub use palette::{recommended_colors, ColorSeason, Palette, Recommendation};
pub use services::{ClassificationService, QuizRequest, StyleReport, UndertoneEngine};
pub use signals::{UserInput, VeinColor};
