pub mod channels;
pub mod classifier;
pub mod evidence;

pub use channels::{
    EvidenceChannel, FusionInput, LabRedGreenChannel, LabYellowBlueChannel, RgbWarmthChannel,
    VeinColorChannel,
};
pub use classifier::{Classification, Confidence, Undertone, UndertoneClassifier};
pub use evidence::EvidenceScore;
