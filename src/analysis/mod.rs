pub mod colorimetry;
pub mod extractor;
pub mod raster;
pub mod skin;

pub use colorimetry::{LabStats, RgbStats};
pub use extractor::{SkinPixelExtractor, SkinSample};
pub use raster::{Pixel, RasterView, RGBA_CHANNELS};
pub use skin::{is_skin_like, SkinPixelSet};
