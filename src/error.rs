use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Raster Error: {0}")]
    Raster(#[from] RasterError),
    #[error("Config Error: {0}")]
    Config(#[from] ConfigError),
    #[error("Image Error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Serialization Error: {0}")]
    Json(#[from] serde_json::Error),
}

// Raster boundary errors. These are caller contract violations and are never
// coerced into a usable buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("Raster has a zero dimension: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("Unsupported channel count {0}, expected 4 (RGBA)")]
    ChannelCount(usize),
    #[error("Raster buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLength { expected: usize, actual: usize },
    #[error("Raster dimensions {width}x{height} overflow the addressable buffer size")]
    DimensionOverflow { width: u32, height: u32 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Weight '{name}' must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}
