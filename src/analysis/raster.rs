use image::{Rgb, RgbaImage};

use crate::error::RasterError;

/// Channels per pixel in the raster buffers this crate accepts.
pub const RGBA_CHANNELS: usize = 4;

pub type Pixel = Rgb<u8>;

/// Borrowed, validated view over a flat RGBA8 buffer.
///
/// Construction is the only place malformed buffers are rejected; everything
/// downstream can assume `data.len() == width * height * 4`.
#[derive(Debug, Clone, Copy)]
pub struct RasterView<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> RasterView<'a> {
    pub fn new(
        width: u32,
        height: u32,
        channels: usize,
        data: &'a [u8],
    ) -> Result<Self, RasterError> {
        if channels != RGBA_CHANNELS {
            return Err(RasterError::ChannelCount(channels));
        }
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroDimension { width, height });
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(RGBA_CHANNELS))
            .ok_or(RasterError::DimensionOverflow { width, height })?;
        if data.len() != expected {
            return Err(RasterError::BufferLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_rgba(image: &'a RgbaImage) -> Result<Self, RasterError> {
        let (width, height) = image.dimensions();
        Self::new(width, height, RGBA_CHANNELS, image.as_raw())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / RGBA_CHANNELS
    }

    /// Pixels in row-major order. The fourth channel is dropped.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + 'a {
        self.data
            .chunks_exact(RGBA_CHANNELS)
            .map(|px| Rgb([px[0], px[1], px[2]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_buffer() {
        let data = vec![0u8; 3 * 2 * 4];
        let view = RasterView::new(3, 2, 4, &data).unwrap();
        assert_eq!(view.dimensions(), (3, 2));
        assert_eq!(view.pixel_count(), 6);
        assert_eq!(view.pixels().count(), 6);
    }

    #[test]
    fn test_rejects_wrong_channel_count() {
        let data = vec![0u8; 4 * 3];
        assert_eq!(
            RasterView::new(2, 2, 3, &data).unwrap_err(),
            RasterError::ChannelCount(3)
        );
    }

    #[test]
    fn test_rejects_zero_dimension() {
        assert_eq!(
            RasterView::new(0, 5, 4, &[]).unwrap_err(),
            RasterError::ZeroDimension {
                width: 0,
                height: 5
            }
        );
    }

    #[test]
    fn test_rejects_short_buffer() {
        let data = vec![0u8; 15];
        assert_eq!(
            RasterView::new(2, 2, 4, &data).unwrap_err(),
            RasterError::BufferLength {
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn test_alpha_is_ignored() {
        let data = [10u8, 20, 30, 0, 40, 50, 60, 255];
        let view = RasterView::new(2, 1, 4, &data).unwrap();
        let pixels: Vec<_> = view.pixels().collect();
        assert_eq!(pixels, vec![Rgb([10, 20, 30]), Rgb([40, 50, 60])]);
    }

    #[test]
    fn test_from_rgba_image() {
        let img = RgbaImage::from_pixel(4, 3, image::Rgba([1, 2, 3, 4]));
        let view = RasterView::from_rgba(&img).unwrap();
        assert_eq!(view.pixel_count(), 12);
        assert!(view.pixels().all(|p| p == Rgb([1, 2, 3])));
    }
}
