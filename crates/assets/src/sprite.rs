//! Decoded images used as textures by the renderer.

use std::path::Path;

use image::io::Reader as ImageReader;
use image::RgbaImage;

use crate::{AssetError, AssetKind};

/// An RGBA8 image with nearest-neighbour sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    /// Decode the image at `path`.
    ///
    /// The format is picked from the file extension. Zero-sized images are
    /// rejected since they have no aspect ratio.
    pub fn load(kind: AssetKind, path: &Path) -> Result<Self, AssetError> {
        let reader = ImageReader::open(path).map_err(|source| AssetError::Io {
            kind,
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = reader.decode().map_err(|source| AssetError::Decode {
            kind,
            path: path.to_path_buf(),
            source,
        })?;

        let sprite = Self::from_image(decoded.to_rgba8()).ok_or_else(|| AssetError::Empty {
            kind,
            path: path.to_path_buf(),
        })?;
        log::debug!(
            "loaded {} from {} ({}x{})",
            kind,
            path.display(),
            sprite.width(),
            sprite.height()
        );
        Ok(sprite)
    }

    /// Wrap an already decoded image. Returns `None` for an empty image.
    pub fn from_image(image: RgbaImage) -> Option<Self> {
        if image.width() == 0 || image.height() == 0 {
            return None;
        }
        Some(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Width over height.
    pub fn aspect(&self) -> f32 {
        self.width() as f32 / self.height() as f32
    }

    /// Texel at normalized coordinates, `(0, 0)` being the top-left corner.
    ///
    /// Coordinates outside `[0, 1)` are clamped to the edge.
    pub fn sample(&self, u: f32, v: f32) -> [u8; 4] {
        let x = texel_index(u, self.width());
        let y = texel_index(v, self.height());
        self.image.get_pixel(x, y).0
    }
}

fn texel_index(t: f32, size: u32) -> u32 {
    let i = (t * size as f32).floor();
    if i <= 0.0 {
        0
    } else {
        (i as u32).min(size - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn two_by_two() -> Sprite {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
        img.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
        img.put_pixel(1, 1, Rgba([0, 0, 0, 0]));
        Sprite::from_image(img).unwrap()
    }

    #[test]
    fn test_sample_quadrants() {
        let s = two_by_two();
        assert_eq!(s.sample(0.25, 0.25), [255, 0, 0, 255]);
        assert_eq!(s.sample(0.75, 0.25), [0, 255, 0, 255]);
        assert_eq!(s.sample(0.25, 0.75), [0, 0, 255, 255]);
        assert_eq!(s.sample(0.75, 0.75), [0, 0, 0, 0]);
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        let s = two_by_two();
        assert_eq!(s.sample(-1.0, -1.0), [255, 0, 0, 255]);
        assert_eq!(s.sample(1.0, 0.0), [0, 255, 0, 255]);
        assert_eq!(s.sample(5.0, 5.0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_aspect() {
        let s = Sprite::from_image(RgbaImage::new(40, 80)).unwrap();
        assert_eq!(s.width(), 40);
        assert_eq!(s.height(), 80);
        assert!((s.aspect() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_image_rejected() {
        assert!(Sprite::from_image(RgbaImage::new(0, 10)).is_none());
        assert!(Sprite::from_image(RgbaImage::new(10, 0)).is_none());
    }
}
