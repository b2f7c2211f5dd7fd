//! Uploaded image handling
//!
//! Decodes JPEG/PNG uploads and applies the optional crop rectangle before
//! OCR. A rect that partially overlaps the image is clamped; a rect with no
//! overlap at all is an error.

use image::DynamicImage;
use serde::Deserialize;

/// Image handling errors
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Unreadable image: {0}")]
    Decode(String),

    #[error("Crop rectangle does not intersect the image")]
    CropOutOfBounds,

    #[error("Failed to encode image: {0}")]
    Encode(String),
}

/// Crop rectangle in pixel coordinates of the uploaded image.
#[derive(Debug, Clone, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Decode an uploaded JPEG or PNG.
pub fn decode(data: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(data).map_err(|e| ImageError::Decode(e.to_string()))
}

/// Crop to the given rectangle, clamped to the image bounds.
pub fn crop(img: &DynamicImage, rect: &CropRect) -> Result<DynamicImage, ImageError> {
    let (width, height) = (img.width(), img.height());
    if rect.x >= width || rect.y >= height || rect.width == 0 || rect.height == 0 {
        return Err(ImageError::CropOutOfBounds);
    }

    let w = rect.width.min(width - rect.x);
    let h = rect.height.min(height - rect.y);
    Ok(img.crop_imm(rect.x, rect.y, w, h))
}

/// Re-encode an image as PNG bytes for the OCR backends.
pub fn to_png_bytes(img: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut buffer),
        image::ImageFormat::Png,
    )
    .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> DynamicImage {
        DynamicImage::new_rgb8(100, 80)
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }

    #[test]
    fn decode_roundtrips_png() {
        let png = to_png_bytes(&test_image()).unwrap();
        let img = decode(&png).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 80);
    }

    #[test]
    fn crop_clamps_to_image_bounds() {
        let img = test_image();
        let rect = CropRect {
            x: 50,
            y: 40,
            width: 200,
            height: 200,
        };

        let cropped = crop(&img, &rect).unwrap();
        assert_eq!(cropped.width(), 50);
        assert_eq!(cropped.height(), 40);
    }

    #[test]
    fn crop_outside_image_is_an_error() {
        let img = test_image();
        let rect = CropRect {
            x: 100,
            y: 0,
            width: 10,
            height: 10,
        };

        assert!(matches!(
            crop(&img, &rect),
            Err(ImageError::CropOutOfBounds)
        ));
    }
}
