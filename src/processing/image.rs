use crate::utils::PassportError;
use image::{DynamicImage, GenericImageView, GrayImage, ImageOutputFormat};
use imageproc::contrast::equalize_histogram;
use log::debug;
use std::io::Cursor;
use std::path::Path;

/// Smallest width/height worth sending to OCR.
pub const MIN_DIMENSION: u32 = 100;

pub struct ImageProcessor;

impl ImageProcessor {
    pub fn process_image(image_path: &Path) -> Result<Vec<u8>, PassportError> {
        let image_data = std::fs::read(image_path)?;
        Self::process_bytes(&image_data)
    }

    /// Decode an uploaded image and re-encode it as a contrast-enhanced
    /// grayscale PNG for the OCR engine.
    pub fn process_bytes(image_data: &[u8]) -> Result<Vec<u8>, PassportError> {
        let img = image::load_from_memory(image_data).map_err(|e| {
            PassportError::ImageProcessingError(format!("Failed to load image: {}", e))
        })?;

        let (width, height) = img.dimensions();
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(PassportError::ImageProcessingError(format!(
                "Image too small for processing: {}x{}",
                width, height
            )));
        }
        debug!("Preprocessing {}x{} image", width, height);

        let processed = Self::preprocess_image(&img);

        let mut buffer = Vec::new();
        processed
            .write_to(&mut Cursor::new(&mut buffer), ImageOutputFormat::Png)
            .map_err(|e| {
                PassportError::ImageProcessingError(format!("Failed to write processed image: {}", e))
            })?;

        Ok(buffer)
    }

    fn preprocess_image(img: &DynamicImage) -> GrayImage {
        let gray = img.to_luma8();
        equalize_histogram(&gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma};
    use std::io::Write;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G'];

    fn gradient_png(width: u32, height: u32) -> Vec<u8> {
        let img: GrayImage = ImageBuffer::from_fn(width, height, |x, _| Luma([(x % 256) as u8]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageOutputFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_process_bytes_outputs_png() {
        let output = ImageProcessor::process_bytes(&gradient_png(160, 120)).unwrap();
        assert!(output.starts_with(PNG_SIGNATURE));

        let decoded = image::load_from_memory(&output).unwrap();
        assert_eq!(decoded.dimensions(), (160, 120));
    }

    #[test]
    fn test_rejects_small_image() {
        let err = ImageProcessor::process_bytes(&gradient_png(50, 200)).unwrap_err();
        assert!(err.to_string().contains("Image too small"));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = ImageProcessor::process_bytes(b"not an image").unwrap_err();
        assert!(matches!(err, PassportError::ImageProcessingError(_)));
    }

    #[test]
    fn test_process_image_from_file() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&gradient_png(120, 120)).unwrap();

        let output = ImageProcessor::process_image(file.path()).unwrap();
        assert!(output.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ImageProcessor::process_image(Path::new("/nonexistent/passport.png")).unwrap_err();
        assert!(matches!(err, PassportError::Io(_)));
    }
}
