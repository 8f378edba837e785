use crate::utils::{OcrConfig, PassportError};
use log::{debug, info};
use std::io::Write;
use tesseract::{PageSegMode, Tesseract};

/// Turns an image into raw text. The parser never talks to an OCR engine
/// directly, so tests and other backends can plug in here.
pub trait OcrEngine {
    fn recognize(&self, image_data: &[u8]) -> Result<String, PassportError>;
}

pub struct TesseractOcr {
    config: OcrConfig,
}

impl TesseractOcr {
    pub fn new(config: OcrConfig) -> Self {
        TesseractOcr { config }
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new(OcrConfig::from_env())
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, image_data: &[u8]) -> Result<String, PassportError> {
        info!("Running OCR (language: {})", self.config.language);

        // Tesseract reads from a path, not from memory
        let mut temp_file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .map_err(|e| PassportError::OcrError(format!("Failed to create temp file: {}", e)))?;
        temp_file
            .write_all(image_data)
            .map_err(|e| PassportError::OcrError(format!("Failed to write to temp file: {}", e)))?;

        let path_str = temp_file
            .path()
            .to_str()
            .ok_or_else(|| PassportError::OcrError("Failed to convert path to string".to_string()))?;

        let mut tess = Tesseract::new(
            self.config.tessdata_prefix.as_deref(),
            Some(self.config.language.as_str()),
        )
        .map_err(|e| PassportError::OcrError(format!("Tesseract init error: {}", e)))?
        .set_variable("tessedit_char_whitelist", &self.config.char_whitelist)
        .map_err(|e| PassportError::OcrError(format!("Tesseract set variable error: {}", e)))?;

        tess.set_page_seg_mode(PageSegMode::PsmAuto);

        tess = tess
            .set_image(path_str)
            .map_err(|e| PassportError::OcrError(format!("Tesseract set image error: {}", e)))?;

        let text = tess
            .get_text()
            .map_err(|e| PassportError::OcrError(format!("Tesseract error: {}", e)))?;

        debug!("OCR produced {} characters", text.len());
        Ok(text)
    }
}
