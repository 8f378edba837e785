use crate::models::PassportFields;
use crate::processing::{ImageProcessor, OcrEngine, PassportFieldParser, TesseractOcr};
use crate::utils::{OcrConfig, PassportError};
use crate::validation::UploadValidator;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{info, warn};
use std::path::Path;

/// Runs an uploaded passport scan through the whole pipeline:
/// file-type check, preprocessing, OCR and field parsing.
pub struct PassportExtractor<E: OcrEngine> {
    ocr: E,
    parser: PassportFieldParser,
    upload: UploadValidator,
}

impl PassportExtractor<TesseractOcr> {
    pub fn new(config: OcrConfig) -> Self {
        Self::with_engine(TesseractOcr::new(config))
    }
}

impl<E: OcrEngine> PassportExtractor<E> {
    pub fn with_engine(ocr: E) -> Self {
        PassportExtractor {
            ocr,
            parser: PassportFieldParser::new(),
            upload: UploadValidator::new(),
        }
    }

    pub fn with_parser(mut self, parser: PassportFieldParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn extract(&self, image_data: &[u8], file_name: &str) -> Result<PassportFields, PassportError> {
        self.upload.validate_upload(file_name)?;
        self.extract_unchecked(image_data, file_name)
    }

    /// Same as `extract` for a base64-encoded upload payload.
    pub fn extract_base64(&self, image_base64: &str, file_name: &str) -> Result<PassportFields, PassportError> {
        self.upload.validate_upload(file_name)?;

        let image_data = STANDARD
            .decode(image_base64.trim())
            .map_err(|e| PassportError::InvalidBase64(e.to_string()))?;

        self.extract_unchecked(&image_data, file_name)
    }

    pub fn extract_file(&self, image_path: &Path) -> Result<PassportFields, PassportError> {
        let file_name = image_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        self.upload.validate_upload(file_name)?;

        let image_data = std::fs::read(image_path)?;
        self.extract_unchecked(&image_data, file_name)
    }

    // Callers have already checked the upload type. Every failure past this
    // point is reported as an extraction failure carrying the inner message.
    fn extract_unchecked(&self, image_data: &[u8], file_name: &str) -> Result<PassportFields, PassportError> {
        self.run_pipeline(image_data, file_name).map_err(|e| {
            warn!("Error extracting passport data from '{}': {}", file_name, e);
            PassportError::ExtractionFailed(Box::new(e))
        })
    }

    fn run_pipeline(&self, image_data: &[u8], file_name: &str) -> Result<PassportFields, PassportError> {
        self.upload.validate_for_ocr(file_name)?;

        let processed_image = ImageProcessor::process_bytes(image_data)?;
        let text = self.ocr.recognize(&processed_image)?;
        let fields = self.parser.parse(&text)?;

        info!("Extracted passport {} for {}", fields.passport_number, fields.full_name());
        Ok(fields)
    }
}
