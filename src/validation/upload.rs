use crate::models::{file_extension, UploadRules, UploadStage};
use crate::utils::PassportError;
use log::warn;

/// File-type checks for an uploaded passport scan.
pub struct UploadValidator {
    rules: UploadRules,
}

impl UploadValidator {
    pub fn new() -> Self {
        UploadValidator {
            rules: UploadRules::new(),
        }
    }

    /// Is the file one the upload form accepts at all?
    pub fn validate_upload(&self, file_name: &str) -> Result<(), PassportError> {
        let rule = self.rules.get_rule(UploadStage::Upload)?;
        let extension = file_extension(file_name);

        if rule.accepts(&extension) {
            Ok(())
        } else {
            warn!("Rejected upload '{}': unsupported extension", file_name);
            Err(PassportError::UnsupportedFileType(rule.describe()))
        }
    }

    /// Can the OCR step read the file? PDFs pass the upload check but not this one.
    pub fn validate_for_ocr(&self, file_name: &str) -> Result<(), PassportError> {
        let rule = self.rules.get_rule(UploadStage::Ocr)?;
        if rule.accepts(&file_extension(file_name)) {
            Ok(())
        } else {
            Err(PassportError::PdfNotSupported)
        }
    }
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_images_case_insensitively() {
        let validator = UploadValidator::new();
        assert!(validator.validate_upload("passport.JPEG").is_ok());
        assert!(validator.validate_for_ocr("passport.Png").is_ok());
    }

    #[test]
    fn test_rejects_unknown_type() {
        let err = UploadValidator::new().validate_upload("passport.gif").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid file type. Supported formats: .jpg, .jpeg, .png, .pdf"
        );
    }

    #[test]
    fn test_pdf_upload_ok_but_not_ocr() {
        let validator = UploadValidator::new();
        assert!(validator.validate_upload("scan.pdf").is_ok());
        assert!(matches!(
            validator.validate_for_ocr("scan.pdf"),
            Err(PassportError::PdfNotSupported)
        ));
    }
}
