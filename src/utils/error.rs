use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassportError {
    #[error("Could not extract name from passport document. Please ensure the image is clear and contains the name field.")]
    NameNotFound,

    #[error("Could not extract passport number from document. Please ensure the image is clear and contains the passport number.")]
    PassportNumberNotFound,

    #[error("Invalid file type. Supported formats: {0}")]
    UnsupportedFileType(String),

    #[error("PDF support requires additional setup. Please use JPEG or PNG images.")]
    PdfNotSupported,

    #[error("Invalid base64 image data: {0}")]
    InvalidBase64(String),

    #[error("Image processing error: {0}")]
    ImageProcessingError(String),

    #[error("OCR error: {0}")]
    OcrError(String),

    #[error("Failed to extract passport data: {0}")]
    ExtractionFailed(#[source] Box<PassportError>),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PassportError {
    /// True for failures caused by the document content itself.
    /// Callers should ask for a clearer image instead of retrying.
    pub fn is_unreadable_document(&self) -> bool {
        match self {
            PassportError::NameNotFound | PassportError::PassportNumberNotFound => true,
            PassportError::ExtractionFailed(inner) => inner.is_unreadable_document(),
            _ => false,
        }
    }
}
