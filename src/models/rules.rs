use crate::utils::PassportError;

/// Which stage of the upload flow a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Upload,
    Ocr,
}

pub struct UploadRule {
    pub stage: UploadStage,
    pub extensions: Vec<&'static str>,
}

pub struct UploadRules {
    pub rules: Vec<UploadRule>,
}

impl UploadRules {
    pub fn new() -> Self {
        let mut rules = Vec::new();

        // PDFs are accepted at upload but OCR only reads raster images
        rules.push(UploadRule {
            stage: UploadStage::Upload,
            extensions: vec![".jpg", ".jpeg", ".png", ".pdf"],
        });
        rules.push(UploadRule {
            stage: UploadStage::Ocr,
            extensions: vec![".jpg", ".jpeg", ".png"],
        });

        UploadRules { rules }
    }

    pub fn get_rule(&self, stage: UploadStage) -> Result<&UploadRule, PassportError> {
        self.rules
            .iter()
            .find(|rule| rule.stage == stage)
            .ok_or_else(|| {
                PassportError::ValidationError(format!("No upload rule for stage {:?}", stage))
            })
    }
}

impl Default for UploadRules {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadRule {
    pub fn accepts(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| *e == extension)
    }

    pub fn describe(&self) -> String {
        self.extensions.join(", ")
    }
}

/// Lowercased extension including the leading dot, or an empty string.
pub fn file_extension(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) => file_name[idx..].to_lowercase(),
        None => String::new(),
    }
}
