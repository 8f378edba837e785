use std::env;

/// Characters Tesseract is allowed to emit for the visual zone of the passport.
pub const DEFAULT_CHAR_WHITELIST: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789/-,. ";

pub const DEFAULT_LANGUAGE: &str = "eng";

pub const TESSDATA_ENV: &str = "TESSDATA_PREFIX";
pub const LANGUAGE_ENV: &str = "PASSPORT_OCR_LANG";

/// Settings for the OCR step.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrConfig {
    pub language: String,
    pub tessdata_prefix: Option<String>,
    pub char_whitelist: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        OcrConfig {
            language: DEFAULT_LANGUAGE.to_string(),
            tessdata_prefix: None,
            char_whitelist: DEFAULT_CHAR_WHITELIST.to_string(),
        }
    }
}

impl OcrConfig {
    /// Defaults overridden by `TESSDATA_PREFIX` and `PASSPORT_OCR_LANG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = OcrConfig::default();

        if let Some(lang) = lookup(LANGUAGE_ENV).filter(|v| !v.trim().is_empty()) {
            config.language = lang.trim().to_string();
        }
        config.tessdata_prefix = lookup(TESSDATA_ENV).filter(|v| !v.trim().is_empty());

        config
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_tessdata_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tessdata_prefix = Some(prefix.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OcrConfig::default();
        assert_eq!(config.language, "eng");
        assert!(config.tessdata_prefix.is_none());
        assert!(config.char_whitelist.contains('/'));
        assert!(!config.char_whitelist.contains('<'));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = OcrConfig::from_lookup(|key| match key {
            LANGUAGE_ENV => Some("eng+hin".to_string()),
            TESSDATA_ENV => Some("/usr/local/share/tessdata".to_string()),
            _ => None,
        });
        assert_eq!(config.language, "eng+hin");
        assert_eq!(config.tessdata_prefix.as_deref(), Some("/usr/local/share/tessdata"));
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = OcrConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, OcrConfig::default());
    }
}
