use super::extractors::{self as rules, FieldRule};
use crate::models::{PassportFields, NOT_FOUND};
use crate::utils::PassportError;
use log::debug;

/// Callback that sees the cleaned OCR lines before any rule runs.
pub type LineObserver = Box<dyn Fn(&[String]) + Send + Sync>;

/// A heuristic with a name, so logs can say which one produced a value.
pub struct NamedRule {
    pub name: &'static str,
    pub apply: FieldRule,
}

// Rule chains per field. Label-adjacent rules always come before the
// fallbacks and the first rule to produce a value wins.
const LAST_NAME_RULES: &[NamedRule] = &[
    NamedRule { name: "surname_label", apply: rules::surname_after_label },
    NamedRule { name: "capitalized_words", apply: rules::surname_from_capitalized_words },
];

const FIRST_NAME_RULES: &[NamedRule] = &[
    NamedRule { name: "given_name_label", apply: rules::given_name_after_label },
    NamedRule { name: "capitalized_words", apply: rules::given_name_from_capitalized_words },
];

const DATE_OF_BIRTH_RULES: &[NamedRule] = &[
    NamedRule { name: "date_of_birth_label", apply: rules::date_of_birth_after_label },
    NamedRule { name: "plausible_birth_date", apply: rules::plausible_birth_date },
];

const PLACE_OF_BIRTH_RULES: &[NamedRule] = &[
    NamedRule { name: "place_of_birth_label", apply: rules::place_of_birth_after_label },
];

const PASSPORT_NUMBER_RULES: &[NamedRule] = &[
    NamedRule { name: "passport_label", apply: rules::passport_number_after_label },
    NamedRule { name: "standalone_number", apply: rules::standalone_passport_number },
    NamedRule { name: "indian_number", apply: rules::indian_passport_number },
];

/// Recovers passport fields from raw OCR text.
///
/// Parsing is a pure function of the input: the same text always yields the
/// same result, and the parser keeps no state between calls.
pub struct PassportFieldParser {
    observer: Option<LineObserver>,
}

impl PassportFieldParser {
    pub fn new() -> Self {
        PassportFieldParser { observer: None }
    }

    /// Register a callback that receives the cleaned line list on every parse.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn parse(&self, text: &str) -> Result<PassportFields, PassportError> {
        let lines = Self::split_lines(text);
        debug!("Parsing passport text: {} non-empty lines", lines.len());

        if let Some(observer) = &self.observer {
            observer(&lines);
        }

        let last_name = Self::apply_rules("last name", LAST_NAME_RULES, &lines);
        let first_name = Self::apply_rules("first name", FIRST_NAME_RULES, &lines);
        let date_of_birth = Self::apply_rules("date of birth", DATE_OF_BIRTH_RULES, &lines);
        let place_of_birth = Self::apply_rules("place of birth", PLACE_OF_BIRTH_RULES, &lines);
        let passport_number = Self::apply_rules("passport number", PASSPORT_NUMBER_RULES, &lines);

        let (first_name, last_name) = match (first_name, last_name) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(PassportError::NameNotFound),
        };
        let passport_number = passport_number.ok_or(PassportError::PassportNumberNotFound)?;

        Ok(PassportFields {
            first_name,
            last_name,
            date_of_birth: date_of_birth.unwrap_or_else(|| NOT_FOUND.to_string()),
            place_of_birth: place_of_birth.unwrap_or_else(|| NOT_FOUND.to_string()),
            passport_number,
        })
    }

    /// Trimmed, non-empty lines in input order.
    pub fn split_lines(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }

    fn apply_rules(field: &str, chain: &[NamedRule], lines: &[String]) -> Option<String> {
        chain.iter().find_map(|rule| {
            let value = (rule.apply)(lines)?;
            let value = value.trim().to_string();
            if value.is_empty() {
                return None;
            }
            debug!("{} found by rule '{}': {}", field, rule.name, value);
            Some(value)
        })
    }
}

impl Default for PassportFieldParser {
    fn default() -> Self {
        Self::new()
    }
}
