// Field-specific extraction rules for PassportFieldParser.
// Every rule is a pure function over the trimmed, non-empty OCR lines and
// returns the first value it can find.
use lazy_static::lazy_static;
use regex::Regex;

/// Dates with a year at or above this are not accepted as a birth date
/// unless they sit next to an explicit birth-date label.
pub const MAX_BIRTH_YEAR_EXCLUSIVE: u32 = 2010;

pub type FieldRule = fn(&[String]) -> Option<String>;

lazy_static! {
    // Field labels
    static ref SURNAME_LABEL: Regex = Regex::new(r"(?i)surname").unwrap();
    static ref GIVEN_NAME_LABEL: Regex = Regex::new(r"(?i)given name").unwrap();
    static ref DOB_LABEL: Regex = Regex::new(r"(?i)date of birth|dob").unwrap();
    static ref POB_LABEL: Regex = Regex::new(r"(?i)place of birth").unwrap();
    static ref PASSPORT_LABEL: Regex = Regex::new(r"(?i)passport").unwrap();
    static ref PASSPORT_NUMBER_LABEL: Regex = Regex::new(r"(?i)passport number").unwrap();
    static ref NON_BIRTH_DATE_LABEL: Regex = Regex::new(r"(?i)date of issue|date of expiry").unwrap();
    static ref FIELD_LABEL_LINE: Regex = Regex::new(r"(?i)surname|given|nationality|passport").unwrap();

    // A line following a label that is itself another label, not a value
    static ref SURNAME_VALUE_REJECT: Regex = Regex::new(r"(?i)surname|given").unwrap();
    static ref GIVEN_NAME_VALUE_REJECT: Regex = Regex::new(r"(?i)given|nationality").unwrap();
    static ref POB_VALUE_REJECT: Regex = Regex::new(r"(?i)nationality|sex|passport").unwrap();

    // Values
    static ref DATE: Regex = Regex::new(r"([0-9]{1,2})[-/\s]([0-9]{1,2})[-/\s]([0-9]{4})").unwrap();
    static ref PASSPORT_NUMBER_INLINE: Regex = Regex::new(r"[A-Z][0-9]{7,9}").unwrap();
    static ref PASSPORT_NUMBER_STANDALONE: Regex = Regex::new(r"^[A-Z][0-9]{7,9}$").unwrap();
    static ref INDIAN_PASSPORT_NUMBER: Regex = Regex::new(r"^P[0-9]{7,9}$").unwrap();
    static ref CAPITALIZED_WORD: Regex = Regex::new(r"^[A-Z][A-Za-z]*$").unwrap();

    // Sanitizers
    static ref NON_NAME_CHARS: Regex = Regex::new(r"[^A-Za-z\s]").unwrap();
    static ref NON_PLACE_CHARS: Regex = Regex::new(r"[^A-Za-z\s,]").unwrap();
}

/// Keep ASCII letters and whitespace only.
pub fn sanitize_name(value: &str) -> String {
    NON_NAME_CHARS.replace_all(value, "").trim().to_string()
}

/// Like `sanitize_name` but commas survive ("Bidasar, Rajasthan").
pub fn sanitize_place(value: &str) -> String {
    NON_PLACE_CHARS.replace_all(value, "").trim().to_string()
}

/// First `D{1,2} sep D{1,2} sep D{4}` in `text`, re-emitted as DD/MM/YYYY.
pub fn first_date(text: &str) -> Option<String> {
    DATE.captures(text)
        .map(|caps| format_date(&caps[1], &caps[2], &caps[3]))
}

fn format_date(day: &str, month: &str, year: &str) -> String {
    format!("{:0>2}/{:0>2}/{}", day, month, year)
}

fn value_after_label(
    lines: &[String],
    label: &Regex,
    reject: &Regex,
    sanitize: fn(&str) -> String,
) -> Option<String> {
    lines.windows(2).find_map(|pair| {
        let (line, next) = (&pair[0], &pair[1]);
        if !label.is_match(line) || reject.is_match(next) {
            return None;
        }
        let value = sanitize(next);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

/// Line after a "Surname" label.
pub fn surname_after_label(lines: &[String]) -> Option<String> {
    value_after_label(lines, &SURNAME_LABEL, &SURNAME_VALUE_REJECT, sanitize_name)
}

/// Line after a "Given Name(s)" label.
pub fn given_name_after_label(lines: &[String]) -> Option<String> {
    value_after_label(lines, &GIVEN_NAME_LABEL, &GIVEN_NAME_VALUE_REJECT, sanitize_name)
}

/// Line after a "Place of Birth" label.
pub fn place_of_birth_after_label(lines: &[String]) -> Option<String> {
    value_after_label(lines, &POB_LABEL, &POB_VALUE_REJECT, sanitize_place)
}

/// Date on a "Date of Birth"/"DOB" line or on the line right after it.
/// Lines that also mention the issue or expiry date are skipped.
pub fn date_of_birth_after_label(lines: &[String]) -> Option<String> {
    lines.iter().enumerate().find_map(|(i, line)| {
        if !DOB_LABEL.is_match(line) || NON_BIRTH_DATE_LABEL.is_match(line) {
            return None;
        }
        let next = lines.get(i + 1).map(String::as_str).unwrap_or("");
        first_date(&format!("{} {}", line, next))
    })
}

/// `[A-Z]` followed by 7-9 digits on a line carrying a "Passport" label.
pub fn passport_number_after_label(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .filter(|line| PASSPORT_LABEL.is_match(line) && !PASSPORT_NUMBER_LABEL.is_match(line))
        .find_map(|line| PASSPORT_NUMBER_INLINE.find(line))
        .map(|m| m.as_str().to_string())
}

/// A line that is nothing but a passport number.
pub fn standalone_passport_number(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find(|line| PASSPORT_NUMBER_STANDALONE.is_match(line))
        .cloned()
}

/// Indian passports: `P` followed by 7-9 digits on its own line.
pub fn indian_passport_number(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find(|line| INDIAN_PASSPORT_NUMBER.is_match(line))
        .cloned()
}

/// First two capitalized words of the first non-label line that has at
/// least two of them. No plausibility check: any noise line qualifies.
pub fn capitalized_word_pair(lines: &[String]) -> Option<(String, String)> {
    lines
        .iter()
        .filter(|line| !FIELD_LABEL_LINE.is_match(line))
        .find_map(|line| {
            let mut words = line
                .split_whitespace()
                .filter(|word| CAPITALIZED_WORD.is_match(word));
            match (words.next(), words.next()) {
                (Some(first), Some(second)) => Some((first.to_string(), second.to_string())),
                _ => None,
            }
        })
}

pub fn surname_from_capitalized_words(lines: &[String]) -> Option<String> {
    capitalized_word_pair(lines).map(|(last, _)| last)
}

pub fn given_name_from_capitalized_words(lines: &[String]) -> Option<String> {
    capitalized_word_pair(lines).map(|(_, first)| first)
}

/// First unlabelled date whose year looks like a birth year.
/// Only the first date on each line is considered.
pub fn plausible_birth_date(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .filter(|line| !NON_BIRTH_DATE_LABEL.is_match(line))
        .filter_map(|line| DATE.captures(line))
        .find_map(|caps| {
            let year: u32 = caps[3].parse().ok()?;
            if year < MAX_BIRTH_YEAR_EXCLUSIVE {
                Some(format_date(&caps[1], &caps[2], &caps[3]))
            } else {
                None
            }
        })
}
