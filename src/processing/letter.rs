// Fixed-template invitation letter. Produces the filename and the text
// content; turning the text into PDF bytes is left to the caller.
use crate::models::InvitationData;
use chrono::{Datelike, NaiveDate};

pub const DEFAULT_LETTER_NUMBER: &str = "00190";

const AGENCY_HEADER: &[&str] = &[
    "DOMOVOI TRAVEL",
    "Benson Francis Paul Sole proprietorship",
    "Address: Ave Baghramyan 70, 0033 Yerevan",
    "Registration number: 264.1460655",
    "Phone: +374 44761767 Email: contact@domovoi-travel.com",
    "Website: www.domovoi-travel.com",
];

const RECIPIENT: &str = "To: Armenian Visa Services";

const GUARANTEE: &[&str] = &[
    "I guarantee that the invited person will not violate Armenian migration rules",
    "and will leave Armenia within the specified timeframe.",
];

/// `invitation-{last}-{first}.pdf`, names lowercased with everything except
/// ASCII letters and digits removed.
pub fn invitation_filename(first_name: &str, last_name: &str) -> String {
    fn sanitize(name: &str) -> String {
        name.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase()
    }

    format!("invitation-{}-{}.pdf", sanitize(last_name), sanitize(first_name))
}

pub struct InvitationLetter<'a> {
    data: &'a InvitationData,
    letter_number: String,
}

impl<'a> InvitationLetter<'a> {
    pub fn new(data: &'a InvitationData) -> Self {
        InvitationLetter {
            data,
            letter_number: DEFAULT_LETTER_NUMBER.to_string(),
        }
    }

    pub fn with_letter_number(mut self, letter_number: impl Into<String>) -> Self {
        self.letter_number = letter_number.into();
        self
    }

    pub fn filename(&self) -> String {
        invitation_filename(&self.data.first_name, &self.data.last_name)
    }

    /// Letter content, one entry per printed line. Empty entries are
    /// vertical gaps between blocks.
    pub fn lines(&self, date: NaiveDate) -> Vec<String> {
        let mut lines: Vec<String> = AGENCY_HEADER.iter().map(|l| l.to_string()).collect();

        lines.push(String::new());
        lines.push(format!("Letter No. {}", self.letter_number));
        lines.push(format!("Date: {}/{}/{}", date.day(), date.month(), date.year()));

        lines.push(String::new());
        lines.push(RECIPIENT.to_string());

        lines.push(String::new());
        lines.push("INVITED PERSON INFORMATION".to_string());
        lines.push(format!("Name: {} {}", self.data.first_name, self.data.last_name));
        lines.push(format!("Date of Birth: {}", self.data.date_of_birth));
        lines.push(format!("Place of Birth: {}", self.data.place_of_birth));
        lines.push(format!("Passport Number: {}", self.data.passport_number));

        lines.push(String::new());
        lines.extend(GUARANTEE.iter().map(|l| l.to_string()));

        lines.push(String::new());
        lines.push("_________________________".to_string());
        lines.push("Signature".to_string());

        lines
    }

    pub fn render_text(&self, date: NaiveDate) -> String {
        self.lines(date).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InvitationData {
        InvitationData {
            first_name: "Mohammed".to_string(),
            last_name: "Asif".to_string(),
            date_of_birth: "21/08/1995".to_string(),
            place_of_birth: "Bidasar, Rajasthan".to_string(),
            passport_number: "R9909573".to_string(),
        }
    }

    #[test]
    fn test_filename_format() {
        assert_eq!(invitation_filename("Mohammed", "Asif"), "invitation-asif-mohammed.pdf");
        assert_eq!(invitation_filename("JOHN", "DOE"), "invitation-doe-john.pdf");
        assert_eq!(invitation_filename("A", "B"), "invitation-b-a.pdf");
    }

    #[test]
    fn test_filename_strips_special_characters() {
        assert_eq!(
            invitation_filename("Jean-Pierre", "O'Brien"),
            "invitation-obrien-jeanpierre.pdf"
        );
        assert_eq!(
            invitation_filename("Mary Ann", "Van Der Berg"),
            "invitation-vanderberg-maryann.pdf"
        );
    }

    #[test]
    fn test_letter_contains_invited_person() {
        let data = sample();
        let letter = InvitationLetter::new(&data);
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let lines = letter.lines(date);

        assert_eq!(lines[0], "DOMOVOI TRAVEL");
        assert!(lines.contains(&"Date: 7/3/2025".to_string()));
        assert!(lines.contains(&"Name: Mohammed Asif".to_string()));
        assert!(lines.contains(&"Place of Birth: Bidasar, Rajasthan".to_string()));
        assert!(lines.contains(&"Passport Number: R9909573".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("Signature"));
        assert_eq!(letter.filename(), "invitation-asif-mohammed.pdf");
    }

    #[test]
    fn test_custom_letter_number() {
        let data = sample();
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let text = InvitationLetter::new(&data)
            .with_letter_number("00421")
            .render_text(date);
        assert!(text.contains("Letter No. 00421\nDate: 31/12/2025"));
    }
}
