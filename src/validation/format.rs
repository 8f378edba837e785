use crate::models::InvitationData;
use crate::utils::PassportError;

/// Checks the (possibly user-edited) fields before a letter is generated.
pub struct FormatValidator;

impl FormatValidator {
    pub fn validate(data: &InvitationData) -> Result<(), PassportError> {
        let mut missing = Vec::new();

        // Date of birth may be the "Not found" sentinel and is not checked
        if data.first_name.trim().is_empty() {
            missing.push("First name");
        }
        if data.last_name.trim().is_empty() {
            missing.push("Last name");
        }
        if data.place_of_birth.trim().is_empty() {
            missing.push("Place of birth");
        }
        if data.passport_number.trim().is_empty() {
            missing.push("Passport number");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PassportError::ValidationError(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NOT_FOUND;

    fn data() -> InvitationData {
        InvitationData {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            date_of_birth: NOT_FOUND.to_string(),
            place_of_birth: "London, UK".to_string(),
            passport_number: "AB123456".to_string(),
        }
    }

    #[test]
    fn test_valid_data_with_sentinel_date() {
        assert!(FormatValidator::validate(&data()).is_ok());
    }

    #[test]
    fn test_reports_all_missing_fields() {
        let mut input = data();
        input.first_name = " ".to_string();
        input.passport_number = String::new();

        let err = FormatValidator::validate(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Missing required fields: First name, Passport number"
        );
    }
}
