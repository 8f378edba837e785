use serde::{Deserialize, Serialize};

/// Placeholder for optional fields the parser could not locate.
pub const NOT_FOUND: &str = "Not found";

/// Fields recovered from the visual zone of a passport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportFields {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String, // DD/MM/YYYY or NOT_FOUND
    pub place_of_birth: String,
    pub passport_number: String,
}

impl PassportFields {
    pub fn has_date_of_birth(&self) -> bool {
        self.date_of_birth != NOT_FOUND
    }

    pub fn has_place_of_birth(&self) -> bool {
        self.place_of_birth != NOT_FOUND
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data the invitation letter is rendered from. Starts as parser output
/// and may be corrected by the user before generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationData {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub passport_number: String,
}

impl From<PassportFields> for InvitationData {
    fn from(fields: PassportFields) -> Self {
        InvitationData {
            first_name: fields.first_name,
            last_name: fields.last_name,
            date_of_birth: fields.date_of_birth,
            place_of_birth: fields.place_of_birth,
            passport_number: fields.passport_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PassportFields {
        PassportFields {
            first_name: "MOHAMMED ASIF".to_string(),
            last_name: "CHHINPA".to_string(),
            date_of_birth: "21/08/1995".to_string(),
            place_of_birth: NOT_FOUND.to_string(),
            passport_number: "R9909573".to_string(),
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["firstName"], "MOHAMMED ASIF");
        assert_eq!(json["passportNumber"], "R9909573");
        assert_eq!(json["placeOfBirth"], "Not found");
    }

    #[test]
    fn test_sentinel_helpers() {
        let fields = sample();
        assert!(fields.has_date_of_birth());
        assert!(!fields.has_place_of_birth());
        assert_eq!(fields.full_name(), "MOHAMMED ASIF CHHINPA");
    }

    #[test]
    fn test_invitation_from_fields() {
        let data = InvitationData::from(sample());
        assert_eq!(data.last_name, "CHHINPA");
        assert_eq!(data.date_of_birth, "21/08/1995");
    }
}
