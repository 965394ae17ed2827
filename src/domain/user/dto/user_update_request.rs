use serde::{Deserialize, Serialize};
use validator::Validate;

/// Partial user update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub password: Option<String>,
    #[validate(length(equal = 11))]
    pub cpf: Option<String>,
    #[validate(length(equal = 11))]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_valid() {
        let req: UserUpdateRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn present_fields_are_still_checked() {
        let req: UserUpdateRequest = serde_json::from_value(json!({ "phone": "123" })).unwrap();
        assert!(req.validate().is_err());
    }
}
