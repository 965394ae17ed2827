use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::dto::user_create_request::UserCreateRequest;
use crate::domain::user::dto::user_update_request::UserUpdateRequest;

/// A registered account. The password is kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Brazilian taxpayer id, 11 digits.
    pub cpf: String,
    pub phone: String,
}

impl From<UserCreateRequest> for UserEntity {
    fn from(req: UserCreateRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            cpf: req.cpf,
            phone: req.phone,
        }
    }
}

impl UserEntity {
    /// Overwrite only the fields present in the request.
    pub fn apply_update(&mut self, req: UserUpdateRequest) {
        if let Some(v) = req.first_name {
            self.first_name = v;
        }
        if let Some(v) = req.last_name {
            self.last_name = v;
        }
        if let Some(v) = req.email {
            self.email = v;
        }
        if let Some(v) = req.password {
            self.password = v;
        }
        if let Some(v) = req.cpf {
            self.cpf = v;
        }
        if let Some(v) = req.phone {
            self.phone = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> UserEntity {
        UserEntity {
            id: "u-1".into(),
            first_name: "Ana".into(),
            last_name: "Lima".into(),
            email: "ana@x.com".into(),
            password: "p1".into(),
            cpf: "12345678901".into(),
            phone: "11987654321".into(),
        }
    }

    #[test]
    fn apply_update_touches_only_present_fields() {
        let mut user = sample();
        let req: UserUpdateRequest =
            serde_json::from_value(json!({ "lastName": "Souza", "phone": "11900000000" }))
                .unwrap();

        user.apply_update(req);

        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.last_name, "Souza");
        assert_eq!(user.phone, "11900000000");
        assert_eq!(user.email, "ana@x.com");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["firstName"], "Ana");
        assert_eq!(value["lastName"], "Lima");
        assert_eq!(value["password"], "p1");
        assert!(value.get("first_name").is_none());
    }
}
