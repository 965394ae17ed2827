use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    #[validate(length(equal = 11))]
    pub cpf: String,
    #[validate(length(equal = 11))]
    pub phone: String,
}
