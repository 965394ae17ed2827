use serde::Serialize;

use crate::core::persistence::user::user_entity::UserEntity;

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserEntity>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserEntity,
}

/// Login and update both answer with a message plus the full record.
#[derive(Debug, Serialize)]
pub struct UserMessageResponse {
    pub message: String,
    pub user: UserEntity,
}
