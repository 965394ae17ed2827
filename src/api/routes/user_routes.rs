//! User routes (e.g., /users/*, /login)

use axum::{routing::{get, post, put}, Router};
use crate::api::controller::user::UserController;
use crate::app_state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(UserController::list_users).post(UserController::create_user))
        .route("/login", post(UserController::login))
        .route("/users/{id}", get(UserController::get_user))
        .route("/users/{id}/edit", put(UserController::update_user))
}
