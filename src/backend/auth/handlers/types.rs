/**
 * Authentication Types
 *
 * Request and response bodies for the user endpoints, plus the validation
 * rules each request body must pass.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::validation::{Validate, Validator};
use crate::shared::User;

/// Registration request
///
/// Missing fields deserialize as empty strings so validation can report
/// every one of them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), BackendError> {
        Validator::new()
            .length("username", &self.username, 4, 10, "Username is Required")
            .email("email", &self.email, "Proper Email is Required")
            .strong_password("password", &self.password, "Strong Password is Required")
            .finish()
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), BackendError> {
        Validator::new()
            .email("email", &self.email, "Proper Email is Required")
            .strong_password("password", &self.password, "Strong Password is Required")
            .finish()
    }
}

/// User info returned to clients; never carries the password hash
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub image_url: String,
    pub is_admin: bool,
    pub is_super_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            image_url: user.image_url,
            is_admin: user.is_admin,
            is_super_admin: user.is_super_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response for `POST /users/register`
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub msg: String,
    pub user: UserResponse,
}

/// Response for `POST /users/login`
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub msg: String,
    pub token: String,
    pub user: UserResponse,
}

/// Response for `GET /users/me`
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
}
