//! User Data Structure
//!
//! A registered account. The password hash is stored alongside the profile
//! but is never serialised: the API only ever sends [`User`] through
//! `UserResponse`, and `User` itself skips the hash when serialised.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Avatar size, rating and fallback passed to Gravatar
const AVATAR_QUERY: &str = "s=200&r=pg&d=mm";

/// User struct representing a user in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Username (4-10 chars)
    pub username: String,
    /// Email address, unique across users
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Avatar URL derived from the email
    pub image_url: String,
    pub is_admin: bool,
    pub is_super_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for inserting a user; the password is already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub image_url: String,
}

impl NewUser {
    /// Build a new user record, deriving the avatar from the email
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let image_url = avatar_url(&email);
        Self {
            username,
            email,
            password_hash,
            image_url,
        }
    }
}

/// Gravatar URL for an email address
///
/// Gravatar accepts the SHA-256 of the trimmed, lowercased address, so the
/// same email always maps to the same avatar.
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{}?{}",
        hex::encode(digest),
        AVATAR_QUERY
    )
}
