//! Contact Data Structure
//!
//! An address-book entry owned by exactly one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a contact in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique contact ID
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// The user who owns this contact; fixed at creation
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    /// Mobile number, unique across every user's contacts
    pub mobile: String,
    pub company: String,
    pub title: String,
    /// Opaque group reference; not checked against existing groups
    pub group_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The full mutable attribute set of a contact
///
/// Used for both creation and update; an update replaces every field.
/// Missing JSON fields deserialise as empty strings so validation can
/// report them by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub mobile: String,
    pub company: String,
    pub title: String,
    pub group_id: String,
}

impl Contact {
    /// Create a new contact owned by `user_id`
    pub fn new(user_id: Uuid, fields: ContactRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: fields.name,
            image_url: fields.image_url,
            email: fields.email,
            mobile: fields.mobile,
            company: fields.company,
            title: fields.title,
            group_id: fields.group_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable attribute, keeping id, owner and creation time
    pub fn apply(&mut self, fields: ContactRequest) {
        self.name = fields.name;
        self.image_url = fields.image_url;
        self.email = fields.email;
        self.mobile = fields.mobile;
        self.company = fields.company;
        self.title = fields.title;
        self.group_id = fields.group_id;
        self.updated_at = Utc::now();
    }
}
