//! Store Module
//!
//! Persistence seams for users, contacts and groups. Entity services only
//! see these traits; the Postgres adapter backs the running server and the
//! in-memory adapter backs tests.
//!
//! # Uniqueness
//!
//! Email, mobile number and group name uniqueness is enforced by the store
//! itself (unique constraints in Postgres, a single write lock in memory).
//! A violation surfaces as [`StoreError::Duplicate`] naming the field.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{Contact, ContactRequest, Group, NewUser, User};

/// Postgres adapter
pub mod postgres;

/// In-memory adapter
#[cfg(any(test, feature = "test-support"))]
pub mod memory;

pub use postgres::PgStore;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryStore;

/// Errors raised by store adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A unique field already holds this value
    #[error("duplicate value for unique field {field}")]
    Duplicate { field: String },
    /// Connection, query or decoding failure
    #[error("store failure: {message}")]
    Backend { message: String },
}

impl StoreError {
    /// Helper for unique constraint violations
    pub fn duplicate(field: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
        }
    }

    /// Helper for adapter failures
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Credential store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; fails with `Duplicate { field: "email" }` on collision
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}

/// Contact store; every lookup except the mobile check is owner-scoped
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Find a contact by mobile number across all owners
    async fn find_contact_by_mobile(&self, mobile: &str) -> Result<Option<Contact>, StoreError>;

    /// Insert a contact; fails with `Duplicate { field: "mobile" }` on collision
    async fn insert_contact(&self, contact: Contact) -> Result<Contact, StoreError>;

    /// All contacts of one owner, newest first
    async fn list_contacts(&self, owner: Uuid) -> Result<Vec<Contact>, StoreError>;

    async fn find_contact(&self, id: Uuid, owner: Uuid) -> Result<Option<Contact>, StoreError>;

    /// Replace every mutable field; `None` when no such contact for this owner
    async fn update_contact(
        &self,
        id: Uuid,
        owner: Uuid,
        fields: ContactRequest,
    ) -> Result<Option<Contact>, StoreError>;

    /// Remove a contact; `false` when no such contact for this owner
    async fn delete_contact(&self, id: Uuid, owner: Uuid) -> Result<bool, StoreError>;
}

/// Group store
#[async_trait]
pub trait GroupStore: Send + Sync {
    async fn find_group_by_name(&self, name: &str) -> Result<Option<Group>, StoreError>;

    /// Insert a group; fails with `Duplicate { field: "name" }` on collision
    async fn insert_group(&self, group: Group) -> Result<Group, StoreError>;

    async fn list_groups(&self) -> Result<Vec<Group>, StoreError>;

    async fn find_group(&self, id: Uuid) -> Result<Option<Group>, StoreError>;
}

/// Everything the server persists
pub trait Store: UserStore + ContactStore + GroupStore {}

impl<T: UserStore + ContactStore + GroupStore> Store for T {}
