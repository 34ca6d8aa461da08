/**
 * In-Memory Store
 *
 * Implements the store traits over plain collections behind one
 * `tokio::sync::RwLock`. Uniqueness checks and inserts happen under the
 * same write lock, so they hold under concurrent requests just like the
 * Postgres constraints do.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::store::{ContactStore, GroupStore, StoreError, UserStore};
use crate::shared::{Contact, ContactRequest, Group, NewUser, User};

#[derive(Debug, Default)]
struct Collections {
    users: HashMap<Uuid, User>,
    /// Insertion order, which is creation order
    contacts: Vec<Contact>,
    groups: Vec<Group>,
}

/// Store that lives for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::duplicate("email"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            image_url: user.image_url,
            is_admin: false,
            is_super_admin: false,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn find_contact_by_mobile(&self, mobile: &str) -> Result<Option<Contact>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.contacts.iter().find(|c| c.mobile == mobile).cloned())
    }

    async fn insert_contact(&self, contact: Contact) -> Result<Contact, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.contacts.iter().any(|c| c.mobile == contact.mobile) {
            return Err(StoreError::duplicate("mobile"));
        }
        inner.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn list_contacts(&self, owner: Uuid) -> Result<Vec<Contact>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .contacts
            .iter()
            .rev()
            .filter(|c| c.user_id == owner)
            .cloned()
            .collect())
    }

    async fn find_contact(&self, id: Uuid, owner: Uuid) -> Result<Option<Contact>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .contacts
            .iter()
            .find(|c| c.id == id && c.user_id == owner)
            .cloned())
    }

    async fn update_contact(
        &self,
        id: Uuid,
        owner: Uuid,
        fields: ContactRequest,
    ) -> Result<Option<Contact>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner
            .contacts
            .iter()
            .position(|c| c.id == id && c.user_id == owner)
        else {
            return Ok(None);
        };

        if inner
            .contacts
            .iter()
            .any(|c| c.mobile == fields.mobile && c.id != id)
        {
            return Err(StoreError::duplicate("mobile"));
        }

        let contact = &mut inner.contacts[index];
        contact.apply(fields);
        Ok(Some(contact.clone()))
    }

    async fn delete_contact(&self, id: Uuid, owner: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.contacts.len();
        inner.contacts.retain(|c| !(c.id == id && c.user_id == owner));
        Ok(inner.contacts.len() < before)
    }
}

#[async_trait]
impl GroupStore for MemoryStore {
    async fn find_group_by_name(&self, name: &str) -> Result<Option<Group>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.groups.iter().find(|g| g.name == name).cloned())
    }

    async fn insert_group(&self, group: Group) -> Result<Group, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.groups.iter().any(|g| g.name == group.name) {
            return Err(StoreError::duplicate("name"));
        }
        inner.groups.push(group.clone());
        Ok(group)
    }

    async fn list_groups(&self) -> Result<Vec<Group>, StoreError> {
        Ok(self.inner.read().await.groups.clone())
    }

    async fn find_group(&self, id: Uuid) -> Result<Option<Group>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.groups.iter().find(|g| g.id == id).cloned())
    }
}
