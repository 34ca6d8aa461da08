/**
 * Contact Service
 *
 * Owner-scoped CRUD over the contact store. Mobile numbers are unique
 * across all contacts; the check here gives a friendly error and the
 * store constraint settles concurrent creates.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::store::Store;
use crate::shared::{Contact, ContactRequest, User};

const CONTACT_NOT_FOUND: &str = "The Contact is not found";

/// Owner-scoped contact operations
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn Store>,
}

impl ContactService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create a contact owned by `owner`
    ///
    /// Fails with `Duplicate` when the mobile number is already taken by
    /// any contact, whoever owns it.
    pub async fn create(&self, owner: &User, fields: ContactRequest) -> Result<Contact, BackendError> {
        if self.store.find_contact_by_mobile(&fields.mobile).await?.is_some() {
            tracing::warn!("Mobile already in use: {}", fields.mobile);
            return Err(BackendError::duplicate("mobile"));
        }

        let contact = self.store.insert_contact(Contact::new(owner.id, fields)).await?;
        tracing::info!("Contact created: {} for user {}", contact.id, owner.id);
        Ok(contact)
    }

    /// The owner's contacts, newest first
    pub async fn list(&self, owner: &User) -> Result<Vec<Contact>, BackendError> {
        Ok(self.store.list_contacts(owner.id).await?)
    }

    pub async fn get(&self, owner: &User, id: Uuid) -> Result<Contact, BackendError> {
        self.store
            .find_contact(id, owner.id)
            .await?
            .ok_or_else(|| BackendError::not_found(CONTACT_NOT_FOUND))
    }

    /// Replace every attribute of an owned contact
    pub async fn update(
        &self,
        owner: &User,
        id: Uuid,
        fields: ContactRequest,
    ) -> Result<Contact, BackendError> {
        let contact = self
            .store
            .update_contact(id, owner.id, fields)
            .await?
            .ok_or_else(|| BackendError::not_found(CONTACT_NOT_FOUND))?;
        tracing::info!("Contact updated: {}", contact.id);
        Ok(contact)
    }

    pub async fn delete(&self, owner: &User, id: Uuid) -> Result<(), BackendError> {
        if !self.store.delete_contact(id, owner.id).await? {
            return Err(BackendError::not_found(CONTACT_NOT_FOUND));
        }
        tracing::info!("Contact deleted: {}", id);
        Ok(())
    }
}
