/**
 * Group Service
 *
 * Create, list and fetch groups. Names are unique across all groups.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::store::Store;
use crate::shared::{Group, GroupRequest};

#[derive(Clone)]
pub struct GroupService {
    store: Arc<dyn Store>,
}

impl GroupService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create a group; `Duplicate` if the name is taken
    pub async fn create(&self, request: GroupRequest) -> Result<Group, BackendError> {
        if self.store.find_group_by_name(&request.name).await?.is_some() {
            tracing::warn!("Group name already in use: {}", request.name);
            return Err(BackendError::duplicate("name"));
        }

        let group = self.store.insert_group(Group::new(request.name)).await?;
        tracing::info!("Group created: {} ({})", group.name, group.id);
        Ok(group)
    }

    pub async fn list(&self) -> Result<Vec<Group>, BackendError> {
        Ok(self.store.list_groups().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Group, BackendError> {
        self.store
            .find_group(id)
            .await?
            .ok_or_else(|| BackendError::not_found("The Group is not found"))
    }
}
