/**
 * Postgres Store
 *
 * sqlx-backed implementation of the store traits. Unique constraints from
 * the migrations are the source of truth for duplicates: a unique violation
 * on insert or update becomes `StoreError::Duplicate`.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::store::{ContactStore, GroupStore, StoreError, UserStore};
use crate::shared::{Contact, ContactRequest, Group, NewUser, User};

const USER_COLUMNS: &str =
    "id, username, email, password_hash, image_url, is_admin, is_super_admin, created_at, updated_at";

const CONTACT_COLUMNS: &str =
    "id, user_id, name, image_url, email, mobile, company, title, group_id, created_at, updated_at";

const GROUP_COLUMNS: &str = "id, name, created_at, updated_at";

/// Store backed by a Postgres connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap a migrated connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a write error, turning unique violations into `Duplicate { field }`
fn map_write_error(err: sqlx::Error, field: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::duplicate(field);
        }
    }
    StoreError::backend(err.to_string())
}

fn map_read_error(err: sqlx::Error) -> StoreError {
    StoreError::backend(err.to_string())
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, username, email, password_hash, image_url, is_admin, is_super_admin, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, FALSE, FALSE, $6, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.image_url)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "email"))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)
    }
}

#[async_trait]
impl ContactStore for PgStore {
    async fn find_contact_by_mobile(&self, mobile: &str) -> Result<Option<Contact>, StoreError> {
        sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE mobile = $1"
        ))
        .bind(mobile)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)
    }

    async fn insert_contact(&self, contact: Contact) -> Result<Contact, StoreError> {
        sqlx::query_as::<_, Contact>(&format!(
            r#"
            INSERT INTO contacts (id, user_id, name, image_url, email, mobile, company, title, group_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(contact.id)
        .bind(contact.user_id)
        .bind(&contact.name)
        .bind(&contact.image_url)
        .bind(&contact.email)
        .bind(&contact.mobile)
        .bind(&contact.company)
        .bind(&contact.title)
        .bind(&contact.group_id)
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "mobile"))
    }

    async fn list_contacts(&self, owner: Uuid) -> Result<Vec<Contact>, StoreError> {
        sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)
    }

    async fn find_contact(&self, id: Uuid, owner: Uuid) -> Result<Option<Contact>, StoreError> {
        sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)
    }

    async fn update_contact(
        &self,
        id: Uuid,
        owner: Uuid,
        fields: ContactRequest,
    ) -> Result<Option<Contact>, StoreError> {
        let now = Utc::now();

        sqlx::query_as::<_, Contact>(&format!(
            r#"
            UPDATE contacts
            SET name = $1, image_url = $2, email = $3, mobile = $4, company = $5, title = $6, group_id = $7, updated_at = $8
            WHERE id = $9 AND user_id = $10
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(&fields.name)
        .bind(&fields.image_url)
        .bind(&fields.email)
        .bind(&fields.mobile)
        .bind(&fields.company)
        .bind(&fields.title)
        .bind(&fields.group_id)
        .bind(now)
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "mobile"))
    }

    async fn delete_contact(&self, id: Uuid, owner: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl GroupStore for PgStore {
    async fn find_group_by_name(&self, name: &str) -> Result<Option<Group>, StoreError> {
        sqlx::query_as::<_, Group>(&format!("SELECT {GROUP_COLUMNS} FROM groups WHERE name = $1"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)
    }

    async fn insert_group(&self, group: Group) -> Result<Group, StoreError> {
        sqlx::query_as::<_, Group>(&format!(
            r#"
            INSERT INTO groups (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {GROUP_COLUMNS}
            "#
        ))
        .bind(group.id)
        .bind(&group.name)
        .bind(group.created_at)
        .bind(group.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "name"))
    }

    async fn list_groups(&self) -> Result<Vec<Group>, StoreError> {
        sqlx::query_as::<_, Group>(&format!(
            "SELECT {GROUP_COLUMNS} FROM groups ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)
    }

    async fn find_group(&self, id: Uuid) -> Result<Option<Group>, StoreError> {
        sqlx::query_as::<_, Group>(&format!("SELECT {GROUP_COLUMNS} FROM groups WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)
    }
}
