//! Postgres store tests
//!
//! Exercise `PgStore` against a real database: migrations, the unique
//! constraints, ordering and owner scoping.

use assert_matches::assert_matches;
use uuid::Uuid;

use contacts_api::backend::store::{ContactStore, GroupStore, StoreError, UserStore};
use contacts_api::shared::{Contact, ContactRequest, Group, NewUser, User};

use crate::common::database::{create_test_pool, run_migrations, unique_suffix, TestDatabase};

async fn insert_user(db: &TestDatabase) -> User {
    let email = format!("user_{}@example.com", unique_suffix());
    db.store()
        .insert_user(NewUser::new("tester".into(), email, "hash".into()))
        .await
        .expect("Failed to insert user")
}

fn fields(mobile: &str) -> ContactRequest {
    ContactRequest {
        name: "Carol".into(),
        image_url: "https://example.com/carol.png".into(),
        email: "carol@example.com".into(),
        mobile: mobile.into(),
        company: "Acme".into(),
        title: "Engineer".into(),
        group_id: "friends".into(),
    }
}

#[tokio::test]
#[ignore] // Requires a database
async fn test_migrations_run_successfully() {
    let pool = create_test_pool().await;
    let result = run_migrations(&pool).await;
    assert!(result.is_ok(), "Migrations should run successfully");

    for table in ["users", "contacts", "groups"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {table} LIMIT 1"))
            .execute(&pool)
            .await;
        assert!(result.is_ok(), "{table} table should exist");
    }
}

#[tokio::test]
#[ignore] // Requires a database
async fn test_user_roundtrip_and_duplicate_email() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let user = insert_user(&db).await;

    assert!(!user.is_admin);
    assert!(!user.is_super_admin);
    assert_eq!(store.find_user_by_id(user.id).await.unwrap(), Some(user.clone()));
    assert_eq!(store.find_user_by_email(&user.email).await.unwrap(), Some(user.clone()));

    let result = store
        .insert_user(NewUser::new("other".into(), user.email.clone(), "hash".into()))
        .await;
    assert_matches!(result, Err(StoreError::Duplicate { field }) if field == "email");
}

#[tokio::test]
#[ignore] // Requires a database
async fn test_contact_mobile_unique_and_scoped() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let alice = insert_user(&db).await;
    let bobby = insert_user(&db).await;
    let mobile = format!("555{}", unique_suffix());

    let contact = store
        .insert_contact(Contact::new(alice.id, fields(&mobile)))
        .await
        .unwrap();
    assert_eq!(store.find_contact_by_mobile(&mobile).await.unwrap(), Some(contact.clone()));

    let result = store.insert_contact(Contact::new(bobby.id, fields(&mobile))).await;
    assert_matches!(result, Err(StoreError::Duplicate { field }) if field == "mobile");

    assert!(store.find_contact(contact.id, bobby.id).await.unwrap().is_none());
    assert!(store.update_contact(contact.id, bobby.id, fields("000")).await.unwrap().is_none());
    assert!(!store.delete_contact(contact.id, bobby.id).await.unwrap());
    assert!(store.delete_contact(contact.id, alice.id).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires a database
async fn test_contacts_listed_newest_first() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let owner = insert_user(&db).await;

    let first = store
        .insert_contact(Contact::new(owner.id, fields(&format!("556{}", unique_suffix()))))
        .await
        .unwrap();
    let second = store
        .insert_contact(Contact::new(owner.id, fields(&format!("557{}", unique_suffix()))))
        .await
        .unwrap();

    let ids: Vec<Uuid> = store
        .list_contacts(owner.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
#[ignore] // Requires a database
async fn test_update_contact_replaces_fields() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let owner = insert_user(&db).await;
    let contact = store
        .insert_contact(Contact::new(owner.id, fields(&format!("558{}", unique_suffix()))))
        .await
        .unwrap();

    let mut replacement = fields(&format!("559{}", unique_suffix()));
    replacement.name = "Caroline".into();
    let updated = store
        .update_contact(contact.id, owner.id, replacement)
        .await
        .unwrap()
        .expect("owner should be able to update");

    assert_eq!(updated.name, "Caroline");
    assert_eq!(updated.created_at, contact.created_at);
    assert!(updated.updated_at >= contact.updated_at);
}

#[tokio::test]
#[ignore] // Requires a database
async fn test_group_name_unique() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let name = format!("group-{}", unique_suffix());

    let group = store.insert_group(Group::new(name.clone())).await.unwrap();
    assert_eq!(store.find_group(group.id).await.unwrap(), Some(group.clone()));
    assert_eq!(store.find_group_by_name(&name).await.unwrap(), Some(group.clone()));
    assert!(store.list_groups().await.unwrap().contains(&group));

    let result = store.insert_group(Group::new(name)).await;
    assert_matches!(result, Err(StoreError::Duplicate { field }) if field == "name");
}
