//! Account store tests against an in-memory SQLite database.

use tokio_test::{assert_err, assert_ok};

use acolher_api::config::Config;
use acolher_api::domain::NewAccount;
use acolher_api::errors::AppError;
use acolher_api::infra::{AccountRepository, AccountStore, Database};

async fn setup() -> AccountStore {
    let db = Database::connect(&Config::with_database_url("sqlite::memory:"))
        .await
        .expect("in-memory database");
    AccountStore::new(db.get_connection())
}

fn new_account(cpf: &str, email: &str) -> NewAccount {
    NewAccount {
        cpf: cpf.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_defaults_active() {
    let store = setup().await;

    let first = assert_ok!(store.create(new_account("1", "a@b.com")).await);
    let second = assert_ok!(store.create(new_account("2", "c@d.com")).await);

    assert!(first.active);
    assert_ne!(first.id, second.id);

    let found = assert_ok!(store.find_by_id(first.id).await).expect("stored account");
    assert_eq!(found.cpf, "1");
    assert_eq!(found.email, "a@b.com");
}

#[tokio::test]
async fn test_unique_cpf_enforced_by_store() {
    let store = setup().await;
    assert_ok!(store.create(new_account("1", "a@b.com")).await);

    let err = assert_err!(store.create(new_account("1", "other@b.com")).await);

    match err {
        AppError::Conflict(field) => assert_eq!(field, "CPF"),
        other => panic!("expected CPF conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unique_email_enforced_by_store() {
    let store = setup().await;
    assert_ok!(store.create(new_account("1", "a@b.com")).await);

    let err = assert_err!(store.create(new_account("2", "a@b.com")).await);

    match err {
        AppError::Conflict(field) => assert_eq!(field, "Email"),
        other => panic!("expected email conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lookup_by_cpf_and_email() {
    let store = setup().await;
    let created = assert_ok!(store.create(new_account("123", "x@y.com")).await);

    let by_cpf = assert_ok!(store.find_by_cpf("123").await).expect("found by cpf");
    let by_email = assert_ok!(store.find_by_email("x@y.com").await).expect("found by email");

    assert_eq!(by_cpf.id, created.id);
    assert_eq!(by_email.id, created.id);
    assert!(assert_ok!(store.find_by_cpf("999").await).is_none());
    assert!(assert_ok!(store.find_by_email("nobody@y.com").await).is_none());
}

#[tokio::test]
async fn test_update_overwrites_fields() {
    let store = setup().await;
    let mut account = assert_ok!(store.create(new_account("1", "a@b.com")).await);

    account.cpf = "11".to_string();
    account.email = "new@b.com".to_string();
    account.password_hash = "other-hash".to_string();
    account.active = false;
    let updated = assert_ok!(store.update(account.clone()).await);

    assert_eq!(updated.id, account.id);
    assert_eq!(updated.cpf, "11");
    assert_eq!(updated.email, "new@b.com");
    assert_eq!(updated.password_hash, "other-hash");
    assert!(!updated.active);
}

#[tokio::test]
async fn test_update_missing_account_not_found() {
    let store = setup().await;
    let mut account = assert_ok!(store.create(new_account("1", "a@b.com")).await);
    account.id += 100;

    let err = assert_err!(store.update(account).await);

    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_update_to_taken_email_conflicts() {
    let store = setup().await;
    assert_ok!(store.create(new_account("1", "a@b.com")).await);
    let mut second = assert_ok!(store.create(new_account("2", "c@d.com")).await);

    second.email = "a@b.com".to_string();
    let err = assert_err!(store.update(second).await);

    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_hard_delete() {
    let store = setup().await;
    let account = assert_ok!(store.create(new_account("1", "a@b.com")).await);

    assert_ok!(store.hard_delete(account.id).await);

    assert!(assert_ok!(store.find_by_id(account.id).await).is_none());
    assert!(assert_ok!(store.list().await).is_empty());
    assert!(matches!(
        store.hard_delete(account.id).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_list_includes_inactive_accounts() {
    let store = setup().await;
    let mut first = assert_ok!(store.create(new_account("1", "a@b.com")).await);
    assert_ok!(store.create(new_account("2", "c@d.com")).await);

    first.active = false;
    assert_ok!(store.update(first).await);

    let accounts = assert_ok!(store.list().await);
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts.iter().filter(|a| !a.active).count(), 1);
}
