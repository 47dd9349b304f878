//! Integration tests for customer CRUD:
//! - Create and list, sorted by name
//! - Input validation
//! - Uniqueness conflicts on id and name
//! - Explicit delete

use assert_matches::assert_matches;

use scriptdepot_core::error::CoreError;
use scriptdepot_db::models::customer::CreateCustomer;
use scriptdepot_db::repositories::CustomerRepo;

mod common;

fn new_customer(id: &str, name: &str) -> CreateCustomer {
    CreateCustomer {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[tokio::test]
async fn create_then_list_returns_exactly_that_customer() {
    let pool = common::test_pool().await;

    let created = CustomerRepo::create(&pool, &new_customer("1", "Acme"))
        .await
        .unwrap();
    assert_eq!(created.id, "1");
    assert_eq!(created.name, "Acme");

    let all = CustomerRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "1");
    assert_eq!(all[0].name, "Acme");
}

#[tokio::test]
async fn list_is_sorted_by_name() {
    let pool = common::test_pool().await;

    CustomerRepo::create(&pool, &new_customer("1", "Zephyr"))
        .await
        .unwrap();
    CustomerRepo::create(&pool, &new_customer("2", "Acme"))
        .await
        .unwrap();
    CustomerRepo::create(&pool, &new_customer("3", "Midway"))
        .await
        .unwrap();

    let names: Vec<String> = CustomerRepo::list_all(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Acme", "Midway", "Zephyr"]);
}

#[tokio::test]
async fn create_rejects_empty_id_and_name() {
    let pool = common::test_pool().await;

    let err = CustomerRepo::create(&pool, &new_customer("", "Acme"))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));

    let err = CustomerRepo::create(&pool, &new_customer("1", ""))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));

    assert!(CustomerRepo::list_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_id_is_a_conflict() {
    let pool = common::test_pool().await;

    CustomerRepo::create(&pool, &new_customer("1", "Acme"))
        .await
        .unwrap();
    let err = CustomerRepo::create(&pool, &new_customer("1", "Other"))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));
}

#[tokio::test]
async fn duplicate_name_is_a_conflict() {
    let pool = common::test_pool().await;

    CustomerRepo::create(&pool, &new_customer("1", "Acme"))
        .await
        .unwrap();
    let err = CustomerRepo::create(&pool, &new_customer("2", "Acme"))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));
}

#[tokio::test]
async fn find_by_id_returns_none_for_missing_customer() {
    let pool = common::test_pool().await;

    assert!(CustomerRepo::find_by_id(&pool, "missing")
        .await
        .unwrap()
        .is_none());

    CustomerRepo::create(&pool, &new_customer("1", "Acme"))
        .await
        .unwrap();
    let found = CustomerRepo::find_by_id(&pool, "1").await.unwrap().unwrap();
    assert_eq!(found.name, "Acme");
}

#[tokio::test]
async fn delete_removes_the_customer() {
    let pool = common::test_pool().await;

    CustomerRepo::create(&pool, &new_customer("1", "Acme"))
        .await
        .unwrap();
    CustomerRepo::delete(&pool, "1").await.unwrap();

    assert!(CustomerRepo::find_by_id(&pool, "1").await.unwrap().is_none());

    let err = CustomerRepo::delete(&pool, "1").await.unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "customer", .. });
}
