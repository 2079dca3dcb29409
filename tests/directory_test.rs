#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the content type directory and facade.

mod common;

use common::{TestCatalog, submission};
use typecatalog::AppError;
use typecatalog::models::PropertyTypeDescriptor;

#[tokio::test]
async fn get_by_id_missing_is_not_found() {
    let catalog = TestCatalog::new();
    let facade = catalog.facade();

    let err = facade.get_by_id(999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn empty_template_has_no_id_and_touches_no_store() {
    let catalog = TestCatalog::new();
    let facade = catalog.facade();

    let template = facade.get_empty();
    assert_eq!(template.id, None);
    assert!(template.alias.is_empty());
    assert!(catalog.types.is_empty());

    // Idempotent: same template every time, still no store writes.
    assert_eq!(facade.get_empty(), template);
    assert!(catalog.types.is_empty());
}

#[tokio::test]
async fn create_derives_alias_and_assigns_id() {
    let catalog = TestCatalog::new();
    let facade = catalog.facade();

    let saved = facade.save(submission("Foo")).await.unwrap();

    assert_eq!(saved.alias, "foo");
    assert!(saved.id.unwrap() > 0);

    // The persisted definition is readable back with the same fields.
    let fetched = facade.get_by_id(saved.id.unwrap()).await.unwrap();
    assert_eq!(fetched.alias, "foo");
    assert_eq!(fetched.name, "Foo");
}

#[tokio::test]
async fn create_keeps_explicit_alias() {
    let catalog = TestCatalog::new();
    let facade = catalog.facade();

    let mut input = submission("Landing Page");
    input.alias = "landing".to_string();

    let saved = facade.save(input).await.unwrap();
    assert_eq!(saved.alias, "landing");
}

#[tokio::test]
async fn create_ignores_non_positive_id_hint() {
    let catalog = TestCatalog::new();
    let facade = catalog.facade();

    let mut input = submission("Hinted");
    input.id = Some(-1);

    let saved = facade.save(input).await.unwrap();
    assert!(saved.id.unwrap() > 0);
}

#[tokio::test]
async fn update_changes_only_submitted_fields() {
    let catalog = TestCatalog::new();
    let facade = catalog.facade();

    let id = catalog.seed_type(submission("Page")).await;

    let mut update = facade.get_by_id(id).await.unwrap();
    update.description = Some("A plain page".to_string());

    let saved = facade.save(update).await.unwrap();
    assert_eq!(saved.id, Some(id));
    assert_eq!(saved.alias, "page");
    assert_eq!(saved.description.as_deref(), Some("A plain page"));

    let fetched = facade.get_by_id(id).await.unwrap();
    assert_eq!(fetched.alias, "page");
    assert_eq!(fetched.description.as_deref(), Some("A plain page"));
}

#[tokio::test]
async fn update_missing_id_is_not_found_and_changes_nothing() {
    let catalog = TestCatalog::new();
    let facade = catalog.facade();

    let mut input = submission("Ghost");
    input.id = Some(42);

    let err = facade.save(input).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert!(catalog.types.is_empty());
}

#[tokio::test]
async fn list_all_translates_display_fields() {
    let catalog = TestCatalog::new().with_dictionary_entry("newsType", "News Article");
    let facade = catalog.facade();

    let mut symbolic = submission("#newsType");
    symbolic.description = Some("#missingKey".to_string());
    catalog.seed_type(symbolic).await;
    catalog.seed_type(submission("Plain")).await;

    let all = facade.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "News Article");
    assert_eq!(all[0].description.as_deref(), Some("missingKey"));
    assert_eq!(all[1].name, "Plain");
}

#[tokio::test]
async fn all_property_aliases_deduplicates() {
    let catalog = TestCatalog::new();
    let facade = catalog.facade();

    let body = PropertyTypeDescriptor {
        alias: "body".to_string(),
        data_type_id: 1,
        editor_alias: "textarea".to_string(),
    };
    let summary = PropertyTypeDescriptor {
        alias: "summary".to_string(),
        data_type_id: 1,
        editor_alias: "textarea".to_string(),
    };

    let mut first = submission("First");
    first.properties = vec![body.clone(), summary.clone()];
    let mut second = submission("Second");
    second.properties = vec![body.clone()];

    catalog.seed_type(first).await;
    catalog.seed_type(second).await;

    let aliases = facade.all_property_aliases().await.unwrap();
    assert_eq!(aliases, ["body", "summary"]);
}
