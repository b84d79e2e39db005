/// Integration tests for the JSON file record store
///
/// Each test works in its own temporary data directory.

use coursehub_shared::models::course::{Course, CreateCourse, TeacherSnapshot};
use coursehub_shared::models::user::{CreateUser, Role, User};
use coursehub_shared::store::{json_file::JsonFileStore, RecordKind, RecordStore, StoreError};
use serde_json::json;
use tempfile::TempDir;

/// Store with both collection files provisioned
async fn provisioned_store() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.init(RecordKind::Users).await.unwrap();
    store.init(RecordKind::Courses).await.unwrap();
    (dir, store)
}

fn teacher() -> TeacherSnapshot {
    TeacherSnapshot {
        id: "t1".to_string(),
        email: "grace@example.com".to_string(),
        name: "Grace".to_string(),
        role: Role::Teacher,
    }
}

#[tokio::test]
async fn test_load_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    let result = store.load(RecordKind::Users).await;
    assert!(matches!(result, Err(StoreError::NotFound { kind: RecordKind::Users, .. })));
    assert!(!store.exists(RecordKind::Users).await);
}

#[tokio::test]
async fn test_append_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    let result = store.append(RecordKind::Courses, json!({ "id": "c1" })).await;
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
    assert!(!store.path(RecordKind::Courses).exists());
}

#[tokio::test]
async fn test_empty_and_corrupt_files_load_as_empty() {
    let (_dir, store) = provisioned_store().await;

    std::fs::write(store.path(RecordKind::Users), "").unwrap();
    assert!(store.load(RecordKind::Users).await.unwrap().is_empty());

    std::fs::write(store.path(RecordKind::Users), "{ not json").unwrap();
    assert!(store.load(RecordKind::Users).await.unwrap().is_empty());

    std::fs::write(store.path(RecordKind::Users), r#"{"id": "not-an-array"}"#).unwrap();
    assert!(store.load(RecordKind::Users).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_append_over_corrupt_file_starts_fresh() {
    let (_dir, store) = provisioned_store().await;
    std::fs::write(store.path(RecordKind::Courses), "garbage").unwrap();

    store.append(RecordKind::Courses, json!({ "id": "c1" })).await.unwrap();

    let records = store.load(RecordKind::Courses).await.unwrap();
    assert_eq!(records, vec![json!({ "id": "c1" })]);
}

#[tokio::test]
async fn test_append_preserves_order_and_pretty_prints() {
    let (_dir, store) = provisioned_store().await;

    store.append(RecordKind::Courses, json!({ "id": "a" })).await.unwrap();
    store.append(RecordKind::Courses, json!({ "id": "b" })).await.unwrap();

    let records = store.load(RecordKind::Courses).await.unwrap();
    assert_eq!(records, vec![json!({ "id": "a" }), json!({ "id": "b" })]);

    let text = std::fs::read_to_string(store.path(RecordKind::Courses)).unwrap();
    assert!(text.starts_with("[\n    {\n        \"id\": \"a\""));
}

#[tokio::test]
async fn test_replace_by_id_first_match_only() {
    let (_dir, store) = provisioned_store().await;
    store.append(RecordKind::Users, json!({ "id": "u1", "v": 1 })).await.unwrap();
    store.append(RecordKind::Users, json!({ "id": "u1", "v": 2 })).await.unwrap();

    let matched = store
        .replace_by_id(RecordKind::Users, "u1", json!({ "id": "u1", "v": 3 }))
        .await
        .unwrap();
    assert!(matched);

    let records = store.load(RecordKind::Users).await.unwrap();
    assert_eq!(records[0]["v"], 3);
    assert_eq!(records[1]["v"], 2);
}

#[tokio::test]
async fn test_replace_by_id_miss_is_noop() {
    let (_dir, store) = provisioned_store().await;
    store.append(RecordKind::Users, json!({ "id": "u1" })).await.unwrap();

    let matched = store
        .replace_by_id(RecordKind::Users, "ghost", json!({ "id": "ghost" }))
        .await
        .unwrap();
    assert!(!matched);

    let records = store.load(RecordKind::Users).await.unwrap();
    assert_eq!(records, vec![json!({ "id": "u1" })]);
}

#[tokio::test]
async fn test_init_keeps_existing_file() {
    let (_dir, store) = provisioned_store().await;
    store.append(RecordKind::Users, json!({ "id": "u1" })).await.unwrap();

    store.init(RecordKind::Users).await.unwrap();

    assert_eq!(store.load(RecordKind::Users).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_course_then_list() {
    let (_dir, store) = provisioned_store().await;

    let created = Course::create(
        &store,
        CreateCourse {
            title: "Compilers".to_string(),
            description: "Front to back".to_string(),
            credit_hours: 3,
            teacher: teacher(),
        },
    )
    .await
    .unwrap();

    let second = Course::create(
        &store,
        CreateCourse {
            title: "Databases".to_string(),
            description: "Rows and columns".to_string(),
            credit_hours: 4,
            teacher: teacher(),
        },
    )
    .await
    .unwrap();

    let courses = Course::list(&store).await.unwrap();
    assert_eq!(courses, vec![created.clone(), second.clone()]);

    assert!(!created.id.is_empty());
    assert_ne!(created.id, second.id);
    assert_eq!(created.title, "Compilers");
    assert_eq!(created.teacher, teacher());

    let found = Course::find_by_id(&store, &second.id).await.unwrap();
    assert_eq!(found, Some(second));
}

#[tokio::test]
async fn test_user_create_find_and_replace() {
    let (_dir, store) = provisioned_store().await;

    let user = User::create(
        &store,
        CreateUser {
            email: "Ada@example.com".to_string(),
            name: "Ada".to_string(),
            role: Role::Student,
            hashed_pwd: "hash".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(user.enrolled_courses.is_empty());
    assert!(User::find_by_email(&store, "Ada@example.com").await.unwrap().is_some());
    assert!(User::find_by_email(&store, "ada@example.com").await.unwrap().is_none());

    let mut renamed = user.clone();
    renamed.name = "Ada Lovelace".to_string();
    assert!(User::replace(&store, &renamed).await.unwrap());

    let stored = User::find_by_id(&store, &user.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Ada Lovelace");
    assert_eq!(User::list(&store).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_skips_malformed_records() {
    let (_dir, store) = provisioned_store().await;
    store.append(RecordKind::Users, json!({ "id": "broken" })).await.unwrap();
    User::create(
        &store,
        CreateUser {
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            role: Role::Student,
            hashed_pwd: "hash".to_string(),
        },
    )
    .await
    .unwrap();

    let users = User::list(&store).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "ada@example.com");
}

#[tokio::test]
async fn test_course_snapshot_is_not_refreshed() {
    let (_dir, store) = provisioned_store().await;

    let teacher_user = User::create(
        &store,
        CreateUser {
            email: "grace@example.com".to_string(),
            name: "Grace".to_string(),
            role: Role::Teacher,
            hashed_pwd: "hash".to_string(),
        },
    )
    .await
    .unwrap();

    let course = Course::create(
        &store,
        CreateCourse {
            title: "Compilers".to_string(),
            description: "Front to back".to_string(),
            credit_hours: 3,
            teacher: TeacherSnapshot::from(&teacher_user),
        },
    )
    .await
    .unwrap();

    let mut renamed = teacher_user.clone();
    renamed.name = "Grace Hopper".to_string();
    User::replace(&store, &renamed).await.unwrap();

    let stored = Course::find_by_id(&store, &course.id).await.unwrap().unwrap();
    assert_eq!(stored.teacher.name, "Grace");
}

#[tokio::test]
async fn test_email_taken_counts_undecodable_records() {
    let (_dir, store) = provisioned_store().await;
    store
        .append(
            RecordKind::Users,
            json!({
                "id": "legacy",
                "email": "ada@example.com",
                "role": "Student",
                "name": "Ada",
                "hashed_pwd": "x",
                "enrolled_courses": null
            }),
        )
        .await
        .unwrap();

    assert!(User::list(&store).await.unwrap().is_empty());
    assert!(User::email_taken(&store, "ada@example.com").await.unwrap());
    assert!(!User::email_taken(&store, "Ada@example.com").await.unwrap());
    assert!(!User::email_taken(&store, "grace@example.com").await.unwrap());
}
