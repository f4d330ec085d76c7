use axum::http::StatusCode;

use crate::tests::helper;

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let mut app = helper::setup_test_app();

    let (status_code, message) = helper::maybe_create_note(&mut app, Some("title"), None).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(Some("Title and content are required".to_string()), message);

    let (status_code, _) = helper::maybe_create_note(&mut app, None, Some("content")).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);

    let (status_code, _) = helper::maybe_create_note(&mut app, None, None).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);

    // nothing was persisted
    let (_, notes) = helper::list_notes(&mut app).await;
    assert_eq!(Some(Vec::new()), notes);
}

#[tokio::test]
async fn test_empty_fields_are_rejected() {
    let mut app = helper::setup_test_app();

    let (status_code, message) = helper::maybe_create_note(&mut app, Some(""), Some("")).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(Some("Title and content are required".to_string()), message);

    // updates go through the same boundary
    let (status_code, _) = helper::maybe_create_note(&mut app, Some("title"), Some("content")).await;
    assert_eq!(StatusCode::CREATED, status_code);

    let (_, notes) = helper::list_notes(&mut app).await;
    let id = notes.unwrap()[0].id.clone();

    let (status_code, message) = helper::maybe_update_note(&mut app, &id, Some(""), Some("c")).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(Some("Title and content are required".to_string()), message);
}

#[tokio::test]
async fn test_invalid_json_is_a_bad_request() {
    let mut app = helper::setup_test_app();

    let status_code = helper::create_note_with_raw_body(&mut app, "{not json").await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
}
