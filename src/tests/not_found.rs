use axum::http::StatusCode;

use crate::tests::helper;

#[tokio::test]
async fn test_well_formed_unknown_id_is_not_found() {
    let mut app = helper::setup_test_app();

    // valid UUID, no such note
    let (status_code, note, message) =
        helper::single_note(&mut app, "00000000-0000-0000-0000-000000000000").await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert!(note.is_none());
    assert_eq!(Some("Notes not found!".to_string()), message);
}

#[tokio::test]
async fn test_malformed_id_is_a_store_error() {
    let mut app = helper::setup_test_app();

    // not a UUID at all; the store rejects it and the cause stays hidden
    let (status_code, note, message) = helper::single_note(&mut app, "some-id").await;
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status_code);
    assert!(note.is_none());
    assert_eq!(Some("Internal server error".to_string()), message);

    let (status_code, message) = helper::maybe_delete_note(&mut app, "some-id").await;
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status_code);
    assert_eq!(Some("Internal server error".to_string()), message);
}
