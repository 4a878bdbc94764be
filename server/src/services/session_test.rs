use super::*;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

fn empty_store() -> SessionStore {
    Arc::new(RwLock::new(HashMap::new()))
}

fn test_user() -> SessionUser {
    SessionUser {
        id: Uuid::new_v4(),
        name: "Pat".to_owned(),
        auth_method: "access-code".to_owned(),
    }
}

// =============================================================================
// bytes_to_hex / generate_token
// =============================================================================

#[test]
fn bytes_to_hex_formats_with_leading_zeros() {
    assert_eq!(bytes_to_hex(&[]), "");
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_is_unique_enough() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[tokio::test]
async fn create_then_validate_round_trips_user() {
    let store = empty_store();
    let user = test_user();

    let token = create_session(&store, user.clone()).await;
    let found = validate_session(&store, &token).await;

    assert_eq!(found, Some(user));
}

#[tokio::test]
async fn validate_unknown_token_is_none() {
    let store = empty_store();
    assert_eq!(validate_session(&store, "nope").await, None);
}

#[tokio::test]
async fn remove_session_invalidates_token() {
    let store = empty_store();
    let token = create_session(&store, test_user()).await;

    remove_session(&store, &token).await;
    assert_eq!(validate_session(&store, &token).await, None);
}

#[tokio::test]
async fn remove_unknown_token_is_a_noop() {
    let store = empty_store();
    let token = create_session(&store, test_user()).await;

    remove_session(&store, "other").await;
    assert!(validate_session(&store, &token).await.is_some());
}
