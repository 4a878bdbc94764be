use super::*;

fn session_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Pat".to_owned(),
        auth_method: "access-code".to_owned(),
    }
}

#[test]
fn default_is_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn resolve_with_user_authenticates() {
    let mut state = AuthState::default();
    state.resolve(Some(session_user()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn resolve_without_user_settles_unauthenticated() {
    let mut state = AuthState::default();
    state.resolve(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn clear_drops_session() {
    let mut state = AuthState::default();
    state.resolve(Some(session_user()));
    state.clear();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}
