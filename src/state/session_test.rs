use super::*;
use crate::state::auth::Role;

fn user() -> SessionUser {
    SessionUser { id: "u1".to_owned(), email: "alice@example.com".to_owned() }
}

fn profile() -> Profile {
    Profile {
        id: "u1".to_owned(),
        email: "alice@example.com".to_owned(),
        full_name: "Alice".to_owned(),
        role: Role::Admin,
        phone: None,
    }
}

#[test]
fn user_lookup_without_user_is_signed_out_and_settled() {
    let state = after_user_lookup(None);
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
}

#[test]
fn user_lookup_with_user_is_authenticated_pending_profile() {
    let state = after_user_lookup(Some(&user()));
    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.profile.is_none());
}

#[test]
fn profile_lookup_attaches_profile() {
    let state = after_profile_lookup(after_user_lookup(Some(&user())), Ok(profile()));
    assert_eq!(state.role(), Some(Role::Admin));
}

#[test]
fn profile_lookup_failure_keeps_profile_unset() {
    let state = after_profile_lookup(after_user_lookup(Some(&user())), Err(AuthError::Status(404)));
    assert!(state.is_authenticated);
    assert!(state.profile.is_none());
}

#[test]
fn profile_ignored_for_signed_out_session() {
    let state = after_profile_lookup(after_user_lookup(None), Ok(profile()));
    assert!(state.profile.is_none());
}
