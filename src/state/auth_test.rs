use super::*;

fn profile(role: Role) -> Profile {
    Profile {
        id: "u1".to_owned(),
        email: "alice@example.com".to_owned(),
        full_name: "Alice".to_owned(),
        role,
        phone: None,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated);
    assert!(state.profile.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.is_loading);
}

#[test]
fn auth_state_resolving_is_loading_without_profile() {
    let state = AuthState::resolving();
    assert!(state.is_loading);
    assert!(!state.is_authenticated);
    assert_eq!(state.role(), None);
}

#[test]
fn auth_state_role_reads_profile() {
    let state = AuthState {
        is_authenticated: true,
        is_loading: false,
        profile: Some(profile(Role::Organizer)),
    };
    assert_eq!(state.role(), Some(Role::Organizer));
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_accepts_wire_names() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("organizer"), Some(Role::Organizer));
    assert_eq!(Role::parse("volunteer"), Some(Role::Volunteer));
}

#[test]
fn role_parse_rejects_unknown_and_empty() {
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse("owner"), None);
}

#[test]
fn role_as_str_matches_parse() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_home_path_groups_admin_and_organizer() {
    assert_eq!(Role::Admin.home_path(), "/admin/dashboard");
    assert_eq!(Role::Organizer.home_path(), "/admin/dashboard");
    assert_eq!(Role::Volunteer.home_path(), "/dashboard/volunteer");
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Organizer).unwrap(), "\"organizer\"");
}

#[test]
fn profile_deserializes_camel_case_full_name() {
    let json = r#"{"id":"u1","email":"a@b.co","fullName":"Ann","role":"volunteer"}"#;
    let parsed: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.full_name, "Ann");
    assert_eq!(parsed.role, Role::Volunteer);
    assert_eq!(parsed.phone, None);
}
