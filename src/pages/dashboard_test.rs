use super::*;
use crate::state::auth::Profile;

#[test]
fn greeting_prefers_full_name_then_email() {
    let mut state = AuthState {
        is_authenticated: true,
        is_loading: false,
        profile: Some(Profile {
            id: "u1".to_owned(),
            email: "alice@example.com".to_owned(),
            full_name: "Alice".to_owned(),
            role: Role::Volunteer,
            phone: None,
        }),
    };
    assert_eq!(greeting(&state), "Welcome, Alice");
    if let Some(profile) = state.profile.as_mut() {
        profile.full_name.clear();
    }
    assert_eq!(greeting(&state), "Welcome, alice@example.com");
    assert_eq!(greeting(&AuthState::default()), "Welcome");
}
