use super::*;

#[test]
fn input_class_marks_errors() {
    assert_eq!(input_class(false), "auth-input");
    assert_eq!(input_class(true), "auth-input auth-input--error");
}

#[test]
fn banner_class_follows_kind() {
    assert!(banner_class(BannerKind::Success).ends_with("--success"));
    assert!(banner_class(BannerKind::Error).ends_with("--error"));
}

#[test]
fn strength_style_uses_score_as_width() {
    assert_eq!(strength_style(60), "width: 60%");
}

#[test]
fn heading_differs_by_mode() {
    assert_eq!(heading(AuthMode::Login).0, "Welcome Back");
    assert_eq!(heading(AuthMode::Register).1, "Create your account to get started");
}

#[test]
fn submit_label_reflects_progress() {
    assert_eq!(submit_label(AuthMode::Login, false), "Sign In");
    assert_eq!(submit_label(AuthMode::Login, true), "Signing In...");
    assert_eq!(submit_label(AuthMode::Register, true), "Creating Account...");
}
