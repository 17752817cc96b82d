use super::*;

fn ctx(password: &str) -> ValidationContext<'_> {
    ValidationContext { password, accept_terms: false }
}

// =============================================================
// Password strength
// =============================================================

#[test]
fn password_strength_examples() {
    assert_eq!(password_strength(""), 0);
    assert_eq!(password_strength("aaaaaaaa"), 20);
    assert_eq!(password_strength("Ab1!"), 80);
    assert_eq!(password_strength("Abcdef1!"), 100);
}

#[test]
fn password_strength_counts_characters_not_bytes() {
    // Seven characters but more than eight bytes.
    assert_eq!(password_strength("ééééééé"), 20);
}

#[test]
fn password_strength_is_pure() {
    assert_eq!(password_strength("Secret12"), password_strength("Secret12"));
}

#[test]
fn strength_band_thresholds() {
    assert_eq!(StrengthBand::from_score(0), StrengthBand::Weak);
    assert_eq!(StrengthBand::from_score(20), StrengthBand::Weak);
    assert_eq!(StrengthBand::from_score(40), StrengthBand::Medium);
    assert_eq!(StrengthBand::from_score(60), StrengthBand::Medium);
    assert_eq!(StrengthBand::from_score(80), StrengthBand::Strong);
    assert_eq!(StrengthBand::from_score(100), StrengthBand::Strong);
    assert_eq!(StrengthBand::Medium.label(), "Medium");
}

// =============================================================
// Shape checks
// =============================================================

#[test]
fn is_email_accepts_basic_shape() {
    assert!(is_email("user@example.com"));
    assert!(is_email("a.b+c@mail.example.org"));
}

#[test]
fn is_email_rejects_malformed() {
    for bad in ["", "user", "user@", "@example.com", "user@example", "user@.com", "user@example.", "a b@c.d", "a@b@c.d"] {
        assert!(!is_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn is_phone_accepts_common_formats() {
    assert!(is_phone("+1 (555) 010-9999"));
    assert!(is_phone("0123456789"));
}

#[test]
fn is_phone_rejects_letters_and_bare_plus() {
    assert!(!is_phone("+"));
    assert!(!is_phone("555-CALL"));
    assert!(!is_phone("1+2"));
}

// =============================================================
// validate
// =============================================================

#[test]
fn email_messages() {
    let c = ctx("");
    assert_eq!(validate(Field::Email, "", AuthMode::Login, &c).as_deref(), Some("Email address is required"));
    assert_eq!(
        validate(Field::Email, "nope", AuthMode::Login, &c).as_deref(),
        Some("Please enter a valid email address")
    );
    assert_eq!(validate(Field::Email, "a@b.co", AuthMode::Register, &c), None);
}

#[test]
fn short_passwords_fail_in_both_modes() {
    for mode in [AuthMode::Login, AuthMode::Register] {
        for password in ["a", "Ab1!", "Abc12!x"] {
            assert_eq!(
                validate(Field::Password, password, mode, &ctx(password)).as_deref(),
                Some("Password must be at least 8 characters")
            );
        }
    }
}

#[test]
fn weak_password_allowed_for_login_only() {
    let password = "aaaaaaaa";
    assert_eq!(validate(Field::Password, password, AuthMode::Login, &ctx(password)), None);
    assert_eq!(
        validate(Field::Password, password, AuthMode::Register, &ctx(password)).as_deref(),
        Some("Password must be stronger")
    );
}

#[test]
fn register_password_at_strength_threshold_passes() {
    // Length, lowercase, digit: 60 points.
    let password = "abcdefg1";
    assert_eq!(password_strength(password), 60);
    assert_eq!(validate(Field::Password, password, AuthMode::Register, &ctx(password)), None);
}

#[test]
fn confirm_password_checked_only_in_register_mode() {
    let c = ctx("Secret123!");
    assert_eq!(validate(Field::ConfirmPassword, "", AuthMode::Login, &c), None);
    assert_eq!(
        validate(Field::ConfirmPassword, "", AuthMode::Register, &c).as_deref(),
        Some("Please confirm your password")
    );
    assert_eq!(
        validate(Field::ConfirmPassword, "Secret123", AuthMode::Register, &c).as_deref(),
        Some("Passwords do not match")
    );
    assert_eq!(validate(Field::ConfirmPassword, "Secret123!", AuthMode::Register, &c), None);
}

#[test]
fn confirm_password_skips_mismatch_while_password_empty() {
    let c = ctx("");
    assert_eq!(validate(Field::ConfirmPassword, "Secret123!", AuthMode::Register, &c), None);
    assert_eq!(
        validate(Field::ConfirmPassword, "", AuthMode::Register, &c).as_deref(),
        Some("Please confirm your password")
    );
}

#[test]
fn full_name_checked_only_in_register_mode() {
    let c = ctx("");
    assert_eq!(validate(Field::FullName, "", AuthMode::Login, &c), None);
    assert_eq!(validate(Field::FullName, "", AuthMode::Register, &c).as_deref(), Some("Full name is required"));
    assert_eq!(
        validate(Field::FullName, "A", AuthMode::Register, &c).as_deref(),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(validate(Field::FullName, "Al", AuthMode::Register, &c), None);
}

#[test]
fn role_required_in_both_modes() {
    let c = ctx("");
    for mode in [AuthMode::Login, AuthMode::Register] {
        assert_eq!(validate(Field::Role, "", mode, &c).as_deref(), Some("Please select your role"));
        assert_eq!(validate(Field::Role, "organizer", mode, &c), None);
    }
}

#[test]
fn phone_optional_but_checked_when_present() {
    let c = ctx("");
    assert_eq!(validate(Field::Phone, "", AuthMode::Register, &c), None);
    assert_eq!(
        validate(Field::Phone, "call me", AuthMode::Register, &c).as_deref(),
        Some("Please enter a valid phone number")
    );
    assert_eq!(validate(Field::Phone, "+44 20 7946 0000", AuthMode::Register, &c), None);
}

#[test]
fn accept_terms_checked_only_in_register_mode() {
    let unchecked = ValidationContext { password: "", accept_terms: false };
    let checked = ValidationContext { password: "", accept_terms: true };
    assert_eq!(validate(Field::AcceptTerms, "", AuthMode::Login, &unchecked), None);
    assert_eq!(
        validate(Field::AcceptTerms, "", AuthMode::Register, &unchecked).as_deref(),
        Some("You must accept the terms and conditions")
    );
    assert_eq!(validate(Field::AcceptTerms, "", AuthMode::Register, &checked), None);
}
