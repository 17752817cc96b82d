use super::*;

#[test]
fn default_config_is_same_origin() {
    assert_eq!(ClientConfig::default().endpoint("/api/auth/me"), "/api/auth/me");
}

#[test]
fn with_api_base_strips_trailing_slash() {
    let config = ClientConfig::with_api_base("https://auth.example.com/ ");
    assert_eq!(config.api_base, "https://auth.example.com");
    assert_eq!(config.endpoint("/api/auth/login"), "https://auth.example.com/api/auth/login");
}
