//! Tests for the auth module

use super::*;

fn applied(config: AuthConfig) -> reqwest::Request {
    let auth = Authenticator::new(config);
    let client = reqwest::Client::new();
    auth.apply(client.get("https://example.com/v1/account"))
        .build()
        .unwrap()
}

#[test]
fn test_no_auth() {
    let built = applied(AuthConfig::None);
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_bearer_auth() {
    let built = applied(AuthConfig::bearer("sk_test_123"));
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer sk_test_123"
    );
}

#[test]
fn test_basic_auth_uses_key_as_username() {
    let built = applied(AuthConfig::Basic {
        key: ApiKey::new("sk_test_123"),
    });
    let header = built.headers().get("Authorization").unwrap().to_str().unwrap();
    // base64("sk_test_123:")
    assert_eq!(header, "Basic c2tfdGVzdF8xMjM6");
}

#[test]
fn test_api_key_debug_is_redacted() {
    let key = ApiKey::new("  sk_live_abcdef  ");
    assert_eq!(key.expose(), "sk_live_abcdef");
    assert!(key.is_live());
    assert_eq!(format!("{key:?}"), "ApiKey(sk_live_****)");

    let config = AuthConfig::bearer("rk_test_secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("secret"));
    assert!(debug.contains("rk_test_****"));
}

#[test]
fn test_api_key_without_prefix() {
    let key = ApiKey::new("opaque");
    assert!(!key.is_live());
    assert_eq!(format!("{key:?}"), "ApiKey(****)");
    assert!(ApiKey::new("   ").is_empty());
}
