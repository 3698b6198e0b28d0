use super::*;

#[test]
fn normalize_base_url_trims_trailing_slashes_and_whitespace() {
    assert_eq!(normalize_base_url(" https://api.example.com// "), "https://api.example.com");
}

#[test]
fn normalize_base_url_empty_stays_empty() {
    assert_eq!(normalize_base_url(""), "");
}

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(endpoint("https://api.example.com/", "/api/private"), "https://api.example.com/api/private");
    assert_eq!(endpoint("https://api.example.com", "api/private"), "https://api.example.com/api/private");
}

#[test]
fn endpoint_with_empty_base_is_same_origin() {
    assert_eq!(endpoint("", "/api/login"), "/api/login");
}
