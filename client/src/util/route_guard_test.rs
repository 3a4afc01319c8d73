use super::*;

#[test]
fn static_patterns_compile() {
    assert!(RouteGuard::new(PROTECTED_ROUTE_PATTERNS).is_ok());
}

#[test]
fn shop_management_paths_are_protected() {
    assert!(is_protected("/user/shop/products"));
    assert!(is_protected("/user/dashboard"));
    assert!(is_protected("/user"));
    assert!(is_protected("/admin/dashboard"));
    assert!(is_protected("/create-shop"));
}

#[test]
fn login_page_is_protected() {
    assert!(is_protected("/login"));
    assert!(is_protected("/login?redirectPath=/user"));
}

#[test]
fn public_paths_are_not_protected() {
    assert!(!is_protected("/"));
    assert!(!is_protected("/products"));
    assert!(!is_protected("/cart"));
    assert!(!is_protected("/register"));
}

#[test]
fn prefixes_only_match_whole_segments() {
    assert!(!is_protected("/users"));
    assert!(!is_protected("/administrator"));
    assert!(!is_protected("/login-help"));
    assert!(!is_protected("/shop/user"));
}

#[test]
fn query_and_fragment_are_ignored() {
    assert!(is_protected("/user/shop/products?page=2"));
    assert!(!is_protected("/?next=/user"));
    assert!(!is_protected("/#/admin"));
}

#[test]
fn custom_guard_uses_its_own_patterns() {
    let guard = RouteGuard::new(["^/vault"]).unwrap();
    assert!(guard.is_protected("/vault/1"));
    assert!(!guard.is_protected("/user"));
}

#[test]
fn invalid_pattern_is_rejected() {
    assert!(RouteGuard::new(["("]).is_err());
}
