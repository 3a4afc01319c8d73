use super::*;

#[test]
fn dashboard_title_known_roles() {
    assert_eq!(dashboard_title("admin"), "Admin Dashboard");
    assert_eq!(dashboard_title("user"), "User Dashboard");
}

#[test]
fn dashboard_title_empty_segment_defaults_to_user() {
    assert_eq!(dashboard_title(""), "User Dashboard");
}

#[test]
fn dashboard_title_capitalizes_unknown_role() {
    assert_eq!(dashboard_title("vendor"), "Vendor Dashboard");
}
