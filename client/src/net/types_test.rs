use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_token_claims() {
    let json = r#"{
        "userId": "67a1",
        "name": "Mama",
        "email": "mama@mamai.com",
        "hasShop": true,
        "isActive": true,
        "role": "admin",
        "iat": 1700000000,
        "exp": 1700086400
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.user_id, "67a1");
    assert_eq!(user.email, "mama@mamai.com");
    assert!(user.has_shop);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.exp, Some(1_700_086_400));
}

#[test]
fn user_missing_optional_claims_uses_defaults() {
    let user: User = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
    assert_eq!(user.role, Role::User);
    assert!(user.is_active);
    assert!(!user.has_shop);
    assert!(user.exp.is_none());
}

#[test]
fn user_without_email_is_rejected() {
    assert!(serde_json::from_str::<User>(r#"{"role":"user"}"#).is_err());
}

#[test]
fn user_serializes_camel_case_and_skips_missing_exp() {
    let user = User {
        user_id: "u1".to_owned(),
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        has_shop: false,
        is_active: true,
        role: Role::User,
        exp: None,
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["userId"], "u1");
    assert_eq!(value["hasShop"], false);
    assert_eq!(value["role"], "user");
    assert!(value.get("exp").is_none());
}

#[test]
fn user_expiry_is_inclusive() {
    let mut user: User = serde_json::from_str(r#"{"email":"a@b.com","exp":100}"#).unwrap();
    assert!(!user.is_expired_at(99));
    assert!(user.is_expired_at(100));
    user.exp = None;
    assert!(!user.is_expired_at(i64::MAX));
}

// =============================================================
// Role
// =============================================================

#[test]
fn unknown_role_maps_to_other() {
    let role: Role = serde_json::from_str(r#""vendor""#).unwrap();
    assert_eq!(role, Role::Other);
    assert_eq!(role.dashboard_segment(), "user");
}

#[test]
fn dashboard_segment_per_role() {
    assert_eq!(Role::User.dashboard_segment(), "user");
    assert_eq!(Role::Admin.dashboard_segment(), "admin");
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn api_message_without_message_field() {
    let msg: ApiMessage = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert!(!msg.success);
    assert!(msg.message.is_none());
}

#[test]
fn challenge_verification_parses_message() {
    let v: ChallengeVerification =
        serde_json::from_str(r#"{"success":false,"message":"timeout-or-duplicate"}"#).unwrap();
    assert!(!v.success);
    assert_eq!(v.message.as_deref(), Some("timeout-or-duplicate"));
}
