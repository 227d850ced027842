//! Unit tests for credentials and roles

use crate::domain::entities::{Credential, RegisteredAccount, Role};

#[test]
fn test_role_serialization() {
    assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"CLIENT\"");
    assert_eq!(serde_json::to_string(&Role::Freelancer).unwrap(), "\"FREELANCER\"");

    let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
    assert_eq!(role, Role::Admin);
    assert!(serde_json::from_str::<Role>("\"client\"").is_err());
}

#[test]
fn test_role_from_str_is_case_insensitive() {
    assert_eq!("client".parse::<Role>(), Ok(Role::Client));
    assert_eq!("Freelancer".parse::<Role>(), Ok(Role::Freelancer));
    assert!("guest".parse::<Role>().is_err());
    assert_eq!(Role::Admin.to_string(), "ADMIN");
}

#[test]
fn test_credential_debug_redacts_hash() {
    let credential = Credential::new("alice", "$2b$04$secret-hash", Role::Client);
    let debug = format!("{:?}", credential);

    assert!(debug.contains("alice"));
    assert!(!debug.contains("secret-hash"));
}

#[test]
fn test_credential_principal() {
    let credential = Credential::new("alice", "hash", Role::Freelancer);
    let principal = credential.principal();

    assert_eq!(principal.username, "alice");
    assert_eq!(principal.role, Role::Freelancer);
}

#[test]
fn test_registered_account_has_no_password() {
    let account = RegisteredAccount::new("u1", "bob", Role::Client);
    let json = serde_json::to_value(&account).unwrap();

    assert_eq!(json, serde_json::json!({"id": "u1", "username": "bob", "role": "CLIENT"}));
}
