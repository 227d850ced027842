//! Unit tests for token claims

use crate::domain::entities::token::{
    Claims, DEFAULT_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER,
};

#[test]
fn test_session_claims() {
    let claims = Claims::new_session("alice", JWT_ISSUER, JWT_AUDIENCE, DEFAULT_TOKEN_EXPIRY_SECONDS).unwrap();

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.username(), "alice");
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
    assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_EXPIRY_SECONDS);
    assert_eq!(claims.nbf, claims.iat);
    assert!(!claims.is_expired());
    assert!(claims.expires_at().is_some());
}

#[test]
fn test_each_issuance_has_unique_jti() {
    let first = Claims::new_session("alice", JWT_ISSUER, JWT_AUDIENCE, 60).unwrap();
    let second = Claims::new_session("alice", JWT_ISSUER, JWT_AUDIENCE, 60).unwrap();

    assert_eq!(first.sub, second.sub);
    assert_ne!(first.jti, second.jti);
}

#[test]
fn test_expired_claims() {
    let claims = Claims::new_session("alice", JWT_ISSUER, JWT_AUDIENCE, -10).unwrap();
    assert!(claims.is_expired());
}

#[test]
fn test_unrepresentable_expiry_yields_none() {
    assert!(Claims::new_session("alice", JWT_ISSUER, JWT_AUDIENCE, i64::MAX / 100).is_none());
    assert!(Claims::new_session("alice", JWT_ISSUER, JWT_AUDIENCE, i64::MAX).is_none());
}
