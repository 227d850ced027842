//! Unit tests for the HS256 token issuer

use chrono::Utc;
use jsonwebtoken::Algorithm;

use crate::domain::entities::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{JwtTokenIssuer, TokenIssuer, TokenServiceConfig};

const SECRET: &str = "test-secret-key-for-unit-tests";

fn issuer() -> JwtTokenIssuer {
    JwtTokenIssuer::new(TokenServiceConfig::hs256(SECRET)).unwrap()
}

#[test]
fn test_issue_and_verify() {
    let issuer = issuer();

    let token = issuer.issue("alice").unwrap();
    assert!(!token.is_empty());

    let claims = issuer.verify(&token).unwrap();
    assert_eq!(claims.username(), "alice");
    assert_eq!(claims.iss, "scalable-auth");
    assert_eq!(claims.aud, "scalable-api");
    assert!(!claims.is_expired());
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_successive_tokens_are_distinct_and_valid() {
    let issuer = issuer();

    let first = issuer.issue("alice").unwrap();
    let second = issuer.issue("alice").unwrap();
    assert_ne!(first, second);

    for token in [first, second] {
        assert_eq!(issuer.verify(&token).unwrap().sub, "alice");
    }
}

#[test]
fn test_expired_token_rejected() {
    let issuer = JwtTokenIssuer::new(TokenServiceConfig::hs256(SECRET).with_expiry_seconds(-3600)).unwrap();

    let token = issuer.issue("alice").unwrap();
    let result = issuer.verify(&token);
    assert_eq!(result, Err(DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn test_unrepresentable_expiry_fails_without_panicking() {
    let issuer = JwtTokenIssuer::new(TokenServiceConfig::hs256(SECRET).with_expiry_seconds(i64::MAX / 100)).unwrap();

    let result = issuer.issue("alice");
    assert_eq!(result, Err(DomainError::Token(TokenError::TokenGenerationFailed)));
}

#[test]
fn test_not_yet_valid_token_rejected() {
    let issuer = issuer();

    let mut claims = Claims::new_session("alice", "scalable-auth", "scalable-api", 7200).unwrap();
    claims.nbf = Utc::now().timestamp() + 3600;
    let token = issuer.encode_claims(&claims).unwrap();

    let result = issuer.verify(&token);
    assert_eq!(result, Err(DomainError::Token(TokenError::TokenNotYetValid)));
}

#[test]
fn test_wrong_secret_rejected() {
    let other = JwtTokenIssuer::new(TokenServiceConfig::hs256("another-secret")).unwrap();
    let token = other.issue("alice").unwrap();

    let result = issuer().verify(&token);
    assert_eq!(result, Err(DomainError::Token(TokenError::InvalidSignature)));
}

#[test]
fn test_wrong_audience_rejected() {
    let other = JwtTokenIssuer::new(TokenServiceConfig::hs256(SECRET).with_audience("other-api")).unwrap();
    let token = other.issue("alice").unwrap();

    let result = issuer().verify(&token);
    assert_eq!(result, Err(DomainError::Token(TokenError::InvalidTokenFormat)));
}

#[test]
fn test_garbage_token_rejected() {
    let result = issuer().verify("not.a.jwt");
    assert_eq!(result, Err(DomainError::Token(TokenError::InvalidTokenFormat)));
}

#[test]
fn test_rs256_without_key_paths_fails() {
    let config = TokenServiceConfig {
        algorithm: Algorithm::RS256,
        ..Default::default()
    };

    let result = JwtTokenIssuer::new(config);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::KeyLoadError { .. }))
    ));
}

#[test]
fn test_rs256_with_missing_files_fails() {
    let config = TokenServiceConfig {
        algorithm: Algorithm::RS256,
        private_key_path: Some("/nonexistent/private.pem".to_string()),
        public_key_path: Some("/nonexistent/public.pem".to_string()),
        ..Default::default()
    };

    let result = JwtTokenIssuer::new(config);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::KeyLoadError { .. }))
    ));
}
