//! Integration tests for the user-service client against a local stand-in server

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::json;

use sa_core::domain::entities::{RegisteredAccount, Role};
use sa_core::domain::value_objects::RegistrationRequest;
use sa_core::errors::DomainError;
use sa_core::repositories::CredentialRepository;
use sa_core::services::credential::password::hash_password;
use sa_core::services::{AccountCreationService, CredentialStore, RepositoryCredentialStore};
use sa_infra::UserServiceClient;
use sa_shared::config::UserServiceConfig;

async fn save_user(body: web::Json<serde_json::Value>) -> HttpResponse {
    if body["username"] == "taken" {
        return HttpResponse::Conflict().body("username already taken");
    }
    if body["username"] == "broken" {
        return HttpResponse::InternalServerError().finish();
    }
    HttpResponse::Ok().json(json!({
        "id": 42,
        "username": body["username"],
        "role": body["role"],
    }))
}

async fn get_user(path: web::Path<String>, hash: web::Data<String>) -> HttpResponse {
    match path.as_str() {
        "alice" | "john doe" => HttpResponse::Ok().json(json!({
            "id": 1,
            "username": path.as_str(),
            "password": hash.get_ref(),
            "role": "CLIENT",
        })),
        "ghost" => HttpResponse::Ok().body("null"),
        _ => HttpResponse::NotFound().finish(),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sa_infra=debug")
        .with_test_writer()
        .try_init();
}

/// Start a stand-in user-service on an ephemeral port
fn start_user_service() -> SocketAddr {
    init_tracing();
    let hash = hash_password("correct-pw", 4).unwrap();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(hash.clone()))
            .route("/v1/user/save", web::post().to(save_user))
            .route("/v1/user/getUserByUsername/{username}", web::get().to(get_user))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    addr
}

fn client_for(addr: SocketAddr) -> UserServiceClient {
    UserServiceClient::new(&UserServiceConfig::new(format!("http://{}", addr))).unwrap()
}

fn unreachable_client() -> UserServiceClient {
    let mut config = UserServiceConfig::new("http://127.0.0.1:1");
    config.timeout_secs = 2;
    UserServiceClient::new(&config).unwrap()
}

#[actix_web::test]
async fn test_create_returns_collaborator_account() {
    let client = client_for(start_user_service());

    let account = client
        .create(&RegistrationRequest::new("bob", "pw123", Role::Client))
        .await
        .unwrap();

    assert_eq!(account, RegisteredAccount::new("42", "bob", Role::Client));
}

#[actix_web::test]
async fn test_create_conflict_carries_status_and_body() {
    let client = client_for(start_user_service());

    let err = client
        .create(&RegistrationRequest::new("taken", "pw123", Role::Freelancer))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::rejected("user-service", 409, "username already taken")
    );
}

#[actix_web::test]
async fn test_create_server_error_carries_status() {
    let client = client_for(start_user_service());

    let err = client
        .create(&RegistrationRequest::new("broken", "pw123", Role::Admin))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::CollaboratorUnavailable { status: Some(500), .. }
    ));
}

#[actix_web::test]
async fn test_find_by_username_returns_credential() {
    let client = client_for(start_user_service());

    let credential = client.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(credential.username, "alice");
    assert_eq!(credential.role, Role::Client);
    assert!(credential.password_hash.starts_with("$2"));

    let spaced = client.find_by_username("john doe").await.unwrap();
    assert_eq!(spaced.map(|c| c.username), Some("john doe".to_string()));
}

#[actix_web::test]
async fn test_find_by_username_missing_is_none() {
    let client = client_for(start_user_service());

    assert!(client.find_by_username("nobody").await.unwrap().is_none());
    assert!(client.find_by_username("ghost").await.unwrap().is_none());
}

#[actix_web::test]
async fn test_connection_refused_has_no_status() {
    let client = unreachable_client();

    let lookup = client.find_by_username("alice").await.unwrap_err();
    assert!(matches!(
        lookup,
        DomainError::CollaboratorUnavailable { status: None, .. }
    ));

    let create = client
        .create(&RegistrationRequest::new("bob", "pw123", Role::Client))
        .await
        .unwrap_err();
    assert!(matches!(
        create,
        DomainError::CollaboratorUnavailable { status: None, .. }
    ));
}

#[actix_web::test]
async fn test_credential_store_over_user_service() {
    let client = Arc::new(client_for(start_user_service()));
    let store = RepositoryCredentialStore::new(client);

    let accepted = store.verify("alice", "correct-pw").await.unwrap();
    assert!(accepted.authenticated);
    assert_eq!(accepted.principal.map(|p| p.role), Some(Role::Client));

    let wrong = store.verify("alice", "wrong-pw").await.unwrap();
    assert!(!wrong.authenticated);

    let unknown = store.verify("nobody", "correct-pw").await.unwrap();
    assert!(!unknown.authenticated);
}
