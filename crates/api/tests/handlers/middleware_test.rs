use argon2::PasswordVerifier;
use axum::http::header;
use pharmsched_api::middleware::auth;
use pharmsched_api::middleware::auth::{Actor, gate};
use pharmsched_api::middleware::error_handling::map_error;
use pharmsched_core::errors::SchedError;
use pharmsched_core::policy::{Action, Role};
use uuid::Uuid;

use crate::test_utils::actor_with_role;

#[tokio::test]
async fn test_error_handling_not_found() {
    // Create a not found error
    let error = SchedError::NotFound("Resource not found".to_string());

    // Map the error to a response
    let response = map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = SchedError::Validation("Invalid input".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let error = SchedError::Authentication("Invalid credentials".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_authorization() {
    let error = SchedError::Authorization("Not authorized".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = SchedError::Database(eyre::eyre!("Database error"));

    let response = map_error(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = SchedError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = map_error(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_handling_login_required_redirects() {
    // Authentication-required answers with the login redirect, not a status
    // page, and carries the original path in `next`.
    let error = SchedError::LoginRequired {
        next: "/schedule/all/".to_string(),
    };

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/accounts/login/?next=/schedule/all/"
    );
}

#[tokio::test]
async fn test_hash_password() {
    // Test that password hashing works
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    // Verify the hash is different from the original password
    assert_ne!(hashed, password);

    // Verify the hash starts with the argon2 prefix
    assert!(hashed.starts_with("$argon2"));
}

#[tokio::test]
async fn test_verify_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert!(auth::verify_password(password, &hashed).unwrap());
    assert!(!auth::verify_password("wrong_password", &hashed).unwrap());

    // Cross-check against argon2 directly
    let argon2 = argon2::Argon2::default();
    let parsed_hash = argon2::PasswordHash::new(&hashed).unwrap();
    assert!(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok());
}

#[tokio::test]
async fn test_session_token_round_trip() {
    let user_id = Uuid::new_v4();
    let token = auth::mint_session_token("secret", user_id).unwrap();

    assert_eq!(auth::verify_session_token("secret", &token), Some(user_id));
}

#[tokio::test]
async fn test_session_token_rejects_wrong_secret() {
    let user_id = Uuid::new_v4();
    let token = auth::mint_session_token("secret", user_id).unwrap();

    assert_eq!(auth::verify_session_token("other-secret", &token), None);
    assert_eq!(auth::verify_session_token("secret", "garbage"), None);
}

#[tokio::test]
async fn test_gate_anonymous_carries_next() {
    let result = gate(&Actor::Anonymous, Action::ScheduleList, "/schedule/all/");

    match result.unwrap_err().0 {
        SchedError::LoginRequired { next } => assert_eq!(next, "/schedule/all/"),
        e => panic!("Expected LoginRequired error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_gate_plain_account_forbidden() {
    let actor = actor_with_role(Role::Authenticated);
    assert_eq!(actor.role(), Role::Authenticated);
    assert_eq!(Actor::Anonymous.role(), Role::Anonymous);

    let result = gate(&actor, Action::ScheduleDetail, "/schedule/detail/1/");

    match result.unwrap_err().0 {
        SchedError::Authorization(_) => {}
        e => panic!("Expected Authorization error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_gate_permissioned_reads_schedules() {
    let actor = actor_with_role(Role::Permissioned);

    assert!(gate(&actor, Action::ScheduleDetail, "/schedule/detail/1/").is_ok());
    assert!(gate(&actor, Action::ScheduleList, "/schedule/all/").is_ok());
    assert!(gate(&actor, Action::ScheduleEdit, "/schedule/edit/1/").is_err());
    assert!(gate(&actor, Action::PersonList, "/schedule/person/all").is_err());
}

#[tokio::test]
async fn test_gate_superuser_allowed() {
    let actor = actor_with_role(Role::Superuser);

    for action in Action::ALL {
        assert!(
            gate(&actor, action, "/").is_ok(),
            "superuser denied {:?}",
            action
        );
    }
}
