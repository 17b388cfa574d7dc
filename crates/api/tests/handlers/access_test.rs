use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use tower::ServiceExt;

use crate::test_utils::build_state;

async fn anonymous_get(path: &str) -> Response {
    let app = pharmsched_api::app(build_state());
    app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn anonymous_post(path: &str, json_body: &str) -> Response {
    let app = pharmsched_api::app(build_state());
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let response = anonymous_get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_version() {
    let response = anonymous_get("/version").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_page_is_public() {
    let response = anonymous_get("/schedule/login/?next=/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = anonymous_get("/accounts/login/").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_root_redirects_anonymous_to_login() {
    let response = anonymous_get("/").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/schedule/login/?next=/"
    );
}

#[tokio::test]
async fn test_schedule_list_redirects_anonymous() {
    let response = anonymous_get("/schedule/all/").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/accounts/login/?next=/schedule/all/"
    );
}

#[tokio::test]
async fn test_schedule_detail_redirects_anonymous() {
    let path = "/schedule/detail/7a1e3d04-9c1a-4f6e-8b6a-2f2f6f3f9b11/";
    let response = anonymous_get(path).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/accounts/login/?next={path}")
    );
}

#[tokio::test]
async fn test_person_list_redirects_anonymous() {
    let response = anonymous_get("/schedule/person/all").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/accounts/login/?next=/schedule/person/all"
    );
}

#[tokio::test]
async fn test_group_list_redirects_anonymous() {
    let response = anonymous_get("/schedule/group/all/").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/accounts/login/?next=/schedule/group/all/"
    );
}

#[tokio::test]
async fn test_schedule_add_redirects_anonymous_without_store_access() {
    let body = r#"{"name":"rota","start_day":"2023-08-01","end_date":"2023-08-31"}"#;
    let response = anonymous_post("/schedule/add/", body).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/accounts/login/?next=/schedule/add/"
    );
}

#[tokio::test]
async fn test_shift_add_redirects_anonymous() {
    let body = r#"{"schedule":"7a1e3d04-9c1a-4f6e-8b6a-2f2f6f3f9b11","name":"st","capacity":3,"shift_type":"Main"}"#;
    let response = anonymous_post("/schedule/shift/add/", body).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/accounts/login/?next=/schedule/shift/add/"
    );
}

#[tokio::test]
async fn test_schedule_add_redirects_anonymous_with_malformed_body() {
    // A garbage body must not shadow the authentication outcome.
    let response = anonymous_post("/schedule/add/", "not json").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/accounts/login/?next=/schedule/add/"
    );
}

#[tokio::test]
async fn test_schedule_delete_redirects_anonymous() {
    let path = "/schedule/delete/7a1e3d04-9c1a-4f6e-8b6a-2f2f6f3f9b11/";
    let response = anonymous_get(path).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/accounts/login/?next={path}")
    );
}

#[tokio::test]
async fn test_user_delete_redirects_anonymous() {
    let path = "/schedule/user/delete/7a1e3d04-9c1a-4f6e-8b6a-2f2f6f3f9b11/";
    let response = anonymous_get(path).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/accounts/login/?next={path}")
    );
}
