use chrono::Utc;
use mockall::predicate;
use pharmsched_api::response::ActionOutcome;
use pharmsched_core::models::account::CreateGroupRequest;
use pharmsched_db::models::DbGroup;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::TestContext;

// Mirrors the add-group workflow: only a string name creates a group, and
// the caller gets the redirect either way.
async fn add_group_wrapper(ctx: &mut TestContext, request: CreateGroupRequest) -> ActionOutcome {
    if let Some(name) = request.group_name() {
        let name: &'static str = Box::leak(name.into_boxed_str());
        ctx.group_repo
            .create_group(name)
            .await
            .expect("create_group failed");
    }
    ActionOutcome::Redirect("/schedule/group/all/".to_string())
}

#[tokio::test]
async fn test_add_group_with_string_name() {
    let mut ctx = TestContext::new();
    let now = Utc::now();

    ctx.group_repo
        .expect_create_group()
        .with(predicate::eq("nowa_grupa"))
        .times(1)
        .returning(move |name| {
            Ok(DbGroup {
                id: Uuid::new_v4(),
                name: name.to_string(),
                created_at: now,
            })
        });

    let request: CreateGroupRequest =
        serde_json::from_value(json!({ "name": "nowa_grupa" })).unwrap();

    let outcome = add_group_wrapper(&mut ctx, request).await;

    match outcome {
        ActionOutcome::Redirect(location) => assert_eq!(location, "/schedule/group/all/"),
        other => panic!("Expected redirect, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_add_group_with_boolean_name_stores_nothing() {
    let mut ctx = TestContext::new();

    // Nothing is created, yet the caller is still redirected.
    ctx.group_repo.expect_create_group().times(0);

    let request: CreateGroupRequest = serde_json::from_value(json!({ "name": true })).unwrap();

    let outcome = add_group_wrapper(&mut ctx, request).await;

    match outcome {
        ActionOutcome::Redirect(location) => assert_eq!(location, "/schedule/group/all/"),
        other => panic!("Expected redirect, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_add_group_with_missing_name_stores_nothing() {
    let mut ctx = TestContext::new();

    ctx.group_repo.expect_create_group().times(0);

    let request: CreateGroupRequest = serde_json::from_value(json!({})).unwrap();

    let outcome = add_group_wrapper(&mut ctx, request).await;

    match outcome {
        ActionOutcome::Redirect(location) => assert_eq!(location, "/schedule/group/all/"),
        other => panic!("Expected redirect, got: {:?}", other),
    }
}
