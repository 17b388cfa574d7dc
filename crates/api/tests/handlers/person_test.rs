use chrono::Utc;
use mockall::predicate;
use pharmsched_api::response::ActionOutcome;
use pharmsched_core::models::person::CreatePersonRequest;
use pharmsched_db::models::{DbPerson, DbUser};
use uuid::Uuid;

use crate::test_utils::TestContext;

// Mirrors the add-person workflow with the repositories mocked out: validate
// first, then account and roster entry together. A validation failure must
// reach neither repository (the all-or-nothing contract).
async fn add_person_wrapper(ctx: &mut TestContext, request: CreatePersonRequest) -> ActionOutcome {
    let new_person = match request.validate() {
        Ok(new_person) => new_person,
        Err(errors) => return ActionOutcome::Invalid(errors),
    };

    let username: &'static str = Box::leak(new_person.username.clone().into_boxed_str());
    let user = ctx
        .user_repo
        .create_user(username, "password-hash", false)
        .await
        .expect("create_user failed");

    let name: &'static str = Box::leak(new_person.name.clone().into_boxed_str());
    ctx.person_repo
        .create_person(name, new_person.title.code(), Some(user.id))
        .await
        .expect("create_person failed");

    ActionOutcome::Redirect("/schedule/person/all".to_string())
}

#[tokio::test]
async fn test_add_person_creates_account_and_roster_entry() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let now = Utc::now();

    ctx.user_repo
        .expect_create_user()
        .with(
            predicate::eq("nowy"),
            predicate::always(),
            predicate::eq(false),
        )
        .times(1)
        .returning(move |username, password_hash, is_superuser| {
            Ok(DbUser {
                id: user_id,
                username: username.to_string(),
                password_hash: password_hash.to_string(),
                is_superuser,
                created_at: now,
            })
        });

    // The roster entry carries the submitted title code and the new account.
    ctx.person_repo
        .expect_create_person()
        .with(
            predicate::eq("nowyuzytkownik"),
            predicate::eq("Mgr"),
            predicate::eq(Some(user_id)),
        )
        .times(1)
        .returning(move |name, title, user_id| {
            Ok(DbPerson {
                id: Uuid::new_v4(),
                name: name.to_string(),
                title: title.to_string(),
                user_id,
                created_at: now,
            })
        });

    let request = CreatePersonRequest {
        username: Some("nowy".to_string()),
        password: Some("gHyT56T4%%6m".to_string()),
        name: Some("nowyuzytkownik".to_string()),
        title: Some("Mgr".to_string()),
    };

    let outcome = add_person_wrapper(&mut ctx, request).await;

    match outcome {
        ActionOutcome::Redirect(location) => assert_eq!(location, "/schedule/person/all"),
        other => panic!("Expected redirect, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_add_person_invalid_title_creates_neither() {
    let mut ctx = TestContext::new();

    // Neither insert may run for an invalid title.
    ctx.user_repo.expect_create_user().times(0);
    ctx.person_repo.expect_create_person().times(0);

    let request = CreatePersonRequest {
        username: Some("nowy".to_string()),
        password: Some("gHyT56T4%%6m".to_string()),
        name: Some("nowyuzytkownik".to_string()),
        title: Some("tytul".to_string()),
    };

    let outcome = add_person_wrapper(&mut ctx, request).await;

    match outcome {
        ActionOutcome::Invalid(errors) => assert!(errors.contains("title")),
        other => panic!("Expected validation errors, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_user_removes_only_the_account() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();

    ctx.user_repo
        .expect_delete_user()
        .with(predicate::eq(user_id))
        .times(1)
        .returning(|_| Ok(()));

    ctx.user_repo
        .delete_user(user_id)
        .await
        .expect("delete_user failed");

    // The roster repository exposes no delete at all; the linked person can
    // only survive an account deletion.
}
