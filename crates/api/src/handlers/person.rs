use axum::{
    Json,
    extract::{OriginalUri, State},
};
use std::sync::Arc;

use pharmsched_core::{
    errors::SchedError,
    models::FormErrors,
    models::person::{CreatePersonRequest, PersonResponse},
    policy::Action,
};

use crate::{
    ApiState,
    handlers::PERSON_LIST,
    middleware::{
        auth::{self, Actor, gate},
        error_handling::AppError,
    },
    response::ActionOutcome,
};

#[axum::debug_handler]
pub async fn list_persons(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
) -> Result<Json<Vec<PersonResponse>>, AppError> {
    gate(&actor, Action::PersonList, uri.path())?;

    let persons = pharmsched_db::repositories::person::list_persons(&state.db_pool)
        .await
        .map_err(SchedError::Database)?;

    let response = persons
        .into_iter()
        .map(|p| PersonResponse {
            id: p.id,
            name: p.name,
            title: p.title,
            user_id: p.user_id,
        })
        .collect();

    Ok(Json(response))
}

/// Provisions a platform account and its roster entry in one step.
///
/// The two inserts share a transaction: a failure on either side leaves
/// neither an account nor a person behind.
#[axum::debug_handler]
pub async fn add_person(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
    payload: Option<Json<CreatePersonRequest>>,
) -> Result<ActionOutcome, AppError> {
    gate(&actor, Action::PersonAdd, uri.path())?;

    let request = payload.map(|Json(p)| p).unwrap_or_default();
    let new_person = match request.validate() {
        Ok(new_person) => new_person,
        Err(errors) => return Ok(ActionOutcome::Invalid(errors)),
    };

    let password_hash = auth::hash_password(&new_person.password)?;

    let mut tx = state
        .db_pool
        .begin()
        .await
        .map_err(|e| SchedError::Database(e.into()))?;

    let user = match pharmsched_db::repositories::user::create_user(
        &mut *tx,
        &new_person.username,
        &password_hash,
        false,
    )
    .await
    {
        Ok(user) => user,
        Err(e) if pharmsched_db::is_unique_violation(&e) => {
            return Ok(ActionOutcome::Invalid(FormErrors::single(
                "username",
                "A user with that username already exists.",
            )));
        }
        Err(e) => return Err(AppError(SchedError::Database(e))),
    };

    pharmsched_db::repositories::person::create_person(
        &mut *tx,
        &new_person.name,
        new_person.title.code(),
        Some(user.id),
    )
    .await
    .map_err(SchedError::Database)?;

    tx.commit()
        .await
        .map_err(|e| SchedError::Database(e.into()))?;

    tracing::info!(
        "Provisioned account {} for roster entry {}",
        new_person.username,
        new_person.name
    );

    Ok(ActionOutcome::Redirect(PERSON_LIST.to_string()))
}
