use axum::{
    Json,
    extract::{OriginalUri, Path, State},
};
use std::sync::Arc;
use uuid::Uuid;

use pharmsched_core::{
    errors::SchedError,
    models::schedule::{
        CreateScheduleRequest, EditScheduleRequest, ScheduleCheckoutResponse,
        ScheduleDetailResponse, ScheduleSummary,
    },
    policy::Action,
};

use crate::{
    ApiState,
    handlers::{SCHEDULE_LIST, shift::shift_response},
    middleware::{
        auth::{Actor, gate},
        error_handling::AppError,
    },
    response::ActionOutcome,
};

#[axum::debug_handler]
pub async fn list_schedules(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
) -> Result<Json<Vec<ScheduleSummary>>, AppError> {
    gate(&actor, Action::ScheduleList, uri.path())?;

    let schedules = pharmsched_db::repositories::schedule::list_schedules(&state.db_pool)
        .await
        .map_err(SchedError::Database)?;

    let response = schedules
        .into_iter()
        .map(|s| ScheduleSummary {
            id: s.id,
            name: s.name,
            start_day: s.start_day,
            end_date: s.end_date,
        })
        .collect();

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn schedule_detail(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleDetailResponse>, AppError> {
    gate(&actor, Action::ScheduleDetail, uri.path())?;

    let db_schedule = pharmsched_db::repositories::schedule::get_schedule_by_id(&state.db_pool, id)
        .await
        .map_err(SchedError::Database)?
        .ok_or_else(|| SchedError::NotFound(format!("Schedule with ID {} not found", id)))?;

    let shifts = pharmsched_db::repositories::shift::get_shifts_by_schedule_id(&state.db_pool, id)
        .await
        .map_err(SchedError::Database)?;

    let response = ScheduleDetailResponse {
        id: db_schedule.id,
        name: db_schedule.name,
        start_day: db_schedule.start_day,
        end_date: db_schedule.end_date,
        shifts: shifts.into_iter().map(shift_response).collect(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn add_schedule(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
    payload: Option<Json<CreateScheduleRequest>>,
) -> Result<ActionOutcome, AppError> {
    gate(&actor, Action::ScheduleAdd, uri.path())?;

    // A missing or malformed body is an empty form.
    let request = payload.map(|Json(p)| p).unwrap_or_default();
    let new_schedule = match request.validate() {
        Ok(new_schedule) => new_schedule,
        Err(errors) => return Ok(ActionOutcome::Invalid(errors)),
    };

    pharmsched_db::repositories::schedule::create_schedule(
        &state.db_pool,
        &new_schedule.name,
        new_schedule.start_day,
        new_schedule.end_date,
    )
    .await
    .map_err(SchedError::Database)?;

    Ok(ActionOutcome::Redirect(SCHEDULE_LIST.to_string()))
}

/// Current values for the edit form.
#[axum::debug_handler]
pub async fn edit_schedule_form(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleSummary>, AppError> {
    gate(&actor, Action::ScheduleEdit, uri.path())?;

    let db_schedule = pharmsched_db::repositories::schedule::get_schedule_by_id(&state.db_pool, id)
        .await
        .map_err(SchedError::Database)?
        .ok_or_else(|| SchedError::NotFound(format!("Schedule with ID {} not found", id)))?;

    Ok(Json(ScheduleSummary {
        id: db_schedule.id,
        name: db_schedule.name,
        start_day: db_schedule.start_day,
        end_date: db_schedule.end_date,
    }))
}

#[axum::debug_handler]
pub async fn edit_schedule(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
    Path(id): Path<Uuid>,
    payload: Option<Json<EditScheduleRequest>>,
) -> Result<ActionOutcome, AppError> {
    gate(&actor, Action::ScheduleEdit, uri.path())?;

    let request = payload.map(|Json(p)| p).unwrap_or_default();
    let changes = match request.validate() {
        Ok(changes) => changes,
        Err(errors) => return Ok(ActionOutcome::Invalid(errors)),
    };

    pharmsched_db::repositories::schedule::get_schedule_by_id(&state.db_pool, id)
        .await
        .map_err(SchedError::Database)?
        .ok_or_else(|| SchedError::NotFound(format!("Schedule with ID {} not found", id)))?;

    pharmsched_db::repositories::schedule::update_schedule(
        &state.db_pool,
        id,
        changes.name.as_deref(),
        changes.start_day,
        changes.end_date,
    )
    .await
    .map_err(SchedError::Database)?;

    Ok(ActionOutcome::Redirect(format!("/schedule/detail/{}/", id)))
}

#[axum::debug_handler]
pub async fn checkout_schedule(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleCheckoutResponse>, AppError> {
    gate(&actor, Action::ScheduleCheckout, uri.path())?;

    let db_schedule = pharmsched_db::repositories::schedule::get_schedule_by_id(&state.db_pool, id)
        .await
        .map_err(SchedError::Database)?
        .ok_or_else(|| SchedError::NotFound(format!("Schedule with ID {} not found", id)))?;

    let shifts = pharmsched_db::repositories::shift::get_shifts_by_schedule_id(&state.db_pool, id)
        .await
        .map_err(SchedError::Database)?;

    let total_capacity = shifts.iter().map(|s| s.capacity as i64).sum();

    let response = ScheduleCheckoutResponse {
        id: db_schedule.id,
        name: db_schedule.name,
        start_day: db_schedule.start_day,
        end_date: db_schedule.end_date,
        shifts: shifts.into_iter().map(shift_response).collect(),
        total_capacity,
    };

    Ok(Json(response))
}

/// Deletes the schedule and, through the store's cascade, every shift it
/// owns. Redirects whether or not the id existed.
#[axum::debug_handler]
pub async fn delete_schedule(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<ActionOutcome, AppError> {
    gate(&actor, Action::ScheduleDelete, uri.path())?;

    pharmsched_db::repositories::schedule::delete_schedule(&state.db_pool, id)
        .await
        .map_err(SchedError::Database)?;

    Ok(ActionOutcome::Redirect(SCHEDULE_LIST.to_string()))
}
