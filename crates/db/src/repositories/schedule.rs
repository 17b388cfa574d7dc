use crate::models::DbSchedule;
use chrono::{NaiveDate, Utc};
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_schedule(
    pool: &Pool<Postgres>,
    name: &str,
    start_day: NaiveDate,
    end_date: NaiveDate,
) -> Result<DbSchedule> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating schedule: id={}, name={}, start_day={}, end_date={}",
        id,
        name,
        start_day,
        end_date
    );

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        INSERT INTO schedules (id, name, start_day, end_date, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, start_day, end_date, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(start_day)
    .bind(end_date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(schedule)
}

pub async fn get_schedule_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSchedule>> {
    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, name, start_day, end_date, created_at
        FROM schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

pub async fn schedule_exists(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM schedules
            WHERE id = $1
        );
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

pub async fn list_schedules(pool: &Pool<Postgres>) -> Result<Vec<DbSchedule>> {
    let schedules = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, name, start_day, end_date, created_at
        FROM schedules
        ORDER BY start_day, name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}

pub async fn update_schedule(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
    start_day: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<DbSchedule> {
    let schedule = get_schedule_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Schedule not found"))?;

    let name = name.unwrap_or(&schedule.name);
    let start_day = start_day.unwrap_or(schedule.start_day);
    let end_date = end_date.unwrap_or(schedule.end_date);

    let updated_schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        UPDATE schedules
        SET name = $2, start_day = $3, end_date = $4
        WHERE id = $1
        RETURNING id, name, start_day, end_date, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(start_day)
    .bind(end_date)
    .fetch_one(pool)
    .await?;

    Ok(updated_schedule)
}

// Owned shifts go with the schedule via ON DELETE CASCADE. Unknown ids are a
// no-op so the delete endpoint can redirect unconditionally.
pub async fn delete_schedule(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    tracing::debug!("Deleting schedule: id={}", id);

    sqlx::query(
        r#"
        DELETE FROM schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
