use crate::models::DbShift;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

// The caller is expected to have checked the schedule reference; the FK
// constraint still backstops a concurrent schedule delete.
pub async fn create_shift(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
    name: &str,
    capacity: i32,
    shift_type: &str,
) -> Result<DbShift> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating shift: id={}, schedule_id={}, name={}, capacity={}, shift_type={}",
        id,
        schedule_id,
        name,
        capacity,
        shift_type
    );

    let shift = sqlx::query_as::<_, DbShift>(
        r#"
        INSERT INTO shifts (id, schedule_id, name, capacity, shift_type, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, schedule_id, name, capacity, shift_type, created_at
        "#,
    )
    .bind(id)
    .bind(schedule_id)
    .bind(name)
    .bind(capacity)
    .bind(shift_type)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(shift)
}

pub async fn get_shifts_by_schedule_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<Vec<DbShift>> {
    let shifts = sqlx::query_as::<_, DbShift>(
        r#"
        SELECT id, schedule_id, name, capacity, shift_type, created_at
        FROM shifts
        WHERE schedule_id = $1
        ORDER BY name
        "#,
    )
    .bind(schedule_id)
    .fetch_all(pool)
    .await?;

    Ok(shifts)
}

pub async fn delete_shift(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    tracing::debug!("Deleting shift: id={}", id);

    sqlx::query(
        r#"
        DELETE FROM shifts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
