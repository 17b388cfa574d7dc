use crate::models::{DbGroup, DbGroupSummary};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_group(pool: &Pool<Postgres>, name: &str) -> Result<DbGroup> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating group: id={}, name={}", id, name);

    let group = sqlx::query_as::<_, DbGroup>(
        r#"
        INSERT INTO groups (id, name, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(group)
}

pub async fn list_groups(pool: &Pool<Postgres>) -> Result<Vec<DbGroupSummary>> {
    let groups = sqlx::query_as::<_, DbGroupSummary>(
        r#"
        SELECT g.id, g.name, COUNT(gm.user_id) AS member_count
        FROM groups g
        LEFT JOIN group_members gm ON g.id = gm.group_id
        GROUP BY g.id, g.name, g.created_at
        ORDER BY g.created_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(groups)
}
