use crate::models::DbUser;
use chrono::Utc;
use eyre::Result;
use sqlx::{PgExecutor, Pool, Postgres};
use uuid::Uuid;

// Takes an executor rather than the pool so the add-person workflow can run
// account and roster inserts inside one transaction.
pub async fn create_user<'e>(
    executor: impl PgExecutor<'e>,
    username: &str,
    password_hash: &str,
    is_superuser: bool,
) -> Result<DbUser> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating user: id={}, username={}, superuser={}",
        id,
        username,
        is_superuser
    );

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, username, password_hash, is_superuser, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, username, password_hash, is_superuser, created_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(is_superuser)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password_hash, is_superuser, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_username(pool: &Pool<Postgres>, username: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password_hash, is_superuser, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn user_has_permission(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    permission: &str,
) -> Result<bool> {
    let has_permission = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM user_permissions
            WHERE user_id = $1 AND permission = $2
        );
        "#,
    )
    .bind(user_id)
    .bind(permission)
    .fetch_one(pool)
    .await?;

    Ok(has_permission)
}

pub async fn grant_permission<'e>(
    executor: impl PgExecutor<'e>,
    user_id: Uuid,
    permission: &str,
) -> Result<()> {
    tracing::debug!("Granting permission {} to user {}", permission, user_id);

    sqlx::query(
        r#"
        INSERT INTO user_permissions (user_id, permission)
        VALUES ($1, $2)
        ON CONFLICT (user_id, permission) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(permission)
    .execute(executor)
    .await?;

    Ok(())
}

// Linked persons keep their roster entry: the FK severs the link instead of
// cascading. Deleting an unknown id is a no-op.
pub async fn delete_user(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    tracing::debug!("Deleting user: id={}", id);

    sqlx::query(
        r#"
        DELETE FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
