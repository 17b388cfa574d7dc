use crate::models::DbPerson;
use chrono::Utc;
use eyre::Result;
use sqlx::{PgExecutor, Pool, Postgres};
use uuid::Uuid;

// Executor-generic for the same reason as `user::create_user`: the add-person
// workflow inserts the account and the person in one transaction.
pub async fn create_person<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
    title: &str,
    user_id: Option<Uuid>,
) -> Result<DbPerson> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating person: id={}, name={}, title={}, has_account={}",
        id,
        name,
        title,
        user_id.is_some()
    );

    let person = sqlx::query_as::<_, DbPerson>(
        r#"
        INSERT INTO persons (id, name, title, user_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, title, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(title)
    .bind(user_id)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(person)
}

pub async fn list_persons(pool: &Pool<Postgres>) -> Result<Vec<DbPerson>> {
    let persons = sqlx::query_as::<_, DbPerson>(
        r#"
        SELECT id, name, title, user_id, created_at
        FROM persons
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(persons)
}
