use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Branch model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Branch {
    pub id: uuid::Uuid,
    pub name: String,
    pub region: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    // Derived aggregate, maintained by the import pipeline.
    pub member_count: i32,
    pub public: bool,
    pub created_at: DateTime<Utc>,
}

impl Branch {
    /// Branches published to the map, grouped by region.
    pub async fn find_public(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM branches WHERE public = TRUE ORDER BY region, name",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// All branches, published or not. Admin console only.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM branches ORDER BY region, name")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM branches")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
