//! PostgreSQL document store: one table per collection, documents as JSONB.
//! Tables live in a schema named by config (`WARD_STORE_SCHEMA`, default `ward`).

use super::sql::{self, BindValue};
use super::{DocumentStore, Filter};
use crate::error::{AppError, ConfigError, StoreError};
use crate::model::Document;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::marker::PhantomData;
use std::str::FromStr;

pub struct PgDocumentStore<T> {
    pool: PgPool,
    table: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Document> PgDocumentStore<T> {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgDocumentStore {
            pool,
            table: sql::qualified_table(schema, T::COLLECTION),
            _marker: PhantomData,
        }
    }

    /// Create the backing table if it does not exist. Call after [`ensure_schema`].
    pub async fn ensure_collection(&self) -> Result<(), StoreError> {
        sqlx::query(&sql::create_table(&self.table))
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Create the schema holding all collection tables if not exists.
pub async fn ensure_schema(pool: &PgPool, schema: &str) -> Result<(), StoreError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", sql::quoted(schema)))
        .execute(pool)
        .await?;
    Ok(())
}

#[async_trait]
impl<T: Document> DocumentStore<T> for PgDocumentStore<T> {
    async fn insert(&self, id: &str, document: &T) -> Result<(), StoreError> {
        let payload = serde_json::to_value(document)?;
        tracing::debug!(collection = T::COLLECTION, id, "insert");
        let result = sqlx::query(&sql::insert(&self.table))
            .bind(id)
            .bind(payload)
            .execute(&self.pool)
            .await;
        match result {
            Ok(done) if done.rows_affected() == 0 => Err(StoreError::conflict(T::COLLECTION, id)),
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::conflict(T::COLLECTION, id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn replace(&self, id: &str, document: &T) -> Result<(), StoreError> {
        let payload = serde_json::to_value(document)?;
        tracing::debug!(collection = T::COLLECTION, id, "replace");
        let done = sqlx::query(&sql::replace(&self.table))
            .bind(id)
            .bind(payload)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(StoreError::not_found(T::COLLECTION, id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        tracing::debug!(collection = T::COLLECTION, id, "delete");
        let done = sqlx::query(&sql::delete(&self.table))
            .bind(id)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(StoreError::not_found(T::COLLECTION, id));
        }
        Ok(())
    }

    async fn find_one(&self, id: &str) -> Result<T, StoreError> {
        tracing::debug!(collection = T::COLLECTION, id, "find one");
        let row: Option<(Value,)> = sqlx::query_as(&sql::select_by_id(&self.table))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let (payload,) = row.ok_or_else(|| StoreError::not_found(T::COLLECTION, id))?;
        Ok(serde_json::from_value(payload)?)
    }

    async fn find_many(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        let q = sql::select_filtered(&self.table, filter);
        tracing::debug!(collection = T::COLLECTION, sql = %q.sql, params = ?q.params, "find many");
        let mut query = sqlx::query_as::<_, (Value,)>(&q.sql);
        for p in q.params {
            query = match p {
                BindValue::Text(s) => query.bind(s),
                BindValue::TextArray(v) => query.bind(v),
            };
        }
        let rows = query.fetch_all(&self.pool).await?;
        rows.into_iter()
            .map(|(payload,)| serde_json::from_value(payload).map_err(StoreError::from))
            .collect()
    }

    async fn close(&self) {
        if !self.pool.is_closed() {
            tracing::info!(collection = T::COLLECTION, "closing store connection pool");
            self.pool.close().await;
        }
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|_| ConfigError::InvalidValue {
        name: "DATABASE_URL",
        value: database_url.to_string(),
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(StoreError::from)?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await
        .map_err(StoreError::from)?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", sql::quoted(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(StoreError::from)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        name: "DATABASE_URL",
        value: url.to_string(),
    };
    let scheme_end = url.find("://").ok_or_else(invalid)? + 3;
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(invalid)?;
    let db_name = url
        .get(path_start..)
        .unwrap_or("")
        .split('?')
        .next()
        .unwrap_or("")
        .trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_database_name() {
        let (admin, db) = parse_db_name_from_url("postgres://u:p@localhost:5432/ward_inventory?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(db, "ward_inventory");
    }

    #[test]
    fn url_without_path_is_invalid() {
        assert!(parse_db_name_from_url("postgres://localhost").is_err());
        assert!(parse_db_name_from_url("not a url").is_err());
    }
}
