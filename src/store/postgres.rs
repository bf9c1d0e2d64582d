//! PostgreSQL store. The table lives in a configurable schema (default `public`).

use crate::config::DEFAULT_SCHEMA;
use crate::error::{AppError, ConfigError};
use crate::store::{generate_id, SubjectStore};
use crate::subject::{Subject, SubjectFields};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const SUBJECTS_TABLE: &str = "subjects";

#[derive(Clone)]
pub struct PgSubjectStore {
    pool: PgPool,
    schema: String,
    /// Schema-qualified, quoted table name (e.g. `"public"."subjects"`).
    table: String,
}

impl PgSubjectStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        Self {
            pool,
            schema: schema.to_string(),
            table: format!("{}.{}", quote_ident(schema), quote_ident(SUBJECTS_TABLE)),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn qualified_table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl SubjectStore for PgSubjectStore {
    async fn initialize(&self) -> Result<(), AppError> {
        // public always exists; creating it would need CREATE on the database
        if self.schema != DEFAULT_SCHEMA {
            sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(&self.schema)))
                .execute(&self.pool)
                .await?;
        }
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id VARCHAR(255) PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                teacher VARCHAR(255) NOT NULL,
                inprogress BOOLEAN NOT NULL,
                description TEXT NOT NULL
            )
            "#,
            self.table
        );
        tracing::debug!(sql = %ddl, "ensure table");
        sqlx::query(&ddl).execute(&self.pool).await?;
        tracing::info!(table = %self.table, "subjects table ready");
        Ok(())
    }

    async fn create(&self, fields: &SubjectFields) -> Result<String, AppError> {
        let id = generate_id();
        let sql = format!(
            "INSERT INTO {} (id, name, teacher, inprogress, description) VALUES ($1, $2, $3, $4, $5)",
            self.table
        );
        tracing::debug!(sql = %sql, "query");
        sqlx::query(&sql)
            .bind(&id)
            .bind(&fields.name)
            .bind(&fields.teacher)
            .bind(fields.inprogress)
            .bind(&fields.description)
            .execute(&self.pool)
            .await?;
        tracing::info!(id = %id, "subject created");
        Ok(id)
    }

    async fn update(&self, id: &str, fields: &SubjectFields) -> Result<bool, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $1, teacher = $2, inprogress = $3, description = $4 WHERE id = $5",
            self.table
        );
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(&sql)
            .bind(&fields.name)
            .bind(&fields.teacher)
            .bind(fields.inprogress)
            .bind(&fields.description)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<Subject>, AppError> {
        let sql = format!("SELECT id, name, teacher, inprogress, description FROM {}", self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Subject>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Connect to the server's `postgres` database and create the database named in
/// `database_url` if it does not exist. No-op when the target is `postgres` itself.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url);
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection url into (url of the `postgres` maintenance database, target database name).
/// The name is empty when the url has no database path.
fn parse_db_name_from_url(url: &str) -> (String, String) {
    let (without_query, query) = match url.split_once('?') {
        Some((head, q)) => (head, Some(q)),
        None => (url, None),
    };
    let scheme_end = without_query.find("://").map(|i| i + 3).unwrap_or(0);
    let Some(path_start) = without_query
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
    else {
        return (url.to_string(), String::new());
    };
    let db_name = without_query.get(path_start..).unwrap_or("").trim();
    let base = without_query.get(..path_start).unwrap_or(without_query);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    (admin_url, db_name.to_string())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
