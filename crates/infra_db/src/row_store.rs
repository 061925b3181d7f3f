//! PostgreSQL row store adapter
//!
//! Answers [`RowStore`] lookups with plain SQL. Each row is rendered by
//! PostgreSQL as a JSON object, and the filter column is compared as text
//! so one query shape serves integer and string keys.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;

use core_kernel::{Filter, PortError, Row, RowStore, Table};

use crate::error::DatabaseError;

/// Row store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgRowStore {
    pool: PgPool,
}

impl PgRowStore {
    /// Creates a new PgRowStore with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Renders `SELECT` over every row of `table`
fn select_all_sql(table: Table) -> String {
    format!(r#"SELECT row_to_json(t)::jsonb FROM "{}" t"#, table.as_str())
}

/// Renders `SELECT` with an equality filter on `column`
///
/// `$1` is the filter value as text, `$2` the row limit (`NULL` for none).
fn select_where_sql(table: Table, column: &str) -> Result<String, DatabaseError> {
    if !is_identifier(column) {
        return Err(DatabaseError::InvalidColumn(column.to_string()));
    }
    Ok(format!(
        r#"SELECT row_to_json(t)::jsonb FROM "{}" t WHERE t."{}"::text = $1 LIMIT $2"#,
        table.as_str(),
        column
    ))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn query_error(error: sqlx::Error) -> PortError {
    DatabaseError::from(&error).into()
}

#[async_trait]
impl RowStore for PgRowStore {
    async fn fetch_all(&self, table: Table) -> Result<Vec<Row>, PortError> {
        debug!(%table, "fetching all rows");

        let rows: Vec<Json<Row>> = sqlx::query_scalar(&select_all_sql(table))
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().map(|row| row.0).collect())
    }

    async fn fetch_where(
        &self,
        table: Table,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Row>, PortError> {
        debug!(%table, %filter, ?limit, "fetching filtered rows");

        let sql = select_where_sql(table, filter.column())?;
        let limit = limit.map(|n| i64::try_from(n).unwrap_or(i64::MAX));

        let rows: Vec<Json<Row>> = sqlx::query_scalar(&sql)
            .bind(filter.value_text())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().map(|row| row.0).collect())
    }

    async fn ping(&self) -> Result<(), PortError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(query_error)?;
        Ok(())
    }
}
