//! Row Store Port
//!
//! Every read the dashboard performs goes through the [`RowStore`] trait: a
//! lookup by table name and a single equality filter, returning JSON-like
//! rows. The store has no join capability, so callers fetch related rows one
//! lookup at a time and assemble them themselves.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │      DashboardService         │
//! │  (assembles response views)   │
//! └──────────────────────────────┘
//!               │
//!               ▼
//! ┌──────────────────────────────┐
//! │        RowStore port          │
//! └──────────────────────────────┘
//!          ▲               ▲
//!          │               │
//! ┌────────┴───────┐ ┌─────┴─────────┐
//! │  PgRowStore     │ │ MemoryRowStore │
//! │  (infra_db)     │ │ (test_utils)   │
//! └────────────────┘ └───────────────┘
//! ```

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// A single row as returned by the store
pub type Row = Map<String, Value>;

/// Error type for port operations
///
/// Provides a unified error type that all store implementations must use.
#[derive(Debug, Error)]
pub enum PortError {
    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The store did not answer in time
    #[error("Timeout: {operation}")]
    Timeout {
        operation: String,
    },

    /// A row could not be turned into the expected record
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Timeout error
    pub fn timeout(operation: impl Into<String>) -> Self {
        PortError::Timeout {
            operation: operation.into(),
        }
    }

    /// Creates a Transformation error
    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }
}

/// Tables the dashboard reads
///
/// A closed set, so a table name never comes from request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Claims,
    Insurances,
    Applications,
    Vehicles,
}

impl Table {
    /// Returns the table name in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Claims => "claims",
            Table::Insurances => "insurances",
            Table::Applications => "applications",
            Table::Vehicles => "vehicles",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equality filter on one column
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    column: &'static str,
    value: Value,
}

impl Filter {
    /// Matches rows whose `column` equals `value`
    pub fn eq(column: &'static str, value: impl Into<Value>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }

    pub fn column(&self) -> &'static str {
        self.column
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The filter value in its text form
    ///
    /// Stores compare on text so an integer key matches a numeric or a
    /// string column alike.
    pub fn value_text(&self) -> String {
        scalar_text(&self.value)
    }

    /// Returns true if `row` satisfies this filter
    pub fn matches(&self, row: &Row) -> bool {
        match row.get(self.column) {
            None | Some(Value::Null) => false,
            Some(cell) => scalar_text(cell) == self.value_text(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.column, self.value_text())
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read access to the external row store
#[async_trait]
pub trait RowStore: Send + Sync + 'static {
    /// Fetches every row of `table`
    async fn fetch_all(&self, table: Table) -> Result<Vec<Row>, PortError>;

    /// Fetches rows of `table` matching `filter`, at most `limit` of them
    async fn fetch_where(
        &self,
        table: Table,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Row>, PortError>;

    /// Fetches the first row of `table` matching `filter`
    async fn fetch_single(&self, table: Table, filter: &Filter) -> Result<Option<Row>, PortError> {
        Ok(self.fetch_where(table, filter, Some(1)).await?.into_iter().next())
    }

    /// Checks that the store is reachable
    async fn ping(&self) -> Result<(), PortError> {
        Ok(())
    }
}

/// Decodes a store row into a typed record
///
/// Unknown columns are ignored by the record types, missing ones become `None`.
pub fn decode_row<T: DeserializeOwned>(table: Table, row: Row) -> Result<T, PortError> {
    serde_json::from_value(Value::Object(row))
        .map_err(|e| PortError::transformation(format!("malformed {} row: {}", table, e)))
}
