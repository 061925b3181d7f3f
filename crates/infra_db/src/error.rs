//! Database error types
//!
//! This module defines the error types that can occur during database operations
//! and maps them onto the port error the rest of the system understands.

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A column name was not a plain SQL identifier
    #[error("Invalid column name: {0}")]
    InvalidColumn(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Converts SQLx errors to more specific DatabaseError variants
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Database(db_err) => {
                DatabaseError::QueryFailed(db_err.message().to_string())
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

impl From<DatabaseError> for PortError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::PoolExhausted => PortError::timeout("acquire pooled connection"),
            DatabaseError::ConnectionFailed(_) => PortError::Connection {
                message: error.to_string(),
                source: Some(Box::new(error)),
            },
            other => PortError::Internal {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_becomes_port_timeout() {
        let error = DatabaseError::from(&sqlx::Error::PoolTimedOut);
        assert!(matches!(error, DatabaseError::PoolExhausted));

        let port: PortError = error.into();
        assert!(matches!(port, PortError::Timeout { .. }));
    }

    #[test]
    fn test_port_error_kinds() {
        let port: PortError = DatabaseError::ConnectionFailed("refused".into()).into();
        assert!(matches!(port, PortError::Connection { .. }));

        let port: PortError = DatabaseError::InvalidColumn("a;b".into()).into();
        assert!(matches!(port, PortError::Internal { .. }));
        assert!(port.to_string().contains("a;b"));
    }
}
