//! In-memory row store
//!
//! Serves [`RowStore`] lookups from rows held in memory. Lookups can be made
//! to fail per table or per filter, and every lookup is recorded so tests can
//! check which queries an operation issued.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use core_kernel::{Filter, PortError, Row, RowStore, Table};

/// A lookup issued against the store
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    pub table: Table,
    /// `None` for a full-table fetch
    pub filter: Option<Filter>,
}

#[derive(Debug, Clone, PartialEq)]
enum Failure {
    Table(Table),
    Filter(Table, Filter),
}

/// Row store held in memory
#[derive(Debug, Default)]
pub struct MemoryRowStore {
    tables: HashMap<Table, Vec<Row>>,
    failures: Vec<Failure>,
    unreachable: bool,
    lookups: Mutex<Vec<Lookup>>,
}

impl MemoryRowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row to `table`
    pub fn with_row(mut self, table: Table, row: Row) -> Self {
        self.tables.entry(table).or_default().push(row);
        self
    }

    /// Makes every lookup on `table` fail
    pub fn failing_table(mut self, table: Table) -> Self {
        self.failures.push(Failure::Table(table));
        self
    }

    /// Makes lookups on `table` with exactly `filter` fail
    pub fn failing_lookup(mut self, table: Table, filter: Filter) -> Self {
        self.failures.push(Failure::Filter(table, filter));
        self
    }

    /// Makes every lookup and the ping fail as if the store were down
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Lookups issued so far, in order
    pub fn lookups(&self) -> Vec<Lookup> {
        self.lookups.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Number of lookups issued against `table`
    pub fn lookup_count(&self, table: Table) -> usize {
        self.lookups().iter().filter(|l| l.table == table).count()
    }

    fn record(&self, table: Table, filter: Option<&Filter>) {
        if let Ok(mut lookups) = self.lookups.lock() {
            lookups.push(Lookup {
                table,
                filter: filter.cloned(),
            });
        }
    }

    fn check(&self, table: Table, filter: Option<&Filter>) -> Result<(), PortError> {
        if self.unreachable {
            return Err(PortError::connection("row store unreachable"));
        }
        let failed = self.failures.iter().any(|failure| match failure {
            Failure::Table(t) => *t == table,
            Failure::Filter(t, f) => *t == table && Some(f) == filter,
        });
        if failed {
            let what = filter.map(|f| format!(" where {}", f)).unwrap_or_default();
            return Err(PortError::internal(format!("injected failure on {}{}", table, what)));
        }
        Ok(())
    }

    fn rows(&self, table: Table) -> &[Row] {
        self.tables.get(&table).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[async_trait]
impl RowStore for MemoryRowStore {
    async fn fetch_all(&self, table: Table) -> Result<Vec<Row>, PortError> {
        self.record(table, None);
        self.check(table, None)?;
        Ok(self.rows(table).to_vec())
    }

    async fn fetch_where(
        &self,
        table: Table,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Row>, PortError> {
        self.record(table, Some(filter));
        self.check(table, Some(filter))?;
        Ok(self
            .rows(table)
            .iter()
            .filter(|row| filter.matches(row))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), PortError> {
        if self.unreachable {
            return Err(PortError::connection("row store unreachable"));
        }
        Ok(())
    }
}
