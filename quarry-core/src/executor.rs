use crate::{Driver, Result, Row, Value};

/// Outcome of a statement that does not return rows.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowsAffected {
    pub rows_affected: u64,
    /// Row id generated by the last insert, when the backend reports one.
    pub last_insert_id: Option<i64>,
}

/// Result set of a query. Dropping the cursor releases it.
pub trait Cursor {
    /// Moves to the next row, `false` once the result set is exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Values of the current row.
    fn scan(&mut self) -> Result<Row>;
}

/// Shared storage handle. Implementations must be safe to use from several callers at once.
pub trait Executor {
    type Driver: Driver;
    type Cursor<'c>: Cursor
    where
        Self: 'c;

    fn driver(&self) -> &Self::Driver;

    /// Runs a statement that does not return rows.
    fn execute(&self, sql: &str, args: &[Value]) -> Result<RowsAffected>;

    /// Runs a query, the rows are read through the returned cursor.
    fn query(&self, sql: &str, args: &[Value]) -> Result<Self::Cursor<'_>>;
}
