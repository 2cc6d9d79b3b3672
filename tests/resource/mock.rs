use quarry::{
    Connection, Cursor, Driver, Error, Executor, GenericSqlWriter, Result, Row, RowsAffected,
    Value,
};
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

#[derive(Default, Debug, Clone, Copy)]
pub struct MockDriver;

impl Driver for MockDriver {
    type Connection = MockConnection;
    type SqlWriter = GenericSqlWriter;

    const NAME: &'static str = "mock";

    fn sql_writer(&self) -> GenericSqlWriter {
        GenericSqlWriter::new()
    }
}

/// Executor returning canned rows and recording every statement it receives.
#[derive(Default)]
pub struct MockConnection {
    pub rows: Vec<Row>,
    /// Index of the row whose scan fails.
    pub failing_row: Option<usize>,
    pub result: RowsAffected,
    /// Every `query` fails like a broken connection.
    pub failing_query: bool,
    /// Every `execute` fails like a constraint violation.
    pub failing_execute: bool,
    pub statements: Mutex<Vec<(String, Vec<Value>)>>,
    pub scanned: AtomicUsize,
    pub released: AtomicUsize,
}

impl MockConnection {
    pub fn with_rows(rows: Vec<Vec<Value>>) -> Self {
        Self {
            rows: rows.into_iter().map(Vec::into_boxed_slice).collect(),
            ..Default::default()
        }
    }

    pub fn last_statement(&self) -> (String, Vec<Value>) {
        self.statements
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("No statement was run")
    }

    pub fn scanned(&self) -> usize {
        self.scanned.load(Ordering::Relaxed)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::Relaxed)
    }
}

pub struct MockCursor<'c> {
    connection: &'c MockConnection,
    position: Option<usize>,
}

impl<'c> Cursor for MockCursor<'c> {
    fn advance(&mut self) -> Result<bool> {
        let next = self.position.map_or(0, |v| v + 1);
        self.position = Some(next);
        Ok(next < self.connection.rows.len())
    }

    fn scan(&mut self) -> Result<Row> {
        let position = self.position.ok_or_else(|| Error::msg("No current row"))?;
        if self.connection.failing_row == Some(position) {
            return Err(Error::msg("Connection reset"));
        }
        self.connection.scanned.fetch_add(1, Ordering::Relaxed);
        self.connection
            .rows
            .get(position)
            .cloned()
            .ok_or_else(|| Error::msg("No current row"))
    }
}

impl<'c> Drop for MockCursor<'c> {
    fn drop(&mut self) {
        self.connection.released.fetch_add(1, Ordering::Relaxed);
    }
}

impl Executor for MockConnection {
    type Driver = MockDriver;
    type Cursor<'c> = MockCursor<'c>;

    fn driver(&self) -> &MockDriver {
        &MockDriver
    }

    fn execute(&self, sql: &str, args: &[Value]) -> Result<RowsAffected> {
        self.statements
            .lock()
            .unwrap()
            .push((sql.to_string(), args.to_vec()));
        if self.failing_execute {
            return Err(Error::msg("UNIQUE constraint failed"));
        }
        Ok(self.result)
    }

    fn query(&self, sql: &str, args: &[Value]) -> Result<MockCursor<'_>> {
        self.statements
            .lock()
            .unwrap()
            .push((sql.to_string(), args.to_vec()));
        if self.failing_query {
            return Err(Error::msg("Connection lost"));
        }
        Ok(MockCursor {
            connection: self,
            position: None,
        })
    }
}

impl Connection for MockConnection {
    fn connect(url: &str) -> Result<Self> {
        if !url.starts_with("mock://") {
            return Err(Error::msg(format!("Unexpected url `{}`", url)));
        }
        Ok(Self::default())
    }
}
