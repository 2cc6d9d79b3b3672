use crate::{CBox, SqliteConnection, error_message_from_ptr, extract::extract_value};
use libsqlite3_sys::{
    SQLITE_DONE, SQLITE_ROW, sqlite3_column_count, sqlite3_db_handle,
    sqlite3_errmsg, sqlite3_step, sqlite3_stmt,
};
use quarry_core::{Cursor, Error, Result, Row};
use std::{ffi::c_int, marker::PhantomData};

/// Rows of a prepared statement, the statement is finalized when the cursor is dropped.
pub struct SqliteCursor<'c> {
    statement: CBox<sqlite3_stmt>,
    columns: c_int,
    row: bool,
    done: bool,
    _connection: PhantomData<&'c SqliteConnection>,
}

impl<'c> SqliteCursor<'c> {
    pub(crate) fn new(statement: CBox<sqlite3_stmt>) -> Self {
        let columns = unsafe { sqlite3_column_count(*statement) };
        Self {
            statement,
            columns,
            row: false,
            done: false,
            _connection: PhantomData,
        }
    }
}

impl<'c> Cursor for SqliteCursor<'c> {
    fn advance(&mut self) -> Result<bool> {
        self.row = false;
        if self.done {
            return Ok(false);
        }
        // Busy is reported once the connection busy timeout expired, it is not retried
        match unsafe { sqlite3_step(*self.statement) } {
            SQLITE_ROW => {
                self.row = true;
                Ok(true)
            }
            SQLITE_DONE => {
                self.done = true;
                Ok(false)
            }
            _ => {
                self.done = true;
                let error = unsafe {
                    Error::msg(
                        error_message_from_ptr(sqlite3_errmsg(sqlite3_db_handle(*self.statement)))
                            .to_string(),
                    )
                };
                log::error!("{:#}", error);
                Err(error)
            }
        }
    }

    fn scan(&mut self) -> Result<Row> {
        if !self.row {
            return Err(Error::msg("The cursor has no current row"));
        }
        (0..self.columns)
            .map(|i| extract_value(*self.statement, i))
            .collect()
    }
}
