use crate::{CBox, SqliteCursor, SqliteDriver, bind::bind_all, error_message_from_ptr};
use libsqlite3_sys::{
    SQLITE_DONE, SQLITE_OK, SQLITE_OPEN_CREATE, SQLITE_OPEN_FULLMUTEX,
    SQLITE_OPEN_READWRITE, SQLITE_OPEN_URI, SQLITE_ROW, sqlite3, sqlite3_busy_timeout,
    sqlite3_changes64, sqlite3_close, sqlite3_db_mutex, sqlite3_errmsg, sqlite3_finalize,
    sqlite3_last_insert_rowid, sqlite3_mutex_enter, sqlite3_mutex_leave, sqlite3_open_v2,
    sqlite3_prepare_v2, sqlite3_step, sqlite3_stmt,
};
use quarry_core::{
    Connection, Context, Driver, Error, Executor, Result, RowsAffected, Value, truncate_long,
};
use std::{
    ffi::{CString, c_char, c_int},
    ptr,
    time::Duration,
};

/// How long a statement waits for a lock held by another connection.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection to a sqlite database.
///
/// The database is opened in serialized mode, a connection can be shared by reference
/// across threads.
pub struct SqliteConnection {
    pub(crate) connection: CBox<sqlite3>,
}

impl SqliteConnection {
    /// Sets how long statements wait for locks held by other connections before failing
    /// with a busy error.
    pub fn set_busy_timeout(&self, timeout: Duration) -> Result<()> {
        let millis = c_int::try_from(timeout.as_millis()).unwrap_or(c_int::MAX);
        let rc = unsafe { sqlite3_busy_timeout(*self.connection, millis) };
        if rc != SQLITE_OK {
            let error = self.error().context("Could not set the busy timeout");
            log::error!("{:#}", error);
            return Err(error);
        }
        Ok(())
    }

    fn error(&self) -> Error {
        unsafe { Error::msg(error_message_from_ptr(sqlite3_errmsg(*self.connection)).to_string()) }
    }

    fn prepare(&self, sql: &str) -> Result<CBox<sqlite3_stmt>> {
        let context = || format!("While preparing the query:\n{}", truncate_long!(sql));
        let mut statement = CBox::<sqlite3_stmt>::new(ptr::null_mut(), |p| unsafe {
            sqlite3_finalize(p);
        });
        let start = sql.as_ptr() as *const c_char;
        let mut tail = ptr::null();
        let rc = unsafe {
            sqlite3_prepare_v2(
                *self.connection,
                start,
                sql.len() as c_int,
                &mut *statement,
                &mut tail,
            )
        };
        if rc != SQLITE_OK {
            let error = self.error().context(context());
            log::error!("{:#}", error);
            return Err(error);
        }
        if statement.is_null() {
            let error = Error::msg("The query does not contain any statement").context(context());
            log::error!("{:#}", error);
            return Err(error);
        }
        let consumed = if tail.is_null() {
            sql.len()
        } else {
            unsafe { tail.offset_from(start) as usize }
        };
        if !sql.get(consumed..).unwrap_or_default().trim().is_empty() {
            let error =
                Error::msg("Cannot prepare more than one statement at a time").context(context());
            log::error!("{:#}", error);
            return Err(error);
        }
        Ok(statement)
    }
}

impl Executor for SqliteConnection {
    type Driver = SqliteDriver;
    type Cursor<'c> = SqliteCursor<'c>;

    fn driver(&self) -> &Self::Driver {
        &SqliteDriver {}
    }

    fn execute(&self, sql: &str, args: &[Value]) -> Result<RowsAffected> {
        let statement = self.prepare(sql)?;
        bind_all(*statement, args)
            .with_context(|| format!("While executing the query:\n{}", truncate_long!(sql)))?;
        unsafe {
            // Changes and row id are per connection, no other statement must step in between
            let mutex = sqlite3_db_mutex(*self.connection);
            sqlite3_mutex_enter(mutex);
            // Busy after the timeout is a failure like any other
            let rc = loop {
                match sqlite3_step(*statement) {
                    SQLITE_ROW => continue,
                    rc => break rc,
                }
            };
            let result = if rc == SQLITE_DONE {
                Ok(RowsAffected {
                    rows_affected: sqlite3_changes64(*self.connection) as u64,
                    last_insert_id: Some(sqlite3_last_insert_rowid(*self.connection)),
                })
            } else {
                Err(self.error())
            };
            sqlite3_mutex_leave(mutex);
            result.map_err(|e| {
                let error =
                    e.context(format!("While executing the query:\n{}", truncate_long!(sql)));
                log::error!("{:#}", error);
                error
            })
        }
    }

    fn query(&self, sql: &str, args: &[Value]) -> Result<SqliteCursor<'_>> {
        let statement = self.prepare(sql)?;
        bind_all(*statement, args)
            .with_context(|| format!("While running the query:\n{}", truncate_long!(sql)))?;
        Ok(SqliteCursor::new(statement))
    }
}

impl Connection for SqliteConnection {
    /// Opens `sqlite://<path>[?<parameters>]`, the path is created when missing unless
    /// `mode=ro` or `mode=rw` is given.
    fn connect(url: &str) -> Result<SqliteConnection> {
        let prefix = format!("{}://", <Self::Driver as Driver>::NAME);
        let Some(path) = url.strip_prefix(&prefix) else {
            let error = Error::msg(format!(
                "Expected sqlite connection url to start with `{}`",
                &prefix
            ));
            log::error!("{:#}", error);
            return Err(error);
        };
        let context = || format!("Error while decoding connection URL: `{}`", url);
        let path = CString::new(format!("file:{}", path)).with_context(context)?;
        let mut connection = CBox::<sqlite3>::new(ptr::null_mut(), |p| unsafe {
            sqlite3_close(p);
        });
        let rc = unsafe {
            sqlite3_open_v2(
                path.as_ptr(),
                &mut *connection,
                SQLITE_OPEN_READWRITE | SQLITE_OPEN_CREATE | SQLITE_OPEN_URI | SQLITE_OPEN_FULLMUTEX,
                ptr::null(),
            )
        };
        let result = Self { connection };
        if rc != SQLITE_OK {
            let error = result
                .error()
                .context(format!("Could not open the database `{}`", url));
            log::error!("{:#}", error);
            return Err(error);
        }
        result.set_busy_timeout(DEFAULT_BUSY_TIMEOUT)?;
        Ok(result)
    }
}
