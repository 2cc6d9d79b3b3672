use crate::error_message_from_ptr;
use libsqlite3_sys::*;
use quarry_core::{Error, Result, Value};
use std::{
    ffi::c_int,
    os::raw::{c_char, c_void},
};

fn bind_text(statement: *mut sqlite3_stmt, index: c_int, value: &str) -> c_int {
    unsafe {
        sqlite3_bind_text(
            statement,
            index,
            value.as_ptr() as *const c_char,
            value.len() as c_int,
            SQLITE_TRANSIENT(),
        )
    }
}

/// Binds `value` to the 1-based parameter `index`.
///
/// Sqlite has no storage class for decimals, dates, times, timestamps and uuids, those
/// are bound as text.
pub(crate) fn bind_value(statement: *mut sqlite3_stmt, index: c_int, value: &Value) -> Result<()> {
    let rc = unsafe {
        match value {
            Value::Null => sqlite3_bind_null(statement, index),
            Value::Boolean(v) => sqlite3_bind_int(statement, index, *v as c_int),
            Value::Int64(v) => sqlite3_bind_int64(statement, index, *v),
            Value::UInt64(v) => {
                let Ok(v) = sqlite3_int64::try_from(*v) else {
                    let error = Error::msg(format!(
                        "Cannot bind the value {} into a sqlite integer because it is out of bounds",
                        v
                    ));
                    log::error!("{:#}", error);
                    return Err(error);
                };
                sqlite3_bind_int64(statement, index, v)
            }
            Value::Float64(v) => sqlite3_bind_double(statement, index, *v),
            Value::Blob(v) => sqlite3_bind_blob(
                statement,
                index,
                v.as_ptr() as *const c_void,
                v.len() as c_int,
                SQLITE_TRANSIENT(),
            ),
            Value::Varchar(v) => bind_text(statement, index, v),
            _ => match value.as_text()? {
                Some(v) => bind_text(statement, index, &v),
                None => {
                    let error =
                        Error::msg(format!("Cannot use a {:?} as a query parameter", value));
                    log::error!("{:#}", error);
                    return Err(error);
                }
            },
        }
    };
    if rc != SQLITE_OK {
        let error = unsafe {
            Error::msg(
                error_message_from_ptr(sqlite3_errmsg(sqlite3_db_handle(statement))).to_string(),
            )
        }
        .context(format!("Cannot bind the parameter {}", index));
        log::error!("{:#}", error);
        return Err(error);
    }
    Ok(())
}

/// Binds `args` in order, the statement must declare exactly as many parameters.
pub(crate) fn bind_all(statement: *mut sqlite3_stmt, args: &[Value]) -> Result<()> {
    let expected = unsafe { sqlite3_bind_parameter_count(statement) } as usize;
    if expected != args.len() {
        let error = Error::msg(format!(
            "The query expects {} parameters but {} were provided",
            expected,
            args.len()
        ));
        log::error!("{:#}", error);
        return Err(error);
    }
    for (i, value) in args.iter().enumerate() {
        bind_value(statement, i as c_int + 1, value)?;
    }
    Ok(())
}
