use crate::{Error, Result};
use rust_decimal::Decimal;
use std::borrow::Cow;
use time::{
    Date, PrimitiveDateTime, Time, format_description::BorrowedFormatItem, macros::format_description,
};
use uuid::Uuid;

pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");
pub(crate) const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second][optional [.[subsecond]]]");
pub(crate) const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
);

/// Dynamically typed cell exchanged with the drivers, both as bound argument and as
/// column of a fetched row.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int64(i64),
    UInt64(u64),
    Float64(f64),
    Decimal(Decimal),
    Varchar(String),
    Blob(Box<[u8]>),
    Date(Date),
    Time(Time),
    Timestamp(PrimitiveDateTime),
    Uuid(Uuid),
}

/// One fetched row, values in column order.
pub type Row = Box<[Value]>;

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Textual form used by backends that store the richer types as text.
    ///
    /// Returns `None` for the variants that have a native binary form (null, numbers, blobs).
    pub fn as_text(&self) -> Result<Option<Cow<'_, str>>> {
        let context = |e: time::error::Format| Error::new(e).context(format!("Cannot format {:?}", self));
        Ok(Some(match self {
            Value::Varchar(v) => Cow::Borrowed(v.as_str()),
            Value::Decimal(v) => Cow::Owned(v.to_string()),
            Value::Date(v) => Cow::Owned(v.format(DATE_FORMAT).map_err(context)?),
            Value::Time(v) => Cow::Owned(v.format(TIME_FORMAT).map_err(context)?),
            Value::Timestamp(v) => Cow::Owned(v.format(TIMESTAMP_FORMAT).map_err(context)?),
            Value::Uuid(v) => Cow::Owned(v.hyphenated().to_string()),
            _ => return Ok(None),
        }))
    }
}
