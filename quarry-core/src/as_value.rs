use crate::{
    Error, Result, Value,
    value::{DATE_FORMAT, TIME_FORMAT, TIMESTAMP_FORMAT},
};
use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use std::{any, str::FromStr};
use time::{Date, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Conversion between native Rust types and the dynamically typed [`Value`].
///
/// `as_value` produces the bound argument of a field, `try_from_value` reads a fetched
/// column back. Implementations accept their canonical variant and, where it makes
/// sense, the representations a backend with fewer storage classes returns (integers
/// for booleans, text for dates, decimals and uuids).
///
/// ```rust
/// use quarry_core::{AsValue, Value};
/// let v = 42i32.as_value();
/// assert_eq!(v, Value::Int64(42));
/// let n: i32 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait AsValue {
    fn as_value(self) -> Value;
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

fn mismatch<T>(value: &Value) -> Error {
    Error::msg(format!(
        "Cannot convert {:?} to {}",
        value,
        any::type_name::<T>()
    ))
}

fn parse<T: FromStr>(value: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse::<T>().map_err(|e| {
        Error::new(e).context(format!(
            "Cannot parse `{}` as {}",
            value,
            any::type_name::<T>()
        ))
    })
}

impl AsValue for Value {
    fn as_value(self) -> Value {
        self
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

macro_rules! impl_as_value_integer {
    ($source:ty, $destination:path) => {
        impl AsValue for $source {
            fn as_value(self) -> Value {
                $destination(self as _)
            }
            fn try_from_value(value: Value) -> Result<Self> {
                let out_of_range = |v: &dyn std::fmt::Display| {
                    Error::msg(format!(
                        "Value {} is out of range for {}",
                        v,
                        any::type_name::<Self>(),
                    ))
                };
                match value {
                    Value::Int64(v) => <$source>::try_from(v).map_err(|_| out_of_range(&v)),
                    Value::UInt64(v) => <$source>::try_from(v).map_err(|_| out_of_range(&v)),
                    Value::Boolean(v) => Ok(v as _),
                    Value::Decimal(v) if v.fract().is_zero() => v
                        .to_i128()
                        .and_then(|v| <$source>::try_from(v).ok())
                        .ok_or_else(|| out_of_range(&v)),
                    Value::Varchar(ref v) => parse(v),
                    _ => Err(mismatch::<Self>(&value)),
                }
            }
        }
    };
}
impl_as_value_integer!(i8, Value::Int64);
impl_as_value_integer!(i16, Value::Int64);
impl_as_value_integer!(i32, Value::Int64);
impl_as_value_integer!(i64, Value::Int64);
impl_as_value_integer!(isize, Value::Int64);
impl_as_value_integer!(u8, Value::Int64);
impl_as_value_integer!(u16, Value::Int64);
impl_as_value_integer!(u32, Value::Int64);
impl_as_value_integer!(u64, Value::UInt64);
impl_as_value_integer!(usize, Value::UInt64);

macro_rules! impl_as_value_float {
    ($source:ty, $to_primitive:ident) => {
        impl AsValue for $source {
            fn as_value(self) -> Value {
                Value::Float64(self as f64)
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    Value::Float64(v) => Ok(v as _),
                    Value::Int64(v) => Ok(v as _),
                    Value::UInt64(v) => Ok(v as _),
                    Value::Decimal(v) => v.$to_primitive().ok_or_else(|| mismatch::<Self>(&value)),
                    Value::Varchar(ref v) => parse(v),
                    _ => Err(mismatch::<Self>(&value)),
                }
            }
        }
    };
}
impl_as_value_float!(f32, to_f32);
impl_as_value_float!(f64, to_f64);

impl AsValue for bool {
    fn as_value(self) -> Value {
        Value::Boolean(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(v) => Ok(v),
            Value::Int64(v) if v == 0 || v == 1 => Ok(v == 1),
            Value::UInt64(v) if v == 0 || v == 1 => Ok(v == 1),
            Value::Varchar(ref v) => match v.trim() {
                x if x.eq_ignore_ascii_case("true") || x == "1" => Ok(true),
                x if x.eq_ignore_ascii_case("false") || x == "0" => Ok(false),
                _ => Err(mismatch::<Self>(&value)),
            },
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

impl AsValue for String {
    fn as_value(self) -> Value {
        Value::Varchar(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Varchar(v) => Ok(v),
            Value::Blob(ref v) => String::from_utf8(v.to_vec()).map_err(|_| mismatch::<Self>(&value)),
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

impl AsValue for Vec<u8> {
    fn as_value(self) -> Value {
        Value::Blob(self.into_boxed_slice())
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(v) => Ok(v.into_vec()),
            Value::Varchar(v) => Ok(v.into_bytes()),
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

impl AsValue for Decimal {
    fn as_value(self) -> Value {
        Value::Decimal(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(v) => Ok(v),
            Value::Int64(v) => Ok(v.into()),
            Value::UInt64(v) => Ok(v.into()),
            Value::Float64(v) => Decimal::from_f64(v).ok_or_else(|| mismatch::<Self>(&value)),
            Value::Varchar(ref v) => parse(v),
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

macro_rules! impl_as_value_temporal {
    ($source:ty, $destination:path, $format:expr) => {
        impl AsValue for $source {
            fn as_value(self) -> Value {
                $destination(self)
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(v) => Ok(v),
                    Value::Varchar(ref v) => <$source>::parse(v.trim(), $format).map_err(|e| {
                        Error::new(e).context(format!(
                            "Cannot parse `{}` as {}",
                            v,
                            any::type_name::<Self>()
                        ))
                    }),
                    _ => Err(mismatch::<Self>(&value)),
                }
            }
        }
    };
}
impl_as_value_temporal!(Date, Value::Date, DATE_FORMAT);
impl_as_value_temporal!(Time, Value::Time, TIME_FORMAT);
impl_as_value_temporal!(PrimitiveDateTime, Value::Timestamp, TIMESTAMP_FORMAT);

impl AsValue for Uuid {
    fn as_value(self) -> Value {
        Value::Uuid(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::Varchar(ref v) => parse(v),
            Value::Blob(ref v) => Uuid::from_slice(v).map_err(|_| mismatch::<Self>(&value)),
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => Value::Null,
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            v => T::try_from_value(v).map(Some),
        }
    }
}

impl<T: AsValue> AsValue for Box<T> {
    fn as_value(self) -> Value {
        (*self).as_value()
    }
    fn try_from_value(value: Value) -> Result<Self> {
        T::try_from_value(value).map(Box::new)
    }
}
