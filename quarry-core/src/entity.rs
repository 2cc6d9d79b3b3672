use crate::{AsValue, ColumnDef, Context, Error, MappingError, Result, Row, Value};
use std::any;

/// Record type mapped onto a table, usually implemented through `#[derive(Entity)]`.
pub trait Entity: Sized {
    /// Default table, used by [`crate::Statement::of`].
    fn table_name() -> &'static str;

    /// Mapped columns in declaration order, flattened entities expanded in place.
    fn columns() -> &'static [ColumnDef];

    /// One value per column of [`Entity::columns`], same order.
    fn row(&self) -> Row;

    /// Builds the entity consuming one value per column, in column order.
    fn from_values<I: Iterator<Item = Value>>(values: &mut I) -> Result<Self>;

    /// Builds the entity from a whole row, which must have exactly one value per column.
    fn from_row(row: Row) -> Result<Self> {
        let expected = Self::columns().len();
        if row.len() != expected {
            return Err(Error::new(MappingError::ScanArity {
                expected,
                actual: row.len(),
            }));
        }
        Self::from_values(&mut row.into_vec().into_iter())
    }
}

/// Reads the next value of a row into a field of type `T`.
pub fn scan_column<T: AsValue, I: Iterator<Item = Value>>(
    values: &mut I,
    column: &'static str,
) -> Result<T> {
    let scan_error = || MappingError::Scan {
        column,
        ty: any::type_name::<T>(),
    };
    let Some(value) = values.next() else {
        return Err(Error::msg("The row ended before the column").context(scan_error()));
    };
    T::try_from_value(value).context(scan_error())
}
