use crate::Error;

/// Failures raised by the mapping layer itself, as opposed to the driver.
///
/// They travel inside [`Error`], either as the error or as its context, use
/// [`mapping_error`] to recover them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// The record type maps no column.
    #[error("The entity `{0}` does not map any column")]
    EmptyRecord(&'static str),
    /// A fetched column could not be converted into its field.
    #[error("Cannot scan column `{column}` into {ty}")]
    Scan {
        column: &'static str,
        ty: &'static str,
    },
    /// The fetched row does not have one value per mapped column.
    #[error("The row has {actual} columns while the entity maps {expected}")]
    ScanArity { expected: usize, actual: usize },
    /// The query succeeded but returned no row.
    #[error("not found")]
    NotFound,
}

/// The mapping failure carried by `error`, if any.
pub fn mapping_error(error: &Error) -> Option<&MappingError> {
    error.downcast_ref::<MappingError>()
}

/// Whether the query that produced `error` simply matched no row.
pub fn is_not_found(error: &Error) -> bool {
    matches!(mapping_error(error), Some(MappingError::NotFound))
}
