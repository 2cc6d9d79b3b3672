/// How a column receives its value when a record is inserted or updated.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// Bound parameter taken from the record.
    #[default]
    None,
    /// Generated by the server, the column is left out of `INSERT` and `UPDATE`.
    Auto,
    /// Raw SQL written in place of the placeholder, nothing is bound.
    Literal(&'static str),
}

/// Mapping of one record field onto a column.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Field identifier in the Rust type.
    pub field: &'static str,
    /// Column name, possibly qualified (`table.column`).
    pub name: &'static str,
    pub default: DefaultValue,
}

impl ColumnDef {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the name already carries its table.
    pub fn is_qualified(&self) -> bool {
        self.name.contains('.')
    }

    /// Whether the column takes part in `INSERT` and `UPDATE`.
    pub fn is_writable(&self) -> bool {
        self.default != DefaultValue::Auto
    }
}
