use crate::{Clauses, ColumnDef, DefaultValue, Row, Value, first_table, separated_by};
use std::fmt::Write;

/// Dialect printer turning statements and entity metadata into SQL text.
///
/// Every method has a default implementation producing the generic dialect, drivers
/// override the pieces their backend spells differently.
pub trait SqlWriter {
    /// Placeholder of the bound argument at `index` (starting from 1).
    fn write_placeholder(&self, out: &mut String, _index: usize) {
        out.push('?');
    }

    /// Column of a select list, qualified with `table` unless it already is.
    fn write_column(&self, out: &mut String, table: &str, column: &ColumnDef) {
        if !column.is_qualified() && !table.is_empty() {
            out.push_str(table);
            out.push('.');
        }
        out.push_str(column.name());
    }

    fn write_limit(&self, out: &mut String, offset: u64, limit: u64) {
        out.push_str(" limit ");
        if offset > 0 {
            let _ = write!(out, "{},", offset);
        }
        let _ = write!(out, "{}", limit);
    }

    /// Filter, ordering, grouping and paging, each clause only when set.
    fn write_condition(&self, out: &mut String, clauses: &Clauses) {
        if !clauses.filter.is_empty() {
            let _ = write!(out, " where {}", clauses.filter);
        }
        if !clauses.sort.is_empty() {
            let _ = write!(out, " order by {}", clauses.sort);
            if !clauses.order.is_empty() {
                let _ = write!(out, " {}", clauses.order);
            }
        }
        if !clauses.group.is_empty() {
            let _ = write!(out, " group by {}", clauses.group);
        }
        if clauses.limit > 0 {
            self.write_limit(out, clauses.offset, clauses.limit);
        }
    }

    fn write_select(&self, out: &mut String, table: &str, columns: &[ColumnDef], clauses: &Clauses) {
        out.reserve(64 + columns.len() * 32);
        out.push_str("select ");
        let qualifier = first_table(table);
        separated_by(
            out,
            columns,
            |out, col| self.write_column(out, qualifier, col),
            ", ",
        );
        let _ = write!(out, " from {}", table);
        self.write_condition(out, clauses);
    }

    fn write_count(&self, out: &mut String, table: &str, clauses: &Clauses) {
        let _ = write!(out, "select count(*) from {}", table);
        self.write_condition(out, clauses);
    }

    /// Writes the `INSERT` and returns the arguments to bind, in placeholder order.
    fn write_insert(
        &self,
        out: &mut String,
        table: &str,
        columns: &[ColumnDef],
        values: Row,
    ) -> Vec<Value> {
        out.reserve(64 + columns.len() * 24);
        let _ = write!(out, "insert into {} (", table);
        let mut args = Vec::with_capacity(values.len());
        let mut placeholders = String::with_capacity(columns.len() * 3);
        let writable = columns
            .iter()
            .zip(values.into_vec())
            .filter(|(c, _)| c.is_writable());
        for (column, value) in writable {
            if !placeholders.is_empty() {
                out.push_str(", ");
                placeholders.push_str(", ");
            }
            out.push_str(column.name());
            self.write_assigned_value(&mut placeholders, column, value, &mut args);
        }
        let _ = write!(out, ") values ({})", placeholders);
        args
    }

    /// Writes the `UPDATE` followed by the condition and returns the arguments to bind.
    fn write_update(
        &self,
        out: &mut String,
        table: &str,
        columns: &[ColumnDef],
        values: Row,
        clauses: &Clauses,
    ) -> Vec<Value> {
        out.reserve(64 + columns.len() * 24);
        let _ = write!(out, "update {} set ", table);
        let mut args = Vec::with_capacity(values.len());
        let writable = columns
            .iter()
            .zip(values.into_vec())
            .filter(|(c, _)| c.is_writable());
        separated_by(
            out,
            writable,
            |out, (column, value)| {
                out.push_str(column.name());
                out.push('=');
                self.write_assigned_value(out, column, value, &mut args);
            },
            ", ",
        );
        self.write_condition(out, clauses);
        args
    }

    /// Value side of an insert or update: the literal default or a bound placeholder.
    fn write_assigned_value(
        &self,
        out: &mut String,
        column: &ColumnDef,
        value: Value,
        args: &mut Vec<Value>,
    ) {
        match column.default {
            DefaultValue::Literal(v) if !v.is_empty() => out.push_str(v),
            _ => {
                args.push(value);
                self.write_placeholder(out, args.len());
            }
        }
    }
}

/// Canonical dialect: lowercase keywords, `?` placeholders, `limit <offset>,<limit>`.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self
    }
}

impl SqlWriter for GenericSqlWriter {}
