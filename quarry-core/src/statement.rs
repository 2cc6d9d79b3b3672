use crate::{
    AsValue, Cursor, Driver, Entity, Error, Executor, MappingError, Result, Shape, SqlWriter,
    Target, Value, truncate_long,
};
use std::{any, fmt::Display};

/// Filter, ordering, grouping and paging of a statement. Empty strings and zero
/// numbers mean unset.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Clauses {
    pub filter: String,
    pub sort: String,
    pub order: String,
    pub group: String,
    pub offset: u64,
    pub limit: u64,
}

/// Builder of one logical query or mutation against a shared executor.
///
/// The filter, sort, order and group fragments are raw SQL trusted as they are, only
/// record values travel as bound arguments.
///
/// ```rust,ignore
/// let users: Vec<User> = Statement::new(&connection, "users")
///     .filter_with("age > {}", &[&18])
///     .sort("id")
///     .order("desc")
///     .limit(10)
///     .find_many()?;
/// ```
pub struct Statement<'e, E: Executor> {
    executor: &'e E,
    table: String,
    clauses: Clauses,
}

impl<'e, E: Executor> Clone for Statement<'e, E> {
    fn clone(&self) -> Self {
        Self {
            executor: self.executor,
            table: self.table.clone(),
            clauses: self.clauses.clone(),
        }
    }
}

impl<'e, E: Executor> Statement<'e, E> {
    /// Statement on `table`, which can be a comma separated list of tables.
    ///
    /// Unqualified columns are prefixed with the first entry of the list as written, so
    /// with aliased lists (`users u, groups g`) every column name must be qualified.
    pub fn new(executor: &'e E, table: impl Into<String>) -> Self {
        Self {
            executor,
            table: table.into(),
            clauses: Default::default(),
        }
    }

    /// Statement on the table of the entity `T`.
    pub fn of<T: Entity>(executor: &'e E) -> Self {
        Self::new(executor, T::table_name())
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.clauses.filter = filter.into();
        self
    }

    /// Sets the filter replacing each `{}` of `template` with the next argument.
    ///
    /// The arguments are written as they display, without any escaping.
    pub fn filter_with(mut self, template: &str, args: &[&dyn Display]) -> Self {
        if args.is_empty() {
            self.clauses.filter = template.to_string();
            return self;
        }
        let mut filter = String::with_capacity(template.len() + args.len() * 8);
        let mut args = args.iter();
        let mut rest = template;
        while let Some(i) = rest.find("{}") {
            filter.push_str(&rest[..i]);
            match args.next() {
                Some(arg) => filter.push_str(&arg.to_string()),
                None => filter.push_str("{}"),
            }
            rest = &rest[i + 2..];
        }
        filter.push_str(rest);
        self.clauses.filter = filter;
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.clauses.sort = sort.into();
        self
    }

    /// Direction of the sort (`asc`, `desc`), ignored when no sort is set.
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.clauses.order = order.into();
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.clauses.group = group.into();
        self
    }

    /// Rows to skip, only written when a limit is set.
    pub fn offset(mut self, offset: u64) -> Self {
        self.clauses.offset = offset;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.clauses.limit = limit;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn clauses(&self) -> &Clauses {
        &self.clauses
    }

    fn sql_writer(&self) -> <E::Driver as Driver>::SqlWriter {
        self.executor.driver().sql_writer()
    }

    /// Appends the filter, ordering, grouping and paging clauses to `out`.
    pub fn write_condition(&self, out: &mut String) {
        self.sql_writer().write_condition(out, &self.clauses);
    }

    /// Select for the target `T`, a single record target reads at most one row.
    pub fn sql_query<T: Target>(&self) -> Result<String> {
        let columns = mapped_columns::<T::Entity>()?;
        let mut clauses = self.clauses.clone();
        if T::SHAPE == Shape::Single {
            clauses.limit = 1;
        }
        let mut query = String::with_capacity(128);
        self.sql_writer()
            .write_select(&mut query, &self.table, columns, &clauses);
        Ok(query)
    }

    pub fn sql_count(&self) -> String {
        let mut query = String::with_capacity(64);
        self.sql_writer()
            .write_count(&mut query, &self.table, &self.clauses);
        query
    }

    /// Insert of `entity` and the arguments to bind.
    pub fn sql_insert<T: Entity>(&self, entity: &T) -> Result<(String, Vec<Value>)> {
        let columns = writable_columns::<T>()?;
        let mut query = String::with_capacity(128);
        let args = self
            .sql_writer()
            .write_insert(&mut query, &self.table, columns, entity.row());
        Ok((query, args))
    }

    /// Update of `entity` restricted by the condition, and the arguments to bind.
    pub fn sql_update<T: Entity>(&self, entity: &T) -> Result<(String, Vec<Value>)> {
        let columns = writable_columns::<T>()?;
        let mut query = String::with_capacity(128);
        let args = self.sql_writer().write_update(
            &mut query,
            &self.table,
            columns,
            entity.row(),
            &self.clauses,
        );
        Ok((query, args))
    }

    /// Runs the select and stores the mapped rows into `target`.
    ///
    /// A single record target keeps the first row and ignores the rest, a collection
    /// target is replaced by all the rows. No row at all is [`MappingError::NotFound`]
    /// and leaves `target` untouched.
    pub fn query<T: Target>(&self, target: &mut T) -> Result<()> {
        let query = self.sql_query::<T>()?;
        log::debug!("sql: {}", query);
        let mut cursor = self
            .executor
            .query(&query, &[])
            .map_err(|e| e.context(format!("While running the query:\n{}", truncate_long!(query))))?;
        let mut result = Vec::new();
        while cursor.advance()? {
            result.push(<T::Entity as Entity>::from_row(cursor.scan()?)?);
            if T::SHAPE == Shape::Single {
                break;
            }
        }
        drop(cursor);
        if result.is_empty() {
            return Err(Error::new(MappingError::NotFound));
        }
        target.assign(result);
        Ok(())
    }

    /// First row matching the statement.
    pub fn find_one<T: Entity>(&self) -> Result<T> {
        let mut result: Option<T> = None;
        self.query(&mut result)?;
        result.ok_or_else(|| Error::new(MappingError::NotFound))
    }

    /// Every row matching the statement, at least one.
    pub fn find_many<T: Entity>(&self) -> Result<Vec<T>> {
        let mut result = Vec::new();
        self.query(&mut result)?;
        Ok(result)
    }

    /// Number of rows matching the statement, zero included.
    pub fn count(&self) -> Result<i64> {
        let query = self.sql_count();
        log::debug!("sql: {}", query);
        let context = || format!("While counting with the query:\n{}", truncate_long!(query));
        let mut cursor = self
            .executor
            .query(&query, &[])
            .map_err(|e| e.context(context()))?;
        if !cursor.advance()? {
            return Err(Error::msg("The count query returned no row").context(context()));
        }
        let row = cursor.scan()?;
        let Some(value) = row.into_vec().into_iter().next() else {
            return Err(Error::msg("The count query returned no column").context(context()));
        };
        i64::try_from_value(value).map_err(|e| e.context(context()))
    }

    /// Inserts `entity`, returns the id the backend generated for it (0 when it reports none).
    pub fn insert<T: Entity>(&self, entity: &T) -> Result<i64> {
        let (query, args) = self.sql_insert(entity)?;
        log::debug!("sql: {}", query);
        let result = self.executor.execute(&query, &args).map_err(|e| {
            e.context(format!(
                "While inserting a {}:\n{}",
                any::type_name::<T>(),
                truncate_long!(query)
            ))
        })?;
        Ok(result.last_insert_id.unwrap_or_default())
    }

    /// Updates the rows matching the statement with the values of `entity`, returns how
    /// many rows were affected.
    pub fn update<T: Entity>(&self, entity: &T) -> Result<u64> {
        let (query, args) = self.sql_update(entity)?;
        log::debug!("sql: {}", query);
        let result = self.executor.execute(&query, &args).map_err(|e| {
            e.context(format!(
                "While updating with a {}:\n{}",
                any::type_name::<T>(),
                truncate_long!(query)
            ))
        })?;
        Ok(result.rows_affected)
    }
}

fn mapped_columns<T: Entity>() -> Result<&'static [crate::ColumnDef]> {
    let columns = T::columns();
    if columns.is_empty() {
        return Err(Error::new(MappingError::EmptyRecord(any::type_name::<T>())));
    }
    Ok(columns)
}

fn writable_columns<T: Entity>() -> Result<&'static [crate::ColumnDef]> {
    let columns = mapped_columns::<T>()?;
    if !columns.iter().any(crate::ColumnDef::is_writable) {
        return Err(Error::new(MappingError::EmptyRecord(any::type_name::<T>())));
    }
    Ok(columns)
}
