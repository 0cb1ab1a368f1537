//! DML (Data Manipulation Language) statements.
//!
//! INSERT, UPDATE and DELETE value objects with their builders.
//!
//! # Examples
//!
//! ```ignore
//! use sqlmodel::sql::dml::{SqlInsert, SqlUpdate, SqlDelete};
//! use sqlmodel::sql::expr::{param, FromTable};
//! use sqlmodel::sql::condition::ConditionExt;
//!
//! let citizen = FromTable::new("citizen").with_alias("c");
//!
//! // insert into citizen (name, last_name) values (?, ?)
//! let insert = SqlInsert::into(FromTable::new("citizen"))
//!     .column("name")
//!     .column("last_name")
//!     .build()?;
//!
//! // update citizen AS c set name = ? where c.id = ?
//! let update = SqlUpdate::table(citizen.clone())
//!     .set("name", param("name"))
//!     .condition(citizen.column("id").eq(param("id")))
//!     .build()?;
//!
//! // delete from citizen AS c where c.id = ?
//! let delete = SqlDelete::from(citizen.clone())
//!     .condition(citizen.column("id").eq(param("id")))
//!     .build()?;
//! ```

use super::condition::Condition;
use super::error::{SqlError, SqlResult};
use super::expr::{Column, FromTable, Parameter, Value};
use super::query::single_condition;

// ============================================================================
// INSERT
// ============================================================================

/// INSERT statement.
///
/// Columns and values are parallel lists. Without columns the statement
/// inserts a row of defaults, spelled per dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlInsert {
    table: FromTable,
    columns: Vec<Column>,
    values: Vec<Value>,
}

impl SqlInsert {
    /// Start an INSERT into `table`. The table alias is never rendered.
    pub fn into(table: FromTable) -> SqlInsertBuilder {
        SqlInsertBuilder {
            table,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn table(&self) -> &FromTable {
        &self.table
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

#[derive(Debug, Clone)]
#[must_use = "builders have no effect until built"]
pub struct SqlInsertBuilder {
    table: FromTable,
    columns: Vec<Column>,
    values: Vec<Value>,
}

impl SqlInsertBuilder {
    /// Insert column `name` bound to a `?` labelled with the column name.
    pub fn column(self, name: &str) -> Self {
        self.value(name, Parameter::new(name))
    }

    pub fn columns<'a>(self, names: impl IntoIterator<Item = &'a str>) -> Self {
        names.into_iter().fold(self, |b, name| b.column(name))
    }

    /// Insert column `name` with an explicit value.
    pub fn value(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.columns.push(Column::new(name));
        self.values.push(value.into());
        self
    }

    pub fn build(self) -> SqlResult<SqlInsert> {
        if self.table.name.is_empty() {
            return Err(SqlError::invalid("insert", "table name is empty"));
        }
        Ok(SqlInsert {
            table: self.table,
            columns: self.columns,
            values: self.values,
        })
    }
}

// ============================================================================
// UPDATE
// ============================================================================

/// UPDATE statement. SET columns always render unqualified.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlUpdate {
    table: FromTable,
    assignments: Vec<(Column, Value)>,
    condition: Option<Condition>,
}

impl SqlUpdate {
    pub fn table(table: FromTable) -> SqlUpdateBuilder {
        SqlUpdateBuilder {
            table,
            assignments: Vec::new(),
            conditions: Vec::new(),
        }
    }

    pub fn target(&self) -> &FromTable {
        &self.table
    }

    pub fn assignments(&self) -> &[(Column, Value)] {
        &self.assignments
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

#[derive(Debug, Clone)]
#[must_use = "builders have no effect until built"]
pub struct SqlUpdateBuilder {
    table: FromTable,
    assignments: Vec<(Column, Value)>,
    conditions: Vec<Condition>,
}

impl SqlUpdateBuilder {
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.assignments.push((Column::new(column), value.into()));
        self
    }

    /// `column = ?` with the placeholder labelled by the column name.
    pub fn set_param(self, column: &str) -> Self {
        self.set(column, Parameter::new(column))
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn build(self) -> SqlResult<SqlUpdate> {
        if self.assignments.is_empty() {
            return Err(SqlError::invalid("update", "no columns to set"));
        }
        Ok(SqlUpdate {
            table: self.table,
            assignments: self.assignments,
            condition: single_condition(self.conditions)?,
        })
    }
}

// ============================================================================
// DELETE
// ============================================================================

/// DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlDelete {
    table: FromTable,
    condition: Option<Condition>,
}

impl SqlDelete {
    pub fn from(table: FromTable) -> SqlDeleteBuilder {
        SqlDeleteBuilder {
            table,
            conditions: Vec::new(),
        }
    }

    pub fn target(&self) -> &FromTable {
        &self.table
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

#[derive(Debug, Clone)]
#[must_use = "builders have no effect until built"]
pub struct SqlDeleteBuilder {
    table: FromTable,
    conditions: Vec<Condition>,
}

impl SqlDeleteBuilder {
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn build(self) -> SqlResult<SqlDelete> {
        Ok(SqlDelete {
            table: self.table,
            condition: single_condition(self.conditions)?,
        })
    }
}
