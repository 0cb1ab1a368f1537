//! DDL (Data Definition Language) statements.
//!
//! Tables, join tables, sequences and the column/key declarations they are
//! made of. Rendering lives in the generator; these are plain values.
//!
//! # Examples
//!
//! ```ignore
//! use sqlmodel::sql::ddl::{ColumnDeclaration, JdbcDdlData, SqlCreateTable, SqlPk};
//! use sqlmodel::sql::types::DdlType;
//!
//! // create table citizen (id bigint not null, name varchar(50), primary key (id))
//! let table = SqlCreateTable::new(
//!     "citizen",
//!     SqlPk::simple(ColumnDeclaration::new("id", DdlType::Long)),
//! )
//! .column(ColumnDeclaration::new("name", DdlType::String).with_ddl(JdbcDdlData::length(50)));
//! ```

use serde::{Deserialize, Serialize};

use super::error::{SqlError, SqlResult};
pub use super::types::DdlType;

// ============================================================================
// Column declarations
// ============================================================================

/// Optional DDL metadata attached to a column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JdbcDdlData {
    /// Verbatim type definition; replaces the mapped type when set.
    pub column_definition: Option<String>,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    /// `Some(false)` renders ` not null`.
    pub nullable: Option<bool>,
}

impl JdbcDdlData {
    pub fn length(length: u32) -> Self {
        Self {
            length: Some(length),
            ..Self::default()
        }
    }

    pub fn decimal(precision: u32, scale: u32) -> Self {
        Self {
            precision: Some(precision),
            scale: Some(scale),
            ..Self::default()
        }
    }

    pub fn column_definition(definition: impl Into<String>) -> Self {
        Self {
            column_definition: Some(definition.into()),
            ..Self::default()
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = Some(false);
        self
    }
}

/// A column in a CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDeclaration {
    pub name: String,
    pub database_type: DdlType,
    pub ddl_data: Option<JdbcDdlData>,
}

impl ColumnDeclaration {
    pub fn new(name: impl Into<String>, database_type: DdlType) -> Self {
        Self {
            name: name.into(),
            database_type,
            ddl_data: None,
        }
    }

    pub fn with_ddl(mut self, ddl: JdbcDdlData) -> Self {
        self.ddl_data = Some(ddl);
        self
    }

    /// Same type and DDL data under another name (used for join columns).
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database_type: self.database_type,
            ddl_data: self.ddl_data.clone(),
        }
    }
}

// ============================================================================
// Primary keys
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleSqlPk {
    pub column: ColumnDeclaration,
    pub identity: bool,
}

/// Composite primary key.
///
/// `constraint_columns` is the column order of the `primary key (...)`
/// clause, which may differ from declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeSqlPk {
    columns: Vec<ColumnDeclaration>,
    constraint_columns: Vec<String>,
}

impl CompositeSqlPk {
    pub fn columns(&self) -> &[ColumnDeclaration] {
        &self.columns
    }

    pub fn constraint_columns(&self) -> &[String] {
        &self.constraint_columns
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlPk {
    Simple(SimpleSqlPk),
    Composite(CompositeSqlPk),
}

impl SqlPk {
    pub fn simple(column: ColumnDeclaration) -> Self {
        SqlPk::Simple(SimpleSqlPk {
            column,
            identity: false,
        })
    }

    /// Database-generated key (`GENERATED BY DEFAULT AS IDENTITY` / `AUTO_INCREMENT`).
    pub fn identity(column: ColumnDeclaration) -> Self {
        SqlPk::Simple(SimpleSqlPk {
            column,
            identity: true,
        })
    }

    /// Composite key whose constraint order equals declaration order.
    pub fn composite(columns: Vec<ColumnDeclaration>) -> SqlResult<Self> {
        let constraint = columns.iter().map(|c| c.name.clone()).collect();
        Self::composite_ordered(columns, constraint)
    }

    /// Composite key with an explicit `primary key (...)` column order.
    pub fn composite_ordered(
        columns: Vec<ColumnDeclaration>,
        constraint_columns: Vec<String>,
    ) -> SqlResult<Self> {
        if columns.is_empty() {
            return Err(SqlError::invalid("create table", "composite primary key has no columns"));
        }
        if let Some(unknown) = constraint_columns
            .iter()
            .find(|name| !columns.iter().any(|c| &c.name == *name))
        {
            return Err(SqlError::invalid(
                "create table",
                format!("primary key constraint names unknown column '{}'", unknown),
            ));
        }
        if let Some(dup) = constraint_columns
            .iter()
            .enumerate()
            .find(|(i, name)| constraint_columns[..*i].contains(*name))
            .map(|(_, name)| name)
        {
            return Err(SqlError::invalid(
                "create table",
                format!("primary key constraint repeats column '{}'", dup),
            ));
        }
        if constraint_columns.len() != columns.len() {
            return Err(SqlError::invalid(
                "create table",
                "primary key constraint must list every key column",
            ));
        }
        Ok(SqlPk::Composite(CompositeSqlPk {
            columns,
            constraint_columns,
        }))
    }

    pub fn columns(&self) -> Vec<&ColumnDeclaration> {
        match self {
            SqlPk::Simple(pk) => vec![&pk.column],
            SqlPk::Composite(pk) => pk.columns.iter().collect(),
        }
    }

    /// Column names in `primary key (...)` order.
    pub fn constraint_column_names(&self) -> Vec<&str> {
        match self {
            SqlPk::Simple(pk) => vec![pk.column.name.as_str()],
            SqlPk::Composite(pk) => pk.constraint_columns.iter().map(String::as_str).collect(),
        }
    }

    pub fn column_count(&self) -> usize {
        match self {
            SqlPk::Simple(_) => 1,
            SqlPk::Composite(pk) => pk.columns.len(),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, SqlPk::Simple(SimpleSqlPk { identity: true, .. }))
    }
}

// ============================================================================
// Join column mappings and foreign keys
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleJdbcJoinColumnMapping {
    join_column: ColumnDeclaration,
    referenced_pk: SqlPk,
    unique: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeJdbcJoinColumnMapping {
    join_columns: Vec<ColumnDeclaration>,
    referenced_pk: SqlPk,
    unique: bool,
}

/// Join columns pointing at another table's primary key.
///
/// The number of join columns always equals the referenced key's column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JdbcJoinColumnMapping {
    Single(SingleJdbcJoinColumnMapping),
    Composite(CompositeJdbcJoinColumnMapping),
}

impl JdbcJoinColumnMapping {
    pub fn single(join_column: ColumnDeclaration, referenced_pk: SqlPk, unique: bool) -> SqlResult<Self> {
        if referenced_pk.column_count() != 1 {
            return Err(SqlError::JoinColumnCountMismatch {
                expected: referenced_pk.column_count(),
                actual: 1,
            });
        }
        Ok(JdbcJoinColumnMapping::Single(SingleJdbcJoinColumnMapping {
            join_column,
            referenced_pk,
            unique,
        }))
    }

    pub fn composite(
        join_columns: Vec<ColumnDeclaration>,
        referenced_pk: SqlPk,
        unique: bool,
    ) -> SqlResult<Self> {
        if join_columns.len() != referenced_pk.column_count() {
            return Err(SqlError::JoinColumnCountMismatch {
                expected: referenced_pk.column_count(),
                actual: join_columns.len(),
            });
        }
        Ok(JdbcJoinColumnMapping::Composite(CompositeJdbcJoinColumnMapping {
            join_columns,
            referenced_pk,
            unique,
        }))
    }

    /// Build the mapping that matches the key's shape.
    pub fn for_pk(join_columns: Vec<ColumnDeclaration>, referenced_pk: SqlPk, unique: bool) -> SqlResult<Self> {
        let mut columns = join_columns;
        if matches!(referenced_pk, SqlPk::Simple(_)) && columns.len() == 1 {
            if let Some(column) = columns.pop() {
                return Self::single(column, referenced_pk, unique);
            }
        }
        Self::composite(columns, referenced_pk, unique)
    }

    pub fn join_columns(&self) -> Vec<&ColumnDeclaration> {
        match self {
            JdbcJoinColumnMapping::Single(m) => vec![&m.join_column],
            JdbcJoinColumnMapping::Composite(m) => m.join_columns.iter().collect(),
        }
    }

    pub fn referenced_pk(&self) -> &SqlPk {
        match self {
            JdbcJoinColumnMapping::Single(m) => &m.referenced_pk,
            JdbcJoinColumnMapping::Composite(m) => &m.referenced_pk,
        }
    }

    pub fn is_unique(&self) -> bool {
        match self {
            JdbcJoinColumnMapping::Single(m) => m.unique,
            JdbcJoinColumnMapping::Composite(m) => m.unique,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDeclaration {
    pub mapping: JdbcJoinColumnMapping,
    pub referenced_table: String,
}

impl ForeignKeyDeclaration {
    pub fn new(mapping: JdbcJoinColumnMapping, referenced_table: impl Into<String>) -> Self {
        Self {
            mapping,
            referenced_table: referenced_table.into(),
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "DDL statements have no effect until exported"]
pub struct SqlCreateTable {
    pub table_name: String,
    pub pk: SqlPk,
    pub columns: Vec<ColumnDeclaration>,
    pub foreign_keys: Vec<ForeignKeyDeclaration>,
}

impl SqlCreateTable {
    pub fn new(table_name: impl Into<String>, pk: SqlPk) -> Self {
        Self {
            table_name: table_name.into(),
            pk,
            columns: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    pub fn column(mut self, column: ColumnDeclaration) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnDeclaration>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn foreign_key(mut self, fk: ForeignKeyDeclaration) -> Self {
        self.foreign_keys.push(fk);
        self
    }
}

/// CREATE TABLE for a many-to-many join table: only foreign key columns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "DDL statements have no effect until exported"]
pub struct SqlCreateJoinTable {
    pub table_name: String,
    pub foreign_keys: Vec<ForeignKeyDeclaration>,
}

impl SqlCreateJoinTable {
    pub fn new(table_name: impl Into<String>, foreign_keys: Vec<ForeignKeyDeclaration>) -> Self {
        Self {
            table_name: table_name.into(),
            foreign_keys,
        }
    }
}

pub const DEFAULT_SEQUENCE_INITIAL_VALUE: i64 = 1;
pub const DEFAULT_SEQUENCE_ALLOCATION_SIZE: i64 = 50;

/// CREATE SEQUENCE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "DDL statements have no effect until exported"]
pub struct SqlCreateSequence {
    pub name: String,
    pub initial_value: i64,
    pub allocation_size: i64,
}

impl SqlCreateSequence {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_value: DEFAULT_SEQUENCE_INITIAL_VALUE,
            allocation_size: DEFAULT_SEQUENCE_ALLOCATION_SIZE,
        }
    }

    pub fn initial_value(mut self, value: i64) -> Self {
        self.initial_value = value;
        self
    }

    pub fn allocation_size(mut self, size: i64) -> Self {
        self.allocation_size = size;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlDropSequence {
    pub name: String,
}

impl SqlDropSequence {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlDropTable {
    pub name: String,
}

impl SqlDropTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
