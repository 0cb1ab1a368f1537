//! Declarative schema files.
//!
//! A TOML document lists sequences, tables and join tables; it converts to
//! the DDL statements that create (or drop) them.
//!
//! ```toml
//! [[sequences]]
//! name = "citizen_seq"
//!
//! [[tables]]
//! name = "address"
//! primary_key = { columns = [{ name = "id", type = "bigint" }] }
//!
//! [[tables.columns]]
//! name = "street"
//! type = "varchar"
//! length = 100
//!
//! [[tables]]
//! name = "citizen"
//! primary_key = { columns = [{ name = "id", type = "bigint" }], identity = true }
//!
//! [[tables.foreign_keys]]
//! references = "address"
//! columns = ["address_id"]
//! ```
//!
//! Foreign key columns take their type from the referenced primary key, in
//! the key's constraint order.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sql::ddl::{
    ColumnDeclaration, ForeignKeyDeclaration, JdbcDdlData, JdbcJoinColumnMapping,
    SqlCreateJoinTable, SqlCreateSequence, SqlCreateTable, SqlDropSequence, SqlDropTable, SqlPk,
};
use crate::sql::error::{SqlError, SqlResult};
use crate::sql::statement::SqlStatement;
use crate::sql::types::DdlType;

/// Root of a schema file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SchemaDefinition {
    pub sequences: Vec<SequenceDefinition>,
    pub tables: Vec<TableDefinition>,
    pub join_tables: Vec<JoinTableDefinition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SequenceDefinition {
    pub name: String,
    #[serde(default)]
    pub initial_value: Option<i64>,
    #[serde(default)]
    pub allocation_size: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub length: Option<u32>,
    #[serde(default)]
    pub precision: Option<u32>,
    #[serde(default)]
    pub scale: Option<u32>,
    #[serde(default)]
    pub nullable: Option<bool>,
    /// Verbatim type, replaces the mapped one.
    #[serde(default)]
    pub definition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PrimaryKeyDefinition {
    pub columns: Vec<ColumnDefinition>,
    #[serde(default)]
    pub identity: bool,
    /// Column order of the `primary key (...)` clause; declaration order if absent.
    #[serde(default)]
    pub constraint_order: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ForeignKeyDefinition {
    pub references: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub nullable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TableDefinition {
    pub name: String,
    pub primary_key: PrimaryKeyDefinition,
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyDefinition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JoinTableDefinition {
    pub name: String,
    pub foreign_keys: Vec<ForeignKeyDefinition>,
}

impl SchemaDefinition {
    pub fn from_toml(content: &str) -> SqlResult<Self> {
        toml::from_str(content).map_err(|e| SqlError::Schema(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> SqlResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| SqlError::Schema(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Creation statements: sequences, then tables, then join tables.
    pub fn to_statements(&self) -> SqlResult<Vec<SqlStatement>> {
        let mut statements: Vec<SqlStatement> = Vec::new();

        for seq in &self.sequences {
            let mut create = SqlCreateSequence::new(&seq.name);
            if let Some(initial) = seq.initial_value {
                create = create.initial_value(initial);
            }
            if let Some(size) = seq.allocation_size {
                create = create.allocation_size(size);
            }
            statements.push(create.into());
        }

        for table in &self.tables {
            let mut create = SqlCreateTable::new(&table.name, self.primary_key(table)?);
            for column in &table.columns {
                create = create.column(column_declaration(column)?);
            }
            for fk in &table.foreign_keys {
                create = create.foreign_key(self.foreign_key(fk)?);
            }
            statements.push(create.into());
        }

        for join_table in &self.join_tables {
            let foreign_keys = join_table
                .foreign_keys
                .iter()
                .map(|fk| self.foreign_key(fk))
                .collect::<SqlResult<Vec<_>>>()?;
            statements.push(SqlCreateJoinTable::new(&join_table.name, foreign_keys).into());
        }

        debug!(
            sequences = self.sequences.len(),
            tables = self.tables.len(),
            join_tables = self.join_tables.len(),
            "converted schema"
        );
        Ok(statements)
    }

    /// Drop statements in reverse dependency order.
    pub fn to_drop_statements(&self) -> Vec<SqlStatement> {
        let join_tables = self.join_tables.iter().rev().map(|t| &t.name);
        let tables = self.tables.iter().rev().map(|t| &t.name);
        let mut statements: Vec<SqlStatement> = join_tables
            .chain(tables)
            .map(|name| SqlStatement::from(SqlDropTable::new(name)))
            .collect();
        statements.extend(
            self.sequences
                .iter()
                .map(|s| SqlStatement::from(SqlDropSequence::new(&s.name))),
        );
        statements
    }

    fn table(&self, name: &str) -> SqlResult<&TableDefinition> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| SqlError::Schema(format!("foreign key references unknown table '{}'", name)))
    }

    fn primary_key(&self, table: &TableDefinition) -> SqlResult<SqlPk> {
        let pk = &table.primary_key;
        let mut columns = pk
            .columns
            .iter()
            .map(column_declaration)
            .collect::<SqlResult<Vec<_>>>()?;

        if pk.identity && columns.len() != 1 {
            return Err(SqlError::Schema(format!(
                "identity key of table '{}' must have exactly one column",
                table.name
            )));
        }

        match (columns.len(), &pk.constraint_order) {
            (1, None) => match columns.pop() {
                Some(column) if pk.identity => Ok(SqlPk::identity(column)),
                Some(column) => Ok(SqlPk::simple(column)),
                None => Err(SqlError::invalid("create table", "primary key has no columns")),
            },
            (_, None) => SqlPk::composite(columns),
            (_, Some(order)) => SqlPk::composite_ordered(columns, order.clone()),
        }
    }

    fn foreign_key(&self, fk: &ForeignKeyDefinition) -> SqlResult<ForeignKeyDeclaration> {
        let referenced = self.table(&fk.references)?;
        let pk = self.primary_key(referenced)?;

        let key_columns = pk.constraint_column_names();
        if key_columns.len() != fk.columns.len() {
            return Err(SqlError::JoinColumnCountMismatch {
                expected: key_columns.len(),
                actual: fk.columns.len(),
            });
        }

        let mut join_columns = Vec::with_capacity(fk.columns.len());
        for (join_name, key_name) in fk.columns.iter().zip(key_columns) {
            let key = pk
                .columns()
                .into_iter()
                .find(|c| c.name == key_name)
                .ok_or_else(|| SqlError::Schema(format!("unknown key column '{}'", key_name)))?;
            let mut column = key.renamed(join_name.as_str());
            let mut ddl = column.ddl_data.take().unwrap_or_default();
            ddl.nullable = fk.nullable;
            column.ddl_data = Some(ddl);
            join_columns.push(column);
        }

        let mapping = JdbcJoinColumnMapping::for_pk(join_columns, pk, fk.unique)?;
        Ok(ForeignKeyDeclaration::new(mapping, &fk.references))
    }
}

fn column_declaration(column: &ColumnDefinition) -> SqlResult<ColumnDeclaration> {
    let database_type = DdlType::parse(&column.type_name).ok_or_else(|| {
        SqlError::Schema(format!(
            "unknown column type '{}' for column '{}'",
            column.type_name, column.name
        ))
    })?;

    let ddl = JdbcDdlData {
        column_definition: column.definition.clone(),
        length: column.length,
        precision: column.precision,
        scale: column.scale,
        nullable: column.nullable,
    };
    let declaration = ColumnDeclaration::new(&column.name, database_type);
    Ok(if ddl == JdbcDdlData::default() {
        declaration
    } else {
        declaration.with_ddl(ddl)
    })
}
