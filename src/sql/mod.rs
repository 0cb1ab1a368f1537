//! SQL statement model and generator.
//!
//! Statements are built as plain values and rendered by a
//! [`SqlStatementGenerator`] configured for one target database.
//!
//! - [`expr`] - values, literals, parameters, functions
//! - [`condition`] - predicates and logic nodes
//! - [`query`] - SELECT statements and their clauses
//! - [`dml`] - INSERT, UPDATE, DELETE
//! - [`ddl`] - CREATE/DROP TABLE, join tables, sequences
//! - [`name`] - identifier rendering (aliases, quoting)
//! - [`token`] - token types for SQL generation
//! - [`dialect`] - per-database rendering hooks
//! - [`generator`] - the renderer itself

pub mod condition;
pub mod ddl;
pub mod dialect;
pub mod dml;
pub mod error;
pub mod expr;
pub mod generator;
pub mod name;
pub mod query;
pub mod statement;
pub mod token;
pub mod types;
pub mod validate;

pub use condition::{and, exists, not, not_exists, or, Condition, ConditionExt, ConditionType};
pub use dialect::{Dialect, SqlDialect};
pub use error::{SqlError, SqlResult};
pub use expr::{
    abs, anonymous_param, avg, coalesce, concat, count, count_distinct, count_star,
    current_date, current_time, current_timestamp, length, lit_bool, lit_float, lit_int,
    lit_null, lit_str, locate, lower, max, min, modulo, negation, nullif, param, sqrt,
    substring, sum, table_col, trim, upper, Column, FromTable, Function, Literal, Parameter,
    TableColumn, TrimType, Value, ValueExt,
};
pub use generator::{ExportedStatement, SqlStatementGenerator};
pub use name::{DefaultNameTranslator, IdentifierQuoting, NameTranslator, OracleNameTranslator};
pub use query::{
    Fetch, ForUpdate, FromJoin, FromSource, GroupBy, JoinType, OrderBy, OrderByType, SelectItem,
    SqlSelect, SqlSelectBuilder, SubQuery,
};
pub use statement::SqlStatement;
pub use token::{Token, TokenStream};
pub use types::DdlType;

pub use ddl::{
    ColumnDeclaration, ForeignKeyDeclaration, JdbcDdlData, JdbcJoinColumnMapping, SqlCreateJoinTable,
    SqlCreateSequence, SqlCreateTable, SqlDropSequence, SqlDropTable, SqlPk,
};
pub use dml::{SqlDelete, SqlInsert, SqlUpdate};
