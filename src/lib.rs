//! # sqlmodel
//!
//! A SQL statement model and a dialect-aware generator.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Statement model (select, dml, ddl values)         │
//! │   built with builders / constructor helpers, or from     │
//! │   a declarative schema file                              │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [SqlStatementGenerator]
//! ┌─────────────────────────────────────────────────────────┐
//! │        TokenStream + NameTranslator + SqlDialect hooks   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [serialize]
//! ┌─────────────────────────────────────────────────────────┐
//! │          SQL text (+ ordered placeholder labels)         │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod schema;
pub mod sql;

// Re-export SQL submodules at crate level
pub use sql::condition;
pub use sql::ddl;
pub use sql::dialect;
pub use sql::dml;
pub use sql::expr;
pub use sql::generator;
pub use sql::query;
pub use sql::token;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::condition::{
        and, exists, not, not_exists, or, Condition, ConditionExt, ConditionType,
    };
    pub use crate::ddl::{
        ColumnDeclaration, ForeignKeyDeclaration, JdbcDdlData, JdbcJoinColumnMapping,
        SqlCreateJoinTable, SqlCreateSequence, SqlCreateTable, SqlDropSequence, SqlDropTable,
        SqlPk,
    };
    pub use crate::dialect::{Dialect, SqlDialect};
    pub use crate::dml::{SqlDelete, SqlInsert, SqlUpdate};
    pub use crate::expr::{
        // Constructors
        abs,
        anonymous_param,
        avg,
        coalesce,
        concat,
        count,
        count_distinct,
        count_star,
        current_date,
        current_time,
        current_timestamp,
        length,
        lit_bool,
        lit_float,
        lit_int,
        lit_null,
        lit_str,
        locate,
        lower,
        max,
        min,
        modulo,
        negation,
        nullif,
        param,
        sqrt,
        substring,
        sum,
        table_col,
        trim,
        upper,
        // Types
        Column,
        FromTable,
        Function,
        Literal,
        TableColumn,
        TrimType,
        Value,
        ValueExt,
    };
    pub use crate::generator::{ExportedStatement, SqlStatementGenerator};
    pub use crate::query::{
        Fetch, ForUpdate, FromJoin, FromSource, GroupBy, JoinType, OrderBy, OrderByType,
        SelectItem, SqlSelect, SubQuery,
    };
    pub use crate::sql::error::{SqlError, SqlResult};
    pub use crate::sql::name::{IdentifierQuoting, NameTranslator};
    pub use crate::sql::statement::SqlStatement;
    pub use crate::sql::types::DdlType;
}

// Also export at crate root for convenience
pub use dialect::Dialect;
pub use generator::SqlStatementGenerator;
pub use sql::error::{SqlError, SqlResult};
pub use sql::statement::SqlStatement;
