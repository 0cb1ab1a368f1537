//! The closed set of exportable statements.

use super::ddl::{
    SqlCreateJoinTable, SqlCreateSequence, SqlCreateTable, SqlDropSequence, SqlDropTable,
};
use super::dml::{SqlDelete, SqlInsert, SqlUpdate};
use super::query::SqlSelect;

/// Any statement the generator can export.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlStatement {
    Select(SqlSelect),
    Insert(SqlInsert),
    Update(SqlUpdate),
    Delete(SqlDelete),
    CreateTable(SqlCreateTable),
    CreateJoinTable(SqlCreateJoinTable),
    CreateSequence(SqlCreateSequence),
    DropSequence(SqlDropSequence),
    DropTable(SqlDropTable),
}

impl SqlStatement {
    /// Short statement kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SqlStatement::Select(_) => "select",
            SqlStatement::Insert(_) => "insert",
            SqlStatement::Update(_) => "update",
            SqlStatement::Delete(_) => "delete",
            SqlStatement::CreateTable(_) => "create table",
            SqlStatement::CreateJoinTable(_) => "create join table",
            SqlStatement::CreateSequence(_) => "create sequence",
            SqlStatement::DropSequence(_) => "drop sequence",
            SqlStatement::DropTable(_) => "drop table",
        }
    }
}

impl From<SqlSelect> for SqlStatement {
    fn from(s: SqlSelect) -> Self {
        SqlStatement::Select(s)
    }
}

impl From<SqlInsert> for SqlStatement {
    fn from(s: SqlInsert) -> Self {
        SqlStatement::Insert(s)
    }
}

impl From<SqlUpdate> for SqlStatement {
    fn from(s: SqlUpdate) -> Self {
        SqlStatement::Update(s)
    }
}

impl From<SqlDelete> for SqlStatement {
    fn from(s: SqlDelete) -> Self {
        SqlStatement::Delete(s)
    }
}

impl From<SqlCreateTable> for SqlStatement {
    fn from(s: SqlCreateTable) -> Self {
        SqlStatement::CreateTable(s)
    }
}

impl From<SqlCreateJoinTable> for SqlStatement {
    fn from(s: SqlCreateJoinTable) -> Self {
        SqlStatement::CreateJoinTable(s)
    }
}

impl From<SqlCreateSequence> for SqlStatement {
    fn from(s: SqlCreateSequence) -> Self {
        SqlStatement::CreateSequence(s)
    }
}

impl From<SqlDropSequence> for SqlStatement {
    fn from(s: SqlDropSequence) -> Self {
        SqlStatement::DropSequence(s)
    }
}

impl From<SqlDropTable> for SqlStatement {
    fn from(s: SqlDropTable) -> Self {
        SqlStatement::DropTable(s)
    }
}
