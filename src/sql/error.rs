//! Errors raised while building or exporting SQL statements.
//!
//! Generation is a pure transformation: it either produces SQL text or
//! fails with one of these errors. None of them are retryable.

/// Error type for statement building and SQL generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SqlError {
    #[error("Select statement has no from clause")]
    MissingFrom,

    #[error("Expected a single top-level condition, got {count}; combine them with an and/or node")]
    MultipleConditions { count: usize },

    #[error("Varchar length not specified for column '{column}'")]
    VarcharLengthNotSpecified { column: String },

    #[error("{feature} is not supported by the {dialect} dialect")]
    Unsupported {
        dialect: &'static str,
        feature: String,
    },

    #[error("Cannot render non-finite float literal: {value}")]
    NonFiniteLiteral { value: String },

    #[error("Join column count mismatch: referenced primary key has {expected} column(s), got {actual}")]
    JoinColumnCountMismatch { expected: usize, actual: usize },

    #[error("Invalid {statement} statement: {what}")]
    EmptyStatement {
        statement: &'static str,
        what: String,
    },

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    #[error("Invalid schema definition: {0}")]
    Schema(String),
}

impl SqlError {
    pub(crate) fn unsupported(dialect: &'static str, feature: impl Into<String>) -> Self {
        SqlError::Unsupported {
            dialect,
            feature: feature.into(),
        }
    }

    pub(crate) fn invalid(statement: &'static str, what: impl Into<String>) -> Self {
        SqlError::EmptyStatement {
            statement,
            what: what.into(),
        }
    }
}

pub type SqlResult<T> = Result<T, SqlError>;
