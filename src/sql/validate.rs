//! Syntax check for generated SQL.
//!
//! Parses emitted text with sqlparser-rs, using the closest parser dialect
//! for each target. Used by the CLI `--check` flag and by the test suites
//! to make sure rendered statements stay parseable.

use sqlparser::dialect::{GenericDialect, MySqlDialect, PostgreSqlDialect};
use sqlparser::parser::Parser;

use super::dialect::Dialect;

/// Validates that a SQL string is syntactically valid for the given dialect.
///
/// Derby, H2 and Oracle have no sqlparser dialect and are checked with the
/// generic parser.
///
/// # Example
///
/// ```ignore
/// use sqlmodel::sql::validate::validate_sql;
/// use sqlmodel::sql::dialect::Dialect;
///
/// validate_sql("select c.name from citizen AS c", Dialect::Postgres).unwrap();
/// ```
pub fn validate_sql(sql: &str, dialect: Dialect) -> Result<(), String> {
    let parser_dialect: Box<dyn sqlparser::dialect::Dialect> = match dialect {
        Dialect::Postgres => Box::new(PostgreSqlDialect {}),
        Dialect::MySql | Dialect::MariaDb => Box::new(MySqlDialect {}),
        Dialect::Ansi | Dialect::Derby | Dialect::H2 | Dialect::Oracle => Box::new(GenericDialect {}),
    };

    Parser::parse_sql(&*parser_dialect, sql)
        .map(|_| ())
        .map_err(|e| format!("Invalid SQL for {}: {}\nSQL: {}", dialect, e, sql))
}
