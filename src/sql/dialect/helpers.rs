//! Shared helper functions for SQL dialect implementations.
//!
//! This module provides reusable building blocks that dialects can compose
//! to implement the `SqlDialect` trait with minimal duplication.

use crate::sql::condition::ConditionType;
use crate::sql::query::Fetch;
use crate::sql::token::{Token, TokenStream};
use crate::sql::types::{DdlType, TypeSize};

// =============================================================================
// Identifier Quoting
// =============================================================================

/// Quote identifier with double quotes (ANSI style).
/// Used by: ANSI, Derby, H2, Oracle, Postgres
pub fn quote_double(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote identifier with backticks.
/// Used by: MySQL, MariaDB
pub fn quote_backtick(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

// =============================================================================
// String Quoting
// =============================================================================

/// Quote string with single quotes (standard SQL).
/// Used by: All dialects
pub fn quote_string_single(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Quote string with single quotes, also doubling backslashes.
/// Used by: MySQL, MariaDB (backslash is an escape character there)
pub fn quote_string_backslash(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "''"))
}

// =============================================================================
// Boolean Formatting
// =============================================================================

/// Format boolean as keyword TRUE/FALSE.
/// Used by: ANSI, Derby, H2, Postgres
pub fn format_bool_keyword(b: bool) -> &'static str {
    if b {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Format boolean as numeric 1/0.
/// Used by: MySQL, MariaDB, Oracle
pub fn format_bool_numeric(b: bool) -> &'static str {
    if b {
        "1"
    } else {
        "0"
    }
}

// =============================================================================
// Condition Operators
// =============================================================================

/// Operator keyword for a condition type.
///
/// `IsTrue`/`IsFalse` map to `=`; the generator appends the dialect's boolean literal.
pub fn condition_operator(ct: ConditionType) -> &'static str {
    match ct {
        ConditionType::Equal => "=",
        ConditionType::NotEqual => "<>",
        ConditionType::GreaterThan => ">",
        ConditionType::GreaterThanOrEqualTo => ">=",
        ConditionType::LessThan => "<",
        ConditionType::LessThanOrEqualTo => "<=",
        ConditionType::IsNull => "is null",
        ConditionType::IsNotNull => "is not null",
        ConditionType::IsTrue | ConditionType::IsFalse => "=",
        ConditionType::Exists => "exists",
        ConditionType::NotExists => "not exists",
        ConditionType::Between => "between",
        ConditionType::NotBetween => "not between",
        ConditionType::Like => "like",
        ConditionType::NotLike => "not like",
        ConditionType::In => "in",
        ConditionType::NotIn => "not in",
        ConditionType::And => "and",
        ConditionType::Or => "or",
        ConditionType::Not => "not",
    }
}

// =============================================================================
// Functions
// =============================================================================

/// `LOCATE(pattern, input[, from])`
/// Used by: ANSI, Derby, H2, MySQL, MariaDB
pub fn emit_locate_standard(
    pattern: TokenStream,
    input: TokenStream,
    from: Option<TokenStream>,
) -> TokenStream {
    let mut args = vec![pattern, input];
    args.extend(from);
    emit_function_call("LOCATE", &args)
}

/// `INSTR(input, pattern[, from])`
/// Used by: Oracle
pub fn emit_locate_instr(
    pattern: TokenStream,
    input: TokenStream,
    from: Option<TokenStream>,
) -> TokenStream {
    let mut args = vec![input, pattern];
    args.extend(from);
    emit_function_call("INSTR", &args)
}

/// `NAME(a, b, ...)`
pub fn emit_function_call(name: &'static str, args: &[TokenStream]) -> TokenStream {
    let mut ts = TokenStream::new();
    ts.push(Token::FunctionName(name))
        .lparen()
        .append_comma_separated(args)
        .rparen();
    ts
}

// =============================================================================
// Pagination
// =============================================================================

/// Emit `offset N rows fetch next M rows only` (SQL:2008).
/// Used by: ANSI, Derby, H2, Oracle
pub fn emit_fetch_standard(fetch: Fetch) -> TokenStream {
    let mut ts = TokenStream::new();

    if let Some(off) = fetch.offset {
        ts.push(Token::Offset)
            .space()
            .push(Token::LitUInt(off))
            .space()
            .push(Token::Rows);
    }

    if let Some(lim) = fetch.limit {
        if fetch.offset.is_some() {
            ts.space();
        }
        ts.push(Token::Fetch)
            .space()
            .push(Token::Next)
            .space()
            .push(Token::LitUInt(lim))
            .space()
            .push(Token::Rows)
            .space()
            .push(Token::Only);
    }

    ts
}

/// Emit `limit M offset N`.
/// Used by: Postgres
pub fn emit_limit_offset(fetch: Fetch) -> TokenStream {
    let mut ts = TokenStream::new();

    if let Some(lim) = fetch.limit {
        ts.push(Token::Limit)
            .space()
            .push(Token::LitUInt(lim));
    }

    if let Some(off) = fetch.offset {
        if fetch.limit.is_some() {
            ts.space();
        }
        ts.push(Token::Offset)
            .space()
            .push(Token::LitUInt(off));
    }

    ts
}

/// Emit `limit M offset N`; an offset alone gets the largest row count,
/// since MySQL has no OFFSET without LIMIT.
/// Used by: MySQL, MariaDB
pub fn emit_limit_offset_mysql(fetch: Fetch) -> TokenStream {
    if fetch.limit.is_none() && fetch.offset.is_some() {
        let mut ts = TokenStream::new();
        ts.push(Token::Limit).space().push(Token::LitUInt(u64::MAX)).space();
        ts.append(&emit_limit_offset(fetch));
        return ts;
    }
    emit_limit_offset(fetch)
}

// =============================================================================
// DDL
// =============================================================================

/// Standard type mapping.
/// Used by: ANSI, H2, Postgres (and as the base for the others)
pub fn emit_data_type_standard(ty: DdlType, size: TypeSize) -> String {
    match ty {
        DdlType::Integer => "integer".into(),
        DdlType::Long => "bigint".into(),
        DdlType::String => format!("varchar({})", size.length),
        DdlType::Float => "real".into(),
        DdlType::Double => "double precision".into(),
        DdlType::BigDecimal => format!("decimal({},{})", size.precision, size.scale),
        DdlType::Date => "date".into(),
        DdlType::Timestamp => "timestamp".into(),
        DdlType::Time => "time".into(),
        DdlType::Boolean => "boolean".into(),
    }
}

/// Used by: Derby
pub fn emit_data_type_derby(ty: DdlType, size: TypeSize) -> String {
    match ty {
        DdlType::Double => "double".into(),
        other => emit_data_type_standard(other, size),
    }
}

/// Used by: MySQL, MariaDB
pub fn emit_data_type_mysql(ty: DdlType, size: TypeSize) -> String {
    match ty {
        DdlType::Timestamp => "datetime".into(),
        other => emit_data_type_standard(other, size),
    }
}

/// Used by: Oracle
pub fn emit_data_type_oracle(ty: DdlType, size: TypeSize) -> String {
    match ty {
        DdlType::Integer => "number(10)".into(),
        DdlType::Long => "number(19)".into(),
        DdlType::String => format!("varchar2({})", size.length),
        DdlType::Float => "binary_float".into(),
        DdlType::Double => "binary_double".into(),
        DdlType::BigDecimal => format!("number({},{})", size.precision, size.scale),
        DdlType::Boolean => "number(1)".into(),
        // Oracle has no TIME type
        DdlType::Time => "date".into(),
        other => emit_data_type_standard(other, size),
    }
}

// =============================================================================
// Sequences
// =============================================================================

/// `VALUES (NEXT VALUE FOR seq)`
/// Used by: ANSI, Derby
pub fn next_value_values_paren(name: &str) -> String {
    format!("VALUES (NEXT VALUE FOR {})", name)
}

/// `VALUES NEXT VALUE FOR seq`
/// Used by: H2
pub fn next_value_values(name: &str) -> String {
    format!("VALUES NEXT VALUE FOR {}", name)
}
