//! MySQL SQL dialect.
//!
//! MySQL differences from ANSI:
//! - Backtick identifier quoting (`` `name` ``)
//! - Boolean is TINYINT(1), returns 1/0
//! - `||` is logical OR by default (use CONCAT())
//! - Backslash is the default LIKE escape, so `escape '\'` is never emitted
//! - LIMIT ... OFFSET ... for pagination
//! - UPDATE/DELETE targets are not aliased
//! - AUTO_INCREMENT identity columns
//! - No sequences

use super::helpers;
use super::SqlDialect;
use crate::sql::name::IdentifierQuoting;
use crate::sql::query::{Fetch, ForUpdate};
use crate::sql::token::{Token, TokenStream};
use crate::sql::types::{DdlType, TypeSize};

/// MySQL SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct MySql;

impl SqlDialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quoting(&self) -> IdentifierQuoting {
        IdentifierQuoting::Backtick
    }

    fn quote_string(&self, s: &str) -> String {
        helpers::quote_string_backslash(s)
    }

    fn format_bool(&self, b: bool) -> &'static str {
        helpers::format_bool_numeric(b)
    }

    fn renders_like_escape(&self, escape: char) -> bool {
        mysql_renders_like_escape(escape)
    }

    fn supports_concat_operator(&self) -> bool {
        // MySQL || is OR by default, use CONCAT() instead
        false
    }

    fn current_date(&self) -> &'static str {
        "CURRENT_DATE()"
    }

    fn current_time(&self) -> &'static str {
        "CURRENT_TIME()"
    }

    fn current_timestamp(&self) -> &'static str {
        "CURRENT_TIMESTAMP()"
    }

    fn emit_lock(&self, lock: ForUpdate) -> TokenStream {
        mysql_lock(lock)
    }

    fn emit_fetch(&self, fetch: Fetch) -> TokenStream {
        helpers::emit_limit_offset_mysql(fetch)
    }

    fn emit_insert_defaults(&self) -> TokenStream {
        mysql_insert_defaults()
    }

    fn aliases_dml_target(&self) -> bool {
        false
    }

    fn emit_data_type(&self, ty: DdlType, size: TypeSize) -> String {
        helpers::emit_data_type_mysql(ty, size)
    }

    fn emit_identity(&self) -> TokenStream {
        mysql_identity()
    }

    fn supports_sequences(&self) -> bool {
        false
    }
}

// Shared with MariaDB.

pub(super) fn mysql_renders_like_escape(escape: char) -> bool {
    escape != '\\'
}

pub(super) fn mysql_lock(lock: ForUpdate) -> TokenStream {
    let mut ts = TokenStream::new();
    match lock {
        ForUpdate::PessimisticRead => ts.raw("FOR SHARE"),
        ForUpdate::PessimisticWrite => ts.raw("FOR UPDATE"),
    };
    ts
}

pub(super) fn mysql_insert_defaults() -> TokenStream {
    let mut ts = TokenStream::new();
    ts.lparen()
        .rparen()
        .space()
        .push(Token::Values)
        .space()
        .lparen()
        .rparen();
    ts
}

pub(super) fn mysql_identity() -> TokenStream {
    let mut ts = TokenStream::new();
    ts.push(Token::Not)
        .space()
        .push(Token::Null)
        .space()
        .raw("AUTO_INCREMENT");
    ts
}
