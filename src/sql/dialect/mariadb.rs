//! MariaDB SQL dialect.
//!
//! MySQL-compatible, but with sequences (10.3+): `select nextval(s)`.

use super::helpers;
use super::mysql::{mysql_identity, mysql_insert_defaults, mysql_lock, mysql_renders_like_escape};
use super::SqlDialect;
use crate::sql::name::IdentifierQuoting;
use crate::sql::query::{Fetch, ForUpdate};
use crate::sql::token::TokenStream;
use crate::sql::types::{DdlType, TypeSize};

/// MariaDB SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct MariaDb;

impl SqlDialect for MariaDb {
    fn name(&self) -> &'static str {
        "mariadb"
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

    fn sequence_next_value(&self, name: &str) -> String {
        format!("select nextval({})", name)
    }
}
