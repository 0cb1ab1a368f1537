//! PostgreSQL SQL dialect.
//!
//! PostgreSQL features:
//! - ANSI identifier quoting (`"`)
//! - Native boolean type (TRUE/FALSE)
//! - LIMIT ... OFFSET ... for pagination
//! - `FOR SHARE` read locks
//! - `POSITION(p IN s)` instead of LOCATE (no start position)
//! - `select nextval('seq')`

use super::helpers;
use super::SqlDialect;
use crate::sql::error::{SqlError, SqlResult};
use crate::sql::query::{Fetch, ForUpdate};
use crate::sql::token::{Token, TokenStream};

/// PostgreSQL SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct Postgres;

impl SqlDialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn emit_locate(
        &self,
        pattern: TokenStream,
        input: TokenStream,
        from: Option<TokenStream>,
    ) -> SqlResult<TokenStream> {
        if from.is_some() {
            return Err(SqlError::unsupported(
                self.name(),
                "LOCATE with a start position",
            ));
        }
        let mut ts = TokenStream::new();
        ts.push(Token::FunctionName("POSITION"))
            .lparen()
            .append(&pattern)
            .space()
            .raw("IN")
            .space()
            .append(&input)
            .rparen();
        Ok(ts)
    }

    fn emit_lock(&self, lock: ForUpdate) -> TokenStream {
        let mut ts = TokenStream::new();
        match lock {
            ForUpdate::PessimisticRead => ts.raw("FOR SHARE"),
            ForUpdate::PessimisticWrite => ts.raw("FOR UPDATE"),
        };
        ts
    }

    fn emit_fetch(&self, fetch: Fetch) -> TokenStream {
        helpers::emit_limit_offset(fetch)
    }

    fn sequence_next_value(&self, name: &str) -> String {
        format!("select nextval('{}')", name.replace('\'', "''"))
    }
}
