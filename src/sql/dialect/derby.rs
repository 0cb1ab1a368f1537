//! Apache Derby SQL dialect.
//!
//! Derby differences from ANSI:
//! - `SUBSTR` instead of `SUBSTRING`
//! - `double` rather than `double precision`
//! - Locking via `FOR UPDATE WITH RS`
//! - `drop sequence s restrict`
//! - No DEFAULT VALUES insert form, use `values (default)`

use super::helpers;
use super::SqlDialect;
use crate::sql::query::ForUpdate;
use crate::sql::token::{Token, TokenStream};
use crate::sql::types::{DdlType, TypeSize};

/// Apache Derby SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct Derby;

impl SqlDialect for Derby {
    fn name(&self) -> &'static str {
        "derby"
    }

    fn substring_function(&self) -> &'static str {
        "SUBSTR"
    }

    fn emit_lock(&self, _lock: ForUpdate) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.raw("FOR UPDATE WITH RS");
        ts
    }

    fn emit_insert_defaults(&self) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Values)
            .space()
            .lparen()
            .push(Token::Default)
            .rparen();
        ts
    }

    fn emit_data_type(&self, ty: DdlType, size: TypeSize) -> String {
        helpers::emit_data_type_derby(ty, size)
    }

    fn emit_drop_sequence(&self, name: &str) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Drop)
            .space()
            .push(Token::Sequence)
            .space()
            .ident(name)
            .space()
            .raw("restrict");
        ts
    }
}
