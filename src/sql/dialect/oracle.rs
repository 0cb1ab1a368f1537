//! Oracle SQL dialect.
//!
//! Oracle differences from ANSI:
//! - No `AS` before table aliases
//! - No boolean type: 1/0 literals, `number(1)` columns
//! - `varchar2`, `number(p,s)`, `binary_float` / `binary_double`
//! - `INSTR(input, pattern)` instead of LOCATE, `SUBSTR` instead of SUBSTRING
//! - No TIME type (`date`, and CURRENT_TIMESTAMP for the current time)
//! - `select seq.nextval from dual`

use std::sync::Arc;

use super::helpers;
use super::SqlDialect;
use crate::sql::error::SqlResult;
use crate::sql::name::{IdentifierQuoting, NameTranslator, OracleNameTranslator};
use crate::sql::token::{Token, TokenStream};
use crate::sql::types::{DdlType, TypeSize};

/// Oracle SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct Oracle;

impl SqlDialect for Oracle {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn name_translator(&self, quoting: IdentifierQuoting) -> Arc<dyn NameTranslator> {
        Arc::new(OracleNameTranslator::with_quoting(quoting))
    }

    fn format_bool(&self, b: bool) -> &'static str {
        helpers::format_bool_numeric(b)
    }

    fn current_time(&self) -> &'static str {
        "CURRENT_TIMESTAMP"
    }

    fn substring_function(&self) -> &'static str {
        "SUBSTR"
    }

    fn emit_locate(
        &self,
        pattern: TokenStream,
        input: TokenStream,
        from: Option<TokenStream>,
    ) -> SqlResult<TokenStream> {
        Ok(helpers::emit_locate_instr(pattern, input, from))
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
        helpers::emit_data_type_oracle(ty, size)
    }

    fn sequence_next_value(&self, name: &str) -> String {
        format!("select {}.nextval from dual", name)
    }
}
