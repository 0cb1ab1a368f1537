//! ANSI SQL dialect - base reference implementation.
//!
//! Every hook keeps its default: `||` concatenation, TRUE/FALSE literals,
//! `offset ... fetch next ...` pagination and `VALUES (NEXT VALUE FOR s)`.

use super::SqlDialect;

/// ANSI SQL dialect (the generic default).
#[derive(Debug, Clone, Copy)]
pub struct Ansi;

impl SqlDialect for Ansi {
    fn name(&self) -> &'static str {
        "ansi"
    }
}
