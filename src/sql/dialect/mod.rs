//! SQL Dialect definitions and formatting rules.
//!
//! This module provides a trait-based abstraction for SQL dialect differences.
//! The generator owns the rendering algorithm; each dialect overrides a small
//! set of hooks:
//!
//! - Identifier quoting: `"` (ANSI/Derby/H2/Oracle/PG), `` ` `` (MySQL/MariaDB)
//! - Table aliases: `t AS a` vs `t a` (Oracle), unaliased UPDATE/DELETE targets (MySQL/MariaDB)
//! - Boolean literals: TRUE/FALSE vs 1/0
//! - String concatenation: `||` vs CONCAT()
//! - Pagination: OFFSET FETCH vs LIMIT/OFFSET
//! - Locking clauses, identity columns, column types
//! - Sequence DDL and "next value" statements
//!
//! # Usage
//!
//! ```ignore
//! use sqlmodel::sql::dialect::{Dialect, SqlDialect};
//!
//! let dialect: Dialect = "oracle".parse()?;
//! assert_eq!(dialect.sequence_next_value("citizen_seq"), "select citizen_seq.nextval from dual");
//! ```
//!
//! # Feature Support
//!
//! | Feature | ANSI | Derby | H2 | MySQL | MariaDB | Oracle | PostgreSQL |
//! |---------|------|-------|----|-------|---------|--------|------------|
//! | Sequences | ✓ | ✓ | ✓ | ❌ | ✓ | ✓ | ✓ |
//! | `\|\|` concat | ✓ | ✓ | ✓ | ❌ | ❌ | ✓ | ✓ |
//! | LOCATE start position | ✓ | ✓ | ✓ | ✓ | ✓ | ✓ (INSTR) | ❌ |
//! | Aliased UPDATE/DELETE target | ✓ | ✓ | ✓ | ❌ | ❌ | ✓ | ✓ |
//!
//! Legend: ✓ = supported, ❌ = not supported

mod ansi;
mod derby;
mod h2;
pub mod helpers;
mod mariadb;
mod mysql;
mod oracle;
mod postgres;

pub use ansi::Ansi;
pub use derby::Derby;
pub use h2::H2;
pub use mariadb::MariaDb;
pub use mysql::MySql;
pub use oracle::Oracle;
pub use postgres::Postgres;

use std::sync::Arc;

use super::condition::ConditionType;
use super::error::{SqlError, SqlResult};
use super::name::{DefaultNameTranslator, IdentifierQuoting, NameTranslator};
use super::query::{Fetch, ForUpdate};
use super::token::{Token, TokenStream};
use super::types::{DdlType, TypeSize};

/// SQL dialect trait - defines how SQL constructs are rendered.
///
/// Implementations handle dialect-specific syntax differences.
/// The default implementations follow ANSI SQL where possible.
pub trait SqlDialect: std::fmt::Debug + Send + Sync {
    /// Dialect name for display/logging.
    fn name(&self) -> &'static str;

    // =========================================================================
    // Identifier and Literal Quoting
    // =========================================================================

    /// Quote style used when identifier quoting is enabled.
    fn identifier_quoting(&self) -> IdentifierQuoting {
        IdentifierQuoting::DoubleQuote
    }

    /// Name translator used for every statement.
    fn name_translator(&self, quoting: IdentifierQuoting) -> Arc<dyn NameTranslator> {
        Arc::new(DefaultNameTranslator::with_quoting(quoting))
    }

    /// Quote a string literal.
    fn quote_string(&self, s: &str) -> String {
        helpers::quote_string_single(s)
    }

    /// Format a boolean literal.
    ///
    /// - ANSI/Derby/H2/PostgreSQL: `TRUE`/`FALSE`
    /// - MySQL/MariaDB/Oracle: `1`/`0`
    fn format_bool(&self, b: bool) -> &'static str {
        helpers::format_bool_keyword(b)
    }

    // =========================================================================
    // Conditions
    // =========================================================================

    /// Operator keyword for a condition type.
    fn condition_operator(&self, ct: ConditionType) -> &'static str {
        helpers::condition_operator(ct)
    }

    /// Rendered for an AND without children.
    fn empty_conjunction(&self) -> &'static str {
        "1=1"
    }

    /// Rendered for an OR without children.
    fn empty_disjunction(&self) -> &'static str {
        "1=2"
    }

    /// Whether `like ... escape 'c'` is emitted for this escape character.
    fn renders_like_escape(&self, _escape: char) -> bool {
        true
    }

    // =========================================================================
    // Functions
    // =========================================================================

    /// String concatenation operator.
    fn concat_operator(&self) -> &'static str {
        "||"
    }

    /// Whether `||` concatenates; otherwise `CONCAT(...)` is emitted.
    fn supports_concat_operator(&self) -> bool {
        true
    }

    fn current_date(&self) -> &'static str {
        "CURRENT_DATE"
    }

    fn current_time(&self) -> &'static str {
        "CURRENT_TIME"
    }

    fn current_timestamp(&self) -> &'static str {
        "CURRENT_TIMESTAMP"
    }

    /// `SUBSTRING` or `SUBSTR`.
    fn substring_function(&self) -> &'static str {
        "SUBSTRING"
    }

    /// Emit a string position search from already-rendered arguments.
    fn emit_locate(
        &self,
        pattern: TokenStream,
        input: TokenStream,
        from: Option<TokenStream>,
    ) -> SqlResult<TokenStream> {
        Ok(helpers::emit_locate_standard(pattern, input, from))
    }

    // =========================================================================
    // Select Clauses
    // =========================================================================

    /// Locking clause appended to a select.
    fn emit_lock(&self, _lock: ForUpdate) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.raw("FOR UPDATE");
        ts
    }

    /// Pagination clause.
    ///
    /// - ANSI/Derby/H2/Oracle: `offset N rows fetch next M rows only` (default)
    /// - MySQL/MariaDB/PostgreSQL: `limit M offset N`
    fn emit_fetch(&self, fetch: Fetch) -> TokenStream {
        helpers::emit_fetch_standard(fetch)
    }

    // =========================================================================
    // DML
    // =========================================================================

    /// Tail of an INSERT without columns, after `insert into t `.
    fn emit_insert_defaults(&self) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Default).space().push(Token::Values);
        ts
    }

    /// Whether UPDATE/DELETE targets may carry a table alias.
    fn aliases_dml_target(&self) -> bool {
        true
    }

    // =========================================================================
    // DDL Support
    // =========================================================================

    /// Emit a column type.
    fn emit_data_type(&self, ty: DdlType, size: TypeSize) -> String {
        helpers::emit_data_type_standard(ty, size)
    }

    /// Suffix after the type of an identity primary key column.
    fn emit_identity(&self) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.raw("GENERATED BY DEFAULT AS IDENTITY");
        ts
    }

    /// Decimal precision when the column gives none.
    fn default_precision(&self) -> u32 {
        19
    }

    /// Decimal scale when the column gives none.
    fn default_scale(&self) -> u32 {
        2
    }

    // =========================================================================
    // Sequences
    // =========================================================================

    fn supports_sequences(&self) -> bool {
        true
    }

    /// `create sequence s start with 1 increment by 50`
    fn emit_create_sequence(&self, name: &str, initial_value: i64, increment: i64) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Create)
            .space()
            .push(Token::Sequence)
            .space()
            .ident(name)
            .space()
            .push(Token::Start)
            .space()
            .push(Token::With)
            .space()
            .push(Token::LitInt(initial_value))
            .space()
            .push(Token::Increment)
            .space()
            .push(Token::By)
            .space()
            .push(Token::LitInt(increment));
        ts
    }

    /// `drop sequence s`
    fn emit_drop_sequence(&self, name: &str) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Drop)
            .space()
            .push(Token::Sequence)
            .space()
            .ident(name);
        ts
    }

    /// Statement that fetches the next value of a (possibly schema-qualified) sequence.
    fn sequence_next_value(&self, name: &str) -> String {
        helpers::next_value_values_paren(name)
    }
}

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Generic ANSI SQL.
    #[default]
    Ansi,
    Derby,
    H2,
    MySql,
    MariaDb,
    Oracle,
    Postgres,
}

impl Dialect {
    /// Every dialect, in display order.
    pub const ALL: [Dialect; 7] = [
        Dialect::Ansi,
        Dialect::Derby,
        Dialect::H2,
        Dialect::MySql,
        Dialect::MariaDb,
        Dialect::Oracle,
        Dialect::Postgres,
    ];

    /// Get the dialect implementation.
    pub fn dialect(&self) -> &'static dyn SqlDialect {
        match self {
            Dialect::Ansi => &Ansi,
            Dialect::Derby => &Derby,
            Dialect::H2 => &H2,
            Dialect::MySql => &MySql,
            Dialect::MariaDb => &MariaDb,
            Dialect::Oracle => &Oracle,
            Dialect::Postgres => &Postgres,
        }
    }

    /// Parse a dialect name, case-insensitively.
    pub fn parse(name: &str) -> SqlResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "ansi" | "generic" | "default" => Ok(Dialect::Ansi),
            "derby" => Ok(Dialect::Derby),
            "h2" => Ok(Dialect::H2),
            "mysql" => Ok(Dialect::MySql),
            "mariadb" => Ok(Dialect::MariaDb),
            "oracle" => Ok(Dialect::Oracle),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            _ => Err(SqlError::UnknownDialect(name.to_string())),
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s)
    }
}

// Implement SqlDialect for Dialect enum by delegating to concrete types
impl SqlDialect for Dialect {
    fn name(&self) -> &'static str {
        self.dialect().name()
    }

    fn identifier_quoting(&self) -> IdentifierQuoting {
        self.dialect().identifier_quoting()
    }

    fn name_translator(&self, quoting: IdentifierQuoting) -> Arc<dyn NameTranslator> {
        self.dialect().name_translator(quoting)
    }

    fn quote_string(&self, s: &str) -> String {
        self.dialect().quote_string(s)
    }

    fn format_bool(&self, b: bool) -> &'static str {
        self.dialect().format_bool(b)
    }

    fn condition_operator(&self, ct: ConditionType) -> &'static str {
        self.dialect().condition_operator(ct)
    }

    fn empty_conjunction(&self) -> &'static str {
        self.dialect().empty_conjunction()
    }

    fn empty_disjunction(&self) -> &'static str {
        self.dialect().empty_disjunction()
    }

    fn renders_like_escape(&self, escape: char) -> bool {
        self.dialect().renders_like_escape(escape)
    }

    fn concat_operator(&self) -> &'static str {
        self.dialect().concat_operator()
    }

    fn supports_concat_operator(&self) -> bool {
        self.dialect().supports_concat_operator()
    }

    fn current_date(&self) -> &'static str {
        self.dialect().current_date()
    }

    fn current_time(&self) -> &'static str {
        self.dialect().current_time()
    }

    fn current_timestamp(&self) -> &'static str {
        self.dialect().current_timestamp()
    }

    fn substring_function(&self) -> &'static str {
        self.dialect().substring_function()
    }

    fn emit_locate(
        &self,
        pattern: TokenStream,
        input: TokenStream,
        from: Option<TokenStream>,
    ) -> SqlResult<TokenStream> {
        self.dialect().emit_locate(pattern, input, from)
    }

    fn emit_lock(&self, lock: ForUpdate) -> TokenStream {
        self.dialect().emit_lock(lock)
    }

    fn emit_fetch(&self, fetch: Fetch) -> TokenStream {
        self.dialect().emit_fetch(fetch)
    }

    fn emit_insert_defaults(&self) -> TokenStream {
        self.dialect().emit_insert_defaults()
    }

    fn aliases_dml_target(&self) -> bool {
        self.dialect().aliases_dml_target()
    }

    fn emit_data_type(&self, ty: DdlType, size: TypeSize) -> String {
        self.dialect().emit_data_type(ty, size)
    }

    fn emit_identity(&self) -> TokenStream {
        self.dialect().emit_identity()
    }

    fn default_precision(&self) -> u32 {
        self.dialect().default_precision()
    }

    fn default_scale(&self) -> u32 {
        self.dialect().default_scale()
    }

    fn supports_sequences(&self) -> bool {
        self.dialect().supports_sequences()
    }

    fn emit_create_sequence(&self, name: &str, initial_value: i64, increment: i64) -> TokenStream {
        self.dialect().emit_create_sequence(name, initial_value, increment)
    }

    fn emit_drop_sequence(&self, name: &str) -> TokenStream {
        self.dialect().emit_drop_sequence(name)
    }

    fn sequence_next_value(&self, name: &str) -> String {
        self.dialect().sequence_next_value(name)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dialect().name())
    }
}
