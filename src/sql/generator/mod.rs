//! SQL statement generator - renders the statement model to SQL text.
//!
//! One [`SqlStatementGenerator`] per target database. The rendering
//! algorithm lives here once; dialect differences come from the
//! [`SqlDialect`] hooks and the [`NameTranslator`] fixed at construction.
//!
//! Generation is pure: the same statement and generator always give the same
//! text, and a generator can be shared between threads.
//!
//! # Example
//!
//! ```ignore
//! use sqlmodel::prelude::*;
//!
//! let citizen = FromTable::new("citizen").with_alias("c");
//! let select = SqlSelect::builder()
//!     .from(citizen.clone())
//!     .value(citizen.column("name"))
//!     .condition(citizen.column("last_name").eq("Smith"))
//!     .build()?;
//!
//! let sql = SqlStatementGenerator::new(Dialect::Ansi).export_select(&select)?;
//! assert_eq!(sql, "select c.name from citizen AS c where c.last_name = 'Smith'");
//! ```

mod ddl;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use super::condition::{Condition, InValues, LogicOperator, UnaryOperator};
use super::dialect::{Dialect, SqlDialect};
use super::dml::{SqlDelete, SqlInsert, SqlUpdate};
use super::error::{SqlError, SqlResult};
use super::expr::{ExpressionOperator, FromTable, Function, Literal, SqlBinaryExpression, TrimType, Value};
use super::name::{IdentifierQuoting, NameTranslator, UnaliasedNameTranslator};
use super::query::{FromSource, JoinType, OrderByType, SelectItem, SqlSelect};
use super::statement::SqlStatement;
use super::token::{Token, TokenStream};
use crate::config::GeneratorSettings;

/// Rendered SQL plus the labels of its `?` placeholders, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedStatement {
    pub sql: String,
    pub parameters: Vec<Option<String>>,
}

/// Renders statements for one dialect.
///
/// All configuration is fixed at construction; export methods take `&self`
/// and hold no per-call state.
#[derive(Debug, Clone)]
pub struct SqlStatementGenerator {
    dialect: Dialect,
    quoting: IdentifierQuoting,
    translator: Arc<dyn NameTranslator>,
    default_precision: u32,
    default_scale: u32,
}

impl SqlStatementGenerator {
    /// Generator with the dialect's own name translator and unquoted identifiers.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            quoting: IdentifierQuoting::None,
            translator: dialect.name_translator(IdentifierQuoting::None),
            default_precision: dialect.default_precision(),
            default_scale: dialect.default_scale(),
        }
    }

    /// Build a generator from loaded settings.
    pub fn from_settings(settings: &GeneratorSettings) -> SqlResult<Self> {
        let dialect = settings.dialect()?;
        let mut generator = Self::new(dialect).with_quoted_identifiers(settings.quote_identifiers);
        generator.default_precision = settings
            .default_precision
            .unwrap_or(generator.default_precision);
        generator.default_scale = settings.default_scale.unwrap_or(generator.default_scale);
        Ok(generator)
    }

    /// Quote every identifier with the dialect's quote character.
    pub fn with_quoted_identifiers(mut self, quoted: bool) -> Self {
        self.quoting = if quoted {
            self.dialect.identifier_quoting()
        } else {
            IdentifierQuoting::None
        };
        self.translator = self.dialect.name_translator(self.quoting);
        self
    }

    /// Replace the dialect's name translator.
    pub fn with_name_translator(mut self, translator: Arc<dyn NameTranslator>) -> Self {
        self.translator = translator;
        self
    }

    /// Precision and scale for decimal columns that declare none.
    pub fn with_decimal_defaults(mut self, precision: u32, scale: u32) -> Self {
        self.default_precision = precision;
        self.default_scale = scale;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn name_translator(&self) -> &Arc<dyn NameTranslator> {
        &self.translator
    }

    pub fn default_precision(&self) -> u32 {
        self.default_precision
    }

    pub fn default_scale(&self) -> u32 {
        self.default_scale
    }

    // =========================================================================
    // Statement export
    // =========================================================================

    /// Render any statement.
    pub fn export(&self, statement: &SqlStatement) -> SqlResult<String> {
        self.export_statement(statement).map(|e| e.sql)
    }

    /// Render any statement and report its placeholder labels.
    pub fn export_statement(&self, statement: &SqlStatement) -> SqlResult<ExportedStatement> {
        let tokens = match statement {
            SqlStatement::Select(s) => self.select_tokens(s),
            SqlStatement::Insert(s) => self.insert_tokens(s),
            SqlStatement::Update(s) => self.update_tokens(s),
            SqlStatement::Delete(s) => self.delete_tokens(s),
            SqlStatement::CreateTable(s) => self.create_table_tokens(s),
            SqlStatement::CreateJoinTable(s) => self.create_join_table_tokens(s),
            SqlStatement::CreateSequence(s) => self.create_sequence_tokens(s),
            SqlStatement::DropSequence(s) => self.drop_sequence_tokens(s),
            SqlStatement::DropTable(s) => Ok(self.drop_table_tokens(s)),
        };
        self.finish(statement.kind(), tokens)
    }

    pub fn export_select(&self, select: &SqlSelect) -> SqlResult<String> {
        self.finish("select", self.select_tokens(select)).map(|e| e.sql)
    }

    pub fn export_insert(&self, insert: &SqlInsert) -> SqlResult<String> {
        self.finish("insert", self.insert_tokens(insert)).map(|e| e.sql)
    }

    pub fn export_update(&self, update: &SqlUpdate) -> SqlResult<String> {
        self.finish("update", self.update_tokens(update)).map(|e| e.sql)
    }

    pub fn export_delete(&self, delete: &SqlDelete) -> SqlResult<String> {
        self.finish("delete", self.delete_tokens(delete)).map(|e| e.sql)
    }

    /// Statement that fetches the next value of `name`, optionally schema-qualified.
    pub fn sequence_next_value_statement(&self, schema: Option<&str>, name: &str) -> SqlResult<String> {
        self.require_sequences()?;
        let qualified = match schema {
            Some(schema) if !schema.is_empty() => format!("{}.{}", schema, name),
            _ => name.to_string(),
        };
        let sql = self
            .dialect
            .sequence_next_value(&self.quoting.quote_qualified(&qualified));
        debug!(dialect = %self.dialect, sequence = name, "exported next value statement");
        trace!(sql = %sql, "generated sql");
        Ok(sql)
    }

    fn finish(&self, kind: &'static str, tokens: SqlResult<TokenStream>) -> SqlResult<ExportedStatement> {
        match tokens {
            Ok(ts) => {
                let sql = ts.serialize(self.dialect);
                let parameters = ts.parameters();
                debug!(
                    dialect = %self.dialect,
                    statement = kind,
                    parameters = parameters.len(),
                    "exported statement"
                );
                trace!(sql = %sql, "generated sql");
                Ok(ExportedStatement { sql, parameters })
            }
            Err(e) => {
                debug!(dialect = %self.dialect, statement = kind, error = %e, "export failed");
                Err(e)
            }
        }
    }

    pub(crate) fn require_sequences(&self) -> SqlResult<()> {
        if self.dialect.supports_sequences() {
            Ok(())
        } else {
            Err(SqlError::unsupported(self.dialect.name(), "sequences"))
        }
    }

    /// Translator for UPDATE/DELETE: drops the target alias where the dialect forbids it.
    fn dml_translator(&self, target: &FromTable) -> Arc<dyn NameTranslator> {
        if self.dialect.aliases_dml_target() {
            Arc::clone(&self.translator)
        } else {
            Arc::new(UnaliasedNameTranslator::new(
                Arc::clone(&self.translator),
                target.alias.as_deref(),
            ))
        }
    }

    // =========================================================================
    // SELECT
    // =========================================================================

    fn select_tokens(&self, select: &SqlSelect) -> SqlResult<TokenStream> {
        let names = self.translator.as_ref();
        let mut ts = TokenStream::new();

        ts.push(Token::Select).space();
        if select.is_distinct() {
            ts.push(Token::Distinct).space();
        }

        let items = select
            .values()
            .iter()
            .map(|item| self.select_item_tokens(names, item))
            .collect::<SqlResult<Vec<_>>>()?;
        ts.append_comma_separated(&items);

        ts.space().push(Token::From).space();
        ts.append(&self.from_tokens(names, select.from())?);

        if let Some(condition) = select.condition() {
            ts.space().push(Token::Where).space();
            ts.append(&self.condition_tokens(names, condition)?);
        }

        if let Some(group_by) = select.group_by() {
            if group_by.columns.is_empty() {
                return Err(SqlError::invalid("select", "group by without columns"));
            }
            let columns = self.values_tokens(names, &group_by.columns)?;
            ts.space().push(Token::GroupBy).space();
            ts.append_comma_separated(&columns);
            if let Some(having) = &group_by.having {
                ts.space().push(Token::Having).space();
                ts.append(&self.condition_tokens(names, having)?);
            }
        }

        if let Some(order_by) = select.order_by() {
            let mut items = Vec::with_capacity(order_by.len());
            for item in order_by {
                let mut its = self.value_tokens(names, &item.value)?;
                match item.order {
                    Some(OrderByType::Asc) => {
                        its.space().push(Token::Asc);
                    }
                    Some(OrderByType::Desc) => {
                        its.space().push(Token::Desc);
                    }
                    None => {}
                }
                items.push(its);
            }
            ts.space().push(Token::OrderBy).space();
            ts.append_comma_separated(&items);
        }

        if let Some(fetch) = select.fetch() {
            ts.space().append(&self.dialect.emit_fetch(fetch));
        }

        if let Some(lock) = select.for_update() {
            ts.space().append(&self.dialect.emit_lock(lock));
        }

        Ok(ts)
    }

    fn select_item_tokens(&self, names: &dyn NameTranslator, item: &SelectItem) -> SqlResult<TokenStream> {
        if let Value::Column(column) = &item.value {
            let alias = item.alias.as_deref().or(column.column().alias.as_deref());
            return Ok(Token::Ident(names.to_column_name(
                column.qualifier(),
                &column.column().name,
                alias,
            ))
            .into());
        }

        let mut ts = self.value_tokens(names, &item.value)?;
        if let Some(alias) = &item.alias {
            ts.space().push(Token::As).space().ident(self.quoting.quote(alias));
        }
        Ok(ts)
    }

    fn from_tokens(&self, names: &dyn NameTranslator, from: &[FromSource]) -> SqlResult<TokenStream> {
        let mut ts = TokenStream::new();
        for (i, source) in from.iter().enumerate() {
            match source {
                FromSource::Table(table) => {
                    if i > 0 {
                        ts.comma().space();
                    }
                    ts.ident(names.to_table_name(table.alias.as_deref(), &table.name));
                }
                FromSource::SubQuery(sub) => {
                    if i > 0 {
                        ts.comma().space();
                    }
                    ts.lparen()
                        .append(&self.select_tokens(&sub.select)?)
                        .rparen()
                        .space()
                        .ident(names.alias_declaration(&sub.alias));
                }
                FromSource::Join(join) => {
                    if i == 0 {
                        return Err(SqlError::invalid("select", "from list starts with a join"));
                    }
                    ts.space();
                    match join.join_type {
                        JoinType::Inner => ts.push(Token::Inner),
                        JoinType::Left => ts.push(Token::Left).space().push(Token::Outer),
                        JoinType::Right => ts.push(Token::Right).space().push(Token::Outer),
                    };
                    ts.space()
                        .push(Token::Join)
                        .space()
                        .ident(names.to_table_name(join.table.alias.as_deref(), &join.table.name))
                        .space()
                        .push(Token::On)
                        .space()
                        .append(&self.condition_tokens(names, &join.on)?);
                }
            }
        }
        Ok(ts)
    }

    // =========================================================================
    // DML
    // =========================================================================

    fn insert_tokens(&self, insert: &SqlInsert) -> SqlResult<TokenStream> {
        let names = self.translator.as_ref();
        let mut ts = TokenStream::new();
        ts.push(Token::Insert)
            .space()
            .push(Token::Into)
            .space()
            .ident(names.to_table_name(None, &insert.table().name))
            .space();

        if insert.columns().is_empty() {
            ts.append(&self.dialect.emit_insert_defaults());
            return Ok(ts);
        }

        let columns: Vec<TokenStream> = insert
            .columns()
            .iter()
            .map(|c| Token::Ident(names.to_column_name(None, &c.name, None)).into())
            .collect();
        let values = self.values_tokens(names, insert.values())?;

        ts.lparen()
            .append_comma_separated(&columns)
            .rparen()
            .space()
            .push(Token::Values)
            .space()
            .lparen()
            .append_comma_separated(&values)
            .rparen();
        Ok(ts)
    }

    fn update_tokens(&self, update: &SqlUpdate) -> SqlResult<TokenStream> {
        let table = update.target();
        let translator = self.dml_translator(table);
        let names = translator.as_ref();

        let mut assignments = Vec::with_capacity(update.assignments().len());
        for (column, value) in update.assignments() {
            let mut a = TokenStream::new();
            a.ident(names.to_column_name(None, &column.name, None))
                .space()
                .push(Token::Eq)
                .space()
                .append(&self.value_tokens(names, value)?);
            assignments.push(a);
        }

        let mut ts = TokenStream::new();
        ts.push(Token::Update)
            .space()
            .ident(names.to_table_name(table.alias.as_deref(), &table.name))
            .space()
            .push(Token::Set)
            .space()
            .append_comma_separated(&assignments);

        if let Some(condition) = update.condition() {
            ts.space().push(Token::Where).space();
            ts.append(&self.condition_tokens(names, condition)?);
        }
        Ok(ts)
    }

    fn delete_tokens(&self, delete: &SqlDelete) -> SqlResult<TokenStream> {
        let table = delete.target();
        let translator = self.dml_translator(table);
        let names = translator.as_ref();

        let mut ts = TokenStream::new();
        ts.push(Token::Delete)
            .space()
            .push(Token::From)
            .space()
            .ident(names.to_table_name(table.alias.as_deref(), &table.name));

        if let Some(condition) = delete.condition() {
            ts.space().push(Token::Where).space();
            ts.append(&self.condition_tokens(names, condition)?);
        }
        Ok(ts)
    }

    // =========================================================================
    // Conditions
    // =========================================================================

    fn condition_tokens(&self, names: &dyn NameTranslator, condition: &Condition) -> SqlResult<TokenStream> {
        let op = Token::Operator(self.dialect.condition_operator(condition.condition_type()));
        let mut ts = TokenStream::new();

        match condition {
            Condition::Binary(c) => {
                ts.append(&self.value_tokens(names, &c.left)?)
                    .space()
                    .push(op)
                    .space()
                    .append(&self.value_tokens(names, &c.right)?);
            }
            Condition::Unary(c) if c.operator.is_prefix() => {
                if !matches!(c.operand, Value::SubQuery(_)) {
                    return Err(SqlError::invalid("select", "exists requires a subquery operand"));
                }
                ts.push(op).space().append(&self.value_tokens(names, &c.operand)?);
            }
            Condition::Unary(c) => {
                ts.append(&self.value_tokens(names, &c.operand)?).space().push(op);
                match c.operator {
                    UnaryOperator::IsTrue => {
                        ts.space().push(Token::LitBool(true));
                    }
                    UnaryOperator::IsFalse => {
                        ts.space().push(Token::LitBool(false));
                    }
                    _ => {}
                }
            }
            Condition::Between(c) => {
                ts.append(&self.value_tokens(names, &c.operand)?)
                    .space()
                    .push(op)
                    .space()
                    .append(&self.value_tokens(names, &c.low)?)
                    .space()
                    .push(Token::And)
                    .space()
                    .append(&self.value_tokens(names, &c.high)?);
            }
            Condition::Like(c) => {
                ts.append(&self.value_tokens(names, &c.operand)?)
                    .space()
                    .push(op)
                    .space()
                    .append(&self.value_tokens(names, &c.pattern)?);
                if let Some(escape) = c.escape {
                    if self.dialect.renders_like_escape(escape) {
                        ts.space()
                            .push(Token::Escape)
                            .space()
                            .push(Token::LitString(escape.to_string()));
                    }
                }
            }
            Condition::In(c) => match &c.values {
                InValues::List(values) if values.is_empty() => {
                    // x in () is never true, x not in () always is
                    let constant = if c.not {
                        self.dialect.empty_conjunction()
                    } else {
                        self.dialect.empty_disjunction()
                    };
                    ts.raw(constant);
                }
                InValues::List(values) => {
                    let values = self.values_tokens(names, values)?;
                    ts.append(&self.value_tokens(names, &c.operand)?)
                        .space()
                        .push(op)
                        .space()
                        .lparen()
                        .append_comma_separated(&values)
                        .rparen();
                }
                InValues::SubQuery(select) => {
                    ts.append(&self.value_tokens(names, &c.operand)?)
                        .space()
                        .push(op)
                        .space()
                        .lparen()
                        .append(&self.select_tokens(select)?)
                        .rparen();
                }
            },
            Condition::BinaryLogic(c) => {
                if c.nested {
                    ts.lparen();
                }
                if c.conditions.is_empty() {
                    ts.raw(match c.operator {
                        LogicOperator::And => self.dialect.empty_conjunction(),
                        LogicOperator::Or => self.dialect.empty_disjunction(),
                    });
                } else {
                    let children = c
                        .conditions
                        .iter()
                        .map(|child| self.condition_tokens(names, child))
                        .collect::<SqlResult<Vec<_>>>()?;
                    ts.append_separated(&children, &[Token::Space, op, Token::Space]);
                }
                if c.nested {
                    ts.rparen();
                }
            }
            Condition::UnaryLogic(c) => {
                ts.push(op)
                    .space()
                    .append(&self.condition_tokens(names, &c.condition)?);
            }
        }

        Ok(ts)
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn values_tokens(&self, names: &dyn NameTranslator, values: &[Value]) -> SqlResult<Vec<TokenStream>> {
        values.iter().map(|v| self.value_tokens(names, v)).collect()
    }

    fn value_tokens(&self, names: &dyn NameTranslator, value: &Value) -> SqlResult<TokenStream> {
        let ts: TokenStream = match value {
            Value::Column(column) => {
                Token::Ident(names.to_column_name(column.qualifier(), &column.column().name, None)).into()
            }
            Value::Literal(literal) => self.literal_token(literal)?.into(),
            Value::Parameter(p) => Token::Param(p.label.clone()).into(),
            Value::Expression(e) => self.expression_tokens(names, e)?,
            Value::Function(f) => self.function_tokens(names, f)?,
            Value::SubQuery(select) => {
                let mut ts = TokenStream::new();
                ts.lparen().append(&self.select_tokens(select)?).rparen();
                ts
            }
            Value::Raw(sql) => Token::Raw(sql.clone()).into(),
        };
        Ok(ts)
    }

    fn literal_token(&self, literal: &Literal) -> SqlResult<Token> {
        Ok(match literal {
            Literal::Int(n) => Token::LitInt(*n),
            Literal::Float(f) if !f.is_finite() => {
                return Err(SqlError::NonFiniteLiteral {
                    value: f.to_string(),
                })
            }
            Literal::Float(f) => Token::LitFloat(*f),
            Literal::String(s) => Token::LitString(s.clone()),
            Literal::Bool(b) => Token::LitBool(*b),
            Literal::Null => Token::LitNull,
        })
    }

    fn expression_tokens(&self, names: &dyn NameTranslator, e: &SqlBinaryExpression) -> SqlResult<TokenStream> {
        let op = match e.operator {
            ExpressionOperator::Sum => Token::Plus,
            ExpressionOperator::Minus | ExpressionOperator::Diff => Token::Minus,
            ExpressionOperator::Prod => Token::Mul,
            ExpressionOperator::Quot => Token::Div,
        };
        let mut ts = TokenStream::new();
        ts.append(&self.operand_tokens(names, &e.left)?)
            .space()
            .push(op)
            .space()
            .append(&self.operand_tokens(names, &e.right)?);
        Ok(ts)
    }

    /// Nested arithmetic is parenthesized so evaluation order survives rendering.
    fn operand_tokens(&self, names: &dyn NameTranslator, value: &Value) -> SqlResult<TokenStream> {
        let inner = self.value_tokens(names, value)?;
        if matches!(value, Value::Expression(_)) {
            let mut ts = TokenStream::new();
            ts.lparen().append(&inner).rparen();
            Ok(ts)
        } else {
            Ok(inner)
        }
    }

    // =========================================================================
    // Functions
    // =========================================================================

    fn function_tokens(&self, names: &dyn NameTranslator, function: &Function) -> SqlResult<TokenStream> {
        let call = |name: &'static str, args: &[&Value]| -> SqlResult<TokenStream> {
            let args = args
                .iter()
                .map(|v| self.value_tokens(names, v))
                .collect::<SqlResult<Vec<_>>>()?;
            Ok(super::dialect::helpers::emit_function_call(name, &args))
        };

        if let Function::Coalesce(args) | Function::Concat(args) = function {
            if args.is_empty() {
                return Err(SqlError::invalid(
                    "select",
                    format!("{} without arguments", function.name()),
                ));
            }
        }

        match function {
            Function::Abs(v) => call("ABS", &[v]),
            Function::Avg(v) => call("AVG", &[v]),
            Function::Length(v) => call("LENGTH", &[v]),
            Function::Lower(v) => call("LOWER", &[v]),
            Function::Upper(v) => call("UPPER", &[v]),
            Function::Max(v) => call("MAX", &[v]),
            Function::Min(v) => call("MIN", &[v]),
            Function::Sqrt(v) => call("SQRT", &[v]),
            Function::Sum(v) => call("SUM", &[v]),
            Function::Mod { dividend, divisor } => call("MOD", &[dividend, divisor]),
            Function::Nullif { first, second } => call("NULLIF", &[first, second]),
            Function::Coalesce(args) => call("COALESCE", &args.iter().collect::<Vec<_>>()),
            Function::Concat(args) => self.concat_tokens(names, args),
            Function::Count { argument, distinct } => {
                let mut ts = TokenStream::new();
                ts.push(Token::FunctionName("COUNT")).lparen();
                match argument {
                    None => {
                        ts.push(Token::Star);
                    }
                    Some(v) => {
                        if *distinct {
                            ts.raw("DISTINCT").space();
                        }
                        ts.append(&self.value_tokens(names, v)?);
                    }
                }
                ts.rparen();
                Ok(ts)
            }
            Function::Locate { pattern, input, from } => {
                let from = match from {
                    Some(v) => Some(self.value_tokens(names, v)?),
                    None => None,
                };
                self.dialect.emit_locate(
                    self.value_tokens(names, pattern)?,
                    self.value_tokens(names, input)?,
                    from,
                )
            }
            Function::Negation(v) => {
                let mut ts = TokenStream::new();
                ts.push(Token::Minus);
                // a second leading minus would open a `--` line comment
                if starts_with_minus(v) {
                    ts.lparen().append(&self.value_tokens(names, v)?).rparen();
                } else {
                    ts.append(&self.operand_tokens(names, v)?);
                }
                Ok(ts)
            }
            Function::Substring { input, from, length } => {
                let name = self.dialect.substring_function();
                match length {
                    Some(length) => call(name, &[input, from, length]),
                    None => call(name, &[input, from]),
                }
            }
            Function::Trim {
                input,
                trim_type,
                character,
            } => self.trim_tokens(names, input, *trim_type, *character),
            Function::CurrentDate => Ok(Token::Raw(self.dialect.current_date().into()).into()),
            Function::CurrentTime => Ok(Token::Raw(self.dialect.current_time().into()).into()),
            Function::CurrentTimestamp => {
                Ok(Token::Raw(self.dialect.current_timestamp().into()).into())
            }
        }
    }

    /// `a||b` where `||` concatenates, `CONCAT(a,b)` elsewhere.
    fn concat_tokens(&self, names: &dyn NameTranslator, args: &[Value]) -> SqlResult<TokenStream> {
        let args = self.values_tokens(names, args)?;
        let mut ts = TokenStream::new();
        if self.dialect.supports_concat_operator() {
            ts.append_separated(&args, &[Token::Concat]);
        } else {
            ts.push(Token::FunctionName("CONCAT"))
                .lparen()
                .append_separated(&args, &[Token::Comma])
                .rparen();
        }
        Ok(ts)
    }

    /// `TRIM([BOTH|LEADING|TRAILING] ['c'] FROM x)`, or `TRIM(x)`.
    fn trim_tokens(
        &self,
        names: &dyn NameTranslator,
        input: &Value,
        trim_type: Option<TrimType>,
        character: Option<char>,
    ) -> SqlResult<TokenStream> {
        let mut ts = TokenStream::new();
        ts.push(Token::FunctionName("TRIM")).lparen();

        if trim_type.is_some() || character.is_some() {
            if let Some(trim_type) = trim_type {
                ts.raw(match trim_type {
                    TrimType::Both => "BOTH",
                    TrimType::Leading => "LEADING",
                    TrimType::Trailing => "TRAILING",
                })
                .space();
            }
            if let Some(c) = character {
                ts.push(Token::LitString(c.to_string())).space();
            }
            ts.raw("FROM").space();
        }

        ts.append(&self.value_tokens(names, input)?).rparen();
        Ok(ts)
    }
}

/// Whether `value` renders with a leading `-`.
fn starts_with_minus(value: &Value) -> bool {
    match value {
        Value::Literal(Literal::Int(n)) => *n < 0,
        Value::Literal(Literal::Float(f)) => f.is_sign_negative(),
        Value::Function(f) => matches!(**f, Function::Negation(_)),
        Value::Raw(sql) => sql.trim_start().starts_with('-'),
        _ => false,
    }
}
