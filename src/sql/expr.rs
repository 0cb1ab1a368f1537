//! Values, columns and functions - the expression half of the statement model.
//!
//! Everything here is a plain value object. Names are already resolved by
//! the caller; rendering is the generator's job.

use super::query::{SelectItem, SqlSelect};

// =============================================================================
// Names
// =============================================================================

/// A column name with an optional output alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub name: String,
    pub alias: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// A physical table (or join target) with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FromTable {
    pub name: String,
    pub alias: Option<String>,
}

impl FromTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// A column of this table.
    pub fn column(&self, name: impl Into<String>) -> TableColumn {
        TableColumn::new(self.clone(), Column::new(name))
    }
}

/// Where a [`TableColumn`] comes from: a table or an aliased subquery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnSource {
    Table(FromTable),
    SubQuery { alias: String },
}

/// `table.column` - a column bound to exactly one source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableColumn {
    source: ColumnSource,
    column: Column,
}

impl TableColumn {
    pub fn new(table: FromTable, column: Column) -> Self {
        Self {
            source: ColumnSource::Table(table),
            column,
        }
    }

    /// A column projected by the subquery aliased `alias`.
    pub fn of_subquery(alias: impl Into<String>, column: Column) -> Self {
        Self {
            source: ColumnSource::SubQuery {
                alias: alias.into(),
            },
            column,
        }
    }

    pub fn source(&self) -> &ColumnSource {
        &self.source
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    /// The alias used to qualify this column, if any.
    pub fn qualifier(&self) -> Option<&str> {
        match &self.source {
            ColumnSource::Table(table) => table.alias.as_deref(),
            ColumnSource::SubQuery { alias } => Some(alias.as_str()),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.column.alias = Some(alias.into());
        self
    }
}

// =============================================================================
// Values
// =============================================================================

/// Anything that renders to a scalar SQL value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Column(TableColumn),
    Literal(Literal),
    Parameter(Parameter),
    Expression(Box<SqlBinaryExpression>),
    Function(Box<Function>),
    /// Scalar subquery: `(select ...)`
    SubQuery(Box<SqlSelect>),
    /// Pre-rendered SQL passed through untouched.
    ///
    /// # Security Warning
    ///
    /// **Never pass user input to this variant.** It is not escaped; bind
    /// user values through [`Value::Parameter`] instead.
    Raw(String),
}

/// Literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
}

/// A positional `?` placeholder.
///
/// The label is informational: it is reported back in placeholder order so
/// the execution layer can bind values, but never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameter {
    pub label: Option<String>,
}

impl Parameter {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { label: None }
    }
}

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionOperator {
    /// `+`
    Sum,
    /// `-`
    Minus,
    /// `*`
    Prod,
    /// `-`
    Diff,
    /// `/`
    Quot,
}

/// `left <op> right`
#[derive(Debug, Clone, PartialEq)]
pub struct SqlBinaryExpression {
    pub left: Value,
    pub operator: ExpressionOperator,
    pub right: Value,
}

impl SqlBinaryExpression {
    pub fn new(left: impl Into<Value>, operator: ExpressionOperator, right: impl Into<Value>) -> Self {
        Self {
            left: left.into(),
            operator,
            right: right.into(),
        }
    }
}

/// Which side(s) `TRIM` strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrimType {
    Both,
    Leading,
    Trailing,
}

/// The closed set of SQL functions the model supports.
///
/// Every variant must be handled by the generator - the compiler enforces this.
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    Abs(Value),
    Avg(Value),
    Coalesce(Vec<Value>),
    Concat(Vec<Value>),
    /// `COUNT(x)`, `COUNT(DISTINCT x)`, or `COUNT(*)` without an argument.
    Count {
        argument: Option<Value>,
        distinct: bool,
    },
    Length(Value),
    Locate {
        pattern: Value,
        input: Value,
        from: Option<Value>,
    },
    Lower(Value),
    Upper(Value),
    Max(Value),
    Min(Value),
    Mod {
        dividend: Value,
        divisor: Value,
    },
    Negation(Value),
    Nullif {
        first: Value,
        second: Value,
    },
    Sqrt(Value),
    Substring {
        input: Value,
        from: Value,
        length: Option<Value>,
    },
    Sum(Value),
    Trim {
        input: Value,
        trim_type: Option<TrimType>,
        character: Option<char>,
    },
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
}

impl Function {
    /// SQL name of the function, as reported in generator errors.
    pub fn name(&self) -> &'static str {
        match self {
            Function::Abs(_) => "ABS",
            Function::Avg(_) => "AVG",
            Function::Coalesce(_) => "COALESCE",
            Function::Concat(_) => "CONCAT",
            Function::Count { .. } => "COUNT",
            Function::Length(_) => "LENGTH",
            Function::Locate { .. } => "LOCATE",
            Function::Lower(_) => "LOWER",
            Function::Upper(_) => "UPPER",
            Function::Max(_) => "MAX",
            Function::Min(_) => "MIN",
            Function::Mod { .. } => "MOD",
            Function::Negation(_) => "NEGATION",
            Function::Nullif { .. } => "NULLIF",
            Function::Sqrt(_) => "SQRT",
            Function::Substring { .. } => "SUBSTRING",
            Function::Sum(_) => "SUM",
            Function::Trim { .. } => "TRIM",
            Function::CurrentDate => "CURRENT_DATE",
            Function::CurrentTime => "CURRENT_TIME",
            Function::CurrentTimestamp => "CURRENT_TIMESTAMP",
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Column `name` of `table`.
pub fn table_col(table: &FromTable, name: &str) -> Value {
    Value::Column(table.column(name))
}

/// Create an integer literal.
pub fn lit_int(n: i64) -> Value {
    Value::Literal(Literal::Int(n))
}

/// Create a float literal.
pub fn lit_float(f: f64) -> Value {
    Value::Literal(Literal::Float(f))
}

/// Create a string literal.
pub fn lit_str(s: &str) -> Value {
    Value::Literal(Literal::String(s.into()))
}

/// Create a boolean literal.
pub fn lit_bool(b: bool) -> Value {
    Value::Literal(Literal::Bool(b))
}

/// Create a NULL literal.
pub fn lit_null() -> Value {
    Value::Literal(Literal::Null)
}

/// A labelled `?` placeholder.
pub fn param(label: &str) -> Value {
    Value::Parameter(Parameter::new(label))
}

/// An unlabelled `?` placeholder.
pub fn anonymous_param() -> Value {
    Value::Parameter(Parameter::anonymous())
}

fn function(f: Function) -> Value {
    Value::Function(Box::new(f))
}

pub fn abs(v: impl Into<Value>) -> Value {
    function(Function::Abs(v.into()))
}

pub fn avg(v: impl Into<Value>) -> Value {
    function(Function::Avg(v.into()))
}

pub fn coalesce(args: Vec<Value>) -> Value {
    function(Function::Coalesce(args))
}

pub fn concat(args: Vec<Value>) -> Value {
    function(Function::Concat(args))
}

/// COUNT(expr)
pub fn count(v: impl Into<Value>) -> Value {
    function(Function::Count {
        argument: Some(v.into()),
        distinct: false,
    })
}

/// COUNT(DISTINCT expr)
pub fn count_distinct(v: impl Into<Value>) -> Value {
    function(Function::Count {
        argument: Some(v.into()),
        distinct: true,
    })
}

/// COUNT(*)
pub fn count_star() -> Value {
    function(Function::Count {
        argument: None,
        distinct: false,
    })
}

pub fn length(v: impl Into<Value>) -> Value {
    function(Function::Length(v.into()))
}

pub fn locate(pattern: impl Into<Value>, input: impl Into<Value>, from: Option<Value>) -> Value {
    function(Function::Locate {
        pattern: pattern.into(),
        input: input.into(),
        from,
    })
}

pub fn lower(v: impl Into<Value>) -> Value {
    function(Function::Lower(v.into()))
}

pub fn upper(v: impl Into<Value>) -> Value {
    function(Function::Upper(v.into()))
}

pub fn max(v: impl Into<Value>) -> Value {
    function(Function::Max(v.into()))
}

pub fn min(v: impl Into<Value>) -> Value {
    function(Function::Min(v.into()))
}

pub fn modulo(dividend: impl Into<Value>, divisor: impl Into<Value>) -> Value {
    function(Function::Mod {
        dividend: dividend.into(),
        divisor: divisor.into(),
    })
}

pub fn negation(v: impl Into<Value>) -> Value {
    function(Function::Negation(v.into()))
}

pub fn nullif(first: impl Into<Value>, second: impl Into<Value>) -> Value {
    function(Function::Nullif {
        first: first.into(),
        second: second.into(),
    })
}

pub fn sqrt(v: impl Into<Value>) -> Value {
    function(Function::Sqrt(v.into()))
}

pub fn substring(input: impl Into<Value>, from: impl Into<Value>, length: Option<Value>) -> Value {
    function(Function::Substring {
        input: input.into(),
        from: from.into(),
        length,
    })
}

pub fn sum(v: impl Into<Value>) -> Value {
    function(Function::Sum(v.into()))
}

pub fn trim(input: impl Into<Value>, trim_type: Option<TrimType>, character: Option<char>) -> Value {
    function(Function::Trim {
        input: input.into(),
        trim_type,
        character,
    })
}

pub fn current_date() -> Value {
    function(Function::CurrentDate)
}

pub fn current_time() -> Value {
    function(Function::CurrentTime)
}

pub fn current_timestamp() -> Value {
    function(Function::CurrentTimestamp)
}

// =============================================================================
// Value Builder Trait
// =============================================================================

/// Extension trait for building arithmetic and select items fluently.
pub trait ValueExt: Sized {
    fn into_value(self) -> Value;

    fn plus(self, other: impl Into<Value>) -> Value {
        binary(self.into_value(), ExpressionOperator::Sum, other.into())
    }

    fn minus(self, other: impl Into<Value>) -> Value {
        binary(self.into_value(), ExpressionOperator::Diff, other.into())
    }

    fn times(self, other: impl Into<Value>) -> Value {
        binary(self.into_value(), ExpressionOperator::Prod, other.into())
    }

    fn divided_by(self, other: impl Into<Value>) -> Value {
        binary(self.into_value(), ExpressionOperator::Quot, other.into())
    }

    /// Project this value under an output alias.
    fn alias(self, name: &str) -> SelectItem {
        SelectItem::new(self.into_value()).with_alias(name)
    }
}

fn binary(left: Value, operator: ExpressionOperator, right: Value) -> Value {
    Value::Expression(Box::new(SqlBinaryExpression {
        left,
        operator,
        right,
    }))
}

impl ValueExt for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl ValueExt for TableColumn {
    fn into_value(self) -> Value {
        Value::Column(self)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<TableColumn> for Value {
    fn from(c: TableColumn) -> Self {
        Value::Column(c)
    }
}

impl From<Literal> for Value {
    fn from(l: Literal) -> Self {
        Value::Literal(l)
    }
}

impl From<Parameter> for Value {
    fn from(p: Parameter) -> Self {
        Value::Parameter(p)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(Box::new(f))
    }
}

impl From<SqlBinaryExpression> for Value {
    fn from(e: SqlBinaryExpression) -> Self {
        Value::Expression(Box::new(e))
    }
}

impl From<SqlSelect> for Value {
    /// A select used as a scalar subquery.
    fn from(s: SqlSelect) -> Self {
        Value::SubQuery(Box::new(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        lit_int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        lit_int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        lit_float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        lit_str(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Literal(Literal::String(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        lit_bool(b)
    }
}
