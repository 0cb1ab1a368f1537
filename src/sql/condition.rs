//! Conditions - the WHERE / ON / HAVING predicate model.
//!
//! A [`Condition`] is a closed tagged union. Every node reports a
//! [`ConditionType`], which the generator uses both to dispatch and to look
//! up the operator keyword through the dialect.

use super::expr::{TableColumn, Value};
use super::query::SqlSelect;

// =============================================================================
// Condition Types
// =============================================================================

/// Discriminant carried by every condition; also the key for operator lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionType {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    IsNull,
    IsNotNull,
    IsTrue,
    IsFalse,
    Exists,
    NotExists,
    Between,
    NotBetween,
    Like,
    NotLike,
    In,
    NotIn,
    And,
    Or,
    Not,
}

/// Operators of a [`BinaryCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
}

impl ComparisonOperator {
    pub fn condition_type(self) -> ConditionType {
        match self {
            ComparisonOperator::Equal => ConditionType::Equal,
            ComparisonOperator::NotEqual => ConditionType::NotEqual,
            ComparisonOperator::GreaterThan => ConditionType::GreaterThan,
            ComparisonOperator::GreaterThanOrEqualTo => ConditionType::GreaterThanOrEqualTo,
            ComparisonOperator::LessThan => ConditionType::LessThan,
            ComparisonOperator::LessThanOrEqualTo => ConditionType::LessThanOrEqualTo,
        }
    }
}

/// Operators of a [`UnaryCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    IsNull,
    IsNotNull,
    IsTrue,
    IsFalse,
    /// Operand must be a subquery.
    Exists,
    /// Operand must be a subquery.
    NotExists,
}

impl UnaryOperator {
    pub fn condition_type(self) -> ConditionType {
        match self {
            UnaryOperator::IsNull => ConditionType::IsNull,
            UnaryOperator::IsNotNull => ConditionType::IsNotNull,
            UnaryOperator::IsTrue => ConditionType::IsTrue,
            UnaryOperator::IsFalse => ConditionType::IsFalse,
            UnaryOperator::Exists => ConditionType::Exists,
            UnaryOperator::NotExists => ConditionType::NotExists,
        }
    }

    /// Prefix operators render before the operand (`exists (...)`).
    pub fn is_prefix(self) -> bool {
        matches!(self, UnaryOperator::Exists | UnaryOperator::NotExists)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOperator {
    And,
    Or,
}

// =============================================================================
// Condition Nodes
// =============================================================================

/// `left <op> right`
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryCondition {
    pub operator: ComparisonOperator,
    pub left: Value,
    pub right: Value,
}

/// `operand is null`, `operand = TRUE`, `exists (select ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryCondition {
    pub operator: UnaryOperator,
    pub operand: Value,
}

/// `operand [not] between low and high`
#[derive(Debug, Clone, PartialEq)]
pub struct BetweenCondition {
    pub operand: Value,
    pub low: Value,
    pub high: Value,
    pub not: bool,
}

/// `operand [not] like pattern[ escape 'c']`
#[derive(Debug, Clone, PartialEq)]
pub struct LikeCondition {
    pub operand: Value,
    pub pattern: Value,
    pub escape: Option<char>,
    pub not: bool,
}

/// Right-hand side of an IN condition.
#[derive(Debug, Clone, PartialEq)]
pub enum InValues {
    List(Vec<Value>),
    SubQuery(Box<SqlSelect>),
}

/// `operand [not] in (...)` - the right side is always parenthesized.
#[derive(Debug, Clone, PartialEq)]
pub struct InCondition {
    pub operand: Value,
    pub values: InValues,
    pub not: bool,
}

/// AND/OR over a list of conditions.
///
/// `nested` is decided by whoever builds the tree; the generator never
/// infers parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryLogicCondition {
    pub operator: LogicOperator,
    pub conditions: Vec<Condition>,
    pub nested: bool,
}

/// `not <condition>`
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryLogicCondition {
    pub condition: Box<Condition>,
}

/// Any predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Binary(BinaryCondition),
    Unary(UnaryCondition),
    Between(BetweenCondition),
    Like(LikeCondition),
    In(InCondition),
    BinaryLogic(BinaryLogicCondition),
    UnaryLogic(UnaryLogicCondition),
}

impl Condition {
    pub fn condition_type(&self) -> ConditionType {
        match self {
            Condition::Binary(c) => c.operator.condition_type(),
            Condition::Unary(c) => c.operator.condition_type(),
            Condition::Between(c) if c.not => ConditionType::NotBetween,
            Condition::Between(_) => ConditionType::Between,
            Condition::Like(c) if c.not => ConditionType::NotLike,
            Condition::Like(_) => ConditionType::Like,
            Condition::In(c) if c.not => ConditionType::NotIn,
            Condition::In(_) => ConditionType::In,
            Condition::BinaryLogic(c) => match c.operator {
                LogicOperator::And => ConditionType::And,
                LogicOperator::Or => ConditionType::Or,
            },
            Condition::UnaryLogic(_) => ConditionType::Not,
        }
    }

    /// Wrap an AND/OR node in parentheses when rendered. No effect on other nodes.
    pub fn nested(self) -> Self {
        match self {
            Condition::BinaryLogic(mut c) => {
                c.nested = true;
                Condition::BinaryLogic(c)
            }
            other => other,
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

fn logic(operator: LogicOperator, conditions: Vec<Condition>) -> Condition {
    Condition::BinaryLogic(BinaryLogicCondition {
        operator,
        conditions,
        nested: false,
    })
}

/// `a and b and ...` (not parenthesized).
pub fn and(conditions: Vec<Condition>) -> Condition {
    logic(LogicOperator::And, conditions)
}

/// `a or b or ...` (not parenthesized).
pub fn or(conditions: Vec<Condition>) -> Condition {
    logic(LogicOperator::Or, conditions)
}

pub fn not(condition: Condition) -> Condition {
    Condition::UnaryLogic(UnaryLogicCondition {
        condition: Box::new(condition),
    })
}

pub fn exists(select: SqlSelect) -> Condition {
    Condition::Unary(UnaryCondition {
        operator: UnaryOperator::Exists,
        operand: Value::SubQuery(Box::new(select)),
    })
}

pub fn not_exists(select: SqlSelect) -> Condition {
    Condition::Unary(UnaryCondition {
        operator: UnaryOperator::NotExists,
        operand: Value::SubQuery(Box::new(select)),
    })
}

// =============================================================================
// Condition Builder Trait
// =============================================================================

/// Fluent predicate construction on values and columns.
pub trait ConditionExt: Sized {
    fn into_operand(self) -> Value;

    fn compare(self, operator: ComparisonOperator, other: impl Into<Value>) -> Condition {
        Condition::Binary(BinaryCondition {
            operator,
            left: self.into_operand(),
            right: other.into(),
        })
    }

    fn eq(self, other: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::Equal, other)
    }

    fn ne(self, other: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::NotEqual, other)
    }

    fn gt(self, other: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::GreaterThan, other)
    }

    fn gte(self, other: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::GreaterThanOrEqualTo, other)
    }

    fn lt(self, other: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::LessThan, other)
    }

    fn lte(self, other: impl Into<Value>) -> Condition {
        self.compare(ComparisonOperator::LessThanOrEqualTo, other)
    }

    fn unary(self, operator: UnaryOperator) -> Condition {
        Condition::Unary(UnaryCondition {
            operator,
            operand: self.into_operand(),
        })
    }

    fn is_null(self) -> Condition {
        self.unary(UnaryOperator::IsNull)
    }

    fn is_not_null(self) -> Condition {
        self.unary(UnaryOperator::IsNotNull)
    }

    fn is_true(self) -> Condition {
        self.unary(UnaryOperator::IsTrue)
    }

    fn is_false(self) -> Condition {
        self.unary(UnaryOperator::IsFalse)
    }

    fn between(self, low: impl Into<Value>, high: impl Into<Value>) -> Condition {
        Condition::Between(BetweenCondition {
            operand: self.into_operand(),
            low: low.into(),
            high: high.into(),
            not: false,
        })
    }

    fn not_between(self, low: impl Into<Value>, high: impl Into<Value>) -> Condition {
        Condition::Between(BetweenCondition {
            operand: self.into_operand(),
            low: low.into(),
            high: high.into(),
            not: true,
        })
    }

    fn like(self, pattern: impl Into<Value>) -> Condition {
        Condition::Like(LikeCondition {
            operand: self.into_operand(),
            pattern: pattern.into(),
            escape: None,
            not: false,
        })
    }

    fn not_like(self, pattern: impl Into<Value>) -> Condition {
        Condition::Like(LikeCondition {
            operand: self.into_operand(),
            pattern: pattern.into(),
            escape: None,
            not: true,
        })
    }

    fn like_escape(self, pattern: impl Into<Value>, escape: char) -> Condition {
        Condition::Like(LikeCondition {
            operand: self.into_operand(),
            pattern: pattern.into(),
            escape: Some(escape),
            not: false,
        })
    }

    fn in_list(self, values: Vec<Value>) -> Condition {
        Condition::In(InCondition {
            operand: self.into_operand(),
            values: InValues::List(values),
            not: false,
        })
    }

    fn not_in_list(self, values: Vec<Value>) -> Condition {
        Condition::In(InCondition {
            operand: self.into_operand(),
            values: InValues::List(values),
            not: true,
        })
    }

    fn in_subquery(self, select: SqlSelect) -> Condition {
        Condition::In(InCondition {
            operand: self.into_operand(),
            values: InValues::SubQuery(Box::new(select)),
            not: false,
        })
    }

    fn not_in_subquery(self, select: SqlSelect) -> Condition {
        Condition::In(InCondition {
            operand: self.into_operand(),
            values: InValues::SubQuery(Box::new(select)),
            not: true,
        })
    }
}

impl ConditionExt for Value {
    fn into_operand(self) -> Value {
        self
    }
}

impl ConditionExt for TableColumn {
    fn into_operand(self) -> Value {
        Value::Column(self)
    }
}
