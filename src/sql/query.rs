//! Select statements - the model and its fluent builder.

use super::condition::{and, Condition, ConditionExt};
use super::error::{SqlError, SqlResult};
use super::expr::{FromTable, TableColumn, Value};

// =============================================================================
// Select Item (value with optional alias)
// =============================================================================

/// A SELECT list item: value with optional output alias.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "builders have no effect until used"]
pub struct SelectItem {
    pub value: Value,
    pub alias: Option<String>,
}

impl SelectItem {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl From<Value> for SelectItem {
    fn from(value: Value) -> Self {
        SelectItem::new(value)
    }
}

impl From<TableColumn> for SelectItem {
    fn from(column: TableColumn) -> Self {
        SelectItem::new(Value::Column(column))
    }
}

// =============================================================================
// From Sources
// =============================================================================

/// Type of join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
}

/// A join attached to the FROM list: ` inner join address AS a on ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct FromJoin {
    pub join_type: JoinType,
    pub table: FromTable,
    pub on: Condition,
}

impl FromJoin {
    pub fn new(join_type: JoinType, table: FromTable, on: Condition) -> Self {
        Self {
            join_type,
            table,
            on,
        }
    }

    /// Join on pairwise column equality: `from[i] = to[i]`, and-ed together.
    pub fn on_columns(
        join_type: JoinType,
        table: FromTable,
        from_columns: Vec<TableColumn>,
        to_columns: Vec<TableColumn>,
    ) -> SqlResult<Self> {
        if from_columns.len() != to_columns.len() || from_columns.is_empty() {
            return Err(SqlError::JoinColumnCountMismatch {
                expected: from_columns.len(),
                actual: to_columns.len(),
            });
        }

        let mut equalities: Vec<Condition> = from_columns
            .into_iter()
            .zip(to_columns)
            .map(|(from, to)| from.eq(to))
            .collect();

        let on = if equalities.len() == 1 {
            equalities.remove(0)
        } else {
            and(equalities)
        };

        Ok(Self::new(join_type, table, on))
    }
}

/// A derived table: `(select ...) AS alias`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubQuery {
    pub select: Box<SqlSelect>,
    pub alias: String,
}

impl SubQuery {
    pub fn new(select: SqlSelect, alias: impl Into<String>) -> Self {
        Self {
            select: Box::new(select),
            alias: alias.into(),
        }
    }

    /// A column projected by this subquery.
    pub fn column(&self, name: impl Into<String>) -> TableColumn {
        TableColumn::of_subquery(self.alias.clone(), super::expr::Column::new(name))
    }
}

/// One entry of the FROM list.
#[derive(Debug, Clone, PartialEq)]
pub enum FromSource {
    Table(FromTable),
    Join(FromJoin),
    SubQuery(SubQuery),
}

impl From<FromTable> for FromSource {
    fn from(t: FromTable) -> Self {
        FromSource::Table(t)
    }
}

impl From<FromJoin> for FromSource {
    fn from(j: FromJoin) -> Self {
        FromSource::Join(j)
    }
}

impl From<SubQuery> for FromSource {
    fn from(s: SubQuery) -> Self {
        FromSource::SubQuery(s)
    }
}

// =============================================================================
// GROUP BY / ORDER BY / Locking / Fetch
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    pub columns: Vec<Value>,
    pub having: Option<Condition>,
}

impl GroupBy {
    pub fn new(columns: Vec<Value>) -> Self {
        Self {
            columns,
            having: None,
        }
    }

    pub fn with_having(mut self, having: Condition) -> Self {
        self.having = Some(having);
        self
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByType {
    Asc,
    Desc,
}

/// An ORDER BY item.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "builders have no effect until used"]
pub struct OrderBy {
    pub value: Value,
    pub order: Option<OrderByType>,
}

impl OrderBy {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            order: None,
        }
    }

    pub fn asc(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            order: Some(OrderByType::Asc),
        }
    }

    pub fn desc(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            order: Some(OrderByType::Desc),
        }
    }
}

/// Pessimistic row locking requested for a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForUpdate {
    PessimisticRead,
    PessimisticWrite,
}

/// Row window: `offset N rows fetch next M rows only` or `limit M offset N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fetch {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Fetch {
    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }
}

// =============================================================================
// SqlSelect
// =============================================================================

/// A finished SELECT statement. Only [`SqlSelectBuilder`] creates one.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlSelect {
    from: Vec<FromSource>,
    values: Vec<SelectItem>,
    condition: Option<Condition>,
    group_by: Option<GroupBy>,
    order_by: Option<Vec<OrderBy>>,
    distinct: bool,
    for_update: Option<ForUpdate>,
    fetch: Option<Fetch>,
}

impl SqlSelect {
    pub fn builder() -> SqlSelectBuilder {
        SqlSelectBuilder::new()
    }

    pub fn from(&self) -> &[FromSource] {
        &self.from
    }

    pub fn values(&self) -> &[SelectItem] {
        &self.values
    }

    /// The single top-level condition, absent when none was given.
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn group_by(&self) -> Option<&GroupBy> {
        self.group_by.as_ref()
    }

    /// Absent when no order-by item was given; never an empty slice.
    pub fn order_by(&self) -> Option<&[OrderBy]> {
        self.order_by.as_deref()
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn for_update(&self) -> Option<ForUpdate> {
        self.for_update
    }

    pub fn fetch(&self) -> Option<Fetch> {
        self.fetch
    }
}

/// Fluent builder for [`SqlSelect`].
///
/// Validation is deferred to [`build`](Self::build).
#[derive(Debug, Clone, Default)]
#[must_use = "builders have no effect until built"]
pub struct SqlSelectBuilder {
    from: Vec<FromSource>,
    values: Vec<SelectItem>,
    conditions: Vec<Condition>,
    group_by: Option<GroupBy>,
    order_by: Vec<OrderBy>,
    distinct: bool,
    for_update: Option<ForUpdate>,
    fetch: Fetch,
}

impl SqlSelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a FROM source (table, join or subquery).
    pub fn from(mut self, from: impl Into<FromSource>) -> Self {
        self.from.push(from.into());
        self
    }

    pub fn join(self, join: FromJoin) -> Self {
        self.from(join)
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn value(mut self, item: impl Into<SelectItem>) -> Self {
        self.values.push(item.into());
        self
    }

    pub fn values(mut self, items: Vec<impl Into<SelectItem>>) -> Self {
        self.values.extend(items.into_iter().map(Into::into));
        self
    }

    /// Set the WHERE condition. Combine several predicates with
    /// [`and`](super::condition::and) / [`or`](super::condition::or) first.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }

    pub fn order_by(mut self, items: Vec<OrderBy>) -> Self {
        self.order_by.extend(items);
        self
    }

    pub fn for_update(mut self, lock: ForUpdate) -> Self {
        self.for_update = Some(lock);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.fetch.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.fetch.offset = Some(offset);
        self
    }

    pub fn build(self) -> SqlResult<SqlSelect> {
        if self.from.is_empty() {
            return Err(SqlError::MissingFrom);
        }
        if self.values.is_empty() {
            return Err(SqlError::invalid("select", "no values to project"));
        }
        let condition = single_condition(self.conditions)?;

        Ok(SqlSelect {
            from: self.from,
            values: self.values,
            condition,
            group_by: self.group_by,
            order_by: if self.order_by.is_empty() {
                None
            } else {
                Some(self.order_by)
            },
            distinct: self.distinct,
            for_update: self.for_update,
            fetch: if self.fetch.is_empty() {
                None
            } else {
                Some(self.fetch)
            },
        })
    }
}

/// Collapse the builder's condition list: none, or exactly one.
pub(crate) fn single_condition(mut conditions: Vec<Condition>) -> SqlResult<Option<Condition>> {
    match conditions.len() {
        0 => Ok(None),
        1 => Ok(conditions.pop()),
        count => Err(SqlError::MultipleConditions { count }),
    }
}
