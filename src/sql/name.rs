//! Name translation - rendering table and column identifiers.
//!
//! A [`NameTranslator`] turns resolved names plus optional aliases into
//! identifier text. The generator owns one translator for its whole
//! lifetime; dialects pick the default one and may substitute a
//! non-aliasing translator in contexts where aliases are forbidden.

use std::fmt::Debug;
use std::sync::Arc;

use super::dialect::helpers;

/// How identifiers are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierQuoting {
    /// Emit names as given.
    #[default]
    None,
    /// `"name"` (ANSI, Derby, H2, Oracle, Postgres).
    DoubleQuote,
    /// `` `name` `` (MySQL, MariaDB).
    Backtick,
}

impl IdentifierQuoting {
    /// Quote a single identifier.
    pub fn quote(&self, ident: &str) -> String {
        match self {
            IdentifierQuoting::None => ident.to_string(),
            IdentifierQuoting::DoubleQuote => helpers::quote_double(ident),
            IdentifierQuoting::Backtick => helpers::quote_backtick(ident),
        }
    }

    /// Quote a possibly schema-qualified name part by part.
    pub fn quote_qualified(&self, name: &str) -> String {
        match self {
            IdentifierQuoting::None => name.to_string(),
            _ => name
                .split('.')
                .map(|part| self.quote(part))
                .collect::<Vec<_>>()
                .join("."),
        }
    }
}

/// Renders table and column names.
///
/// Implementations must be pure: the same arguments always give the same text.
pub trait NameTranslator: Debug + Send + Sync {
    /// `alias.column[ AS column_alias]`, or `column[ AS column_alias]` without a table alias.
    fn to_column_name(
        &self,
        table_alias: Option<&str>,
        column_name: &str,
        column_alias: Option<&str>,
    ) -> String;

    /// `table[ AS alias]`.
    fn to_table_name(&self, table_alias: Option<&str>, table_name: &str) -> String;

    /// The alias suffix placed after a derived table: `AS alias`.
    fn alias_declaration(&self, alias: &str) -> String;
}

/// Standard translator: `AS` before both table and column aliases.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNameTranslator {
    quoting: IdentifierQuoting,
}

impl DefaultNameTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quoting(quoting: IdentifierQuoting) -> Self {
        Self { quoting }
    }
}

impl NameTranslator for DefaultNameTranslator {
    fn to_column_name(
        &self,
        table_alias: Option<&str>,
        column_name: &str,
        column_alias: Option<&str>,
    ) -> String {
        column_name_with(self.quoting, table_alias, column_name, column_alias)
    }

    fn to_table_name(&self, table_alias: Option<&str>, table_name: &str) -> String {
        let table = self.quoting.quote_qualified(table_name);
        match table_alias {
            Some(alias) => format!("{} {}", table, self.alias_declaration(alias)),
            None => table,
        }
    }

    fn alias_declaration(&self, alias: &str) -> String {
        format!("AS {}", self.quoting.quote(alias))
    }
}

/// Oracle rejects `AS` before a table alias: `citizen c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleNameTranslator {
    quoting: IdentifierQuoting,
}

impl OracleNameTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quoting(quoting: IdentifierQuoting) -> Self {
        Self { quoting }
    }
}

impl NameTranslator for OracleNameTranslator {
    fn to_column_name(
        &self,
        table_alias: Option<&str>,
        column_name: &str,
        column_alias: Option<&str>,
    ) -> String {
        column_name_with(self.quoting, table_alias, column_name, column_alias)
    }

    fn to_table_name(&self, table_alias: Option<&str>, table_name: &str) -> String {
        let table = self.quoting.quote_qualified(table_name);
        match table_alias {
            Some(alias) => format!("{} {}", table, self.alias_declaration(alias)),
            None => table,
        }
    }

    fn alias_declaration(&self, alias: &str) -> String {
        self.quoting.quote(alias)
    }
}

/// Wraps another translator and drops the alias of one table.
///
/// Used for UPDATE/DELETE targets on dialects that forbid aliasing them.
/// Columns qualified by the target alias render unqualified; every other
/// alias, such as a subquery's own tables, is kept. A correlated subquery
/// reference to the target therefore resolves by bare column name.
#[derive(Debug, Clone)]
pub struct UnaliasedNameTranslator {
    inner: Arc<dyn NameTranslator>,
    target_alias: Option<String>,
}

impl UnaliasedNameTranslator {
    pub fn new(inner: Arc<dyn NameTranslator>, target_alias: Option<&str>) -> Self {
        Self {
            inner,
            target_alias: target_alias.map(str::to_string),
        }
    }

    fn keep<'a>(&self, table_alias: Option<&'a str>) -> Option<&'a str> {
        table_alias.filter(|alias| self.target_alias.as_deref() != Some(*alias))
    }
}

impl NameTranslator for UnaliasedNameTranslator {
    fn to_column_name(
        &self,
        table_alias: Option<&str>,
        column_name: &str,
        column_alias: Option<&str>,
    ) -> String {
        self.inner
            .to_column_name(self.keep(table_alias), column_name, column_alias)
    }

    fn to_table_name(&self, table_alias: Option<&str>, table_name: &str) -> String {
        self.inner.to_table_name(self.keep(table_alias), table_name)
    }

    fn alias_declaration(&self, alias: &str) -> String {
        self.inner.alias_declaration(alias)
    }
}

fn column_name_with(
    quoting: IdentifierQuoting,
    table_alias: Option<&str>,
    column_name: &str,
    column_alias: Option<&str>,
) -> String {
    let mut name = match table_alias {
        Some(alias) => format!("{}.{}", quoting.quote(alias), quoting.quote(column_name)),
        None => quoting.quote(column_name),
    };
    if let Some(alias) = column_alias {
        name.push_str(" AS ");
        name.push_str(&quoting.quote(alias));
    }
    name
}
