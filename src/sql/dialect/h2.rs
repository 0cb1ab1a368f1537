//! H2 SQL dialect.

use super::helpers;
use super::SqlDialect;

/// H2 SQL dialect.
///
/// ANSI defaults apart from the unparenthesized `VALUES NEXT VALUE FOR s`.
#[derive(Debug, Clone, Copy)]
pub struct H2;

impl SqlDialect for H2 {
    fn name(&self) -> &'static str {
        "h2"
    }

    fn sequence_next_value(&self, name: &str) -> String {
        helpers::next_value_values(name)
    }
}
