//! Semantic column types for DDL generation.
//!
//! A [`DdlType`] names what a column holds, not how a database spells it.
//! Each dialect maps the tag to its own SQL type in `emit_data_type`.

use std::fmt;

/// Semantic type of a declared column.
///
/// # Examples
///
/// ```ignore
/// use sqlmodel::sql::types::DdlType;
///
/// assert_eq!(DdlType::parse("bigint"), Some(DdlType::Long));
/// assert_eq!(DdlType::parse("String"), Some(DdlType::String));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DdlType {
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// Character data; requires a length.
    String,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Fixed-point decimal; precision/scale fall back to the generator defaults.
    BigDecimal,
    Date,
    Timestamp,
    Time,
    Boolean,
}

impl DdlType {
    /// Parse a type name, case-insensitively.
    ///
    /// Accepts the semantic names plus the common SQL aliases.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "integer" | "int" | "i32" => Some(DdlType::Integer),
            "long" | "bigint" | "i64" => Some(DdlType::Long),
            "string" | "varchar" | "text" => Some(DdlType::String),
            "float" | "real" | "f32" => Some(DdlType::Float),
            "double" | "f64" => Some(DdlType::Double),
            "bigdecimal" | "decimal" | "numeric" => Some(DdlType::BigDecimal),
            "date" => Some(DdlType::Date),
            "timestamp" | "datetime" => Some(DdlType::Timestamp),
            "time" => Some(DdlType::Time),
            "boolean" | "bool" => Some(DdlType::Boolean),
            _ => None,
        }
    }
}

impl fmt::Display for DdlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DdlType::Integer => "Integer",
            DdlType::Long => "Long",
            DdlType::String => "String",
            DdlType::Float => "Float",
            DdlType::Double => "Double",
            DdlType::BigDecimal => "BigDecimal",
            DdlType::Date => "Date",
            DdlType::Timestamp => "Timestamp",
            DdlType::Time => "Time",
            DdlType::Boolean => "Boolean",
        };
        write!(f, "{}", name)
    }
}

/// Size parameters resolved for one column before type mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSize {
    /// Only meaningful for [`DdlType::String`].
    pub length: u32,
    pub precision: u32,
    pub scale: u32,
}
