//! SQL Tokens - the atomic units of SQL output.
//!
//! Tokens are dialect-agnostic representations that serialize
//! to dialect-specific strings. Identifiers arrive here already rendered
//! by a [`NameTranslator`](super::name::NameTranslator), so they are
//! emitted verbatim.

use super::dialect::{Dialect, SqlDialect};

/// SQL Token - every element the generator emits.
///
/// Adding a new variant here will cause compile errors everywhere
/// it needs to be handled (exhaustive matching).
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // === Query Keywords ===
    Select,
    Distinct,
    From,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Asc,
    Desc,
    As,
    On,
    Inner,
    Left,
    Right,
    Outer,
    Join,

    // === Condition Keywords ===
    And,
    Not,
    Escape,

    // === Pagination ===
    Limit,
    Offset,
    Rows,
    Fetch,
    Next,
    Only,

    // === DML Keywords ===
    Insert,
    Into,
    Values,
    Default,
    Update,
    Set,
    Delete,

    // === DDL Keywords ===
    Create,
    Drop,
    Table,
    Sequence,
    Primary,
    Key,
    Foreign,
    References,
    Unique,
    Null,
    Start,
    With,
    Increment,
    By,

    // === Punctuation ===
    Comma,
    Star,
    LParen,
    RParen,

    // === Operators ===
    Eq,
    Plus,
    Minus,
    Mul,
    Div,
    Concat,
    /// Comparison or logic keyword chosen by the dialect (`<>`, `is null`, `not in`, ...).
    Operator(&'static str),

    // === Whitespace ===
    Space,

    // === Dynamic Content ===
    /// Identifier text already produced by the name translator.
    Ident(String),
    /// Integer literal
    LitInt(i64),
    /// Unsigned integer literal (row counts)
    LitUInt(u64),
    /// Float literal (the generator rejects NaN and infinities before pushing)
    LitFloat(f64),
    /// String literal
    LitString(String),
    /// Boolean literal
    LitBool(bool),
    /// NULL literal
    LitNull,
    /// Positional parameter placeholder, with an optional label for the binder.
    Param(Option<String>),

    // === Function Names ===
    /// Function name, always rendered upper case.
    FunctionName(&'static str),

    // === Escape Hatch ===
    /// Raw SQL passed directly to output without escaping.
    ///
    /// # Security Warning
    ///
    /// **Never pass user input to this variant.** Raw SQL is not sanitized.
    /// Dialect hooks use it for fixed fragments such as locking clauses.
    Raw(String),
}

impl Token {
    /// Serialize this token to a string for the given dialect.
    pub fn serialize(&self, dialect: Dialect) -> String {
        match self {
            // Query keywords
            Token::Select => "select".into(),
            Token::Distinct => "distinct".into(),
            Token::From => "from".into(),
            Token::Where => "where".into(),
            Token::GroupBy => "group by".into(),
            Token::Having => "having".into(),
            Token::OrderBy => "order by".into(),
            Token::Asc => "ASC".into(),
            Token::Desc => "DESC".into(),
            Token::As => "AS".into(),
            Token::On => "on".into(),
            Token::Inner => "inner".into(),
            Token::Left => "left".into(),
            Token::Right => "right".into(),
            Token::Outer => "outer".into(),
            Token::Join => "join".into(),

            // Condition keywords
            Token::And => "and".into(),
            Token::Not => "not".into(),
            Token::Escape => "escape".into(),

            // Pagination
            Token::Limit => "limit".into(),
            Token::Offset => "offset".into(),
            Token::Rows => "rows".into(),
            Token::Fetch => "fetch".into(),
            Token::Next => "next".into(),
            Token::Only => "only".into(),

            // DML keywords
            Token::Insert => "insert".into(),
            Token::Into => "into".into(),
            Token::Values => "values".into(),
            Token::Default => "default".into(),
            Token::Update => "update".into(),
            Token::Set => "set".into(),
            Token::Delete => "delete".into(),

            // DDL keywords
            Token::Create => "create".into(),
            Token::Drop => "drop".into(),
            Token::Table => "table".into(),
            Token::Sequence => "sequence".into(),
            Token::Primary => "primary".into(),
            Token::Key => "key".into(),
            Token::Foreign => "foreign".into(),
            Token::References => "references".into(),
            Token::Unique => "unique".into(),
            Token::Null => "null".into(),
            Token::Start => "start".into(),
            Token::With => "with".into(),
            Token::Increment => "increment".into(),
            Token::By => "by".into(),

            // Punctuation
            Token::Comma => ",".into(),
            Token::Star => "*".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),

            // Operators
            Token::Eq => "=".into(),
            Token::Plus => "+".into(),
            Token::Minus => "-".into(),
            Token::Mul => "*".into(),
            Token::Div => "/".into(),
            Token::Concat => dialect.concat_operator().into(),
            Token::Operator(op) => (*op).into(),

            Token::Space => " ".into(),

            // Dynamic
            Token::Ident(name) => name.clone(),
            Token::LitInt(n) => n.to_string(),
            Token::LitUInt(n) => n.to_string(),
            Token::LitFloat(f) => {
                let mut buffer = ryu::Buffer::new();
                buffer.format(*f).to_string()
            }
            Token::LitString(s) => dialect.quote_string(s),
            Token::LitBool(b) => dialect.format_bool(*b).into(),
            Token::LitNull => "NULL".into(),
            Token::Param(_) => "?".into(),

            Token::FunctionName(name) => name.to_uppercase(),

            Token::Raw(s) => s.clone(),
        }
    }
}

/// A stream of tokens that can be serialized to SQL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Create an empty token stream.
    pub fn new() -> Self {
        Self { tokens: vec![] }
    }

    /// Push a single token.
    pub fn push(&mut self, token: Token) -> &mut Self {
        self.tokens.push(token);
        self
    }

    /// Extend with multiple tokens.
    pub fn extend(&mut self, tokens: impl IntoIterator<Item = Token>) -> &mut Self {
        self.tokens.extend(tokens);
        self
    }

    /// Append another token stream.
    pub fn append(&mut self, other: &TokenStream) -> &mut Self {
        self.tokens.extend(other.tokens.iter().cloned());
        self
    }

    /// Append several streams separated by `separator`.
    pub fn append_separated<'a>(
        &mut self,
        streams: impl IntoIterator<Item = &'a TokenStream>,
        separator: &[Token],
    ) -> &mut Self {
        for (i, stream) in streams.into_iter().enumerate() {
            if i > 0 {
                self.tokens.extend(separator.iter().cloned());
            }
            self.append(stream);
        }
        self
    }

    /// Append several streams as a `, ` separated list.
    pub fn append_comma_separated<'a>(
        &mut self,
        streams: impl IntoIterator<Item = &'a TokenStream>,
    ) -> &mut Self {
        self.append_separated(streams, &[Token::Comma, Token::Space])
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Labels of the parameter placeholders, in the order they appear.
    pub fn parameters(&self) -> Vec<Option<String>> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                Token::Param(label) => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    /// Serialize all tokens to a SQL string.
    pub fn serialize(&self, dialect: Dialect) -> String {
        self.tokens.iter().map(|t| t.serialize(dialect)).collect()
    }

    // Convenience methods for common tokens
    pub fn space(&mut self) -> &mut Self {
        self.push(Token::Space)
    }
    pub fn comma(&mut self) -> &mut Self {
        self.push(Token::Comma)
    }
    pub fn lparen(&mut self) -> &mut Self {
        self.push(Token::LParen)
    }
    pub fn rparen(&mut self) -> &mut Self {
        self.push(Token::RParen)
    }
    pub fn raw(&mut self, sql: impl Into<String>) -> &mut Self {
        self.push(Token::Raw(sql.into()))
    }
    pub fn ident(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(Token::Ident(name.into()))
    }
}

impl From<Token> for TokenStream {
    fn from(token: Token) -> Self {
        Self {
            tokens: vec![token],
        }
    }
}
