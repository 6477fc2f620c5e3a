//! Marginalia - comment-aware SQL tokenization and minimal parsing
//!
//! This library converts a SQL source string into a token stream and a
//! minimal statement AST, with particular care for comment syntax: the
//! scanner classifies comments before any other lexical rule, so dialect
//! comment markers like Snowflake's `//` are never misread as operators,
//! and recognized comments never influence the parsed tree.
//!
//! # Architecture
//!
//! The library follows a pipeline architecture:
//! 1. **Tokenizer** - Converts the SQL string to a token stream, emitting
//!    one `Comment` token per recognized comment
//! 2. **Comment filter** - Removes `Comment` tokens from the stream
//! 3. **Parser** - Builds a `SELECT` AST from the filtered tokens
//!
//! The tokenizer stage is configured per dialect; filtering and parsing are
//! dialect-independent.

pub mod dialects;
pub mod error;
pub mod expressions;
pub mod parser;
pub mod tokens;

pub use dialects::{Dialect, DialectImpl, DialectType};
pub use error::{Error, Result};
pub use expressions::{Expression, Identifier, Literal, Select};
pub use parser::Parser;
pub use tokens::{
    strip_comments, Span, Token, TokenType, Tokenizer, TokenizerConfig,
    TEMPLATE_COMMENT_END, TEMPLATE_COMMENT_START,
};

/// Tokenize SQL with a dialect's comment configuration.
///
/// # Arguments
/// * `sql` - The SQL string to tokenize
/// * `dialect` - The dialect whose comment rules apply
///
/// # Returns
/// The token stream, comments included, terminated by an `Eof` token.
pub fn tokenize(sql: &str, dialect: DialectType) -> Result<Vec<Token>> {
    Dialect::get(dialect).tokenize(sql)
}

/// Parse a single SQL statement.
///
/// Composition of tokenize, comment stripping, and parsing; the resulting
/// AST is identical whether or not the input carries comments.
///
/// # Example
/// ```
/// use marginalia_sql::{parse_one, DialectType};
///
/// let with_comment = parse_one("SELECT 1 // note", DialectType::Snowflake).unwrap();
/// let without = parse_one("SELECT 1", DialectType::Snowflake).unwrap();
/// assert_eq!(with_comment, without);
/// ```
pub fn parse_one(sql: &str, dialect: DialectType) -> Result<Expression> {
    Dialect::get(dialect).parse(sql)
}

/// Parse a single SQL statement, resolving the dialect by name.
///
/// Names are case-insensitive (`"ansi"`, `"postgres"`, `"snowflake"`, ...);
/// an unknown name is a [`Error::Configuration`] error.
pub fn parse_one_by_name(sql: &str, dialect: &str) -> Result<Expression> {
    let d = Dialect::get_by_name(dialect)
        .ok_or_else(|| Error::configuration(format!("Unknown dialect: {}", dialect)))?;
    d.parse(sql)
}
