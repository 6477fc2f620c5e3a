//! SQL dialect registry.
//!
//! A dialect is selection of a configuration record, not a behavior
//! hierarchy: each dialect contributes a [`TokenizerConfig`] value and
//! everything downstream is shared. The registry is closed — resolving an
//! unknown name is a configuration error at the crate boundary, never a
//! silent fallback.

pub mod ansi;
pub mod postgres;
pub mod snowflake;

pub use ansi::AnsiDialect;
pub use postgres::PostgresDialect;
pub use snowflake::SnowflakeDialect;

use crate::error::Result;
use crate::expressions::Expression;
use crate::parser::Parser;
use crate::tokens::{Token, Tokenizer, TokenizerConfig};
use serde::{Deserialize, Serialize};

/// All built-in dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectType {
    /// ANSI SQL (default): `--` line comments, `/* */` block comments
    Ansi,
    /// PostgreSQL: comment syntax identical to ANSI
    Postgres,
    /// Snowflake: adds `//` as a line comment prefix
    Snowflake,
}

impl DialectType {
    /// Resolve a dialect by its case-insensitive name. Returns `None` for
    /// unknown names; the crate boundary maps that to a configuration
    /// error.
    pub fn from_name(name: &str) -> Option<DialectType> {
        match name.to_lowercase().as_str() {
            "ansi" | "generic" => Some(DialectType::Ansi),
            "postgres" | "postgresql" => Some(DialectType::Postgres),
            "snowflake" => Some(DialectType::Snowflake),
            _ => None,
        }
    }
}

/// A SQL dialect implementation
///
/// The only dialect-varying piece is the tokenizer configuration;
/// tokenization and parsing are shared and provided here.
pub trait DialectImpl {
    /// The dialect this implementation represents
    fn dialect_type(&self) -> DialectType;

    /// The tokenizer configuration for this dialect
    fn tokenizer_config(&self) -> TokenizerConfig {
        TokenizerConfig::default()
    }

    /// Tokenize SQL with this dialect's configuration
    fn tokenize(&self, sql: &str) -> Result<Vec<Token>> {
        Tokenizer::new(self.tokenizer_config()).tokenize(sql)
    }

    /// Parse a single statement with this dialect's configuration
    fn parse(&self, sql: &str) -> Result<Expression> {
        Parser::new(self.tokenize(sql)?).parse()
    }
}

/// Dialect factory
pub struct Dialect;

impl Dialect {
    /// Get a dialect implementation by type
    pub fn get(dialect_type: DialectType) -> Box<dyn DialectImpl> {
        match dialect_type {
            DialectType::Ansi => Box::new(AnsiDialect),
            DialectType::Postgres => Box::new(PostgresDialect),
            DialectType::Snowflake => Box::new(SnowflakeDialect),
        }
    }

    /// Get a dialect implementation by case-insensitive name
    pub fn get_by_name(name: &str) -> Option<Box<dyn DialectImpl>> {
        DialectType::from_name(name).map(Self::get)
    }
}
