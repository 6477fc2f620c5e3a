//! ANSI SQL Dialect

use super::{DialectImpl, DialectType};

/// The default dialect: `--` line comments and `/* */` block comments.
pub struct AnsiDialect;

impl DialectImpl for AnsiDialect {
    fn dialect_type(&self) -> DialectType {
        DialectType::Ansi
    }
}
