//! Snowflake Dialect
//!
//! Snowflake accepts `//` as a single-line comment in addition to the
//! standard forms. Declaring it here means the comment rules consume both
//! slashes before the operator table ever sees them, so `//` is never
//! tokenized as two division operators.

use super::{DialectImpl, DialectType};
use crate::tokens::TokenizerConfig;

/// Snowflake dialect
pub struct SnowflakeDialect;

impl DialectImpl for SnowflakeDialect {
    fn dialect_type(&self) -> DialectType {
        DialectType::Snowflake
    }

    fn tokenizer_config(&self) -> TokenizerConfig {
        let mut config = TokenizerConfig::default();
        config.line_comments.push("//".to_string());
        config
    }
}
