//! PostgreSQL Dialect
//!
//! Comment syntax is identical to ANSI. Kept as a distinct registry entry
//! so non-Snowflake dialects have regression coverage for the always-on
//! template comment form.

use super::{DialectImpl, DialectType};

/// PostgreSQL dialect
pub struct PostgresDialect;

impl DialectImpl for PostgresDialect {
    fn dialect_type(&self) -> DialectType {
        DialectType::Postgres
    }
}
