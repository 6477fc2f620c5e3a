//! SQL Expression AST (Abstract Syntax Tree).
//!
//! A deliberately small, closed set of node types: enough to represent a
//! bare `SELECT` projection list and to prove that comments never influence
//! the parsed tree. Equality is structural, so comment transparency is
//! checkable with `==`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represent a parsed SQL expression or statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    /// A literal value (number or string)
    Literal(Literal),
    /// A bare name reference
    Identifier(Identifier),
    /// The `*` projection
    Star,
    /// A `SELECT <expressions>` statement
    Select(Select),
}

/// A literal value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    /// The literal text (for strings, the unescaped value)
    pub value: String,
    /// Whether this literal was written as a quoted string
    pub is_string: bool,
}

/// A name reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

/// A `SELECT` statement with its projection list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Select {
    pub expressions: Vec<Expression>,
}

impl Expression {
    /// Create a numeric literal
    pub fn number(value: impl Into<String>) -> Self {
        Expression::Literal(Literal {
            value: value.into(),
            is_string: false,
        })
    }

    /// Create a string literal
    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(Literal {
            value: value.into(),
            is_string: true,
        })
    }

    /// Create an identifier
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier { name: name.into() })
    }

    /// Create a star projection
    pub fn star() -> Self {
        Expression::Star
    }

    /// Create a SELECT statement
    pub fn select(expressions: Vec<Expression>) -> Self {
        Expression::Select(Select { expressions })
    }

    /// Whether this expression is a complete statement
    pub fn is_statement(&self) -> bool {
        matches!(self, Expression::Select(_))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(literal) => {
                if literal.is_string {
                    write!(f, "'{}'", literal.value.replace('\'', "''"))
                } else {
                    write!(f, "{}", literal.value)
                }
            }
            Expression::Identifier(identifier) => write!(f, "{}", identifier.name),
            Expression::Star => write!(f, "*"),
            Expression::Select(select) => {
                write!(f, "SELECT ")?;
                for (i, expression) in select.expressions.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", expression)?;
                }
                Ok(())
            }
        }
    }
}
