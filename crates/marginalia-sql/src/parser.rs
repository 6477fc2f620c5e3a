//! Minimal statement parser.
//!
//! Consumes a token stream and builds a `SELECT <expr-list>` AST. Comment
//! tokens are stripped before parsing begins, so they can never influence
//! the resulting tree. The parser is fail-fast: the first grammar violation
//! aborts with a syntax error carrying the offending token's position.

use crate::error::{Error, Result};
use crate::expressions::Expression;
use crate::tokens::{strip_comments, Span, Token, TokenType, Tokenizer};

/// SQL statement parser
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Create a parser over a token stream. Comments are stripped here, so
    /// callers may feed either raw or pre-stripped streams.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens = strip_comments(tokens);
        // Tolerate streams missing the synthetic EOF terminator
        if tokens.last().map(|t| t.token_type) != Some(TokenType::Eof) {
            let position = tokens.last().map(|t| t.span.end).unwrap_or(0);
            tokens.push(Token::new(
                TokenType::Eof,
                "",
                Span::new(position, position, 1, 1),
            ));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// Tokenize and parse with the default (ANSI) configuration.
    pub fn parse_sql(sql: &str) -> Result<Expression> {
        let tokens = Tokenizer::default().tokenize(sql)?;
        Parser::new(tokens).parse()
    }

    /// Parse a single `SELECT` statement.
    pub fn parse(&mut self) -> Result<Expression> {
        self.expect(TokenType::Select)?;
        let expressions = self.parse_projections()?;
        self.expect(TokenType::Eof)?;
        Ok(Expression::select(expressions))
    }

    /// Parse a non-empty, comma-separated projection list. A comma not
    /// followed by a projection is an error, so trailing commas fail here.
    fn parse_projections(&mut self) -> Result<Vec<Expression>> {
        let mut expressions = vec![self.parse_projection()?];
        while self.peek().token_type == TokenType::Comma {
            self.advance();
            expressions.push(self.parse_projection()?);
        }
        Ok(expressions)
    }

    fn parse_projection(&mut self) -> Result<Expression> {
        let token = self.advance();
        match token.token_type {
            TokenType::Number => Ok(Expression::number(token.text)),
            TokenType::String => Ok(Expression::string(token.text)),
            TokenType::Star => Ok(Expression::star()),
            TokenType::Identifier => Ok(Expression::identifier(token.text)),
            // Keywords the minimal grammar gives no meaning to are usable
            // as plain names, keeping their original spelling.
            t if t.is_keyword() && t != TokenType::Select => {
                Ok(Expression::identifier(token.text))
            }
            TokenType::Eof => Err(Error::syntax(
                "Unexpected end of input, expected an expression",
                token.span.line,
                token.span.column,
            )),
            _ => Err(Error::syntax(
                format!("Unexpected token {} in projection", token),
                token.span.line,
                token.span.column,
            )),
        }
    }

    fn peek(&self) -> &Token {
        // The stream always ends with EOF, so clamp instead of overrunning
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    fn expect(&mut self, token_type: TokenType) -> Result<Token> {
        let token = self.peek().clone();
        if token.token_type == token_type {
            self.position += 1;
            Ok(token)
        } else {
            Err(Error::syntax(
                format!("Expected {}, found {}", token_type, token),
                token.span.line,
                token.span.column,
            ))
        }
    }
}
