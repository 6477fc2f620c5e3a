//! Token types and tokenization for SQL parsing
//!
//! This module defines the token model and the tokenizer that converts SQL
//! strings into token streams. Comment classification runs before any other
//! lexical rule: template comments `{# ... #}` first (for every dialect),
//! then the dialect's block comment pairs, then its single-line comment
//! prefixes, tried longest-first. Only afterwards do literal, identifier and
//! operator rules apply, which is what keeps `//` from being split into two
//! division tokens in dialects that treat it as a comment.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Template comment delimiters, recognized for every dialect.
///
/// These are fused into the scanner ahead of all configured comment rules;
/// a dialect override can replace its own comment markers but can never
/// disable this form.
pub const TEMPLATE_COMMENT_START: &str = "{#";
pub const TEMPLATE_COMMENT_END: &str = "#}";

/// Represents a position in the source SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Starting character offset
    pub start: usize,
    /// Ending character offset (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self { start, end, line, column }
    }
}

/// A token in the SQL token stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub token_type: TokenType,
    /// The token text. For every kind except `String` this is the raw
    /// source slice covered by the span; `String` tokens store the
    /// unescaped literal value (the raw slice stays recoverable through
    /// the span).
    pub text: String,
    /// Position information
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(token_type: TokenType, text: impl Into<String>, span: Span) -> Self {
        Self {
            token_type,
            text: text.into(),
            span,
        }
    }

    /// Whether this token is a comment of any form
    pub fn is_comment(&self) -> bool {
        self.token_type == TokenType::Comment
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.token_type, self.text)
    }
}

/// All token types produced by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    // Comments (emitted as tokens; stripped before parsing)
    Comment,

    // Literals
    Number,
    String,
    Identifier,

    // Keywords
    Select,
    From,
    Where,
    Group,
    Order,
    By,
    Limit,
    And,
    Or,
    Not,
    As,
    Distinct,

    // Punctuation
    LParen,
    RParen,
    Comma,
    Dot,
    Semicolon,

    // Operators
    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Eq,
    Lt,
    Gt,

    // End of input (synthetic, zero-length)
    Eof,
}

impl TokenType {
    /// Check if this token type is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenType::Select
                | TokenType::From
                | TokenType::Where
                | TokenType::Group
                | TokenType::Order
                | TokenType::By
                | TokenType::Limit
                | TokenType::And
                | TokenType::Or
                | TokenType::Not
                | TokenType::As
                | TokenType::Distinct
        )
    }

    /// Check if this token type is an arithmetic or comparison operator
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::Plus
                | TokenType::Dash
                | TokenType::Star
                | TokenType::Slash
                | TokenType::Percent
                | TokenType::Eq
                | TokenType::Lt
                | TokenType::Gt
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Tokenizer configuration for a dialect
///
/// Dialect behavior is data: a dialect is fully described by the
/// configuration value it hands to [`Tokenizer::new`]. The template comment
/// form is deliberately absent — it cannot be configured away.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Keywords mapping (uppercase keyword -> token type)
    pub keywords: HashMap<String, TokenType>,
    /// Single character tokens
    pub single_tokens: HashMap<char, TokenType>,
    /// Single-line comment prefixes. Matched longest-first; duplicates are
    /// removed when the tokenizer is constructed.
    pub line_comments: Vec<String>,
    /// Block comment delimiter pairs (open, close)
    pub block_comments: Vec<(String, String)>,
    /// String quote characters (start -> end)
    pub quotes: HashMap<char, char>,
    /// String escape characters honored inside quotes, in addition to the
    /// always-on doubled closing quote
    pub string_escapes: Vec<char>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        let mut keywords = HashMap::new();
        keywords.insert("SELECT".to_string(), TokenType::Select);
        keywords.insert("FROM".to_string(), TokenType::From);
        keywords.insert("WHERE".to_string(), TokenType::Where);
        keywords.insert("GROUP".to_string(), TokenType::Group);
        keywords.insert("ORDER".to_string(), TokenType::Order);
        keywords.insert("BY".to_string(), TokenType::By);
        keywords.insert("LIMIT".to_string(), TokenType::Limit);
        keywords.insert("AND".to_string(), TokenType::And);
        keywords.insert("OR".to_string(), TokenType::Or);
        keywords.insert("NOT".to_string(), TokenType::Not);
        keywords.insert("AS".to_string(), TokenType::As);
        keywords.insert("DISTINCT".to_string(), TokenType::Distinct);

        let mut single_tokens = HashMap::new();
        single_tokens.insert('(', TokenType::LParen);
        single_tokens.insert(')', TokenType::RParen);
        single_tokens.insert(',', TokenType::Comma);
        single_tokens.insert('.', TokenType::Dot);
        single_tokens.insert(';', TokenType::Semicolon);
        single_tokens.insert('+', TokenType::Plus);
        single_tokens.insert('-', TokenType::Dash);
        single_tokens.insert('*', TokenType::Star);
        single_tokens.insert('/', TokenType::Slash);
        single_tokens.insert('%', TokenType::Percent);
        single_tokens.insert('=', TokenType::Eq);
        single_tokens.insert('<', TokenType::Lt);
        single_tokens.insert('>', TokenType::Gt);

        let mut quotes = HashMap::new();
        quotes.insert('\'', '\'');

        Self {
            keywords,
            single_tokens,
            line_comments: vec!["--".to_string()],
            block_comments: vec![("/*".to_string(), "*/".to_string())],
            quotes,
            string_escapes: vec!['\\'],
        }
    }
}

/// SQL Tokenizer
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a new tokenizer with the given configuration
    pub fn new(mut config: TokenizerConfig) -> Self {
        // Longest prefix wins when several comment markers match at the
        // same position, so order the tables up front.
        config.line_comments.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        config.line_comments.dedup();
        config
            .block_comments
            .sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.cmp(b)));
        config.block_comments.dedup();
        Self { config }
    }

    /// Tokenize a SQL string
    pub fn tokenize(&self, sql: &str) -> Result<Vec<Token>> {
        let mut state = TokenizerState::new(sql, &self.config);
        state.tokenize()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

/// Internal state for tokenization
///
/// One instance per `tokenize` call; the cursor never outlives the call, so
/// concurrent tokenization of independent inputs is safe.
struct TokenizerState<'a> {
    chars: Vec<char>,
    size: usize,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
    config: &'a TokenizerConfig,
}

impl<'a> TokenizerState<'a> {
    fn new(sql: &str, config: &'a TokenizerConfig) -> Self {
        let chars: Vec<char> = sql.chars().collect();
        let size = chars.len();
        Self {
            chars,
            size,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            config,
        }
    }

    fn tokenize(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }

            self.start = self.current;
            self.scan_token()?;
        }

        let span = Span::new(self.size, self.size, self.line, self.column);
        self.tokens.push(Token::new(TokenType::Eof, "", span));

        Ok(std::mem::take(&mut self.tokens))
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.size
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.size {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Check whether `marker` occurs at the cursor
    fn matches(&self, marker: &str) -> bool {
        let mut idx = self.current;
        for ch in marker.chars() {
            if idx >= self.size || self.chars[idx] != ch {
                return false;
            }
            idx += 1;
        }
        true
    }

    fn consume(&mut self, marker: &str) {
        for _ in marker.chars() {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    fn scan_token(&mut self) -> Result<()> {
        // Comment rules come before everything else. Template comments come
        // before the dialect's own rules and cannot be disabled.
        if self.matches(TEMPLATE_COMMENT_START) {
            self.scan_template_comment();
            return Ok(());
        }

        let block = self
            .config
            .block_comments
            .iter()
            .find(|(open, _)| self.matches(open))
            .cloned();
        if let Some((open, close)) = block {
            self.scan_block_comment(&open, &close);
            return Ok(());
        }

        // line_comments is sorted longest-first, so `//` is matched as a
        // whole before any shorter overlapping prefix.
        let prefix = self
            .config
            .line_comments
            .iter()
            .find(|prefix| self.matches(prefix))
            .cloned();
        if let Some(prefix) = prefix {
            self.scan_line_comment(&prefix);
            return Ok(());
        }

        let c = self.peek();

        if c.is_ascii_digit() {
            self.scan_number();
            return Ok(());
        }

        if let Some(&end_quote) = self.config.quotes.get(&c) {
            return self.scan_string(end_quote);
        }

        if c.is_alphabetic() || c == '_' {
            self.scan_identifier_or_keyword();
            return Ok(());
        }

        if let Some(&token_type) = self.config.single_tokens.get(&c) {
            self.advance();
            self.add_token(token_type);
            return Ok(());
        }

        let c = self.advance();
        Err(Error::tokenize(
            format!("Unexpected character: '{}'", c),
            self.line,
            self.column,
        ))
    }

    /// Scan a `{# ... #}` comment. Unterminated comments extend to end of
    /// input and still produce a valid token.
    fn scan_template_comment(&mut self) {
        self.consume(TEMPLATE_COMMENT_START);
        while !self.is_at_end() && !self.matches(TEMPLATE_COMMENT_END) {
            self.advance();
        }
        if !self.is_at_end() {
            self.consume(TEMPLATE_COMMENT_END);
        }
        self.add_token(TokenType::Comment);
    }

    /// Scan a block comment to the first occurrence of `close` (no
    /// nesting), or to end of input if unterminated.
    fn scan_block_comment(&mut self, open: &str, close: &str) {
        self.consume(open);
        while !self.is_at_end() && !self.matches(close) {
            self.advance();
        }
        if !self.is_at_end() {
            self.consume(close);
        }
        self.add_token(TokenType::Comment);
    }

    /// Scan a single-line comment to the end of the line. The newline is
    /// not part of the token.
    fn scan_line_comment(&mut self, prefix: &str) {
        self.consume(prefix);
        while !self.is_at_end() && self.peek() != '\n' && self.peek() != '\r' {
            self.advance();
        }
        self.add_token(TokenType::Comment);
    }

    fn scan_number(&mut self) {
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }

        // Fractional part: a single dot followed by at least one digit
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while !self.is_at_end() && self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        self.add_token(TokenType::Number);
    }

    /// Scan a string literal. Comment markers inside the quotes are plain
    /// text; the scanner only leaves the string at the closing quote.
    fn scan_string(&mut self, end_quote: char) -> Result<()> {
        self.advance(); // Opening quote
        let mut value = String::new();

        while !self.is_at_end() {
            let c = self.peek();
            if c == end_quote {
                if self.peek_next() == end_quote {
                    // Doubled quote
                    value.push(end_quote);
                    self.advance();
                    self.advance();
                } else {
                    break;
                }
            } else if c == '\\' && self.config.string_escapes.contains(&'\\') {
                self.advance(); // Consume the backslash
                if !self.is_at_end() {
                    let escaped = self.advance();
                    match escaped {
                        'n' => value.push('\n'),
                        'r' => value.push('\r'),
                        't' => value.push('\t'),
                        '\\' => value.push('\\'),
                        '\'' => value.push('\''),
                        '"' => value.push('"'),
                        _ => {
                            // Preserve backslash + char for unrecognized escapes
                            value.push('\\');
                            value.push(escaped);
                        }
                    }
                }
            } else {
                value.push(self.advance());
            }
        }

        if self.is_at_end() {
            return Err(Error::tokenize(
                "Unterminated string",
                self.line,
                self.column,
            ));
        }

        self.advance(); // Closing quote
        self.add_token_with_text(TokenType::String, value);
        Ok(())
    }

    fn scan_identifier_or_keyword(&mut self) {
        while !self.is_at_end() {
            let c = self.peek();
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let text: String = self.chars[self.start..self.current].iter().collect();
        let token_type = self
            .config
            .keywords
            .get(&text.to_uppercase())
            .copied()
            .unwrap_or(TokenType::Identifier);
        self.add_token_with_text(token_type, text);
    }

    fn add_token(&mut self, token_type: TokenType) {
        let text: String = self.chars[self.start..self.current].iter().collect();
        self.add_token_with_text(token_type, text);
    }

    fn add_token_with_text(&mut self, token_type: TokenType, text: String) {
        let span = Span::new(self.start, self.current, self.line, self.column);
        self.tokens.push(Token::new(token_type, text, span));
    }
}

/// Remove all comment tokens from a token stream.
///
/// The relative order of the remaining tokens is preserved. Idempotent:
/// stripping an already-stripped stream is a no-op.
pub fn strip_comments(tokens: Vec<Token>) -> Vec<Token> {
    tokens.into_iter().filter(|t| !t.is_comment()).collect()
}
