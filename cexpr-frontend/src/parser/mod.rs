//! Recursive descent expression parser
//!
//! Parses tokens into an expression AST. Every grammar level returns a node
//! unconditionally: malformed input is recorded as a `ParseError`, a bounded
//! number of tokens is skipped, and parsing carries on.

pub mod errors;
pub mod types;
pub mod expressions;

use crate::ast::*;
use crate::config::ParserConfig;
use crate::lexer::{Token, TokenType};
use cexpr_common::{ErrorReporter, SourceLocation, SourceSpan, SymbolTable};
use log::debug;
use std::collections::VecDeque;

pub use errors::{ParseError, ParseErrorKind};

/// Expression parser over a token stream.
///
/// The symbol table is borrowed read-only: scopes are managed by whoever
/// drives the parse, and names must be declared before they are used.
pub struct Parser<'a> {
    pub(crate) tokens: VecDeque<Token>,
    /// Kept out of `tokens` so that it is never consumed
    eof: Token,
    previous_end: SourceLocation,
    pub(crate) symbols: &'a SymbolTable,
    pub(crate) node_id_gen: NodeIdGenerator,
    pub(crate) config: ParserConfig,
    depth: usize,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, symbols: &'a SymbolTable) -> Self {
        Self::with_config(tokens, symbols, ParserConfig::default())
    }

    pub fn with_config(tokens: Vec<Token>, symbols: &'a SymbolTable, config: ParserConfig) -> Self {
        let (eofs, tokens): (Vec<Token>, Vec<Token>) =
            tokens.into_iter().partition(|t| t.is_eof());

        let eof = eofs.into_iter().next().unwrap_or_else(|| {
            let location = tokens
                .last()
                .map(|t| t.span.end.clone())
                .unwrap_or_else(|| SourceLocation::new(&config.filename, 1, 1));
            Token::eof(location)
        });

        let previous_end = tokens
            .first()
            .map(|t| t.span.start.clone())
            .unwrap_or_else(|| eof.span.start.clone());

        Self {
            tokens: tokens.into(),
            eof,
            previous_end,
            symbols,
            node_id_gen: NodeIdGenerator::new(),
            config,
            depth: 0,
            errors: Vec::new(),
        }
    }

    /// Current token (the end-of-file token once input is exhausted)
    pub fn peek(&self) -> &Token {
        self.tokens.front().unwrap_or(&self.eof)
    }

    pub fn peek_type(&self) -> &TokenType {
        &self.peek().token_type
    }

    /// Consume the current token. At end of input this is a no-op that
    /// returns the end-of-file token.
    pub fn advance(&mut self) -> Token {
        match self.tokens.pop_front() {
            Some(token) => {
                self.previous_end = token.span.end.clone();
                token
            }
            None => self.eof.clone(),
        }
    }

    /// Check if the current token has the same kind as `token_type`
    pub fn check(&self, token_type: &TokenType) -> bool {
        std::mem::discriminant(self.peek_type()) == std::mem::discriminant(token_type)
    }

    pub fn check_identifier(&self) -> bool {
        matches!(self.peek_type(), TokenType::Identifier(_))
    }

    pub fn check_int(&self) -> bool {
        matches!(self.peek_type(), TokenType::IntLiteral(_))
    }

    /// Consume the current token if it matches
    pub fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require `token_type`. On mismatch an `UnexpectedToken` is recorded
    /// and the offending token is skipped anyway.
    pub fn expect(&mut self, token_type: TokenType, context: &str) -> bool {
        if self.match_token(&token_type) {
            return true;
        }

        let location = self.current_location();
        let found = self.peek_type().clone();
        self.report(ParseError::UnexpectedToken {
            expected: format!("'{}' in {}", token_type, context),
            found,
            location,
        });
        self.advance();
        false
    }

    pub fn current_location(&self) -> SourceLocation {
        self.peek().span.start.clone()
    }

    /// Raw source text of the current token
    pub fn current_text(&self) -> &str {
        &self.peek().text
    }

    /// End of the most recently consumed token
    pub fn previous_end(&self) -> SourceLocation {
        self.previous_end.clone()
    }

    pub fn is_at_end(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn remaining_tokens(&self) -> usize {
        self.tokens.len()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn take_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.errors)
    }

    /// Forward every recorded error into a diagnostics sink
    pub fn report_to(&self, reporter: &mut ErrorReporter) {
        for error in &self.errors {
            reporter.report(error.to_diagnostic());
        }
    }

    /// Parse one expression that must span the rest of the input
    pub fn parse_complete_expression(&mut self) -> Expression {
        let expr = self.parse_expression();

        if !self.is_at_end() {
            let location = self.current_location();
            let found = self.peek_type().clone();
            self.report(ParseError::UnexpectedToken {
                expected: "end of input".to_string(),
                found,
                location,
            });
        }

        expr
    }

    pub(crate) fn report(&mut self, error: ParseError) {
        debug!("{}: {}", error.location(), error);
        self.errors.push(error);
    }

    pub(crate) fn make_expr(&mut self, kind: ExpressionKind, span: SourceSpan) -> Expression {
        Expression {
            node_id: self.node_id_gen.next(),
            kind,
            span,
        }
    }

    /// Span from `start` to the end of the last consumed token
    pub(crate) fn span_from(&self, start: SourceLocation) -> SourceSpan {
        SourceSpan::new(start, self.previous_end())
    }

    /// Run one guarded grammar frame. Past `max_depth` the frame is not
    /// entered: `NestingTooDeep` is recorded, one token is skipped and an
    /// `Invalid` node stands in for the subtree.
    pub(crate) fn nested(&mut self, parse: impl FnOnce(&mut Self) -> Expression) -> Expression {
        if self.depth >= self.config.max_depth {
            let token = self.advance();
            self.report(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
                location: token.span.start.clone(),
            });
            return self.make_expr(ExpressionKind::Invalid, token.span);
        }

        self.depth += 1;
        let expr = parse(self);
        self.depth -= 1;
        expr
    }
}
