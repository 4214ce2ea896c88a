//! cexpr - Frontend
//!
//! This crate provides the expression front end:
//! - Lexer: tokenizes C expression source
//! - Parser: builds an expression AST from tokens, resolving identifiers
//!   against a symbol table and recovering from malformed input
//! - AST: expression tree definitions and a prefix-notation formatter

pub mod lexer;
pub mod parser;
pub mod ast;
pub mod types;
pub mod config;

pub use lexer::{Lexer, Token, TokenType};
pub use parser::{Parser, ParseError, ParseErrorKind};
pub use ast::{Expression, ExpressionKind, BinaryOp, UnaryOp, NodeIdGenerator, format_expression};
pub use types::Type;
pub use config::ParserConfig;

use cexpr_common::{CompilerError, ErrorReporter, SymbolTable};

/// Result of parsing one expression from source
#[derive(Debug, Clone)]
pub struct ParsedExpression {
    pub expression: Expression,
    pub errors: Vec<ParseError>,
}

impl ParsedExpression {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn report_to(&self, reporter: &mut ErrorReporter) {
        for error in &self.errors {
            reporter.report(error.to_diagnostic());
        }
    }
}

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Tokenize source code (for debugging)
    pub fn tokenize_source(source: &str) -> Result<Vec<Token>, CompilerError> {
        let mut lexer = Lexer::new(source);
        lexer.tokenize()
    }

    /// Parse one expression spanning the whole source. Only lexer errors
    /// are fatal; parse problems come back in `ParsedExpression::errors`.
    pub fn parse_expression_source(
        source: &str,
        symbols: &SymbolTable,
    ) -> Result<ParsedExpression, CompilerError> {
        Self::parse_expression_source_with_config(source, symbols, ParserConfig::default())
    }

    pub fn parse_expression_source_with_config(
        source: &str,
        symbols: &SymbolTable,
        config: ParserConfig,
    ) -> Result<ParsedExpression, CompilerError> {
        let mut lexer = Lexer::with_filename(source, &config.filename);
        let tokens = lexer.tokenize()?;

        let mut parser = Parser::with_config(tokens, symbols, config);
        let expression = parser.parse_complete_expression();

        Ok(ParsedExpression {
            expression,
            errors: parser.take_errors(),
        })
    }
}
