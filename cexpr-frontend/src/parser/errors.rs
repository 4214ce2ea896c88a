//! Diagnostics recorded by the parser
//!
//! None of these abort parsing. The parser records them, applies its local
//! recovery, and keeps going.

use crate::lexer::TokenType;
use cexpr_common::{CompilerError, Diagnostic, SourceLocation, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A required token was missing
    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken {
        expected: String,
        found: TokenType,
        location: SourceLocation,
    },

    /// No primary-expression production matched
    #[error("expected expression, found '{found}'")]
    ExpectedExpression {
        found: TokenType,
        location: SourceLocation,
    },

    #[error("undefined symbol '{name}'")]
    UndefinedSymbol {
        name: String,
        location: SourceLocation,
    },

    /// `.` or `->` not followed by an identifier
    #[error("expected field name, found '{found}'")]
    MissingFieldName {
        found: TokenType,
        location: SourceLocation,
    },

    #[error("invalid type name: {message}")]
    InvalidType {
        message: String,
        location: SourceLocation,
    },

    #[error("expression nested too deeply (limit is {limit})")]
    NestingTooDeep {
        limit: usize,
        location: SourceLocation,
    },
}

/// Fieldless mirror of `ParseError` for quick classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnexpectedToken,
    ExpectedExpression,
    UndefinedSymbol,
    MissingFieldName,
    InvalidType,
    NestingTooDeep,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::UnexpectedToken { .. } => ParseErrorKind::UnexpectedToken,
            ParseError::ExpectedExpression { .. } => ParseErrorKind::ExpectedExpression,
            ParseError::UndefinedSymbol { .. } => ParseErrorKind::UndefinedSymbol,
            ParseError::MissingFieldName { .. } => ParseErrorKind::MissingFieldName,
            ParseError::InvalidType { .. } => ParseErrorKind::InvalidType,
            ParseError::NestingTooDeep { .. } => ParseErrorKind::NestingTooDeep,
        }
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::ExpectedExpression { location, .. }
            | ParseError::UndefinedSymbol { location, .. }
            | ParseError::MissingFieldName { location, .. }
            | ParseError::InvalidType { location, .. }
            | ParseError::NestingTooDeep { location, .. } => location,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(
            self.to_string(),
            SourceSpan::from_location(self.location().clone()),
        )
    }
}

impl From<ParseError> for CompilerError {
    fn from(err: ParseError) -> Self {
        let location = err.location().clone();
        CompilerError::parse_error(err.to_string(), location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let location = SourceLocation::new_simple(1, 4);

        let err = ParseError::UnexpectedToken {
            expected: "')' in parenthesized expression".to_string(),
            found: TokenType::Semicolon,
            location: location.clone(),
        };
        assert_eq!(err.to_string(), "expected ')' in parenthesized expression, found ';'");
        assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);

        let err = ParseError::UndefinedSymbol { name: "y".to_string(), location };
        assert_eq!(err.to_string(), "undefined symbol 'y'");
    }

    #[test]
    fn test_conversions() {
        let err = ParseError::MissingFieldName {
            found: TokenType::IntLiteral(3),
            location: SourceLocation::new("expr.c", 2, 5),
        };

        let diagnostic = err.to_diagnostic();
        assert_eq!(diagnostic.message, "expected field name, found '3'");
        assert_eq!(diagnostic.span.start, SourceLocation::new("expr.c", 2, 5));

        let compiler_error: CompilerError = err.into();
        assert_eq!(
            compiler_error.to_string(),
            "Parse error at expr.c:2:5: expected field name, found '3'"
        );
    }
}
