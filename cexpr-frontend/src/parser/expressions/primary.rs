//! Primary expression parsing

use log::{debug, trace};
use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::errors::ParseError;
use crate::parser::Parser;
use cexpr_common::{SourceLocation, SourceSpan};

impl<'a> Parser<'a> {
    /// Parse primary expression
    pub fn parse_primary_expression(&mut self) -> Expression {
        self.nested(|parser| {
            trace!("parse_primary_expression at {}", parser.current_location());
            let start = parser.current_location();

            match parser.peek_type().clone() {
                TokenType::LeftParen => {
                    parser.advance();
                    parser.parse_parenthesized(start)
                }
                TokenType::LeftBrace => {
                    parser.advance();
                    parser.parse_aggregate_literal(start)
                }
                TokenType::IntLiteral(value) => {
                    let token = parser.advance();
                    parser.make_expr(ExpressionKind::IntLiteral(value), token.span)
                }
                TokenType::True | TokenType::False => {
                    let token = parser.advance();
                    let value = token.token_type == TokenType::True;
                    parser.make_expr(ExpressionKind::BoolLiteral(value), token.span)
                }
                TokenType::Identifier(name) => parser.parse_identifier(name),
                found => {
                    parser.report(ParseError::ExpectedExpression { found, location: start });
                    let token = parser.advance();
                    parser.make_expr(ExpressionKind::Invalid, token.span)
                }
            }
        })
    }

    /// After `(`: a cast if a type name follows, otherwise a parenthesized
    /// expression, which is returned as is.
    fn parse_parenthesized(&mut self, start: SourceLocation) -> Expression {
        if self.is_declaration_start() {
            debug!("'(' at {} starts a cast", start);
            let target_type = self.parse_type_name();
            self.expect(TokenType::RightParen, "cast");

            // The operand binds at postfix level: `(int)-x` is not a cast of `-x`
            let operand = self.parse_postfix_expression();
            let span = SourceSpan::new(start, operand.span.end.clone());

            return self.make_expr(
                ExpressionKind::Cast {
                    target_type,
                    operand: Box::new(operand),
                },
                span,
            );
        }

        debug!("'(' at {} starts a parenthesized expression", start);
        let expr = self.parse_expression();
        self.expect(TokenType::RightParen, "parenthesized expression");
        expr
    }

    /// After `{`: one or more comma-separated elements, then `}`. The first
    /// element is always parsed, so `{}` reports a missing expression.
    fn parse_aggregate_literal(&mut self, start: SourceLocation) -> Expression {
        let mut elements = Vec::new();

        loop {
            elements.push(self.parse_expression());

            if !self.match_token(&TokenType::Comma) {
                break;
            }
        }

        self.expect(TokenType::RightBrace, "aggregate literal");

        let span = self.span_from(start);
        self.make_expr(ExpressionKind::ArrayLiteral(elements), span)
    }

    /// Identifier reference, resolved against the symbol table as it is
    /// read. An unresolved name is reported but still yields an identifier
    /// node, and a following `(` still makes it a call.
    fn parse_identifier(&mut self, name: String) -> Expression {
        let symbol = self.symbols.lookup(&name);
        let token = self.advance();

        if symbol.is_none() {
            self.report(ParseError::UndefinedSymbol {
                name: name.clone(),
                location: token.span.start.clone(),
            });
        }

        let start = token.span.start.clone();
        let ident = self.make_expr(ExpressionKind::Identifier { name, symbol }, token.span);

        if !self.match_token(&TokenType::LeftParen) {
            return ident;
        }

        let mut arguments = Vec::new();
        if !self.check(&TokenType::RightParen) {
            loop {
                arguments.push(self.parse_expression());

                if !self.match_token(&TokenType::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenType::RightParen, "function call");

        let span = self.span_from(start);
        self.make_expr(
            ExpressionKind::Call {
                function: Box::new(ident),
                arguments,
            },
            span,
        )
    }
}
