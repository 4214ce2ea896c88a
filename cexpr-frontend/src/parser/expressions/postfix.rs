//! Postfix expression parsing: indexing and member access

use log::trace;
use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::errors::ParseError;
use crate::parser::Parser;
use cexpr_common::SourceSpan;

impl<'a> Parser<'a> {
    /// Parse postfix expression
    pub fn parse_postfix_expression(&mut self) -> Expression {
        trace!("parse_postfix_expression at {}", self.current_location());
        let mut expr = self.parse_primary_expression();

        loop {
            match self.peek_type() {
                TokenType::LeftBracket => {
                    // Array indexing
                    self.advance();
                    let index = self.parse_expression();
                    self.expect(TokenType::RightBracket, "array index");

                    let span = self.span_from(expr.span.start.clone());
                    expr = self.make_expr(
                        ExpressionKind::Index {
                            base: Box::new(expr),
                            index: Box::new(index),
                        },
                        span,
                    );
                }
                TokenType::Dot | TokenType::Arrow => {
                    let op = if self.check(&TokenType::Dot) {
                        BinaryOp::Member
                    } else {
                        BinaryOp::PointerMember
                    };
                    self.advance();
                    let member = self.parse_member_name();

                    let span = SourceSpan::new(expr.span.start.clone(), member.span.end.clone());
                    expr = self.make_expr(
                        ExpressionKind::Binary {
                            op,
                            left: Box::new(expr),
                            right: Box::new(member),
                        },
                        span,
                    );
                }
                _ => break,
            }
        }

        expr
    }

    /// Parse the field name after `.` or `->`. Exactly one token is always
    /// consumed; a non-identifier is reported and its text used as the name.
    /// Field names are never resolved against the symbol table.
    fn parse_member_name(&mut self) -> Expression {
        if !self.check_identifier() {
            let location = self.current_location();
            let found = self.peek_type().clone();
            self.report(ParseError::MissingFieldName { found, location });
        }

        let token = self.advance();
        self.make_expr(
            ExpressionKind::Identifier {
                name: token.text,
                symbol: None,
            },
            token.span,
        )
    }
}
