//! Unary expression parsing

use log::trace;
use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::Parser;
use cexpr_common::SourceSpan;

impl<'a> Parser<'a> {
    /// Parse unary expression: either a prefix operator applied to another
    /// unary expression, or a postfix expression. Any `++`/`--` that follow
    /// wrap the result left to right.
    pub fn parse_unary_expression(&mut self) -> Expression {
        self.nested(|parser| {
            trace!("parse_unary_expression at {}", parser.current_location());
            let start = parser.current_location();

            let mut expr = if let Some(op) = parser.parse_unary_operator() {
                let operand = parser.parse_unary_expression();
                let span = SourceSpan::new(start, operand.span.end.clone());
                parser.make_expr(
                    ExpressionKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    span,
                )
            } else {
                parser.parse_postfix_expression()
            };

            while let Some(op) = parser.parse_postfix_operator() {
                let span = parser.span_from(expr.span.start.clone());
                expr = parser.make_expr(
                    ExpressionKind::Unary {
                        op,
                        operand: Box::new(expr),
                    },
                    span,
                );
            }

            expr
        })
    }

    /// Parse prefix unary operator
    fn parse_unary_operator(&mut self) -> Option<UnaryOp> {
        let op = match self.peek_type() {
            TokenType::Bang => UnaryOp::LogicalNot,
            TokenType::Minus => UnaryOp::Minus,
            TokenType::Star => UnaryOp::Dereference,
            TokenType::Ampersand => UnaryOp::AddressOf,
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    fn parse_postfix_operator(&mut self) -> Option<UnaryOp> {
        let op = match self.peek_type() {
            TokenType::PlusPlus => UnaryOp::PostIncrement,
            TokenType::MinusMinus => UnaryOp::PostDecrement,
            _ => return None,
        };
        self.advance();
        Some(op)
    }
}
