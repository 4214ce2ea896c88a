//! Assignment expression parsing

use log::trace;
use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::Parser;
use cexpr_common::SourceSpan;

impl<'a> Parser<'a> {
    /// Parse assignment expression. Right-recursive, so `a = b = c`
    /// nests as `a = (b = c)`. The left side is not checked for being
    /// assignable.
    pub fn parse_assignment_expression(&mut self) -> Expression {
        self.nested(|parser| {
            trace!("parse_assignment_expression at {}", parser.current_location());
            let left = parser.parse_conditional_expression();

            if let Some(op) = parser.parse_assignment_operator() {
                let right = parser.parse_assignment_expression();
                let span = SourceSpan::new(left.span.start.clone(), right.span.end.clone());

                return parser.make_expr(
                    ExpressionKind::Binary {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                    span,
                );
            }

            left
        })
    }

    /// Parse assignment operator
    fn parse_assignment_operator(&mut self) -> Option<BinaryOp> {
        let op = match self.peek_type() {
            TokenType::Equal => BinaryOp::Assign,
            TokenType::PlusEqual => BinaryOp::AddAssign,
            TokenType::MinusEqual => BinaryOp::SubAssign,
            TokenType::StarEqual => BinaryOp::MulAssign,
            TokenType::SlashEqual => BinaryOp::DivAssign,
            _ => return None,
        };
        self.advance();
        Some(op)
    }
}
