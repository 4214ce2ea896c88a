//! Binary expression parsing with operator precedence

use log::trace;
use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::Parser;
use cexpr_common::SourceSpan;

impl<'a> Parser<'a> {
    /// Parse conditional expression (ternary operator). Both branches are
    /// parsed at this level, so `a ? b : c ? d : e` nests to the right.
    pub fn parse_conditional_expression(&mut self) -> Expression {
        self.nested(|parser| {
            trace!("parse_conditional_expression at {}", parser.current_location());
            let condition = parser.parse_logical_expression();

            if !parser.match_token(&TokenType::Question) {
                return condition;
            }

            let then_expr = parser.parse_conditional_expression();
            parser.expect(TokenType::Colon, "conditional expression");
            let else_expr = parser.parse_conditional_expression();

            let span = SourceSpan::new(condition.span.start.clone(), else_expr.span.end.clone());
            parser.make_expr(
                ExpressionKind::Conditional {
                    condition: Box::new(condition),
                    then_expr: Box::new(then_expr),
                    else_expr: Box::new(else_expr),
                },
                span,
            )
        })
    }

    /// Parse logical expression. `&&` and `||` share one level.
    pub fn parse_logical_expression(&mut self) -> Expression {
        trace!("parse_logical_expression at {}", self.current_location());
        self.parse_left_associative(Self::parse_equality_expression, logical_operator)
    }

    /// Parse equality expression
    pub fn parse_equality_expression(&mut self) -> Expression {
        trace!("parse_equality_expression at {}", self.current_location());
        self.parse_left_associative(Self::parse_relational_expression, equality_operator)
    }

    /// Parse relational expression
    pub fn parse_relational_expression(&mut self) -> Expression {
        trace!("parse_relational_expression at {}", self.current_location());
        self.parse_left_associative(Self::parse_additive_expression, relational_operator)
    }

    /// Parse additive expression
    pub fn parse_additive_expression(&mut self) -> Expression {
        trace!("parse_additive_expression at {}", self.current_location());
        self.parse_left_associative(Self::parse_multiplicative_expression, additive_operator)
    }

    /// Parse multiplicative expression
    pub fn parse_multiplicative_expression(&mut self) -> Expression {
        trace!("parse_multiplicative_expression at {}", self.current_location());
        self.parse_left_associative(Self::parse_unary_expression, multiplicative_operator)
    }

    /// Shared loop for the left-associative levels: parse an operand, then
    /// fold in `op operand` pairs for as long as `operator` recognises the
    /// current token.
    fn parse_left_associative(
        &mut self,
        operand: fn(&mut Self) -> Expression,
        operator: fn(&TokenType) -> Option<BinaryOp>,
    ) -> Expression {
        let mut left = operand(self);

        while let Some(op) = operator(self.peek_type()) {
            self.advance();
            let right = operand(self);
            let span = SourceSpan::new(left.span.start.clone(), right.span.end.clone());

            left = self.make_expr(
                ExpressionKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        left
    }
}

fn logical_operator(token: &TokenType) -> Option<BinaryOp> {
    match token {
        TokenType::AmpersandAmpersand => Some(BinaryOp::LogicalAnd),
        TokenType::PipePipe => Some(BinaryOp::LogicalOr),
        _ => None,
    }
}

fn equality_operator(token: &TokenType) -> Option<BinaryOp> {
    match token {
        TokenType::EqualEqual => Some(BinaryOp::Equal),
        TokenType::BangEqual => Some(BinaryOp::NotEqual),
        _ => None,
    }
}

fn relational_operator(token: &TokenType) -> Option<BinaryOp> {
    match token {
        TokenType::Less => Some(BinaryOp::Less),
        TokenType::Greater => Some(BinaryOp::Greater),
        TokenType::LessEqual => Some(BinaryOp::LessEqual),
        TokenType::GreaterEqual => Some(BinaryOp::GreaterEqual),
        _ => None,
    }
}

fn additive_operator(token: &TokenType) -> Option<BinaryOp> {
    match token {
        TokenType::Plus => Some(BinaryOp::Add),
        TokenType::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn multiplicative_operator(token: &TokenType) -> Option<BinaryOp> {
    match token {
        TokenType::Star => Some(BinaryOp::Mul),
        TokenType::Slash => Some(BinaryOp::Div),
        _ => None,
    }
}
