//! Expression parsing
//!
//! One routine per precedence level, loosest first:
//! assignment, conditional, logical, equality, relational, additive,
//! multiplicative, unary, postfix, primary.

mod primary;
mod postfix;
mod unary;
mod binary;
mod assignment;

use log::trace;
use crate::ast::*;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// Parse expression (top level)
    pub fn parse_expression(&mut self) -> Expression {
        trace!("parse_expression at {}", self.current_location());
        self.parse_assignment_expression()
    }
}
