//! Expression AST nodes
//!
//! Every node owns its children outright (`Box`/`Vec`), carries a span,
//! and is never mutated once the parser has built it.

use super::ops::{BinaryOp, UnaryOp};
use crate::ast::NodeId;
use crate::types::Type;
use cexpr_common::source_loc::HasSpan;
use cexpr_common::{SourceSpan, SymbolId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub node_id: NodeId,
    pub kind: ExpressionKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    IntLiteral(i64),

    BoolLiteral(bool),

    /// Identifier reference. `symbol` is `None` when the name was not in
    /// scope at parse time; member names after `.`/`->` are never resolved.
    Identifier {
        name: String,
        symbol: Option<SymbolId>,
    },

    /// Brace-enclosed aggregate literal
    ArrayLiteral(Vec<Expression>),

    /// Binary operation, including assignment and member access
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Prefix or postfix unary operation
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },

    /// `condition ? then_expr : else_expr`
    Conditional {
        condition: Box<Expression>,
        then_expr: Box<Expression>,
        else_expr: Box<Expression>,
    },

    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },

    Index {
        base: Box<Expression>,
        index: Box<Expression>,
    },

    Cast {
        target_type: Type,
        operand: Box<Expression>,
    },

    /// Placeholder for an expression that could not be parsed
    Invalid,
}

impl Expression {
    pub fn is_invalid(&self) -> bool {
        matches!(self.kind, ExpressionKind::Invalid)
    }

    /// Direct children in source order
    pub fn children(&self) -> Vec<&Expression> {
        match &self.kind {
            ExpressionKind::IntLiteral(_)
            | ExpressionKind::BoolLiteral(_)
            | ExpressionKind::Identifier { .. }
            | ExpressionKind::Invalid => Vec::new(),
            ExpressionKind::ArrayLiteral(elements) => elements.iter().collect(),
            ExpressionKind::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            ExpressionKind::Unary { operand, .. } => vec![operand.as_ref()],
            ExpressionKind::Conditional { condition, then_expr, else_expr } => {
                vec![condition.as_ref(), then_expr.as_ref(), else_expr.as_ref()]
            }
            ExpressionKind::Call { function, arguments } => {
                std::iter::once(function.as_ref()).chain(arguments.iter()).collect()
            }
            ExpressionKind::Index { base, index } => vec![base.as_ref(), index.as_ref()],
            ExpressionKind::Cast { operand, .. } => vec![operand.as_ref()],
        }
    }

    /// True if this node or any descendant is `Invalid`
    pub fn contains_invalid(&self) -> bool {
        self.is_invalid() || self.children().into_iter().any(Expression::contains_invalid)
    }

    /// Number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children().into_iter().map(Expression::node_count).sum::<usize>()
    }

    /// Name and resolved symbol, if this is an identifier
    pub fn as_identifier(&self) -> Option<(&str, Option<SymbolId>)> {
        match &self.kind {
            ExpressionKind::Identifier { name, symbol } => Some((name.as_str(), *symbol)),
            _ => None,
        }
    }
}

impl HasSpan for Expression {
    fn span(&self) -> SourceSpan {
        self.span.clone()
    }
}
