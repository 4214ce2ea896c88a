//! Abstract Syntax Tree definitions
//! 
//! This module defines the expression nodes built by the parser and handed
//! to statement parsing, semantic analysis and code generation.

pub mod ops;
pub mod expressions;
pub mod format;

pub use ops::{BinaryOp, UnaryOp};
pub use expressions::{Expression, ExpressionKind};
pub use format::format_expression;

/// Unique identifier for AST nodes
pub type NodeId = u32;

/// Node ID generator for AST nodes
#[derive(Debug, Clone, Default)]
pub struct NodeIdGenerator {
    next_id: NodeId,
}

impl NodeIdGenerator {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }
    
    pub fn next(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_generator() {
        let mut gen = NodeIdGenerator::new();
        assert_eq!(gen.next(), 0);
        assert_eq!(gen.next(), 1);
        assert_eq!(gen.next(), 2);
    }
}
