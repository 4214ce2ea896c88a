//! Prefix-notation rendering of expression trees
//!
//! Every interior node is printed as `(head child...)`, which makes the
//! tree shape (and therefore precedence and associativity) explicit:
//! `a + b * c` renders as `(+ a (* b c))`.

use super::expressions::{Expression, ExpressionKind};
use std::fmt::Write;

pub fn format_expression(expr: &Expression) -> String {
    let mut out = String::new();
    write_expression(&mut out, expr);
    out
}

fn write_expression(out: &mut String, expr: &Expression) {
    match &expr.kind {
        ExpressionKind::IntLiteral(value) => {
            let _ = write!(out, "{}", value);
        }
        ExpressionKind::BoolLiteral(value) => {
            let _ = write!(out, "{}", value);
        }
        ExpressionKind::Identifier { name, .. } => out.push_str(name),
        ExpressionKind::Invalid => out.push_str("<invalid>"),

        ExpressionKind::ArrayLiteral(elements) => {
            out.push('{');
            write_list(out, elements.iter());
            out.push('}');
        }
        ExpressionKind::Binary { op, left, right } => {
            let _ = write!(out, "({} ", op);
            write_list(out, [left.as_ref(), right.as_ref()].into_iter());
            out.push(')');
        }
        ExpressionKind::Unary { op, operand } => {
            let head = if op.is_postfix() { "post" } else { "" };
            let _ = write!(out, "({}{} ", head, op);
            write_expression(out, operand);
            out.push(')');
        }
        ExpressionKind::Conditional { condition, then_expr, else_expr } => {
            out.push_str("(? ");
            write_list(out, [condition.as_ref(), then_expr.as_ref(), else_expr.as_ref()].into_iter());
            out.push(')');
        }
        ExpressionKind::Call { function, arguments } => {
            out.push_str("(call ");
            write_list(out, std::iter::once(function.as_ref()).chain(arguments.iter()));
            out.push(')');
        }
        ExpressionKind::Index { base, index } => {
            out.push_str("(index ");
            write_list(out, [base.as_ref(), index.as_ref()].into_iter());
            out.push(')');
        }
        ExpressionKind::Cast { target_type, operand } => {
            let _ = write!(out, "(cast {} ", target_type);
            write_expression(out, operand);
            out.push(')');
        }
    }
}

fn write_list<'a>(out: &mut String, items: impl Iterator<Item = &'a Expression>) {
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_expression(out, item);
    }
}
