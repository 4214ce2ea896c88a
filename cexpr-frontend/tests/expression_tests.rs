//! End-to-end tests for expression parsing: lexing, parsing and recovery

use cexpr_common::{SymbolKind, SymbolTable};
use cexpr_frontend::{
    format_expression, BinaryOp, Expression, ExpressionKind, Lexer, ParseError, ParseErrorKind,
    Parser, ParserConfig, Type, UnaryOp,
};
use pretty_assertions::assert_eq;

fn symbols() -> SymbolTable {
    let mut symbols = SymbolTable::new();
    for name in ["a", "b", "c", "d", "e", "x", "s"] {
        symbols.declare(name, SymbolKind::Variable);
    }
    symbols.declare("foo", SymbolKind::Function);
    symbols.declare("T", SymbolKind::Type);
    symbols
}

fn parse_with_config(input: &str, config: ParserConfig) -> (Expression, Vec<ParseError>) {
    let symbols = symbols();
    let tokens = Lexer::new(input).tokenize().expect("input should lex");
    let mut parser = Parser::with_config(tokens, &symbols, config);
    let expr = parser.parse_complete_expression();
    (expr, parser.take_errors())
}

fn parse(input: &str) -> (Expression, Vec<ParseError>) {
    parse_with_config(input, ParserConfig::default())
}

fn tree(input: &str) -> String {
    let (expr, errors) = parse(input);
    assert_eq!(errors, Vec::new(), "errors while parsing `{}`", input);
    format_expression(&expr)
}

fn error_kinds(errors: &[ParseError]) -> Vec<ParseErrorKind> {
    errors.iter().map(ParseError::kind).collect()
}

#[test]
fn test_precedence() {
    assert_eq!(tree("1+2*3"), "(+ 1 (* 2 3))");
    assert_eq!(tree("1*2+3"), "(+ (* 1 2) 3)");
    assert_eq!(tree("a < b + 1 == c"), "(== (< a (+ b 1)) c)");
    assert_eq!(tree("a = b == c && !d"), "(= a (&& (== b c) (! d)))");
    assert_eq!(tree("a != b"), "(!= a b)");
    assert_eq!(tree("a <= b"), "(<= a b)");
    assert_eq!(tree("a != b <= c"), "(!= a (<= b c))");
    assert_eq!(tree("a >= b != c > d"), "(!= (>= a b) (> c d))");

    let (expr, _) = parse("1+2*3");
    match expr.kind {
        ExpressionKind::Binary { op: BinaryOp::Add, left, right } => {
            assert_eq!(left.kind, ExpressionKind::IntLiteral(1));
            assert!(matches!(right.kind, ExpressionKind::Binary { op: BinaryOp::Mul, .. }));
        }
        other => panic!("expected addition at the root, got {:?}", other),
    }
}

#[test]
fn test_right_associativity() {
    assert_eq!(tree("a=b=c"), "(= a (= b c))");
    assert_eq!(tree("a?b:c?d:e"), "(? a b (? c d e))");
    assert_eq!(tree("a ? b : c = d"), "(= (? a b c) d)");
}

#[test]
fn test_postfix_chains() {
    assert_eq!(tree("a.b.c"), "(. (. a b) c)");
    assert_eq!(tree("a[1][2]"), "(index (index a 1) 2)");
    assert_eq!(tree("a++--"), "(post-- (post++ a))");
    assert_eq!(tree("s->a.b[0]"), "(index (. (-> s a) b) 0)");
}

#[test]
fn test_member_names_are_not_resolved() {
    // `b` is declared as a variable, but as a field name it stays unbound
    let (expr, errors) = parse("a.b");
    assert!(errors.is_empty());

    match expr.kind {
        ExpressionKind::Binary { op: BinaryOp::Member, left, right } => {
            assert!(left.as_identifier().and_then(|(_, symbol)| symbol).is_some());
            assert_eq!(right.as_identifier(), Some(("b", None)));
        }
        other => panic!("expected member access, got {:?}", other),
    }
}

#[test]
fn test_postfix_increment_nesting() {
    let (expr, _) = parse("a++--");
    match expr.kind {
        ExpressionKind::Unary { op: UnaryOp::PostDecrement, operand } => {
            assert!(matches!(operand.kind, ExpressionKind::Unary { op: UnaryOp::PostIncrement, .. }));
        }
        other => panic!("expected post-decrement at the root, got {:?}", other),
    }
}

#[test]
fn test_cast_disambiguation() {
    let (expr, errors) = parse("(int)x");
    assert!(errors.is_empty());
    match expr.kind {
        ExpressionKind::Cast { target_type, operand } => {
            assert_eq!(target_type, Type::Int);
            assert_eq!(operand.as_identifier().map(|(name, _)| name), Some("x"));
        }
        other => panic!("expected cast, got {:?}", other),
    }

    assert_eq!(tree("(T)x"), "(cast T x)");
    assert_eq!(tree("(struct point*)x"), "(cast struct point* x)");
    assert_eq!(tree("(x)"), "x");
    assert_eq!(tree("((x))"), "x");
    assert_eq!(tree("(int)x[1]"), "(cast int (index x 1))");
}

#[test]
fn test_cast_operand_binds_at_postfix_level() {
    let (expr, errors) = parse("(int)-x");
    assert_eq!(format_expression(&expr), "(cast int <invalid>)");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::ExpectedExpression, ParseErrorKind::UnexpectedToken]
    );
    assert_eq!(errors[0].to_string(), "expected expression, found '-'");

    // A prefix operator may still apply to the cast as a whole
    assert_eq!(tree("-(int)x"), "(- (cast int x))");
}

#[test]
fn test_aggregate_literal() {
    let (expr, errors) = parse("{1,2,3}");
    assert!(errors.is_empty());
    match expr.kind {
        ExpressionKind::ArrayLiteral(elements) => {
            let values: Vec<_> = elements.into_iter().map(|e| e.kind).collect();
            assert_eq!(
                values,
                vec![
                    ExpressionKind::IntLiteral(1),
                    ExpressionKind::IntLiteral(2),
                    ExpressionKind::IntLiteral(3),
                ]
            );
        }
        other => panic!("expected aggregate literal, got {:?}", other),
    }

    assert_eq!(tree("{a = 1, {true}}"), "{(= a 1) {true}}");
}

#[test]
fn test_empty_aggregate_literal_is_diagnosed() {
    let (expr, errors) = parse("{}");
    assert_eq!(format_expression(&expr), "{<invalid>}");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::ExpectedExpression, ParseErrorKind::UnexpectedToken]
    );
    assert_eq!(errors[0].to_string(), "expected expression, found '}'");
}

#[test]
fn test_undefined_identifier() {
    let (expr, errors) = parse("y");
    assert_eq!(expr.as_identifier(), Some(("y", None)));
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::UndefinedSymbol]);

    let (expr, errors) = parse("y(1)");
    assert_eq!(format_expression(&expr), "(call y 1)");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::UndefinedSymbol]);
    match expr.kind {
        ExpressionKind::Call { function, arguments } => {
            assert_eq!(function.as_identifier(), Some(("y", None)));
            assert_eq!(arguments.len(), 1);
        }
        other => panic!("expected call, got {:?}", other),
    }

    // Postfix operators still chain onto an unresolved identifier
    let (expr, errors) = parse("y.f");
    assert_eq!(format_expression(&expr), "(. y f)");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::UndefinedSymbol]);

    let (expr, errors) = parse("y[0]");
    assert_eq!(format_expression(&expr), "(index y 0)");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::UndefinedSymbol]);
}

#[test]
fn test_end_to_end() {
    assert_eq!(tree("a + b * (c - 1)"), "(+ a (* b (- c 1)))");
    assert_eq!(tree("foo(1, 2+3)"), "(call foo 1 (+ 2 3))");
    assert_eq!(tree("foo()"), "(call foo)");
}

#[test]
fn test_missing_field_name() {
    let (expr, errors) = parse("s.1");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::MissingFieldName]);
    assert_eq!(format_expression(&expr), "(. s 1)");

    // At end of input the synthesized name is empty
    let (expr, errors) = parse("s->");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::MissingFieldName]);
    match expr.kind {
        ExpressionKind::Binary { op: BinaryOp::PointerMember, right, .. } => {
            assert_eq!(right.as_identifier(), Some(("", None)));
        }
        other => panic!("expected member access, got {:?}", other),
    }
}

#[test]
fn test_missing_colon() {
    let (expr, errors) = parse("a ? b c");
    assert_eq!(format_expression(&expr), "(? a b <invalid>)");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::UnexpectedToken, ParseErrorKind::ExpectedExpression]
    );
    assert_eq!(errors[0].to_string(), "expected ':' in conditional expression, found 'c'");
}

#[test]
fn test_missing_closing_tokens() {
    let (expr, errors) = parse("(a + b");
    assert_eq!(format_expression(&expr), "(+ a b)");
    assert_eq!(
        errors[0].to_string(),
        "expected ')' in parenthesized expression, found 'end of input'"
    );

    let (expr, errors) = parse("foo(1, 2");
    assert_eq!(format_expression(&expr), "(call foo 1 2)");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::UnexpectedToken]);
}

#[test]
fn test_cast_without_specifier_keeps_operand() {
    let (expr, errors) = parse("(const)x");
    assert_eq!(format_expression(&expr), "(cast int x)");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::InvalidType]);

    let (expr, errors) = parse("(struct)x");
    assert_eq!(format_expression(&expr), "(cast int x)");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::InvalidType]);

    let (expr, errors) = parse("(static)x");
    assert_eq!(format_expression(&expr), "(cast int x)");
    assert_eq!(
        error_kinds(&errors),
        vec![ParseErrorKind::InvalidType, ParseErrorKind::InvalidType]
    );
}

#[test]
fn test_recovery_always_terminates() {
    let inputs = [
        "",
        ")",
        "((((",
        "] ) + * ;",
        "a + + + b",
        "{1, 2",
        "(int",
        "a[",
        "? : ? :",
        "(static)x",
        "foo(,,,)",
    ];

    for input in inputs {
        let (_, errors) = parse(input);
        assert!(!errors.is_empty(), "expected diagnostics for `{}`", input);
    }
}

#[test]
fn test_invalid_primary_yields_invalid_node() {
    let (expr, errors) = parse("a + ;");
    assert_eq!(format_expression(&expr), "(+ a <invalid>)");
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::ExpectedExpression]);
    assert!(expr.contains_invalid());
}

#[test]
fn test_depth_guard_with_small_limit() {
    let config = ParserConfig::default().with_max_depth(4);

    let (expr, errors) = parse_with_config("1 + 2", config.clone());
    assert!(errors.is_empty());
    assert_eq!(format_expression(&expr), "(+ 1 2)");

    let (expr, errors) = parse_with_config("(1)", config);
    assert!(expr.is_invalid());
    assert_eq!(error_kinds(&errors), vec![ParseErrorKind::NestingTooDeep]);
    assert_eq!(errors[0].to_string(), "expression nested too deeply (limit is 4)");
}

#[test]
fn test_depth_guard_with_default_limit() {
    let nested = |depth: usize| format!("{}a{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(tree(&nested(50)), "a");

    let (expr, errors) = parse(&nested(200));
    assert!(expr.contains_invalid());
    assert!(error_kinds(&errors).contains(&ParseErrorKind::NestingTooDeep));
}

#[test]
fn test_expression_serializes_to_json() {
    let (expr, _) = parse("a + 1");
    let json = serde_json::to_value(&expr).unwrap();

    assert_eq!(json["kind"]["Binary"]["op"], "Add");
    assert_eq!(json["kind"]["Binary"]["right"]["kind"]["IntLiteral"], 1);
}
