use std::fs;

use fishlisp::{
    ast::{Operator, Symbol, Tag},
    error::{ParseError, RuntimeError},
    get_result, interpret_line, interpret_script,
    interpreter::{
        evaluator::{
            apply::apply,
            core::{Strategy, evaluate},
        },
        parser::core::{MAX_NESTING, parse},
        value::core::Value,
    },
};
use walkdir::WalkDir;

const STRATEGIES: [Strategy; 2] = [Strategy::ParseTree, Strategy::ValueTree];

#[test]
fn transcripts_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/transcripts").into_iter()
                                         .filter_map(Result::ok)
                                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (input, expected) in extract_exchanges(&content) {
            count += 1;
            for strategy in STRATEGIES {
                assert_eq!(interpret_line(&input, strategy),
                           expected,
                           "input {input:?} in {path:?} with {strategy:?}");
            }
        }
    }

    assert!(count > 0, "No exchanges found in tests/transcripts");
}

fn extract_exchanges(content: &str) -> Vec<(String, String)> {
    let mut exchanges = Vec::new();
    let mut input = None;

    for line in content.lines() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("lispy> ") {
            input = Some(rest.to_string());
        } else if let Some(input) = input.take() {
            exchanges.push((input, line.to_string()));
        }
    }

    exchanges
}

fn assert_number(src: &str, expected: i64) {
    assert_evaluates(src, &Value::Number(expected));
}

fn assert_error(src: &str, expected: RuntimeError) {
    assert_evaluates(src, &Value::Error(expected));
}

fn assert_evaluates(src: &str, expected: &Value) {
    for strategy in STRATEGIES {
        match get_result(src, strategy) {
            Ok(value) => assert_eq!(&value, expected, "{src:?} with {strategy:?}"),
            Err(e) => panic!("{src:?} failed to parse: {e}"),
        }
    }
}

fn assert_syntax_error(src: &str) -> ParseError {
    match get_result(src, Strategy::ParseTree) {
        Ok(value) => panic!("{src:?} parsed and evaluated to {value}"),
        Err(e) => e,
    }
}

#[test]
fn folds_match_pairwise_integer_reduction() {
    let operands: [i64; 6] = [17, -4, 9, 2, -31, 5];

    let cases: [(&str, fn(i64, i64) -> i64); 3] =
        [("+", i64::wrapping_add), ("-", i64::wrapping_sub), ("*", i64::wrapping_mul)];

    for (op, reduce) in cases {
        for len in 1..=operands.len() {
            let args = &operands[..len];
            let source = format!("{op} {}",
                                 args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "));
            let expected = args[1..].iter().fold(args[0], |acc, &n| reduce(acc, n));

            assert_number(&source, expected);
            assert_number(&format!("+ 0 ({source})"), expected);
        }
    }
}

#[test]
fn parenthesized_lines_evaluate_like_bare_ones() {
    for (bare, wrapped) in [("+ 1 2 3", "(+ 1 2 3)"),
                            ("/ 6 0", "(/ 6 0)"),
                            ("min 3 7 1", "(min 3 7 1)"),
                            ("pow 2 10", "(pow 2 10)")]
    {
        for strategy in STRATEGIES {
            assert_eq!(get_result(bare, strategy).unwrap(),
                       get_result(wrapped, strategy).unwrap());
        }
    }
    assert_error("()", RuntimeError::BadOperator);
}

#[test]
fn subtraction_is_left_associative() {
    assert_number("- 10 4 3", 3);
    assert_number("(- 10 4 3)", 3);
    assert_number("/ 64 4 2", 8);
}

#[test]
fn division_by_zero_anywhere_in_a_fold() {
    assert_error("/ 6 0", RuntimeError::DivisionByZero);
    assert_error("% 6 0", RuntimeError::DivisionByZero);
    assert_error("/ 100 2 0 5", RuntimeError::DivisionByZero);
    assert_error("% 100 7 0", RuntimeError::DivisionByZero);
    assert_number("/ 0 5", 0);
}

#[test]
fn unknown_operator_is_error() {
    assert_error("foo 1 2", RuntimeError::BadOperator);
    assert_error("(foo 1 2)", RuntimeError::BadOperator);
    assert_error("+ 1 (MAX 1 2)", RuntimeError::BadOperator);
}

#[test]
fn errors_are_absorbing() {
    assert_error("+ (/ 1 0) 5", RuntimeError::DivisionByZero);
    assert_error("+ 5 (/ 1 0)", RuntimeError::DivisionByZero);
    assert_error("* (/ 1 0) (foo 1 2)", RuntimeError::DivisionByZero);
    assert_error("* (foo 1 2) (/ 1 0)", RuntimeError::BadOperator);
    assert_error("max (- 1 (+ 2 (/ 3 0))) 100", RuntimeError::DivisionByZero);
}

#[test]
fn single_operand_is_returned_unchanged() {
    assert_number("- 5", 5);
    assert_number("(- 5)", 5);
    assert_number("/ 0", 0);
    assert_number("foo 5", 5);
}

#[test]
fn min_max_and_pow() {
    assert_number("min 3 7 1", 1);
    assert_number("max 3 7 1", 7);
    assert_number("pow 2 10", 1024);
    assert_number("pow -3 3", -27);
    assert_number("pow 7 0", 1);
    assert_number("pow 2 -2", 0);
    assert_number("pow 1 -5", 1);
    assert_number("pow 2 64", i64::MAX);
    assert_number("pow -2 63", i64::MIN);
}

#[test]
fn literals_are_truncated_or_rejected() {
    assert_number("+ 3.99 0", 3);
    assert_number("+ -3.99 0", -3);
    assert_number("+ 5. 0", 5);
    assert_number("+ 9223372036854775807 0", i64::MAX);
    assert_number("+ -9223372036854775808 0", i64::MIN);
    assert_error("+ 9223372036854775808 0", RuntimeError::BadNumber);
    assert_error("+ 1 (* 2 -9223372036854775809)", RuntimeError::BadNumber);
}

#[test]
fn arithmetic_never_panics_on_overflow() {
    assert_number("+ 9223372036854775807 1", i64::MIN);
    assert_number("/ -9223372036854775808 -1", i64::MIN);
    assert_number("% -9223372036854775808 -1", 0);
    assert_number("* 4611686018427387904 2", i64::MIN);
}

#[test]
fn degenerate_sexpressions() {
    assert_error("+ 1 ()", RuntimeError::BadOperator);
    assert_error("+ 1 (+)", RuntimeError::BadOperator);
    assert_error("+ 1 (7)", RuntimeError::BadOperator);
    assert_number("(1 2)", 2);
    assert_error("+ 1 min", RuntimeError::BadNumber);
}

#[test]
fn syntax_errors_are_reported_with_columns() {
    assert!(matches!(assert_syntax_error("(+ 1 2"),
                     ParseError::ExpectedClosingParen { opened_at: 1,
                                                        column:    7, }));
    assert!(matches!(assert_syntax_error("+ 1 2)"),
                     ParseError::UnexpectedToken { column: 6, .. }));
    assert!(matches!(assert_syntax_error(""),
                     ParseError::UnexpectedEndOfInput { expected: "operator",
                                                        column:   1, }));
    assert!(matches!(assert_syntax_error("+"),
                     ParseError::UnexpectedEndOfInput { expected: "expression",
                                                        .. }));
    assert!(matches!(assert_syntax_error("(+ 1 2) 3"),
                     ParseError::UnexpectedToken { expected: "end of input",
                                                   column:   9,
                                                   .. }));
    assert!(matches!(assert_syntax_error(") + 1"), ParseError::UnexpectedToken { column: 1, .. }));
    assert_eq!(assert_syntax_error("+ 1 é").column(), 5);
}

#[test]
fn parse_tree_shape() {
    let tree = parse("+ 1 (max 2 3)").unwrap();
    let tags: Vec<Tag> = tree.children.iter().map(|child| child.tag).collect();

    assert_eq!(tags,
               vec![Tag::Start,
                    Tag::Symbol(Symbol::Operator(Operator::Add)),
                    Tag::Number,
                    Tag::Sexpr,
                    Tag::End]);

    let sexpr = &tree.children[3];
    assert_eq!(sexpr.column, 5);
    assert_eq!(sexpr.children.first().map(|c| c.tag), Some(Tag::Open));
    assert_eq!(sexpr.children.last().map(|c| c.tag), Some(Tag::Close));
    assert_eq!(sexpr.children[1].tag, Tag::Symbol(Symbol::Operator(Operator::Max)));

    let unknown = parse("frobnicate 1").unwrap();
    assert_eq!(unknown.children[1].tag, Tag::Symbol(Symbol::Unknown));
    assert_eq!(unknown.children[1].contents, "frobnicate");
}

#[test]
fn value_tree_reads_symbols_and_sexpressions() {
    let tree = parse("+ 1 (* 2 3) ()").unwrap();
    let read = Value::read(&tree);

    assert_eq!(read,
               Value::SExpression(vec![Value::Symbol("+".to_string()),
                                       Value::Number(1),
                                       Value::SExpression(vec![Value::Symbol("*".to_string()),
                                                               Value::Number(2),
                                                               Value::Number(3)]),
                                       Value::SExpression(Vec::new())]));
    assert_eq!(read.to_string(), "(+ 1 (* 2 3) ())");
    assert_eq!(read.eval(), Value::Error(RuntimeError::BadOperator));
}

#[test]
fn apply_short_circuits_on_the_left_error() {
    let add = Symbol::Operator(Operator::Add);
    let left = Value::Error(RuntimeError::BadNumber);
    let right = Value::Error(RuntimeError::DivisionByZero);

    assert_eq!(apply(left.clone(), add, right.clone()), left);
    assert_eq!(apply(Value::Number(1), add, right.clone()), right);
    assert_eq!(apply(Value::Number(1), Symbol::Unknown, right.clone()), right);
    assert_eq!(apply(Value::Symbol("x".to_string()), add, Value::Number(1)),
               Value::Error(RuntimeError::BadNumber));
    assert_eq!(apply(Value::Number(2), Symbol::Operator(Operator::Min), Value::Number(-2)).as_number(),
               Some(-2));
}

#[test]
fn rendering_is_deterministic() {
    let inputs = ["+ 1 (* 2 3)", "/ 1 0", "foo 1 2", "+ 1 (", "pow 3 4"];

    for input in inputs {
        let first = interpret_line(input, Strategy::ParseTree);
        for _ in 0..3 {
            assert_eq!(interpret_line(input, Strategy::ParseTree), first);
            assert_eq!(interpret_line(input, Strategy::ValueTree), first);
        }
    }
}

#[test]
fn evaluate_number_node_directly() {
    let tree = parse("+ 42").unwrap();
    assert_eq!(evaluate(&tree.children[2]), Value::Number(42));
}

#[test]
fn script_lines_are_independent() {
    let script = "+ 1 2\n/ 1 0\n\n+ 1 (\nmax 4 8\n";

    assert_eq!(interpret_script(script, Strategy::ParseTree),
               vec!["3".to_string(),
                    "Error: Division by zero!".to_string(),
                    "Error at column 6: Expected closing parenthesis ')' for '(' at column 5.".to_string(),
                    "8".to_string()]);
}

#[test]
fn leading_negative_literal_is_subtraction() {
    assert_number("-1 2", -1);
    assert_number("-5", 5);
    assert_number("-3 -4", 7);
    assert_number("(-1 2)", -1);

    let tree = parse("-7 3").unwrap();
    let tags: Vec<Tag> = tree.children.iter().map(|child| child.tag).collect();
    assert_eq!(tags,
               vec![Tag::Start,
                    Tag::Symbol(Symbol::Operator(Operator::Sub)),
                    Tag::Number,
                    Tag::Number,
                    Tag::End]);
    assert_eq!(tree.children[2].contents, "7");
    assert_eq!(tree.children[2].column, 2);
}

#[test]
fn nesting_is_bounded() {
    let nested = |depth: usize| format!("+ {}1{}", "(+ 1 ".repeat(depth), ")".repeat(depth));

    for strategy in STRATEGIES {
        assert_eq!(get_result(&nested(200), strategy), Ok(Value::Number(201)));

        match get_result(&nested(20_000), strategy) {
            Err(ParseError::TooDeep { limit, .. }) => assert_eq!(limit, MAX_NESTING),
            other => panic!("expected TooDeep with {strategy:?}, got {other:?}"),
        }
    }

    assert!(interpret_line(&nested(MAX_NESTING + 1), Strategy::ParseTree).contains("nested deeper"));
}
