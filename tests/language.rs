use std::{error::Error, fs};

use lumen::{
    error::{LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::evaluate, lexer::tokenize, parser::core::parse_program, scope::Context,
        value::Value,
    },
    run_source,
};
use walkdir::WalkDir;

fn run(source: &str) -> Result<Value, Box<dyn Error>> {
    run_source(source, &Context::new())
}

fn assert_number(source: &str, expected: f64) {
    match run(source) {
        Ok(value) => assert_eq!(value, Value::Number(expected), "script: {source}"),
        Err(e) => panic!("Script failed: {e}\n{source}"),
    }
}

fn assert_failure(source: &str) {
    if run(source).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{source}")
    }
}

fn eval_error(source: &str) -> RuntimeError {
    let tokens = tokenize(source).expect("script should lex");
    let program = parse_program(&tokens).expect("script should parse");
    evaluate(&program, &Context::new()).expect_err("script should fail at runtime")
}

#[test]
fn basic_arithmetic() {
    assert_number("1 + 2", 3.0);
    assert_number("8 - 5", 3.0);
    assert_number("7 * 9", 63.0);
    assert_number("10 / 4", 2.5);
    assert_number("2 ^ 10", 1024.0);
}

#[test]
fn precedence_and_grouping() {
    assert_number("1 + 2 * 3", 7.0);
    assert_number("(1 + 2) * 3", 9.0);
    assert_number("-3 + 5", 2.0);
    assert_number("2 * -3", -6.0);
    // Exponentiation associates to the right.
    assert_number("2 ^ 3 ^ 2", 512.0);
}

#[test]
fn let_yields_its_value_and_state_persists() {
    let context = Context::new();

    let value = run_source("let x = 10", &context).unwrap();
    assert_eq!(value, Value::Number(10.0));

    let value = run_source("x", &context).unwrap();
    assert_eq!(value, Value::Number(10.0));
}

#[test]
fn rebinding_is_idempotent() {
    let context = Context::new();

    for _ in 0..3 {
        let value = run_source("let x = 1", &context).unwrap();
        assert_eq!(value, Value::Number(1.0));
    }
    assert_eq!(run_source("x", &context).unwrap(), Value::Number(1.0));
}

#[test]
fn block_collapses_to_the_last_value() {
    assert_number("1\n2\n3", 3.0);
}

#[test]
fn unknown_variable_is_an_error() {
    assert_failure("y");
    assert_eq!(eval_error("ghost"),
               RuntimeError::UnknownVariable { name: "ghost".to_string(),
                                               line: 1, });
}

#[test]
fn assignment_rebinds_but_never_creates() {
    assert_number("let x = 1\nx = 2\nx", 2.0);
    assert!(matches!(eval_error("ghost = 1"),
                     RuntimeError::UnknownVariable { .. }));
}

#[test]
fn function_round_trip() {
    assert_number("define add(a, b):\n    return a + b\nend\nadd(2, 3)", 5.0);
}

#[test]
fn arity_is_checked_exactly() {
    let err = eval_error("define add(a, b):\n    return a + b\nend\nadd(2)");
    assert_eq!(err,
               RuntimeError::ArgumentCountMismatch { expected: 2,
                                                     found:    1,
                                                     line:     4, });

    assert_failure("define one(x):\n    return x\nend\none(1, 2)");
}

#[test]
fn calling_a_non_function_is_a_type_error() {
    assert!(matches!(eval_error("let x = 1\nx(2)"),
                     RuntimeError::TypeError { line: 2, .. }));
}

#[test]
fn parse_failure_produces_a_single_diagnostic() {
    let tokens = tokenize("1 +").unwrap();
    let err = parse_program(&tokens).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEndOfInput { .. }));

    let tokens = tokenize("define broken(:\nend").unwrap();
    assert!(parse_program(&tokens).is_err());

    let tokens = tokenize("if 1\nsay 2").unwrap();
    assert!(matches!(parse_program(&tokens).unwrap_err(),
                     ParseError::ExpectedBlockEnd { .. }));
}

#[test]
fn lexing_fails_fast() {
    assert_eq!(tokenize("let $x = 1"),
               Err(LexError::IllegalCharacter { character: '$',
                                                line:      1, }));
    assert_eq!(tokenize("say \"oops"),
               Err(LexError::UnterminatedString { line: 1 }));
}

#[test]
fn strings_concatenate_but_never_coerce() {
    assert_eq!(run("\"foo\" + \"bar\"").unwrap(),
               Value::Str("foobar".to_string()));

    // Mixed string/number addition is rejected, not coerced.
    assert!(matches!(eval_error("\"n = \" + 1"),
                     RuntimeError::TypeError { line: 1, .. }));
    assert!(matches!(eval_error("1 + \"n\""),
                     RuntimeError::TypeError { line: 1, .. }));
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_number("1 < 2", 1.0);
    assert_number("2 < 1", 0.0);
    assert_number("3 > 2", 1.0);
    assert_number("2 == 2", 1.0);
    assert_number("\"a\" == \"a\"", 1.0);
    // Mismatched types compare unequal rather than failing.
    assert_number("\"1\" == 1", 0.0);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(eval_error("1 / 0"), RuntimeError::DivisionByZero { line: 1 });
}

#[test]
fn say_evaluates_to_null() {
    assert!(run("say 1 + 2").unwrap().is_null());
}

#[test]
fn if_else_selects_a_branch() {
    assert_number("let x = 5\nif x > 3:\n    1\nelse:\n    2\nend", 1.0);
    assert_number("let x = 2\nif x > 3:\n    1\nelse:\n    2\nend", 2.0);
    assert!(run("if 0:\n    1\nend").unwrap().is_null());
}

#[test]
fn while_loops_accumulate() {
    assert_number("let i = 0\nlet sum = 0\nwhile i < 5:\n    sum = sum + i\n    i = i + 1\nend\nsum",
                  10.0);
}

#[test]
fn repeat_runs_a_fixed_count() {
    assert_number("let total = 0\nrepeat 4 times:\n    total = total + 2\nend\ntotal",
                  8.0);
    assert_failure("repeat -1 times:\n    1\nend");
}

#[test]
fn return_exits_early() {
    assert_number("define f():\n    return 1\n    return 2\nend\nf()", 1.0);
    assert!(run("define f():\n    return\nend\nf()").unwrap().is_null());

    // A body that never returns yields null, not its last value.
    assert!(run("define f():\n    42\nend\nf()").unwrap().is_null());
}

#[test]
fn return_propagates_out_of_loops() {
    let source = r#"
define first_multiple(step, floor):
    let candidate = step
    while 1:
        if candidate > floor:
            return candidate
        end
        candidate = candidate + step
    end
end
first_multiple(7, 30)
"#;
    assert_number(source, 35.0);
}

#[test]
fn recursion_resolves_through_the_defining_scope() {
    let source = r#"
define fib(n):
    if n < 2:
        return n
    end
    return fib(n - 1) + fib(n - 2)
end
fib(10)
"#;
    assert_number(source, 55.0);
}

#[test]
fn closures_capture_their_defining_scope() {
    let source = r#"
define make_adder(n):
    define add(x):
        return x + n
    end
    return add
end
let add2 = make_adder(2)
let add10 = make_adder(10)
add2(3) + add10(3)
"#;
    // Each call to make_adder binds its own n, resolved long after the
    // outer call returned.
    assert_number(source, 18.0);
}

#[test]
fn closures_share_mutable_state() {
    let source = r#"
define make_counter():
    let count = 0
    define bump():
        count = count + 1
        return count
    end
    return bump
end
let tick = make_counter()
tick()
tick()
tick()
"#;
    assert_number(source, 3.0);
}

#[test]
fn scoping_is_lexical_not_dynamic() {
    let source = r#"
let n = 100
define show():
    return n
end
define wrapper():
    let n = 5
    return show()
end
wrapper()
"#;
    // show resolves n through its captured scope, not the caller's frame.
    assert_number(source, 100.0);
}

#[test]
fn parameters_shadow_outer_bindings() {
    assert_number("let x = 1\ndefine f(x):\n    return x * 10\nend\nf(4) + x",
                  41.0);
}

#[test]
fn functions_can_mutate_enclosing_bindings() {
    let source = r#"
let total = 0
define add_to_total(n):
    total = total + n
end
add_to_total(5)
add_to_total(7)
total
"#;
    assert_number(source, 12.0);
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "lum"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run(&source) {
            panic!("Demo script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
