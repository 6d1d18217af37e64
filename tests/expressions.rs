use numera::{error::EvalError, evaluate};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert!((value - expected).abs() < 1e-9,
                    "`{src}` evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    assert!(evaluate(src).is_err(),
            "`{src}` succeeded but was expected to fail");
}

#[test]
fn precedence_and_grouping() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2-3-4", -5.0);
    assert_value("100-10*5", 50.0);
    assert_value("((2))", 2.0);
}

#[test]
fn exponentiation_binds_tightest_and_is_right_associative() {
    assert_value("2^3^2", 512.0);
    assert_value("2*3^2", 18.0);
    assert_value("3^2*2", 18.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("2^-2", 0.25);
    assert_value("9^0.5", 3.0);
}

#[test]
fn division_modes() {
    assert_value("7/2", 3.5);
    assert_value("7//2", 3.0);
    assert_value("7%2", 1.0);
    // Operands are truncated toward zero before integer division.
    assert_value("7.9//2.9", 3.0);
    assert_value("-7//2", -3.0);
    // The remainder carries the sign of the dividend.
    assert_value("-7%2", -1.0);
    assert_value("7%-2", 1.0);
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn integer_arithmetic_wraps_instead_of_panicking() {
    // A literal beyond the i64 range truncates to the minimum integer,
    // and dividing that by -1 wraps rather than aborting the evaluation.
    assert_value("-9999999999999999999//-1", i64::MIN as f64);
    assert_value("-9999999999999999999%-1", 0.0);
}

#[test]
fn integer_division_requires_adjacent_slashes() {
    assert_value(" 7 // 2 ", 3.0);
    // A space between the slashes means real division followed by a
    // factor that starts with '/', which no rule accepts.
    assert_failure("7 / / 2");
    assert!(matches!(evaluate("7/ /2"),
                     Err(EvalError::UnexpectedCharacter { found: '/', .. })));
}

#[test]
fn unary_sign() {
    assert_value("-5", -5.0);
    assert_value("+5", 5.0);
    assert_value("--4", 4.0);
    assert_value("-+-4", 4.0);
    assert_value("2--3", 5.0);
    // The sign is applied to the whole power, not the base.
    assert_value("-2^2", -4.0);
}

#[test]
fn absolute_value_bars() {
    assert_value("|-5|", 5.0);
    assert_value("|2-7|*2", 10.0);
    assert_value("| -5 |", 5.0);
    assert_value("-|3-10|", -7.0);
}

#[test]
fn division_by_zero() {
    assert!(matches!(evaluate("5/0"), Err(EvalError::DivisionByZero { .. })));
    assert!(matches!(evaluate("5//0"), Err(EvalError::DivisionByZero { .. })));
    assert!(matches!(evaluate("5%0"), Err(EvalError::DivisionByZero { .. })));
    // A fractional divisor that truncates to zero counts as zero.
    assert!(matches!(evaluate("5//0.9"), Err(EvalError::DivisionByZero { .. })));
    assert!(matches!(evaluate("5%0.9"), Err(EvalError::DivisionByZero { .. })));
}

#[test]
fn numeric_literals() {
    assert_value("0", 0.0);
    assert_value(".5", 0.5);
    assert_value("0.25*4", 1.0);
    assert_value("1.", 1.0);
    assert!(matches!(evaluate("1.2.3"),
                     Err(EvalError::MalformedNumber { literal, pos: 0 }) if literal == "1.2.3"));
    assert!(matches!(evaluate("."),
                     Err(EvalError::MalformedNumber { .. })));
}

#[test]
fn missing_operands() {
    assert!(matches!(evaluate(""), Err(EvalError::UnexpectedEndOfInput { pos: 0 })));
    assert!(matches!(evaluate("2+"), Err(EvalError::UnexpectedEndOfInput { .. })));
    assert!(matches!(evaluate("2*"), Err(EvalError::UnexpectedEndOfInput { .. })));
    assert!(matches!(evaluate("2^"), Err(EvalError::UnexpectedEndOfInput { .. })));
    assert_failure("*2");
}

#[test]
fn trailing_input() {
    assert!(matches!(evaluate("2 3"),
                     Err(EvalError::TrailingInput { found: '3', pos: 2 })));
    assert!(matches!(evaluate("(2+3)4"),
                     Err(EvalError::TrailingInput { found: '4', .. })));
    // Trailing spaces are not trailing input.
    assert_value("2+3 ", 5.0);
}

#[test]
fn unexpected_characters() {
    assert!(matches!(evaluate("2+a"),
                     Err(EvalError::UnexpectedCharacter { found: 'a', pos: 2 })));
    assert_failure("#");
    assert_failure("2$3");
}

#[test]
fn unmatched_closers_are_tolerated() {
    assert_value("(2+3", 5.0);
    assert_value("|2-7", 5.0);
    assert_value("((2+3)*4", 20.0);
}

#[test]
fn whitespace_around_operators() {
    assert_value("2 + 3", 5.0);
    assert_value("  2+3", 5.0);
    assert_value(" ( 2 + 3 ) * 4 ", 20.0);
    assert_eq!(evaluate("2 + 3").unwrap(), evaluate("2+3").unwrap());
    // Only the space character is skipped.
    assert_failure("2\t+3");
}

#[test]
fn evaluation_is_pure() {
    let first = evaluate("2^3^2-|1-5|//3");
    let second = evaluate("2^3^2-|1-5|//3");
    assert_eq!(first, second);
    assert_value("2^3^2-|1-5|//3", 511.0);
}
