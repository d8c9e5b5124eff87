use notecalc::{Calculator, EvalError};

#[test]
fn parses_integers_and_decimals() {
    let calc = Calculator::new();
    assert_eq!(calc.value("42").unwrap(), 42.0);
    assert_eq!(calc.value("3.25").unwrap(), 3.25);
}

#[test]
fn parses_bare_leading_and_trailing_dot() {
    let calc = Calculator::new();
    assert_eq!(calc.value(".5 + 5.").unwrap(), 5.5);
}

#[test]
fn parses_scientific_notation_basic() {
    assert_eq!(Calculator::new().value("1e3").unwrap(), 1000.0);
}

#[test]
fn parses_scientific_notation_with_negative_exponent() {
    let out = Calculator::new().value("2.5e-4").unwrap();
    assert!((out - 0.00025).abs() < 1e-12);
}

#[test]
fn parses_scientific_notation_with_plus_exponent() {
    assert_eq!(Calculator::new().value("3.2E+2").unwrap(), 320.0);
}

#[test]
fn rejects_dangling_exponent() {
    let err = Calculator::new().value("1 + 2e").unwrap_err();
    assert!(matches!(err, EvalError::Syntax { position: 4, .. }), "{:?}", err);
}

#[test]
fn rejects_lone_dot() {
    let err = Calculator::new().value(".").unwrap_err();
    assert!(matches!(err, EvalError::Syntax { position: 0, .. }), "{:?}", err);
}

#[test]
fn rejects_two_decimal_points() {
    // "1.2.3" lexes as 1.2 followed by .3, which cannot follow a number.
    let err = Calculator::new().value("1.2.3").unwrap_err();
    assert!(matches!(err, EvalError::Syntax { position: 3, .. }), "{:?}", err);
}
