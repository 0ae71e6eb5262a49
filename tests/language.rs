use std::collections::HashMap;

use complexa::{
    error::{Error, ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::core::{Comparison, DEFAULT_TOLERANCE, compare},
        value::complex::ComplexNumber,
    },
};
use pretty_assertions::assert_eq;

fn eval(src: &str) -> Result<ComplexNumber, Error> {
    let mut no_variables: HashMap<char, ComplexNumber> = HashMap::new();
    get_result(src, &mut no_variables)
}

fn assert_value(src: &str, real: f64, imaginary: f64) {
    match eval(src) {
        Ok(value) => assert_eq!(value, ComplexNumber::new(real, imaginary), "for {src}"),
        Err(e) => panic!("Expression {src} failed: {e}"),
    }
}

fn assert_close(src: &str, real: f64, imaginary: f64) {
    let value = eval(src).unwrap_or_else(|e| panic!("Expression {src} failed: {e}"));
    let expected = ComplexNumber::new(real, imaginary);
    assert!((value - expected).abs() < 1e-9,
            "{src} evaluated to {value}, expected about {expected}");
}

fn assert_parse_failure(src: &str) {
    match eval(src) {
        Err(Error::Parse(_)) => {},
        other => panic!("Expression {src} should fail to parse, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1+2", 3.0, 0.0);
    assert_value("7-9", -2.0, 0.0);
    assert_value("6*7", 42.0, 0.0);
    assert_value("10/4", 2.5, 0.0);
    assert_value("1 + 2 * 3", 7.0, 0.0);
    assert_value("(1 + 2) * 3", 9.0, 0.0);
    assert_value("8 - 3 - 2", 3.0, 0.0);
    assert_value("16 / 4 / 2", 2.0, 0.0);
}

#[test]
fn complex_products_are_exact() {
    assert_value("(1+2i)*(3-4i)", 11.0, 2.0);
    assert_value("i*i", -1.0, 0.0);
    assert_value("2i*3i", -6.0, 0.0);
    assert_value("(1+2i)**2", -3.0, 4.0);
}

#[test]
fn imaginary_literals() {
    assert_value("i", 0.0, 1.0);
    assert_value("2i", 0.0, 2.0);
    assert_value("2.5i", 0.0, 2.5);
    assert_value(".5i", 0.0, 0.5);
    assert_value("3+4i", 3.0, 4.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2**3**2", 512.0, 0.0);
    assert_value("(2)**3**2", 512.0, 0.0);
    assert_value("(2)**(0-1)**2", 2.0, 0.0);
}

#[test]
fn power_shares_the_multiplicative_level() {
    assert_value("2*3**2", 36.0, 0.0);
    assert_value("2**3*2", 16.0, 0.0);
    assert_value("1+2**3", 9.0, 0.0);
}

#[test]
fn powers_of_complex_numbers() {
    assert_value("i**2", -1.0, 0.0);
    assert_value("2**(0-1)", 0.5, 0.0);
    assert_close("4**0.5", 2.0, 0.0);
    assert_close("i**i", (-std::f64::consts::FRAC_PI_2).exp(), 0.0);
}

#[test]
fn zero_powers() {
    assert_value("0**0", 1.0, 0.0);
    assert_value("0**2", 0.0, 0.0);
    assert_value("0**0.5", 0.0, 0.0);
    assert_value("0**(0-1)", 0.0, 0.0);
    assert_value("0**i", 0.0, 0.0);
    assert_value("0**(1+i)", 0.0, 0.0);
    assert_value("(1-1)**(0-2i)", 0.0, 0.0);
}

#[test]
fn half_powers_match_square_root() {
    assert_value("(0-1)**0.5", 0.0, 1.0);
    assert_eq!(eval("(0-1)**0.5").unwrap().to_string(), "1i");
    assert_eq!(eval("(3+4i)**0.5").unwrap(), eval("√(3+4i)").unwrap());
    assert_value("4**(0-0.5)", 0.5, 0.0);
    assert_close("(0-4)**(0-0.5)", 0.0, -0.5);
}

#[test]
fn conjugate() {
    assert_value("conj(3+4i)", 3.0, -4.0);
    assert_value("conj(conj(3+4i))", 3.0, 4.0);
    assert_value("conj(5)", 5.0, 0.0);
    assert_value("conj(i)*i", 1.0, 0.0);
}

#[test]
fn square_root() {
    assert_value("√(0-1)", 0.0, 1.0);
    assert_value("√(-1)", 0.0, 1.0);
    assert_value("√4", 2.0, 0.0);
    assert_value("√(-4)", 0.0, 2.0);
    assert_value("√conj(-1)", 0.0, 1.0);
    assert_close("√(2i)", 1.0, 1.0);
    assert_close("√(3+4i)", 2.0, 1.0);
    assert_close("√(-3-4i)", 1.0, -2.0);
}

#[test]
fn square_root_of_minus_one_squares_back() {
    let w = eval("√(-1)").unwrap();
    assert!((w * w - ComplexNumber::new(-1.0, 0.0)).abs() < 1e-9);
}

#[test]
fn leading_and_grouped_signs() {
    assert_value("-3", -3.0, 0.0);
    assert_value("+3", 3.0, 0.0);
    assert_value("-2i", 0.0, -2.0);
    assert_value("2*(-3)", -6.0, 0.0);
    assert_value("conj(-1+i)", -1.0, -1.0);
}

#[test]
fn whitespace_is_removed_before_tokenizing() {
    assert_value("  ( 1 + 2 i ) * ( 3 - 4 i ) ", 11.0, 2.0);
    assert_value("1 2 + 1", 13.0, 0.0);
    assert_value("co nj(2i)", 0.0, -2.0);
}

#[test]
fn unrecognized_characters_are_skipped() {
    assert_value("1 + 2 # ", 3.0, 0.0);
    assert_value("(1+2)$*3", 9.0, 0.0);
}

#[test]
fn skipped_characters_still_separate_signs_from_group_start() {
    assert_parse_failure("#-3");
    assert_parse_failure("(#-3)");
    assert_value("-#3", -3.0, 0.0);
}

#[test]
fn division_by_zero_is_error() {
    for src in ["1/0", "1/(0+0i)", "i/(2-2)", "1/(0*i)"] {
        assert!(matches!(eval(src), Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))),
                "{src} should divide by zero");
    }
    assert_value("1/(1+0i)", 1.0, 0.0);
    assert_close("1/i", 0.0, -1.0);
}

#[test]
fn division_by_zero_reports_operator_column() {
    assert_eq!(eval("1 + 2/0").unwrap_err().to_string(),
               "Error at column 6: Division by zero.");
}

#[test]
fn parse_failures() {
    assert_parse_failure("");
    assert_parse_failure("   ");
    assert_parse_failure("(1+2");
    assert_parse_failure("conj(1+2");
    assert_parse_failure("conj 2");
    assert_parse_failure("1+");
    assert_parse_failure("1.2.3");
    assert_parse_failure("*2");
    assert_parse_failure("1)");
    assert_parse_failure("2x");
    assert_parse_failure("2*-3");
}

#[test]
fn unresolved_variable_is_error() {
    assert!(matches!(eval("x+1"),
                     Err(Error::Runtime(RuntimeError::VariableResolution { name: 'x', .. }))));
}

#[test]
fn comparing_results() {
    let two = eval("1+1").unwrap();
    assert_eq!(compare(two, eval("2").unwrap(), DEFAULT_TOLERANCE),
               Comparison::Equivalent);
    assert_eq!(compare(two, eval("3").unwrap(), DEFAULT_TOLERANCE),
               Comparison::Different);
    assert_eq!(compare(eval("(1+i)**2").unwrap(), eval("2i").unwrap(), DEFAULT_TOLERANCE),
               Comparison::Equivalent);
    assert_eq!(compare(eval("√(2i)").unwrap(), eval("1+i").unwrap(), DEFAULT_TOLERANCE),
               Comparison::Equivalent);
    assert_eq!(Comparison::Equivalent.to_string(), "equivalent");
}

#[test]
fn parse_error_messages() {
    let message = |src: &str| match eval(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expression {src} should fail to parse, got {other:?}"),
    };

    assert_eq!(message(""), ParseError::UnexpectedEndOfInput);
    assert_eq!(message("(1+2"), ParseError::ExpectedClosingParen { column: 1 });
    assert_eq!(message("2 * (1+2"), ParseError::ExpectedClosingParen { column: 5 });
    assert_eq!(message("conj 2"), ParseError::ExpectedConjParen { column: 1 });
    assert_eq!(message("1+conj(1+2"), ParseError::UnclosedConj { column: 3 });
    assert_eq!(message("1.2.3"),
               ParseError::UnexpectedToken { token:  "1.2.3".to_string(),
                                             column: 1, });
    assert_eq!(message("1 )"),
               ParseError::UnexpectedTrailingTokens { token:  ")".to_string(),
                                                      column: 3, });
}
