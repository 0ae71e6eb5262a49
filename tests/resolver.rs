use std::{cell::RefCell, collections::HashMap};

use complexa::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Calculator, EvalResult, evaluate},
            resolver::{PromptResolver, VariableResolver, from_fn},
        },
        parser::core::parse,
        value::complex::ComplexNumber,
    },
};
use pretty_assertions::assert_eq;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn repeated_variable_is_resolved_once() {
    init_logger();
    let mut calls = Vec::new();
    let mut resolver = from_fn(|name| {
        calls.push(name);
        Ok(ComplexNumber::new(3.0, 0.0))
    });

    let mut calculator = Calculator::new("x*x + x").unwrap();
    assert_eq!(calculator.evaluate(&mut resolver).unwrap(),
               ComplexNumber::new(12.0, 0.0));
    drop(resolver);
    assert_eq!(calls, vec!['x']);
}

#[test]
fn variables_are_resolved_left_to_right() {
    init_logger();
    let mut calls = Vec::new();
    let mut resolver = from_fn(|name| {
        calls.push(name);
        Ok(ComplexNumber::new(1.0, 0.0))
    });

    evaluate(&parse("b / √(a + conj(c)) + b").unwrap(), &mut resolver).unwrap();
    drop(resolver);
    assert_eq!(calls, vec!['b', 'a', 'c']);
}

#[test]
fn re_evaluation_reuses_the_environment() {
    let calls = RefCell::new(0);
    let mut resolver = from_fn(|_| -> EvalResult<ComplexNumber> {
        *calls.borrow_mut() += 1;
        Ok(ComplexNumber::new(0.0, 2.0))
    });

    let mut calculator = Calculator::new("conj(z) * z").unwrap();
    let first = calculator.evaluate(&mut resolver).unwrap();
    let second = calculator.evaluate(&mut resolver).unwrap();

    assert_eq!(first, ComplexNumber::new(4.0, 0.0));
    assert_eq!(first, second);
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(calculator.environment().get(&'z'),
               Some(&ComplexNumber::new(0.0, 2.0)));
}

#[test]
fn separate_calculators_do_not_share_values() {
    let mut answers = vec![ComplexNumber::new(1.0, 0.0), ComplexNumber::new(5.0, 0.0)].into_iter();
    let mut resolver = from_fn(|name| {
        answers.next()
               .ok_or(RuntimeError::VariableResolution { name,
                                                         reason: "no more answers".to_string() })
    });

    let mut first = Calculator::new("x + 1").unwrap();
    let mut second = Calculator::new("x + 1").unwrap();

    assert_eq!(first.evaluate(&mut resolver).unwrap(), ComplexNumber::new(2.0, 0.0));
    assert_eq!(second.evaluate(&mut resolver).unwrap(), ComplexNumber::new(6.0, 0.0));
}

#[test]
fn resolver_errors_stop_evaluation() {
    let mut values = HashMap::from([('x', ComplexNumber::new(1.0, 0.0))]);

    let err = evaluate(&parse("x + y").unwrap(), &mut values).unwrap_err();
    assert_eq!(err,
               RuntimeError::VariableResolution { name:   'y',
                                                  reason: "no value given".to_string(), });
}

#[test]
fn prompt_resolver_reads_one_line_per_variable() {
    let input = "1+2i\n -i \n";
    let mut output = Vec::new();
    let mut resolver = PromptResolver::new(input.as_bytes(), &mut output);

    let mut calculator = Calculator::new("a * b * a").unwrap();
    let value = calculator.evaluate(&mut resolver).unwrap();
    drop(resolver);

    // (1+2i) * (-i) * (1+2i) = (2-i) * (1+2i)
    assert_eq!(value, ComplexNumber::new(4.0, 3.0));
    assert_eq!(String::from_utf8(output).unwrap(), "Value for a: Value for b: ");
}

#[test]
fn prompt_resolver_accepts_every_literal_form() {
    let cases = [("3", 3.0, 0.0),
                 ("-2.5", -2.5, 0.0),
                 ("1+2i", 1.0, 2.0),
                 ("1-2i", 1.0, -2.0),
                 ("4i", 0.0, 4.0),
                 ("-4i", 0.0, -4.0),
                 ("i", 0.0, 1.0),
                 ("-i", 0.0, -1.0),
                 ("2+i", 2.0, 1.0),
                 ("1e-3+1e2i", 0.001, 100.0)];

    for (text, real, imaginary) in cases {
        let line = format!("{text}\n");
        let mut resolver = PromptResolver::new(line.as_bytes(), std::io::sink());
        assert_eq!(resolver.resolve('v').unwrap(),
                   ComplexNumber::new(real, imaginary),
                   "for input {text:?}");
    }
}

#[test]
fn prompt_resolver_rejects_malformed_input() {
    for text in ["abc\n", "1+2\n", "1+2j\n", "\n", ""] {
        let mut resolver = PromptResolver::new(text.as_bytes(), std::io::sink());
        assert!(matches!(resolver.resolve('q'),
                         Err(RuntimeError::VariableResolution { name: 'q', .. })),
                "{text:?} should be rejected");
    }
}
