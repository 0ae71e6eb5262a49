use std::io::{self, Write};

use clap::Parser;
use complexa::{
    error::Error,
    interpreter::{
        evaluator::{
            core::{Calculator, DEFAULT_TOLERANCE, compare},
            resolver::PromptResolver,
        },
        lexer::LexerOptions,
        value::complex::ComplexNumber,
    },
};
use log::LevelFilter;

/// complexa evaluates arithmetic expressions over complex numbers and tells
/// whether two of them are equivalent.
///
/// Operators: + - * / ** (power). Functions: conj(expr), √expr.
/// Use i for the imaginary unit, e.g. (1+2i)*(3-4i).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reject characters that are not part of any token instead of skipping
    /// them.
    #[arg(short, long)]
    strict: bool,

    /// Largest difference at which two results still count as equivalent.
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Log tokenizing, parsing and variable resolution to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Up to two expressions to evaluate once. Without any, an interactive
    /// session starts.
    #[arg(num_args = 0..=2)]
    expressions: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new().filter_level(default_level)
                              .parse_default_env()
                              .init();

    let options = LexerOptions { strict: args.strict };

    match args.expressions.as_slice() {
        [] => {
            if let Err(e) = run_session(&options, args.tolerance) {
                eprintln!("Failed to read the input: {e}");
                std::process::exit(1);
            }
        },
        [first, rest @ ..] => {
            if let Err(e) = run_round(first, rest.first().map(String::as_str), &options, args.tolerance) {
                println!("Error: {e}");
                std::process::exit(1);
            }
        },
    }
}

/// Runs the interactive loop until `sair` or end of input.
fn run_session(options: &LexerOptions, tolerance: f64) -> io::Result<()> {
    println!("=== Complex number calculator ===");
    println!("Operators: +, -, *, /, **");
    println!("Functions: conj(expr), √(expr)");
    println!("Use i for the imaginary unit. Example: (1+2i)*(3-4i)");
    println!("Type 'sair' to quit.\n");

    loop {
        let Some(first) = prompt("Expression 1: ")? else {
            return Ok(());
        };
        if first.eq_ignore_ascii_case("sair") {
            return Ok(());
        }
        if first.is_empty() {
            continue;
        }

        let second = prompt("Expression 2 (press ENTER to skip comparison): ")?.unwrap_or_default();
        let second = (!second.is_empty()).then_some(second.as_str());

        if let Err(e) = run_round(&first, second, options, tolerance) {
            println!("Error: {e}");
        }
        println!();
    }
}

/// Prints `message` and reads one trimmed line, or `None` at end of input.
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Evaluates one or two expressions, printing trees and results, and the
/// comparison when there are two.
fn run_round(first: &str,
             second: Option<&str>,
             options: &LexerOptions,
             tolerance: f64)
             -> Result<(), Error> {
    let r1 = evaluate_and_print(first, 1, options)?;

    if let Some(second) = second {
        let r2 = evaluate_and_print(second, 2, options)?;
        println!("The expressions are {}.", compare(r1, r2, tolerance));
    }

    Ok(())
}

/// Builds a calculator with its own environment, evaluates it with values
/// prompted on the terminal, and prints its tree and result.
fn evaluate_and_print(source: &str,
                      index: usize,
                      options: &LexerOptions)
                      -> Result<ComplexNumber, Error> {
    let mut calculator = Calculator::with_options(source, options)?;
    let result = calculator.evaluate(&mut PromptResolver::stdio())?;

    println!("Tree {index}: {}", calculator.tree());
    println!("Result {index}: {result}");
    Ok(result)
}
