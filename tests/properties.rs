use std::collections::HashMap;

use complexa::{
    get_result,
    interpreter::{
        evaluator::core::{Comparison, DEFAULT_TOLERANCE, compare, evaluate},
        parser::core::parse,
        value::complex::ComplexNumber,
    },
};
use proptest::prelude::*;

fn component() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

proptest! {
    #[test]
    fn double_conjugate_is_identity(real in component(), imaginary in component()) {
        let z = ComplexNumber::new(real, imaginary);
        let mut values = HashMap::from([('z', z)]);
        let tree = parse("conj(conj(z))").unwrap();

        prop_assert_eq!(evaluate(&tree, &mut values).unwrap(), z);
    }

    #[test]
    fn square_root_squares_back(real in component(), imaginary in component()) {
        let z = ComplexNumber::new(real, imaginary);
        let w = z.sqrt();

        prop_assert!(w.real >= 0.0);
        prop_assert!((w * w - z).abs() <= 1e-9 * z.abs().max(1.0));
    }

    #[test]
    fn integer_sums_are_equivalent(a in 0u32..10_000, b in 0u32..10_000) {
        let mut none: HashMap<char, ComplexNumber> = HashMap::new();
        let sum = get_result(&format!("{a}+{b}"), &mut none).unwrap();
        let direct = get_result(&(a + b).to_string(), &mut none).unwrap();
        let off_by_one = get_result(&(a + b + 1).to_string(), &mut none).unwrap();

        prop_assert_eq!(compare(sum, direct, DEFAULT_TOLERANCE), Comparison::Equivalent);
        prop_assert_eq!(compare(sum, off_by_one, DEFAULT_TOLERANCE), Comparison::Different);
    }

    #[test]
    fn stringify_is_stable_across_parses(a in 0u8..100, b in 0u8..100, c in 0u8..100) {
        let src = format!("{a}**{b}**c - conj({c}i)*x/{a}");
        let first = parse(&src).unwrap().to_string();
        let second = parse(&src).unwrap().to_string();

        prop_assert_eq!(first, second);
    }
}
