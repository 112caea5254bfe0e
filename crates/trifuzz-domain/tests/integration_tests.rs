//! Integration tests for trifuzz-domain
//!
//! These tests exercise the public surface the way callers combine it:
//! build numbers, do arithmetic, then aggregate through the set.

use trifuzz_domain::{FuzzyError, TriFuzzyNum, TriFuzzyNumSet};

#[test]
fn test_arithmetic_scenarios() {
    let a = TriFuzzyNum::new(1.0, 2.0, 3.0);
    let b = TriFuzzyNum::new(-1.0, 2.0, 3.0);
    let c = TriFuzzyNum::new(-100.0, 2.0, 3.0);

    assert_eq!((a + a).to_string(), "(2, 4, 6)");
    assert_eq!((a - a).to_string(), "(-2, 0, 2)");
    assert_eq!((b * c).to_string(), "(4, 9, 100)");
}

#[test]
fn test_expression_chain() {
    let one = TriFuzzyNum::crisp(1.0);
    let x = TriFuzzyNum::new(0.0, 1.0, 2.0);

    let result = (x + one) * (x - one);
    // (1, 2, 3) * (-1, 0, 1) = (-1, 0, 3)
    assert_eq!(result.bounds(), (-1.0, 0.0, 3.0));
}

#[test]
fn test_sorting_with_std() {
    let mut values = vec![
        TriFuzzyNum::new(10.0, 11.0, 12.0),
        TriFuzzyNum::crisp(0.0),
        TriFuzzyNum::new(-4.0, -3.0, -2.0),
        TriFuzzyNum::new(0.0, 2.0, 4.0),
        TriFuzzyNum::new(1.0, 2.0, 3.0),
    ];
    values.sort();

    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["(-4, -3, -2)", "(0, 0, 0)", "(0, 2, 4)", "(1, 2, 3)", "(10, 11, 12)"]
    );
    assert_eq!(values.iter().max(), Some(&TriFuzzyNum::new(10.0, 11.0, 12.0)));
}

#[test]
fn test_collection_lifecycle() {
    let mut set = TriFuzzyNumSet::new();
    assert_eq!(set.arithmetic_mean(), Err(FuzzyError::EmptyCollection));

    set.insert(TriFuzzyNum::new(1.0, 2.0, 3.0));
    set.insert(TriFuzzyNum::new(1.0, 2.0, 3.0));
    set.insert(TriFuzzyNum::new(4.0, 5.0, 9.0));
    assert_eq!(set.len(), 3);
    assert_eq!(set.arithmetic_mean().unwrap().bounds(), (2.0, 3.0, 5.0));

    assert!(!set.remove(&TriFuzzyNum::crisp(100.0)));
    assert_eq!(set.len(), 3);

    assert!(set.remove(&TriFuzzyNum::new(4.0, 5.0, 9.0)));
    assert_eq!(set.arithmetic_mean().unwrap().bounds(), (1.0, 2.0, 3.0));

    assert!(set.remove(&TriFuzzyNum::new(3.0, 2.0, 1.0)));
    assert!(set.remove(&TriFuzzyNum::new(1.0, 2.0, 3.0)));
    assert!(set.is_empty());
    assert_eq!(set.arithmetic_mean(), Err(FuzzyError::EmptyCollection));
}

#[test]
fn test_parsed_input_mean() {
    let set: TriFuzzyNumSet = ["(0, 1, 2)", "2, 3, 4", "(4,5,6)"]
        .iter()
        .map(|s| s.parse::<TriFuzzyNum>())
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(set.arithmetic_mean().unwrap().to_string(), "(2, 3, 4)");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        FuzzyError::EmptyCollection.to_string(),
        "Cannot compute the arithmetic mean of an empty collection"
    );
    assert_eq!(FuzzyError::DivisionByZero.to_string(), "Division by zero");
}
