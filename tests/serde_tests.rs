#![cfg(all(feature = "serde", feature = "select"))]
//! Serialization tests for the built-in comparison operators.

use lambars_idioms::predicate::Operator;
use rstest::rstest;

#[rstest]
#[case(Operator::GreaterOrEqual, "\">=\"")]
#[case(Operator::Greater, "\">\"")]
#[case(Operator::Less, "\"<\"")]
#[case(Operator::Equal, "\"==\"")]
#[case(Operator::LessOrEqual, "\"<=\"")]
fn operator_serializes_as_its_token(#[case] operator: Operator, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&operator).unwrap(), expected);
    assert_eq!(serde_json::from_str::<Operator>(expected).unwrap(), operator);
}

#[rstest]
fn operator_tokens_in_configuration() {
    let rules: Vec<(String, Operator, i32)> =
        serde_json::from_str(r#"[["cake", "<", 60], ["bread", "<=", 20]]"#).unwrap();
    assert_eq!(
        rules,
        [
            ("cake".to_string(), Operator::Less, 60),
            ("bread".to_string(), Operator::LessOrEqual, 20),
        ]
    );
}

#[rstest]
fn unknown_token_is_rejected() {
    assert!(serde_json::from_str::<Operator>("\"!=\"").is_err());
}
