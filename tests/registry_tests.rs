//! The name-keyed registry must agree with the typed functions.

use arrayops::{ArrayError, OpRegistry};
use serde_json::{json, Value};

fn call(op: &str, input: Value) -> Result<Value, ArrayError> {
    OpRegistry::with_std_ops().call(op, &input)
}

#[test]
fn test_every_documented_example_by_name() {
    let cases = vec![
        ("bookEndList", json!([]), json!([])),
        ("bookEndList", json!([5]), json!([5, 5])),
        ("bookEndList", json!([1, 2, 3, 4]), json!([1, 4])),
        ("tripleNumbers", json!([1, -2, 0]), json!([3, -6, 0])),
        ("stringsToIntegers", json!(["3", "abc", "12x", "-4"]), json!([3, 0, 12, -4])),
        ("removeDollars", json!(["$3", "5", "$abc"]), json!([3, 5, 0])),
        ("shoutIfExclaiming", json!(["hi!", "what?", "ok"]), json!(["HI!", "ok"])),
        ("countShortWords", json!(["a", "abcd", "abc", ""]), json!(3)),
        ("allRGB", json!([]), json!(true)),
        ("allRGB", json!(["red", "blue"]), json!(true)),
        ("allRGB", json!(["red", "pink"]), json!(false)),
        ("allRGB", Value::Null, json!(true)),
        ("makeMath", json!([1, 2, 3]), json!("6=1+2+3")),
        ("makeMath", json!([]), json!("0=0")),
        ("injectPositive", json!([1, 9, -5, 7]), json!([1, 9, -5, 10, 7])),
        ("injectPositive", json!([1, 9, 7]), json!([1, 9, 7, 17])),
    ];

    for (op, input, expected) in cases {
        let got = call(op, input.clone()).unwrap();
        assert_eq!(got, expected, "{op} on {input}");
    }
}

#[test]
fn test_fractional_results_stay_floats() {
    assert_eq!(call("tripleNumbers", json!([0.5])).unwrap(), json!([1.5]));
}

#[test]
fn test_wrong_element_type_is_an_input_error() {
    let err = call("countShortWords", json!(["ok", 3])).unwrap_err();
    match err {
        ArrayError::InputShape { op, message, .. } => {
            assert_eq!(op, "countShortWords");
            assert_eq!(message, "element 1 is a number, expected string");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_array_input_is_an_input_error() {
    let err = call("tripleNumbers", json!(3)).unwrap_err();
    assert!(matches!(err, ArrayError::InputShape { .. }));
}

#[test]
fn test_unknown_name() {
    let err = call("bookendlist", json!([])).unwrap_err();
    assert_eq!(err.to_string(), "Unknown operation: bookendlist");
}
