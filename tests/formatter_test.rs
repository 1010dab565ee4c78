use devpanel::{derive, CalculatorSession, FormatterResult};

#[test]
fn test_non_numeric_first_field_always_wins() {
    for second in ["", "3", "2.5", "oops", "-1e3"] {
        assert_eq!(derive("abc", second), FormatterResult::InvalidFirst, "second = {second:?}");
    }
}

#[test]
fn test_numeric_first_with_non_numeric_second() {
    for first in ["0", "-7", "1.25", "1e2"] {
        assert_eq!(derive(first, "x1"), FormatterResult::InvalidSecond, "first = {first:?}");
    }
}

#[test]
fn test_displayed_sums() {
    let cases = [
        ("2", "3", "結果: 5"),
        ("2.5", "3", "結果: 5.5"),
        ("-1.5", "0.25", "結果: -1.25"),
        ("1e3", "1", "結果: 1001"),
        ("0.5", "0.5", "結果: 1"),
    ];
    for (a, b, expected) in cases {
        assert_eq!(derive(a, b).to_string(), expected, "{a} + {b}");
    }
}

#[test]
fn test_awaiting_input_when_a_field_is_empty() {
    assert_eq!(derive("", ""), FormatterResult::AwaitingInput);
    assert_eq!(derive("", "3"), FormatterResult::AwaitingInput);
    assert_eq!(derive("4", ""), FormatterResult::AwaitingInput);
}

#[test]
fn test_session_matches_pure_derivation() {
    let mut session = CalculatorSession::new();
    let edits = [("1", ""), ("1", "2"), ("1x", "2"), ("", "2"), ("3.5", "2")];

    for (first, second) in edits {
        session.set_first(first);
        session.set_second(second);
        assert_eq!(session.result(), derive(first, second));
        assert_eq!(session.result_text(), derive(first, second).to_string());
    }

    session.clear();
    assert_eq!(session.result(), FormatterResult::AwaitingInput);
}

#[test]
fn test_result_json_shape() {
    assert_eq!(
        serde_json::to_value(derive("2", "3")).unwrap(),
        serde_json::json!({"kind": "sum", "value": 5.0})
    );
    assert_eq!(
        serde_json::to_value(derive("a", "3")).unwrap(),
        serde_json::json!({"kind": "invalid_first"})
    );
}
