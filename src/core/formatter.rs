//! Two free-text fields in, one status line out.

use crate::core::labels;
use crate::domain::model::FormatterResult;
use std::fmt;

/// Derives the calculator status from the raw field texts.
///
/// Rules are checked in order and the first match wins, so an invalid first
/// field hides whatever is in the second one.
pub fn derive(text1: &str, text2: &str) -> FormatterResult {
    let num1 = parse_field(text1);
    let num2 = parse_field(text2);

    match (num1, num2) {
        (None, _) if !text1.is_empty() => FormatterResult::InvalidFirst,
        (_, None) if !text2.is_empty() => FormatterResult::InvalidSecond,
        (Some(a), Some(b)) => FormatterResult::Sum(a + b),
        _ => FormatterResult::AwaitingInput,
    }
}

/// Parses one field the way the panel has always accepted numbers.
///
/// Surrounding ASCII whitespace and control characters are ignored and a
/// single `f`/`d` type suffix is allowed. Non-finite values are spelled
/// exactly `Infinity` or `NaN`; Rust's `inf`/`nan` forms are rejected.
pub fn parse_field(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| c <= ' ');
    let unsigned = trimmed.trim_start_matches(['+', '-']);

    if unsigned == "Infinity" || unsigned == "NaN" {
        return trimmed.parse::<f64>().ok();
    }

    let lowered = unsigned.to_ascii_lowercase();
    if lowered.starts_with("inf") || lowered.starts_with("nan") {
        return None;
    }

    let number = trimmed
        .strip_suffix(['f', 'F', 'd', 'D'])
        .unwrap_or(trimmed);
    number.parse::<f64>().ok()
}

/// Integer-valued sums print without a decimal point; everything else uses
/// the shortest float representation.
pub fn format_sum(sum: f64) -> String {
    // i64::MIN..2^63, the range where `as i64` is exact for whole numbers
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if sum.is_finite() && sum.trunc() == sum && (-LIMIT..LIMIT).contains(&sum) {
        (sum as i64).to_string()
    } else if sum.is_infinite() {
        if sum > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        sum.to_string()
    }
}

impl fmt::Display for FormatterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatterResult::InvalidFirst => f.write_str(labels::INVALID_FIRST),
            FormatterResult::InvalidSecond => f.write_str(labels::INVALID_SECOND),
            FormatterResult::AwaitingInput => f.write_str(labels::AWAITING_INPUT),
            FormatterResult::Sum(sum) => write!(f, "{}{}", labels::RESULT_PREFIX, format_sum(*sum)),
        }
    }
}
