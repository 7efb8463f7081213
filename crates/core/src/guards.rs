//! Guard clauses and conditional unwrapping.
//!
//! Each helper rejects the unwanted case with an early return before
//! doing any real work.

/// Format an optional number, or `"no value"` when absent.
pub fn describe_value(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "no value".to_string(),
    }
}

pub fn check_value(value: Option<&str>) -> &'static str {
    if value.is_none() {
        return "Value is absent.";
    }
    "Value is present."
}

/// Label the sign of `number`. Zero counts as positive.
pub fn sign_label(number: i64) -> &'static str {
    if number >= 0 {
        return "I am positive";
    }
    "I am negative!"
}

/// Describe an optional integer, binding it for the rest of the function
/// when present.
pub fn describe_number(number: Option<i64>) -> String {
    let Some(unwrapped) = number else {
        return "This value is absent".to_string();
    };
    format!("This unwrapped value is {unwrapped}")
}

/// Divide `number` by `by`, returning `number` unchanged for a zero
/// divisor.
///
/// ```
/// use optionals_core::guards::divide;
///
/// assert_eq!(divide(10.0, 0.0), 10.0);
/// assert_eq!(divide(10.0, 4.0), 2.5);
/// ```
pub fn divide(number: f64, by: f64) -> f64 {
    if by == 0.0 {
        tracing::debug!(number, "Refusing to divide by zero");
        return number;
    }
    number / by
}

/// Sum of `values`, or 0 for an empty slice.
pub fn sum(values: &[i64]) -> i64 {
    if values.first().is_none() {
        return 0;
    }
    values.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_value_formats_present_number() {
        assert_eq!(describe_value(Some(1.5)), "1.5");
    }

    #[test]
    fn describe_value_reports_absence() {
        assert_eq!(describe_value(None), "no value");
    }

    #[test]
    fn check_value_both_states() {
        assert_eq!(check_value(None), "Value is absent.");
        assert_eq!(check_value(Some("")), "Value is present.");
    }

    #[test]
    fn sign_label_treats_zero_as_positive() {
        assert_eq!(sign_label(10), "I am positive");
        assert_eq!(sign_label(0), "I am positive");
        assert_eq!(sign_label(-3), "I am negative!");
    }

    #[test]
    fn describe_number_both_states() {
        assert_eq!(describe_number(Some(10)), "This unwrapped value is 10");
        assert_eq!(describe_number(None), "This value is absent");
    }

    #[test]
    fn divide_by_zero_returns_dividend() {
        assert_eq!(divide(10.0, 0.0), 10.0);
        assert_eq!(divide(-7.5, -0.0), -7.5);
    }

    #[test]
    fn divide_normal() {
        assert_eq!(divide(9.0, 3.0), 3.0);
    }

    #[test]
    fn sum_of_empty_slice_is_zero() {
        assert_eq!(sum(&[]), 0);
    }

    #[test]
    fn sum_of_values() {
        assert_eq!(sum(&[3, 2, 5, 7, 1, 9]), 27);
    }
}
