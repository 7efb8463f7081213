//! Present-value filtering.
//!
//! Removes absent entries from a sequence of optional values while
//! keeping the present ones in their original relative order. The input
//! is never modified.

/// Return a new vector holding only the present values of `values`, in
/// their original order.
///
/// # Examples
///
/// ```
/// use optionals_core::filter::remove_absent;
///
/// let names = [Some("Heather"), None, Some("Mike"), Some("John"), None, None, Some("Bob")];
/// assert_eq!(remove_absent(&names), vec!["Heather", "Mike", "John", "Bob"]);
///
/// let empty: [Option<i32>; 0] = [];
/// assert!(remove_absent(&empty).is_empty());
/// ```
pub fn remove_absent<T: Clone>(values: &[Option<T>]) -> Vec<T> {
    let present: Vec<T> = values.iter().flatten().cloned().collect();
    tracing::debug!(
        total = values.len(),
        present = present.len(),
        "Removed absent values",
    );
    present
}

/// Owning variant of [`remove_absent`] for callers that can give up the
/// input sequence.
pub fn into_present<T, I>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().collect()
}

/// Number of present values in `values`.
pub fn count_present<T>(values: &[Option<T>]) -> usize {
    values.iter().filter(|v| v.is_some()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;

    fn prop_keeps_present_in_order(values: Vec<Option<u8>>) -> bool {
        let mut expected = Vec::new();
        for value in &values {
            match value {
                Some(v) => expected.push(*v),
                None => continue,
            }
        }
        let filtered = remove_absent(&values);
        filtered.len() == count_present(&values) && filtered == expected
    }

    fn prop_owning_matches_borrowing(values: Vec<Option<u8>>) -> bool {
        remove_absent(&values) == into_present(values.clone())
    }

    #[test]
    fn playground_names() {
        let names = vec![
            Some("Heather".to_string()),
            None,
            Some("Mike".to_string()),
            Some("John".to_string()),
            None,
            None,
            Some("Bob".to_string()),
        ];
        assert_eq!(remove_absent(&names), vec!["Heather", "Mike", "John", "Bob"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let values: Vec<Option<String>> = Vec::new();
        assert!(remove_absent(&values).is_empty());
        assert!(into_present(values).is_empty());
    }

    #[test]
    fn all_absent_yields_empty_output() {
        let values: [Option<i32>; 3] = [None, None, None];
        assert!(remove_absent(&values).is_empty());
        assert_eq!(count_present(&values), 0);
    }

    #[test]
    fn input_is_left_untouched() {
        let values = vec![Some(1), None, Some(3)];
        let _ = remove_absent(&values);
        assert_eq!(values, vec![Some(1), None, Some(3)]);
    }

    #[test]
    fn duplicates_are_kept() {
        let values = [Some("a"), Some("a"), None, Some("a")];
        assert_eq!(remove_absent(&values), vec!["a", "a", "a"]);
    }

    #[test]
    fn filtered_values_keep_order_and_count() {
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_keeps_present_in_order as fn(Vec<Option<u8>>) -> bool);
    }

    #[test]
    fn owning_and_borrowing_filters_agree() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_owning_matches_borrowing as fn(Vec<Option<u8>>) -> bool);
    }
}
