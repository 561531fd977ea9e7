use std::collections::HashSet;

/// Distinct values of `key` across `rows`, in first-occurrence order.
pub fn unique_values<T, K>(rows: &[T], key: K) -> Vec<String>
where
    K: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();

    for row in rows {
        let value = key(row);
        if seen.insert(value.to_string()) {
            values.push(value.to_string());
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicates_collapse() {
        let rows = vec![("a", 1), ("b", 2), ("a", 3)];
        let result = unique_values(&rows, |r| r.0);
        assert_eq!(result, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_first_occurrence_order() {
        let rows = vec!["2021", "2019", "2021", "2020", "2019"];
        let result = unique_values(&rows, |r| *r);
        assert_eq!(
            result,
            vec!["2021".to_string(), "2019".to_string(), "2020".to_string()]
        );
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<&str> = vec![];
        let result = unique_values(&rows, |r| *r);
        assert!(result.is_empty());
    }

    #[test]
    fn test_all_distinct() {
        let rows = vec!["1", "2", "3", "4"];
        let result = unique_values(&rows, |r| *r);
        assert_eq!(result.len(), 4);
    }
}
