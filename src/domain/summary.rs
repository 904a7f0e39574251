//! Count, sum and average of a list of numbers.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::Numeric;
use crate::error::{PlatformError, PlatformResult};

/// Statistics derived from a list of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Summary {
    /// Number of elements.
    pub count: usize,
    /// Sum of all elements. Integral when every element is an integer.
    #[schema(value_type = f64)]
    pub sum: Numeric,
    /// `sum / count`, or `0` for an empty list.
    #[schema(value_type = f64)]
    pub average: Numeric,
}

/// Validate every element of a `numbers` array.
///
/// Fails on the first non-numeric element.
pub fn parse_numbers(values: &[Value]) -> PlatformResult<Vec<Numeric>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| Numeric::from_json(index, value))
        .collect()
}

/// Compute the summary of `numbers`.
pub fn summarize(numbers: &[Numeric]) -> PlatformResult<Summary> {
    let count = numbers.len();
    let sum = numbers.iter().fold(Numeric::ZERO, |acc, n| acc + *n);

    if !sum.is_finite() {
        return Err(PlatformError::MalformedInput(
            "sum of numbers is out of range".to_string(),
        ));
    }

    let average = if count == 0 {
        Numeric::ZERO
    } else {
        Numeric::Float(sum.as_f64() / count as f64)
    };

    Ok(Summary {
        count,
        sum,
        average,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ints(values: &[i64]) -> Vec<Numeric> {
        values.iter().map(|v| Numeric::Int(i128::from(*v))).collect()
    }

    #[test]
    fn test_summarize_integers() {
        let summary = summarize(&ints(&[1, 2, 3, 4])).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.sum, Numeric::Int(10));
        assert_eq!(summary.average, Numeric::Float(2.5));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]).unwrap();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.sum, Numeric::ZERO);
        assert_eq!(summary.average, Numeric::ZERO);
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({"count": 0, "sum": 0, "average": 0})
        );
    }

    #[test]
    fn test_summarize_whole_average_is_float() {
        let summary = summarize(&ints(&[2, 2])).unwrap();
        assert_eq!(summary.average, Numeric::Float(2.0));
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"count":2,"sum":4,"average":2.0}"#
        );
    }

    #[test]
    fn test_summarize_floats() {
        let numbers = vec![Numeric::Float(0.1), Numeric::Float(0.2), Numeric::Int(3)];
        let summary = summarize(&numbers).unwrap();
        assert_eq!(summary.count, 3);
        assert!((summary.sum.as_f64() - 3.3).abs() < 1e-9);
        assert!((summary.average.as_f64() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_summary_properties() {
        let cases: Vec<Vec<i64>> = vec![
            vec![5],
            vec![-3, 3],
            vec![i64::MAX, i64::MAX, i64::MAX],
            (1..=100).collect(),
            vec![-10, -20, 7],
        ];

        for values in cases {
            let summary = summarize(&ints(&values)).unwrap();
            let expected: i128 = values.iter().map(|v| i128::from(*v)).sum();

            assert_eq!(summary.count, values.len());
            assert_eq!(summary.sum, Numeric::Int(expected));
            let average = summary.sum.as_f64() / summary.count as f64;
            assert_eq!(summary.average, Numeric::Float(average));
        }
    }

    #[test]
    fn test_summarize_rejects_infinite_sum() {
        let numbers = vec![Numeric::Float(f64::MAX), Numeric::Float(f64::MAX)];
        assert!(matches!(
            summarize(&numbers),
            Err(PlatformError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_parse_numbers() {
        let values = vec![json!(1), json!(2.5), json!(-4)];
        let numbers = parse_numbers(&values).unwrap();
        assert_eq!(
            numbers,
            vec![Numeric::Int(1), Numeric::Float(2.5), Numeric::Int(-4)]
        );
    }

    #[test]
    fn test_parse_numbers_reports_first_bad_index() {
        let values = vec![json!(1), json!("b"), json!("c")];
        let err = parse_numbers(&values).unwrap_err();
        assert!(err.to_string().contains("numbers[1]"));
        assert!(err.to_string().contains("string"));
    }
}
