//! Lag shifts

/// Shift a series forward by `periods` rows, leaving the first rows undefined
pub fn lag(values: &[Option<f64>], periods: usize) -> Vec<Option<f64>> {
    let lead = periods.min(values.len());
    std::iter::repeat(None)
        .take(lead)
        .chain(values[..values.len() - lead].iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lag_one() {
        let series = [Some(1.0), Some(2.0), None, Some(4.0)];
        assert_eq!(lag(&series, 1), vec![None, Some(1.0), Some(2.0), None]);
    }

    #[test]
    fn test_lag_longer_than_series() {
        let series = [Some(1.0), Some(2.0)];
        assert_eq!(lag(&series, 5), vec![None, None]);
    }

    #[test]
    fn test_lag_zero_is_identity() {
        let series = [Some(1.0), None];
        assert_eq!(lag(&series, 0), series.to_vec());
    }
}
