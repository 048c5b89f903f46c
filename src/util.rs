/// Percentage of `total` represented by `value`, truncated toward zero.
/// Returns `None` when `total` is zero.
pub fn percent_of(value: i32, total: usize) -> Option<i32> {
    match total {
        positive if positive > 0 => Some(((value as f64 / positive as f64) * 100.0) as i32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(2, 4), Some(50));
        assert_eq!(percent_of(1, 3), Some(33));
        assert_eq!(percent_of(3, 3), Some(100));
    }

    #[test]
    fn test_percent_of_zero_total() {
        assert_eq!(percent_of(5, 0), None);
        assert_eq!(percent_of(0, 0), None);
    }

    #[test]
    fn test_percent_of_zero_value() {
        assert_eq!(percent_of(0, 10), Some(0));
    }

    #[test]
    fn test_percent_of_negative_value_truncates_toward_zero() {
        // -1/3 is -33.33...; truncation gives -33, not -34.
        assert_eq!(percent_of(-1, 3), Some(-33));
        assert_eq!(percent_of(-1, 4), Some(-25));
    }

    #[test]
    fn test_percent_of_can_exceed_one_hundred() {
        assert_eq!(percent_of(5, 4), Some(125));
    }
}
