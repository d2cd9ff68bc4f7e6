/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `matched / total * 100` rounded to one decimal. An empty total is 0% coverage.
pub fn coverage_percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(matched as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(66.666), 66.7);
        assert_eq!(round1(100.0), 100.0);
    }

    #[test]
    fn test_coverage_zero_total_is_zero() {
        assert_eq!(coverage_percentage(0, 0), 0.0);
        assert_eq!(coverage_percentage(3, 0), 0.0);
    }

    #[test]
    fn test_coverage_partial() {
        assert_eq!(coverage_percentage(1, 3), 33.3);
        assert_eq!(coverage_percentage(2, 3), 66.7);
        assert_eq!(coverage_percentage(4, 4), 100.0);
    }
}
