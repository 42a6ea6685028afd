//! Display rounding helpers.

/// Round to `decimals` decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Round to two decimal places, the precision used for every displayed number.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_1), 1.24);
        assert_eq!(round2(-7.777), -7.78);
        assert_eq!(round2(42.0), 42.0);
    }

    #[test]
    fn test_round_to_zero_decimals() {
        assert_eq!(round_to(2.6, 0), 3.0);
    }

    #[test]
    fn test_round2_keeps_non_finite() {
        assert!(round2(f64::NAN).is_nan());
        assert!(round2(f64::INFINITY).is_infinite());
    }
}
