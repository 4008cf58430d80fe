pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

// Absorbs representation error so an intended half (12.345) still rounds up.
const HALF_UP_EPSILON: f64 = 1e-9;

/// Renders kilometers with two decimals, rounding half up once.
pub fn format_km(km: f64) -> String {
    let hundredths = (km.max(0.0) * 100.0 + 0.5 + HALF_UP_EPSILON).floor();
    format!("{:.2}", hundredths / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(format_km(meters_to_km(12345.0)), "12.35");
        assert_eq!(format_km(meters_to_km(1005.0)), "1.01");
        assert_eq!(format_km(meters_to_km(1004.9)), "1.00");
    }

    #[test]
    fn test_off_grid_values_round_once() {
        assert_eq!(format_km(meters_to_km(1004.96)), "1.00");
        assert_eq!(format_km(meters_to_km(1004.99)), "1.00");
        assert_eq!(format_km(meters_to_km(4.96)), "0.00");
        assert_eq!(format_km(meters_to_km(5.01)), "0.01");
    }

    #[test]
    fn test_small_and_whole_values() {
        assert_eq!(format_km(0.0), "0.00");
        assert_eq!(format_km(meters_to_km(7.0)), "0.01");
        assert_eq!(format_km(meters_to_km(4.9)), "0.00");
        assert_eq!(format_km(42.0), "42.00");
    }

    #[test]
    fn test_huge_distance_does_not_overflow() {
        let label = format_km(meters_to_km(1e19));
        assert_eq!(label, "10000000000000000.00");
    }
}
