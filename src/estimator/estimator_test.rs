//! Tests for the emissions estimator

#[cfg(test)]
mod tests {
    use crate::estimator::{
        estimate_breakdown, estimate_co2, EstimationConfig, EstimationError,
        DEFAULT_CARBON_INTENSITY, DEFAULT_CPU_POWER_KW,
    };

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    fn custom_config() -> EstimationConfig {
        EstimationConfig::new()
            .with_cpu_power_kw(0.08)
            .with_carbon_intensity(300.0)
    }

    #[test]
    fn test_one_hour_with_defaults() {
        let grams = estimate_co2(3600.0, None).unwrap();
        assert_close(grams, 23.75);
    }

    #[test]
    fn test_one_hour_with_custom_config() {
        let grams = estimate_co2(3600.0, Some(&custom_config())).unwrap();
        assert_close(grams, 24.0);
    }

    #[test]
    fn test_zero_seconds_is_rejected() {
        let err = estimate_co2(0.0, None).unwrap_err();
        assert_eq!(
            err,
            EstimationError::InvalidInput("cpuSeconds must be greater than zero".to_string())
        );
    }

    #[test]
    fn test_negative_seconds_is_rejected() {
        let err = estimate_co2(-5.0, None).unwrap_err();
        assert!(matches!(err, EstimationError::InvalidInput(_)));
        assert_eq!(err.to_string(), "cpuSeconds must be greater than zero");
    }

    #[test]
    fn test_invalid_seconds_rejected_for_any_config() {
        let configs = [
            None,
            Some(EstimationConfig::new()),
            Some(custom_config()),
            Some(EstimationConfig::new().with_cpu_power_kw(-1.0)),
        ];

        for config in configs.iter() {
            for seconds in [0.0, -0.0, -1.0, -3600.0, f64::NEG_INFINITY] {
                assert!(
                    estimate_co2(seconds, config.as_ref()).is_err(),
                    "{seconds} should be rejected with {config:?}"
                );
            }
        }
    }

    #[test]
    fn test_zero_power_override_falls_back_to_default() {
        let config = EstimationConfig::new().with_cpu_power_kw(0.0);
        let grams = estimate_co2(1800.0, Some(&config)).unwrap();
        assert_close(grams, 11.875);
    }

    #[test]
    fn test_power_override_only_keeps_default_intensity() {
        let config = EstimationConfig::new()
            .with_cpu_power_kw(0.2)
            .with_carbon_intensity(0.0);
        let breakdown = estimate_breakdown(7200.0, Some(&config)).unwrap();

        assert_eq!(breakdown.cpu_power_kw, 0.2);
        assert_eq!(breakdown.carbon_intensity, DEFAULT_CARBON_INTENSITY);
        assert_close(breakdown.co2_grams, 2.0 * 0.2 * DEFAULT_CARBON_INTENSITY);
    }

    #[test]
    fn test_matches_formula_without_config() {
        for seconds in [0.001, 1.0, 59.5, 3600.0, 86_400.0, 1.0e7] {
            let expected = seconds / 3600.0 * DEFAULT_CPU_POWER_KW * DEFAULT_CARBON_INTENSITY;
            let actual = estimate_co2(seconds, None).unwrap();
            assert!(
                (actual - expected).abs() <= expected * 1e-12,
                "{seconds}s: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn test_strictly_increasing_in_time() {
        let config = custom_config();
        let samples = [0.5, 1.0, 10.0, 600.0, 3600.0, 100_000.0];

        for pair in samples.windows(2) {
            let lower = estimate_co2(pair[0], Some(&config)).unwrap();
            let higher = estimate_co2(pair[1], Some(&config)).unwrap();
            assert!(higher > lower, "{} -> {lower}, {} -> {higher}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_linear_in_time() {
        for config in [None, Some(custom_config())] {
            for seconds in [1.0, 42.0, 1800.0, 12_345.6] {
                let single = estimate_co2(seconds, config.as_ref()).unwrap();
                let double = estimate_co2(2.0 * seconds, config.as_ref()).unwrap();
                assert!((double - 2.0 * single).abs() <= single * 1e-12);
            }
        }
    }

    #[test]
    fn test_breakdown_agrees_with_estimate() {
        let config = custom_config();
        let breakdown = estimate_breakdown(5400.0, Some(&config)).unwrap();

        assert_eq!(breakdown.cpu_seconds, 5400.0);
        assert_close(breakdown.time_hours, 1.5);
        assert_close(breakdown.energy_kwh, 0.12);
        assert_eq!(
            breakdown.co2_grams,
            estimate_co2(5400.0, Some(&config)).unwrap()
        );
    }

    #[test]
    fn test_nan_seconds_propagates() {
        let grams = estimate_co2(f64::NAN, None).unwrap();
        assert!(grams.is_nan());
    }

    #[test]
    fn test_result_is_positive() {
        let config = EstimationConfig::new()
            .with_cpu_power_kw(1e-6)
            .with_carbon_intensity(1e-3);
        assert!(estimate_co2(1e-3, Some(&config)).unwrap() > 0.0);
    }
}
