use crate::stats::{summary, Metric};
use clima_core::Sample;

/// Fallback bounds when no finite candidate exists.
pub const DEFAULT_RANGE: (f64, f64) = (0.0, 1.0);

/// Half-width applied when candidate bounds collapse to a single value.
const DEGENERATE_EXPAND: f64 = 0.1;

/// Degeneracy-tolerant bounds computation.
///
/// Non-finite candidates yield the default unit range; a zero-width pair is
/// widened by `expand` on both sides so a single-sample or constant-valued
/// window never produces an invalid chart axis; otherwise the bounds pass
/// through unchanged.
pub fn safe_range(lo: f64, hi: f64, expand: f64) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return DEFAULT_RANGE;
    }
    if hi <= lo {
        return (lo - expand, lo + expand);
    }
    (lo, hi)
}

/// Gauge or axis bounds for one column of a window: min/max over the finite
/// values, padded by `pad`, then run through [`safe_range`].  Callers pick
/// the pad via [`Metric::gauge_pad`] or [`Metric::axis_pad`].
pub fn value_bounds(window: &[Sample], metric: Metric, pad: f64) -> (f64, f64) {
    match summary(window, metric) {
        Some(s) => safe_range(s.min - pad, s.max + pad, DEGENERATE_EXPAND),
        None => DEFAULT_RANGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_when_bounds_are_ordered() {
        assert_eq!(safe_range(2.0, 8.0, 0.1), (2.0, 8.0));
    }

    #[test]
    fn zero_width_bounds_are_expanded() {
        assert_eq!(safe_range(5.0, 5.0, 0.1), (4.9, 5.1));
    }

    #[test]
    fn inverted_bounds_collapse_onto_the_low_value() {
        assert_eq!(safe_range(5.0, 3.0, 0.1), (4.9, 5.1));
    }

    #[test]
    fn non_finite_bounds_fall_back_to_the_unit_range() {
        assert_eq!(safe_range(f64::NAN, 5.0, 0.1), (0.0, 1.0));
        assert_eq!(safe_range(5.0, f64::NAN, 0.1), (0.0, 1.0));
        assert_eq!(safe_range(f64::NEG_INFINITY, 5.0, 0.1), (0.0, 1.0));
    }

    #[test]
    fn value_bounds_pad_the_observed_extremes() {
        let window = vec![Sample::new(20.0, 50.0), Sample::new(24.0, 58.0)];
        let (lo, hi) = value_bounds(&window, Metric::Temperature, Metric::Temperature.gauge_pad());
        assert!((lo - 19.9).abs() < 1e-9);
        assert!((hi - 24.1).abs() < 1e-9);

        let (lo, hi) = value_bounds(&window, Metric::Humidity, Metric::Humidity.axis_pad());
        assert!((lo - 49.95).abs() < 1e-9);
        assert!((hi - 58.05).abs() < 1e-9);
    }

    #[test]
    fn value_bounds_of_a_constant_window_are_nonzero_width() {
        let window = vec![Sample::new(21.0, 50.0), Sample::new(21.0, 50.0)];
        // pad 0 keeps min == max, forcing the degenerate expansion
        let (lo, hi) = value_bounds(&window, Metric::Temperature, 0.0);
        assert!(hi > lo);
        assert!((hi - lo - 2.0 * 0.1).abs() < 1e-9);
    }

    #[test]
    fn value_bounds_of_an_empty_window_default() {
        assert_eq!(value_bounds(&[], Metric::Humidity, 0.05), DEFAULT_RANGE);
    }
}
