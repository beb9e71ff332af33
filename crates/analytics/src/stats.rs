use clima_core::Sample;

/// Which column of a window an analytics function operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Temperature,
    Humidity,
}

impl Metric {
    pub fn value(&self, sample: &Sample) -> f64 {
        match self {
            Metric::Temperature => sample.temperature,
            Metric::Humidity => sample.humidity,
        }
    }

    /// Padding added around min/max for gauge bounds.
    pub fn gauge_pad(&self) -> f64 {
        match self {
            Metric::Temperature => 0.1,
            Metric::Humidity => 0.05,
        }
    }

    /// Padding added around min/max for line-chart axis bounds.
    pub fn axis_pad(&self) -> f64 {
        match self {
            Metric::Temperature => 0.02,
            Metric::Humidity => 0.05,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
        }
    }
}

/// The most recent sample of a window — the last element of the sorted
/// slice `SampleStore::query` returns.  `None` when the window is empty.
pub fn latest(window: &[Sample]) -> Option<&Sample> {
    window.last()
}

/// Per-metric summary over a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Count/mean/min/max over the finite values of one column.
///
/// A window whose column holds no finite value behaves like an empty one:
/// the caller gets `None`, never NaN aggregates.
pub fn summary(window: &[Sample], metric: Metric) -> Option<Summary> {
    let values: Vec<f64> = window
        .iter()
        .map(|s| metric.value(s))
        .filter(|v| v.is_finite())
        .collect();

    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(Summary {
        count,
        mean,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(readings: &[(f64, f64)]) -> Vec<Sample> {
        readings.iter().map(|&(t, h)| Sample::new(t, h)).collect()
    }

    #[test]
    fn latest_is_the_last_window_element() {
        let w = window(&[(21.0, 50.0), (22.0, 51.0), (23.0, 52.0)]);
        let current = latest(&w).unwrap();
        assert_eq!(current.temperature, 23.0);
        assert_eq!(current.humidity, 52.0);
    }

    #[test]
    fn latest_of_empty_window_is_none() {
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn summary_over_a_known_window() {
        let w = window(&[(20.0, 40.0), (22.0, 50.0), (24.0, 60.0)]);
        let s = summary(&w, Metric::Temperature).unwrap();
        assert_eq!(s.count, 3);
        assert_eq!(s.mean, 22.0);
        assert_eq!(s.min, 20.0);
        assert_eq!(s.max, 24.0);

        let s = summary(&w, Metric::Humidity).unwrap();
        assert_eq!(s.mean, 50.0);
    }

    #[test]
    fn summary_ignores_non_finite_values() {
        let w = window(&[(20.0, 40.0), (f64::NAN, 50.0), (24.0, 60.0)]);
        let s = summary(&w, Metric::Temperature).unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.mean, 22.0);
    }

    #[test]
    fn summary_of_all_missing_column_is_none() {
        let w = window(&[(f64::NAN, 40.0), (f64::INFINITY, 50.0)]);
        assert!(summary(&w, Metric::Temperature).is_none());
        // the other column is unaffected
        assert!(summary(&w, Metric::Humidity).is_some());
    }

    #[test]
    fn summary_of_empty_window_is_none() {
        assert!(summary(&[], Metric::Humidity).is_none());
    }
}
