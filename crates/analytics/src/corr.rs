use clima_core::Sample;

/// Neutral fallback when Pearson correlation is undefined — a downstream
/// heatmap always gets a well-formed matrix to render.
const IDENTITY: [[f64; 2]; 2] = [[1.0, 0.0], [0.0, 1.0]];

/// Deviations smaller than this count as a constant column.
const VARIANCE_FLOOR: f64 = 1e-12;

/// 2×2 Pearson correlation between temperature and humidity over a window.
///
/// Rows and columns are ordered temperature, humidity.  Pairs with a
/// non-finite value in either column are dropped.  Fewer than two usable
/// pairs, or a constant column, make the coefficient undefined and yield
/// the identity matrix instead.
pub fn correlation_matrix(window: &[Sample]) -> [[f64; 2]; 2] {
    let pairs: Vec<(f64, f64)> = window
        .iter()
        .map(|s| (s.temperature, s.humidity))
        .filter(|(t, h)| t.is_finite() && h.is_finite())
        .collect();

    if pairs.len() < 2 {
        return IDENTITY;
    }

    let n = pairs.len() as f64;
    let mean_t = pairs.iter().map(|&(t, _)| t).sum::<f64>() / n;
    let mean_h = pairs.iter().map(|&(_, h)| h).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_t = 0.0;
    let mut var_h = 0.0;
    for &(t, h) in &pairs {
        let dt = t - mean_t;
        let dh = h - mean_h;
        cov += dt * dh;
        var_t += dt * dt;
        var_h += dh * dh;
    }

    if var_t < VARIANCE_FLOOR || var_h < VARIANCE_FLOOR {
        return IDENTITY;
    }

    let r = cov / (var_t * var_h).sqrt();
    [[1.0, r], [r, 1.0]]
}
