//! Elementary sequence statistics

/// Absolute first-order differences, `|x[i+1] - x[i]|`
pub fn abs_differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| (w[1] - w[0]).abs()).collect()
}

/// Mean of squared values, 0.0 for an empty slice
pub fn mean_square(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64
}

/// Running mean up to and including each position
pub fn cumulative_mean(values: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            total += v;
            total / (i + 1) as f64
        })
        .collect()
}
