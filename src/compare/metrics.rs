// Row statistics used by the three rankings.
//
// All functions take one zero-filled table row (one value per corpus).

/// Arithmetic mean. 0.0 for an empty row.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (denominator n - 1). 0.0 below two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / (n - 1) as f64).sqrt()
}

/// Share of the row total held by column `col`. 0.0 when the row sums to
/// zero or `col` is out of range.
pub fn share(values: &[f64], col: usize) -> f64 {
    let total: f64 = values.iter().sum();
    match values.get(col) {
        Some(&v) if total > 0.0 => v / total,
        _ => 0.0,
    }
}
