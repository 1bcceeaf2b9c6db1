//! Split-half internal consistency for a single response vector.
//!
//! Scored values are split by alternating index (even positions vs odd positions,
//! in catalog order), the two halves are correlated pairwise, and the
//! correlation is stepped up to full length with the Spearman-Brown formula:
//!
//! ```text
//! reliability = clamp(2r / (1 + r), 0, 1)
//! ```
//!
//! Undefined correlations (too few values, zero variance) yield 0.0.

/// Estimate reliability from recoded item values in catalog order.
///
/// Returns 0.0 when fewer than `min_items` values are supplied.
pub fn split_half_reliability(values: &[f64], min_items: usize) -> f64 {
    if values.len() < min_items {
        return 0.0;
    }

    let even: Vec<f64> = values.iter().step_by(2).copied().collect();
    let odd: Vec<f64> = values.iter().skip(1).step_by(2).copied().collect();

    // Non-positive correlations step up to a non-positive estimate.
    let r = match pearson(&even, &odd) {
        Some(r) if r > 0.0 => r.min(1.0),
        _ => return 0.0,
    };

    let stepped = (2.0 * r) / (1.0 + r);
    if stepped.is_nan() {
        0.0
    } else {
        stepped.clamp(0.0, 1.0)
    }
}

/// Pearson correlation over the paired prefix of `a` and `b`.
///
/// `None` when either side has fewer than two values or zero variance.
pub fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    let n = a.len().min(b.len());
    if n < 2 {
        return None;
    }
    let (a, b) = (&a[..n], &b[..n]);

    let mean_a = a.iter().sum::<f64>() / n as f64;
    let mean_b = b.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    let denom = (var_a * var_b).sqrt();
    if denom <= f64::EPSILON {
        return None;
    }
    let r = cov / denom;
    if r.is_nan() {
        None
    } else {
        Some(r)
    }
}
