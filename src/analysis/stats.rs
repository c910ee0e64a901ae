//! Dispersion statistics shared by the consistency analyzers

/// Arithmetic mean, `None` for an empty sample
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population variance
pub fn variance(samples: &[f64]) -> Option<f64> {
    let m = mean(samples)?;
    Some(samples.iter().map(|v| (v - m).powi(2)).sum::<f64>() / samples.len() as f64)
}

/// Coefficient of variation (population stddev / mean).
///
/// `None` with fewer than two samples or a zero mean.
pub fn coefficient_of_variation(samples: &[f64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let m = mean(samples)?;
    if m == 0.0 {
        return None;
    }
    Some(variance(samples)?.sqrt() / m)
}
