use crate::core::base::*;

/// One-dimensional star discrepancy of a point set in [0, 1): the largest
/// deviation between the empirical fraction of points below a threshold
/// and the threshold itself. Low-discrepancy sequences achieve
/// O(log n / n); i.i.d. uniform points only O(1 / sqrt(n)).
pub fn star_discrepancy_1d(points: &[Float]) -> Float {
    assert!(!points.is_empty());
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = sorted.len() as Float;
    let mut d: Float = 0.0;
    for (i, &x) in sorted.iter().enumerate() {
        let above = ((i + 1) as Float / n - x).abs();
        let below = (x - i as Float / n).abs();
        d = Float::max(d, Float::max(above, below));
    }
    return d;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        // Midpoints of n equal bins achieve the minimum 1/(2n).
        let points: Vec<Float> = (0..10).map(|i| (i as Float + 0.5) / 10.0).collect();
        assert!((star_discrepancy_1d(&points) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_002() {
        // A clumped set has discrepancy near 1.
        let points = vec![0.99; 100];
        assert!(star_discrepancy_1d(&points) > 0.9);
    }
}
