use crate::core::base::*;
use crate::core::error::*;

/// Axis-aligned integration domain: a box with per-axis bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    lower: Vec<Float>,
    upper: Vec<Float>,
}

impl Domain {
    pub fn new(lower: Vec<Float>, upper: Vec<Float>) -> Result<Self, QrError> {
        if lower.is_empty() {
            return Err(QrError::error("Domain: dimension must be at least 1"));
        }
        if lower.len() != upper.len() {
            return Err(QrError::error("Domain: bound lengths differ"));
        }
        for d in 0..lower.len() {
            if !lower[d].is_finite() || !upper[d].is_finite() || lower[d] >= upper[d] {
                return Err(QrError::from(format!(
                    "Domain: invalid bounds [{}, {}] on axis {}",
                    lower[d], upper[d], d
                )));
            }
        }
        return Ok(Domain { lower, upper });
    }

    /// The unit hypercube [0, 1)^dimension.
    pub fn unit(dimension: usize) -> Result<Self, QrError> {
        return Self::new(vec![0.0; dimension], vec![1.0; dimension]);
    }

    /// A cube with the same bounds on every axis.
    pub fn cube(dimension: usize, lower: Float, upper: Float) -> Result<Self, QrError> {
        return Self::new(vec![lower; dimension], vec![upper; dimension]);
    }

    pub fn dimension(&self) -> usize {
        return self.lower.len();
    }

    pub fn volume(&self) -> Float {
        let mut v = 1.0;
        for d in 0..self.lower.len() {
            v *= self.upper[d] - self.lower[d];
        }
        return v;
    }

    /// Affinely maps a unit-hypercube point into the domain.
    pub fn map_point(&self, unit: &[Float], out: &mut [Float]) {
        assert_eq!(unit.len(), self.lower.len());
        assert_eq!(out.len(), self.lower.len());
        for d in 0..self.lower.len() {
            out[d] = self.lower[d] + unit[d] * (self.upper[d] - self.lower[d]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        assert!(Domain::unit(0).is_err());
        assert!(Domain::cube(2, 1.0, 1.0).is_err());
        assert!(Domain::new(vec![0.0], vec![Float::INFINITY]).is_err());
        assert!(Domain::new(vec![0.0, 0.0], vec![1.0]).is_err());
    }

    #[test]
    fn test_002() {
        let d = Domain::cube(3, -1.0, 1.0).unwrap();
        assert_eq!(d.dimension(), 3);
        assert!((d.volume() - 8.0).abs() < 1e-12);

        let mut out = [0.0; 3];
        d.map_point(&[0.5, 0.0, 1.0], &mut out);
        assert_eq!(out, [0.0, -1.0, 1.0]);
    }
}
