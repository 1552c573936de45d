use crate::core::base::*;
use crate::core::error::*;
use crate::core::sequence::*;

/// Additive (Kronecker/Weyl) low-discrepancy sequence with the
/// generalized-golden-ratio basis, also known as the R_d sequence.
///
/// The basis constant for coordinate d is `-phi^-(d+1) mod 1`, where
/// `phi > 1` is the unique real root of `x^(D+1) = x + 1`; the sequence
/// walks the R_d lattice in reverse, which mirrors every axis but leaves
/// the discrepancy unchanged. For D = 1 the identity `1 - phi^-1 = phi^-2`
/// makes this the classic golden-ratio sequence `frac(n * phi^-2)`. The
/// joint D-tuple is badly approximable by rationals, so projections onto
/// any subset of coordinates stay low-discrepancy. Exponents stop at D:
/// `phi^-D + phi^-(D+1) = 1`, so including the (D+1)-st power would lock
/// two axes into a perfect linear correlation.
///
/// Each step performs `state[d] = frac(state[d] + basis[d])` per
/// coordinate; the modulo-1 reduction every step keeps the accumulators
/// bounded, so rounding error grows only linearly with the sample index
/// (well below 1e-9 even after tens of millions of samples in f64).
#[derive(Debug, Clone, PartialEq)]
pub struct QuasiRandom {
    basis: Vec<Float>,
    state: Vec<Float>,
    index: u64,
}

/// Root of `x^(dimension+1) = x + 1` via the fixed-point iteration
/// `x <- (1 + x)^(1/(dimension+1))`, which contracts for every dimension.
fn harmonious_root(dimension: usize) -> Float {
    let exponent = 1.0 / (dimension as Float + 1.0);
    let mut x: Float = 2.0;
    for _ in 0..64 {
        let next = (1.0 + x).powf(exponent);
        if (next - x).abs() < 1e-16 {
            return next;
        }
        x = next;
    }
    return x;
}

impl QuasiRandom {
    /// Creates a generator for `dimension`-dimensional points. Fails for
    /// `dimension == 0`.
    pub fn new(dimension: usize) -> Result<Self, QrError> {
        if dimension == 0 {
            return Err(QrError::error("QuasiRandom: dimension must be at least 1"));
        }
        let phi = harmonious_root(dimension);
        let inv_phi = 1.0 / phi;
        let mut basis = Vec::with_capacity(dimension);
        let mut a = 1.0;
        for _ in 0..dimension {
            a *= inv_phi;
            basis.push(1.0 - a % 1.0);
        }
        return Ok(QuasiRandom {
            basis,
            state: vec![0.0; dimension],
            index: 0,
        });
    }

    /// Creates a generator whose next point is sample `offset + 1`.
    /// Parallel consumers use this to carve out disjoint index blocks.
    pub fn with_offset(dimension: usize, offset: u64) -> Result<Self, QrError> {
        let mut generator = Self::new(dimension)?;
        generator.skip_to(offset);
        return Ok(generator);
    }

    /// Number of points emitted so far.
    pub fn index(&self) -> u64 {
        return self.index;
    }

    pub fn basis(&self) -> &[Float] {
        return &self.basis;
    }
}

impl Sequence for QuasiRandom {
    fn dimension(&self) -> usize {
        return self.basis.len();
    }

    fn fill_next(&mut self, point: &mut [Float]) {
        assert_eq!(point.len(), self.basis.len());
        self.index += 1;
        for d in 0..self.basis.len() {
            let s = self.state[d] + self.basis[d];
            // state and basis are both below 1, so one subtraction reduces.
            self.state[d] = if s >= 1.0 { s - 1.0 } else { s };
            point[d] = self.state[d];
        }
    }

    fn skip_to(&mut self, index: u64) {
        // Recomputes frac(index * basis) directly; exact while
        // index * basis stays within f64 integer precision.
        self.index = index;
        for d in 0..self.basis.len() {
            self.state[d] = (index as Float * self.basis[d]).fract();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        // D = 1 root is the golden ratio.
        let phi = harmonious_root(1);
        assert!((phi - 1.6180339887498949).abs() < 1e-12);
    }

    #[test]
    fn test_002() {
        assert!(QuasiRandom::new(0).is_err());
        let g = QuasiRandom::new(1).unwrap();
        // 1 - phi^-1 = phi^-2
        assert!((g.basis()[0] - 0.3819660112501051).abs() < 1e-12);
    }

    #[test]
    fn test_003() {
        let mut g = QuasiRandom::new(4).unwrap();
        assert_eq!(g.index(), 0);
        let _ = g.next_point();
        let _ = g.next_point();
        assert_eq!(g.index(), 2);
    }
}
