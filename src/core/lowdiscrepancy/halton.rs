use super::primes::*;
use super::radical_inverse::*;
use crate::core::base::*;
use crate::core::error::*;
use crate::core::sequence::*;

/// Halton low-discrepancy sequence: coordinate d of sample n is the
/// radical inverse of n in the d-th prime base. Included as a second
/// family next to [`QuasiRandom`](super::weyl::QuasiRandom); useful for
/// cross-checking discrepancy behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct HaltonSequence {
    bases: Vec<u64>,
    index: u64,
}

impl HaltonSequence {
    pub fn new(dimension: usize) -> Result<Self, QrError> {
        if dimension == 0 {
            return Err(QrError::error(
                "HaltonSequence: dimension must be at least 1",
            ));
        }
        return Ok(HaltonSequence {
            bases: first_primes(dimension),
            index: 0,
        });
    }

    pub fn index(&self) -> u64 {
        return self.index;
    }
}

impl Sequence for HaltonSequence {
    fn dimension(&self) -> usize {
        return self.bases.len();
    }

    fn fill_next(&mut self, point: &mut [Float]) {
        assert_eq!(point.len(), self.bases.len());
        self.index += 1;
        for d in 0..self.bases.len() {
            point[d] = radical_inverse(self.bases[d], self.index);
        }
    }

    fn skip_to(&mut self, index: u64) {
        self.index = index;
    }
}
