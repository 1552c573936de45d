use crate::core::base::*;
use crate::core::rng::*;

/// A deterministic point source over the unit hypercube.
///
/// Each call to `fill_next` advances the internal state by one step and
/// writes the current point, one coordinate per slot, each in [0, 1).
/// Implementations are single-threaded state machines; parallel consumers
/// take one instance each and partition the index range with `skip_to`.
pub trait Sequence {
    fn dimension(&self) -> usize;

    /// Advances the sequence and writes the next point into `point`.
    /// `point.len()` must equal `dimension()`.
    fn fill_next(&mut self, point: &mut [Float]);

    /// Repositions the sequence so that the next emitted point is the one
    /// with (1-based) sample index `index + 1`.
    fn skip_to(&mut self, index: u64);

    fn next_point(&mut self) -> Vec<Float> {
        let mut point = vec![0.0; self.dimension()];
        self.fill_next(&mut point);
        return point;
    }
}

/// PCG32-backed i.i.d. uniform point source. Not low-discrepancy; exists so
/// integrators and tests can compare against plain Monte Carlo.
#[derive(Debug, Clone)]
pub struct RandomSequence {
    dimension: usize,
    seed: u64,
    rng: RNG,
}

impl RandomSequence {
    pub fn new(dimension: usize, seed: u64) -> Self {
        RandomSequence {
            dimension,
            seed,
            rng: RNG::new_sequence(seed),
        }
    }
}

impl Sequence for RandomSequence {
    fn dimension(&self) -> usize {
        return self.dimension;
    }

    fn fill_next(&mut self, point: &mut [Float]) {
        assert_eq!(point.len(), self.dimension);
        for x in point.iter_mut() {
            *x = self.rng.uniform_float();
        }
    }

    fn skip_to(&mut self, index: u64) {
        // PCG32 has no cheap jump-ahead here; each block offset gets its
        // own stream instead, which is just as reproducible.
        self.rng = RNG::new_sequence(self.seed ^ index.wrapping_mul(0x9e3779b97f4a7c15));
    }
}
