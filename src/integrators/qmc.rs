use crate::core::base::*;
use crate::core::error::*;
use crate::core::progress::*;
use crate::core::sequence::*;
use crate::integrators::domain::*;

use log::*;
use rayon::prelude::*;
use serde::Serialize;

const DEFAULT_BLOCK_SIZE: u64 = 4096;

/// Result of one integration run.
#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    pub estimate: Float,
    /// Sample-variance-based error indicator. Exact for i.i.d. sampling;
    /// for low-discrepancy sequences it overstates the true error, which
    /// decays faster than 1/sqrt(n).
    pub standard_error: Float,
    pub samples: u64,
    pub dimension: usize,
}

/// Monte-Carlo estimator over an axis-aligned domain. The point source
/// decides the flavor: a low-discrepancy [`Sequence`] makes this a
/// quasi-Monte-Carlo integrator, [`RandomSequence`] plain Monte Carlo.
#[derive(Debug, Clone)]
pub struct QmcIntegrator {
    samples: u64,
    block_size: u64,
    progress: bool,
}

struct BlockSums {
    sum: Float,
    sum_sq: Float,
}

impl QmcIntegrator {
    pub fn new(samples: u64) -> Result<Self, QrError> {
        if samples == 0 {
            return Err(QrError::error("QmcIntegrator: sample count must be positive"));
        }
        return Ok(QmcIntegrator {
            samples,
            block_size: DEFAULT_BLOCK_SIZE,
            progress: false,
        });
    }

    pub fn with_block_size(mut self, block_size: u64) -> Result<Self, QrError> {
        if block_size == 0 {
            return Err(QrError::error("QmcIntegrator: block size must be positive"));
        }
        self.block_size = block_size;
        return Ok(self);
    }

    /// Shows a console progress bar while integrating.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        return self;
    }

    pub fn samples(&self) -> u64 {
        return self.samples;
    }

    fn reporter(&self) -> ProgressReporter {
        if self.progress {
            return ProgressReporter::new(self.samples, "Integrating");
        }
        return ProgressReporter::hidden();
    }

    fn check_dimension<S: Sequence + ?Sized>(
        sequence: &S,
        domain: &Domain,
    ) -> Result<(), QrError> {
        if sequence.dimension() != domain.dimension() {
            return Err(QrError::from(format!(
                "QmcIntegrator: sequence dimension {} does not match domain dimension {}",
                sequence.dimension(),
                domain.dimension()
            )));
        }
        return Ok(());
    }

    fn run_block<S, F>(sequence: &mut S, domain: &Domain, integrand: &F, count: u64) -> BlockSums
    where
        S: Sequence + ?Sized,
        F: Fn(&[Float]) -> Float,
    {
        let dimension = domain.dimension();
        let mut unit = vec![0.0; dimension];
        let mut mapped = vec![0.0; dimension];
        let mut sums = BlockSums {
            sum: 0.0,
            sum_sq: 0.0,
        };
        for _ in 0..count {
            sequence.fill_next(&mut unit);
            domain.map_point(&unit, &mut mapped);
            let value = integrand(&mapped);
            sums.sum += value;
            sums.sum_sq += value * value;
        }
        return sums;
    }

    fn finish(&self, domain: &Domain, blocks: &[BlockSums]) -> Estimate {
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for block in blocks {
            sum += block.sum;
            sum_sq += block.sum_sq;
        }
        let n = self.samples as Float;
        let volume = domain.volume();
        let mean = sum / n;
        let variance = Float::max(sum_sq / n - mean * mean, 0.0);
        return Estimate {
            estimate: volume * mean,
            standard_error: volume * (variance / n).sqrt(),
            samples: self.samples,
            dimension: domain.dimension(),
        };
    }

    /// Single-threaded estimate of the integral of `integrand` over
    /// `domain`, consuming the next `samples` points of `sequence`.
    pub fn integrate<S, F>(
        &self,
        sequence: &mut S,
        domain: &Domain,
        integrand: F,
    ) -> Result<Estimate, QrError>
    where
        S: Sequence + ?Sized,
        F: Fn(&[Float]) -> Float,
    {
        Self::check_dimension(sequence, domain)?;
        debug!(
            "integrating: dimension={} samples={}",
            domain.dimension(),
            self.samples
        );

        let mut reporter = self.reporter();
        let mut blocks = Vec::new();
        let mut remaining = self.samples;
        while remaining > 0 {
            let count = u64::min(self.block_size, remaining);
            blocks.push(Self::run_block(sequence, domain, &integrand, count));
            reporter.update(count);
            remaining -= count;
        }
        reporter.done();
        return Ok(self.finish(domain, &blocks));
    }

    /// Rayon-parallel estimate. `constructor` must build a sequence
    /// positioned at a given sample offset (see [`Sequence::skip_to`]);
    /// each block of samples gets its own instance, so the blocks are
    /// disjoint stretches of one logical sequence. Block sums are reduced
    /// in block order, making the result independent of thread scheduling.
    pub fn integrate_parallel<S, C, F>(
        &self,
        constructor: C,
        domain: &Domain,
        integrand: F,
    ) -> Result<Estimate, QrError>
    where
        S: Sequence,
        C: Fn(u64) -> Result<S, QrError> + Sync,
        F: Fn(&[Float]) -> Float + Sync,
    {
        let probe = constructor(0)?;
        Self::check_dimension(&probe, domain)?;
        drop(probe);

        let block_count = self.samples.div_ceil(self.block_size);
        debug!(
            "integrating in parallel: dimension={} samples={} blocks={}",
            domain.dimension(),
            self.samples,
            block_count
        );

        let reporter = std::sync::Mutex::new(self.reporter());
        let blocks = (0..block_count)
            .into_par_iter()
            .map(|b| -> Result<BlockSums, QrError> {
                let offset = b * self.block_size;
                let count = u64::min(self.block_size, self.samples - offset);
                let mut sequence = constructor(offset)?;
                let sums = Self::run_block(&mut sequence, domain, &integrand, count);
                reporter.lock().unwrap().update(count);
                return Ok(sums);
            })
            .collect::<Result<Vec<BlockSums>, QrError>>()?;
        reporter.lock().unwrap().done();
        return Ok(self.finish(domain, &blocks));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        assert!(QmcIntegrator::new(0).is_err());
        assert!(QmcIntegrator::new(10).unwrap().with_block_size(0).is_err());
    }

    #[test]
    fn test_002() {
        // Integrating the constant 1 gives the domain volume exactly.
        let mut seq = crate::core::lowdiscrepancy::QuasiRandom::new(2).unwrap();
        let domain = Domain::cube(2, 0.0, 3.0).unwrap();
        let integrator = QmcIntegrator::new(100).unwrap();
        let result = integrator.integrate(&mut seq, &domain, |_| 1.0).unwrap();
        assert!((result.estimate - 9.0).abs() < 1e-9);
        assert!(result.standard_error.abs() < 1e-9);
    }

    #[test]
    fn test_003() {
        // Dimension mismatch is rejected.
        let mut seq = crate::core::lowdiscrepancy::QuasiRandom::new(3).unwrap();
        let domain = Domain::unit(2).unwrap();
        let integrator = QmcIntegrator::new(10).unwrap();
        assert!(integrator.integrate(&mut seq, &domain, |_| 1.0).is_err());
    }
}
