use clap::*;

use quasirand::core::prelude::*;
use quasirand::integrators::*;

use log::*;
use serde::Serialize;
use std::env;
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Family {
    /// Additive recurrence with the generalized golden ratio (R_d).
    Weyl,
    /// Radical inverses in successive prime bases.
    Halton,
    /// PCG32 pseudo-random baseline; not low-discrepancy.
    Random,
}

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Dimension of the integration domain.
    #[arg(short, long, value_name = "num", default_value = "5")]
    pub dimension: usize,

    /// Number of sample points.
    #[arg(short = 'n', long, value_name = "num", default_value = "10000")]
    pub samples: u64,

    /// Point sequence family.
    #[arg(short = 'q', long, value_enum, default_value = "weyl")]
    pub sequence: Family,

    /// Seed for the pseudo-random baseline. The deterministic families
    /// ignore it.
    #[arg(long, value_name = "num", default_value = "0")]
    pub seed: u64,

    /// Integrate in parallel, one block of samples per task.
    #[arg(short = 'j', long, default_value = "false")]
    pub parallel: bool,

    /// Print the result as JSON.
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Suppress all text output other than error messages.
    #[clap(long, default_value = "false")]
    pub quiet: bool,

    // Logging options
    /// Log messages at or above this level (0 -> info, 1 -> warn, 2 -> error).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

#[derive(Debug, Serialize)]
struct Report {
    sequence: String,
    dimension: usize,
    samples: u64,
    estimate: Float,
    standard_error: Float,
    exact_value: Float,
    absolute_error: Float,
}

fn integrate_cosine_product(opts: &CommandOptions) -> Result<Estimate, QrError> {
    let dimension = opts.dimension;
    let domain = Domain::cube(dimension, 0.0, PI_OVER_2)?;
    let integrand = |x: &[Float]| -> Float {
        let mut value = 1.0;
        for &coordinate in x {
            value *= coordinate.cos();
        }
        return value;
    };

    let show_progress = !opts.quiet && !opts.json && opts.samples >= 1_000_000;
    let integrator = QmcIntegrator::new(opts.samples)?.with_progress(show_progress);

    if opts.parallel {
        return match opts.sequence {
            Family::Weyl => integrator.integrate_parallel(
                |offset| QuasiRandom::with_offset(dimension, offset),
                &domain,
                integrand,
            ),
            Family::Halton => integrator.integrate_parallel(
                |offset| {
                    let mut sequence = HaltonSequence::new(dimension)?;
                    sequence.skip_to(offset);
                    return Ok(sequence);
                },
                &domain,
                integrand,
            ),
            Family::Random => integrator.integrate_parallel(
                |offset| {
                    let mut sequence = RandomSequence::new(dimension, opts.seed);
                    sequence.skip_to(offset);
                    return Ok(sequence);
                },
                &domain,
                integrand,
            ),
        };
    }

    return match opts.sequence {
        Family::Weyl => {
            let mut sequence = QuasiRandom::new(dimension)?;
            integrator.integrate(&mut sequence, &domain, integrand)
        }
        Family::Halton => {
            let mut sequence = HaltonSequence::new(dimension)?;
            integrator.integrate(&mut sequence, &domain, integrand)
        }
        Family::Random => {
            let mut sequence = RandomSequence::new(dimension, opts.seed);
            integrator.integrate(&mut sequence, &domain, integrand)
        }
    };
}

fn run(opts: &CommandOptions) -> Result<(), QrError> {
    info!(
        "sequence={:?} dimension={} samples={} parallel={}",
        opts.sequence, opts.dimension, opts.samples, opts.parallel
    );

    let result = integrate_cosine_product(opts)?;
    let exact_value = Float::powi(Float::sin(PI_OVER_2), opts.dimension as i32);
    let absolute_error = Float::abs(result.estimate - exact_value);

    if opts.json {
        let report = Report {
            sequence: format!("{:?}", opts.sequence).to_lowercase(),
            dimension: result.dimension,
            samples: result.samples,
            estimate: result.estimate,
            standard_error: result.standard_error,
            exact_value,
            absolute_error,
        };
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| QrError::from(format!("json output: {}", e)))?;
        println!("{}", text);
        return Ok(());
    }

    if !opts.quiet {
        println!(
            "Integrating f(x) = \u{220f}_{{i=0}}^{{{}}} cos(x_i) on [0, pi/2]^{}",
            opts.dimension - 1,
            opts.dimension
        );
        println!("Estimate: {:.6}", result.estimate);
        println!("Exact value: {:.6}", exact_value);
        println!("Absolute error: {:.6}", absolute_error);
        println!("Standard error: {:.6}", result.standard_error);
    }
    return Ok(());
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);

    if opts.dimension == 0 {
        println!("{}", CommandOptions::command().render_usage());
        process::exit(-1);
    }

    if let Err(e) = run(&opts) {
        error!("{}", e);
        process::exit(-1);
    }
}
