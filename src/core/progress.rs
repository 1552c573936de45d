use indicatif::*;

/// Console progress bar for long integration runs; counts samples.
pub struct ProgressReporter {
    pb: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total_samples: u64, title: &str) -> Self {
        let template =
            format!("{}: ", title) + "[{wide_bar}] {human_pos}/{human_len} ({elapsed_precise}|{eta_precise}) ";
        let pb = ProgressBar::new(total_samples);
        pb.set_style(
            ProgressStyle::with_template(&template)
                .unwrap()
                .progress_chars("=> "),
        );
        pb.tick();
        ProgressReporter { pb }
    }

    /// Hidden reporter for quiet mode; all updates become no-ops.
    pub fn hidden() -> Self {
        ProgressReporter {
            pb: ProgressBar::hidden(),
        }
    }

    pub fn update(&mut self, samples: u64) {
        if samples != 0 {
            self.pb.inc(samples);
        }
    }

    pub fn done(&mut self) {
        self.pb.finish_and_clear();
    }
}
