//! Progress display for the simplification pipeline.
//!
//! One 0-100 bar covers the whole run: reading the inputs fills the
//! first 30%, chunk dispatch the next 60%, writing the output the rest.

use indicatif::{ProgressBar, ProgressStyle};
use limpid_domain::ProgressFn;
use std::sync::Arc;
use std::time::Duration;

const READ_DONE_PERCENT: u64 = 30;
const DISPATCH_START_PERCENT: u64 = 35;
const DISPATCH_SHARE_PERCENT: u64 = 60;
const WRITE_START_PERCENT: u64 = 95;

/// Map a dispatch `(completed, total)` report into the overall bar.
fn scale_dispatch(completed: usize, total: usize) -> u64 {
    DISPATCH_START_PERCENT + DISPATCH_SHARE_PERCENT * completed as u64 / total.max(1) as u64
}

/// Progress reporter for one pipeline run.
pub struct PipelineProgress {
    bar: Option<ProgressBar>,
}

impl PipelineProgress {
    /// Create a reporter; `quiet` suppresses all output.
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}% {msg}")
                .unwrap()
                .progress_chars("##-"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_message("reading input");

        Self { bar: Some(bar) }
    }

    /// Inputs are read; dispatch is about to start.
    pub fn reading_done(&self) {
        if let Some(bar) = &self.bar {
            bar.set_position(READ_DONE_PERCENT);
            bar.set_message("simplifying");
        }
    }

    /// Callback for the dispatch engine, scaled into the bar's dispatch
    /// band.
    ///
    /// Workers report concurrently and deliveries may interleave, so
    /// the position only ever moves forward.
    pub fn dispatch_callback(&self) -> Option<ProgressFn> {
        let bar = self.bar.as_ref()?.clone();
        Some(Arc::new(move |completed, total| {
            let scaled = scale_dispatch(completed, total);
            if scaled > bar.position() {
                bar.set_position(scaled);
            }
            bar.set_message(format!("{}/{} chunks", completed, total));
        }))
    }

    /// Dispatch finished; the output file is being written.
    pub fn writing(&self) {
        if let Some(bar) = &self.bar {
            bar.set_position(WRITE_START_PERCENT);
            bar.set_message("writing output");
        }
    }

    /// Finish the bar.
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.set_position(100);
            bar.finish_with_message("done");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_band_scaling() {
        assert_eq!(scale_dispatch(0, 10), 35);
        assert_eq!(scale_dispatch(5, 10), 65);
        assert_eq!(scale_dispatch(10, 10), 95);
    }

    #[test]
    fn test_zero_total_does_not_divide_by_zero() {
        assert_eq!(scale_dispatch(0, 0), 35);
    }

    #[test]
    fn test_quiet_reporter_has_no_callback() {
        let progress = PipelineProgress::new(true);
        assert!(progress.dispatch_callback().is_none());

        // All stage transitions are no-ops without a bar.
        progress.reading_done();
        progress.writing();
        progress.finish();
    }
}
