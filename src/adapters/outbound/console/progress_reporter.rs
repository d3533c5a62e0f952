use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;

/// TracingProgressReporter adapter for reporting pipeline phases
///
/// Phase messages become `tracing` events so they share the configured log
/// format; long loops additionally drive an indicatif bar on stderr. Nothing
/// is written to stdout, which is reserved for the run summary.
pub struct TracingProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    show_progress_bar: bool,
}

impl TracingProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            show_progress_bar: true,
        }
    }

    /// Keeps loop progress out of the output, e.g. for JSON logs
    pub fn without_progress_bar() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            show_progress_bar: false,
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            pb.set_length(total as u64);
            pb.clone()
        } else {
            let pb = ProgressBar::new(total as u64);
            if !self.show_progress_bar {
                pb.set_draw_target(ProgressDrawTarget::hidden());
            }
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}",
                    )
                    .expect("Failed to set progress bar template")
                    .progress_chars("=>-"),
            );
            *pb_option = Some(pb.clone());
            pb
        }
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for TracingProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TracingProgressReporter {
    fn report(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        tracing::warn!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        tracing::info!("{}", message);
    }
}
