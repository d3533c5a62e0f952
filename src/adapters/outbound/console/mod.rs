/// Console adapters: operator-facing progress and the stdout summary
mod progress_reporter;
mod stdout_presenter;

pub use progress_reporter::TracingProgressReporter;
pub use stdout_presenter::StdoutPresenter;
