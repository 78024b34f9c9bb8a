//! Progress reporting sinks for generation runs

use indicatif::{ProgressBar, ProgressStyle};

/// Sink receiving per-candidate updates from the placement engine
///
/// `report` is called exactly once per attempted candidate and doubles as
/// the engine's cooperative yield point; `finish` is called once when the
/// run reaches its terminal phase. Neither affects the placement outcome.
pub trait ProgressSink {
    /// Receive a progress update as a percentage and status message
    fn report(&mut self, percent: u8, message: &str);

    /// Receive the terminal completion notification
    fn finish(&mut self, message: &str);
}

/// Sink that discards all updates, used with `--quiet`
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn report(&mut self, _percent: u8, _message: &str) {}

    fn finish(&mut self, _message: &str) {}
}

/// Terminal progress bar tracking placement percentage
pub struct ProgressBarSink {
    bar: ProgressBar,
}

impl ProgressBarSink {
    /// Create a bar spanning 0 to 100 percent
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:50.cyan/blue}] {pos}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        Self { bar }
    }
}

impl Default for ProgressBarSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressBarSink {
    fn report(&mut self, percent: u8, message: &str) {
        self.bar.set_position(u64::from(percent));
        self.bar.set_message(message.to_string());
    }

    fn finish(&mut self, message: &str) {
        self.bar.set_position(100);
        self.bar.finish_with_message(message.to_string());
    }
}
