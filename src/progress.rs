//! Progress bar display for batch launcher generation

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display while generating launchers for several applications
pub struct BatchProgress {
    pb: ProgressBar,
}

impl BatchProgress {
    /// Create a new progress display with total launcher count
    pub fn new(total: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let pb = ProgressBar::new(total);
        pb.set_style(style);

        Self { pb }
    }

    /// Update to show the launcher currently being generated
    pub fn start(&self, name: &str) {
        self.pb.set_message(name.to_string());
    }

    /// Print a line above the bar without tearing it
    pub fn println(&self, line: impl AsRef<str>) {
        let line = line.as_ref();
        self.pb.suspend(|| println!("{line}"));
    }

    /// Print a line to stderr above the bar
    pub fn eprintln(&self, line: impl AsRef<str>) {
        let line = line.as_ref();
        self.pb.suspend(|| eprintln!("{line}"));
    }

    /// Increment progress
    pub fn inc(&self) {
        self.pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
