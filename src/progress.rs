//! Progress bar display for component installation

use indicatif::{ProgressBar, ProgressStyle};

/// Progress over the components installed by one resolve call
pub struct InstallProgress {
    bar: ProgressBar,
}

impl InstallProgress {
    /// Create a progress display for `total` component installs
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }

    /// Show the component currently being installed
    pub fn start_component(&self, name: &str) {
        self.bar.set_message(format!("installing {name}"));
    }

    pub fn finish_component(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
