//! Progress bar and indicators.
//!
//! This module provides visual progress indicators for multi-file
//! operations.
//!
//! # Examples
//!
//! ```
//! use pdftool::output::progress::{ProgressBar, ProgressStyle};
//!
//! let mut progress = ProgressBar::new(10, ProgressStyle::Counter);
//! progress.set_message("Merging");
//!
//! for i in 0..=10 {
//!     progress.update(i);
//!     // Do work...
//! }
//!
//! progress.finish();
//! ```

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Style of progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStyle {
    /// Classic progress bar: [=====>    ]
    Bar,
    /// Simple counter: 42/100
    Counter,
}

/// Progress bar for visual feedback during operations.
pub struct ProgressBar {
    /// Total number of items.
    total: usize,
    /// Current progress.
    current: usize,
    /// Progress bar style.
    style: ProgressStyle,
    /// Optional message to display.
    message: Option<String>,
    /// Start time of the operation.
    start_time: Instant,
    /// Last update time (for rate limiting).
    last_update: Instant,
    /// Minimum time between updates.
    update_interval: Duration,
    /// Whether the progress bar is enabled.
    enabled: bool,
}

impl ProgressBar {
    /// Create a new progress bar.
    ///
    /// Rendering is automatically disabled when stdout is not a terminal.
    pub fn new(total: usize, style: ProgressStyle) -> Self {
        Self {
            total,
            current: 0,
            style,
            message: None,
            start_time: Instant::now(),
            last_update: Instant::now(),
            update_interval: Duration::from_millis(100),
            enabled: Self::is_terminal(),
        }
    }

    /// Create a disabled progress bar (no output).
    pub fn disabled() -> Self {
        let mut pb = Self::new(0, ProgressStyle::Counter);
        pb.enabled = false;
        pb
    }

    /// Check if stdout is a terminal.
    fn is_terminal() -> bool {
        use std::io::IsTerminal;
        io::stdout().is_terminal()
    }

    /// Set the message to display with the progress bar.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Update the progress bar to a specific value.
    pub fn update(&mut self, current: usize) {
        self.current = current;

        // Rate limit updates
        if self.last_update.elapsed() < self.update_interval && current < self.total {
            return;
        }

        self.last_update = Instant::now();
        self.render();
    }

    /// Increment the progress bar by one.
    pub fn increment(&mut self) {
        self.update(self.current + 1);
    }

    /// Mark the progress bar as finished.
    pub fn finish(&mut self) {
        if self.enabled {
            self.current = self.total;
            self.render();
            println!(); // New line
        }
    }

    /// Render the progress bar.
    fn render(&mut self) {
        if !self.enabled {
            return;
        }

        let output = match self.style {
            ProgressStyle::Bar => self.render_bar(),
            ProgressStyle::Counter => self.render_counter(),
        };

        print!("\r{output}");
        io::stdout().flush().ok();
    }

    /// Render a progress bar.
    fn render_bar(&self) -> String {
        let width = 40;
        let percent = if self.total > 0 {
            (self.current as f64 / self.total as f64 * 100.0) as usize
        } else {
            0
        };

        let filled = (width * self.current) / self.total.max(1);
        let empty = width - filled;

        let bar = format!(
            "[{}{}]",
            "=".repeat(filled.saturating_sub(1)) + if filled > 0 { ">" } else { "" },
            " ".repeat(empty)
        );

        let counter = format!("{}/{}", self.current, self.total);
        let elapsed = format_duration(self.start_time.elapsed());

        let mut parts = vec![bar, format!("{percent}%"), counter, elapsed];

        if let Some(ref msg) = self.message {
            parts.insert(0, msg.clone());
        }

        parts.join(" ")
    }

    /// Render a simple counter.
    fn render_counter(&self) -> String {
        let counter = format!("{}/{}", self.current, self.total);
        let elapsed = format_duration(self.start_time.elapsed());

        let mut parts = vec![counter, elapsed];

        if let Some(ref msg) = self.message {
            parts.insert(0, msg.clone());
        }

        parts.join(" ")
    }

    /// Get the current progress percentage.
    pub fn percent(&self) -> f64 {
        if self.total > 0 {
            (self.current as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Get the elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Format a duration as a human-readable string.
fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}
