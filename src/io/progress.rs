//! Terminal progress display for tile and block batches

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over the items of one batch
///
/// Does nothing until [`ProgressManager::initialize`] is called, so a quiet run can
/// hold a manager without drawing anything.
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create an idle progress manager
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Start a bar for `total` items labelled with `label`
    pub fn initialize(&mut self, total: u64, label: &str) {
        let bar = ProgressBar::new(total);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.bar = Some(bar);
    }

    /// Whether a bar is currently active
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Count one item as done and show its name
    pub fn advance(&self, item: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(item.to_string());
            bar.inc(1);
        }
    }

    /// Run `f` with the bar hidden so log lines do not tear it
    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self.bar {
            Some(ref bar) => bar.suspend(f),
            None => f(),
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
