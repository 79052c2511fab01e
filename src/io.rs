//! File input/output.

pub mod matrix;
pub mod utils;
pub mod vti;

use indicatif::{ProgressBar, ProgressStyle};

/// How to handle existing output files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverwriteMode {
    Always,
    Never,
}

/// How much to report about ongoing work.
#[derive(Clone)]
pub enum Verbosity {
    Quiet,
    Messages,
    Progress(ProgressStyle),
}

impl Verbosity {
    /// Whether non-critical status messages should be printed.
    pub fn print_messages(&self) -> bool {
        matches!(self, Self::Messages)
    }

    /// Creates a progress bar of the given length, which is hidden
    /// unless progress reporting is enabled.
    pub fn create_progress_bar(&self, size: usize) -> ProgressBar {
        match self {
            Self::Progress(style) => ProgressBar::new(size as u64).with_style(style.clone()),
            _ => ProgressBar::hidden(),
        }
    }
}
