// src/exit.rs
//! Standardized process exit codes for `scan-health`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ScanHealthExit {
    /// Report produced; no issue reached the `--fail-on` threshold.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// An upstream payload could not be ingested.
    InvalidInput = 2,
    /// Issues at or above the `--fail-on` severity were found.
    IssuesFound = 3,
}

impl ScanHealthExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for ScanHealthExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
