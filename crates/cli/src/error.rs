//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define the process exit contract: 0 on success, 1 on any failure.
//!
//! Invariants:
//! - Every failure mode (network error, timeout, non-2xx response,
//!   configuration error) exits 1; the typed error distinguishes them in
//!   the diagnostic output, not the exit status.

/// Exit codes for kibana-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the dashboard was created (or the dry run completed).
    Success = 0,

    /// Publish failed - any network, HTTP, or configuration failure.
    PublishFailed = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
