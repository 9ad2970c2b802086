//! Pipeline orchestration for builds.
//!
//! Load prior → normalize and aggregate → diff → format → emit, as one linear
//! pass. Per-network problems (missing sources, bad lines, bad cert IDs) never
//! abort the pass; only writing files can fail.

mod build;
mod output;

pub use build::{BuildOutcome, run_pass, validate_config};
pub use output::{print_report, render_report, write_log, write_output};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success, possibly with warnings
    pub const SUCCESS: i32 = 0;
    /// Invalid cert IDs found while the policy gate is active
    pub const POLICY_BLOCKED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::POLICY_BLOCKED, 1);
        assert_eq!(exit_codes::ERROR, 2);
    }
}
