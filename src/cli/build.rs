//! Build and check command handlers.

use crate::aggregate::FsSources;
use crate::config::AppConfig;
use crate::pipeline::{
    BuildOutcome, exit_codes, print_report, render_report, run_pass, validate_config, write_log,
    write_output,
};
use anyhow::{Context, Result};
use chrono::Utc;

/// Run the build command, returning the desired exit code.
///
/// Writes the aggregated file and the build log, echoes the report, then
/// applies the invalid-cert policy gate. The gate never prevents the writes.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_build(config: &AppConfig) -> Result<i32> {
    validate_config(config)?;

    let outcome = run_pass(config, &FsSources::new(), Utc::now(), true);

    write_output(&outcome.metadata.output_path, &outcome.document())
        .context("failed to write aggregated output")?;

    let log_path = config.log_path();
    write_log(&log_path, &outcome.report()).context("failed to write build log")?;
    if !config.behavior.quiet {
        tracing::info!("Build log written to {}", log_path.display());
    }

    echo_report(config, &outcome)?;
    Ok(determine_exit_code(config, &outcome))
}

/// Run the check command: same pass, nothing written.
pub fn run_check(config: &AppConfig) -> Result<i32> {
    validate_config(config)?;

    let outcome = run_pass(config, &FsSources::new(), Utc::now(), false);

    echo_report(config, &outcome)?;
    Ok(determine_exit_code(config, &outcome))
}

/// Print the report in the configured format.
fn echo_report(config: &AppConfig, outcome: &BuildOutcome) -> Result<()> {
    let rendered = render_report(config.output.report_format, &outcome.report())
        .context("failed to render report")?;
    print_report(&rendered, config.behavior.quiet)?;
    Ok(())
}

/// Determine the exit code from the policy gate.
fn determine_exit_code(config: &AppConfig, outcome: &BuildOutcome) -> i32 {
    if outcome.policy_blocked(&config.behavior) {
        tracing::error!(
            "{} blocked: {} invalid cert ID(s) removed",
            config.behavior.environment,
            outcome.aggregate.invalid_certs.len()
        );
        return exit_codes::POLICY_BLOCKED;
    }
    exit_codes::SUCCESS
}
