//! Writing the aggregated document and the build log.
//!
//! Each file is written once, as a whole buffer.

use crate::error::{AdsTxtError, ErrorContext, Result};
use crate::reports::{BuildReport, ReportFormat, ReportGenerator, TextReporter, create_reporter};
use std::io::Write;
use std::path::Path;

/// Write the aggregated document to `path`.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .map_err(|e| AdsTxtError::io(path, e))
        .context("writing aggregated output")?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Render `report` in `format`.
pub fn render_report(format: ReportFormat, report: &BuildReport<'_>) -> Result<String> {
    create_reporter(format)
        .generate(report)
        .with_context(|| format!("rendering {format} report"))
}

/// Write the text build log to `path`, creating its directory when missing.
pub fn write_log(path: &Path, report: &BuildReport<'_>) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        std::fs::create_dir_all(dir)
            .map_err(|e| AdsTxtError::io(dir, e))
            .context("creating log directory")?;
    }

    let mut file = std::fs::File::create(path)
        .map_err(|e| AdsTxtError::io(path, e))
        .context("writing build log")?;
    TextReporter::new()
        .write_report(report, &mut file)
        .map_err(|e| AdsTxtError::report(format!("writing build log {}", path.display()), e))?;
    tracing::debug!("Wrote build log {}", path.display());
    Ok(())
}

/// Echo the rendered report to stdout unless `quiet`.
pub fn print_report(content: &str, quiet: bool) -> Result<()> {
    emit_report(&mut std::io::stdout().lock(), content, quiet).context("printing report")
}

/// Reports already end with a newline; nothing is appended.
fn emit_report<W: Write>(writer: &mut W, content: &str, quiet: bool) -> std::io::Result<()> {
    if quiet {
        return Ok(());
    }
    writer.write_all(content.as_bytes())?;
    writer.flush()
}
