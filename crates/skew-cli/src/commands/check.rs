//! Handler for `skew check`.

use std::path::Path;

use skew_audit::diagnostics::DiagnosticLog;
use skew_audit::report::run_check;
use skew_core::config::Config;
use skew_core::resolution::ResolutionReport;
use skew_util::errors::{SkewError, SkewResult};

use crate::cli::Format;

pub fn exec(
    input: &Path,
    fail_on_mismatch: bool,
    config_path: Option<&Path>,
    format: Format,
    verbose: bool,
) -> SkewResult<()> {
    let default_config_path = input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("skew.toml");
    let mut config = Config::load(config_path.unwrap_or(&default_config_path))?;
    if fail_on_mismatch {
        config.audit.fail_on_mismatch = true;
    }

    let report = ResolutionReport::from_path(input)?;
    let callers = report.caller_index();
    if verbose {
        skew_util::status::status_info(
            "Loaded",
            &format!(
                "{} modules, {} caller records",
                report.modules.len(),
                callers.len()
            ),
        );
    }
    skew_util::status::status("Checking", &input.display().to_string());

    let mut log = DiagnosticLog::new();
    let outcome = run_check(&report.modules, &callers, &config.audit, &mut log);

    // Diagnostics go out in scan order whether or not the check was fatal.
    for d in log.entries() {
        eprintln!("{}: {}", d.severity, d.message);
    }

    let alignment = outcome?;

    match format {
        Format::Text => {
            if alignment.is_empty() {
                println!("{alignment}");
            } else {
                println!("Suite versions:");
                print!("{alignment}");
            }
        }
        Format::Json => {
            let payload = serde_json::json!({
                "report": alignment,
                "diagnostics": log.entries(),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).map_err(|e| SkewError::Generic {
                    message: format!("Failed to serialize report: {e}"),
                })?
            );
        }
    }

    if log.is_empty() {
        skew_util::status::status("Finished", "no version skew detected");
    } else {
        skew_util::status::status_warn(
            "Finished",
            &format!("{} version mismatch(es) reported", log.len()),
        );
    }
    Ok(())
}
