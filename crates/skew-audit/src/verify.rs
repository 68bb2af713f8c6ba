//! Version verification within one family.

use skew_core::module::ResolvedModule;
use skew_core::resolution::CallerIndex;
use skew_util::errors::{SkewError, SkewResult};

use crate::diagnostics::{DiagnosticLog, Severity};
use crate::family::Family;

/// Verify that every module of one family resolved to the same version.
///
/// Left-to-right fold over `modules` in input order. The first module's
/// version becomes the accepted version for the whole family; every later
/// module with a different version gets one diagnostic naming the deviation
/// and the caller chain that pulled it in. The accepted version is never
/// updated, so all comparisons stay against the first-seen version.
///
/// The scan always completes: every module is compared and every mismatch
/// reported before fatality is decided. Returns the first-seen version
/// (`None` for empty input), or [`SkewError::VersionMismatch`] when
/// `fail_on_mismatch` is set and at least one mismatch was found.
pub fn verify(
    family: Family,
    modules: &[&ResolvedModule],
    callers: &CallerIndex,
    fail_on_mismatch: bool,
    log: &mut DiagnosticLog,
) -> SkewResult<Option<String>> {
    let severity = if fail_on_mismatch {
        Severity::Error
    } else {
        Severity::Warning
    };

    let mut accepted: Option<&str> = None;
    let mut mismatches = 0usize;

    for module in modules {
        match accepted {
            None => accepted = Some(&module.version),
            Some(version) if module.version == version => {}
            Some(version) => {
                mismatches += 1;
                let chain = callers
                    .callers(&module.key())
                    .map(|c| format!("[{}]", c.join(", ")))
                    .unwrap_or_default();
                log.push(
                    severity,
                    format!(
                        "{} family: previously seen {version}, module {} has {}. \
                         Transitive dependencies from {chain}",
                        family.label(),
                        module.name,
                        module.version,
                    ),
                );
            }
        }
    }

    tracing::debug!(
        family = family.label(),
        modules = modules.len(),
        mismatches,
        "family scan complete"
    );

    if mismatches > 0 && fail_on_mismatch {
        return Err(SkewError::VersionMismatch.into());
    }
    Ok(accepted.map(str::to_string))
}
