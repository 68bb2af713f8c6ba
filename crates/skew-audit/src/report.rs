//! Per-family alignment report and check assembly.

use std::fmt;

use serde::Serialize;
use skew_core::config::AuditConfig;
use skew_core::module::ResolvedModule;
use skew_core::resolution::CallerIndex;
use skew_util::errors::SkewResult;

use crate::classify::Classifier;
use crate::diagnostics::DiagnosticLog;
use crate::family::Family;
use crate::verify::verify;

/// The dominant version found for each family, absent when no modules of
/// that family were present.
///
/// Invariant: a present version equals the version of the first module
/// observed in that family's group, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentReport {
    pub pekko: Option<String>,
    #[serde(rename = "pekko-http")]
    pub pekko_http: Option<String>,
    #[serde(rename = "pekko-connectors")]
    pub pekko_connectors: Option<String>,
}

impl AlignmentReport {
    pub fn is_empty(&self) -> bool {
        self.pekko.is_none() && self.pekko_http.is_none() && self.pekko_connectors.is_none()
    }

    /// The version slot for a family.
    pub fn version(&self, family: Family) -> Option<&str> {
        match family {
            Family::Pekko => self.pekko.as_deref(),
            Family::PekkoHttp => self.pekko_http.as_deref(),
            Family::PekkoConnectors => self.pekko_connectors.as_deref(),
            Family::Unclassified => None,
        }
    }
}

impl fmt::Display for AlignmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No suite modules detected.");
        }
        for family in Family::CHECK_ORDER {
            if let Some(version) = self.version(family) {
                writeln!(f, "  {}: {version}", family.label())?;
            }
        }
        Ok(())
    }
}

/// Run the full alignment check on a flat list of resolved modules.
///
/// Modules are partitioned into families, then each family is verified in
/// the fixed order of [`Family::CHECK_ORDER`]. A family's fatal mismatch
/// propagates immediately; later families are then never evaluated and no
/// report is produced. Diagnostics accumulate into `log` in scan order and
/// survive a fatal outcome.
pub fn run_check(
    modules: &[ResolvedModule],
    callers: &CallerIndex,
    config: &AuditConfig,
    log: &mut DiagnosticLog,
) -> SkewResult<AlignmentReport> {
    let classifier = Classifier::new(config.organization.clone(), config.suffix_len);
    let groups = classifier.partition(modules);

    let mut report = AlignmentReport::default();
    for family in Family::CHECK_ORDER {
        let version = verify(
            family,
            groups.group(family),
            callers,
            config.fail_on_mismatch,
            log,
        )?;
        match family {
            Family::Pekko => report.pekko = version,
            Family::PekkoHttp => report.pekko_http = version,
            Family::PekkoConnectors => report.pekko_connectors = version,
            Family::Unclassified => {}
        }
    }
    Ok(report)
}
