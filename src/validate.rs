//! Cross-field checks, run once after every token has been applied.

use crate::config::{Config, DEFAULT_OUT};
use crate::error::{Advisory, Diagnostics, ValidationError};

/// Checks relationships between fields and fills in list defaults.
///
/// Errors are appended to `diag`; corrections that do not invalidate the
/// configuration are applied in place and reported as advisories.
pub fn finish(config: &mut Config, diag: &mut Diagnostics) {
    if config.base.is_empty() {
        diag.error(ValidationError::NoBase);
    }
    if config.target.is_empty() {
        diag.error(ValidationError::NoTarget);
    }

    // Binary phenotypes unless told otherwise.
    if config.binary_target.is_empty() {
        config.binary_target = vec![true; config.target.len()];
    } else if config.binary_target.len() != config.target.len() {
        diag.error(ValidationError::BinaryTargetLength {
            expected: config.target.len(),
            found: config.binary_target.len(),
        });
    }

    // Odds ratios unless told otherwise.
    if config.beta.is_empty() {
        config.beta = vec![false; config.base.len()];
    } else if config.beta.len() != config.base.len() {
        diag.error(ValidationError::BetaLength {
            expected: config.base.len(),
            found: config.beta.len(),
        });
    }

    if !config.msigdb.is_empty() && config.gtf.is_empty() {
        diag.error(ValidationError::MsigdbWithoutGtf);
    }

    // Left set; `Config::generates_bed` reports it as unreachable.
    if config.gen_bed && config.gtf.is_empty() {
        diag.advise(Advisory::GenBedWithoutGtf);
    }

    if config.out.is_empty() {
        diag.advise(Advisory::DefaultOutputPrefix(DEFAULT_OUT));
        config.out = DEFAULT_OUT.to_string();
    }

    if config.no_regression && !config.fastscore {
        diag.advise(Advisory::FastscoreForced);
        config.fastscore = true;
    }
}
