//! Writes scanned tokens into the configuration.
//!
//! Each token is coerced to the type of its field and range-checked on the
//! spot. Problems go to [`Diagnostics`]; a rejected value never overwrites
//! what the field held before.

use crate::coerce::{parse_bool, parse_list, parse_number, split_list, CoerceError};
use crate::config::{Ancestry, Config};
use crate::error::{Advisory, Diagnostics, ValidationError};
use crate::scan::Token;
use crate::schema::Field;
use std::ops::{Bound, RangeBounds};
use std::str::FromStr;

/// Applies one scanned token to `config`.
pub fn apply(config: &mut Config, token: &Token, diag: &mut Diagnostics) {
    let raw = token.raw();
    match token.field {
        Field::Base => extend_files(&mut config.base, raw, diag, ValidationError::EmptyBaseList),
        Field::Target => extend_files(
            &mut config.target,
            raw,
            diag,
            ValidationError::EmptyTargetList,
        ),
        Field::PhenoFile => extend_files(
            &mut config.pheno_files,
            raw,
            diag,
            ValidationError::EmptyPhenoList,
        ),
        Field::CovarHeader => config.covar_headers.extend(split_list(raw)),
        Field::Bed => config.bed_files.extend(split_list(raw)),

        Field::CovarFile => config.covar_file = raw.to_string(),
        Field::Ld => config.ld_prefix = raw.to_string(),
        Field::Pvalue => config.pvalue = raw.to_string(),
        Field::Gtf => config.gtf = raw.to_string(),
        Field::Msigdb => config.msigdb = raw.to_string(),
        Field::Out => config.out = raw.to_string(),
        Field::Chr => config.columns.chr = raw.to_string(),
        Field::A1 => config.columns.a1 = raw.to_string(),
        Field::A2 => config.columns.a2 = raw.to_string(),
        Field::Stat => config.columns.stat = raw.to_string(),
        Field::Snp => config.columns.snp = raw.to_string(),
        Field::Bp => config.columns.bp = raw.to_string(),
        Field::Se => config.columns.se = raw.to_string(),

        Field::Index => config.columns.index = true,
        Field::GenBed => config.gen_bed = true,
        Field::Fastscore => config.fastscore = true,
        Field::NoRegression => config.no_regression = true,

        Field::Ancestry => match raw.parse::<Ancestry>() {
            Ok(method) => {
                config.ancestry = Some(method);
                diag.advise(Advisory::AncestryUnimplemented);
            }
            Err(value) => diag.error(ValidationError::UnknownAncestry(value)),
        },

        Field::Thread => set_threads(config, raw, diag),

        Field::Lower => {
            let check = ValidationError::LowerOutOfRange;
            if let Some(v) = ranged(Field::Lower, raw, 0.0..1.0, check, diag) {
                config.thresholds.lower = v;
            }
        }
        Field::Upper => {
            let check = ValidationError::UpperOutOfRange;
            if let Some(v) = ranged(Field::Upper, raw, ABOVE_ZERO_TO_ONE, check, diag) {
                config.thresholds.upper = v;
            }
        }
        Field::Interval => {
            let check = ValidationError::IntervalOutOfRange;
            if let Some(v) = ranged(Field::Interval, raw, ABOVE_ZERO_TO_ONE, check, diag) {
                config.thresholds.interval = v;
            }
        }
        Field::ClumpP => {
            let check = ValidationError::ClumpPOutOfRange;
            if let Some(v) = ranged(Field::ClumpP, raw, 0.0..=1.0, check, diag) {
                config.clumping.p_value = v;
            }
        }
        Field::ClumpR2 => {
            let check = ValidationError::ClumpR2OutOfRange;
            if let Some(v) = ranged(Field::ClumpR2, raw, 0.0..=1.0, check, diag) {
                if v == 0.0 {
                    diag.advise(Advisory::ClumpingDisabled);
                }
                config.clumping.r2 = v;
            }
        }
        Field::ClumpKb => {
            let check = ValidationError::ClumpKbOutOfRange;
            if let Some(kb) = ranged(Field::ClumpKb, raw, 1_i64.., check, diag) {
                config.clumping.window_bp = (kb as u64).saturating_mul(1000);
            }
        }
        Field::Proxy => {
            if let Some(v) = number::<f64>(Field::Proxy, raw, diag) {
                if v > 0.0 {
                    config.proxy = Some(v);
                } else {
                    diag.error(ValidationError::ProxyOutOfRange(v));
                }
            }
        }

        Field::BinaryTarget => {
            if let Some(flags) = list(Field::BinaryTarget, raw, parse_bool, diag) {
                config.binary_target.extend(flags);
            }
        }
        Field::Beta => {
            if let Some(flags) = list(Field::Beta, raw, parse_bool, diag) {
                config.beta.extend(flags);
            }
        }
        Field::BarchartLevels => {
            if let Some(levels) = list(Field::BarchartLevels, raw, parse_number::<f64>, diag) {
                config.barchart_levels.extend(levels);
            }
        }

        // Handled by the scanner before any token reaches here.
        Field::Help => {}
    }
}

/// `0 < v <= 1`
const ABOVE_ZERO_TO_ONE: (Bound<f64>, Bound<f64>) = (Bound::Excluded(0.0), Bound::Included(1.0));

/// Appends file names; an occurrence that names no file while the list is
/// still empty is an error.
fn extend_files(
    files: &mut Vec<String>,
    raw: &str,
    diag: &mut Diagnostics,
    empty: ValidationError,
) {
    files.extend(split_list(raw));
    if files.is_empty() {
        diag.error(empty);
    }
}

/// Non-positive or unreadable counts fall back to one thread; counts too
/// large to represent saturate.
fn set_threads(config: &mut Config, raw: &str, diag: &mut Diagnostics) {
    let Some(requested) = thread_count(raw) else {
        diag.advise(Advisory::ThreadFloor(raw.to_string()));
        config.threads = 1;
        return;
    };

    let available = num_cpus::get();
    if requested > available {
        diag.advise(Advisory::ThreadsExceedCpus {
            requested,
            available,
        });
    }
    config.threads = requested;
}

/// Positive thread count, `usize::MAX` on overflow.
fn thread_count(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match parse_number::<usize>(digits) {
        Ok(0) => None,
        Ok(n) => Some(n),
        Err(_) => Some(usize::MAX),
    }
}

fn number<T: FromStr>(field: Field, raw: &str, diag: &mut Diagnostics) -> Option<T> {
    match parse_number::<T>(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            record(field, err, diag);
            None
        }
    }
}

/// Parses a number and checks it lies in `range`, recording `out_of_range`
/// otherwise.
fn ranged<T, R, E>(
    field: Field,
    raw: &str,
    range: R,
    out_of_range: E,
    diag: &mut Diagnostics,
) -> Option<T>
where
    T: FromStr + PartialOrd + Copy,
    R: RangeBounds<T>,
    E: FnOnce(T) -> ValidationError,
{
    let value = number::<T>(field, raw, diag)?;
    if range.contains(&value) {
        Some(value)
    } else {
        diag.error(out_of_range(value));
        None
    }
}

fn list<T, F>(field: Field, raw: &str, parse: F, diag: &mut Diagnostics) -> Option<Vec<T>>
where
    F: Fn(&str) -> Result<T, CoerceError>,
{
    match parse_list(raw, parse) {
        Ok(values) => Some(values),
        Err(err) => {
            record(field, err, diag);
            None
        }
    }
}

fn record(field: Field, err: CoerceError, diag: &mut Diagnostics) {
    let label = field.label();
    let error = match (field, err) {
        (Field::Proxy, CoerceError::NotNumeric(value)) => ValidationError::ProxyNotNumeric(value),
        (Field::BarchartLevels, CoerceError::NotNumeric(value)) => {
            ValidationError::BarchartNotNumeric(value)
        }
        (_, CoerceError::NotNumeric(value)) => ValidationError::NotNumeric { label, value },
        (_, CoerceError::NotBoolean(value)) => ValidationError::NotBoolean { label, value },
    };
    diag.error(error);
}
