//! Command-line scanner.
//!
//! Runs the clap parser built from the option table and flattens its matches
//! back into the order the options appeared on the command line.

use crate::error::ScanError;
use crate::schema::{self, Arity, Field, OPTIONS};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::parser::ValueSource;
use clap::ArgMatches;
use std::ffi::OsString;

/// A recognised option and its raw value (`None` for flags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub field: Field,
    pub value: Option<String>,
}

impl Token {
    /// Raw value, empty for flags.
    pub fn raw(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

/// Result of a successful scan.
#[derive(Debug, Clone, PartialEq)]
pub enum Scan {
    /// Help was requested; carries the usage text.
    Help(String),
    /// Options in command-line order.
    Tokens(Vec<Token>),
}

/// Scans arguments (without the program name) against the option table.
///
/// # Errors
///
/// Returns [`ScanError::NoArguments`] for an empty argument list and stops at
/// the first unknown option or option missing its value.
pub fn scan<I, T>(args: I) -> Result<Scan, ScanError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = args.into_iter().map(Into::into).collect::<Vec<OsString>>();
    if args.is_empty() {
        return Err(ScanError::NoArguments);
    }

    let matches = match parse(&args) {
        Ok(matches) => matches,
        Err(err) if help_before_failure(&args) => {
            log::debug!("help requested ahead of {:?}", err.kind());
            return Ok(Scan::Help(schema::usage()));
        }
        Err(err) => return Err(scan_error(err)),
    };

    if matches.get_flag(Field::Help.label()) {
        return Ok(Scan::Help(schema::usage()));
    }

    let mut positioned = Vec::new();
    for spec in OPTIONS.iter() {
        if matches.value_source(spec.long) != Some(ValueSource::CommandLine) {
            continue;
        }
        match spec.kind.arity() {
            Arity::None => {
                let idx = matches.index_of(spec.long).unwrap_or_default();
                positioned.push((
                    idx,
                    Token {
                        field: spec.field,
                        value: None,
                    },
                ));
            }
            Arity::Required => positioned.extend(valued_tokens(&matches, spec.long, spec.field)),
        }
    }

    positioned.sort_by_key(|(idx, _)| *idx);
    let tokens = positioned
        .into_iter()
        .map(|(_, token)| token)
        .collect::<Vec<_>>();
    log::debug!("scanned {} options", tokens.len());
    Ok(Scan::Tokens(tokens))
}

fn parse(args: &[OsString]) -> Result<ArgMatches, clap::Error> {
    let argv = std::iter::once(OsString::from("PRSice")).chain(args.iter().cloned());
    schema::command().try_get_matches_from(argv)
}

/// Whether a help option is reached before the parse failure.
///
/// Scanning stops at help, so anything after it is never looked at. Each
/// help spelling is tried as the end of the command line: the prefix must
/// parse on its own and treat that word as help rather than as the value
/// of the option before it.
fn help_before_failure(args: &[OsString]) -> bool {
    args.iter()
        .enumerate()
        .filter(|(_, arg)| HELP_SPELLINGS.iter().any(|help| arg.as_os_str() == *help))
        .any(|(idx, _)| {
            parse(&args[..=idx])
                .map(|matches| matches.get_flag(Field::Help.label()))
                .unwrap_or(false)
        })
}

const HELP_SPELLINGS: [&str; 3] = ["-h", "-?", "--help"];

/// One token per occurrence of a valued option, paired with its position.
fn valued_tokens(matches: &ArgMatches, id: &str, field: Field) -> Vec<(usize, Token)> {
    let (Some(values), Some(indices)) = (matches.get_many::<String>(id), matches.indices_of(id))
    else {
        return Vec::new();
    };

    indices
        .zip(values)
        .map(|(idx, value)| {
            (
                idx,
                Token {
                    field,
                    value: Some(value.clone()),
                },
            )
        })
        .collect()
}

/// Maps a clap failure onto the scanner's terminal errors.
fn scan_error(err: clap::Error) -> ScanError {
    let offending = || match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        _ => err.to_string().trim().to_string(),
    };

    match err.kind() {
        ErrorKind::UnknownArgument => ScanError::UnknownOption { option: offending() },
        ErrorKind::InvalidValue
        | ErrorKind::NoEquals
        | ErrorKind::TooFewValues
        | ErrorKind::WrongNumberOfValues => ScanError::MissingValue {
            option: offending(),
        },
        _ => ScanError::Malformed(err.to_string().trim().to_string()),
    }
}
