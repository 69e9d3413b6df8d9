//! # prsice
//!
//! Configuration compiler for the PRSice polygenic risk score tool.
//!
//! Turns the raw command-line arguments into a single, checked [`Config`], or
//! fails with every reason the input is invalid at once. The analysis itself
//! (reading base and target files, clumping, regression, output) runs
//! downstream and only ever sees a valid [`Config`].
//!
//! ## Pipeline
//!
//! 1. [`schema`]: static table of every option, its field and value kind.
//! 2. [`scan`]: argv to ordered `(field, raw value)` tokens. Unknown options
//!    and options missing their value stop here.
//! 3. [`setter`]: coerces each token into its field, range checks included.
//! 4. [`validate`]: cross-field rules and list defaults.
//!
//! Steps 3 and 4 collect their findings in [`Diagnostics`] instead of
//! stopping at the first one, so the operator sees every problem in a single
//! run.
//!
//! ## Usage
//!
//! ```bash
//! prsice -b <BASE> -t <TARGET> --A1 <COL> -p <COL> [OPTIONS]
//! ```
//!
//! ```rust, ignore
//! use prsice::{compile, CompileError, Outcome};
//!
//! match compile(["-b", "height.assoc", "-t", "cohort", "--A1", "A1", "-p", "P"]) {
//!     Ok(Outcome::Ready { config, .. }) => println!("{} target(s)", config.target().len()),
//!     Ok(Outcome::Help(usage)) => eprintln!("{usage}"),
//!     Err(CompileError::Invalid(log)) => eprintln!("{log}"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod coerce;
pub mod config;
pub mod error;
pub mod scan;
pub mod schema;
pub mod setter;
pub mod validate;

pub use config::{compile, Ancestry, Clumping, Columns, Config, Outcome, Thresholds};
pub use error::{
    Advisory, CompileError, Diagnostics, ErrorLog, Result, ScanError, ValidationError,
};
pub use schema::{usage, Field};
