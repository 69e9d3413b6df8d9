use std::fmt;
use thiserror::Error;

/// Terminal failure while scanning the command line. Scanning stops at the
/// first one and validation never runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Invoked without any argument.
    #[error("Please provide the required parameters")]
    NoArguments,
    /// A flag (or stray value) the schema does not know.
    #[error("Undefined operator: {option}, please use --help for more information!")]
    UnknownOption { option: String },
    /// An option that takes a value was given none.
    #[error("Option {option} requires a value")]
    MissingValue { option: String },
    /// Any other command-line parser failure.
    #[error("Malformed command line: {0}")]
    Malformed(String),
}

/// Accumulated, non-terminal problem with the supplied options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("--{label} provided isn't numeric: {value}")]
    NotNumeric { label: &'static str, value: String },
    #[error("--{label} expects true or false, found: {value}")]
    NotBoolean { label: &'static str, value: String },
    #[error("You must provide at least one valid base file name")]
    EmptyBaseList,
    #[error("You must provide at least one valid target file name")]
    EmptyTargetList,
    #[error("No parameter is given for phenotype file")]
    EmptyPhenoList,
    #[error("Only support PCA and MDS for the calculation of ancestry information")]
    UnknownAncestry(String),
    #[error("Lower interval must be >= 0 and < 1.0")]
    LowerOutOfRange(f64),
    #[error("Upper interval must be > 0 and <= 1.0")]
    UpperOutOfRange(f64),
    #[error("Interval must be >=0 and <= 1.0")]
    IntervalOutOfRange(f64),
    #[error("Clumping p-values must be >=0 and <= 1.0")]
    ClumpPOutOfRange(f64),
    #[error("Clumping R2 must be >=0 and <= 1.0")]
    ClumpR2OutOfRange(f64),
    #[error("Clumping window size must be larger than 0kb")]
    ClumpKbOutOfRange(i64),
    #[error("ERROR: Proxy must be bigger than 0.0")]
    ProxyOutOfRange(f64),
    #[error("ERROR: Proxy provided isn't numeric")]
    ProxyNotNumeric(String),
    #[error("ERROR: None numeric barchart level")]
    BarchartNotNumeric(String),
    #[error("There are no base file to run")]
    NoBase,
    #[error("There are no target file to run")]
    NoTarget,
    #[error(
        "ERROR: Number of binary target doesn't match number of target file!\n       \
         Default value only work when all target file are binary and\n       \
         when --binary_target is not used"
    )]
    BinaryTargetLength { expected: usize, found: usize },
    #[error(
        "ERROR: Number of beta doesn't match number of base file!\n       \
         Default value only work when all base file are using OR and\n       \
         when --beta is not used"
    )]
    BetaLength { expected: usize, found: usize },
    #[error("Must provide the GTF file when only MSIGDB file is provided")]
    MsigdbWithoutGtf,
}

/// Non-fatal correction applied to the configuration. Logged, never fails
/// a compilation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Advisory {
    #[error("Number of thread cannot be less than 1\nWill set to 1 instead")]
    ThreadFloor(String),
    #[error("Number of thread ({requested}) exceeds the {available} logical CPUs available")]
    ThreadsExceedCpus { requested: usize, available: usize },
    #[error("WARNING: As clumping R2==0, no clumping will be performed")]
    ClumpingDisabled,
    #[error("Currently we have not implement this function")]
    AncestryUnimplemented,
    #[error("ERROR: Cannot generate gene bed file without given the gtf file!\n       Will not generate the gene bed file")]
    GenBedWithoutGtf,
    #[error("WARNING: Output prefix is empty, will set it to {0}")]
    DefaultOutputPrefix(&'static str),
    #[error(
        "WARNING: To limit the amount of output,\n         \
         no-regress can only be used with\n         \
         fastscore. Will use fastscore"
    )]
    FastscoreForced,
}

/// Ordered log of every validation error found in one compilation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorLog(Vec<ValidationError>);

impl ErrorLog {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, error) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Errors and advisories gathered while setting fields and validating.
///
/// Passed by `&mut` through the setter and the validator; discovery order is
/// preserved in both lists.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<ValidationError>,
    advisories: Vec<Advisory>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error; compilation will fail once scanning and validation
    /// are done.
    pub fn error(&mut self, error: ValidationError) {
        log::debug!("recorded error: {error}");
        self.errors.push(error);
    }

    /// Records an advisory and reports it to the operator right away.
    pub fn advise(&mut self, advisory: Advisory) {
        log::warn!("{advisory}");
        self.advisories.push(advisory);
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Splits into the error log (if any error was recorded) and the
    /// advisories.
    pub fn finish(self) -> std::result::Result<Vec<Advisory>, ErrorLog> {
        if self.errors.is_empty() {
            Ok(self.advisories)
        } else {
            Err(ErrorLog(self.errors))
        }
    }
}

/// Error type for a whole compilation.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Terminal command-line failure.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// One or more accumulated validation errors.
    #[error("{0}")]
    Invalid(ErrorLog),
}

impl CompileError {
    /// True for failures the operator should see usage text alongside.
    pub fn wants_usage(&self) -> bool {
        matches!(self, CompileError::Scan(_))
    }
}

/// Result alias for compilations.
pub type Result<T> = std::result::Result<T, CompileError>;
