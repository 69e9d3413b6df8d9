use crate::error::{CompileError, Diagnostics, Result};
use crate::scan::{scan, Scan};
use crate::{setter, validate};
use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

/// Output prefix used when none is given.
pub const DEFAULT_OUT: &str = "PRSice";

/// Ancestry adjustment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ancestry {
    Pca,
    Mds,
}

impl FromStr for Ancestry {
    type Err = String;

    /// Case-insensitive `PCA` or `MDS`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pca") {
            Ok(Ancestry::Pca)
        } else if s.eq_ignore_ascii_case("mds") {
            Ok(Ancestry::Mds)
        } else {
            Err(s.to_string())
        }
    }
}

impl fmt::Display for Ancestry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ancestry::Pca => write!(f, "PCA"),
            Ancestry::Mds => write!(f, "MDS"),
        }
    }
}

/// Column selectors for the base files. Header names, or 0-based indices
/// when `index` is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Columns {
    pub chr: String,
    pub a1: String,
    pub a2: String,
    pub stat: String,
    pub snp: String,
    pub bp: String,
    pub se: String,
    pub index: bool,
}

/// P-value threshold sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct Thresholds {
    /// First threshold, `0 <= lower < 1`.
    pub lower: f64,
    /// Last threshold, `0 < upper <= 1`.
    pub upper: f64,
    /// Step between thresholds, `0 < interval <= 1`.
    pub interval: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            lower: 0.0001,
            upper: 0.5,
            interval: 0.00005,
        }
    }
}

/// Clumping parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Clumping {
    pub p_value: f64,
    /// A value of 0 disables clumping.
    pub r2: f64,
    /// Window size in base pairs.
    pub window_bp: u64,
}

impl Default for Clumping {
    fn default() -> Self {
        Self {
            p_value: 1.0,
            r2: 0.1,
            window_bp: 250_000,
        }
    }
}

/// Compiled run configuration.
///
/// Produced once by [`compile`] and read-only afterwards: the fields are only
/// writable inside the crate, while the setter and validator fill them in.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub(crate) base: Vec<String>,
    pub(crate) target: Vec<String>,
    pub(crate) pheno_files: Vec<String>,
    pub(crate) covar_headers: Vec<String>,
    pub(crate) covar_file: String,
    pub(crate) ancestry: Option<Ancestry>,
    pub(crate) ld_prefix: String,
    pub(crate) pvalue: String,
    pub(crate) threads: usize,
    pub(crate) thresholds: Thresholds,
    pub(crate) bed_files: Vec<String>,
    pub(crate) gtf: String,
    pub(crate) msigdb: String,
    pub(crate) gen_bed: bool,
    pub(crate) proxy: Option<f64>,
    pub(crate) clumping: Clumping,
    pub(crate) columns: Columns,
    pub(crate) binary_target: Vec<bool>,
    pub(crate) beta: Vec<bool>,
    pub(crate) barchart_levels: Vec<f64>,
    pub(crate) no_regression: bool,
    pub(crate) fastscore: bool,
    pub(crate) out: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: Vec::new(),
            target: Vec::new(),
            pheno_files: Vec::new(),
            covar_headers: Vec::new(),
            covar_file: String::new(),
            ancestry: None,
            ld_prefix: String::new(),
            pvalue: String::new(),
            threads: 1,
            thresholds: Thresholds::default(),
            bed_files: Vec::new(),
            gtf: String::new(),
            msigdb: String::new(),
            gen_bed: false,
            proxy: None,
            clumping: Clumping::default(),
            columns: Columns::default(),
            binary_target: Vec::new(),
            beta: Vec::new(),
            barchart_levels: Vec::new(),
            no_regression: false,
            fastscore: false,
            out: DEFAULT_OUT.to_string(),
        }
    }
}

impl Config {
    pub fn base(&self) -> &[String] {
        &self.base
    }

    pub fn target(&self) -> &[String] {
        &self.target
    }

    pub fn pheno_files(&self) -> &[String] {
        &self.pheno_files
    }

    pub fn covar_headers(&self) -> &[String] {
        &self.covar_headers
    }

    pub fn covar_file(&self) -> &str {
        &self.covar_file
    }

    pub fn ancestry(&self) -> Option<Ancestry> {
        self.ancestry
    }

    pub fn ld_prefix(&self) -> &str {
        &self.ld_prefix
    }

    /// P-value column selector.
    pub fn pvalue(&self) -> &str {
        &self.pvalue
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn bed_files(&self) -> &[String] {
        &self.bed_files
    }

    pub fn gtf(&self) -> &str {
        &self.gtf
    }

    pub fn msigdb(&self) -> &str {
        &self.msigdb
    }

    /// Whether generating the gene bed file was requested, regardless of
    /// whether it can be honoured.
    pub fn gen_bed(&self) -> bool {
        self.gen_bed
    }

    /// True only when a gene bed file can actually be generated, i.e. it was
    /// requested and a gtf file is available.
    pub fn generates_bed(&self) -> bool {
        self.gen_bed && !self.gtf.is_empty()
    }

    pub fn proxy(&self) -> Option<f64> {
        self.proxy
    }

    pub fn clumping(&self) -> &Clumping {
        &self.clumping
    }

    /// False when clumping was disabled with an R2 of 0.
    pub fn clumps(&self) -> bool {
        self.clumping.r2 > 0.0
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// One flag per target file.
    pub fn binary_target(&self) -> &[bool] {
        &self.binary_target
    }

    /// One flag per base file.
    pub fn beta(&self) -> &[bool] {
        &self.beta
    }

    pub fn barchart_levels(&self) -> &[f64] {
        &self.barchart_levels
    }

    pub fn no_regression(&self) -> bool {
        self.no_regression
    }

    pub fn fastscore(&self) -> bool {
        self.fastscore
    }

    pub fn out(&self) -> &str {
        &self.out
    }
}

/// Successful end states of a compilation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Usage was requested. Holds the usage text; nothing should run.
    Help(String),
    /// The configuration is valid.
    Ready {
        config: Config,
        advisories: Vec<crate::error::Advisory>,
    },
}

/// Compiles command-line arguments (without the program name) into a
/// [`Config`].
///
/// Scanning failures abort at once. Everything else the setter or the
/// validator finds is collected and reported together in
/// [`CompileError::Invalid`].
///
/// # Example
///
/// ```rust, ignore
/// use prsice::{compile, Outcome};
///
/// let outcome = compile(["-b", "base.assoc", "-t", "target", "--A1", "A1", "-p", "P"])?;
/// if let Outcome::Ready { config, .. } = outcome {
///     assert_eq!(config.binary_target(), &[true]);
/// }
/// ```
pub fn compile<I, T>(args: I) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let tokens = match scan(args)? {
        Scan::Help(usage) => return Ok(Outcome::Help(usage)),
        Scan::Tokens(tokens) => tokens,
    };

    let mut config = Config::default();
    let mut diagnostics = Diagnostics::new();
    for token in &tokens {
        setter::apply(&mut config, token, &mut diagnostics);
    }
    validate::finish(&mut config, &mut diagnostics);

    let advisories = diagnostics.finish().map_err(CompileError::Invalid)?;
    log::debug!("compiled {} tokens into {:?}", tokens.len(), config);
    Ok(Outcome::Ready { config, advisories })
}
