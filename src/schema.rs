//! Option schema: every accepted flag, what it sets and how its value reads.
//!
//! The table is the single place where external option names appear. The
//! scanner maps names to [`Field`] tags here and the rest of the pipeline
//! only ever matches on the tag.

use crate::config::Config;
use clap::{Arg, ArgAction, Command};
use indoc::indoc;

/// Configuration field an option writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Base,
    Target,
    PhenoFile,
    CovarHeader,
    CovarFile,
    Ancestry,
    Ld,
    Pvalue,
    Thread,
    Lower,
    Upper,
    Interval,
    Bed,
    Gtf,
    Msigdb,
    GenBed,
    Proxy,
    ClumpP,
    ClumpR2,
    ClumpKb,
    Chr,
    A1,
    A2,
    Stat,
    Snp,
    Bp,
    Se,
    Index,
    BinaryTarget,
    Beta,
    Fastscore,
    NoRegression,
    BarchartLevels,
    Out,
    Help,
}

/// Shape of the raw value an option expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    TextList,
    Float,
    FloatList,
    Int,
    BoolList,
    Flag,
}

/// Whether an option consumes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Required,
}

impl ValueKind {
    pub fn arity(self) -> Arity {
        match self {
            ValueKind::Flag => Arity::None,
            _ => Arity::Required,
        }
    }

    fn value_name(self) -> &'static str {
        match self {
            ValueKind::Text => "STR",
            ValueKind::TextList => "LIST",
            ValueKind::Float => "FLOAT",
            ValueKind::FloatList => "FLOATS",
            ValueKind::Int => "INT",
            ValueKind::BoolList => "BOOLS",
            ValueKind::Flag => "",
        }
    }
}

/// One row of the option table.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub field: Field,
    pub long: &'static str,
    pub short: Option<char>,
    pub short_aliases: &'static [char],
    pub kind: ValueKind,
    pub heading: &'static str,
    pub help: &'static str,
}

const REQUIRED: &str = "Required Inputs";
const OPTIONS_HEADING: &str = "Options";
const SCORING: &str = "Scoring";
const HEADERS: &str = "File Headers";
const CLUMPING: &str = "Clumping";
const SELECTIONS: &str = "Selections";
const MISC: &str = "Misc";

macro_rules! opt {
    ($field:ident, $long:literal, $short:expr, $kind:ident, $heading:expr, $help:literal) => {
        opt!($field, $long, $short, &[], $kind, $heading, $help)
    };
    ($field:ident, $long:literal, $short:expr, $aliases:expr, $kind:ident, $heading:expr, $help:literal) => {
        OptionSpec {
            field: Field::$field,
            long: $long,
            short: $short,
            short_aliases: $aliases,
            kind: ValueKind::$kind,
            heading: $heading,
            help: $help,
        }
    };
}

/// Every option the compiler accepts. Long names and short letters are
/// unique across the table.
pub static OPTIONS: [OptionSpec; 35] = [
    opt!(Base, "base", Some('b'), TextList, REQUIRED, "Base association files, comma separated. Can be repeated"),
    opt!(Target, "target", Some('t'), TextList, REQUIRED, "Plink binary file prefixes of the target files, comma separated"),
    opt!(BinaryTarget, "binary_target", None, BoolList, REQUIRED, "Whether each target phenotype is binary. Same length as --target"),
    opt!(Beta, "beta", None, BoolList, REQUIRED, "Whether each base statistic is a beta instead of an OR. Same length as --base"),
    opt!(PhenoFile, "pheno_file", Some('f'), TextList, OPTIONS_HEADING, "Phenotype file(s). If provided, the fam file of the target is ignored"),
    opt!(Ld, "ld", Some('L'), Text, OPTIONS_HEADING, "Plink binary prefix of the LD reference. Defaults to the target genotypes"),
    opt!(CovarHeader, "covar_header", Some('c'), TextList, OPTIONS_HEADING, "Covariate headers, comma separated. Defaults to every covariate in the file"),
    opt!(CovarFile, "covar_file", Some('C'), Text, OPTIONS_HEADING, "Covariate file with a header line: ID Cov1 Cov2"),
    opt!(Ancestry, "ancestry", Some('a'), Text, OPTIONS_HEADING, "Ancestry adjustment method, PCA or MDS. Not developed yet"),
    opt!(Out, "out", Some('o'), Text, OPTIONS_HEADING, "Prefix of all output"),
    opt!(Lower, "lower", Some('l'), Float, SCORING, "The starting p-value threshold"),
    opt!(Upper, "upper", Some('u'), Float, SCORING, "The final p-value threshold"),
    opt!(Interval, "interval", Some('i'), Float, SCORING, "The step size of the threshold"),
    opt!(Fastscore, "fastscore", None, Flag, SCORING, "Only score at the barchart levels instead of the full threshold sweep"),
    opt!(NoRegression, "no_regression", None, Flag, SCORING, "Skip the regression. Implies --fastscore"),
    opt!(BarchartLevels, "barchart_levels", None, FloatList, SCORING, "Thresholds used for the barchart, comma separated"),
    opt!(Chr, "chr", None, Text, HEADERS, "Column header of chromosome"),
    opt!(A1, "A1", None, Text, HEADERS, "Column header of the reference allele <Required>"),
    opt!(A2, "A2", None, Text, HEADERS, "Column header of the alternative allele"),
    opt!(Stat, "stat", None, Text, HEADERS, "Column header of the test statistic, either BETA or OR"),
    opt!(Snp, "snp", None, Text, HEADERS, "Column header of the SNP id"),
    opt!(Bp, "bp", None, Text, HEADERS, "Column header of the SNP location"),
    opt!(Se, "se", None, Text, HEADERS, "Column header of the standard error"),
    opt!(Pvalue, "pvalue", Some('p'), Text, HEADERS, "Column header of the p-value <Required>"),
    opt!(Index, "index", None, Flag, HEADERS, "Treat the column options as 0-based column indices instead of headers"),
    opt!(ClumpP, "clump_p", None, Float, CLUMPING, "The p-value threshold used for clumping"),
    opt!(ClumpR2, "clump_r2", None, Float, CLUMPING, "The R2 threshold for clumping. 0 disables clumping"),
    opt!(ClumpKb, "clump_kb", None, Int, CLUMPING, "The distance for clumping in kb"),
    opt!(Bed, "bed", Some('B'), TextList, SELECTIONS, "Bed files of selected regions. The file name is the region identifier"),
    opt!(Gtf, "gtf", Some('g'), Text, SELECTIONS, "GTF file with gene boundaries. Required when --msigdb is set"),
    opt!(Msigdb, "msigdb", Some('m'), Text, SELECTIONS, "MSIGDB file with the pathway information. Requires --gtf"),
    opt!(GenBed, "gen_bed", None, Flag, SELECTIONS, "Generate a bed file of gene regions from the gtf file"),
    opt!(Proxy, "proxy", None, Float, SELECTIONS, "R2 a clumped SNP needs with the index SNP to be represented by it"),
    opt!(Thread, "thread", Some('T'), Int, MISC, "Number of threads used"),
    opt!(Help, "help", Some('h'), &['?'], Flag, MISC, "Display this help message"),
];

impl Field {
    /// Table entry for this field.
    pub fn spec(self) -> &'static OptionSpec {
        OPTIONS
            .iter()
            .find(|spec| spec.field == self)
            .unwrap_or_else(|| unreachable!("field {self:?} has no option entry"))
    }

    /// Long option name used in messages, e.g. `clump_kb`.
    pub fn label(self) -> &'static str {
        self.spec().long
    }
}

/// Default shown next to an option in the usage text.
fn default_hint(field: Field, defaults: &Config) -> Option<String> {
    let hint = match field {
        Field::Lower => defaults.thresholds().lower.to_string(),
        Field::Upper => defaults.thresholds().upper.to_string(),
        Field::Interval => defaults.thresholds().interval.to_string(),
        Field::ClumpP => defaults.clumping().p_value.to_string(),
        Field::ClumpR2 => defaults.clumping().r2.to_string(),
        Field::ClumpKb => (defaults.clumping().window_bp / 1000).to_string(),
        Field::Thread => defaults.threads().to_string(),
        Field::Out => defaults.out().to_string(),
        _ => return None,
    };
    Some(hint)
}

fn arg(spec: &'static OptionSpec, defaults: &Config) -> Arg {
    let help = match default_hint(spec.field, defaults) {
        Some(hint) => format!("{} [default: {hint}]", spec.help),
        None => spec.help.to_string(),
    };

    let mut arg = Arg::new(spec.long)
        .long(spec.long)
        .help(help)
        .help_heading(spec.heading);

    if let Some(short) = spec.short {
        arg = arg.short(short);
    }
    if !spec.short_aliases.is_empty() {
        arg = arg.short_aliases(spec.short_aliases.iter().copied());
    }

    match spec.kind.arity() {
        Arity::None => arg.action(ArgAction::SetTrue),
        Arity::Required => arg
            .action(ArgAction::Append)
            .num_args(1)
            .value_name(spec.kind.value_name())
            .allow_hyphen_values(true),
    }
}

/// Builds the command-line parser from [`OPTIONS`].
///
/// clap's own help flag is replaced by the table's `help` entry so the
/// scanner decides what a help request means.
pub fn command() -> Command {
    let defaults = Config::default();
    Command::new("PRSice")
        .about("Polygenic risk score software")
        .override_usage("PRSice [Options]")
        .after_help(indoc! {"
            List options accept comma and/or space separated values and may be
            repeated; every occurrence is appended in command-line order.
        "})
        .disable_help_flag(true)
        .args_override_self(true)
        .args(OPTIONS.iter().map(|spec| arg(spec, &defaults)))
}

/// Usage text rendered from the option table.
pub fn usage() -> String {
    command().render_help().to_string()
}
