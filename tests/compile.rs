use indoc::indoc;
use prsice::{
    compile, Advisory, Ancestry, CompileError, Config, Outcome, ScanError, ValidationError,
};

const REQUIRED: [&str; 8] = ["-b", "base.assoc", "-t", "target", "--A1", "A1", "-p", "P"];

/// Appends `extra` to the required options.
fn args(extra: &[&str]) -> Vec<String> {
    REQUIRED
        .iter()
        .chain(extra)
        .map(|arg| arg.to_string())
        .collect()
}

/// Compiles and expects success.
fn ready(args: Vec<String>) -> (Config, Vec<Advisory>) {
    match compile(args) {
        Ok(Outcome::Ready { config, advisories }) => (config, advisories),
        Ok(Outcome::Help(_)) => panic!("unexpected help"),
        Err(err) => panic!("unexpected failure: {err}"),
    }
}

/// Compiles and expects accumulated validation errors.
fn invalid(args: Vec<String>) -> Vec<ValidationError> {
    match compile(args) {
        Err(CompileError::Invalid(log)) => log.errors().to_vec(),
        Err(err) => panic!("unexpected scan failure: {err}"),
        Ok(outcome) => panic!("unexpected success: {outcome:?}"),
    }
}

/// A full invocation lands every value in its field.
#[test]
fn compile_full_invocation() {
    let (config, advisories) = ready(args(&[
        "-b",
        "second.assoc,third.assoc",
        "-t",
        "t2",
        "--binary_target",
        "true,false",
        "--beta",
        "T F f",
        "-f",
        "pheno.txt",
        "-c",
        "PC1,PC2",
        "-C",
        "covar.txt",
        "-L",
        "ref",
        "-l",
        "0.001",
        "-u",
        "0.2",
        "-i",
        "0.001",
        "--clump_p",
        "0.5",
        "--clump_r2",
        "0.2",
        "--clump_kb",
        "100",
        "--chr",
        "CHR",
        "--A2",
        "A2",
        "--stat",
        "OR",
        "--snp",
        "SNP",
        "--bp",
        "BP",
        "--se",
        "SE",
        "--proxy",
        "0.8",
        "-B",
        "a.bed",
        "-B",
        "b.bed",
        "-g",
        "genes.gtf",
        "-m",
        "pathways.txt",
        "--gen_bed",
        "--barchart_levels",
        "0.001,0.05,0.5",
        "-T",
        "1",
        "-o",
        "height",
    ]));

    assert!(advisories.is_empty(), "{advisories:?}");
    assert_eq!(config.base(), &["base.assoc", "second.assoc", "third.assoc"]);
    assert_eq!(config.target(), &["target", "t2"]);
    assert_eq!(config.binary_target(), &[true, false]);
    assert_eq!(config.beta(), &[true, false, false]);
    assert_eq!(config.pheno_files(), &["pheno.txt"]);
    assert_eq!(config.covar_headers(), &["PC1", "PC2"]);
    assert_eq!(config.covar_file(), "covar.txt");
    assert_eq!(config.ld_prefix(), "ref");
    assert_eq!(config.pvalue(), "P");
    assert_eq!(config.thresholds().lower, 0.001);
    assert_eq!(config.thresholds().upper, 0.2);
    assert_eq!(config.thresholds().interval, 0.001);
    assert_eq!(config.clumping().p_value, 0.5);
    assert_eq!(config.clumping().r2, 0.2);
    assert_eq!(config.clumping().window_bp, 100_000);
    assert_eq!(config.columns().a1, "A1");
    assert_eq!(config.columns().stat, "OR");
    assert_eq!(config.columns().se, "SE");
    assert!(!config.columns().index);
    assert_eq!(config.proxy(), Some(0.8));
    assert_eq!(config.bed_files(), &["a.bed", "b.bed"]);
    assert!(config.generates_bed());
    assert_eq!(config.msigdb(), "pathways.txt");
    assert_eq!(config.barchart_levels(), &[0.001, 0.05, 0.5]);
    assert_eq!(config.threads(), 1);
    assert_eq!(config.out(), "height");
    assert_eq!(config.ancestry(), None);
}

/// Defaults apply when only the required options are given.
#[test]
fn compile_defaults() {
    let (config, advisories) = ready(args(&[]));
    assert!(advisories.is_empty());
    assert_eq!(config.binary_target(), &[true]);
    assert_eq!(config.beta(), &[false]);
    assert_eq!(config.out(), "PRSice");
    assert_eq!(config.threads(), 1);
    assert_eq!(config.thresholds().lower, 0.0001);
    assert_eq!(config.thresholds().upper, 0.5);
    assert_eq!(config.thresholds().interval, 0.00005);
    assert_eq!(config.clumping().window_bp, 250_000);
    assert!(config.clumps());
    assert!(!config.fastscore());
}

/// Zero arguments never reach validation.
#[test]
fn compile_no_arguments() {
    let empty: Vec<String> = Vec::new();
    let err = compile(empty).unwrap_err();
    assert!(matches!(err, CompileError::Scan(ScanError::NoArguments)));
    assert!(err.wants_usage());
}

/// Help wins over an otherwise invalid command line.
#[test]
fn compile_help() {
    match compile(["--clump_r2", "7", "--help"]).unwrap() {
        Outcome::Help(usage) => assert!(usage.contains("Usage: PRSice [Options]")),
        other => panic!("expected help, got {other:?}"),
    }
}

/// Unknown options terminate before validation, even with other problems present.
#[test]
fn compile_unknown_option() {
    let err = compile(["--clump_r2", "7", "--not_a_real_flag", "value"]).unwrap_err();
    assert!(matches!(
        err,
        CompileError::Scan(ScanError::UnknownOption { .. })
    ));
}

/// Omitted binary flags default to one `true` per target.
#[test]
fn compile_binary_target_default() {
    let (config, _) = ready(args(&["-t", "t2,t3"]));
    assert_eq!(config.binary_target(), &[true, true, true]);
}

/// Supplied binary flags must match the number of targets.
#[test]
fn compile_binary_target_length() {
    let (config, _) = ready(args(&["-t", "t2", "--binary_target", "true,false"]));
    assert_eq!(config.binary_target(), &[true, false]);

    let errors = invalid(args(&["-t", "t2,t3", "--binary_target", "true,false"]));
    assert_eq!(
        errors,
        vec![ValidationError::BinaryTargetLength {
            expected: 3,
            found: 2
        }]
    );
}

/// Supplied beta flags must match the number of base files.
#[test]
fn compile_beta_length() {
    let errors = invalid(args(&["--beta", "true,false"]));
    assert_eq!(
        errors,
        vec![ValidationError::BetaLength {
            expected: 1,
            found: 2
        }]
    );
}

/// An R2 of exactly 0 disables clumping instead of failing.
#[test]
fn compile_clump_r2_zero() {
    let (config, advisories) = ready(args(&["--clump_r2", "0"]));
    assert_eq!(advisories, vec![Advisory::ClumpingDisabled]);
    assert!(!config.clumps());

    let errors = invalid(args(&["--clump_r2", "1.5"]));
    assert_eq!(errors, vec![ValidationError::ClumpR2OutOfRange(1.5)]);
}

/// msigdb needs a gtf file.
#[test]
fn compile_msigdb_requires_gtf() {
    let errors = invalid(args(&["--msigdb", "pathways.txt"]));
    assert_eq!(errors, vec![ValidationError::MsigdbWithoutGtf]);

    let (config, _) = ready(args(&["--msigdb", "pathways.txt", "--gtf", "genes.gtf"]));
    assert_eq!(config.gtf(), "genes.gtf");
}

/// Generating a bed file without gtf is only an advisory.
#[test]
fn compile_gen_bed_without_gtf() {
    let (config, advisories) = ready(args(&["--gen_bed"]));
    assert_eq!(advisories, vec![Advisory::GenBedWithoutGtf]);
    assert!(config.gen_bed());
    assert!(!config.generates_bed());
}

/// no_regression forces fastscore.
#[test]
fn compile_no_regression_forces_fastscore() {
    let (config, advisories) = ready(args(&["--no_regression"]));
    assert!(config.no_regression());
    assert!(config.fastscore());
    assert_eq!(advisories, vec![Advisory::FastscoreForced]);

    let (_, advisories) = ready(args(&["--no_regression", "--fastscore"]));
    assert!(advisories.is_empty());
}

/// An explicitly empty output prefix falls back to the default.
#[test]
fn compile_empty_out() {
    let (config, advisories) = ready(args(&["-o", ""]));
    assert_eq!(config.out(), "PRSice");
    assert_eq!(advisories, vec![Advisory::DefaultOutputPrefix("PRSice")]);
}

/// Bad thread counts are corrected, never fatal.
#[test]
fn compile_thread_floor() {
    let (config, advisories) = ready(args(&["--thread", "-3"]));
    assert_eq!(config.threads(), 1);
    assert_eq!(advisories, vec![Advisory::ThreadFloor("-3".to_string())]);
}

/// Ancestry is accepted in any case and reported as unimplemented.
#[test]
fn compile_ancestry() {
    let (config, advisories) = ready(args(&["-a", "Pca"]));
    assert_eq!(config.ancestry(), Some(Ancestry::Pca));
    assert_eq!(advisories, vec![Advisory::AncestryUnimplemented]);
    assert_eq!(
        advisories[0].to_string(),
        "Currently we have not implement this function"
    );
}

/// Every problem of a run is reported together, in discovery order.
#[test]
fn compile_reports_every_error() {
    let err = compile([
        "--lower",
        "2",
        "--interval",
        "0",
        "--clump_p",
        "-1",
        "--proxy",
        "abc",
        "--barchart_levels",
        "0.1,high",
        "--binary_target",
        "yes,perhaps",
        "-a",
        "tsne",
        "-m",
        "pathways.txt",
    ])
    .unwrap_err();

    let CompileError::Invalid(log) = err else {
        panic!("expected validation errors, got {err:?}");
    };
    assert_eq!(log.len(), 10);
    assert_eq!(
        log.to_string(),
        indoc! {"
            Lower interval must be >= 0 and < 1.0
            Interval must be >=0 and <= 1.0
            Clumping p-values must be >=0 and <= 1.0
            ERROR: Proxy provided isn't numeric
            ERROR: None numeric barchart level
            --binary_target expects true or false, found: perhaps
            Only support PCA and MDS for the calculation of ancestry information
            There are no base file to run
            There are no target file to run
            Must provide the GTF file when only MSIGDB file is provided"}
    );
}

/// Length mismatches explain the default behaviour in their message.
#[test]
fn compile_length_messages() {
    let err = compile(args(&["-t", "t2", "--binary_target", "T", "--beta", "T,F"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        indoc! {"
            ERROR: Number of binary target doesn't match number of target file!
                   Default value only work when all target file are binary and
                   when --binary_target is not used
            ERROR: Number of beta doesn't match number of base file!
                   Default value only work when all base file are using OR and
                   when --beta is not used"}
    );
}

/// Help short-circuits even when an unknown option follows it.
#[test]
fn compile_help_before_unknown_option() {
    match compile(["--help", "--not_a_real_flag", "value"]).unwrap() {
        Outcome::Help(usage) => assert!(usage.contains("Usage: PRSice [Options]")),
        other => panic!("expected help, got {other:?}"),
    }
}

/// Compiling the same arguments twice gives equal configurations.
#[test]
fn compile_is_idempotent() {
    let argv = args(&["-t", "t2", "--clump_kb", "50", "-B", "x.bed y.bed"]);
    let (first, _) = ready(argv.clone());
    let (second, _) = ready(argv);
    assert_eq!(first, second);
}
