//! Light CLI wrapper around the `opcode-table-compiler` project.
//! All parsing, validation and rendering logic is written there.

use std::{fs::{self, OpenOptions}, io::{stdout, Write}, process::ExitCode};

use anyhow::Context;
use clap::{Parser as ClapParser, ValueEnum};
use clap_stdin::FileOrStdin;
use opcode_table_compiler::{compile_table, render, CompilerConfig, CompilerFailure, Dialect};
use tracing::{debug, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TargetDialect {
    /// A `switch` statement returning `(opcode, error)`
    Go,

    /// A `match` expression returning `Result<opcode, UnknownMnemonic>`
    Rust,

    /// A `strcmp` chain writing through an out-parameter
    C,
}

impl From<TargetDialect> for Dialect {
    fn from(d: TargetDialect) -> Self {
        match d {
            TargetDialect::Go => Dialect::Go,
            TargetDialect::Rust => Dialect::Rust,
            TargetDialect::C => Dialect::C,
        }
    }
}

#[derive(ClapParser, Debug)]
#[command(about = "Generates mnemonic-to-opcode lookup code from an opcode specification")]
struct Args {
    /// Opcode specification file (`NAME = NUMBER` lines), or `-` to read stdin (end with ^D)
    input: FileOrStdin,

    /// Output file, or stdout if not given
    #[arg(short = 'o', long)]
    output_file: Option<String>,

    /// JSON configuration file; other options override its values
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Language of the generated code
    #[arg(short = 'd', long)]
    dialect: Option<TargetDialect>,

    /// Width of the opcode field in bits; every value must fit in it
    #[arg(short = 'w', long, value_parser = parse_width)]
    width: Option<u8>,

    /// Character replaced in specification mnemonics
    #[arg(long)]
    separator_from: Option<char>,

    /// Character it is replaced with in assembly mnemonics
    #[arg(long)]
    separator_to: Option<char>,

    /// Name of the generated lookup function
    #[arg(long)]
    function_name: Option<String>,

    /// Prefix for generated constant names
    #[arg(long)]
    constant_prefix: Option<String>,

    /// Also generate one named constant per opcode
    #[arg(long)]
    constants: bool,

    /// Also generate an opcode-to-mnemonic function
    #[arg(long)]
    reverse: bool,

    /// Print the validated table as JSON instead of generating code
    #[arg(long)]
    dump_table: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_width(s: &str) -> Result<u8, String> {
    clap_num::number_range(s, 1, 64)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // `RUST_LOG` takes precedence over `-v`
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("could not install logger: {e}");
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = build_config(&args)?;
    debug!(?config, "resolved configuration");

    // Read specification
    let filename = match &args.input.source {
        clap_stdin::Source::Stdin => "<stdin>".to_owned(),
        clap_stdin::Source::Arg(f) => f.to_owned(),
    };
    let spec = args.input.contents().context("could not read opcode specification")?;

    // Compile
    let table = match compile_table(&spec, &config) {
        Ok(t) => t,
        Err(CompilerFailure::Config(e)) => anyhow::bail!("invalid configuration: {e}"),
        Err(CompilerFailure::Compile(errors)) => {
            eprintln!("{} error(s) occurred in {filename}.\n", errors.len());
            for error in errors {
                eprintln!("{}", error.describe(&filename));
            }
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(entries = table.len(), "compiled {filename}");

    let output = if args.dump_table {
        let mut json = table.to_json().context("could not serialize opcode table")?;
        json.push('\n');
        json
    } else {
        render(&table, &config)
    };

    // Open output
    let mut output_handle: Box<dyn Write> =
        if let Some(file) = &args.output_file {
            Box::new(OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(file)
                .with_context(|| format!("could not open output file {file}"))?)
        } else {
            Box::new(stdout())
        };

    output_handle.write_all(output.as_bytes()).context("could not write output")?;
    output_handle.flush().context("could not write output")?;

    Ok(ExitCode::SUCCESS)
}

/// Layers command-line options over the configuration file, over the defaults.
fn build_config(args: &Args) -> anyhow::Result<CompilerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("could not read configuration file {path}"))?;
            CompilerConfig::from_json_str(&json).with_context(|| format!("in configuration file {path}"))?
        }
        None => CompilerConfig::default(),
    };

    if let Some(dialect) = args.dialect {
        config.dialect = dialect.into();
    }
    if let Some(width) = args.width {
        config.opcode_width_bits = width;
    }
    if let Some(from) = args.separator_from {
        config.separators.from = from;
    }
    if let Some(to) = args.separator_to {
        config.separators.to = to;
    }
    if let Some(name) = &args.function_name {
        config.function_name = name.clone();
    }
    if let Some(prefix) = &args.constant_prefix {
        config.constant_prefix = prefix.clone();
    }
    config.with_constants |= args.constants;
    config.with_reverse_lookup |= args.reverse;

    Ok(config)
}
