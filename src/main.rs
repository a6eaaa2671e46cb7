// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::Config;
use crate::app_controller::Controller;

mod alignment;
mod app_config;
mod app_controller;
mod consistency;
mod errors;
mod file_utils;
mod glossary;
mod patch;
mod preprocess;
mod report;
mod segmentation;
mod terms;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl From<app_config::LogLevel> for LevelFilter {
    fn from(level: app_config::LogLevel) -> Self {
        match level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check terminology consistency between an English text and its Chinese translation
    Check(CheckArgs),

    /// Generate shell completions for termguard
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Path to the English source text file
    #[arg(long)]
    en: PathBuf,

    /// Path to the Chinese translation text file
    #[arg(long)]
    zh: PathBuf,

    /// Optional glossary CSV with columns en_term,zh_term
    #[arg(short, long)]
    glossary: Option<PathBuf>,

    /// Output directory for reports and patched text
    #[arg(short, long, default_value = "outputs/run")]
    out: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// TermGuard - terminology consistency checker (EN -> ZH)
#[derive(Parser, Debug)]
#[command(name = "termguard")]
#[command(version = "1.0.0")]
#[command(about = "Terminology consistency checker for EN -> ZH translations")]
#[command(long_about = "TermGuard aligns an English text with its Chinese translation, discovers
how each English term was rendered in Chinese, flags inconsistent or
off-glossary renderings and writes a patched translation using the preferred
terms.

EXAMPLES:
    termguard check --en report.txt --zh report_zh.txt
    termguard check --en report.txt --zh report_zh.txt -g glossary.csv
    termguard check --en report.txt --zh report_zh.txt -o outputs/audit
    termguard check --en report.txt --zh report_zh.txt -l debug
    termguard completions bash > termguard.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.

GLOSSARY:
    The glossary CSV needs a header row; en_term/en/term and
    zh_term/preferred_zh/zh are accepted as column names. When a glossary is
    given, multi-word glossary terms present in the English text are checked
    and the patched translation rewrites alternates to the preferred terms.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    // The effective level lives in the global max level so the CLI can raise
    // it after the config file is loaded
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "termguard", &mut std::io::stdout());
            Ok(())
        }
        Commands::Check(args) => run_check(args),
    }
}

fn run_check(args: CheckArgs) -> Result<()> {
    let config = Config::from_file_or_default(&args.config_path)?;

    // CLI log level wins over the config file
    let level: LevelFilter = match args.log_level {
        Some(cli_level) => cli_level.into(),
        None => config.log_level.clone().into(),
    };
    log::set_max_level(level);

    let controller = Controller::with_config(config)?;
    let summary = controller.run_from_files(
        &args.en,
        &args.zh,
        args.glossary.as_deref(),
        &args.out,
    )?;

    println!("TermGuard finished.");
    println!("- Report CSV : {}", summary.report_csv.display());
    println!("- Report JSON: {}", summary.report_json.display());
    println!("- Patched ZH : {}", summary.patched_path.display());
    println!("- Flags      : {}", summary.flags.len());

    Ok(())
}
