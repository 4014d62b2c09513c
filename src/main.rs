// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use rpydialog::app_config::{self, Config};
use rpydialog::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract dialog from a directory of scripts (default command)
    Extract(ExtractArgs),

    /// Generate shell completions for rpydialog
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct ExtractArgs {
    /// Root directory of the extracted script archive
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    #[command(flatten)]
    options: ExtractOptions,
}

#[derive(clap::Args, Debug, Clone, Default)]
struct ExtractOptions {
    /// Name of the narrating character, used for dialog without a speaker (defaults to NARRATOR)
    #[arg(short, long)]
    narrator: Option<String>,

    /// Output filename (defaults to dialog.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path (JSON)
    #[arg(short, long = "config")]
    config_path: Option<PathBuf>,

    /// Script file extension (defaults to rpy)
    #[arg(short, long)]
    extension: Option<String>,

    /// Search subdirectories for scripts
    #[arg(short, long)]
    recursive: bool,

    /// Write indented JSON
    #[arg(short, long)]
    pretty: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// rpydialog - Extract dialog from RPY scripts
///
/// Reads every script in a directory, resolves character ids and writes
/// the dialog as a speaker-annotated JSON transcript.
#[derive(Parser, Debug)]
#[command(name = "rpydialog")]
#[command(version)]
#[command(about = "Extract dialog from RPY scripts")]
#[command(long_about = "rpydialog reads the scripts of an unpacked game archive and writes its dialog as JSON.

EXAMPLES:
    rpydialog game/                             # Write game/*.rpy dialog to dialog.json
    rpydialog -n Narrator -o out.json game/     # Custom narrator name and output file
    rpydialog -r --pretty game/                 # Include subdirectories, indented output
    rpydialog completions bash > rpydialog.bash # Generate bash completions

OUTPUT:
    {\"characters\": {\"<name>\": \"\"}, \"messages\": [{\"speaker\": ..., \"utterance\": ...}]}")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root directory of the extracted script archive
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    #[command(flatten)]
    options: ExtractOptions,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // The boxed logger passes everything through; max_level does the filtering
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and marker for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌ "),
            Level::Warn => ("1;33", "🚧 "),
            Level::Info => ("1;32", ""),
            Level::Debug => ("1;36", "🔍 "),
            Level::Trace => ("1;35", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, marker) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {}{}\x1B[0m",
                colour, now, marker, record.args()
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
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "rpydialog", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Extract(args)) => run_extract(args),
        None => {
            // Default behavior - use top-level args
            let directory = cli.directory.ok_or_else(|| {
                anyhow!("DIRECTORY is required when no subcommand is specified")
            })?;
            run_extract(ExtractArgs {
                directory,
                options: cli.options,
            })
        }
    }
}

/// Merge the config file (if any) with command line overrides
fn build_config(options: &ExtractOptions) -> Result<Config> {
    let mut config = match &options.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(narrator) = &options.narrator {
        config.narrator = narrator.clone();
    }
    if let Some(output) = &options.output {
        config.output = output.clone();
    }
    if let Some(extension) = &options.extension {
        config.extension = extension.clone();
    }
    if options.recursive {
        config.recursive = true;
    }
    if options.pretty {
        config.pretty = true;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    // Apply a command line log level before the config file is read
    if let Some(cmd_log_level) = &args.options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config = build_config(&args.options)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    controller.run(&args.directory)?;

    Ok(())
}
