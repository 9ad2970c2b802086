//! adstxt-merge: build a combined app-ads.txt from per-network source files

use adstxt_merge::{
    cli,
    config::{AppConfig, CONFIG_FILE_NAMES, ConfigOverrides, Environment},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "adstxt-merge")]
#[command(version)]
#[command(about = "Merge per-network ads.txt fragments into one app-ads.txt", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Output written (warnings may have been reported)
    1  Invalid cert IDs found in prod (or with --fail-on-invalid)
    2  Error occurred

EXAMPLES:
    # Build the production file from the default network table
    adstxt-merge

    # Build the test file
    ADS_ENV=test adstxt-merge build

    # Preview changes without writing anything
    adstxt-merge check --format json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress the report on stdout
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Deployment environment
    #[arg(long = "env", env = "ADS_ENV", value_enum, global = true)]
    environment: Option<Environment>,

    /// Aggregated file path (overrides the per-environment file name)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Directory for the build log
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Format of the report echoed to stdout
    #[arg(long, value_enum, global = true)]
    format: Option<ReportFormat>,

    /// Fail on invalid cert IDs in every environment
    #[arg(long, global = true)]
    fail_on_invalid: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate sources, write the output file and the build log (default)
    Build,

    /// Aggregate and report without writing any file
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (defaults + file + flags)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .adstxt-merge.yaml in the current directory
    Init,
    /// Print the JSON Schema of the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            environment: self.environment,
            output_file: self.output.clone(),
            log_dir: self.log_dir.clone(),
            report_format: self.format,
            quiet: self.quiet,
            fail_on_invalid: self.fail_on_invalid,
        }
    }

    fn load_config(&self) -> Result<(AppConfig, Option<PathBuf>)> {
        let (config, loaded_from) =
            AppConfig::load_with_overrides(self.config.as_deref(), &self.overrides())?;
        if let Some(path) = &loaded_from {
            tracing::debug!("Loaded config from {}", path.display());
        }
        Ok((config, loaded_from))
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli) -> Result<i32> {
    match cli.command.as_ref().unwrap_or(&Commands::Build) {
        Commands::Build => {
            let (config, _) = cli.load_config()?;
            cli::run_build(&config)
        }

        Commands::Check => {
            let (config, _) = cli.load_config()?;
            cli::run_check(&config)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "adstxt-merge", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config(cli, action),
    }
}

fn run_config(cli: &Cli, action: &ConfigAction) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = cli.load_config()?;
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            eprintln!("Config file search paths (in order):");
            for dir in adstxt_merge::config::search_dirs() {
                eprintln!("  {}", dir.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match adstxt_merge::config::discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(CONFIG_FILE_NAMES[0]);
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = adstxt_merge::config::generate_full_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
        ConfigAction::Schema { file } => {
            let schema = adstxt_merge::config::generate_json_schema();
            match file {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
        }
    }
    Ok(exit_codes::SUCCESS)
}
