//! abiscope CLI: inspect target ABI facts and reinterpret constants.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "abiscope", version, about = "Target ABI descriptor inspector")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in target presets
    List,
    /// Show the resolved ABI facts of a target
    Describe {
        /// Preset name (e.g., linux-x86_64, windows-x86)
        name: Option<String>,
        /// Read the target from a .target.toml file instead of a preset
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format (human, toml, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Check a .target.toml file for unusual combinations
    Validate {
        /// Path to the .target.toml file
        file: PathBuf,
    },
    /// Print a .target.toml seeded from a preset
    Template {
        /// Preset name
        name: String,
    },
    /// Reinterpret a constant's bits as another type of the same size
    Paint {
        /// Literal value (decimal, or 0x-prefixed hex for integers)
        value: String,
        /// Type of the literal (int32, uns32, int64, uns64, float32, float64)
        #[arg(long)]
        from: String,
        /// Type to reinterpret as
        #[arg(long)]
        to: String,
    },
    /// Check whether a vector type is legal on a target
    Vector {
        /// Vector size in bytes
        size: u64,
        /// Element type (e.g., int32, float64)
        element: String,
        /// Preset name
        #[arg(long)]
        target: Option<String>,
        /// Read the target from a .target.toml file instead of a preset
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::List => commands::target::list(),
        Commands::Describe {
            name,
            config,
            format,
        } => commands::target::describe(name.as_deref(), config.as_deref(), format.as_deref()),
        Commands::Validate { file } => commands::target::validate(&file),
        Commands::Template { name } => commands::target::template(&name),
        Commands::Paint { value, from, to } => commands::paint::run(&value, &from, &to),
        Commands::Vector {
            size,
            element,
            target,
            config,
        } => commands::vector::run(size, &element, target.as_deref(), config.as_deref()),
    }
}
