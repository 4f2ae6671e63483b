mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use flowdef_core::UnresolvedTransitionPolicy;
use tracing_subscriber::EnvFilter;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Process definition codec.
#[derive(Parser)]
#[command(name = "flowdef", version, about = "Process definition codec")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Settings file (default: ./flowdef.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a process definition document and print the graph as JSON
    Parse {
        /// Path to the XML document
        file: PathBuf,
        /// Fail on transitions that reference unknown flow nodes
        #[arg(long)]
        strict: bool,
    },

    /// Write a JSON graph back out as a process definition document
    Emit {
        /// Path to the JSON graph produced by `parse`
        file: PathBuf,
    },

    /// Parse a document and write it back out
    Roundtrip {
        /// Path to the XML document
        file: PathBuf,
        /// Re-parse the written document and require an identical graph
        #[arg(long)]
        verify: bool,
    },

    /// Summarize a document and report unresolved transitions
    Check {
        /// Path to the XML document
        file: PathBuf,
        /// Fail on transitions that reference unknown flow nodes
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = match config::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(msg) => {
            report_error(&msg, cli.output, cli.quiet);
            process::exit(1);
        }
    };

    let strict_parse = |strict: bool| {
        let mut options = settings.parse;
        if strict {
            options.unresolved_transitions = UnresolvedTransitionPolicy::Reject;
        }
        options
    };

    match cli.command {
        Commands::Parse { file, strict } => {
            commands::cmd_parse(&file, &strict_parse(strict), cli.output, cli.quiet);
        }
        Commands::Emit { file } => {
            commands::cmd_emit(&file, &settings.write, cli.output, cli.quiet);
        }
        Commands::Roundtrip { file, verify } => {
            commands::cmd_roundtrip(&file, verify, &settings, cli.output, cli.quiet);
        }
        Commands::Check { file, strict } => {
            commands::cmd_check(&file, &strict_parse(strict), cli.output, cli.quiet);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
