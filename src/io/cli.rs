use clap::{Parser, ValueEnum};
use colored::Colorize;

use super::validation;

/// Operation modes for the program
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationMode {
    #[value(name = "n")]
    Normalize,
    #[value(name = "r")]
    Reverse,
}

/// Command-line arguments for the program
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "ptrmagic",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn IP addresses into PTR record names relative to a reverse zone",
)]
pub struct CommandArgs {
    /// The operation mode to run, normalize record names or print reverse zone names
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = OperationMode::Normalize, env = "PTRMAGIC_MODE")]
    pub operation_mode: OperationMode,

    /// Reverse zone the records are placed in, e.g. '18.20.172.in-addr.arpa' or '128/27.18.20.172.in-addr.arpa'
    #[arg(short, long, value_parser = validation::validate_zone, env = "PTRMAGIC_ZONE")]
    pub zone: Option<String>,

    /// Record names, addresses or CIDRs to process (comma-separated)
    #[arg(short, long, required = false, env = "PTRMAGIC_TARGETS")]
    pub targets: Option<String>,

    /// Path to a file with one record name, address or CIDR per line
    #[arg(short, long, required = false, env = "PTRMAGIC_INPUT")]
    pub input: Option<String>,

    /// Print extra information
    #[arg(short, long, default_value_t = false, env = "PTRMAGIC_VERBOSE")]
    pub verbose: bool,

    /// Number of worker threads
    /// Default is the number of logical CPUs minus one
    #[arg(short = 'T', long, required = false, env = "PTRMAGIC_THREADS")]
    pub threads: Option<usize>,

    /// Path of output file to write JSON results to. Extension is optional.
    #[arg(long, required = false, env = "PTRMAGIC_JSON_OUTPUT")]
    pub json: Option<String>,

    /// Don't print results to the console, only write to the output file
    #[arg(short = 'Q', long, required = false, env = "PTRMAGIC_QUIET")]
    pub quiet: bool,

    /// Don't show the welcome banner
    #[arg(long, env = "PTRMAGIC_NO_WELCOME")]
    pub no_welcome: bool,
}

impl CommandArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.operation_mode == OperationMode::Normalize && self.zone.is_none() {
            return Err("The argument '--zone <ZONE>' is required when the operation mode is 'n'".to_string());
        }

        if self.targets.is_none() && self.input.is_none() {
            return Err("One of '--targets <TARGETS>' or '--input <INPUT>' is required".to_string());
        }

        if self.quiet && self.json.is_none() {
            return Err("The argument '--quiet' requires '--json <OUTPUT_FILE>'".to_string());
        }

        if self.threads == Some(0) {
            return Err("The argument '--threads' must be at least 1".to_string());
        }

        Ok(())
    }

    pub fn thread_count(&self) -> usize {
        self.threads
            .unwrap_or_else(|| num_cpus::get().saturating_sub(1))
            .max(1)
    }
}

/// Retrieves and validates the parsed command-line arguments
pub fn get_parsed_args() -> CommandArgs {
    let args = CommandArgs::parse();
    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    args
}

pub fn print_banner() {
    println!("{}", "ptrmagic".cyan().bold());
    println!("Version: {}\n", env!("CARGO_PKG_VERSION"));
}
