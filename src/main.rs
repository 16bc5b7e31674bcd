mod io;
mod modes;

use anyhow::{Context, Result, ensure};

use io::{
    cli::{self, CommandArgs, OperationMode},
    targets, validation,
};

fn main() {
    let args = cli::get_parsed_args();

    if let Err(error) = run(&args) {
        log_error!("{error:#}");
        std::process::exit(1);
    }
}

fn run(args: &CommandArgs) -> Result<()> {
    if !args.no_welcome && !args.quiet {
        cli::print_banner();
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.thread_count())
        .build_global()
        .context("Failed to build worker thread pool")?;

    let targets = collect_targets(args)?;
    ensure!(!targets.is_empty(), "No targets to process");

    match args.operation_mode {
        OperationMode::Normalize => modes::normalize::normalize_targets(args, &targets),
        OperationMode::Reverse => modes::reverse::reverse_targets(args, &targets),
    }
}

fn collect_targets(args: &CommandArgs) -> Result<Vec<String>> {
    let mut all_targets = args
        .targets
        .as_deref()
        .map(validation::parse_csv)
        .unwrap_or_default();

    if let Some(input) = &args.input {
        let from_file = targets::read_from_file(input)
            .with_context(|| format!("Failed to load targets from {input}"))?;
        if from_file.is_empty() {
            log_warn!("Input file {input} contains no targets");
        }
        all_targets.extend(from_file);
    }

    Ok(all_targets)
}
