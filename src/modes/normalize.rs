use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use ptrmagic::ptr::{ArpaReverser, Delegation, PtrError, PtrMagic};

use crate::{
    io::{
        cli::CommandArgs,
        json::{Output, PtrOutput},
    },
    log_failure, log_info, log_success,
};

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Record(String),
    Unchanged,
    Failed(PtrError),
}

pub fn normalize_targets(cmd_args: &CommandArgs, targets: &[String]) -> Result<()> {
    let zone = cmd_args
        .zone
        .as_deref()
        .context("A zone is required to normalize record names")?;
    let print = !cmd_args.quiet;

    if print {
        log_info!(
            "Normalizing {} record names for zone {}",
            targets.len(),
            zone.bold()
        );
        if cmd_args.verbose
            && let Some(delegation) = Delegation::detect(zone)
        {
            log_info!("Zone uses {delegation} classless delegation");
        }
    }

    let magic = PtrMagic::new(ArpaReverser);
    let outcomes = classify_all(&magic, targets, zone);

    let mut output = PtrOutput::new(Some(zone.to_string()));
    let mut found_count = 0;

    for (target, outcome) in targets.iter().zip(outcomes) {
        match outcome {
            Outcome::Record(record) => {
                if print {
                    log_success!("{target} -> {}", record.bold());
                }
                output.add_record(target, record);
                found_count += 1;
            }
            Outcome::Unchanged => {
                if print && cmd_args.verbose {
                    log_info!("{target} [unchanged]");
                }
                output.add_record(target, target.clone());
            }
            Outcome::Failed(error) => {
                if print {
                    log_failure!("{target} [{error}]");
                }
                output.add_error(target, &error);
            }
        }
    }

    if print {
        log_info!("Normalized {found_count} of {} record names", targets.len());
    }

    if let Some(json_file) = &cmd_args.json {
        output.write_to_file(json_file)?;
    }

    Ok(())
}

// Order of the results follows the order of the targets.
fn classify_all(magic: &PtrMagic, targets: &[String], zone: &str) -> Vec<Outcome> {
    targets
        .par_iter()
        .map(|target| classify(magic, target, zone))
        .collect()
}

fn classify(magic: &PtrMagic, target: &str, zone: &str) -> Outcome {
    match magic.normalize(target, zone) {
        Ok(record) if record == target => Outcome::Unchanged,
        Ok(record) => Outcome::Record(record),
        Err(error) => Outcome::Failed(error),
    }
}
