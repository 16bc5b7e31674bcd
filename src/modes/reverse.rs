use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use ptrmagic::ptr::{AddressReverser, ArpaReverser, ReverseError};

use crate::{
    io::{
        cli::CommandArgs,
        json::{Output, PtrOutput},
    },
    log_failure, log_info, log_success,
};

pub fn reverse_targets(cmd_args: &CommandArgs, targets: &[String]) -> Result<()> {
    let print = !cmd_args.quiet;
    if print {
        log_info!("Building reverse zone names for {} targets", targets.len());
    }

    let reverser = ArpaReverser;
    let names = reverse_all(&reverser, targets);

    let mut output = PtrOutput::new(None);
    let mut found_count = 0;

    for (target, name) in targets.iter().zip(names) {
        match name {
            Ok(name) => {
                if print {
                    log_success!("{target} -> {}", name.bold());
                }
                output.add_record(target, name);
                found_count += 1;
            }
            Err(error) => {
                if print {
                    log_failure!("{target} [{error}]");
                }
                output.add_error(target, &error);
            }
        }
    }

    if print {
        log_info!("Reversed {found_count} of {} targets", targets.len());
    }

    if let Some(json_file) = &cmd_args.json {
        output.write_to_file(json_file)?;
    }

    Ok(())
}

fn reverse_all<R: AddressReverser + Sync>(
    reverser: &R,
    targets: &[String],
) -> Vec<Result<String, ReverseError>> {
    targets
        .par_iter()
        .map(|target| reverser.reverse(target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_all() {
        let targets = vec![
            "172.20.18.128/27".to_string(),
            "2001:db8::/32".to_string(),
            "10.0.0.1/8".to_string(),
        ];
        let names = reverse_all(&ArpaReverser, &targets);

        assert_eq!(names[0].as_deref(), Ok("128/27.18.20.172.in-addr.arpa"));
        assert_eq!(names[1].as_deref(), Ok("8.b.d.0.1.0.0.2.ip6.arpa"));
        assert!(matches!(names[2], Err(ReverseError::HostBitsSet(_))));
    }
}
