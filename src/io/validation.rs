use anyhow::{Result, anyhow, ensure};
use regex::Regex;
use std::sync::LazyLock;

static ZONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Label rules: start and end with alnum/underscore, hyphens in the middle.
    // '/' is allowed inside labels for RFC 2317 style zones such as 128/27.
    Regex::new(r"^(?:[a-zA-Z0-9_](?:[a-zA-Z0-9_/-]{0,61}[a-zA-Z0-9_])?\.)+[a-zA-Z]{2,}\.?$").unwrap()
});

const MAX_LABEL_LENGTH: usize = 63;
const MAX_DOMAIN_LENGTH: usize = 253;

/// Validates a zone name and drops the trailing root dot.
///
/// Case is preserved: suffix matching against the zone is case-sensitive.
pub fn validate_zone(input: &str) -> Result<String> {
    let input = input.trim();

    ensure!(ZONE_REGEX.is_match(input), "Invalid zone name: {input}");

    let zone = input.strip_suffix('.').unwrap_or(input);
    if zone.len() > MAX_DOMAIN_LENGTH {
        return Err(anyhow!(
            "Zone name exceeds maximum length of {MAX_DOMAIN_LENGTH} characters: {input}"
        ));
    }

    if let Some(label) = zone.split('.').find(|label| label.len() > MAX_LABEL_LENGTH) {
        return Err(anyhow!(
            "Zone label '{label}' exceeds maximum length of {MAX_LABEL_LENGTH} characters"
        ));
    }

    Ok(zone.to_string())
}

pub fn parse_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
