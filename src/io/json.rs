use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::log_info;

pub trait Output {
    fn write_to_file(&self, output_file: &str) -> Result<()>;
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct PtrRecordResult {
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct PtrOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    pub results: Vec<PtrRecordResult>,
}

impl Output for PtrOutput {
    fn write_to_file(&self, output_file: &str) -> Result<()> {
        write_json(&self, output_file)
    }
}

fn write_json<T: Serialize>(data: &T, output_file: &str) -> Result<()> {
    let output_file = json_path(output_file);

    let file = File::create(&output_file)?;
    serde_json::to_writer_pretty(file, data)?;

    log_info!("JSON output written to: {output_file}");

    Ok(())
}

fn json_path(output_file: &str) -> String {
    if Path::new(output_file)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        output_file.to_string()
    } else {
        format!("{output_file}.json")
    }
}

impl PtrOutput {
    pub const fn new(zone: Option<String>) -> Self {
        Self {
            zone,
            results: Vec::new(),
        }
    }

    pub fn add_record(&mut self, target: &str, record: String) {
        self.results.push(PtrRecordResult {
            target: target.to_string(),
            record: Some(record),
            error: None,
        });
    }

    pub fn add_error(&mut self, target: &str, error: &impl std::fmt::Display) {
        self.results.push(PtrRecordResult {
            target: target.to_string(),
            record: None,
            error: Some(error.to_string()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_path() {
        assert_eq!(json_path("results"), "results.json");
        assert_eq!(json_path("results.JSON"), "results.JSON");
        assert_eq!(json_path("out/results.txt"), "out/results.txt.json");
    }

    #[test]
    fn test_serialize_output() {
        let mut output = PtrOutput::new(Some("20.172.in-addr.arpa".to_string()));
        output.add_record("172.20.18.27", "27.18".to_string());
        output.add_error("10.0.0.1", &"PTR record 10.0.0.1 in wrong IPv4 domain");

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["zone"], "20.172.in-addr.arpa");
        assert_eq!(value["results"][0]["record"], "27.18");
        assert!(value["results"][0].get("error").is_none());
        assert_eq!(
            value["results"][1]["error"],
            "PTR record 10.0.0.1 in wrong IPv4 domain"
        );
    }
}
