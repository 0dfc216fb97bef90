//! Shared utilities for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Two rules: `example.com` to port 8000 and a catch-all to port 8001.
#[allow(dead_code)]
pub const TWO_RULES: &str = r#"
ingress:
  - hostname: example.com
    service: https://localhost:8000
  - service: https://localhost:8001
"#;

/// Write a rules document to a fresh temporary file.
#[allow(dead_code)]
pub fn write_rules(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Build a single catch-all document targeting `service`.
#[allow(dead_code)]
pub fn catch_all(service: &str) -> String {
    format!("ingress:\n  - service: {}\n", service)
}
