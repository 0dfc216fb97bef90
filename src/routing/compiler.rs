//! Rule compilation.
//!
//! Turns raw document bytes into an immutable [`RoutingTable`]. Either every
//! rule is valid and a full table comes back, or an error does; there is no
//! partially built table.

use thiserror::Error;

use crate::config::schema::IngressDocument;
use crate::config::validation::{compile_path, parse_service, validate_rules, ValidationError};
use crate::routing::{Rule, RoutingTable};

/// Errors that can occur while compiling a rules document.
#[derive(Debug, Error)]
pub enum IngressError {
    /// The document is not well-formed YAML, or its shape does not fit the schema.
    #[error("failed to parse ingress rules: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document parsed but violates a rule-language invariant.
    #[error("invalid ingress rules: {0}")]
    Validation(#[from] ValidationError),
}

impl IngressError {
    /// The violated invariant, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            IngressError::Validation(e) => Some(e),
            IngressError::Parse(_) => None,
        }
    }
}

/// Compile a YAML (or JSON) rules document into a routing table.
pub fn compile(document: &[u8]) -> Result<RoutingTable, IngressError> {
    if document.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::NoRules.into());
    }

    let tree: serde_yaml::Value = serde_yaml::from_slice(document)?;
    if tree.is_null() {
        return Err(ValidationError::NoRules.into());
    }

    let document: IngressDocument = serde_yaml::from_value(tree)?;
    compile_document(document)
}

/// Compile an already-decoded document.
pub fn compile_document(document: IngressDocument) -> Result<RoutingTable, IngressError> {
    if document.ingress.is_empty() {
        return Err(ValidationError::NoRules.into());
    }

    let mut rules = Vec::with_capacity(document.ingress.len());
    for (i, raw) in document.ingress.into_iter().enumerate() {
        let number = i + 1;
        let service = parse_service(number, raw.service.as_deref())?;
        let path = compile_path(number, raw.path.as_deref())?;
        rules.push(Rule::new(raw.hostname.unwrap_or_default(), path, service));
    }

    validate_rules(&rules)?;

    tracing::debug!(rules = rules.len(), "Compiled ingress rules");
    Ok(RoutingTable::from_rules(rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_error(doc: &str) -> ValidationError {
        compile(doc.as_bytes())
            .unwrap_err()
            .validation()
            .cloned()
            .expect("expected a validation error")
    }

    #[test]
    fn test_multiple_rules() {
        let table = compile(
            br#"
ingress:
  - hostname: tunnel1.example.com
    service: https://localhost:8000
  - hostname: "*"
    service: https://localhost:8001
"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rules()[0].hostname(), "tunnel1.example.com");
        assert_eq!(table.rules()[0].service().as_str(), "https://localhost:8000/");
        assert_eq!(table.rules()[1].hostname(), "*");
        assert_eq!(table.rules()[1].service().as_str(), "https://localhost:8001/");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(validation_error(""), ValidationError::NoRules);
        assert_eq!(validation_error("  \n\t\n"), ValidationError::NoRules);
    }

    #[test]
    fn test_missing_or_empty_ingress() {
        assert_eq!(validation_error("tunnel: abc\n"), ValidationError::NoRules);
        assert_eq!(validation_error("ingress: []\n"), ValidationError::NoRules);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = compile(b"\nkey: \"value\n").unwrap_err();
        assert!(matches!(err, IngressError::Parse(_)));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let err = compile(b"ingress: not-a-list\n").unwrap_err();
        assert!(matches!(err, IngressError::Parse(_)));
    }

    #[test]
    fn test_numeric_hostname_compiles() {
        let table = compile(
            b"ingress:\n  - hostname: 123\n    service: http://a:1\n  - service: http://b:2\n",
        )
        .unwrap();
        assert_eq!(table.rules()[0].hostname(), "123");
        assert_eq!(table.find_matching_index("123", "/").unwrap().0, 0);
    }

    #[test]
    fn test_json_document() {
        let table = compile(br#"{"ingress": [{"service": "http://127.0.0.1:3000"}]}"#).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.rules()[0].is_catch_all());
    }

    #[test]
    fn test_missing_service() {
        assert_eq!(
            validation_error("ingress:\n  - hostname: \"*\"\n"),
            ValidationError::MissingService { rule: 1 }
        );
    }

    #[test]
    fn test_rule_errors_reported_before_table_errors() {
        // Rule #1 has a bad service and the table has no catch-all; the
        // per-rule check runs first.
        let err = validation_error(
            r#"
ingress:
  - hostname: example.com
    service: localhost:8000
"#,
        );
        assert!(matches!(err, ValidationError::ServiceMissingHost { rule: 1, .. }));
    }
}
