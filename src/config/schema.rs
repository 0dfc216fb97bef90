//! Rules document schema.
//!
//! These types are the serde view of the document before any semantic
//! checks. Unknown keys are ignored at every level so newer documents keep
//! loading on older builds. Scalar fields accept numbers and booleans as
//! well as strings, so `hostname: 123` reads as `"123"`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// Root of the rules document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IngressDocument {
    /// Ordered ingress rules, first match wins.
    pub ingress: Vec<UnvalidatedRule>,
}

/// One `ingress` entry exactly as written.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UnvalidatedRule {
    /// Hostname pattern (`*`, `*.example.com`, `example.com`); omitted = catch-all.
    #[serde(deserialize_with = "scalar_string")]
    pub hostname: Option<String>,

    /// Path regex, searched anywhere in the request path.
    #[serde(deserialize_with = "scalar_string")]
    pub path: Option<String>,

    /// Forwarding target, e.g. `https://localhost:8000`.
    #[serde(deserialize_with = "scalar_string")]
    pub service: Option<String>,
}

/// Read an optional scalar as its string form. Null stays `None`.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string, found {:?}",
            other
        ))),
    }
}
