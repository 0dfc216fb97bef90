//! A single compiled ingress rule.

use std::fmt;

use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::routing::matcher::{is_catch_all_hostname, matches_hostname, matches_path};

/// One hostname/path → service entry of a routing table.
///
/// Rules are only built by the compiler, which guarantees the service has a
/// scheme and host and the path is a valid regex.
#[derive(Debug, Clone)]
pub struct Rule {
    hostname: String,
    path: Option<Regex>,
    service: Url,
}

impl Rule {
    pub(crate) fn new(hostname: String, path: Option<Regex>, service: Url) -> Self {
        Self {
            hostname,
            path,
            service,
        }
    }

    /// Hostname pattern as written in the document (empty if omitted).
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Compiled path pattern, if the rule restricts paths.
    pub fn path(&self) -> Option<&Regex> {
        self.path.as_ref()
    }

    /// Forwarding target for requests matching this rule.
    pub fn service(&self) -> &Url {
        &self.service
    }

    /// Whether this rule matches every hostname.
    pub fn is_catch_all(&self) -> bool {
        is_catch_all_hostname(&self.hostname)
    }

    /// Returns true if both the hostname and path conditions hold.
    pub fn matches(&self, host: &str, path: &str) -> bool {
        matches_hostname(&self.hostname, host) && matches_path(self.path.as_ref(), path)
    }

    /// Plain-data view of the rule for JSON output.
    pub fn summary(&self) -> RuleSummary<'_> {
        RuleSummary {
            hostname: &self.hostname,
            path: self.path.as_ref().map(Regex::as_str),
            service: self.service.as_str(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.hostname.is_empty() {
            writeln!(f, "\thostname: {}", self.hostname)?;
        }
        if let Some(path) = &self.path {
            writeln!(f, "\tpath: {}", path.as_str())?;
        }
        write!(f, "\tservice: {}", self.service)
    }
}

/// Serializable snapshot of a [`Rule`].
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RuleSummary<'a> {
    pub hostname: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<&'a str>,
    pub service: &'a str,
}
