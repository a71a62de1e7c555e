// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Name Constraints
//!
//! Each resource type may carry a structural rule set its finished names
//! must satisfy: length bounds, a validation pattern, forbidden
//! prefixes/suffixes/substrings, and an IP-address-shape rejection. A
//! resource type without an entry in the constraint table accepts any name.
//!
//! Checks run in a fixed order and short-circuit on the first failure, so a
//! caller always sees the most fundamental violation first.

use crate::errors::{NamingError, NamingResult, RuleViolation};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::IpAddr;

/// Structural rules a finished name must satisfy for one resource type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConstraint {
    /// Minimum name length in bytes; 0 disables the check
    pub min_len: usize,
    /// Maximum name length in bytes; 0 disables the check
    pub max_len: usize,
    /// Validation pattern the whole name must match
    #[serde(with = "serde_pattern")]
    pub pattern: Option<Regex>,
    /// Human-readable description used in pattern failure messages
    pub pattern_description: String,
    /// Prefixes the name must not start with
    pub forbidden_prefixes: Vec<String>,
    /// Suffixes the name must not end with
    pub forbidden_suffixes: Vec<String>,
    /// Substrings the name must not contain
    pub forbidden_substrings: Vec<String>,
    /// Reject names that parse as an IPv4 literal
    pub disallow_ip_address: bool,
    /// Compare forbidden affixes/substrings case-insensitively
    pub case_insensitive: bool,
}

/// Validate a candidate name against the resource type's constraint entry
///
/// An empty resource key, an empty name, or a missing constraint entry all
/// pass unconditionally.
pub fn validate(
    resource_key: &str,
    name: &str,
    constraints: &HashMap<String, ResourceConstraint>,
) -> NamingResult<()> {
    if resource_key.is_empty() || name.is_empty() {
        return Ok(());
    }
    let Some(constraint) = constraints.get(resource_key) else {
        return Ok(());
    };

    let violation = |rule: RuleViolation| NamingError::ConstraintViolation {
        resource: resource_key.to_string(),
        name: name.to_string(),
        rule,
    };

    if constraint.min_len > 0 && name.len() < constraint.min_len {
        return Err(violation(RuleViolation::TooShort {
            min: constraint.min_len,
        }));
    }
    if constraint.max_len > 0 && name.len() > constraint.max_len {
        return Err(violation(RuleViolation::TooLong {
            max: constraint.max_len,
        }));
    }

    if let Some(pattern) = &constraint.pattern {
        if !pattern.is_match(name) {
            let requirement = if constraint.pattern_description.is_empty() {
                pattern.as_str().to_string()
            } else {
                constraint.pattern_description.clone()
            };
            return Err(violation(RuleViolation::PatternMismatch { requirement }));
        }
    }

    let comparison_name = if constraint.case_insensitive {
        name.to_lowercase()
    } else {
        name.to_string()
    };
    let fold = |value: &str| {
        if constraint.case_insensitive {
            value.to_lowercase()
        } else {
            value.to_string()
        }
    };

    for prefix in &constraint.forbidden_prefixes {
        if !prefix.is_empty() && comparison_name.starts_with(&fold(prefix)) {
            return Err(violation(RuleViolation::ForbiddenPrefix {
                prefix: prefix.clone(),
            }));
        }
    }
    for suffix in &constraint.forbidden_suffixes {
        if !suffix.is_empty() && comparison_name.ends_with(&fold(suffix)) {
            return Err(violation(RuleViolation::ForbiddenSuffix {
                suffix: suffix.clone(),
            }));
        }
    }
    for substring in &constraint.forbidden_substrings {
        if !substring.is_empty() && comparison_name.contains(&fold(substring)) {
            return Err(violation(RuleViolation::ForbiddenSubstring {
                substring: substring.clone(),
            }));
        }
    }

    if constraint.disallow_ip_address && is_ipv4_literal(name) {
        return Err(violation(RuleViolation::IpAddressShape));
    }

    Ok(())
}

/// True for dotted-quad IPv4 literals and IPv4-mapped IPv6 forms
fn is_ipv4_literal(value: &str) -> bool {
    match value.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => true,
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped().is_some(),
        Err(_) => false,
    }
}

/// Serialize the validation pattern as its source string
mod serde_pattern {
    use regex::Regex;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(pattern: &Option<Regex>, serializer: S) -> Result<S::Ok, S::Error> {
        pattern.as_ref().map(Regex::as_str).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Regex>, D::Error> {
        let source = Option::<String>::deserialize(deserializer)?;
        source
            .map(|s| Regex::new(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
