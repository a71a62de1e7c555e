// Copyright (c) 2025 - Cowboy AI, Inc.
//! Canonical Name Components
//!
//! Every generated name is assembled from named component slots. Six slots
//! are canonical and always present in the component set; anything else a
//! caller introduces through an override or a custom recipe entry is carried
//! as a free-form component under its own key.
//!
//! Callers refer to components through a small alias vocabulary
//! (`org_prefix`, `environment`, `region_short_code`, `what`, ...) which this
//! module resolves to the canonical slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The canonical component slots of a resource name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKey {
    /// Organization prefix
    Org,
    /// Project name
    Proj,
    /// Deployment environment (prod, staging, ...)
    Env,
    /// Region short code
    Region,
    /// Resource type acronym
    Resource,
    /// Free-form qualifier distinguishing siblings
    Qualifier,
}

impl ComponentKey {
    /// All canonical keys, in the default recipe order
    pub const ALL: [ComponentKey; 6] = [
        Self::Org,
        Self::Proj,
        Self::Env,
        Self::Region,
        Self::Resource,
        Self::Qualifier,
    ];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Org => "org",
            Self::Proj => "proj",
            Self::Env => "env",
            Self::Region => "region",
            Self::Resource => "resource",
            Self::Qualifier => "qualifier",
        }
    }

    /// Resolve a caller-supplied alias to a canonical key
    ///
    /// Aliases are matched case-insensitively after trimming. Unrecognized
    /// keys return `None` and pass through as free-form component names.
    pub fn canonicalize(alias: &str) -> Option<Self> {
        match alias.trim().to_lowercase().as_str() {
            "org" | "org_prefix" => Some(Self::Org),
            "proj" | "project" => Some(Self::Proj),
            "env" | "environment" => Some(Self::Env),
            "region" | "region_code" | "region_short_code" => Some(Self::Region),
            "resource" | "resource_type" | "what" => Some(Self::Resource),
            "qualifier" | "qual" => Some(Self::Qualifier),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve a component key to its canonical name, or fall back to the
/// lowercased, trimmed key itself for free-form components
pub fn canonical_component_name(key: &str) -> String {
    match ComponentKey::canonicalize(key) {
        Some(canonical) => canonical.as_str().to_string(),
        None => key.trim().to_lowercase(),
    }
}

/// The default recipe: every canonical component, in order
pub fn default_recipe() -> Vec<String> {
    ComponentKey::ALL
        .iter()
        .map(|key| key.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("org", Some(ComponentKey::Org))]
    #[test_case("org_prefix", Some(ComponentKey::Org))]
    #[test_case("project", Some(ComponentKey::Proj))]
    #[test_case("environment", Some(ComponentKey::Env))]
    #[test_case("ENV", Some(ComponentKey::Env))]
    #[test_case("region_short_code", Some(ComponentKey::Region))]
    #[test_case("what", Some(ComponentKey::Resource))]
    #[test_case("resource_type", Some(ComponentKey::Resource))]
    #[test_case("qual", Some(ComponentKey::Qualifier))]
    #[test_case("  qualifier  ", Some(ComponentKey::Qualifier))]
    #[test_case("team", None)]
    #[test_case("", None)]
    fn test_canonicalize(alias: &str, expected: Option<ComponentKey>) {
        assert_eq!(ComponentKey::canonicalize(alias), expected);
    }

    #[test]
    fn test_canonical_component_name_passthrough() {
        assert_eq!(canonical_component_name("org_prefix"), "org");
        assert_eq!(canonical_component_name(" Team "), "team");
        assert_eq!(canonical_component_name("cost_center"), "cost_center");
    }

    #[test]
    fn test_default_recipe_order() {
        assert_eq!(
            default_recipe(),
            vec!["org", "proj", "env", "region", "resource", "qualifier"]
        );
    }
}
