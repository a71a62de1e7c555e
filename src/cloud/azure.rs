// Copyright (c) 2025 - Cowboy AI, Inc.
//! Azure Cloud Profile
//!
//! Unlike the hard-coded AWS tables, the Azure defaults are derived at first
//! use from an embedded dataset of Cloud Adoption Framework (CAF) resource
//! definitions. Each definition carries the resource's display name, length
//! bounds, validation pattern, scope, short slug, and two casing flags; the
//! profile derives the acronym, allowed styles, regional classification, and
//! constraint from those fields.
//!
//! Derivation runs exactly once, even under concurrent first use. The
//! outcome — tables or a decode error — is cached, and every later call
//! observes the same result as a fresh deep copy.

use super::{CloudDefaults, CloudProfile, CLOUD_AZURE};
use crate::constraint::ResourceConstraint;
use crate::errors::{NamingError, NamingResult};
use crate::style::Style;
use regex::Regex;
use serde::Deserialize;
use once_cell::sync::OnceCell;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

static AZURE_CAF_RESOURCE_DEFINITIONS: &str =
    include_str!("azure_caf_resource_definitions.json");

/// Scopes whose resources are region-bound rather than global
const REGIONAL_SCOPES: &[&str] = &["resourcegroup", "region", "location", "parent"];

/// One CAF resource definition from the embedded dataset
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CafResourceDefinition {
    name: String,
    min_length: usize,
    max_length: usize,
    validation_regex: String,
    scope: String,
    slug: String,
    dashes: bool,
    lowercase: bool,
}

/// The lazily-derived Azure profile
pub struct AzureProfile {
    cached: OnceCell<NamingResult<CloudDefaults>>,
}

impl AzureProfile {
    pub const fn new() -> Self {
        Self {
            cached: OnceCell::new(),
        }
    }
}

impl Default for AzureProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudProfile for AzureProfile {
    fn cloud(&self) -> &'static str {
        CLOUD_AZURE
    }

    fn defaults(&self) -> NamingResult<CloudDefaults> {
        // The first call pays for derivation; decode failures are cached
        // and returned on every later call as well.
        self.cached.get_or_init(derive_defaults).clone()
    }
}

fn derive_defaults() -> NamingResult<CloudDefaults> {
    let definitions: Vec<CafResourceDefinition> =
        serde_json::from_str(AZURE_CAF_RESOURCE_DEFINITIONS).map_err(|err| {
            NamingError::ProfileDecode {
                cloud: CLOUD_AZURE.to_string(),
                message: err.to_string(),
            }
        })?;

    let mut acronyms = HashMap::with_capacity(definitions.len());
    let mut style_overrides = HashMap::with_capacity(definitions.len());
    let mut constraints = HashMap::with_capacity(definitions.len());
    let mut regional_resources = HashSet::new();

    for definition in &definitions {
        let name = definition.name.trim().to_lowercase();
        if name.is_empty() {
            continue;
        }

        acronyms.insert(name.clone(), resource_acronym(&definition.slug, &definition.name));
        style_overrides.insert(
            name.clone(),
            allowed_styles(definition.lowercase, definition.dashes),
        );
        if is_regional_scope(&definition.scope) {
            regional_resources.insert(name.clone());
        }
        constraints.insert(name, derive_constraint(definition));
    }

    debug!("Derived Azure defaults from {} CAF resource definitions", definitions.len());

    Ok(CloudDefaults {
        region_map: HashMap::new(),
        resource_acronyms: acronyms,
        resource_style_overrides: style_overrides,
        resource_constraints: constraints,
        regional_resources,
    })
}

/// Derive the exactly-4-character acronym for a resource
///
/// Lowercased alphanumerics of the slug, padded from the display name when
/// the slug is too short, then padded with `x`, truncated to 4.
fn resource_acronym(slug: &str, name: &str) -> String {
    let mut acronym: Vec<char> = to_lower_alnum(slug).chars().collect();
    let filler = to_lower_alnum(name);
    let mut filler = filler.chars();
    while acronym.len() < 4 {
        acronym.push(filler.next().unwrap_or('x'));
    }
    acronym.truncate(4);
    acronym.into_iter().collect()
}

/// Derive the allowed style list from the CAF casing flags
fn allowed_styles(lowercase: bool, dashes: bool) -> Vec<String> {
    let styles: &[Style] = match (lowercase, dashes) {
        (true, true) => &[Style::Dashed, Style::Straight],
        (true, false) => &[Style::Straight],
        (false, true) => &[
            Style::Dashed,
            Style::PascalDashed,
            Style::Pascal,
            Style::Camel,
            Style::Straight,
        ],
        (false, false) => &[Style::Pascal, Style::Camel, Style::Straight],
    };
    styles.iter().map(|style| style.as_str().to_string()).collect()
}

fn is_regional_scope(scope: &str) -> bool {
    REGIONAL_SCOPES.contains(&scope.trim().to_lowercase().as_str())
}

fn derive_constraint(definition: &CafResourceDefinition) -> ResourceConstraint {
    let mut constraint = ResourceConstraint {
        min_len: definition.min_length,
        max_len: definition.max_length,
        ..Default::default()
    };

    let source = definition.validation_regex.trim().trim_matches('"');
    if source.is_empty() {
        return constraint;
    }

    constraint.pattern_description = format!("must match Azure CAF regex {source:?}");
    match Regex::new(source) {
        Ok(pattern) => constraint.pattern = Some(pattern),
        // The constraint still carries its length bounds
        Err(err) => warn!(
            "Skipping uncompilable validation pattern for {}: {}",
            definition.name, err
        ),
    }
    constraint
}

fn to_lower_alnum(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("st", "azurerm_storage_account", "staz"; "short slug pads from name")]
    #[test_case("vnet", "azurerm_virtual_network", "vnet"; "four character slug kept")]
    #[test_case("appcs", "azurerm_app_configuration", "appc"; "long slug truncated")]
    #[test_case("r-g!", "", "rgxx"; "non alphanumerics stripped then x filled")]
    #[test_case("", "", "xxxx"; "empty everything is all filler")]
    fn test_resource_acronym(slug: &str, name: &str, expected: &str) {
        assert_eq!(resource_acronym(slug, name), expected);
    }

    #[test]
    fn test_allowed_styles_from_flags() {
        assert_eq!(allowed_styles(true, true), vec!["dashed", "straight"]);
        assert_eq!(allowed_styles(true, false), vec!["straight"]);
        assert_eq!(
            allowed_styles(false, true),
            vec!["dashed", "pascaldashed", "pascal", "camel", "straight"]
        );
        assert_eq!(allowed_styles(false, false), vec!["pascal", "camel", "straight"]);
    }

    #[test_case("resourceGroup", true)]
    #[test_case(" REGION ", true)]
    #[test_case("location", true)]
    #[test_case("parent", true)]
    #[test_case("global", false)]
    #[test_case("subscription", false)]
    #[test_case("", false)]
    fn test_regional_scope(scope: &str, expected: bool) {
        assert_eq!(is_regional_scope(scope), expected);
    }

    #[test]
    fn test_constraint_keeps_bounds_on_bad_pattern() {
        let definition = CafResourceDefinition {
            name: "azurerm_broken".to_string(),
            min_length: 2,
            max_length: 10,
            validation_regex: "([unclosed".to_string(),
            ..Default::default()
        };
        let constraint = derive_constraint(&definition);
        assert_eq!(constraint.min_len, 2);
        assert_eq!(constraint.max_len, 10);
        assert!(constraint.pattern.is_none());
    }

    #[test]
    fn test_constraint_strips_quoted_regex() {
        let definition = CafResourceDefinition {
            name: "azurerm_quoted".to_string(),
            validation_regex: "\"^[a-z]+$\"".to_string(),
            ..Default::default()
        };
        let constraint = derive_constraint(&definition);
        assert_eq!(constraint.pattern.as_ref().map(Regex::as_str), Some("^[a-z]+$"));
    }

    #[test]
    fn test_embedded_dataset_derives() {
        let defaults = derive_defaults().unwrap();
        assert!(defaults.region_map.is_empty());
        assert!(!defaults.resource_acronyms.is_empty());

        // Every derived acronym is exactly four characters
        for acronym in defaults.resource_acronyms.values() {
            assert_eq!(acronym.chars().count(), 4, "acronym {acronym:?}");
        }

        // Storage accounts are lowercase without dashes, and globally scoped
        let storage = "azurerm_storage_account";
        assert_eq!(
            defaults.resource_style_overrides.get(storage),
            Some(&vec!["straight".to_string()])
        );
        assert!(!defaults.regional_resources.contains(storage));

        // Subnets live inside a parent scope
        assert!(defaults.regional_resources.contains("azurerm_subnet"));

        let constraint = &defaults.resource_constraints[storage];
        assert_eq!(constraint.min_len, 3);
        assert_eq!(constraint.max_len, 24);
        assert!(constraint.pattern.is_some());
    }
}
