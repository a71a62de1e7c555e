// Copyright (c) 2025 - Cowboy AI, Inc.
//! Naming Engine
//!
//! Builds one validated resource name per call from a standing
//! [`NamingConfig`] and a per-call [`BuildInput`]: fills empty configuration
//! tables from the cloud profile, resolves the region code and resource
//! acronym, applies overrides, assembles the recipe, selects a style,
//! formats, and validates the result against the resource type's
//! constraints.
//!
//! [`build_name`] is a pure function of its two inputs (plus the read-only
//! profile registry) and may be called concurrently from any number of
//! callers.
//!
//! # Examples
//!
//! ```rust
//! use cim_naming::{build_name, BuildInput, NamingConfig};
//!
//! let config = NamingConfig {
//!     org_prefix: "acme".to_string(),
//!     env: "prod".to_string(),
//!     region: "us-east-1".to_string(),
//!     ..Default::default()
//! };
//! let input = BuildInput {
//!     resource: "s3_bucket".to_string(),
//!     qualifier: "logs".to_string(),
//!     ..Default::default()
//! };
//!
//! let result = build_name(&config, &input).unwrap();
//! assert_eq!(result.name, "acme-prod-use1-s3bk-logs");
//! ```

use crate::cloud::{self, CloudDefaults};
use crate::component::{self, ComponentKey};
use crate::constraint::{self, ResourceConstraint};
use crate::errors::NamingResult;
use crate::style::{self, Style};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// The caller's standing naming settings
///
/// Any of the five table-valued fields left empty falls back to the selected
/// cloud's defaults when a name is built. The fallback is all-or-nothing per
/// table, never per key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Target cloud; empty selects the default cloud
    pub cloud: String,
    /// Organization prefix component
    pub org_prefix: String,
    /// Project component
    pub project: String,
    /// Environment component
    pub env: String,
    /// Human region name, resolved through the region map
    pub region: String,
    /// Explicit region short code; takes precedence over `region`
    pub region_short_code: String,
    /// Human region name to short code
    pub region_map: HashMap<String, String>,
    /// Ordered component keys determining which parts appear, and in what
    /// order
    pub recipe: Vec<String>,
    /// Ordered style preference list
    pub style_priority: Vec<String>,
    /// Resource type to acronym
    pub resource_acronyms: HashMap<String, String>,
    /// Resource type to the styles its names may use
    pub resource_style_overrides: HashMap<String, Vec<String>>,
    /// Resource type to structural rule set
    pub resource_constraints: HashMap<String, ResourceConstraint>,
    /// Resource types considered region-scoped
    pub regional_resources: HashSet<String>,
    /// Blank the region component for regional resources
    pub ignore_region_for_regional_resources: bool,
}

/// Per-call parameters for one name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildInput {
    /// Resource type identifier
    pub resource: String,
    /// Free-form qualifier component
    pub qualifier: String,
    /// Component overrides, applied after defaults and regional suppression
    /// and before recipe assembly; the highest-precedence source for any
    /// single component
    pub overrides: BTreeMap<String, String>,
    /// Replaces (never merges with) the configuration's recipe
    pub recipe: Vec<String>,
    /// Replaces (never merges with) the configuration's style priority
    pub style_priority: Vec<String>,
}

/// The fully-resolved outcome of one build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildResult {
    /// The final validated name
    pub name: String,
    /// The style actually used
    pub style: Style,
    /// The full resolved component map, overrides included
    pub components: BTreeMap<String, String>,
    /// The ordered non-empty parts that were joined
    pub parts: Vec<String>,
    /// The resolved region short code
    pub region_code: String,
    /// The resolved resource acronym
    pub resource_acronym: String,
}

/// Build one validated resource name
///
/// Deterministic and total over well-formed inputs; fails only on an
/// unsupported cloud when defaults must be fetched, a derived-profile decode
/// failure, or a constraint violation on the final name. There is no partial
/// result on error.
pub fn build_name(config: &NamingConfig, input: &BuildInput) -> NamingResult<BuildResult> {
    let mut effective = config.clone();
    merge_cloud_defaults(&mut effective)?;

    // Region: explicit short code, then map lookup, then the human name
    // verbatim.
    let mut region_code = effective.region_short_code.trim().to_string();
    let region = effective.region.trim();
    if region_code.is_empty() && !region.is_empty() {
        region_code = effective
            .region_map
            .get(region)
            .map(|code| code.trim().to_string())
            .unwrap_or_default();
        if region_code.is_empty() {
            region_code = region.to_string();
        }
    }

    // Acronym: unknown resource types keep the caller's literal string.
    let resource_key = input.resource.trim().to_lowercase();
    let mut resource_acronym = input.resource.trim().to_string();
    if !resource_key.is_empty() {
        if let Some(acronym) = effective.resource_acronyms.get(&resource_key) {
            if !acronym.is_empty() {
                resource_acronym = acronym.clone();
            }
        }
    }

    let mut components: BTreeMap<String, String> = BTreeMap::from([
        (key(ComponentKey::Org), effective.org_prefix.trim().to_string()),
        (key(ComponentKey::Proj), effective.project.trim().to_string()),
        (key(ComponentKey::Env), effective.env.trim().to_string()),
        (key(ComponentKey::Region), region_code),
        (key(ComponentKey::Resource), resource_acronym),
        (key(ComponentKey::Qualifier), input.qualifier.trim().to_string()),
    ]);

    if effective.ignore_region_for_regional_resources
        && !resource_key.is_empty()
        && effective.regional_resources.contains(&resource_key)
    {
        debug!("Suppressing region component for regional resource: {}", resource_key);
        components.insert(key(ComponentKey::Region), String::new());
    }

    // Overrides win over everything resolved above, including a region
    // blanked by suppression. Unrecognized keys become free-form components.
    for (raw_key, value) in &input.overrides {
        let raw_key = raw_key.trim();
        if raw_key.is_empty() {
            continue;
        }
        let canonical = component::canonical_component_name(raw_key);
        if components.contains_key(&canonical) {
            components.insert(canonical, value.trim().to_string());
        } else {
            components.insert(raw_key.to_string(), value.trim().to_string());
        }
    }
    let region_code = components[ComponentKey::Region.as_str()].clone();

    // Recipe: call-level replaces config-level replaces the canonical
    // default order.
    let default_recipe;
    let recipe: &[String] = if !input.recipe.is_empty() {
        &input.recipe
    } else if !effective.recipe.is_empty() {
        &effective.recipe
    } else {
        default_recipe = component::default_recipe();
        &default_recipe
    };

    let mut parts = Vec::with_capacity(recipe.len());
    for entry in recipe {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let canonical = component::canonical_component_name(entry);
        let value = components
            .get(&canonical)
            .or_else(|| components.get(entry))
            .map(String::as_str)
            .unwrap_or_default();
        // Empty components are dropped, never rendered as a blank segment
        if value.is_empty() {
            continue;
        }
        parts.push(value.to_string());
    }

    let chosen = select_style(&effective, input, &resource_key);
    debug!("Selected style {} for resource {:?}", chosen, resource_key);

    let name = chosen.format(&parts);
    constraint::validate(&resource_key, &name, &effective.resource_constraints)?;

    Ok(BuildResult {
        name,
        style: chosen,
        region_code,
        resource_acronym: components[ComponentKey::Resource.as_str()].clone(),
        components,
        parts,
    })
}

fn key(component: ComponentKey) -> String {
    component.as_str().to_string()
}

/// Fill empty configuration tables from the cloud profile
fn merge_cloud_defaults(config: &mut NamingConfig) -> NamingResult<()> {
    let complete = !config.region_map.is_empty()
        && !config.resource_acronyms.is_empty()
        && !config.resource_style_overrides.is_empty()
        && !config.resource_constraints.is_empty()
        && !config.regional_resources.is_empty();
    if complete {
        return Ok(());
    }

    let CloudDefaults {
        region_map,
        resource_acronyms,
        resource_style_overrides,
        resource_constraints,
        regional_resources,
    } = cloud::default_cloud_defaults(&config.cloud)?;

    if config.region_map.is_empty() {
        config.region_map = region_map;
    }
    if config.resource_acronyms.is_empty() {
        config.resource_acronyms = resource_acronyms;
    }
    if config.resource_style_overrides.is_empty() {
        config.resource_style_overrides = resource_style_overrides;
    }
    if config.resource_constraints.is_empty() {
        config.resource_constraints = resource_constraints;
    }
    if config.regional_resources.is_empty() {
        config.regional_resources = regional_resources;
    }
    Ok(())
}

/// Walk the style priority list and pick the first recognized style the
/// resource's allowed subset (if any) admits
///
/// When nothing in the list matches, the dashed default applies, but only if
/// the restriction admits it; a restricted resource otherwise gets its first
/// allowed style, so a restriction is never silently violated.
fn select_style(config: &NamingConfig, input: &BuildInput, resource_key: &str) -> Style {
    let default_priority;
    let priority: &[String] = if !input.style_priority.is_empty() {
        &input.style_priority
    } else if !config.style_priority.is_empty() {
        &config.style_priority
    } else {
        default_priority = style::default_style_priority();
        &default_priority
    };

    let allowed: Vec<Style> = if resource_key.is_empty() {
        Vec::new()
    } else {
        config
            .resource_style_overrides
            .get(resource_key)
            .map(|names| names.iter().filter_map(|name| Style::from_name(name)).collect())
            .unwrap_or_default()
    };

    priority
        .iter()
        .filter_map(|name| Style::from_name(name))
        .find(|candidate| allowed.is_empty() || allowed.contains(candidate))
        .unwrap_or_else(|| {
            if allowed.is_empty() || allowed.contains(&Style::Dashed) {
                Style::Dashed
            } else {
                allowed[0]
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restricted_config(styles: &[&str]) -> NamingConfig {
        NamingConfig {
            resource_style_overrides: HashMap::from([(
                "s3_bucket".to_string(),
                styles.iter().map(|s| s.to_string()).collect(),
            )]),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_style_honors_restriction() {
        let config = restricted_config(&["straight"]);
        let input = BuildInput::default();
        assert_eq!(select_style(&config, &input, "s3_bucket"), Style::Straight);
    }

    #[test]
    fn test_select_style_dashed_fallback_checked_against_restriction() {
        let config = restricted_config(&["underscore"]);
        let input = BuildInput {
            style_priority: vec!["pascal".to_string()],
            ..Default::default()
        };
        // Priority has no allowed member and dashed itself is restricted out
        assert_eq!(select_style(&config, &input, "s3_bucket"), Style::Underscore);
    }

    #[test]
    fn test_select_style_unrecognized_restriction_ignored() {
        let config = restricted_config(&["kebab", "screaming"]);
        let input = BuildInput::default();
        assert_eq!(select_style(&config, &input, "s3_bucket"), Style::Dashed);
    }

    #[test]
    fn test_select_style_call_priority_replaces_config() {
        let config = NamingConfig {
            style_priority: vec!["pascal".to_string()],
            ..Default::default()
        };
        let input = BuildInput {
            style_priority: vec!["camel".to_string()],
            ..Default::default()
        };
        assert_eq!(select_style(&config, &input, "anything"), Style::Camel);
    }

    #[test]
    fn test_select_style_skips_unrecognized_priority_entries() {
        let config = NamingConfig {
            style_priority: vec!["kebab".to_string(), "underscore".to_string()],
            ..Default::default()
        };
        assert_eq!(select_style(&config, &BuildInput::default(), ""), Style::Underscore);
    }

    #[test]
    fn test_merge_cloud_defaults_unsupported_cloud() {
        let mut config = NamingConfig {
            cloud: "gcp".to_string(),
            ..Default::default()
        };
        assert!(merge_cloud_defaults(&mut config).is_err());
    }

    #[test]
    fn test_merge_cloud_defaults_preserves_caller_tables() {
        let mut config = NamingConfig {
            region_map: HashMap::from([("somewhere".to_string(), "smw1".to_string())]),
            ..Default::default()
        };
        merge_cloud_defaults(&mut config).unwrap();
        // Caller's table kept whole, not merged per key
        assert_eq!(config.region_map.len(), 1);
        // Empty tables filled from the AWS profile
        assert!(!config.resource_acronyms.is_empty());
    }
}
