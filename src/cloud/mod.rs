// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud Profiles
//!
//! A cloud profile supplies the per-cloud default tables the naming engine
//! falls back to when a caller's configuration leaves a table empty: region
//! short codes, resource acronyms, allowed-style overrides, structural
//! constraints, and the regional-vs-global classification.
//!
//! Profiles register by normalized cloud identifier; adding a cloud is one
//! registry entry, the engine itself never changes. Every table handed out
//! is a deep copy, so callers can merge their own overrides into it without
//! touching the registry's canonical data.

pub mod aws;
pub mod azure;

use crate::constraint::ResourceConstraint;
use crate::errors::{NamingError, NamingResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Identifier of the AWS profile
pub const CLOUD_AWS: &str = "aws";
/// Identifier of the Azure profile
pub const CLOUD_AZURE: &str = "azure";

/// The five default tables a cloud profile supplies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudDefaults {
    /// Human region name to short code
    pub region_map: HashMap<String, String>,
    /// Resource type to acronym substituted during assembly
    pub resource_acronyms: HashMap<String, String>,
    /// Resource type to the styles its names may use
    pub resource_style_overrides: HashMap<String, Vec<String>>,
    /// Resource type to structural rule set
    pub resource_constraints: HashMap<String, ResourceConstraint>,
    /// Resource types whose region component may be suppressed
    pub regional_resources: HashSet<String>,
}

/// A source of per-cloud default tables
pub trait CloudProfile: Send + Sync {
    /// Normalized identifier this profile registers under
    fn cloud(&self) -> &'static str;

    /// Produce the profile's default tables
    ///
    /// Every call returns an independent deep copy; mutating a returned
    /// table never affects the profile's canonical data.
    fn defaults(&self) -> NamingResult<CloudDefaults>;
}

static PROFILES: Lazy<HashMap<&'static str, &'static dyn CloudProfile>> = Lazy::new(|| {
    static AWS: aws::AwsProfile = aws::AwsProfile;
    static AZURE: azure::AzureProfile = azure::AzureProfile::new();

    let mut profiles: HashMap<&'static str, &'static dyn CloudProfile> = HashMap::new();
    profiles.insert(AWS.cloud(), &AWS);
    profiles.insert(AZURE.cloud(), &AZURE);
    profiles
});

/// The cloud assumed when a configuration names none
pub fn default_cloud() -> &'static str {
    CLOUD_AWS
}

/// Normalize a cloud identifier: trimmed, lowercased, empty maps to the
/// default cloud
pub fn normalize_cloud(cloud: &str) -> String {
    let normalized = cloud.trim().to_lowercase();
    if normalized.is_empty() {
        default_cloud().to_string()
    } else {
        normalized
    }
}

/// Whether a profile is registered for the (normalized) identifier
pub fn is_supported_cloud(cloud: &str) -> bool {
    PROFILES.contains_key(normalize_cloud(cloud).as_str())
}

/// Fetch the default tables for a cloud
///
/// Fails with [`NamingError::UnsupportedCloud`] when no profile is
/// registered under the normalized identifier.
pub fn default_cloud_defaults(cloud: &str) -> NamingResult<CloudDefaults> {
    let normalized = normalize_cloud(cloud);
    let profile = PROFILES
        .get(normalized.as_str())
        .ok_or_else(|| NamingError::UnsupportedCloud(cloud.to_string()))?;
    profile.defaults()
}
