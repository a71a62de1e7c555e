//! Deterministic resource naming for the Composable Information Machine
//!
//! This crate generates standardized, validated names for cloud
//! infrastructure resources from a declarative recipe: which components
//! appear (organization, project, environment, region, resource acronym,
//! qualifier, or custom), in what order, and under which casing convention.
//! Per-cloud profiles supply default region codes, resource acronyms, style
//! restrictions, and the structural constraints each platform enforces on
//! names.
//!
//! The engine performs no I/O, retains no state between calls, and may be
//! invoked concurrently; the host embedding it (a Terraform provider, a CLI,
//! a projection service) owns all transport and marshaling concerns.

pub mod cloud;
pub mod component;
pub mod constraint;
pub mod engine;
pub mod errors;
pub mod style;

// Re-export commonly used types
pub use cloud::{
    default_cloud, default_cloud_defaults, is_supported_cloud, normalize_cloud, CloudDefaults,
    CloudProfile,
};
pub use component::{default_recipe, ComponentKey};
pub use constraint::ResourceConstraint;
pub use engine::{build_name, BuildInput, BuildResult, NamingConfig};
pub use errors::{NamingError, NamingResult, RuleViolation};
pub use style::{default_style_priority, Style};
