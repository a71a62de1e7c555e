// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests
//!
//! Verifies properties that must hold for all inputs: determinism of
//! `build_name`, omission of empty components, and separator shape of the
//! formatted output.

use cim_naming::{build_name, BuildInput, NamingConfig, Style};
use proptest::prelude::*;

/// Component-ish strings: alphanumeric runs mixed with separator characters
fn component() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ._-]{0,12}").expect("valid strategy")
}

fn config(org: String, proj: String, env: String) -> NamingConfig {
    NamingConfig {
        org_prefix: org,
        project: proj,
        env,
        region: "us-east-1".to_string(),
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn build_name_is_deterministic(
        org in component(),
        proj in component(),
        env in component(),
        qualifier in component(),
    ) {
        let config = config(org, proj, env);
        let input = BuildInput {
            resource: "vpc".to_string(),
            qualifier,
            ..Default::default()
        };
        let first = build_name(&config, &input).unwrap();
        let second = build_name(&config, &input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn joined_parts_are_never_empty(
        org in component(),
        proj in component(),
        env in component(),
    ) {
        let config = config(org, proj, env);
        let input = BuildInput {
            resource: "vpc".to_string(),
            ..Default::default()
        };
        let result = build_name(&config, &input).unwrap();
        for part in &result.parts {
            prop_assert!(!part.trim().is_empty());
        }
    }

    #[test]
    fn dashed_output_has_clean_separators(parts in proptest::collection::vec(component(), 0..6)) {
        let name = Style::Dashed.format(&parts);
        prop_assert!(!name.starts_with('-'));
        prop_assert!(!name.ends_with('-'));
        prop_assert!(!name.contains("--"));
        // Only lowercase alphanumerics and single dashes survive
        prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn straight_output_is_lowercase_alphanumeric(parts in proptest::collection::vec(component(), 0..6)) {
        let name = Style::Straight.format(&parts);
        prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
