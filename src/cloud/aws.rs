// Copyright (c) 2025 - Cowboy AI, Inc.
//! AWS Cloud Profile
//!
//! Default tables for AWS, computed eagerly from hard-coded literals: the
//! region short-code map, the resource acronym table, style restrictions for
//! resources with strict naming rules, structural constraints for the
//! services that enforce them, and the regional set (every known resource
//! minus the globally-scoped ones).

use super::{CloudDefaults, CloudProfile, CLOUD_AWS};
use crate::constraint::ResourceConstraint;
use crate::errors::NamingResult;
use crate::style::Style;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// The eagerly-computed AWS profile
pub struct AwsProfile;

impl CloudProfile for AwsProfile {
    fn cloud(&self) -> &'static str {
        CLOUD_AWS
    }

    fn defaults(&self) -> NamingResult<CloudDefaults> {
        Ok(CloudDefaults {
            region_map: default_region_map(),
            resource_acronyms: default_resource_acronyms(),
            resource_style_overrides: default_resource_style_overrides(),
            resource_constraints: default_resource_constraints(),
            regional_resources: default_regional_resources(),
        })
    }
}

const REGION_CODES: &[(&str, &str)] = &[
    ("us-east-1", "use1"),
    ("us-east-2", "use2"),
    ("us-west-1", "usw1"),
    ("us-west-2", "usw2"),
    ("af-south-1", "afs1"),
    ("ap-east-1", "ape1"),
    ("ap-south-1", "aps1"),
    ("ap-south-2", "aps2"),
    ("ap-southeast-1", "apse1"),
    ("ap-southeast-2", "apse2"),
    ("ap-southeast-3", "apse3"),
    ("ap-southeast-4", "apse4"),
    ("ap-northeast-1", "apne1"),
    ("ap-northeast-2", "apne2"),
    ("ap-northeast-3", "apne3"),
    ("ca-central-1", "cac1"),
    ("ca-west-1", "caw1"),
    ("cn-north-1", "cnn1"),
    ("cn-northwest-1", "cnnw1"),
    ("eu-central-1", "euc1"),
    ("eu-central-2", "euc2"),
    ("eu-west-1", "euw1"),
    ("eu-west-2", "euw2"),
    ("eu-west-3", "euw3"),
    ("eu-west-4", "euw4"),
    ("eu-north-1", "eun1"),
    ("eu-south-1", "eus1"),
    ("eu-south-2", "eus2"),
    ("il-central-1", "ilc1"),
    ("me-south-1", "mes1"),
    ("me-central-1", "mec1"),
    ("sa-east-1", "sae1"),
    ("us-gov-west-1", "usgw1"),
    ("us-gov-east-1", "usge1"),
];

const RESOURCE_ACRONYMS: &[(&str, &str)] = &[
    ("role", "role"),
    ("role_policy", "rlpl"),
    ("iam_role", "role"),
    ("iam_policy", "iamp"),
    ("iam_user", "iamu"),
    ("iam_group", "iamg"),
    ("s3", "s3b"),
    ("s3_bucket", "s3bk"),
    ("s3_object", "s3ob"),
    ("s3_access_point", "s3ap"),
    ("s3_table", "s3tb"),
    ("s3_dir", "s3dr"),
    ("sns", "sns"),
    ("sqs", "sqs"),
    ("ecs_cluster", "ecsc"),
    ("ecs_service", "ecss"),
    ("ecs_task", "ecst"),
    ("eks", "eks"),
    ("eks_cluster", "eksc"),
    ("eks_node_group", "ekng"),
    ("msk_cluster", "mskc"),
    ("vpc", "vpcn"),
    ("subnet", "subn"),
    ("igw", "igtw"),
    ("nat_gw", "ngtw"),
    ("sec_group", "scgp"),
    ("nacl", "nacl"),
    ("route_table", "rttb"),
    ("elastic_ip", "elip"),
    ("wafv2_web_acl", "wfac"),
    ("wafv2_web_acl_rule", "wfar"),
    ("wafv2_ip_set", "wfis"),
    ("lambda", "lmbd"),
    ("api_gateway_rest_api", "agra"),
    ("api_gateway_model", "agmd"),
    ("api_gateway_v2", "agv2"),
    ("log_group", "logg"),
    ("cloudwatch_log_group", "cwlg"),
    ("cloudwatch_alarm", "cwal"),
    ("eventbridge_bus", "evbb"),
    ("eventbridge_rule", "evbr"),
    ("step_function", "stfn"),
    ("sfn", "stfn"),
    ("dynamodb", "dydb"),
    ("dynamodb_table", "dybt"),
    ("rds", "rds"),
    ("rds_cluster", "rdsc"),
    ("aurora_cluster", "arcl"),
    ("redshift", "rdsh"),
    ("elasticache", "elch"),
    ("opensearch", "opsr"),
    ("elasticsearch", "elsr"),
    ("ecr", "ecr"),
    ("ecs", "ecs"),
    ("ec2_instance", "ec2i"),
    ("launch_template", "lcht"),
    ("autoscaling_group", "asgr"),
    ("alb", "albl"),
    ("nlb", "nlbl"),
    ("elb", "elbl"),
    ("target_group", "tgpt"),
    ("cloudfront", "clfr"),
    ("route53_zone", "rt53"),
    ("route53_record", "r53r"),
    ("acm_cert", "acmc"),
    ("kms_key", "kmsk"),
    ("secretsmanager_secret", "smse"),
    ("ssm_parameter", "ssmp"),
    ("cloudtrail", "ctra"),
    ("guardduty", "gdty"),
    ("config_rule", "cfrl"),
    ("efs", "efs"),
    ("ebs", "ebs"),
    ("athena", "athn"),
    ("glue", "glue"),
    ("sagemaker", "sgmk"),
    ("codebuild", "cdbd"),
    ("codepipeline", "cdpl"),
    ("codedeploy", "cddp"),
    ("cloudformation_stack", "cfst"),
    ("appsync", "apsy"),
    ("snow_notification_integration", "snti"),
];

/// Resource types whose identity is not region-scoped
const GLOBAL_RESOURCES: &[&str] = &[
    "role",
    "role_policy",
    "iam_role",
    "iam_policy",
    "iam_user",
    "iam_group",
    "cloudfront",
    "route53_zone",
    "route53_record",
];

/// Human region name to short code
pub fn default_region_map() -> HashMap<String, String> {
    REGION_CODES
        .iter()
        .map(|(region, code)| (region.to_string(), code.to_string()))
        .collect()
}

/// Resource type to acronym
pub fn default_resource_acronyms() -> HashMap<String, String> {
    RESOURCE_ACRONYMS
        .iter()
        .map(|(resource, acronym)| (resource.to_string(), acronym.to_string()))
        .collect()
}

/// Resource types with global (non-regional) scope
pub fn default_global_resources() -> HashSet<String> {
    GLOBAL_RESOURCES.iter().map(|r| r.to_string()).collect()
}

/// Every known resource type minus the global set
pub fn default_regional_resources() -> HashSet<String> {
    let global = default_global_resources();
    RESOURCE_ACRONYMS
        .iter()
        .map(|(resource, _)| resource.to_string())
        .filter(|resource| !global.contains(resource))
        .collect()
}

/// Style restrictions for resources with strict lowercase naming rules
pub fn default_resource_style_overrides() -> HashMap<String, Vec<String>> {
    let lowercase_only = vec![
        Style::Dashed.as_str().to_string(),
        Style::Straight.as_str().to_string(),
    ];
    HashMap::from([
        ("s3".to_string(), lowercase_only.clone()),
        ("s3_bucket".to_string(), lowercase_only),
    ])
}

/// Structural constraints for the AWS services that enforce naming rules
pub fn default_resource_constraints() -> HashMap<String, ResourceConstraint> {
    let mut constraints = HashMap::new();

    constraints.insert("s3".to_string(), s3_bucket_constraint());
    constraints.insert("s3_bucket".to_string(), s3_bucket_constraint());

    for (resource, max_len) in [
        ("role", 64),
        ("iam_role", 64),
        ("iam_user", 64),
        ("iam_group", 128),
        ("iam_policy", 128),
        ("role_policy", 128),
    ] {
        constraints.insert(resource.to_string(), iam_name_constraint(max_len));
    }

    for (resource, max_len, noun) in [
        ("sns", 256, "topics"),
        ("sns_topic", 256, "topics"),
        ("sqs", 80, "queues"),
        ("sqs_queue", 80, "queues"),
    ] {
        constraints.insert(resource.to_string(), fifo_name_constraint(max_len, noun));
    }

    constraints.insert(
        "lambda".to_string(),
        ResourceConstraint {
            min_len: 1,
            max_len: 64,
            pattern: compile(r"^[a-zA-Z0-9-_]+$"),
            pattern_description: "letters, numbers, hyphens, and underscores".to_string(),
            ..Default::default()
        },
    );

    constraints.insert(
        "kms_alias".to_string(),
        ResourceConstraint {
            min_len: 1,
            max_len: 256,
            pattern: compile(r"^alias/[a-zA-Z0-9/_-]+$"),
            pattern_description:
                "must begin with alias/ and contain only letters, numbers, slashes, underscores, and hyphens"
                    .to_string(),
            forbidden_prefixes: vec!["alias/aws/".to_string()],
            ..Default::default()
        },
    );

    for resource in ["log_group", "cloudwatch_log_group"] {
        constraints.insert(
            resource.to_string(),
            ResourceConstraint {
                min_len: 1,
                max_len: 512,
                pattern: compile(r"^[a-zA-Z0-9_\-/.#]+$"),
                pattern_description: "letters, numbers, underscore, hyphen, slash, period, and #"
                    .to_string(),
                forbidden_prefixes: vec!["aws/".to_string()],
                ..Default::default()
            },
        );
    }

    for resource in ["sec_group", "security_group"] {
        constraints.insert(
            resource.to_string(),
            ResourceConstraint {
                min_len: 1,
                max_len: 255,
                pattern: compile(r"^[a-zA-Z0-9 ._\-:/()#,@\[\]+=&;{}!$*]+$"),
                pattern_description: "letters, numbers, spaces, and ._-:/()#,@[]+=&;{}!$*"
                    .to_string(),
                forbidden_prefixes: vec!["sg-".to_string()],
                case_insensitive: true,
                ..Default::default()
            },
        );
    }

    constraints
}

fn s3_bucket_constraint() -> ResourceConstraint {
    ResourceConstraint {
        min_len: 3,
        max_len: 63,
        pattern: compile(r"^[a-z0-9][a-z0-9.-]*[a-z0-9]$"),
        pattern_description:
            "lowercase letters, numbers, dots, and hyphens; must start and end with a letter or number"
                .to_string(),
        forbidden_prefixes: vec![
            "xn--".to_string(),
            "sthree-".to_string(),
            "amzn-s3-demo-".to_string(),
        ],
        forbidden_suffixes: vec!["-s3alias".to_string(), "--ol-s3".to_string()],
        forbidden_substrings: vec!["..".to_string()],
        disallow_ip_address: true,
        ..Default::default()
    }
}

fn iam_name_constraint(max_len: usize) -> ResourceConstraint {
    ResourceConstraint {
        min_len: 1,
        max_len,
        pattern: compile(r"^[a-zA-Z0-9+=,.@_-]+$"),
        pattern_description: "alphanumeric and the following: +=,.@_-".to_string(),
        ..Default::default()
    }
}

fn fifo_name_constraint(max_len: usize, noun: &str) -> ResourceConstraint {
    ResourceConstraint {
        min_len: 1,
        max_len,
        pattern: compile(r"^[a-zA-Z0-9_-]+(\.fifo)?$"),
        pattern_description: format!(
            "letters, numbers, underscores, and hyphens; FIFO {noun} must end with .fifo"
        ),
        ..Default::default()
    }
}

fn compile(source: &str) -> Option<Regex> {
    // All sources are literals in this module
    Some(Regex::new(source).expect("constraint pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::validate;

    #[test]
    fn test_region_map_spot_checks() {
        let regions = default_region_map();
        assert_eq!(regions.get("us-east-1").map(String::as_str), Some("use1"));
        assert_eq!(regions.get("eu-central-2").map(String::as_str), Some("euc2"));
        assert_eq!(regions.get("us-gov-east-1").map(String::as_str), Some("usge1"));
        assert_eq!(regions.len(), 34);
    }

    #[test]
    fn test_acronym_spot_checks() {
        let acronyms = default_resource_acronyms();
        assert_eq!(acronyms.get("s3_bucket").map(String::as_str), Some("s3bk"));
        assert_eq!(acronyms.get("lambda").map(String::as_str), Some("lmbd"));
        assert_eq!(acronyms.get("step_function"), acronyms.get("sfn"));
    }

    #[test]
    fn test_global_resources_are_not_regional() {
        let regional = default_regional_resources();
        assert!(!regional.contains("iam_role"));
        assert!(!regional.contains("cloudfront"));
        assert!(regional.contains("s3_bucket"));
        assert!(regional.contains("vpc"));
    }

    #[test]
    fn test_s3_constraint_enforced() {
        let constraints = default_resource_constraints();
        assert!(validate("s3_bucket", "acme-prod-use1-s3bk-logs", &constraints).is_ok());
        assert!(validate("s3_bucket", "ab", &constraints).is_err());
        assert!(validate("s3_bucket", "xn--bucket", &constraints).is_err());
        assert!(validate("s3_bucket", "10.0.0.1", &constraints).is_err());
    }

    #[test]
    fn test_fifo_suffix_allowed() {
        let constraints = default_resource_constraints();
        assert!(validate("sqs", "orders.fifo", &constraints).is_ok());
        assert!(validate("sqs", "orders.queue", &constraints).is_err());
    }

    #[test]
    fn test_kms_alias_reserved_prefix() {
        let constraints = default_resource_constraints();
        assert!(validate("kms_alias", "alias/acme/signing", &constraints).is_ok());
        assert!(validate("kms_alias", "alias/aws/s3", &constraints).is_err());
        assert!(validate("kms_alias", "acme-signing", &constraints).is_err());
    }
}
