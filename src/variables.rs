//! Variable resolution for the step scripts.
//!
//! Values come from a shell-style definitions file (`NAME="VALUE"` lines),
//! falling back to interactive prompts for any required variable the file
//! leaves empty. The derived names (state bucket, lock table, OIDC role) are
//! computed from the required ones and can never be set directly.

use anyhow::{Context, Result};
use colored::*;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::app_deps::Console;
use crate::constants::{aws, vars};

/// The five values an operator has to provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredVars {
    pub gh_owner: String,
    pub repo: String,
    pub aws_account_id: String,
    pub aws_region: String,
    pub tf_backend_s3_key: String,
}

/// Values computed from [`RequiredVars`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedVars {
    pub tf_backend_s3_bucket: String,
    pub tf_backend_ddb_table: String,
    pub oidc_provider_arn: String,
    pub role_name: String,
    pub role_arn: String,
}

impl DerivedVars {
    /// Compute the derived names. Bucket and table names are lowercased as a
    /// whole, the ARNs keep the operator's casing.
    pub fn from_required(required: &RequiredVars) -> Self {
        let role_name = format!("{}-{}", required.repo, aws::ROLE_SUFFIX);
        Self {
            tf_backend_s3_bucket: format!(
                "{}-{}-{}-{}",
                required.repo,
                aws::STATE_BUCKET_INFIX,
                required.aws_account_id,
                required.aws_region
            )
            .to_lowercase(),
            tf_backend_ddb_table: format!("{}-{}", required.repo, aws::LOCK_TABLE_SUFFIX)
                .to_lowercase(),
            oidc_provider_arn: format!(
                "arn:aws:iam::{}:oidc-provider/{}",
                required.aws_account_id,
                aws::GITHUB_OIDC_HOST
            ),
            role_arn: format!("arn:aws:iam::{}:role/{}", required.aws_account_id, role_name),
            role_name,
        }
    }
}

/// The full, read-only set of variables handed to every step script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSet {
    required: RequiredVars,
    derived: DerivedVars,
}

impl VariableSet {
    pub fn new(required: RequiredVars) -> Self {
        let derived = DerivedVars::from_required(&required);
        Self { required, derived }
    }

    pub fn required(&self) -> &RequiredVars {
        &self.required
    }

    /// All ten entries in their fixed order: required keys first, then derived.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            (vars::GH_OWNER, self.required.gh_owner.as_str()),
            (vars::REPO, self.required.repo.as_str()),
            (vars::AWS_ACCOUNT_ID, self.required.aws_account_id.as_str()),
            (vars::AWS_REGION, self.required.aws_region.as_str()),
            (
                vars::TF_BACKEND_S3_KEY,
                self.required.tf_backend_s3_key.as_str(),
            ),
            (
                vars::TF_BACKEND_S3_BUCKET,
                self.derived.tf_backend_s3_bucket.as_str(),
            ),
            (
                vars::TF_BACKEND_DDB_TABLE,
                self.derived.tf_backend_ddb_table.as_str(),
            ),
            (
                vars::OIDC_PROVIDER_ARN,
                self.derived.oidc_provider_arn.as_str(),
            ),
            (vars::ROLE_NAME, self.derived.role_name.as_str()),
            (vars::ROLE_ARN, self.derived.role_arn.as_str()),
        ]
    }

    /// Look up a value by its variable name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    /// Owned key/value pairs for a child process environment.
    pub fn env_pairs(&self) -> Vec<(String, String)> {
        self.entries()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}

/// Which values are hidden when the variable set is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskPolicy {
    pub enabled: bool,
    pub sensitive_keys: Vec<String>,
}

impl MaskPolicy {
    /// Print every value as-is.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            sensitive_keys: Vec::new(),
        }
    }

    pub fn is_masked(&self, key: &str) -> bool {
        self.enabled && self.sensitive_keys.iter().any(|k| k == key)
    }

    /// Value as it should appear on screen.
    pub fn display_value(&self, key: &str, value: &str) -> String {
        if self.is_masked(key) {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            sensitive_keys: vars::DEFAULT_SENSITIVE_KEYS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

/// Extract every `NAME="VALUE"` pair from a definitions file's contents.
///
/// Lines not matching the pattern are ignored. When a name occurs more than
/// once the last occurrence wins.
pub fn parse_definitions(content: &str) -> Result<HashMap<String, String>> {
    let re = Regex::new(vars::DEFINITION_PATTERN).context("Failed to compile definition regex")?;
    Ok(re
        .captures_iter(content)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect())
}

/// Read a definitions file. A missing file yields an empty map and a warning
/// on `out`.
pub fn read_definitions<W: Write>(path: &Path, out: &mut W) -> Result<HashMap<String, String>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let definitions = parse_definitions(&content)?;
            debug!(path = %path.display(), count = definitions.len(), "read definitions file");
            Ok(definitions)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "definitions file not found");
            writeln!(
                out,
                "{}",
                format!("Warning: File {} not found", path.display()).yellow()
            )?;
            Ok(HashMap::new())
        }
        Err(e) => Err(e)
            .with_context(|| format!("Failed to read definitions file: {}", path.display())),
    }
}

/// Build the variable set from already-parsed definitions, asking the
/// console for anything missing or empty.
pub fn resolve_from(
    definitions: &HashMap<String, String>,
    console: &dyn Console,
) -> Result<VariableSet> {
    let lookup = |key: &str, question: &str| -> Result<String> {
        match definitions.get(key) {
            Some(value) if !value.is_empty() => Ok(value.clone()),
            _ => {
                debug!(key, "prompting for missing variable");
                console
                    .ask(question)
                    .with_context(|| format!("Failed to read a value for {}", key))
            }
        }
    };

    Ok(VariableSet::new(RequiredVars {
        gh_owner: lookup(vars::GH_OWNER, "what is GitHub Owner name? ")?,
        repo: lookup(vars::REPO, "what is the Repo name? ")?,
        aws_account_id: lookup(vars::AWS_ACCOUNT_ID, "what is the AWS Account ID? ")?,
        aws_region: lookup(vars::AWS_REGION, "what is the AWS Region? ")?,
        tf_backend_s3_key: lookup(vars::TF_BACKEND_S3_KEY, "what is the TF Backend S3 Key? ")?,
    }))
}

/// Read the definitions file at `path` and resolve the full variable set.
pub fn resolve<W: Write>(path: &Path, console: &dyn Console, out: &mut W) -> Result<VariableSet> {
    let definitions = read_definitions(path, out)?;
    resolve_from(&definitions, console)
}

/// Print every resolved variable, masking according to `mask`.
pub fn print_variables<W: Write>(
    out: &mut W,
    variables: &VariableSet,
    mask: &MaskPolicy,
) -> Result<()> {
    writeln!(out, "Resolved variables:")?;
    for (key, value) in variables.entries() {
        writeln!(out, "{} = {}", key, mask.display_value(key, value))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(repo: &str, account: &str, region: &str) -> RequiredVars {
        RequiredVars {
            gh_owner: "octo".to_string(),
            repo: repo.to_string(),
            aws_account_id: account.to_string(),
            aws_region: region.to_string(),
            tf_backend_s3_key: "state/terraform.tfstate".to_string(),
        }
    }

    #[test]
    fn test_derived_names_are_lowercased() {
        let derived = DerivedVars::from_required(&required("Foo", "123", "US-East-1"));
        assert_eq!(derived.tf_backend_s3_bucket, "foo-tfstate-123-us-east-1");
        assert_eq!(derived.tf_backend_ddb_table, "foo-tf-locks");
    }

    #[test]
    fn test_role_arn_keeps_repo_casing() {
        let derived = DerivedVars::from_required(&required("Foo", "123456789012", "eu-west-1"));
        assert_eq!(derived.role_name, "Foo-gha-oidc-role");
        assert_eq!(
            derived.role_arn,
            "arn:aws:iam::123456789012:role/Foo-gha-oidc-role"
        );
        assert_eq!(
            derived.oidc_provider_arn,
            "arn:aws:iam::123456789012:oidc-provider/token.actions.githubusercontent.com"
        );
    }

    #[test]
    fn test_parse_definitions_ignores_other_lines() {
        let content = r#"#!/bin/bash
# comment
export PATH="/usr/bin"
GH_OWNER="octo"
  REPO="demo"
lower="ignored"
AWS_REGION=unquoted
echo "GH_OWNER=\"nope\""
"#;
        let defs = parse_definitions(content).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs["GH_OWNER"], "octo");
        assert_eq!(defs["REPO"], "demo");
    }

    #[test]
    fn test_parse_definitions_last_duplicate_wins() {
        let defs = parse_definitions("REPO=\"first\"\nREPO=\"second\"\n").unwrap();
        assert_eq!(defs["REPO"], "second");
    }

    #[test]
    fn test_parse_definitions_keeps_empty_value() {
        let defs = parse_definitions("AWS_REGION=\"\"\n").unwrap();
        assert_eq!(defs.get("AWS_REGION").map(String::as_str), Some(""));
    }

    #[test]
    fn test_entries_order() {
        let set = VariableSet::new(required("demo", "1", "r"));
        let keys: Vec<_> = set.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "GH_OWNER",
                "REPO",
                "AWS_ACCOUNT_ID",
                "AWS_REGION",
                "TF_BACKEND_S3_KEY",
                "TF_BACKEND_S3_BUCKET",
                "TF_BACKEND_DDB_TABLE",
                "OIDC_PROVIDER_ARN",
                "ROLE_NAME",
                "ROLE_ARN",
            ]
        );
        assert_eq!(set.get("ROLE_NAME"), Some("demo-gha-oidc-role"));
        assert_eq!(set.get("VPC_CIDR"), None);
    }

    #[test]
    fn test_mask_policy_default_hides_account_values() {
        let mask = MaskPolicy::default();
        assert_eq!(mask.display_value("AWS_ACCOUNT_ID", "1234"), "••••");
        assert_eq!(mask.display_value("REPO", "demo"), "demo");
        assert!(mask.is_masked("ROLE_ARN"));
        assert!(!MaskPolicy::disabled().is_masked("ROLE_ARN"));
    }

    #[test]
    fn test_print_variables_masked_and_unmasked() {
        let set = VariableSet::new(required("demo", "123", "us-east-1"));

        let mut masked = Vec::new();
        print_variables(&mut masked, &set, &MaskPolicy::default()).unwrap();
        let masked = String::from_utf8(masked).unwrap();
        assert!(masked.starts_with("Resolved variables:\n"));
        assert!(masked.contains("AWS_ACCOUNT_ID = •••\n"));
        assert!(masked.contains("REPO = demo\n"));
        assert!(!masked.contains("123"));

        let mut plain = Vec::new();
        print_variables(&mut plain, &set, &MaskPolicy::disabled()).unwrap();
        let plain = String::from_utf8(plain).unwrap();
        assert!(plain.contains("AWS_ACCOUNT_ID = 123\n"));
        assert!(plain.contains("ROLE_ARN = arn:aws:iam::123:role/demo-gha-oidc-role\n"));
    }
}
