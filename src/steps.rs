//! The six step scripts and how each one is invoked.
//!
//! Every step maps to exactly one script under `scripts/` in the repository
//! root. Instead of assembling paths ad hoc, callers ask a [`Step`] for an
//! [`Invocation`]: the interpreter, the script, the working directory and the
//! environment the script receives.

use std::path::{Path, PathBuf};

use crate::constants::{messages, scripts};
use crate::variables::VariableSet;

/// A single bootstrap step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    RepoStructure,
    TerraformBackend,
    GitHubVariables,
    Workflows,
    ProtectMain,
    UndoBootstrap,
}

impl Step {
    /// All steps in menu order.
    pub const ALL: [Step; 6] = [
        Step::RepoStructure,
        Step::TerraformBackend,
        Step::GitHubVariables,
        Step::Workflows,
        Step::ProtectMain,
        Step::UndoBootstrap,
    ];

    /// Steps performed by "All of the above". Undo is never part of it.
    pub const SEQUENCE: [Step; 5] = [
        Step::RepoStructure,
        Step::TerraformBackend,
        Step::GitHubVariables,
        Step::Workflows,
        Step::ProtectMain,
    ];

    /// 1-based menu number.
    pub fn number(self) -> usize {
        match self {
            Step::RepoStructure => 1,
            Step::TerraformBackend => 2,
            Step::GitHubVariables => 3,
            Step::Workflows => 4,
            Step::ProtectMain => 5,
            Step::UndoBootstrap => 6,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Step::RepoStructure => "Building basic repo structure",
            Step::TerraformBackend => {
                "Setting TF backend structure (S3 + DDB), IAM permissions, and OIDC role in AWS"
            }
            Step::GitHubVariables => "Configuring GitHub variables and secrets",
            Step::Workflows => "Creating cicd gh actions workflows",
            Step::ProtectMain => "Configuring main branch protection rules",
            Step::UndoBootstrap => {
                "Undo step 2, and destroy TF backend (S3 + DDB) and IAM role in AWS"
            }
        }
    }

    /// Script path relative to the repository root.
    pub fn script(self) -> &'static str {
        match self {
            Step::RepoStructure => scripts::REPO_STRUCTURE,
            Step::TerraformBackend => scripts::BOOTSTRAP_TF_AWS,
            Step::GitHubVariables => scripts::SET_GH_VARIABLES,
            Step::Workflows => scripts::WORKFLOW_CI,
            Step::ProtectMain => scripts::PROTECT_MAIN,
            Step::UndoBootstrap => scripts::UNDO_BOOTSTRAP,
        }
    }

    /// Banner printed right before the script runs.
    pub fn banner(self, variables: &VariableSet) -> String {
        let text = match self {
            Step::RepoStructure => {
                let required = variables.required();
                format!(
                    "1- Creating repo structure and remote repo {}/{}",
                    required.gh_owner, required.repo
                )
            }
            Step::TerraformBackend => {
                "2- Setting TF backend structure (S3 + DDB), IAM permissions, and OIDC role in AWS"
                    .to_string()
            }
            Step::GitHubVariables => "3- Configuring GitHub variables and secrets".to_string(),
            Step::Workflows => "4- Creating cicd gh actions workflows".to_string(),
            Step::ProtectMain => "5- Configuring main branch protection rules".to_string(),
            Step::UndoBootstrap => {
                "Undoing step 2: destroying TF backend (S3 + DDB) and IAM role in AWS".to_string()
            }
        };
        format!("####### {} #######", text)
    }

    /// Whether the banner is a warning rather than progress.
    pub fn is_destructive(self) -> bool {
        matches!(self, Step::UndoBootstrap)
    }

    /// Text the operator must acknowledge before the script runs, if any.
    ///
    /// Branch protection needs a paid plan or a public repository.
    pub fn acknowledgment(self) -> Option<&'static str> {
        match self {
            Step::ProtectMain => Some(messages::PROTECT_MAIN_ACK),
            _ => None,
        }
    }

    /// Describe how to run this step against the repository at `root`.
    pub fn invocation(self, root: &Path, shell: &str, variables: &VariableSet) -> Invocation {
        Invocation {
            step: self,
            program: shell.to_string(),
            script: root.join(self.script()),
            working_dir: root.to_path_buf(),
            env: variables.env_pairs(),
        }
    }
}

/// Everything needed to spawn one step script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub step: Step,
    /// Interpreter the script is handed to.
    pub program: String,
    /// Absolute path of the script, passed as the only argument.
    pub script: PathBuf,
    pub working_dir: PathBuf,
    /// Variables set on the child on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

impl Invocation {
    /// Environment variable names the child receives from the variable set.
    pub fn env_keys(&self) -> Vec<&str> {
        self.env.iter().map(|(k, _)| k.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::RequiredVars;

    fn variables() -> VariableSet {
        VariableSet::new(RequiredVars {
            gh_owner: "octo".to_string(),
            repo: "demo".to_string(),
            aws_account_id: "123456789012".to_string(),
            aws_region: "us-east-1".to_string(),
            tf_backend_s3_key: "tf/state".to_string(),
        })
    }

    #[test]
    fn test_numbers_are_contiguous() {
        let numbers: Vec<_> = Step::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_sequence_excludes_undo() {
        assert!(!Step::SEQUENCE.contains(&Step::UndoBootstrap));
        assert_eq!(Step::SEQUENCE[4], Step::ProtectMain);
    }

    #[test]
    fn test_only_protect_main_needs_acknowledgment() {
        for step in Step::ALL {
            assert_eq!(step.acknowledgment().is_some(), step == Step::ProtectMain);
        }
    }

    #[test]
    fn test_banner_includes_repo_path() {
        assert_eq!(
            Step::RepoStructure.banner(&variables()),
            "####### 1- Creating repo structure and remote repo octo/demo #######"
        );
    }

    #[test]
    fn test_invocation_descriptor() {
        let inv = Step::TerraformBackend.invocation(Path::new("/work/demo"), "bash", &variables());
        assert_eq!(inv.program, "bash");
        assert_eq!(
            inv.script,
            PathBuf::from("/work/demo/scripts/2-bootstrap_tf_aws.sh")
        );
        assert_eq!(inv.working_dir, PathBuf::from("/work/demo"));
        assert_eq!(inv.env.len(), 10);
        assert!(inv.env_keys().contains(&"TF_BACKEND_DDB_TABLE"));
        assert!(
            inv.env
                .contains(&("ROLE_NAME".to_string(), "demo-gha-oidc-role".to_string()))
        );
    }
}
