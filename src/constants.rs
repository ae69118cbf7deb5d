//! Application constants for file locations, variable names, ARN templates,
//! step scripts and operator-facing messages.
//!
//! This module contains all constant values used throughout the application.

/// Default file locations.
pub mod paths {
    /// Definitions file, relative to the directory the tool is started from.
    pub const DEFINITIONS_FILE: &str = "scripts/0-variables.sh";

    /// Settings file looked up in the current directory.
    pub const LOCAL_SETTINGS_FILE: &str = "repo-bootstrap.toml";

    /// Directory name under the XDG config home.
    pub const APP_DIR: &str = "repo-bootstrap";

    /// Settings file name inside [`APP_DIR`].
    pub const SETTINGS_FILE: &str = "config.toml";
}

/// Variable names handed to the step scripts.
pub mod vars {
    pub const GH_OWNER: &str = "GH_OWNER";
    pub const REPO: &str = "REPO";
    pub const AWS_ACCOUNT_ID: &str = "AWS_ACCOUNT_ID";
    pub const AWS_REGION: &str = "AWS_REGION";
    pub const TF_BACKEND_S3_KEY: &str = "TF_BACKEND_S3_KEY";

    pub const TF_BACKEND_S3_BUCKET: &str = "TF_BACKEND_S3_BUCKET";
    pub const TF_BACKEND_DDB_TABLE: &str = "TF_BACKEND_DDB_TABLE";
    pub const OIDC_PROVIDER_ARN: &str = "OIDC_PROVIDER_ARN";
    pub const ROLE_NAME: &str = "ROLE_NAME";
    pub const ROLE_ARN: &str = "ROLE_ARN";

    /// Pattern for a `NAME="VALUE"` definition line.
    pub const DEFINITION_PATTERN: &str = r#"(?m)^\s*([A-Z_][A-Z0-9_]*)="([^"]*)""#;

    /// Keys masked when printing, unless masking is turned off.
    pub const DEFAULT_SENSITIVE_KEYS: [&str; 4] = [
        AWS_ACCOUNT_ID,
        TF_BACKEND_S3_BUCKET,
        OIDC_PROVIDER_ARN,
        ROLE_ARN,
    ];
}

/// AWS naming used by the derived variables.
pub mod aws {
    /// Host of the GitHub Actions OIDC token issuer.
    pub const GITHUB_OIDC_HOST: &str = "token.actions.githubusercontent.com";

    pub const STATE_BUCKET_INFIX: &str = "tfstate";
    pub const LOCK_TABLE_SUFFIX: &str = "tf-locks";
    pub const ROLE_SUFFIX: &str = "gha-oidc-role";
}

/// Step scripts, relative to the repository root.
pub mod scripts {
    pub const REPO_STRUCTURE: &str = "scripts/1-repo_structure.sh";
    pub const BOOTSTRAP_TF_AWS: &str = "scripts/2-bootstrap_tf_aws.sh";
    pub const SET_GH_VARIABLES: &str = "scripts/3-set_gh_variables.sh";
    pub const WORKFLOW_CI: &str = "scripts/4-workflow_ci.sh";
    pub const PROTECT_MAIN: &str = "scripts/5-protect_main.sh";
    pub const UNDO_BOOTSTRAP: &str = "scripts/undo_bootstrap.sh";

    /// Interpreter used when no other shell is configured.
    pub const DEFAULT_SHELL: &str = "bash";
}

/// Operator-facing messages.
pub mod messages {
    pub const PROTECT_MAIN_ACK: &str = "This would require to upgrade to GH plus or change this repo to PUBLIC. Press [Enter] to continue...";
    pub const RUN_ALL_ACK: &str = "press enter to continue. This would require to upgrade to GH plus or change this repo to PUBLIC. Press [Enter] to continue...";
    pub const MENU_PROMPT: &str = "Enter the configuration step number you want to apply: ";
    pub const INVALID_CHOICE: &str =
        "Invalid choice. Please run the script again and select a valid option.";
}

/// Process exit statuses not taken from a child.
pub mod exit {
    pub const INVALID_CHOICE: i32 = 2;
    pub const FAILURE: i32 = 1;
}
