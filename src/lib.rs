//! # repo-bootstrap
//!
//! An interactive menu that prepares a GitHub repository for Terraform on
//! AWS with GitHub Actions CI/CD, by running a fixed set of setup scripts.
//!
//! This library provides functionality to:
//! - Resolve the bootstrap variables from a definitions file or prompts
//! - Derive the Terraform backend and OIDC role names from them
//! - Run each setup script with those variables in its environment
//! - Drive the whole flow from a numbered menu
//!
//! ## Modules
//!
//! - [`variables`] - Definitions parsing, derived names and masking
//! - [`steps`] - The setup steps and their invocation descriptors
//! - [`runner`] - Child process execution
//! - [`menu`] - Menu entries, rendering and selection parsing
//! - [`app`] - The menu loop
//! - [`config`] - Settings file parsing
//! - [`paths`] - Settings file lookup
//! - [`error`] - Error formatting utilities
//! - [`errors`] - Structured error types
//! - [`constants`] - Application constants

pub mod app;
pub mod app_deps;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod errors;
pub mod menu;
pub mod paths;
pub mod prompt;
pub mod runner;
pub mod steps;
pub mod variables;
pub mod workspace;
