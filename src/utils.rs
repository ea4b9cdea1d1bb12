//! Utility functions and helpers.

pub mod preflight;
pub mod settings;

pub use preflight::{
    check_git_repository, check_github_token, configured_github_token, GITHUB_TOKEN_VAR,
};
pub use settings::{get_env_var, Settings};
