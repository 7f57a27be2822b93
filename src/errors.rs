use std::path::PathBuf;
use thiserror::Error;

/// The central error type for devnanny.
///
/// Only two kinds are fatal for the balloon itself: a configuration that
/// leaves no room for text, and an art resource that cannot be read. Both
/// surface at construction time, never from `decorate`.
#[derive(Error, Debug)]
pub enum NannyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not load art from {path}: {message}")]
    ResourceLoad { path: PathBuf, message: String },

    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),
}

#[derive(Error, Debug)]
pub enum HookError {
    #[error("Another {hook} hook already exists at {path}")]
    AlreadyExists { hook: String, path: PathBuf },

    #[error("Directory \"{0}\" is not a git repository")]
    NotARepository(PathBuf),

    #[error("Hook command must not be empty")]
    EmptyCommand,
}

pub type Result<T> = std::result::Result<T, NannyError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_RESOURCE_ERROR: u8 = 3;
pub const EXIT_HOOK_ERROR: u8 = 4;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(nanny_err) = e.downcast_ref::<NannyError>() {
        return match nanny_err {
            NannyError::Config(_) => EXIT_CONFIG_ERROR,
            NannyError::ResourceLoad { .. } => EXIT_RESOURCE_ERROR,
            NannyError::Hook(_) => EXIT_HOOK_ERROR,
            _ => EXIT_ERROR,
        };
    }

    if e.downcast_ref::<HookError>().is_some() {
        return EXIT_HOOK_ERROR;
    }

    EXIT_ERROR
}
