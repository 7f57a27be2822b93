//! Git hook installation
//!
//! Writes an executable hook script into the repository's hooks directory.
//! Installation never clobbers a hook it did not write unless forced: our
//! scripts carry a marker line, and anything without it is treated as
//! someone else's hook.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::{debug, info};

use crate::errors::{HookError, Result};

/// Marker line embedded in every script we write.
pub const MARKER: &str = "# installed by devnanny";

/// Check whether `path` contains a `.git` directory.
pub fn is_git_repository(path: &Path) -> bool {
    path.join(".git").is_dir()
}

/// Hooks devnanny knows how to install
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    PreCommit,
}

impl HookKind {
    /// File name inside the hooks directory
    pub fn file_name(&self) -> &'static str {
        match self {
            HookKind::PreCommit => "pre-commit",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// No hook existed; ours was written
    Installed,
    /// Our hook was already there
    AlreadyInstalled,
    /// Our hook was there with an outdated script and was rewritten
    Updated,
    /// A foreign hook was overwritten (forced)
    Replaced,
}

pub trait HookInstaller {
    fn install(&self, kind: HookKind, force: bool) -> Result<InstallOutcome>;
}

/// Installs hooks into a git repository on disk.
#[derive(Debug, Clone)]
pub struct GitHookInstaller {
    root: PathBuf,
    command: String,
}

impl GitHookInstaller {
    pub fn new(root: impl Into<PathBuf>, command: impl Into<String>) -> Result<Self> {
        let command = command.into();
        if command.trim().is_empty() {
            return Err(HookError::EmptyCommand.into());
        }
        Ok(Self {
            root: root.into(),
            command,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Script body written for every hook kind.
    pub fn script(&self) -> String {
        format!("#!/bin/sh\n{MARKER}\nexec {} \"$@\"\n", self.command)
    }

    /// Where `kind` lives, honouring `core.hooksPath` when it is set.
    pub fn hook_path(&self, kind: HookKind) -> Result<PathBuf> {
        if !is_git_repository(&self.root) {
            return Err(HookError::NotARepository(self.root.clone()).into());
        }

        let repo = Repository::open(&self.root)?;
        let configured = repo
            .config()
            .ok()
            .and_then(|cfg| cfg.get_path("core.hooksPath").ok());

        let hooks_dir = match configured {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => repo.workdir().unwrap_or(&self.root).join(dir),
            None => repo.path().join("hooks"),
        };
        Ok(hooks_dir.join(kind.file_name()))
    }

    /// Remove our hook. A hook without our marker is left alone.
    ///
    /// Returns whether a file was removed.
    pub fn uninstall(&self, kind: HookKind) -> Result<bool> {
        let path = self.hook_path(kind)?;
        if !path.exists() {
            return Ok(false);
        }

        let content = fs::read_to_string(&path)?;
        if !content.contains(MARKER) {
            debug!(path = %path.display(), "Hook not ours, leaving it");
            return Ok(false);
        }

        fs::remove_file(&path)?;
        info!(hook = %kind, path = %path.display(), "Removed hook");
        Ok(true)
    }

    fn write_script(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.script())?;
        make_executable(path)?;
        Ok(())
    }
}

impl HookInstaller for GitHookInstaller {
    fn install(&self, kind: HookKind, force: bool) -> Result<InstallOutcome> {
        let path = self.hook_path(kind)?;

        let outcome = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content == self.script() {
                InstallOutcome::AlreadyInstalled
            } else if content.contains(MARKER) {
                self.write_script(&path)?;
                InstallOutcome::Updated
            } else if force {
                self.write_script(&path)?;
                InstallOutcome::Replaced
            } else {
                return Err(HookError::AlreadyExists {
                    hook: kind.to_string(),
                    path,
                }
                .into());
            }
        } else {
            self.write_script(&path)?;
            InstallOutcome::Installed
        };

        info!(hook = %kind, path = %path.display(), ?outcome, "Hook install finished");
        Ok(outcome)
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
