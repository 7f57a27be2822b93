//! Lifecycle plugin
//!
//! Hooks devnanny into a host build tool's lifecycle: after dependencies are
//! installed or updated, the pre-commit hook is (re)installed and the user is
//! told how it went through the decorator.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use colored::Colorize;
use serde::Serialize;
use tracing::{debug, warn};

use crate::decorator::Decorator;
use crate::errors::{HookError, NannyError};
use crate::git_hooks::{is_git_repository, HookInstaller, HookKind};

pub const VENDOR: &str = "dev-nanny";

/// Build-tool lifecycle events a plugin may subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifecycleEvent {
    PreInstallCmd,
    PostInstallCmd,
    PreUpdateCmd,
    PostUpdateCmd,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 4] = [
        LifecycleEvent::PreInstallCmd,
        LifecycleEvent::PostInstallCmd,
        LifecycleEvent::PreUpdateCmd,
        LifecycleEvent::PostUpdateCmd,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::PreInstallCmd => "pre-install-cmd",
            LifecycleEvent::PostInstallCmd => "post-install-cmd",
            LifecycleEvent::PreUpdateCmd => "pre-update-cmd",
            LifecycleEvent::PostUpdateCmd => "post-update-cmd",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LifecycleEvent {
    type Err = NannyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleEvent::ALL
            .into_iter()
            .find(|event| event.name() == s)
            .ok_or_else(|| NannyError::Config(format!("Unknown lifecycle event: {}", s)))
    }
}

/// Callback identifiers the subscription table can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Callback {
    Install,
}

impl Callback {
    pub fn name(&self) -> &'static str {
        match self {
            Callback::Install => "install",
        }
    }
}

/// Events this plugin reacts to, and what it does for each.
pub fn subscribed_events() -> &'static [(LifecycleEvent, Callback)] {
    &[
        (LifecycleEvent::PostInstallCmd, Callback::Install),
        (LifecycleEvent::PostUpdateCmd, Callback::Install),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

/// Where user-facing messages go
pub trait MessageSink {
    fn write(&self, level: MessageLevel, message: &str) -> std::io::Result<()>;
}

/// Writes messages to stdout, green for info and red for errors.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MessageSink for ConsoleSink {
    fn write(&self, level: MessageLevel, message: &str) -> std::io::Result<()> {
        let text = match (self.color, level) {
            (false, _) => message.normal(),
            (true, MessageLevel::Info) => message.green(),
            (true, MessageLevel::Error) => message.red(),
        };
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", text)
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl MessageSink for MemorySink {
    fn write(&self, level: MessageLevel, message: &str) -> std::io::Result<()> {
        let mut messages = self
            .messages
            .lock()
            .map_err(|_| std::io::Error::other("message sink poisoned"))?;
        messages.push((level, message.to_string()));
        Ok(())
    }
}

/// Where the project being installed into lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallContext {
    root: PathBuf,
}

impl InstallContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root is the parent of the dependency directory.
    pub fn from_vendor_dir(vendor_dir: impl AsRef<Path>) -> Self {
        let vendor_dir = vendor_dir.as_ref();
        let root = match vendor_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

pub fn install_success_message() -> String {
    format!("Installed {} pre-commit hook", VENDOR)
}

pub fn install_failure_message() -> String {
    format!("Could not install {} pre-commit-hook", VENDOR)
}

pub const MESSAGE_HOOK_ALREADY_EXISTS: &str =
    "Another pre-commit hook already exists. Use --force to replace it.";

/// Installs the pre-commit hook when the host tool says so.
pub struct HookPlugin<D, I, S> {
    decorator: D,
    installer: I,
    sink: S,
    context: InstallContext,
    force: bool,
}

impl<D, I, S> HookPlugin<D, I, S>
where
    D: Decorator,
    I: HookInstaller,
    S: MessageSink,
{
    pub fn new(decorator: D, installer: I, sink: S, context: InstallContext) -> Self {
        Self {
            decorator,
            installer,
            sink,
            context,
            force: false,
        }
    }

    /// Replace foreign hooks instead of refusing
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run whatever `event` is subscribed to. Returns `false` for events
    /// this plugin ignores.
    pub fn handle(&self, event: LifecycleEvent) -> std::io::Result<bool> {
        let Some((_, callback)) = subscribed_events().iter().find(|(e, _)| *e == event) else {
            debug!(%event, "Event not subscribed");
            return Ok(false);
        };

        debug!(%event, callback = callback.name(), "Dispatching event");
        match callback {
            Callback::Install => self.install()?,
        }
        Ok(true)
    }

    /// Install the pre-commit hook and report the outcome.
    ///
    /// Installation failures are reported to the user, not returned; only a
    /// failing sink is an error.
    pub fn install(&self) -> std::io::Result<()> {
        let root = self.context.root();
        if !is_git_repository(root) {
            let message = format!(
                "{}. {}",
                install_failure_message(),
                HookError::NotARepository(root.to_path_buf())
            );
            return self.write(MessageLevel::Error, &message);
        }

        match self.installer.install(HookKind::PreCommit, self.force) {
            Ok(_) => self.write(MessageLevel::Info, &install_success_message()),
            Err(NannyError::Hook(HookError::AlreadyExists { .. })) => {
                let message = format!(
                    "{}. {}",
                    install_failure_message(),
                    MESSAGE_HOOK_ALREADY_EXISTS
                );
                self.write(MessageLevel::Error, &message)
            }
            Err(e) => {
                warn!(error = %e, "Hook install failed");
                self.write(MessageLevel::Error, &install_failure_message())
            }
        }
    }

    fn write(&self, level: MessageLevel, message: &str) -> std::io::Result<()> {
        self.sink.write(level, &self.decorator.decorate(message))
    }
}
