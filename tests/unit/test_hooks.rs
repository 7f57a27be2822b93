//! Hook installation tests
//!
//! Runs the lifecycle plugin against real temporary git repositories with the
//! balloon decorator, the way `devnanny install` wires it.

use devnanny::config::Config;
use devnanny::git_hooks::{GitHookInstaller, HookInstaller, HookKind, InstallOutcome, MARKER};
use devnanny::plugin::{
    install_success_message, HookPlugin, InstallContext, LifecycleEvent, MemorySink, MessageLevel,
};
use git2::Repository;
use std::fs;
use tempfile::TempDir;

fn plugin_for(root: &std::path::Path) -> HookPlugin<devnanny::BalloonRenderer, GitHookInstaller, MemorySink> {
    let config = Config::default();
    HookPlugin::new(
        config.renderer().unwrap(),
        GitHookInstaller::new(root, config.hook.command.clone()).unwrap(),
        MemorySink::new(),
        InstallContext::new(root),
    )
}

#[test]
fn test_post_install_writes_hook_and_decorated_message() {
    let tmp = TempDir::new().unwrap();
    Repository::init(tmp.path()).unwrap();

    let plugin = plugin_for(tmp.path());
    assert!(plugin.handle(LifecycleEvent::PostInstallCmd).unwrap());

    let hook = fs::read_to_string(tmp.path().join(".git/hooks/pre-commit")).unwrap();
    assert!(hook.contains(MARKER));

    let messages = plugin.sink().messages();
    assert_eq!(messages.len(), 1);
    let (level, text) = &messages[0];
    assert_eq!(*level, MessageLevel::Info);
    assert!(text.contains(&install_success_message()));
    assert!(text.contains(".----"));
    assert!(text.starts_with("        _"));
}

#[test]
fn test_post_update_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    Repository::init(tmp.path()).unwrap();

    let plugin = plugin_for(tmp.path());
    plugin.handle(LifecycleEvent::PostInstallCmd).unwrap();
    plugin.handle(LifecycleEvent::PostUpdateCmd).unwrap();

    let levels: Vec<MessageLevel> = plugin.sink().messages().into_iter().map(|m| m.0).collect();
    assert_eq!(levels, vec![MessageLevel::Info, MessageLevel::Info]);

    let hook = fs::read_to_string(tmp.path().join(".git/hooks/pre-commit")).unwrap();
    assert_eq!(hook.matches(MARKER).count(), 1);
}

#[test]
fn test_foreign_hook_reported_in_balloon() {
    let tmp = TempDir::new().unwrap();
    Repository::init(tmp.path()).unwrap();
    let hook = tmp.path().join(".git/hooks/pre-commit");
    fs::create_dir_all(hook.parent().unwrap()).unwrap();
    fs::write(&hook, "#!/bin/sh\nexit 0\n").unwrap();

    let plugin = plugin_for(tmp.path());
    plugin.install().unwrap();

    let messages = plugin.sink().messages();
    let (level, text) = &messages[0];
    assert_eq!(*level, MessageLevel::Error);
    assert!(text.contains("hook already exists."));
    assert!(text.contains("Use --force"));
    assert_eq!(fs::read_to_string(&hook).unwrap(), "#!/bin/sh\nexit 0\n");
}

#[test]
fn test_forced_install_replaces_foreign_hook() {
    let tmp = TempDir::new().unwrap();
    Repository::init(tmp.path()).unwrap();
    let hook = tmp.path().join(".git/hooks/pre-commit");
    fs::create_dir_all(hook.parent().unwrap()).unwrap();
    fs::write(&hook, "#!/bin/sh\nexit 0\n").unwrap();

    let plugin = plugin_for(tmp.path()).with_force(true);
    plugin.install().unwrap();

    assert_eq!(plugin.sink().messages()[0].0, MessageLevel::Info);
    assert!(fs::read_to_string(&hook).unwrap().contains(MARKER));
}

#[test]
fn test_outside_repository_reports_path() {
    let tmp = TempDir::new().unwrap();
    let plugin = plugin_for(tmp.path());
    plugin.handle(LifecycleEvent::PostUpdateCmd).unwrap();

    let messages = plugin.sink().messages();
    let (level, text) = &messages[0];
    assert_eq!(*level, MessageLevel::Error);
    assert!(text.contains("Could not install dev-nanny"));
    assert!(!tmp.path().join(".git").exists());
}

#[test]
fn test_installer_direct_use() {
    let tmp = TempDir::new().unwrap();
    Repository::init(tmp.path()).unwrap();
    let installer = GitHookInstaller::new(tmp.path(), "true").unwrap();
    assert_eq!(
        installer.install(HookKind::PreCommit, false).unwrap(),
        InstallOutcome::Installed
    );
    assert!(installer.uninstall(HookKind::PreCommit).unwrap());
}
