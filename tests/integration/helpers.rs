//! Test helpers and utilities for integration tests

use assert_cmd::Command;
use std::path::Path;

/// A `devnanny` command isolated from the user's config and environment.
#[allow(deprecated)]
pub fn devnanny(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("devnanny").unwrap();
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env_remove("DEVNANNY_LINE_BUDGET")
        .env_remove("DEVNANNY_ART")
        .env_remove("DEVNANNY_PADDING_GLYPH")
        .env_remove("RUST_LOG");
    cmd
}
