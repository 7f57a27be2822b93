//! devnanny - a pre-commit hook installer with a nanny who tells you about it
//!
//! - **Balloon**: renders a message in a word-wrapped speech balloon next to
//!   a fixed ASCII figure, growing below the figure when needed
//! - **Hooks**: installs and removes a marked git pre-commit hook
//! - **Plugin**: reacts to build-tool lifecycle events and reports through the
//!   balloon
//!
//! # Quick Start
//!
//! ```
//! use devnanny::config::BalloonSettings;
//! use devnanny::ui::{ArtTemplate, BalloonRenderer};
//!
//! let renderer = BalloonRenderer::new(ArtTemplate::nanny(), &BalloonSettings::default())?;
//! println!("{}", renderer.decorate("Installed dev-nanny pre-commit hook"));
//! # Ok::<(), devnanny::errors::NannyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod decorator;
pub mod errors;
pub mod git_hooks;
pub mod observability;
pub mod plugin;
pub mod ui;

pub use config::Config;
pub use decorator::Decorator;
pub use errors::{NannyError, Result};
pub use ui::{ArtTemplate, BalloonRenderer};
