//! devnanny command line
//!
//! Installs the pre-commit hook and lets the nanny say things.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::decorator::{Decorator, PlainDecorator};
use crate::git_hooks::{GitHookInstaller, HookKind};
use crate::observability::telemetry::{init_tracing, init_tracing_verbose};
use crate::plugin::{subscribed_events, ConsoleSink, HookPlugin, InstallContext, LifecycleEvent};

#[derive(Parser)]
#[command(name = "devnanny")]
#[command(about = "Installs a pre-commit hook and tells you about it in a speech balloon")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Verbose mode (debug logging to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

/// Output format for `events`
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a message in the nanny's speech balloon
    Say {
        /// Words of the message
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Print the message without art or balloon
        #[arg(long)]
        plain: bool,
    },

    /// Install the pre-commit hook (what the build tool runs after install/update)
    Install {
        /// Project root containing `.git`
        #[arg(long, value_name = "DIR", conflicts_with = "vendor_dir")]
        project_dir: Option<PathBuf>,

        /// Dependency directory; the project root is its parent
        #[arg(long, value_name = "DIR")]
        vendor_dir: Option<PathBuf>,

        /// Replace an existing pre-commit hook that devnanny did not write
        #[arg(long)]
        force: bool,

        /// Lifecycle event to dispatch instead of installing directly
        #[arg(long, value_name = "NAME")]
        event: Option<String>,
    },

    /// Remove the pre-commit hook if devnanny installed it
    Uninstall {
        /// Project root containing `.git`
        #[arg(long, value_name = "DIR", default_value = ".")]
        project_dir: PathBuf,
    },

    /// List lifecycle event subscriptions
    Events {
        #[arg(long, value_enum, default_value = "text")]
        output_format: OutputFormat,
    },
}

#[derive(Serialize)]
struct Subscription {
    event: LifecycleEvent,
    callback: &'static str,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_tracing_verbose();
    } else {
        init_tracing();
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Say { message, plain } => {
            let message = message.join(" ");
            let decorated = if plain {
                PlainDecorator.decorate(&message)
            } else {
                config.renderer()?.decorate(&message)
            };
            println!("{}", decorated);
        }

        Commands::Install {
            project_dir,
            vendor_dir,
            force,
            event,
        } => {
            let context = match (project_dir, vendor_dir) {
                (_, Some(vendor)) => InstallContext::from_vendor_dir(vendor),
                (Some(root), None) => InstallContext::new(root),
                (None, None) => InstallContext::new("."),
            };
            let installer = GitHookInstaller::new(context.root(), config.hook.command.clone())?;
            let plugin = HookPlugin::new(
                config.renderer()?,
                installer,
                ConsoleSink::new(!cli.no_color),
                context,
            )
            .with_force(force || config.hook.force);

            match event {
                Some(name) => {
                    let event: LifecycleEvent = name.parse()?;
                    if !plugin.handle(event)? {
                        println!("Nothing to do for {}", event);
                    }
                }
                None => plugin.install()?,
            }
        }

        Commands::Uninstall { project_dir } => {
            let installer = GitHookInstaller::new(&project_dir, config.hook.command.clone())?;
            if installer.uninstall(HookKind::PreCommit)? {
                println!("Removed pre-commit hook");
            } else {
                println!("No devnanny pre-commit hook found");
            }
        }

        Commands::Events { output_format } => {
            let subscriptions: Vec<Subscription> = subscribed_events()
                .iter()
                .map(|(event, callback)| Subscription {
                    event: *event,
                    callback: callback.name(),
                })
                .collect();

            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&subscriptions)?);
                }
                OutputFormat::Text => {
                    for sub in &subscriptions {
                        println!("{} -> {}", sub.event, sub.callback);
                    }
                }
            }
        }
    }

    Ok(())
}
