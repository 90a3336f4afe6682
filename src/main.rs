use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use questlog::{Priority, TaskFilter};

mod cli;

#[derive(Parser)]
#[command(name = "questlog")]
#[command(about = "Productivity Quest - complete quests, earn XP, level up")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.questlog/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in (registers the name on first use)
    Login {
        name: String,
    },

    /// Sign out
    Logout,

    /// Show who is signed in
    Whoami,

    /// Add a new quest
    Add {
        /// Quest description
        text: String,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,

        /// low, medium or high
        #[arg(short, long)]
        priority: Option<Priority>,
    },

    /// List quests in display order
    List {
        /// all, active or completed
        #[arg(short, long, default_value = "all")]
        filter: TaskFilter,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Complete a quest (id or unique id prefix)
    Done {
        id: String,
    },

    /// Reopen a completed quest
    Undo {
        id: String,
    },

    /// Change a quest's text
    Edit {
        id: String,
        text: String,
    },

    /// Delete a quest
    Delete {
        id: String,
    },

    /// Show level, XP and open quests
    Status {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show all achievements
    Achievements,

    /// List avatars, or pick one by number or name
    Avatar {
        choice: Option<String>,
    },

    /// Write a commented config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(Commands::Init { force }) = cli.command {
        return cli::init::init_command(cli.config, force);
    }

    let mut ctx = cli::Context::load(cli.config)?;

    match cli.command {
        Some(Commands::Login { name }) => cli::session::login_command(&mut ctx, &name)?,
        Some(Commands::Logout) => cli::session::logout_command(&mut ctx)?,
        Some(Commands::Whoami) => cli::session::whoami_command(&ctx)?,
        Some(Commands::Add { text, due, priority }) => {
            cli::quest::add_command(&ctx, &text, due, priority)?;
        }
        Some(Commands::List { filter, json }) => cli::quest::list_command(&ctx, filter, json)?,
        Some(Commands::Done { id }) => cli::quest::done_command(&ctx, &id)?,
        Some(Commands::Undo { id }) => cli::quest::undo_command(&ctx, &id)?,
        Some(Commands::Edit { id, text }) => cli::quest::edit_command(&ctx, &id, &text)?,
        Some(Commands::Delete { id }) => cli::quest::delete_command(&ctx, &id)?,
        Some(Commands::Status { json }) => cli::profile::status_command(&ctx, json)?,
        Some(Commands::Achievements) => cli::profile::achievements_command(&ctx)?,
        Some(Commands::Avatar { choice }) => cli::profile::avatar_command(&ctx, choice)?,
        // Handled before the config is loaded
        Some(Commands::Init { .. }) => {}
        None => {
            // Default: the quest list
            cli::quest::list_command(&ctx, TaskFilter::All, false)?;
        }
    }

    Ok(())
}
