//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use ewise_core::config;
use ewise_core::logging::{self, LogTarget};
use ewise_core::route::Route;

mod commands;

#[derive(Parser)]
#[command(name = "ewise")]
#[command(version)]
#[command(about = "Terminal client for the EmployWise user directory")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Initial TUI route (e.g. /users, /edit-user/2)
    #[arg(long, value_name = "PATH")]
    route: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password (read from stdin when omitted)
        #[arg(long, env = "EWISE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log out (clear the stored token)
    Logout,

    /// Browse and manage users
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum UserCommands {
    /// Lists one page of users
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Filter the page by name or email
        #[arg(long, value_name = "TERM")]
        search: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Shows a single user
    Show {
        #[arg(value_name = "USER_ID")]
        id: u64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Updates a user's name or email
    Update {
        #[arg(value_name = "USER_ID")]
        id: u64,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
    /// Deletes a user
    Delete {
        #[arg(value_name = "USER_ID")]
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, route } = cli;

    let config = config::Config::load().context("load config")?;

    let target = if command.is_none() {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    // Held until exit so buffered log lines are flushed.
    let _log_guard = logging::init(&config.log, target).context("init logging")?;

    let Some(command) = command else {
        let start = route.as_deref().map(Route::parse);
        return commands::tui::run(&config, start).await;
    };

    match command {
        Commands::Login { email, password } => {
            commands::auth::login(&config, &email, password).await
        }
        Commands::Logout => commands::auth::logout(),

        Commands::Users { command } => match command {
            UserCommands::List { page, search, json } => {
                commands::users::list(&config, page, search.as_deref(), json).await
            }
            UserCommands::Show { id, json } => commands::users::show(&config, id, json).await,
            UserCommands::Update {
                id,
                first_name,
                last_name,
                email,
            } => {
                let fields = commands::users::UpdateFields {
                    first_name,
                    last_name,
                    email,
                };
                commands::users::update(&config, id, fields).await
            }
            UserCommands::Delete { id, yes } => commands::users::delete(&config, id, yes).await,
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
