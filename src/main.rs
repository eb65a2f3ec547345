use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// triove - consulting site and contact inbox
#[derive(Parser)]
#[command(name = "triove")]
#[command(about = "TRIOVE marketing site and admin inbox", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage admin accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create an account
    Create {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long, value_enum, default_value = "admin")]
        role: cli::user::Role,
    },
    /// Change the role of an existing account
    SetRole {
        #[arg(long)]
        email: String,

        #[arg(long, value_enum)]
        role: cli::user::Role,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = triove::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    triove::observability::init_observability(
        "triove",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::migrate::migrate(&config).await,
        Commands::Reset => cli::migrate::reset(&config).await,
        Commands::User { command } => match command {
            UserCommands::Create {
                email,
                password,
                role,
            } => cli::user::create(config, email, password, role).await,
            UserCommands::SetRole { email, role } => {
                cli::user::set_role(config, email, role).await
            }
        },
    }
}
