/// Sakura Player - terminal front-end
use clap::{Parser, Subcommand};
use sakura_auth::{ProfileUpdate, SignUpForm};
use sakura_cli::{
    commands::{self, AccountCommand, Listing, PlayOptions},
    AppConfig,
};
use sakura_core::Catalog;
use sakura_playback::{PlaybackHandle, RepeatMode};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sakura")]
#[command(about = "Sakura Player music library and playback simulator", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./sakura.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries
    Catalog {
        #[arg(value_enum)]
        listing: Listing,
        /// Maximum number of entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Search songs, artists and albums
    Search {
        query: String,
    },
    /// Play a playlist, album or artist
    Play {
        /// Playlist, album or artist id (e.g. playlist_1)
        id: String,
        /// Simulated seconds to play for
        #[arg(short, long, default_value_t = 30)]
        seconds: u64,
        /// Shuffle the queue
        #[arg(long)]
        shuffle: bool,
        /// Repeat mode: off, all or one
        #[arg(long)]
        repeat: Option<RepeatMode>,
    },
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Password confirmation
        #[arg(long)]
        confirm: String,
        /// Display name
        #[arg(long)]
        name: String,
    },
    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Update the signed-in user's profile
    Profile {
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New avatar URL
        #[arg(long)]
        avatar: Option<String>,
        /// New email
        #[arg(long)]
        email: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_directives().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let catalog = Catalog::builtin();
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Catalog { listing, limit } => {
            commands::list_catalog(&mut out, &catalog, listing, limit)?;
        }
        Commands::Search { query } => {
            commands::search(&mut out, &catalog, &query)?;
        }
        Commands::Play {
            id,
            seconds,
            shuffle,
            repeat,
        } => {
            let item = commands::find_item(&catalog, &id)?;
            let handle = PlaybackHandle::new(config.playback_config());
            let options = PlayOptions {
                seconds,
                shuffle,
                repeat,
            };
            commands::play(&mut out, &handle, &catalog, &item, &options).await?;
        }
        Commands::Signup {
            email,
            password,
            confirm,
            name,
        } => {
            let form = SignUpForm {
                email,
                password,
                confirm_password: confirm,
                display_name: name,
            };
            commands::account(&mut out, &config.storage.data_dir, AccountCommand::SignUp(form))?;
        }
        Commands::Login { email, password } => {
            commands::account(
                &mut out,
                &config.storage.data_dir,
                AccountCommand::Login { email, password },
            )?;
        }
        Commands::Logout => {
            commands::account(&mut out, &config.storage.data_dir, AccountCommand::Logout)?;
        }
        Commands::Whoami => {
            commands::account(&mut out, &config.storage.data_dir, AccountCommand::WhoAmI)?;
        }
        Commands::Profile {
            name,
            avatar,
            email,
        } => {
            let update = ProfileUpdate {
                display_name: name,
                avatar_url: avatar,
                email,
            };
            commands::account(
                &mut out,
                &config.storage.data_dir,
                AccountCommand::Profile(update),
            )?;
        }
    }

    Ok(())
}
