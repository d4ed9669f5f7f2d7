use anyhow::Result;
use clap::{Parser, Subcommand};
use support_bot::{connect, delete, setup, Config, Paths};

#[derive(Debug, Parser)]
#[command(name = "support-bot")]
#[command(about = "Registers the command menus of the support bot", long_about = None)]
struct Cli {
    #[arg(long, env = "SUPPORT_BOT_CONFIG_FILE_PATH")]
    config_file_path: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Register the command menus for every scope and language
    SetCommands,
    /// Remove all command menus registered by `set-commands`
    DeleteCommands,
}

async fn init() -> Result<()> {
    let Cli {
        config_file_path,
        command,
    } = Cli::parse();

    let paths = Paths { config_file_path };
    let config = Config::load_or_create(&paths).await?;
    let bot = connect(&config)?;

    match command {
        Some(Commands::SetCommands) | None => setup(&bot, &config).await?,
        Some(Commands::DeleteCommands) => delete(&bot, &config).await?,
    };

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();
    init().await
}
