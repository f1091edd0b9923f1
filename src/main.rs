use clap::{CommandFactory, Parser};
use dothtml_admin::cli::Cli;
use dothtml_admin::commands::AdminCommand;
use dothtml_admin::config::Config;
use dothtml_admin::db::AccountStore;
use dothtml_admin::error::AdminError;
use dothtml_admin::output::Console;
use mimalloc::MiMalloc;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let console = Console::new();
    match run(&console).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(console: &Console) -> Result<(), AdminError> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return Ok(());
    };

    // usage errors exit before configuration or database contact
    let command = AdminCommand::from_cli(command)?;

    let cfg = Config::from_env()?;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let store = AccountStore::connect(&cfg.database_url).await?;
    let result = command.execute(&store, console).await;
    store.close().await;
    result
}
