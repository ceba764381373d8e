use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use articlehub::api::HttpAuthClient;
use articlehub::config::AppConfig;
use articlehub::features::login::SubmitOutcome;
use articlehub::logging::init_tracing;
use articlehub::routes::{Navigation, Rendered, RouteTable};
use articlehub::shell::AppShell;
use articlehub::storage::FileStorage;

#[derive(Parser)]
#[command(name = "articlehub", version, about = "Article site application shell")]
struct Cli {
    /// Config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the API base URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Override the preferences file.
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Default log level when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the route table.
    Routes,
    /// Interactive session (default).
    Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Some(Command::Routes) => print_routes(),
        Some(Command::Run) | None => {
            let config = load_config(&cli)?;
            run(config).await
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_from(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(storage) = &cli.storage {
        config.storage.path = Some(storage.clone());
    }
    config.validate()?;
    Ok(config)
}

fn print_routes() -> anyhow::Result<()> {
    let table = RouteTable::app_routes()?;
    for entry in table.entries() {
        println!(
            "{:<16} {:<16} {:<14} {}",
            entry.id,
            entry.path.as_str(),
            entry.view.title(),
            if entry.auth_only { "auth" } else { "public" }
        );
    }
    Ok(())
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let storage = Arc::new(FileStorage::new(config.storage_path()));
    let shell = Arc::new(AppShell::boot(&config, storage)?);
    let client = HttpAuthClient::new(&config.api)?;
    let session_watch = shell.watch_session();

    println!("theme: {}", shell.theme().get());
    print_navigation(&shell.current());
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["open", path] => print_navigation(&shell.open(path)?),
            ["login", username, password] => {
                match shell.login(&client, username, password).await? {
                    SubmitOutcome::Fulfilled(user) => println!("logged in as {}", user.username),
                    SubmitOutcome::Rejected => {
                        let error = shell.login_form().state().error.unwrap_or_default();
                        println!("login failed: {error}");
                    }
                    SubmitOutcome::Busy => println!("login already in progress"),
                }
                print_navigation(&shell.current());
            }
            ["logout"] => print_navigation(&shell.logout()?),
            ["theme"] => println!("theme: {}", shell.theme().cycle()),
            ["state"] => println!("{:#?}", shell.store().state()),
            ["help"] => print_help(),
            ["quit"] | ["exit"] => break,
            _ => println!("unknown command, type 'help'"),
        }
    }

    session_watch.abort();
    Ok(())
}

fn print_navigation(navigation: &Navigation) {
    if let Some(from) = &navigation.redirected_from {
        println!("{from} requires login, redirected");
    }
    match navigation.rendered() {
        Rendered::View(view) => println!("[{}] {}", navigation.location, view.title()),
        Rendered::Loading => println!("[{}] loading...", navigation.location),
        Rendered::Redirect(to) => println!("[{}] -> {to}", navigation.location),
    }
}

fn print_help() {
    println!("commands: open <path> | login <user> <password> | logout | theme | state | help | quit");
}
