use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use async_graphql::{Request, Variables};
use chrono::Local;
use clap::{Parser, Subcommand};
use platform_api::notice::{Notice, drain};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::demo_employees;
use server::{AppConfig, build_app};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "staff-directory", version, about = "Employee directory")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a GraphQL document against a freshly seeded directory.
    Exec {
        document: String,
        #[arg(long, value_name = "JSON")]
        variables: Option<String>,
    },
    /// Print the seeded employee list.
    Seed {
        #[arg(long)]
        total: Option<usize>,
    },
    /// Print the GraphQL schema snapshot.
    #[command(name = "schema:print")]
    SchemaPrint {
        #[arg(long, value_name = "FILE", help = "Destination file path")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(ObsConfig::from_env("staff-directory"))?;
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    match cli.command {
        Command::Exec {
            document,
            variables,
        } => exec(&config, document, variables).await,
        Command::Seed { total } => seed(config, total),
        Command::SchemaPrint { output } => schema_print(&config, output).await,
    }
}

async fn exec(config: &AppConfig, document: String, variables: Option<String>) -> Result<()> {
    let app = build_app(config).await?;
    let mut notices = app.notifier.subscribe();

    let mut request = Request::new(document);
    if let Some(raw) = variables {
        let parsed: serde_json::Value =
            serde_json::from_str(&raw).context("--variables is not valid JSON")?;
        request = request.variables(Variables::from_json(parsed));
    }
    let response = app.schema.execute(request).await;

    for notice in drain(&mut notices) {
        match notice {
            Notice::Toast { level, message } => eprintln!("[{}] {message}", level.as_str()),
            Notice::Navigate { to } => eprintln!("[navigate] {to}"),
        }
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    if response.is_err() {
        bail!("document returned {} error(s)", response.errors.len());
    }
    Ok(())
}

fn seed(config: AppConfig, total: Option<usize>) -> Result<()> {
    let config = AppConfig {
        seed_total: total.unwrap_or(config.seed_total),
        ..config
    };
    let employees = demo_employees(&config.seed_options(Local::now().date_naive()));
    println!("{}", serde_json::to_string_pretty(&employees)?);
    Ok(())
}

async fn schema_print(config: &AppConfig, output: Option<PathBuf>) -> Result<()> {
    let app = build_app(config).await?;
    let sdl = app.schema.sdl();
    match output {
        Some(path) => {
            std::fs::write(&path, sdl)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "schema snapshot written");
        }
        None => print!("{sdl}"),
    }
    Ok(())
}
