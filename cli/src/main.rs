//! Command-line stand-in for an orchestrator: configure once, run one
//! operation, print the committed list as JSON.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use todo_provider::{
    ConfigValue, DeclaredConfig, Diagnostics, ProcessEnv, Provider, ProviderData, TodoList,
    TodoResource,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "todo-provider",
    version,
    about = "Reconcile a todo list against a remote store"
)]
struct Cli {
    /// Username (falls back to CUSTOM_EXAMPLE_USERNAME).
    #[arg(long, global = true)]
    username: Option<String>,

    /// Password (falls back to CUSTOM_EXAMPLE_PASSWORD).
    #[arg(long, global = true)]
    password: Option<String>,

    /// Base URL of the remote store (falls back to CUSTOM_EXAMPLE_BASEURL).
    #[arg(long, global = true)]
    baseurl: Option<String>,

    /// Log at debug level.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read the remote list through the read-only data source.
    Get,
    /// Read the remote list through the resource.
    Read,
    /// Create the remote list from ITEMS.
    Create { items: Vec<String> },
    /// Replace the remote list with ITEMS.
    Update { items: Vec<String> },
    /// Delete the remote list.
    Delete,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<Diagnostics>() {
                Some(diags) => {
                    for diag in diags {
                        eprintln!("Error: {diag}");
                    }
                }
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn declared_config(cli: &Cli) -> DeclaredConfig {
    DeclaredConfig {
        username: ConfigValue::from(cli.username.clone()),
        password: ConfigValue::from(cli.password.clone()),
        baseurl: ConfigValue::from(cli.baseurl.clone()),
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let provider = Provider::new(env!("CARGO_PKG_VERSION"));
    let data = provider.configure(&declared_config(&cli), &ProcessEnv)?;
    debug!(provider = %provider.metadata().type_name, "configured");

    let list = match cli.command {
        Command::Get => {
            let mut source = provider.data_source();
            source.configure(data)?;
            source.read()?
        }
        Command::Read => with_resource(&provider, data, |r| r.read())?,
        Command::Create { items } => {
            with_resource(&provider, data, |r| r.create(&TodoList::new(items)))?
        }
        Command::Update { items } => {
            with_resource(&provider, data, |r| r.update(&TodoList::new(items)))?
        }
        Command::Delete => with_resource(&provider, data, |r| r.delete())?,
    };

    serde_json::to_string(&list).context("encoding todo list")
}

fn with_resource<F>(provider: &Provider, data: ProviderData, op: F) -> Result<TodoList, Diagnostics>
where
    F: FnOnce(&mut TodoResource) -> Result<TodoList, Diagnostics>,
{
    let mut resource = provider.resource();
    resource.configure(data)?;
    op(&mut resource)
}
