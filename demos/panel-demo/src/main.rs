/*
[INPUT]:  CLI arguments and a running task service
[OUTPUT]: Task list printed to stdout after optional create/generate calls
[POS]:    Binary entry point - demo driver for the panel facade
[UPDATE]: When changing CLI flags or the demo flow
*/

use anyhow::{Context, Result};
use clap::Parser;
use tasklist_client::{ClientConfig, PanelSurface, TaskPanel, TasklistClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "panel-demo", version, about = "Task list panel demo")]
struct Cli {
    /// Base URL of the task service
    #[arg(long = "base-url", default_value = "http://127.0.0.1:8000")]
    base_url: String,
    /// Create a task with this title before listing
    #[arg(long = "add", value_name = "TITLE")]
    add: Option<String>,
    /// Description for --add
    #[arg(long = "desc", value_name = "TEXT")]
    desc: Option<String>,
    /// Autogenerate tasks from this prompt before listing
    #[arg(long = "generate", value_name = "PROMPT")]
    generate: Option<String>,
    /// Number of tasks to autogenerate
    #[arg(long = "count", default_value_t = 3)]
    count: u32,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

/// Prints the task list to stdout, one line per task
struct StdoutSurface;

impl PanelSurface for StdoutSurface {
    fn render(&self, lines: &[String]) {
        println!("--- tasks ({}) ---", lines.len());
        for line in lines {
            println!("{line}");
        }
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            println!("(generating...)");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let client = TasklistClient::with_config_and_base_url(ClientConfig::default(), &args.base_url)
        .context("build client")?;
    let panel = TaskPanel::new(client, StdoutSurface);
    info!(base_url = %panel.client().base_url(), "task service selected");

    if let Some(title) = &args.add {
        let created = panel
            .add_task(title, args.desc.as_deref())
            .await
            .context("create task")?;
        info!(id = ?created.id, title = %created.title, "task created");
    } else if let Some(prompt) = &args.generate {
        let generated = panel
            .generate_tasks(prompt, args.count)
            .await
            .context("autogenerate tasks")?;
        info!(generated, "tasks autogenerated");
    } else {
        panel.refresh().await.context("list tasks")?;
    }

    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).context("parse log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    Ok(())
}
