use clap::Parser;
use pr_labeler_cli::{commands::label_pull_request, config::RunArgs};
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Labels a pull request according to the Jira issue type of the ticket in its title
#[derive(Parser)]
#[command(name = "pr-labeler", version)]
#[command(about = "Label pull requests by the Jira issue type of their ticket", long_about = None)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries workflow commands
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("PR_LABELER_LOG")
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    match label_pull_request(&cli.run).await {
        Ok(outcome) => {
            info!("{outcome}");
            std::process::exit(0);
        }
        Err(e) => {
            error!("Error: {e}");
            println!("::error::{}", escape_workflow_data(&e.to_string()));
            std::process::exit(1);
        }
    }
}

/// Escape a message for use as workflow command data.
fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
