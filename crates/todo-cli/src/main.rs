mod cli;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use todo_tui::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TODO_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // The TUI owns the screen; only errors are worth printing over it.
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::ERROR)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        }
        None => {
            let config = cli.app_config();
            tracing::debug!("Starting with config: {:?}", config);
            let mut app = App::new(config);
            app.run().await?;
        }
    }

    Ok(())
}
