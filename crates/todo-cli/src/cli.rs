use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_core::AppConfig;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A single-window terminal to-do list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (or set TODO_CONFIG env var)
    #[arg(long, value_name = "FILE", env = "TODO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Text shown in front of completed tasks
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Config file values with the command-line overrides applied.
    pub fn app_config(&self) -> AppConfig {
        AppConfig::load(self.config.as_deref()).with_completion_marker(self.marker.clone())
    }
}
