use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use lessonplan_cli::{commands, config};

/// Draft lesson plans with Gemini and export them as PDF.
#[derive(Debug, Parser)]
#[command(name = "lessonplan", version, about)]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the built-in sample plan as JSON.
    Sample {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the generation prompt for a plan.
    Prompt { plan: PathBuf },
    /// Generate AI content for a plan and merge it into the plan file.
    Generate {
        plan: PathBuf,
        /// Write the updated plan here instead of overwriting the input.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a plan and export it as PDF.
    Export {
        plan: PathBuf,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Print a data URI instead of writing a file.
        #[arg(long)]
        data_uri: bool,
    },
    /// Inspect or initialise the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    Show,
    Init,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config_path = commands::resolve_config_path(cli.config)?;
    let config = config::load_config(&config_path)?;

    match cli.command {
        Command::Sample { output } => commands::sample(output.as_deref()),
        Command::Prompt { plan } => commands::prompt(&plan),
        Command::Generate { plan, output } => {
            commands::generate(&config, &plan, output.as_deref()).await
        }
        Command::Export {
            plan,
            out_dir,
            data_uri,
        } => commands::export(&config, &plan, out_dir.as_deref(), data_uri),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&config, &config_path),
            ConfigAction::Init => commands::config_init(&config_path),
        },
    }
}
