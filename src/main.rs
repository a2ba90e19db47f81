use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use twocaptcha::auth::{ApiKey, PLACEHOLDER_API_KEY};
use twocaptcha::progress::ProgressConfig;
use twocaptcha::service::twocaptcha::{ConfigBuilder, Website};
use twocaptcha::service::ServiceConfigBuilder;
use twocaptcha::solver::Solver;

#[derive(Debug, Clone, Parser)]
struct Cli {
    /// API key of the solving service account
    #[arg(
        short,
        long,
        env = "APIKEY_2CAPTCHA",
        default_value = PLACEHOLDER_API_KEY,
        hide_env_values = true
    )]
    key: String,

    /// Solving service host
    #[arg(long, value_enum, default_value = "two-captcha")]
    host: Host,

    /// Override the service base url
    #[arg(long, hide = true)]
    base_url: Option<String>,

    /// Seconds to wait between answer polls
    #[arg(long, default_value_t = 10)]
    poll_interval: u64,

    /// Give up after this many polls
    #[arg(long, default_value_t = 30)]
    max_attempts: usize,

    /// Hide the progress output
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Task,
}

#[derive(Debug, Clone, Subcommand)]
enum Task {
    /// Solve an image captcha from a local file
    Normal {
        /// Path to the captcha image, e.g. test5.jpg
        image: PathBuf,
    },
    /// Solve a text question captcha
    Text {
        /// The question, e.g. "If tomorrow is Saturday, what day is today?"
        question: String,
    },
    /// Print the account balance
    Balance,
}

#[derive(Debug, Clone, ValueEnum)]
enum Host {
    TwoCaptcha,
    RuCaptcha,
}

impl From<Host> for Website {
    fn from(host: Host) -> Self {
        match host {
            Host::TwoCaptcha => Website::TwoCaptcha,
            Host::RuCaptcha => Website::RuCaptcha,
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let mut builder = match &cli.base_url {
        Some(url) => ConfigBuilder::custom(url)?,
        None => ConfigBuilder::new(cli.host.clone().into()),
    };
    builder.set_api_key(ApiKey::new(cli.key));

    let progress = if cli.quiet {
        ProgressConfig::disabled()
    } else {
        ProgressConfig::default()
    };

    let solver = Solver::from_config(builder.build())
        .set_progress(progress)
        .set_poll_interval(Duration::from_secs(cli.poll_interval))
        .set_max_attempts(cli.max_attempts);

    match cli.command {
        Task::Normal { image } => {
            let solution = solver.normal(&image).await?;
            Ok(format!("Solved. Here is the answer: {}", solution))
        }
        Task::Text { question } => {
            let solution = solver.text(&question).await?;
            Ok(format!("Solved. Here is the answer: {}", solution))
        }
        Task::Balance => solver.balance().await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(message) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
