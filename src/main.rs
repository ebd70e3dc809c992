use clap::Parser;
use tracing_subscriber::EnvFilter;

use repolens::report::{self, OutputFormat};
use repolens::{
    Config, GitHubClient, PipelineConfig, PrimaryLanguagePolicy, ScanPipeline, TaggingEngine,
};

#[derive(Parser, Debug)]
#[command(name = "repolens")]
#[command(version = "0.1.0")]
#[command(about = "Scan a GitHub account's repositories and report the frameworks and tools they use")]
struct Args {
    /// GitHub username or organization
    #[arg(short, long)]
    user: String,

    /// GitHub personal access token (falls back to GITHUB_TOKEN)
    #[arg(short, long)]
    token: Option<String>,

    /// Output file path
    #[arg(short, long, default_value = "./repolens_report.md")]
    output: String,

    /// Output format (dashboard, summary, json)
    #[arg(short, long, default_value = "dashboard")]
    format: String,

    /// Maximum repositories analyzed at once
    #[arg(long)]
    concurrency: Option<usize>,

    /// Skip forked repositories
    #[arg(long)]
    exclude_forks: bool,

    /// Pick each repository's primary language by byte count instead of API order
    #[arg(long)]
    by_bytes: bool,

    /// Print the report instead of writing it to a file
    #[arg(long)]
    stdout: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("repolens=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let format: OutputFormat = args.format.parse()?;

    let mut config = Config::from_env(args.token.clone())?;
    if let Some(limit) = args.concurrency {
        config.concurrency_limit = limit.max(1);
    }
    if args.exclude_forks {
        config.include_forks = false;
    }
    if args.by_bytes {
        config.primary_language = PrimaryLanguagePolicy::MostBytes;
    }

    let github = GitHubClient::new(&config.github_token)?.with_base_url(config.api_url.clone());
    let pipeline = ScanPipeline::new(github, TaggingEngine::new(), PipelineConfig::from(&config));

    tracing::info!("Starting scan for GitHub user: {}", args.user);
    let scan = pipeline.scan(&args.user).await?;

    let output = report::render(&scan, format, config.primary_language)?;

    if args.stdout {
        println!("{}", output);
    } else {
        std::fs::write(&args.output, &output)?;
        tracing::info!("Report written to {}", args.output);
    }

    Ok(())
}
