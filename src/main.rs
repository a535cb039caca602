mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quotemood")]
#[command(about = "Find quotes that fit what's on your mind", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(short, long, global = true, help = "Verbose logging (debug level)")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect moods (tags) in free text
    Detect {
        text: String,
        #[arg(short, long, help = "Number of tags (default: config detectTopK)")]
        limit: Option<i64>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Detect moods and recommend matching quotes
    Recommend {
        text: String,
        #[arg(long, default_value = "1", help = "Show this many pages of results")]
        page: i64,
        #[arg(long, help = "Show ranking scores")]
        scores: bool,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Rank quotes against text for an explicit tag selection
    Rank {
        text: String,
        #[arg(short, long = "tag", required = true, help = "Tag to filter by (repeatable)")]
        tags: Vec<String>,
        #[arg(short, long, help = "Limit results (default: config pageSize)")]
        limit: Option<i64>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Add a quote (admin only); tags are detected automatically
    Add {
        quote: String,
        #[arg(long, help = "Admin email")]
        email: String,
        #[arg(long, help = "Admin password")]
        password: String,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// List the tag pool
    Tags {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show quote corpus status
    Status {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Write a default .quotemood.json config
    Init {
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Detect { text, limit, json } => commands::detect::run(&text, limit, json),
        Commands::Recommend {
            text,
            page,
            scores,
            json,
        } => commands::recommend::run(&text, page, scores, json),
        Commands::Rank {
            text,
            tags,
            limit,
            json,
        } => commands::rank::run(&text, &tags, limit, json),
        Commands::Add {
            quote,
            email,
            password,
            json,
        } => commands::add::run(&quote, &email, &password, json),
        Commands::Tags { json } => commands::tags::run(json),
        Commands::Status { json } => commands::status::run(json),
        Commands::Init { force } => commands::init::run(force),
    }
}
