use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use topwords::config::{Config, Overrides};
use topwords::output::csv::CsvWriter;
use topwords::output::terminal;
use topwords::pipeline::crawl;
use topwords::site::fetcher::SiteFetcher;
use topwords::site::traits::ArticleFetcher;
use topwords::text::russian_normalizer;
use topwords::words::aggregate::aggregate;

/// topwords: word frequency tables per news category.
///
/// Crawls a news site's categories, counts lemmatized words in recent
/// articles, gives every word to the one category where it is most frequent,
/// and writes a CSV table per category.
#[derive(Parser)]
#[command(name = "topwords", version, about)]
struct Cli {
    #[command(flatten)]
    options: CrawlOptions,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command. Each overrides its TOPWORDS_* env var.
#[derive(Args)]
struct CrawlOptions {
    /// Output directory for the CSV tables (created if absent)
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Max rows per category table
    #[arg(short = 'c', long, visible_alias = "top-words", global = true)]
    count_words: Option<usize>,

    /// Max articles fetched per category
    #[arg(short = 'n', long, global = true)]
    count_news: Option<usize>,

    /// Root page to discover categories from
    #[arg(long, global = true)]
    site_url: Option<String>,

    /// Tab-separated `form<TAB>lemma` dictionary consulted before the stemmer
    #[arg(long, global = true)]
    lemma_dict: Option<PathBuf>,

    /// Number of categories fetched in parallel (default: 1)
    #[arg(long, global = true)]
    concurrency: Option<usize>,
}

impl From<CrawlOptions> for Overrides {
    fn from(o: CrawlOptions) -> Self {
        Overrides {
            data_dir: o.data_dir,
            count_words: o.count_words,
            count_news: o.count_news,
            site_url: o.site_url,
            lemma_dict: o.lemma_dict,
            concurrency: o.concurrency,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl every category and write one frequency table per category
    Run {
        /// Print the run summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the categories found on the site root
    Categories {
        /// Print as JSON (id -> URL) instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Count words in a single category (no overlap removal) and show the top ones
    Words {
        /// Category ID as listed by `topwords categories` (e.g. world)
        category: String,

        /// How many words to show (default: --count-words)
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging goes to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("topwords=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::load()?.with_overrides(cli.options.into());
    config.validate()?;

    let fetcher = SiteFetcher::new(&config.site_url, config.selectors()?, config.count_news)?;

    match cli.command {
        Commands::Run { json } => {
            let normalizer = russian_normalizer(config.lemma_dict.as_deref())?;
            let writer = CsvWriter::new(&config.data_dir)?;

            if !json {
                println!("Crawling {}...", fetcher.site_url());
            }
            info!(
                data_dir = %config.data_dir.display(),
                count_words = config.count_words,
                count_news = config.count_news,
                "Starting crawl"
            );

            let summary = crawl::run(
                &fetcher,
                &normalizer,
                &writer,
                config.count_words,
                config.concurrency,
            )
            .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                terminal::display_run_summary(&summary);
                println!(
                    "{}",
                    format!("Tables written to {}", writer.data_dir().display()).bold()
                );
            }
        }

        Commands::Categories { json } => {
            let categories = fetcher.discover_categories().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else {
                terminal::display_categories(&categories);
            }
        }

        Commands::Words { category, limit } => {
            let categories = fetcher.discover_categories().await?;
            let Some((id, url)) = categories.get_key_value(category.as_str()) else {
                let known: Vec<&str> = categories.keys().map(|id| id.as_str()).collect();
                anyhow::bail!(
                    "Unknown category {category:?}. Known categories: {}",
                    if known.is_empty() {
                        "(none found)".to_string()
                    } else {
                        known.join(", ")
                    }
                );
            };

            let normalizer = russian_normalizer(config.lemma_dict.as_deref())?;

            println!("Counting words in {id}...");
            let texts = fetcher.fetch_article_texts(url).await?;
            let counts = aggregate(&texts, &normalizer);
            println!("  Articles read: {}", texts.len());

            terminal::display_top_words(id, &counts, limit.unwrap_or(config.count_words));
        }
    }

    Ok(())
}
