use anyhow::Context;
use clap::Parser;
use news_aggregator::{Category, NewsAggregator};
use tracing::info;

/// Fetch one category of headlines and print them, newest first.
#[derive(Parser, Debug)]
#[command(name = "news-aggregator")]
struct Args {
    /// Category to fetch: world, foreign, sport, tech, entertainment
    #[arg(short, long, default_value = "world")]
    category: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let category: Category = args
        .category
        .parse()
        .with_context(|| format!("unrecognized category '{}'", args.category))?;

    info!(%category, "fetching headlines");
    let aggregator = NewsAggregator::with_defaults().context("failed to build aggregator")?;

    let outcome = aggregator.get_news(category).await;
    if outcome.is_empty() {
        println!("No results for '{category}'. Check your connection or try again later.");
        return Ok(());
    }

    for item in outcome.items() {
        let date = if item.pub_date.is_empty() {
            "(no date)"
        } else {
            &item.pub_date
        };
        println!("[{}] {} ({})", item.source_name, item.title, date);
        if !item.link.is_empty() {
            println!("    {}", item.link);
        }
    }

    Ok(())
}
