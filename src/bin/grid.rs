use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::bail;
use chrono::{Datelike, Local};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, error, info};

use teegrid::data::{ServiceClient, TeeTimeQuery};
use teegrid::grid::PriceGrid;
use teegrid::price::{PriceBand, PriceFilter};
use teegrid::print;
use teegrid::store;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// base URL of the aggregation backend
    #[clap(long, default_value = "http://localhost:5000")]
    base_url: String,

    /// first date of the query range (YYYY-MM-DD); defaults to tomorrow
    #[clap(short = 's', long)]
    start: Option<String>,

    /// last date of the query range (YYYY-MM-DD); defaults to the start date
    #[clap(short = 'e', long)]
    end: Option<String>,

    /// restrict listings to these hours of day, e.g. -H 8 -H 14
    #[clap(short = 'H', long = "hour")]
    hours: Vec<u32>,

    /// keep only these price bands; selecting none keeps everything
    #[clap(short = 'p', long = "price")]
    prices: Vec<PriceBand>,

    /// favorites file restricting the queried clubs
    #[clap(long, default_value = "favorites.json")]
    favorites: PathBuf,

    /// query every club, ignoring the favorites file
    #[clap(long)]
    all: bool,

    /// reference year for ordering date labels that carry no year of their own
    #[clap(long)]
    year: Option<i32>,

    /// re-query every given number of seconds instead of exiting
    #[clap(short = 'w', long)]
    watch: Option<u64>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.hours.iter().any(|&hour| hour > 23) {
            bail!("hours must fall within 0..=23");
        }
        if self.watch == Some(0) {
            bail!("the watch interval must be at least one second");
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let client = ServiceClient::new(&args.base_url);
    let year = args.year.unwrap_or_else(|| Local::now().year());
    let filter = PriceFilter::from(args.prices.clone());

    run_cycle(&client, &args, &filter, year).await;
    if let Some(secs) = args.watch {
        loop {
            tokio::time::sleep(Duration::from_secs(secs)).await;
            run_cycle(&client, &args, &filter, year).await;
        }
    }
    Ok(())
}

/// One query cycle: poke the server-side refresh (detached, best effort), fetch, filter,
/// group, render. A failed query renders a single status row and never aborts a watch loop.
async fn run_cycle(client: &ServiceClient, args: &Args, filter: &PriceFilter, year: i32) {
    let refresh_client = client.clone();
    tokio::spawn(async move { refresh_client.trigger_refresh().await });

    let query = build_query(args);
    debug!("querying {} to {}", query.start_date, query.end_date);
    match client.tee_times(&query).await {
        Ok(records) => {
            let sourced = records.len();
            let records: Vec<_> = records
                .into_iter()
                .filter(|record| filter.accept(record.price))
                .collect();
            debug!("{} of {sourced} listings pass the price filter", records.len());
            let grid = PriceGrid::group(records);
            let table = print::tabulate(&grid, year);
            info!("\n{}", Console::default().render(&table));
        }
        Err(err) => {
            error!("query failed: {err}");
            let status = print::status_row(&format!("query failed: {err}"));
            info!("\n{}", Console::default().render(&status));
        }
    }
}

fn build_query(args: &Args) -> TeeTimeQuery {
    let tomorrow = (Local::now() + chrono::Duration::days(1))
        .format("%Y-%m-%d")
        .to_string();
    let start_date = args.start.clone().unwrap_or(tomorrow);
    let end_date = args.end.clone().unwrap_or_else(|| start_date.clone());
    let favorite_clubs = if args.all {
        vec![]
    } else {
        store::load_favorites(&args.favorites)
    };
    TeeTimeQuery {
        start_date,
        end_date,
        hour_range: if args.hours.is_empty() {
            None
        } else {
            Some(args.hours.clone())
        },
        favorite_clubs,
    }
}
