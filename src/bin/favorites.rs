use std::collections::HashSet;
use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use teegrid::data::ServiceClient;
use teegrid::favorites::{ClubCatalog, FavoritesState};
use teegrid::region::Region;
use teegrid::store;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// base URL of the aggregation backend
    #[clap(long, default_value = "http://localhost:5000")]
    base_url: String,

    /// favorites file to load and save
    #[clap(long, default_value = "favorites.json")]
    favorites: PathBuf,

    /// select every club of the given region
    #[clap(long, value_name = "REGION")]
    select_all: Option<Region>,

    /// clear every selection in the given region
    #[clap(long, value_name = "REGION")]
    clear: Option<Region>,

    /// region whose selection --set replaces
    #[clap(short = 'r', long)]
    region: Option<Region>,

    /// comma-separated club names becoming the --region selection
    #[clap(long, value_delimiter = ',')]
    set: Vec<String>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        let mutations = [
            self.select_all.is_some(),
            self.clear.is_some(),
            self.region.is_some(),
        ];
        if mutations.iter().filter(|&&set| set).count() > 1 {
            bail!("--select-all, --clear and --region are mutually exclusive");
        }
        if !self.set.is_empty() && self.region.is_none() {
            bail!("--set requires --region");
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
    let names = client.club_names().await?;
    let meta = client.club_meta().await?;
    let catalog = ClubCatalog::build(names, &meta);
    debug!("catalog holds {} clubs", catalog.entries().len());

    let persisted = store::load_favorites(&args.favorites);
    let mut state = FavoritesState::load(&persisted, &catalog);

    if let Some(region) = args.select_all {
        state.toggle_all(region, true, &catalog);
    } else if let Some(region) = args.clear {
        state.toggle_all(region, false, &catalog);
    } else if let Some(region) = args.region {
        let selected: HashSet<String> = args.set.iter().cloned().collect();
        state.commit(region, &selected, &catalog);
    } else {
        list_selections(&state, &catalog);
        return Ok(());
    }

    let flat = state.flatten();
    store::save_favorites(&args.favorites, &flat)?;
    info!("saved {} favorites to {}", flat.len(), args.favorites.display());
    Ok(())
}

/// Prints every region's clubs with selection marks.
fn list_selections(state: &FavoritesState, catalog: &ClubCatalog) {
    for region in Region::iter() {
        info!("{region}:");
        let bucket = state.bucket(region);
        for entry in catalog.in_region(region) {
            let mark = if bucket.contains(&entry.name) { 'x' } else { ' ' };
            info!("  [{mark}] {}", entry.name);
        }
    }
}
