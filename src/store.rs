//! Favorites persistence: a flat JSON array of club names at a fixed path, surviving across
//! sessions the way browser local storage would.

use std::fs::File;
use std::io::Error;
use std::path::Path;

use serde_json::{from_reader, to_writer_pretty};
use tracing::warn;

/// Loads the persisted favorite list. A missing file is an empty list; a malformed one is
/// recovered as empty with a warning, never surfaced as an error.
pub fn load_favorites(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();
    let Ok(file) = File::open(path) else {
        return vec![];
    };
    match from_reader(file) {
        Ok(names) => names,
        Err(err) => {
            warn!("discarding malformed favorites file {}: {err}", path.display());
            vec![]
        }
    }
}

/// Writes the favorite list back out, pretty-printed.
pub fn save_favorites(path: impl AsRef<Path>, names: &[String]) -> Result<(), Error> {
    let file = File::create(path)?;
    Ok(to_writer_pretty(file, names)?)
}
