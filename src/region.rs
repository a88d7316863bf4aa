//! Buckets golf clubs into regions by postal-address prefix.

use clap::ValueEnum;
use strum_macros::{Display, EnumIter};

/// Ordered prefix markers; the first match wins.
const MARKERS: [(&str, Region); 3] = [
    ("경기도", Region::Gyeonggi),
    ("충청", Region::Chungcheong),
    ("강원", Region::Gangwon),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, ValueEnum)]
pub enum Region {
    Gyeonggi,
    Chungcheong,
    Gangwon,
    Other,
}

impl Region {
    /// Classifies a postal address by prefix. Total: addresses matching no marker, including
    /// the empty string, land in [`Region::Other`].
    pub fn classify(address: &str) -> Region {
        MARKERS
            .iter()
            .find(|(marker, _)| address.starts_with(marker))
            .map(|(_, region)| *region)
            .unwrap_or(Region::Other)
    }
}
