//! Grouping and winner selection: folds a flat list of raw listings into one winning offer per
//! (slot, club) cell.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::slot::SlotKey;

/// Booking provider a listing was sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Source {
    Teescan,
    Golfpang,
}

impl Source {
    /// Whether this provider always loses a cell tie-break against a differently sourced
    /// listing for the same slot.
    pub fn deprioritized(&self) -> bool {
        matches!(self, Source::Golfpang)
    }

    /// Single-letter provider mark used in rendered cells.
    pub fn initial(&self) -> char {
        match self {
            Source::Teescan => 'T',
            Source::Golfpang => 'G',
        }
    }
}

/// One tee-time offer as returned by the query service. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeeTimeRecord {
    pub date: String,
    pub hour: String,
    pub golf: String,
    pub price: u32,
    pub source: Source,
    pub url: String,
}

impl TeeTimeRecord {
    pub fn slot(&self) -> SlotKey {
        SlotKey::new(&self.date, &self.hour)
    }
}

/// Grouped comparison grid holding at most one winning record per (slot, club) cell, plus the
/// set of distinct club names seen across all input records. Built fresh per query.
#[derive(Debug, Default)]
pub struct PriceGrid {
    /// First-seen order of row keys; the chronological sort is stable with respect to it.
    slots: Vec<SlotKey>,
    cells: FxHashMap<SlotKey, FxHashMap<String, TeeTimeRecord>>,
    clubs: BTreeSet<String>,
}

impl PriceGrid {
    pub fn group(records: impl IntoIterator<Item = TeeTimeRecord>) -> Self {
        let mut grid = PriceGrid::default();
        for record in records {
            grid.insert(record);
        }
        grid
    }

    /// Offers a record to its cell. An empty cell is occupied outright; an occupied cell is
    /// yielded only when the occupant's source is deprioritized and the incoming record's is
    /// not. Collisions of equal priority keep the first-seen occupant.
    fn insert(&mut self, record: TeeTimeRecord) {
        self.clubs.insert(record.golf.clone());
        let slot = record.slot();
        if !self.cells.contains_key(&slot) {
            self.slots.push(slot.clone());
        }
        let row = self.cells.entry(slot).or_default();
        let wins = match row.get(&record.golf) {
            None => true,
            Some(occupant) => {
                occupant.source.deprioritized() && !record.source.deprioritized()
            }
        };
        if wins {
            row.insert(record.golf.clone(), record);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Distinct club names across all input records, in alphabetical (column) order.
    pub fn clubs(&self) -> impl Iterator<Item = &str> {
        self.clubs.iter().map(String::as_str)
    }

    /// Row keys ordered by the chronological comparator against the given reference year.
    /// Keys comparing equal retain their first-seen order.
    pub fn slots_chronological(&self, year: i32) -> Vec<&SlotKey> {
        let mut slots: Vec<_> = self.slots.iter().collect();
        slots.sort_by(|a, b| a.chronological(b, year));
        slots
    }

    pub fn cell(&self, slot: &SlotKey, club: &str) -> Option<&TeeTimeRecord> {
        self.cells.get(slot).and_then(|row| row.get(club))
    }

    /// Minimum price over the row's occupied cells. Ties at the minimum are not broken; the
    /// renderer flags every cell matching it.
    pub fn row_min(&self, slot: &SlotKey) -> Option<u32> {
        self.cells
            .get(slot)?
            .values()
            .map(|record| record.price)
            .min()
    }
}
