//! The favorite-club catalog and per-region selection state.
//!
//! Favorites persist as one flat list of club names, but are edited one region at a time.
//! [`FavoritesState`] reconciles the flat list against the session catalog into per-region
//! buckets, lets a single region's bucket be replaced while the others are preserved, and
//! flattens back out for persistence.

use std::collections::HashSet;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use strum::IntoEnumIterator;

use crate::region::Region;

/// Address metadata for one club, as served by the static resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ClubMeta {
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// One club joined with its classified region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubCatalogEntry {
    pub name: String,
    pub region: Region,
}

/// All known clubs with their regions, derived once per session. Catalog order is the order of
/// the club-listing service and fixes the in-bucket order of favorites.
#[derive(Debug, Clone, Default)]
pub struct ClubCatalog {
    entries: Vec<ClubCatalogEntry>,
}

impl ClubCatalog {
    /// Joins the club listing against the address metadata. Clubs without a metadata entry
    /// land in [`Region::Other`].
    pub fn build(names: impl IntoIterator<Item = String>, meta: &[ClubMeta]) -> Self {
        let entries = names
            .into_iter()
            .map(|name| {
                let region = meta
                    .iter()
                    .find(|m| m.name == name)
                    .map(|m| Region::classify(&m.address))
                    .unwrap_or(Region::Other);
                ClubCatalogEntry { name, region }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ClubCatalogEntry] {
        &self.entries
    }

    pub fn in_region(&self, region: Region) -> impl Iterator<Item = &ClubCatalogEntry> {
        self.entries.iter().filter(move |entry| entry.region == region)
    }
}

/// Per-region selection of favorite clubs. Invariant: a bucket holds only clubs of its own
/// region, in catalog order, and the flattened union of buckets is the persisted list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesState {
    buckets: FxHashMap<Region, Vec<String>>,
}

impl FavoritesState {
    /// Reconciles a flat persisted list against the catalog: each region's bucket is the
    /// catalog clubs of that region appearing in `persisted`, in catalog order (not the order
    /// of the persisted list). Names unknown to the catalog are dropped.
    pub fn load(persisted: &[String], catalog: &ClubCatalog) -> Self {
        let mut buckets = FxHashMap::default();
        for region in Region::iter() {
            let bucket = catalog
                .in_region(region)
                .filter(|entry| persisted.contains(&entry.name))
                .map(|entry| entry.name.clone())
                .collect();
            buckets.insert(region, bucket);
        }
        Self { buckets }
    }

    /// Selects or deselects every catalog club of one region. Other regions are untouched.
    pub fn toggle_all(&mut self, region: Region, select: bool, catalog: &ClubCatalog) {
        let bucket = if select {
            catalog
                .in_region(region)
                .map(|entry| entry.name.clone())
                .collect()
        } else {
            vec![]
        };
        self.buckets.insert(region, bucket);
    }

    /// Replaces one region's bucket with the selected names, keeping catalog order and
    /// dropping any name that is not a catalog club of that region. Buckets of regions not
    /// currently being edited are preserved unchanged, which is how selections survive
    /// switching between region tabs.
    pub fn commit(&mut self, region: Region, selected: &HashSet<String>, catalog: &ClubCatalog) {
        let bucket = catalog
            .in_region(region)
            .filter(|entry| selected.contains(&entry.name))
            .map(|entry| entry.name.clone())
            .collect();
        self.buckets.insert(region, bucket);
    }

    pub fn bucket(&self, region: Region) -> &[String] {
        self.buckets
            .get(&region)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Flat list for persistence: every bucket concatenated in fixed region order.
    pub fn flatten(&self) -> Vec<String> {
        Region::iter()
            .flat_map(|region| self.bucket(region).iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests;
