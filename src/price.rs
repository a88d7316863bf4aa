//! Price-band filtering of raw listings.

use clap::ValueEnum;
use strum_macros::{Display, EnumIter};

/// Selectable price bands, in won. Bands overlap deliberately: a 90,000원 listing passes under
/// either of the first two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, ValueEnum)]
pub enum PriceBand {
    /// 100,000원 and under.
    #[value(name = "100k")]
    AtMost100k,

    /// 150,000원 and under.
    #[value(name = "150k")]
    AtMost150k,

    /// Strictly over 150,000원.
    #[value(name = "over")]
    Over150k,
}

impl PriceBand {
    pub fn matches(&self, price: u32) -> bool {
        match self {
            PriceBand::AtMost100k => price <= 100_000,
            PriceBand::AtMost150k => price <= 150_000,
            PriceBand::Over150k => price > 150_000,
        }
    }
}

/// Disjunction over the selected bands. An empty selection is the open filter: every price
/// passes, rather than none.
#[derive(Debug, Clone, Default)]
pub struct PriceFilter {
    bands: Vec<PriceBand>,
}

impl From<Vec<PriceBand>> for PriceFilter {
    fn from(bands: Vec<PriceBand>) -> Self {
        Self { bands }
    }
}

impl PriceFilter {
    pub fn accept(&self, price: u32) -> bool {
        self.bands.is_empty() || self.bands.iter().any(|band| band.matches(price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_passes_everything() {
        let filter = PriceFilter::default();
        for price in [0, 99_999, 100_000, 150_001, 10_000_000] {
            assert!(filter.accept(price), "{price} should pass the open filter");
        }
    }

    #[test]
    fn at_most_100k_is_inclusive() {
        let filter = PriceFilter::from(vec![PriceBand::AtMost100k]);
        assert!(filter.accept(100_000));
        assert!(!filter.accept(100_001));
    }

    #[test]
    fn over_band_is_exclusive_at_the_threshold() {
        let filter = PriceFilter::from(vec![PriceBand::Over150k]);
        assert!(!filter.accept(150_000));
        assert!(filter.accept(150_001));
    }

    #[test]
    fn bands_are_independent() {
        // 90,000 satisfies both of the ≤ bands; selecting either admits it
        assert!(PriceFilter::from(vec![PriceBand::AtMost100k]).accept(90_000));
        assert!(PriceFilter::from(vec![PriceBand::AtMost150k]).accept(90_000));
    }

    #[test]
    fn disjunction_over_selected_bands() {
        let filter = PriceFilter::from(vec![PriceBand::AtMost100k, PriceBand::Over150k]);
        assert!(filter.accept(80_000));
        assert!(!filter.accept(120_000));
        assert!(filter.accept(160_000));
    }
}
