//! Ordered result of dominant color extraction

use crate::color::ColorRgba;

/// One extracted color and the number of sampled pixels it represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub color: ColorRgba,
    pub population: usize,
}

/// Colors ordered by descending pixel coverage.
///
/// Never empty: construction either gets at least one clustered color or
/// the fallback pair. Entry 0 is the dominant color and entry 1, when
/// present, the secondary.
#[derive(Debug, Clone, PartialEq)]
pub struct DominantColorSet {
    entries: Vec<PaletteEntry>,
    fallback: bool,
}

impl DominantColorSet {
    /// Build from clustered entries, sorting by descending population.
    ///
    /// Returns `None` for an empty entry list. The sort is stable, so
    /// equally populated clusters keep their input order.
    pub fn from_clusters(mut entries: Vec<PaletteEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        entries.sort_by(|a, b| b.population.cmp(&a.population));
        Some(Self {
            entries,
            fallback: false,
        })
    }

    /// The documented fallback pair, used when clustering is infeasible.
    pub fn fallback(dominant: ColorRgba, secondary: ColorRgba) -> Self {
        Self {
            entries: vec![
                PaletteEntry {
                    color: dominant,
                    population: 0,
                },
                PaletteEntry {
                    color: secondary,
                    population: 0,
                },
            ],
            fallback: true,
        }
    }

    pub fn dominant(&self) -> ColorRgba {
        self.entries[0].color
    }

    pub fn secondary(&self) -> Option<ColorRgba> {
        self.entries.get(1).map(|e| e.color)
    }

    /// Colors beyond dominant and secondary.
    pub fn additional(&self) -> &[PaletteEntry] {
        self.entries.get(2..).unwrap_or(&[])
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn colors(&self) -> impl Iterator<Item = ColorRgba> + '_ {
        self.entries.iter().map(|e| e.color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the fallback pair was returned instead of clustered colors.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Share of sampled pixels covered by each entry, in percent.
    ///
    /// All zeros for the fallback set.
    pub fn coverage_percent(&self) -> Vec<f32> {
        let total: usize = self.entries.iter().map(|e| e.population).sum();
        self.entries
            .iter()
            .map(|e| {
                if total == 0 {
                    0.0
                } else {
                    e.population as f32 * 100.0 / total as f32
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(r: u8, population: usize) -> PaletteEntry {
        PaletteEntry {
            color: ColorRgba::opaque(r, 0, 0),
            population,
        }
    }

    #[test]
    fn test_sorted_by_population_stable() {
        let set =
            DominantColorSet::from_clusters(vec![entry(1, 5), entry(2, 9), entry(3, 5)]).unwrap();
        let reds: Vec<u8> = set.colors().map(|c| c.r).collect();
        assert_eq!(reds, vec![2, 1, 3]);
        assert_eq!(set.dominant().r, 2);
        assert_eq!(set.secondary().map(|c| c.r), Some(1));
        assert_eq!(set.additional().len(), 1);
        assert!(!set.is_fallback());
    }

    #[test]
    fn test_empty_clusters_rejected() {
        assert!(DominantColorSet::from_clusters(Vec::new()).is_none());
    }

    #[test]
    fn test_single_color_has_no_secondary() {
        let set = DominantColorSet::from_clusters(vec![entry(7, 1)]).unwrap();
        assert_eq!(set.secondary(), None);
        assert!(set.additional().is_empty());
    }

    #[test]
    fn test_coverage_percent() {
        let set = DominantColorSet::from_clusters(vec![entry(1, 1), entry(2, 3)]).unwrap();
        assert_eq!(set.coverage_percent(), vec![75.0, 25.0]);

        let fallback = DominantColorSet::fallback(ColorRgba::WHITE, ColorRgba::BLACK);
        assert!(fallback.is_fallback());
        assert_eq!(fallback.coverage_percent(), vec![0.0, 0.0]);
    }
}
