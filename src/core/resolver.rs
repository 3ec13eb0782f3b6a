//! Nearest-Neighbor Resolver
//!
//! Answers two questions about a derived coordinate: which reference star is
//! closest, and which constellation region (if any) holds it.
//!
//! Distance is planar Euclidean in raw (hours, degrees) space, not
//! great-circle. Ties go to the earlier catalog entry.

use super::catalog::{Catalog, CatalogEntry, UNASSIGNED_REGION};
use super::coordinates::Coordinate;

/// The closest reference star and how far away it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestStar<'a> {
    pub entry: &'a CatalogEntry,
    pub distance: f64,
}

/// Find the catalog entry closest to `point`.
pub fn nearest_catalog_entry<'a>(catalog: &'a Catalog, point: &Coordinate) -> NearestStar<'a> {
    let mut stars = catalog.stars().iter();
    // Catalog::new guarantees at least one star
    let first = stars.next().expect("catalog holds at least one star");
    let mut best = NearestStar {
        entry: first,
        distance: point.planar_distance(&first.coordinate),
    };

    for entry in stars {
        let distance = point.planar_distance(&entry.coordinate);
        // Strict comparison keeps the first of equally distant entries
        if distance < best.distance {
            best = NearestStar { entry, distance };
        }
    }
    best
}

/// Name of the first region whose bounding box contains `point`, or
/// [`UNASSIGNED_REGION`].
pub fn constellation_of<'a>(catalog: &'a Catalog, point: &Coordinate) -> &'a str {
    catalog
        .regions()
        .iter()
        .find(|region| region.contains(point))
        .map(|region| region.name.as_str())
        .unwrap_or(UNASSIGNED_REGION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::ConstellationRegion;

    #[test]
    fn test_exact_catalog_point_has_zero_distance() {
        let catalog = Catalog::builtin();
        for entry in catalog.stars() {
            let nearest = nearest_catalog_entry(catalog, &entry.coordinate);
            assert_eq!(nearest.entry.name, entry.name);
            assert_eq!(nearest.distance, 0.0);
        }
    }

    #[test]
    fn test_nearest_picks_closest() {
        let catalog = Catalog::builtin();
        let nearest = nearest_catalog_entry(catalog, &Coordinate::new(18.0, 40.0));
        assert_eq!(nearest.entry.name, "Vega");
        assert!(nearest.distance > 0.0);
    }

    #[test]
    fn test_nearest_tie_goes_to_first_declared() {
        let catalog = Catalog::new(
            vec![
                CatalogEntry::new("West", 1.0, 0.0),
                CatalogEntry::new("East", 3.0, 0.0),
            ],
            Vec::new(),
        )
        .unwrap();
        let nearest = nearest_catalog_entry(&catalog, &Coordinate::new(2.0, 0.0));
        assert_eq!(nearest.entry.name, "West");
        assert_eq!(nearest.distance, 1.0);
    }

    #[test]
    fn test_distance_uses_raw_planar_space() {
        let catalog = Catalog::new(
            vec![
                CatalogEntry::new("Dawn", 0.5, 0.0),
                CatalogEntry::new("Dusk", 20.0, 0.0),
            ],
            Vec::new(),
        )
        .unwrap();
        // 23.5h is 1h from Dawn across the wrap, but planar distance says 23
        let nearest = nearest_catalog_entry(&catalog, &Coordinate::new(23.5, 0.0));
        assert_eq!(nearest.entry.name, "Dusk");
        assert_eq!(nearest.distance, 3.5);
    }

    #[test]
    fn test_constellation_membership() {
        let catalog = Catalog::builtin();
        assert_eq!(constellation_of(catalog, &Coordinate::new(6.0, -5.0)), "Orion");
        assert_eq!(constellation_of(catalog, &Coordinate::new(13.0, 57.5)), "Ursa Major");
        assert_eq!(constellation_of(catalog, &Coordinate::new(2.0, 56.0)), "Cassiopeia");
        assert_eq!(
            constellation_of(catalog, &Coordinate::new(20.0, -40.0)),
            UNASSIGNED_REGION
        );
    }

    #[test]
    fn test_constellation_first_declared_wins() {
        let catalog = Catalog::new(
            vec![CatalogEntry::new("Anchor", 0.0, 0.0)],
            vec![
                ConstellationRegion::new("Outer", &[(0.0, 0.0), (10.0, 10.0)], &[(0, 1)], "red")
                    .unwrap(),
                ConstellationRegion::new("Inner", &[(4.0, 4.0), (6.0, 6.0)], &[(0, 1)], "blue")
                    .unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(constellation_of(&catalog, &Coordinate::new(5.0, 5.0)), "Outer");
    }
}
