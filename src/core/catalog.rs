//! Reference Catalog
//!
//! The fixed sky every word is measured against: eight named bright stars and
//! three constellation regions. Built once on first use and never mutated, so
//! it can be read from any number of threads without locking.

use lazy_static::lazy_static;
use serde::Serialize;

use super::coordinates::Coordinate;
use super::error::{Result, StarmapError};

/// Label returned when a point falls outside every constellation region.
pub const UNASSIGNED_REGION: &str = "unassigned region";

// =============================================================================
// Catalog Entry
// =============================================================================

/// A named reference star.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub coordinate: Coordinate,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, azimuth: f64, polar: f64) -> Self {
        Self {
            name: name.into(),
            coordinate: Coordinate::new(azimuth, polar),
        }
    }
}

// =============================================================================
// Constellation Region
// =============================================================================

/// Axis-aligned box in (hours, degrees) space, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_azimuth: f64,
    pub max_azimuth: f64,
    pub min_polar: f64,
    pub max_polar: f64,
}

impl BoundingBox {
    /// Smallest box holding every point. `None` for an empty slice.
    pub fn enclosing(points: &[Coordinate]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = BoundingBox {
            min_azimuth: first.azimuth(),
            max_azimuth: first.azimuth(),
            min_polar: first.polar(),
            max_polar: first.polar(),
        };
        for p in &points[1..] {
            bbox.min_azimuth = bbox.min_azimuth.min(p.azimuth());
            bbox.max_azimuth = bbox.max_azimuth.max(p.azimuth());
            bbox.min_polar = bbox.min_polar.min(p.polar());
            bbox.max_polar = bbox.max_polar.max(p.polar());
        }
        Some(bbox)
    }

    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.min_azimuth..=self.max_azimuth).contains(&point.azimuth())
            && (self.min_polar..=self.max_polar).contains(&point.polar())
    }
}

/// A named constellation: member stars, the segments that join them, and the
/// box used for membership tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstellationRegion {
    pub name: String,
    pub members: Vec<Coordinate>,
    /// Index pairs into `members`, in drawing order
    pub lines: Vec<(usize, usize)>,
    /// Display accent color
    pub accent: String,
    pub bounds: BoundingBox,
}

impl ConstellationRegion {
    /// Build a region from `(hours, degrees)` members.
    ///
    /// Rejects regions without members and segments that point past the
    /// member list.
    pub fn new(
        name: impl Into<String>,
        members: &[(f64, f64)],
        lines: &[(usize, usize)],
        accent: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let members: Vec<Coordinate> = members
            .iter()
            .map(|&(az, polar)| Coordinate::new(az, polar))
            .collect();

        let bounds = BoundingBox::enclosing(&members).ok_or_else(|| {
            StarmapError::invalid_config(format!("constellation '{}' has no members", name))
        })?;

        if let Some(&(a, b)) = lines
            .iter()
            .find(|&&(a, b)| a >= members.len() || b >= members.len())
        {
            return Err(StarmapError::invalid_config(format!(
                "constellation '{}' line ({}, {}) is out of range",
                name, a, b
            )));
        }

        Ok(Self {
            name,
            members,
            lines: lines.to_vec(),
            accent: accent.into(),
            bounds,
        })
    }

    pub fn contains(&self, point: &Coordinate) -> bool {
        self.bounds.contains(point)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Reference stars and constellation regions, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    stars: Vec<CatalogEntry>,
    regions: Vec<ConstellationRegion>,
}

lazy_static! {
    static ref BUILTIN: Catalog = Catalog::build_builtin();
}

impl Catalog {
    /// Build a catalog. At least one reference star is required so that every
    /// nearest-star query has an answer.
    pub fn new(stars: Vec<CatalogEntry>, regions: Vec<ConstellationRegion>) -> Result<Self> {
        if stars.is_empty() {
            return Err(StarmapError::invalid_config(
                "catalog needs at least one reference star",
            ));
        }
        Ok(Self { stars, regions })
    }

    /// The built-in sky, shared for the whole process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn stars(&self) -> &[CatalogEntry] {
        &self.stars
    }

    pub fn regions(&self) -> &[ConstellationRegion] {
        &self.regions
    }

    /// Reference star names, in declaration order.
    pub fn star_names(&self) -> Vec<String> {
        self.stars.iter().map(|s| s.name.clone()).collect()
    }

    /// Constellation names, in declaration order.
    pub fn region_names(&self) -> Vec<String> {
        self.regions.iter().map(|r| r.name.clone()).collect()
    }

    fn build_builtin() -> Catalog {
        let stars = vec![
            CatalogEntry::new("Sirius", 6.752, -16.716),
            CatalogEntry::new("Rigel", 5.242, -8.202),
            CatalogEntry::new("Betelgeuse", 5.919, 7.407),
            CatalogEntry::new("Regulus", 10.140, 11.967),
            CatalogEntry::new("Alpha Centauri", 14.660, -60.834),
            CatalogEntry::new("Altair", 19.846, 8.868),
            CatalogEntry::new("Vega", 18.616, 38.784),
            CatalogEntry::new("Polaris", 2.530, 89.264),
        ];

        let regions = [
            ConstellationRegion::new(
                "Ursa Major",
                &[
                    (12.5, 55.0),
                    (13.0, 56.0),
                    (13.5, 57.0),
                    (13.5, 58.0),
                    (14.0, 58.5),
                    (14.5, 59.0),
                    (15.0, 60.0),
                ],
                &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)],
                "cyan",
            ),
            ConstellationRegion::new(
                "Orion",
                &[
                    (5.5, -5.0),
                    (5.5, -7.0),
                    (6.0, -1.0),
                    (6.0, -8.0),
                    (6.5, -2.0),
                    (6.5, -6.0),
                ],
                &[(0, 2), (2, 4), (1, 3), (3, 5)],
                "yellow",
            ),
            ConstellationRegion::new(
                "Cassiopeia",
                &[(1.0, 60.0), (1.5, 58.0), (2.0, 60.0), (2.5, 55.0), (3.0, 58.0)],
                &[(0, 1), (1, 2), (2, 3), (3, 4)],
                "magenta",
            ),
        ];

        // The tables above are fixed, so every region is well formed.
        Catalog {
            stars,
            regions: regions.into_iter().flatten().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.stars().len(), 8);
        assert_eq!(catalog.regions().len(), 3);
        assert_eq!(catalog.stars()[0].name, "Sirius");
        assert_eq!(catalog.stars()[7].name, "Polaris");
        assert_eq!(
            catalog.region_names(),
            vec!["Ursa Major", "Orion", "Cassiopeia"]
        );
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn test_region_bounds_cover_members() {
        let orion = &Catalog::builtin().regions()[1];
        assert_eq!(orion.bounds.min_azimuth, 5.5);
        assert_eq!(orion.bounds.max_azimuth, 6.5);
        assert_eq!(orion.bounds.min_polar, -8.0);
        assert_eq!(orion.bounds.max_polar, -1.0);
        for member in &orion.members {
            assert!(orion.contains(member));
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let orion = &Catalog::builtin().regions()[1];
        assert!(orion.contains(&Coordinate::new(5.5, -8.0)));
        assert!(orion.contains(&Coordinate::new(6.5, -1.0)));
        assert!(!orion.contains(&Coordinate::new(6.5001, -1.0)));
    }

    #[test]
    fn test_region_rejects_bad_lines() {
        let err = ConstellationRegion::new("Bad", &[(1.0, 1.0)], &[(0, 3)], "red").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_region_rejects_empty_members() {
        assert!(ConstellationRegion::new("Empty", &[], &[], "red").is_err());
    }

    #[test]
    fn test_catalog_requires_stars() {
        assert!(Catalog::new(Vec::new(), Vec::new()).is_err());
        assert!(Catalog::new(vec![CatalogEntry::new("Solo", 1.0, 1.0)], Vec::new()).is_ok());
    }
}
