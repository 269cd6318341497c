//! # Season Catalog — Configured Allowed Sets
//!
//! The authority publishes which species may be fished, in which areas, and
//! during which season windows. The intake layer validates every permit
//! application against this catalog, so the allowed sets live in one
//! configuration structure rather than scattered literals.
//!
//! Catalogs are constructed from the built-in defaults or loaded from a
//! YAML file supplied by the deployment.

use serde::{Deserialize, Serialize};

use crate::error::AuthorityError;
use crate::temporal::CalendarDate;

/// An open fishing season with its calendar window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    /// Display label, e.g. `Fall 2025`. Permit applications name this.
    pub label: String,
    /// First day of the season.
    pub opens_on: CalendarDate,
    /// Last day of the season; permits expire once the reference date
    /// reaches this day. Strictly after `opens_on`.
    pub closes_on: CalendarDate,
}

/// The authority's configured allowed sets: species, fishing areas, and
/// open seasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonCatalog {
    /// Species a permit may be issued for.
    pub fish_types: Vec<String>,
    /// Fishing areas a permit may cover.
    pub fishing_areas: Vec<String>,
    /// Seasons currently open for applications.
    pub seasons: Vec<Season>,
}

impl SeasonCatalog {
    /// The built-in catalog used when the deployment supplies no YAML file.
    pub fn builtin() -> Self {
        Self {
            fish_types: [
                "Salmon", "Crab", "Lobster", "Tuna", "Cod", "Halibut", "Shrimp", "Mackerel",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            fishing_areas: [
                "Coastal Zone A",
                "Coastal Zone B",
                "Deep Water Zone A",
                "Deep Water Zone B",
                "Offshore Zone C",
                "Protected Waters",
                "International Waters",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            seasons: vec![
                Season {
                    label: "Spring 2025".to_string(),
                    opens_on: ymd(2025, 3, 1),
                    closes_on: ymd(2025, 5, 31),
                },
                Season {
                    label: "Summer 2025".to_string(),
                    opens_on: ymd(2025, 6, 1),
                    closes_on: ymd(2025, 8, 31),
                },
                Season {
                    label: "Fall 2025".to_string(),
                    opens_on: ymd(2025, 9, 1),
                    closes_on: ymd(2025, 11, 30),
                },
            ],
        }
    }

    /// Load a catalog from a YAML file and validate it.
    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self, AuthorityError> {
        let raw = std::fs::read_to_string(path).map_err(|e| AuthorityError::CatalogLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let catalog: Self =
            serde_yaml::from_str(&raw).map_err(|e| AuthorityError::CatalogLoad {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Whether the catalog allows this species.
    pub fn allows_fish_type(&self, fish_type: &str) -> bool {
        self.fish_types.iter().any(|t| t == fish_type)
    }

    /// Whether the catalog allows this fishing area.
    pub fn allows_area(&self, area: &str) -> bool {
        self.fishing_areas.iter().any(|a| a == area)
    }

    /// Look up an open season by its label.
    pub fn season(&self, label: &str) -> Option<&Season> {
        self.seasons.iter().find(|s| s.label == label)
    }

    /// Check catalog invariants: every season window must close strictly
    /// after it opens.
    pub fn validate(&self) -> Result<(), AuthorityError> {
        for season in &self.seasons {
            if season.closes_on <= season.opens_on {
                return Err(AuthorityError::Validation {
                    field: "seasons".to_string(),
                    reason: format!(
                        "season '{}' closes on {} which is not after it opens on {}",
                        season.label, season.closes_on, season.opens_on
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Default for SeasonCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// Literals below are known-valid calendar dates.
fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_naive(chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = SeasonCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.fish_types.len(), 8);
        assert_eq!(catalog.fishing_areas.len(), 7);
        assert_eq!(catalog.seasons.len(), 3);
    }

    #[test]
    fn test_allows_fish_type() {
        let catalog = SeasonCatalog::builtin();
        assert!(catalog.allows_fish_type("Crab"));
        assert!(!catalog.allows_fish_type("Kraken"));
    }

    #[test]
    fn test_allows_area() {
        let catalog = SeasonCatalog::builtin();
        assert!(catalog.allows_area("Coastal Zone A"));
        assert!(!catalog.allows_area("The Mariana Trench"));
    }

    #[test]
    fn test_season_lookup() {
        let catalog = SeasonCatalog::builtin();
        let season = catalog.season("Fall 2025").unwrap();
        assert_eq!(season.opens_on.to_iso(), "2025-09-01");
        assert_eq!(season.closes_on.to_iso(), "2025-11-30");
        assert!(catalog.season("Fall 1925").is_none());
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let mut catalog = SeasonCatalog::builtin();
        catalog.seasons[0].closes_on = catalog.seasons[0].opens_on;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let catalog = SeasonCatalog::builtin();
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let parsed: SeasonCatalog = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.fish_types, catalog.fish_types);
        assert_eq!(parsed.seasons.len(), catalog.seasons.len());
    }
}
