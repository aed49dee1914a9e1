//! Synonym dictionaries for physical quantities.
//!
//! These are data, not logic: plain literal lists covering the common
//! net/gross/footprint/perimeter variants in English and Polish, folded
//! into canonical keys once. Adding a locale means extending a list.

use super::normalize::canonical_key;
use std::collections::HashSet;
use std::sync::OnceLock;

const LENGTH_SYNONYMS: &[&str] = &[
    "Length",
    "NetLength",
    "GrossLength",
    "NominalLength",
    "Perimeter",
    "NetPerimeter",
    "GrossPerimeter",
    "Długość",
    "Długość całkowita",
    "Obwód",
];

const AREA_SYNONYMS: &[&str] = &[
    "Area",
    "NetArea",
    "GrossArea",
    "NetSideArea",
    "GrossSideArea",
    "NetFootprintArea",
    "GrossFootprintArea",
    "NetSurfaceArea",
    "GrossSurfaceArea",
    "TotalSurfaceArea",
    "OuterSurfaceArea",
    "CrossSectionArea",
    "NetFloorArea",
    "GrossFloorArea",
    "Powierzchnia",
    "Powierzchnia netto",
    "Powierzchnia brutto",
    "Pole powierzchni",
];

const VOLUME_SYNONYMS: &[&str] = &[
    "Volume",
    "NetVolume",
    "GrossVolume",
    "NominalVolume",
    "Objętość",
    "Objętość netto",
    "Objętość brutto",
    "Kubatura",
];

const MASS_SYNONYMS: &[&str] = &[
    "Mass",
    "Weight",
    "NetWeight",
    "GrossWeight",
    "NominalWeight",
    "TotalWeight",
    "Masa",
    "Ciężar",
    "Ciężar własny",
    "Waga",
];

/// A fixed set of canonical keys considered equivalent to one physical
/// quantity.
pub struct SynonymSet {
    keys: HashSet<String>,
}

impl SynonymSet {
    fn from_literals(literals: &[&str]) -> Self {
        Self {
            keys: literals.iter().map(|s| canonical_key(s)).collect(),
        }
    }

    /// Membership test for an already-canonicalized key.
    #[must_use]
    pub fn contains_key(&self, canonical: &str) -> bool {
        self.keys.contains(canonical)
    }
}

pub fn length() -> &'static SynonymSet {
    static SET: OnceLock<SynonymSet> = OnceLock::new();
    SET.get_or_init(|| SynonymSet::from_literals(LENGTH_SYNONYMS))
}

pub fn area() -> &'static SynonymSet {
    static SET: OnceLock<SynonymSet> = OnceLock::new();
    SET.get_or_init(|| SynonymSet::from_literals(AREA_SYNONYMS))
}

pub fn volume() -> &'static SynonymSet {
    static SET: OnceLock<SynonymSet> = OnceLock::new();
    SET.get_or_init(|| SynonymSet::from_literals(VOLUME_SYNONYMS))
}

pub fn mass() -> &'static SynonymSet {
    static SET: OnceLock<SynonymSet> = OnceLock::new();
    SET.get_or_init(|| SynonymSet::from_literals(MASS_SYNONYMS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_locale_and_separator_tolerant() {
        assert!(area().contains_key(&canonical_key("Net Side Area")));
        assert!(area().contains_key(&canonical_key("powierzchnia netto")));
        assert!(volume().contains_key(&canonical_key("Objętość")));
        assert!(volume().contains_key(&canonical_key("objetosc")));
        assert!(mass().contains_key(&canonical_key("Ciężar_własny")));
        assert!(length().contains_key(&canonical_key("Gross-Perimeter")));
    }

    #[test]
    fn sets_do_not_bleed_into_each_other() {
        assert!(!area().contains_key(&canonical_key("Volume")));
        assert!(!length().contains_key(&canonical_key("NetArea")));
        assert!(!mass().contains_key(&canonical_key("Length")));
    }
}
