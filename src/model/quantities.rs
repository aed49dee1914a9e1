use serde::{Deserialize, Serialize};
use std::fmt;

/// Preferred measurement unit for a classified element type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// Piece count.
    #[default]
    #[serde(rename = "UT")]
    Ut,
    /// Linear metres.
    #[serde(rename = "ML")]
    Ml,
    /// Square metres.
    #[serde(rename = "M2")]
    M2,
    /// Cubic metres.
    #[serde(rename = "M3")]
    M3,
    /// Kilograms.
    #[serde(rename = "KG")]
    Kg,
}

impl Unit {
    pub const ALL: [Unit; 5] = [Unit::Ut, Unit::Ml, Unit::M2, Unit::M3, Unit::Kg];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Unit::Ut => "UT",
            Unit::Ml => "ML",
            Unit::M2 => "M2",
            Unit::M3 => "M3",
            Unit::Kg => "KG",
        }
    }

    /// Next unit in display order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Unit::Ut => Unit::Ml,
            Unit::Ml => Unit::M2,
            Unit::M2 => Unit::M3,
            Unit::M3 => Unit::Kg,
            Unit::Kg => Unit::Ut,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical quantities and annotations resolved for one element.
///
/// `None` means "not determinable", which is distinct from zero; the
/// aggregator sums absent quantities as zero by convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedQuantities {
    pub length: Option<f64>,
    pub area: Option<f64>,
    pub volume: Option<f64>,
    pub mass: Option<f64>,
    pub mark: Option<String>,
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unit_serializes_to_store_codes() {
        assert_eq!(serde_json::to_string(&Unit::M2).unwrap(), "\"M2\"");
        let unit: Unit = serde_json::from_str("\"KG\"").unwrap();
        assert_eq!(unit, Unit::Kg);
    }

    #[test]
    fn unit_cycle_visits_all_and_wraps() {
        let mut unit = Unit::Ut;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(unit);
            unit = unit.next();
        }
        assert_eq!(seen, Unit::ALL.to_vec());
        assert_eq!(unit, Unit::Ut);
    }
}
