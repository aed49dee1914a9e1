//! Quantity resolution and exact-tag extraction over property sets.

use super::normalize::canonical_key;
use super::numeric::{parse_magnitude, WRAPPER_FIELDS};
use super::synonyms::{self, SynonymSet};
use crate::model::{MetaObject, PropertySet, PropertyValue, ResolvedQuantities};

/// Exact attribute names carrying an element's mark.
pub const MARK_ALIASES: &[&str] = &["Mark"];

/// Exact attribute names treated as aliases of the remarks field.
pub const REMARKS_ALIASES: &[&str] = &["Remarks", "Comments", "Comment"];

/// First strictly-positive quantity whose property name falls in the
/// synonym set, scanning property sets in declared order.
///
/// Source graphs often carry both a raw and a derived measurement under
/// different synonym keys; first-match in declared order is the
/// deterministic policy here, at the cost of not always picking the
/// largest figure. Non-positive or unparseable matches are skipped and
/// the scan continues.
#[must_use]
pub fn resolve_quantity(sets: &[PropertySet], synonyms: &SynonymSet) -> Option<f64> {
    for set in sets {
        for property in &set.properties {
            if !synonyms.contains_key(&canonical_key(&property.name)) {
                continue;
            }
            if let Some(value) = parse_magnitude(&property.value) {
                if value > 0.0 {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// Verbatim tag lookup: first property whose name equals one of the
/// aliases, case-sensitive, no normalization. These fields are authored
/// consistently by upstream tooling, so fuzzy matching would only add
/// false positives. Matches whose value renders to nothing are skipped.
#[must_use]
pub fn extract_tag(sets: &[PropertySet], aliases: &[&str]) -> Option<String> {
    for set in sets {
        for property in &set.properties {
            if !aliases.contains(&property.name.as_str()) {
                continue;
            }
            if let Some(text) = value_text(&property.value) {
                return Some(text);
            }
        }
    }
    None
}

/// Render a raw value as display text, probing wrapped payloads the same
/// way the numeric parser does. Empty and null values render to `None`.
#[must_use]
pub(crate) fn value_text(value: &PropertyValue) -> Option<String> {
    match value {
        PropertyValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        PropertyValue::Number(n) if n.is_finite() => Some(n.to_string()),
        PropertyValue::Number(_) | PropertyValue::Null => None,
        PropertyValue::Wrapped(fields) => WRAPPER_FIELDS
            .iter()
            .find_map(|name| fields.get(*name))
            .and_then(value_text),
    }
}

/// Resolve all quantities and annotations for one element.
#[must_use]
pub fn resolve_quantities(object: &MetaObject) -> ResolvedQuantities {
    let sets = &object.property_sets;
    ResolvedQuantities {
        length: resolve_quantity(sets, synonyms::length()),
        area: resolve_quantity(sets, synonyms::area()),
        volume: resolve_quantity(sets, synonyms::volume()),
        mass: resolve_quantity(sets, synonyms::mass()),
        mark: extract_tag(sets, MARK_ALIASES),
        remarks: extract_tag(sets, REMARKS_ALIASES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Property;
    use pretty_assertions::assert_eq;

    fn pset(name: &str, properties: Vec<(&str, PropertyValue)>) -> PropertySet {
        PropertySet {
            name: name.to_string(),
            properties: properties
                .into_iter()
                .map(|(n, value)| Property {
                    name: n.to_string(),
                    value,
                })
                .collect(),
        }
    }

    fn text(s: &str) -> PropertyValue {
        PropertyValue::Text(s.to_string())
    }

    #[test]
    fn first_positive_match_wins() {
        let sets = vec![pset(
            "BaseQuantities",
            vec![
                ("NetSideArea", PropertyValue::Number(5.0)),
                ("GrossSideArea", PropertyValue::Number(10.0)),
            ],
        )];
        assert_eq!(resolve_quantity(&sets, synonyms::area()), Some(5.0));
    }

    #[test]
    fn non_positive_and_unparseable_matches_are_skipped() {
        let sets = vec![pset(
            "BaseQuantities",
            vec![
                ("NetSideArea", PropertyValue::Number(0.0)),
                ("GrossSideArea", text("n/a")),
                ("NetFootprintArea", PropertyValue::Number(-2.0)),
                ("TotalSurfaceArea", text("7,5")),
            ],
        )];
        assert_eq!(resolve_quantity(&sets, synonyms::area()), Some(7.5));
    }

    #[test]
    fn scan_respects_property_set_order() {
        let sets = vec![
            pset("Pset_WallCommon", vec![("Powierzchnia", text("4,5"))]),
            pset(
                "BaseQuantities",
                vec![("NetSideArea", PropertyValue::Number(12.0))],
            ),
        ];
        assert_eq!(resolve_quantity(&sets, synonyms::area()), Some(4.5));
    }

    #[test]
    fn no_match_is_none() {
        let sets = vec![pset("Identity", vec![("FireRating", text("EI60"))])];
        assert_eq!(resolve_quantity(&sets, synonyms::area()), None);
        assert_eq!(resolve_quantity(&[], synonyms::area()), None);
    }

    #[test]
    fn tag_extraction_is_exact_and_case_sensitive() {
        let sets = vec![pset(
            "Identity",
            vec![
                ("mark", text("lowercase is not a match")),
                ("Mark", text("W-01")),
            ],
        )];
        assert_eq!(extract_tag(&sets, MARK_ALIASES), Some("W-01".to_string()));
        assert_eq!(extract_tag(&sets, REMARKS_ALIASES), None);
    }

    #[test]
    fn remarks_aliases_share_one_logical_field() {
        let sets = vec![pset("Identity", vec![("Comments", text("verify on site"))])];
        assert_eq!(
            extract_tag(&sets, REMARKS_ALIASES),
            Some("verify on site".to_string())
        );
    }

    #[test]
    fn null_valued_alias_does_not_shadow_a_later_one() {
        let sets = vec![pset(
            "Identity",
            vec![("Remarks", PropertyValue::Null), ("Comment", text("ok"))],
        )];
        assert_eq!(extract_tag(&sets, REMARKS_ALIASES), Some("ok".to_string()));
    }

    #[test]
    fn resolved_quantities_bundle() {
        let object = MetaObject {
            id: "w1".to_string(),
            raw_class: "IfcWall".to_string(),
            raw_name: None,
            type_hints: std::collections::BTreeMap::new(),
            property_sets: vec![pset(
                "BaseQuantities",
                vec![
                    ("NetSideArea", text("4,5")),
                    ("NetVolume", PropertyValue::Number(0.9)),
                    ("Mark", text("W-01")),
                ],
            )],
        };

        let resolved = resolve_quantities(&object);
        assert_eq!(resolved.area, Some(4.5));
        assert_eq!(resolved.volume, Some(0.9));
        assert_eq!(resolved.length, None);
        assert_eq!(resolved.mass, None);
        assert_eq!(resolved.mark, Some("W-01".to_string()));
        assert_eq!(resolved.remarks, None);
    }
}
