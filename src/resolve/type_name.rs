//! Best-guess type identity for an element.
//!
//! Vendors disagree about where the human-meaningful type name lives: in
//! the element class, in a hint field, buried in a property set, or only
//! in the element name. Resolution trusts an informative raw class first
//! and otherwise scores candidates from every known location. The result
//! is deliberately non-unique across elements (identical names drive
//! aggregation) but deterministic for any single element.

use super::normalize::canonical_key;
use super::properties::value_text;
use crate::model::{MetaObject, PropertyValue};

/// Fallback name when neither class nor candidates yield anything.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Generic base classes that say nothing about what the element is.
const GENERIC_CLASSES: &[&str] = &[
    "IfcBuildingElementProxy",
    "IfcBuildingElement",
    "IfcElement",
    "IfcProduct",
    "IfcObject",
];

/// Property-set and quantity-set namespaces leak into hint values; they
/// never name a human type.
const TECHNICAL_PREFIXES: &[&str] = &["Pset_", "Qto_"];

// Base scores by candidate source. A nested type object's own name beats
// the direct hint fields, which beat loosely type-named hints, which
// beat property-set hits; the bare element name is the last resort.
const SCORE_NESTED_TYPE_NAME: u32 = 50;
const SCORE_DIRECT_HINT: u32 = 40;
const SCORE_LOOSE_HINT: u32 = 30;
const SCORE_PROPERTY: u32 = 20;
const SCORE_RAW_NAME: u32 = 10;

/// Longer labels are preferred among equally-sourced candidates, but the
/// bonus is capped so length never outranks a better source.
const LENGTH_BONUS_CAP: u32 = 8;

/// Resolve the display type name for one element. Never returns an empty
/// string; falls back to the raw class, then to [`UNKNOWN_TYPE`].
#[must_use]
pub fn resolve_type_name(object: &MetaObject) -> String {
    let raw_class = object.raw_class.trim();
    if is_informative_class(raw_class) {
        return raw_class.to_string();
    }

    let mut selection = Selection::default();

    // Nested Type/type hint objects carry their own name field.
    for hint_key in ["Type", "type"] {
        if let Some(PropertyValue::Wrapped(fields)) = object.type_hints.get(hint_key) {
            for name_key in ["name", "Name"] {
                if let Some(text) = fields.get(name_key).and_then(value_text) {
                    selection.consider(&text, SCORE_NESTED_TYPE_NAME);
                }
            }
        }
    }

    // Conventional direct hint fields.
    for hint_key in ["ObjectType", "TypeName", "Type"] {
        if let Some(text) = object.type_hints.get(hint_key).and_then(value_text) {
            selection.consider(&text, SCORE_DIRECT_HINT);
        }
    }

    // Any remaining hint whose own name mentions a type. The hint map is
    // ordered, so this scan is deterministic.
    for (key, value) in &object.type_hints {
        if matches!(key.as_str(), "ObjectType" | "TypeName" | "Type") {
            continue;
        }
        if canonical_key(key).contains("type") {
            if let Some(text) = value_text(value) {
                selection.consider(&text, SCORE_LOOSE_HINT);
            }
        }
    }

    // Type-like properties inside property sets.
    for set in &object.property_sets {
        for property in &set.properties {
            let canon = canonical_key(&property.name);
            if canon.contains("type") || canon == "reference" {
                if let Some(text) = value_text(&property.value) {
                    selection.consider(&text, SCORE_PROPERTY);
                }
            }
        }
    }

    // Last resort: the element's own name.
    if let Some(raw_name) = &object.raw_name {
        selection.consider(raw_name, SCORE_RAW_NAME);
    }

    match selection.best {
        Some(candidate) => candidate.name,
        None if !raw_class.is_empty() => raw_class.to_string(),
        None => UNKNOWN_TYPE.to_string(),
    }
}

fn is_informative_class(raw_class: &str) -> bool {
    !raw_class.is_empty()
        && !GENERIC_CLASSES
            .iter()
            .any(|generic| generic.eq_ignore_ascii_case(raw_class))
        && !has_technical_prefix(raw_class)
}

fn has_technical_prefix(name: &str) -> bool {
    TECHNICAL_PREFIXES.iter().any(|prefix| {
        name.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

#[derive(Debug)]
struct Candidate {
    name: String,
    score: u32,
    chars: u32,
}

#[derive(Debug, Default)]
struct Selection {
    best: Option<Candidate>,
}

impl Selection {
    fn consider(&mut self, name: &str, base: u32) {
        let name = name.trim();
        let chars = name.chars().count() as u32;
        if chars < 2 || has_technical_prefix(name) {
            return;
        }
        let score = base + chars.min(LENGTH_BONUS_CAP);

        let better = match &self.best {
            None => true,
            Some(current) => {
                score > current.score || (score == current.score && chars > current.chars)
            }
        };
        if better {
            self.best = Some(Candidate {
                name: name.to_string(),
                score,
                chars,
            });
        }
    }
}
