use super::Unit;
use serde::{Deserialize, Serialize};

/// User-authored classification persisted per (scope, category, type name).
///
/// `full_code`, when present, equals the most specific non-null of the
/// three chapter code fields. `measured_value` and `display_order` are
/// derived at merge/save time, not authored directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRecord {
    pub scope_id: String,
    pub category: String,
    pub type_name: String,
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preferred_unit: Unit,
    #[serde(default)]
    pub chapter_code: Option<String>,
    #[serde(default)]
    pub subchapter_code: Option<String>,
    #[serde(default)]
    pub subsubchapter_code: Option<String>,
    #[serde(default)]
    pub full_code: Option<String>,
    #[serde(default)]
    pub measured_value: f64,
    #[serde(default)]
    pub display_order: u32,
}

impl ClassificationRecord {
    /// A fresh, unedited record for a group seen for the first time.
    #[must_use]
    pub fn new(scope_id: &str, category: &str, type_name: &str) -> Self {
        Self {
            scope_id: scope_id.to_string(),
            category: category.to_string(),
            type_name: type_name.to_string(),
            custom_name: None,
            description: None,
            preferred_unit: Unit::default(),
            chapter_code: None,
            subchapter_code: None,
            subsubchapter_code: None,
            full_code: None,
            measured_value: 0.0,
            display_order: 0,
        }
    }

    /// Identity within one scope.
    #[must_use]
    pub fn matches(&self, category: &str, type_name: &str) -> bool {
        self.category == category && self.type_name == type_name
    }
}

/// One row of the merged display table: live aggregate figures joined
/// with the persisted classification, if any.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedRow {
    pub category: String,
    pub type_name: String,
    /// Custom name if classified, else the resolved type name.
    pub display_name: String,
    pub instance_count: usize,
    pub sum_length: f64,
    pub sum_area: f64,
    pub sum_volume: f64,
    pub sum_mass: f64,
    /// Distinct marks joined for display.
    pub marks: String,
    /// Distinct remarks joined for display.
    pub remarks: String,
    pub preferred_unit: Unit,
    pub chapter_code: Option<String>,
    pub subchapter_code: Option<String>,
    pub subsubchapter_code: Option<String>,
    pub full_code: Option<String>,
    pub description: Option<String>,
    /// Quantity selected by the preferred unit.
    pub measured_value: f64,
    /// True iff a chapter or subchapter code has been assigned.
    pub is_edited: bool,
    /// True iff a persisted record exists for this (category, type) pair.
    pub is_classified: bool,
}
