use super::MetaObject;
use serde::{Deserialize, Serialize};

fn default_scope() -> String {
    "default".to_string()
}

/// One load/session worth of materialized elements.
///
/// Produced by the external loader; the resolution engine treats the
/// object list as read-only input for the duration of processing.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeoffModel {
    #[serde(default)]
    pub name: String,
    /// Identifies the project or version the classification records
    /// belong to.
    #[serde(default = "default_scope")]
    pub scope_id: String,
    #[serde(skip)]
    pub file_path: String,
    #[serde(default)]
    pub objects: Vec<MetaObject>,
}

impl TakeoffModel {
    #[must_use]
    pub fn total_elements(&self) -> usize {
        self.objects.len()
    }
}
