use crate::error::LoadError;
use crate::model::TakeoffModel;
use std::path::Path;

/// Parse a materialized takeoff model from JSON text.
pub fn parse_model(content: &str) -> Result<TakeoffModel, LoadError> {
    let mut model: TakeoffModel = serde_json::from_str(content)?;
    if model.name.is_empty() {
        model.name = "Unknown Project".to_string();
    }
    Ok(model)
}

/// Load a takeoff model file: the element list as materialized by the
/// upstream viewer/loader, already decoded into MetaObject shape.
///
/// This crate never reads the CAD interchange format itself.
///
/// # Errors
///
/// Returns [`LoadError::FileRead`] if the file cannot be read and
/// [`LoadError::InvalidModel`] if the JSON does not match the model
/// shape.
///
/// # Example
///
/// ```no_run
/// use ifc_takeoff::loader::load_model;
///
/// let model = load_model("office.takeoff.json")?;
/// println!("{}: {} elements", model.name, model.total_elements());
/// # Ok::<(), ifc_takeoff::error::LoadError>(())
/// ```
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<TakeoffModel, LoadError> {
    let content = std::fs::read_to_string(&path).map_err(|source| LoadError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    let mut model = parse_model(&content)?;
    model.file_path = path.as_ref().to_string_lossy().to_string();
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_full_model() {
        let raw = r#"{
            "name": "Office A",
            "scopeId": "project-7",
            "objects": [
                {
                    "id": "w1",
                    "rawClass": "IfcWall",
                    "propertySets": [
                        {"name": "BaseQuantities", "properties": [
                            {"name": "NetSideArea", "value": "4,5"}
                        ]}
                    ]
                }
            ]
        }"#;

        let model = parse_model(raw).unwrap();
        assert_eq!(model.name, "Office A");
        assert_eq!(model.scope_id, "project-7");
        assert_eq!(model.total_elements(), 1);
        assert_eq!(
            model.objects[0].property_sets[0].properties[0].value,
            PropertyValue::Text("4,5".to_string())
        );
    }

    #[test]
    fn defaults_apply_to_a_minimal_model() {
        let model = parse_model(r"{}").unwrap();
        assert_eq!(model.name, "Unknown Project");
        assert_eq!(model.scope_id, "default");
        assert_eq!(model.total_elements(), 0);
    }

    #[test]
    fn malformed_json_is_an_invalid_model() {
        let result = parse_model("{not json");
        assert!(matches!(result, Err(LoadError::InvalidModel { .. })));
    }
}
