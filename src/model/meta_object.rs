use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One building element as materialized by the external loader.
///
/// The engine never parses the interchange format itself; it receives
/// elements already decoded into this shape and treats them as read-only
/// for the duration of one resolution pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaObject {
    pub id: String,
    #[serde(default)]
    pub raw_class: String,
    #[serde(default)]
    pub raw_name: Option<String>,
    #[serde(default)]
    pub type_hints: BTreeMap<String, PropertyValue>,
    #[serde(default)]
    pub property_sets: Vec<PropertySet>,
}

/// A named, ordered collection of properties attached to an element.
///
/// Order is significant: quantity resolution is first-match across
/// property-set order, then property order within a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySet {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub value: PropertyValue,
}

/// Raw property value as it arrives from vendor tooling.
///
/// Source data carries an untagged union: a bare number, a string, a
/// nested wrapper object, or null. Modelling it as an explicit variant
/// keeps the parser's fallback chain exhaustive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Wrapped(BTreeMap<String, PropertyValue>),
    #[default]
    Null,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn value_variants_deserialize_untagged() {
        let raw = r#"[12.5, "4,5", {"value": 3}, null]"#;
        let values: Vec<PropertyValue> = serde_json::from_str(raw).unwrap();

        assert_eq!(values[0], PropertyValue::Number(12.5));
        assert_eq!(values[1], PropertyValue::Text("4,5".to_string()));
        assert!(matches!(values[2], PropertyValue::Wrapped(_)));
        assert_eq!(values[3], PropertyValue::Null);
    }

    #[test]
    fn meta_object_deserializes_from_camel_case() {
        let raw = r#"{
            "id": "2O2Fr$t4X7Zf8NOew3FLOH",
            "rawClass": "IfcWall",
            "rawName": "Basic Wall:Generic - 200mm",
            "typeHints": {"ObjectType": "Generic - 200mm"},
            "propertySets": [
                {"name": "BaseQuantities", "properties": [
                    {"name": "NetSideArea", "value": 12.0}
                ]}
            ]
        }"#;
        let object: MetaObject = serde_json::from_str(raw).unwrap();

        assert_eq!(object.raw_class, "IfcWall");
        assert_eq!(object.property_sets.len(), 1);
        assert_eq!(
            object.property_sets[0].properties[0].value,
            PropertyValue::Number(12.0)
        );
    }

    #[test]
    fn missing_optional_fields_default() {
        let object: MetaObject = serde_json::from_str(r#"{"id": "a"}"#).unwrap();

        assert_eq!(object.raw_class, "");
        assert_eq!(object.raw_name, None);
        assert!(object.type_hints.is_empty());
        assert!(object.property_sets.is_empty());
    }
}
