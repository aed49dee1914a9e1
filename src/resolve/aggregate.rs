//! Grouping and summation over one load of elements.

use super::properties::resolve_quantities;
use super::type_name::{resolve_type_name, UNKNOWN_TYPE};
use crate::model::{AggregateGroup, GroupKey, MetaObject};
use std::collections::HashMap;

/// Grouping key for one element: raw category plus resolved type name.
#[must_use]
pub fn group_key(object: &MetaObject) -> GroupKey {
    let raw_class = object.raw_class.trim();
    let category = if raw_class.is_empty() {
        UNKNOWN_TYPE
    } else {
        raw_class
    };
    GroupKey {
        category: category.to_string(),
        type_name: resolve_type_name(object),
    }
}

/// Aggregate a full load of elements into per-(category, type) groups.
///
/// Pure and synchronous; the same input list always yields the same map.
/// Map iteration order is unspecified; use [`sorted_groups`] for display.
#[must_use]
pub fn aggregate(objects: &[MetaObject]) -> HashMap<GroupKey, AggregateGroup> {
    let mut groups: HashMap<GroupKey, AggregateGroup> = HashMap::new();

    for object in objects {
        let quantities = resolve_quantities(object);
        let key = group_key(object);
        groups
            .entry(key.clone())
            .or_insert_with(|| AggregateGroup::new(&key))
            .absorb(&quantities);
    }

    groups
}

/// Merge a second aggregation run (over a disjoint element subset) into
/// the first. Aggregating a partition piecewise and merging equals one
/// pass over the full list.
pub fn merge_runs(
    into: &mut HashMap<GroupKey, AggregateGroup>,
    other: HashMap<GroupKey, AggregateGroup>,
) {
    for (key, group) in other {
        match into.get_mut(&key) {
            Some(existing) => existing.merge(&group),
            None => {
                into.insert(key, group);
            }
        }
    }
}

/// Groups sorted by (category, type name) for display.
#[must_use]
pub fn sorted_groups(groups: &HashMap<GroupKey, AggregateGroup>) -> Vec<&AggregateGroup> {
    let mut list: Vec<&AggregateGroup> = groups.values().collect();
    list.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.type_name.cmp(&b.type_name))
    });
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Property, PropertySet, PropertyValue};
    use pretty_assertions::assert_eq;

    fn wall(id: &str, area: PropertyValue) -> MetaObject {
        MetaObject {
            id: id.to_string(),
            raw_class: "IfcWall".to_string(),
            raw_name: None,
            type_hints: std::collections::BTreeMap::new(),
            property_sets: vec![PropertySet {
                name: "BaseQuantities".to_string(),
                properties: vec![Property {
                    name: "NetSideArea".to_string(),
                    value: area,
                }],
            }],
        }
    }

    #[test]
    fn two_walls_one_group() {
        let objects = vec![
            wall("w1", PropertyValue::Text("4,5".to_string())),
            wall("w2", PropertyValue::Number(12.0)),
        ];

        let groups = aggregate(&objects);
        assert_eq!(groups.len(), 1);

        let key = GroupKey {
            category: "IfcWall".to_string(),
            type_name: "IfcWall".to_string(),
        };
        let group = &groups[&key];
        assert_eq!(group.instance_count, 2);
        assert_eq!(group.sum_area, 16.5);
    }

    #[test]
    fn partitioned_runs_merge_to_the_full_aggregate() {
        let objects = vec![
            wall("w1", PropertyValue::Number(1.0)),
            wall("w2", PropertyValue::Number(2.0)),
            wall("w3", PropertyValue::Number(4.0)),
        ];

        let full = aggregate(&objects);

        let mut merged = aggregate(&objects[..1]);
        merge_runs(&mut merged, aggregate(&objects[1..]));

        let key = GroupKey {
            category: "IfcWall".to_string(),
            type_name: "IfcWall".to_string(),
        };
        assert_eq!(merged[&key].instance_count, full[&key].instance_count);
        assert_eq!(merged[&key].sum_area, full[&key].sum_area);
        assert_eq!(merged[&key].sum_area, 7.0);
    }

    #[test]
    fn empty_raw_class_groups_under_unknown() {
        let mut orphan = wall("x1", PropertyValue::Null);
        orphan.raw_class = String::new();

        let groups = aggregate(&[orphan]);
        let key = GroupKey {
            category: "Unknown".to_string(),
            type_name: "Unknown".to_string(),
        };
        assert_eq!(groups[&key].instance_count, 1);
    }

    #[test]
    fn sorted_groups_order_by_category_then_type() {
        let mut door = wall("d1", PropertyValue::Null);
        door.raw_class = "IfcDoor".to_string();
        let objects = vec![wall("w1", PropertyValue::Number(3.0)), door];

        let groups = aggregate(&objects);
        let sorted = sorted_groups(&groups);
        let names: Vec<&str> = sorted.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["IfcDoor", "IfcWall"]);
    }

    #[test]
    fn absent_quantities_count_as_zero_but_elements_still_count() {
        let objects = vec![
            wall("w1", PropertyValue::Null),
            wall("w2", PropertyValue::Number(12.0)),
        ];

        let groups = aggregate(&objects);
        let key = GroupKey {
            category: "IfcWall".to_string(),
            type_name: "IfcWall".to_string(),
        };
        assert_eq!(groups[&key].instance_count, 2);
        assert_eq!(groups[&key].sum_area, 12.0);
    }
}
