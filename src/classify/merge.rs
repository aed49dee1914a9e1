//! Joining live aggregates with persisted classification records.

use crate::model::{AggregateGroup, ClassificationRecord, ClassifiedRow, GroupKey, Unit};
use std::collections::HashMap;

/// Build the merged display table for one scope: every aggregate group
/// joined with its persisted record if one exists, plus rows for records
/// whose element type is absent from the current load (kept with zero
/// quantities, never deleted here).
///
/// Rows are sorted by (category, type name).
#[must_use]
pub fn merge_classifications(
    groups: &HashMap<GroupKey, AggregateGroup>,
    records: &[ClassificationRecord],
) -> Vec<ClassifiedRow> {
    let by_identity: HashMap<(&str, &str), &ClassificationRecord> = records
        .iter()
        .map(|r| ((r.category.as_str(), r.type_name.as_str()), r))
        .collect();

    let mut rows: Vec<ClassifiedRow> = groups
        .values()
        .map(|group| {
            let record = by_identity
                .get(&(group.category.as_str(), group.type_name.as_str()))
                .copied();
            build_row(&group.category, &group.type_name, Some(group), record)
        })
        .collect();

    for record in records {
        if !groups.contains_key(&GroupKey {
            category: record.category.clone(),
            type_name: record.type_name.clone(),
        }) {
            rows.push(build_row(
                &record.category,
                &record.type_name,
                None,
                Some(record),
            ));
        }
    }

    rows.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.type_name.cmp(&b.type_name))
    });
    rows
}

fn build_row(
    category: &str,
    type_name: &str,
    group: Option<&AggregateGroup>,
    record: Option<&ClassificationRecord>,
) -> ClassifiedRow {
    let preferred_unit = record.map_or(Unit::default(), |r| r.preferred_unit);

    let display_name = record
        .and_then(|r| r.custom_name.as_deref())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(type_name)
        .to_string();

    let is_edited = record.is_some_and(|r| {
        r.chapter_code.is_some() || r.subchapter_code.is_some()
    });

    ClassifiedRow {
        category: category.to_string(),
        type_name: type_name.to_string(),
        display_name,
        instance_count: group.map_or(0, |g| g.instance_count),
        sum_length: group.map_or(0.0, |g| g.sum_length),
        sum_area: group.map_or(0.0, |g| g.sum_area),
        sum_volume: group.map_or(0.0, |g| g.sum_volume),
        sum_mass: group.map_or(0.0, |g| g.sum_mass),
        marks: group.map_or_else(String::new, AggregateGroup::joined_marks),
        remarks: group.map_or_else(String::new, AggregateGroup::joined_remarks),
        preferred_unit,
        chapter_code: record.and_then(|r| r.chapter_code.clone()),
        subchapter_code: record.and_then(|r| r.subchapter_code.clone()),
        subsubchapter_code: record.and_then(|r| r.subsubchapter_code.clone()),
        full_code: record.and_then(|r| r.full_code.clone()),
        description: record.and_then(|r| r.description.clone()),
        measured_value: group.map_or(0.0, |g| g.quantity(preferred_unit)),
        is_edited,
        is_classified: record.is_some(),
    }
}
