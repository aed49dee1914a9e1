//! Hierarchical code assignment on classification save.

use super::store::ClassificationStore;
use crate::error::StoreError;
use crate::model::ClassificationRecord;

/// The most specific non-null chapter code.
#[must_use]
pub fn derive_full_code(record: &ClassificationRecord) -> Option<String> {
    record
        .subsubchapter_code
        .clone()
        .or_else(|| record.subchapter_code.clone())
        .or_else(|| record.chapter_code.clone())
}

/// Split a dotted code path into the chapter code triple.
///
/// `"30.10.10"` selects chapter `30`, subchapter `30.10` and
/// subsubchapter `30.10.10`; shorter paths leave the deeper levels
/// unset. An empty input clears all three.
#[must_use]
pub fn split_code_path(input: &str) -> (Option<String>, Option<String>, Option<String>) {
    let input = input.trim();
    if input.is_empty() {
        return (None, None, None);
    }
    let segments: Vec<&str> = input.split('.').collect();
    let chapter = Some(segments[0].to_string());
    let subchapter = (segments.len() >= 2).then(|| segments[..2].join("."));
    let subsubchapter = (segments.len() >= 3).then(|| input.to_string());
    (chapter, subchapter, subsubchapter)
}

/// Persist a classification edit: derive the full code and assign the
/// next display order within the record's sibling group.
///
/// The order is computed at save time from current store state - a
/// read-then-write with no lock, so concurrent saves into one sibling
/// group can race and produce duplicate orders. That window is accepted;
/// nothing downstream assumes gapless ordering.
pub fn save_classification<S: ClassificationStore + ?Sized>(
    store: &mut S,
    mut record: ClassificationRecord,
) -> Result<ClassificationRecord, StoreError> {
    record.full_code = derive_full_code(&record);

    let mut siblings = store.sibling_count(
        &record.scope_id,
        record.chapter_code.as_deref(),
        record.subchapter_code.as_deref(),
        record.subsubchapter_code.as_deref(),
    )?;

    // the record being saved must not count itself
    if let Some(existing) = store.get(&record.scope_id, &record.category, &record.type_name)? {
        if existing.chapter_code == record.chapter_code
            && existing.subchapter_code == record.subchapter_code
            && existing.subsubchapter_code == record.subsubchapter_code
        {
            siblings = siblings.saturating_sub(1);
        }
    }

    record.display_order = siblings as u32 + 1;
    store.upsert(record.clone())?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn record(type_name: &str, codes: (Option<&str>, Option<&str>, Option<&str>)) -> ClassificationRecord {
        let mut record = ClassificationRecord::new("p1", "IfcWall", type_name);
        record.chapter_code = codes.0.map(str::to_string);
        record.subchapter_code = codes.1.map(str::to_string);
        record.subsubchapter_code = codes.2.map(str::to_string);
        record
    }

    #[test]
    fn full_code_is_the_deepest_non_null_level() {
        let full = record("A", (Some("30"), Some("30.10"), Some("30.10.10")));
        assert_eq!(derive_full_code(&full).as_deref(), Some("30.10.10"));

        let partial = record("A", (Some("30"), Some("30.10"), None));
        assert_eq!(derive_full_code(&partial).as_deref(), Some("30.10"));

        let chapter_only = record("A", (Some("30"), None, None));
        assert_eq!(derive_full_code(&chapter_only).as_deref(), Some("30"));

        assert_eq!(derive_full_code(&record("A", (None, None, None))), None);
    }

    #[test]
    fn code_path_splits_into_increasing_specificity() {
        assert_eq!(
            split_code_path("30.10.10"),
            (
                Some("30".to_string()),
                Some("30.10".to_string()),
                Some("30.10.10".to_string())
            )
        );
        assert_eq!(
            split_code_path("30.10"),
            (Some("30".to_string()), Some("30.10".to_string()), None)
        );
        assert_eq!(split_code_path("30"), (Some("30".to_string()), None, None));
        assert_eq!(split_code_path("  "), (None, None, None));
    }

    #[test]
    fn save_assigns_sequential_order_per_sibling_group() {
        let mut store = MemoryStore::new();
        let codes = (Some("30"), Some("30.10"), None);

        let first = save_classification(&mut store, record("A", codes)).unwrap();
        let second = save_classification(&mut store, record("B", codes)).unwrap();
        let other = save_classification(&mut store, record("C", (Some("40"), None, None))).unwrap();

        assert_eq!(first.display_order, 1);
        assert_eq!(second.display_order, 2);
        assert_eq!(other.display_order, 1);
        assert_eq!(first.full_code.as_deref(), Some("30.10"));
        assert_eq!(other.full_code.as_deref(), Some("40"));
    }

    #[test]
    fn resaving_a_record_does_not_count_itself() {
        let mut store = MemoryStore::new();
        let codes = (Some("30"), None, None);

        save_classification(&mut store, record("A", codes)).unwrap();
        let resaved = save_classification(&mut store, record("A", codes)).unwrap();

        assert_eq!(resaved.display_order, 1);
    }

    #[test]
    fn moving_between_sibling_groups_recounts() {
        let mut store = MemoryStore::new();
        save_classification(&mut store, record("A", (Some("30"), None, None))).unwrap();
        save_classification(&mut store, record("B", (Some("30"), None, None))).unwrap();

        // B moves to chapter 40: new group, fresh sequence
        let moved = save_classification(&mut store, record("B", (Some("40"), None, None))).unwrap();
        assert_eq!(moved.display_order, 1);

        // a new record in chapter 30 sits behind A only
        let third = save_classification(&mut store, record("C", (Some("30"), None, None))).unwrap();
        assert_eq!(third.display_order, 2);
    }

    #[test]
    fn clearing_the_deepest_level_shortens_the_full_code() {
        let mut store = MemoryStore::new();
        let saved = save_classification(
            &mut store,
            record("A", (Some("30"), Some("30.10"), Some("30.10.10"))),
        )
        .unwrap();
        assert_eq!(saved.full_code.as_deref(), Some("30.10.10"));

        let cleared = save_classification(
            &mut store,
            record("A", (Some("30"), Some("30.10"), None)),
        )
        .unwrap();
        assert_eq!(cleared.full_code.as_deref(), Some("30.10"));
    }
}
