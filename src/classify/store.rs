//! Classification record store.
//!
//! The engine reaches persistence through a narrow keyed-record
//! interface; retry and backoff are the store client's concern, and
//! store failures surface to the caller untouched.

use crate::error::StoreError;
use crate::model::ClassificationRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Keyed record interface for persisted classifications.
pub trait ClassificationStore {
    /// Look up the record for one (category, type name) pair in a scope.
    fn get(
        &self,
        scope_id: &str,
        category: &str,
        type_name: &str,
    ) -> Result<Option<ClassificationRecord>, StoreError>;

    /// All records persisted for a scope.
    fn list(&self, scope_id: &str) -> Result<Vec<ClassificationRecord>, StoreError>;

    /// Number of records in a scope sharing the exact code triple.
    fn sibling_count(
        &self,
        scope_id: &str,
        chapter_code: Option<&str>,
        subchapter_code: Option<&str>,
        subsubchapter_code: Option<&str>,
    ) -> Result<usize, StoreError>;

    /// Insert or replace the record keyed by (scope, category, type name).
    fn upsert(&mut self, record: ClassificationRecord) -> Result<(), StoreError>;
}

fn find_record<'a>(
    records: &'a [ClassificationRecord],
    scope_id: &str,
    category: &str,
    type_name: &str,
) -> Option<&'a ClassificationRecord> {
    records
        .iter()
        .find(|r| r.scope_id == scope_id && r.matches(category, type_name))
}

fn count_siblings(
    records: &[ClassificationRecord],
    scope_id: &str,
    chapter_code: Option<&str>,
    subchapter_code: Option<&str>,
    subsubchapter_code: Option<&str>,
) -> usize {
    records
        .iter()
        .filter(|r| {
            r.scope_id == scope_id
                && r.chapter_code.as_deref() == chapter_code
                && r.subchapter_code.as_deref() == subchapter_code
                && r.subsubchapter_code.as_deref() == subsubchapter_code
        })
        .count()
}

fn upsert_record(records: &mut Vec<ClassificationRecord>, record: ClassificationRecord) {
    match records.iter_mut().find(|r| {
        r.scope_id == record.scope_id && r.matches(&record.category, &record.type_name)
    }) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

/// In-memory store, used in tests and as a scratch store when no
/// persistence path is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<ClassificationRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClassificationStore for MemoryStore {
    fn get(
        &self,
        scope_id: &str,
        category: &str,
        type_name: &str,
    ) -> Result<Option<ClassificationRecord>, StoreError> {
        Ok(find_record(&self.records, scope_id, category, type_name).cloned())
    }

    fn list(&self, scope_id: &str) -> Result<Vec<ClassificationRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.scope_id == scope_id)
            .cloned()
            .collect())
    }

    fn sibling_count(
        &self,
        scope_id: &str,
        chapter_code: Option<&str>,
        subchapter_code: Option<&str>,
        subsubchapter_code: Option<&str>,
    ) -> Result<usize, StoreError> {
        Ok(count_siblings(
            &self.records,
            scope_id,
            chapter_code,
            subchapter_code,
            subsubchapter_code,
        ))
    }

    fn upsert(&mut self, record: ClassificationRecord) -> Result<(), StoreError> {
        upsert_record(&mut self.records, record);
        Ok(())
    }
}

/// JSON-file-backed store: records are loaded once at open and the whole
/// file is rewritten on every upsert.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<ClassificationRecord>,
}

impl JsonFileStore {
    /// Open a store file, creating an empty store if the file does not
    /// exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(source) => {
                return Err(StoreError::FileRead { path, source });
            }
        };
        Ok(Self { path, records })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, json).map_err(|source| StoreError::FileWrite {
            path: self.path.clone(),
            source,
        })
    }
}

impl ClassificationStore for JsonFileStore {
    fn get(
        &self,
        scope_id: &str,
        category: &str,
        type_name: &str,
    ) -> Result<Option<ClassificationRecord>, StoreError> {
        Ok(find_record(&self.records, scope_id, category, type_name).cloned())
    }

    fn list(&self, scope_id: &str) -> Result<Vec<ClassificationRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.scope_id == scope_id)
            .cloned()
            .collect())
    }

    fn sibling_count(
        &self,
        scope_id: &str,
        chapter_code: Option<&str>,
        subchapter_code: Option<&str>,
        subsubchapter_code: Option<&str>,
    ) -> Result<usize, StoreError> {
        Ok(count_siblings(
            &self.records,
            scope_id,
            chapter_code,
            subchapter_code,
            subsubchapter_code,
        ))
    }

    fn upsert(&mut self, record: ClassificationRecord) -> Result<(), StoreError> {
        upsert_record(&mut self.records, record);
        self.persist()
    }
}
