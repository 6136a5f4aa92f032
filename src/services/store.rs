//! In-memory asset store holding the path-keyed record map and the derived
//! category/type group maps.
//!
//! All mutation flows through this type, which makes concurrent access a
//! property of the store rather than of callers sprinkling their own locks.
//! Each operation holds the internal lock only for its own duration, so
//! rayon workers fanning records in serialize briefly per insert.

use crate::models::{AssetRecord, AssetType, Category};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct StoreInner {
    by_path: HashMap<String, AssetRecord>,
    by_category: HashMap<Category, Vec<String>>,
    by_type: HashMap<AssetType, Vec<String>>,
}

impl StoreInner {
    fn unlink_groups(&mut self, record: &AssetRecord) {
        if let Some(paths) = self.by_category.get_mut(&record.category) {
            paths.retain(|p| p != &record.relative_path);
        }
        if let Some(paths) = self.by_type.get_mut(&record.asset_type) {
            paths.retain(|p| p != &record.relative_path);
        }
    }

    fn insert(&mut self, record: AssetRecord) {
        // Re-indexing a path overwrites the record and re-derives its group
        // memberships; the old memberships must not survive.
        if let Some(previous) = self.by_path.remove(&record.relative_path) {
            self.unlink_groups(&previous);
        }

        self.by_category
            .entry(record.category)
            .or_default()
            .push(record.relative_path.clone());
        self.by_type
            .entry(record.asset_type)
            .or_default()
            .push(record.relative_path.clone());
        self.by_path.insert(record.relative_path.clone(), record);
    }
}

/// Thread-safe record store shared between the scan fan-out workers and
/// read-side callers.
#[derive(Debug, Default)]
pub struct AssetStore {
    inner: Mutex<StoreInner>,
}

impl AssetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert one record, replacing any prior record at the same path.
    pub fn insert(&self, record: AssetRecord) {
        self.lock().insert(record);
    }

    /// Remove a record, scrubbing it from both group maps as well.
    pub fn remove(&self, relative_path: &str) -> Option<AssetRecord> {
        let mut inner = self.lock();
        let record = inner.by_path.remove(relative_path)?;
        inner.unlink_groups(&record);
        Some(record)
    }

    /// Drop every record and group entry.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.by_path.clear();
        inner.by_category.clear();
        inner.by_type.clear();
    }

    /// Replace the whole store with the given records, re-deriving the
    /// group maps. Used when a cache snapshot is loaded.
    pub fn replace_all(&self, records: Vec<AssetRecord>) {
        let mut inner = self.lock();
        inner.by_path.clear();
        inner.by_category.clear();
        inner.by_type.clear();
        for record in records {
            inner.insert(record);
        }
    }

    #[must_use]
    pub fn get(&self, relative_path: &str) -> Option<AssetRecord> {
        self.lock().by_path.get(relative_path).cloned()
    }

    #[must_use]
    pub fn contains(&self, relative_path: &str) -> bool {
        self.lock().by_path.contains_key(relative_path)
    }

    /// All records for one category, sorted by path.
    ///
    /// Group vectors fill in worker-completion order during a parallel
    /// scan; sorting on read keeps query results independent of scheduling.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<AssetRecord> {
        let inner = self.lock();
        let mut records: Vec<AssetRecord> = inner
            .by_category
            .get(&category)
            .into_iter()
            .flatten()
            .filter_map(|path| inner.by_path.get(path).cloned())
            .collect();
        records.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        records
    }

    /// All records for one asset type, sorted by path.
    #[must_use]
    pub fn by_type(&self, asset_type: AssetType) -> Vec<AssetRecord> {
        let inner = self.lock();
        let mut records: Vec<AssetRecord> = inner
            .by_type
            .get(&asset_type)
            .into_iter()
            .flatten()
            .filter_map(|path| inner.by_path.get(path).cloned())
            .collect();
        records.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        records
    }

    /// Every record, sorted by path.
    #[must_use]
    pub fn all(&self) -> Vec<AssetRecord> {
        let mut records: Vec<AssetRecord> = self.lock().by_path.values().cloned().collect();
        records.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().by_path.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().by_path.is_empty()
    }

    /// Record counts per category, sorted by category name.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let inner = self.lock();
        let mut counts: Vec<(Category, usize)> = inner
            .by_category
            .iter()
            .filter(|(_, paths)| !paths.is_empty())
            .map(|(category, paths)| (*category, paths.len()))
            .collect();
        counts.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        counts
    }

    /// Record counts per asset type, sorted by type name.
    #[must_use]
    pub fn type_counts(&self) -> Vec<(AssetType, usize)> {
        let inner = self.lock();
        let mut counts: Vec<(AssetType, usize)> = inner
            .by_type
            .iter()
            .filter(|(_, paths)| !paths.is_empty())
            .map(|(asset_type, paths)| (*asset_type, paths.len()))
            .collect();
        counts.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        counts
    }
}
