//! Asset index: scan orchestration, TTL cache policy, incremental updates,
//! and read accessors over the current snapshot.

use crate::models::{AssetRecord, AssetType, Category};
use crate::services::store::AssetStore;
use crate::services::{classify, extract, walk};
use crate::IndexOptions;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, saturating at zero for pre-epoch clocks.
#[must_use]
pub(crate) fn epoch_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

/// Catalog of one scan root.
///
/// Owns the record store and the snapshot timestamp for the lifetime of a
/// scan. Safe to share across threads; concurrent scans of the same index
/// serialize on the store's internal lock per insert.
#[derive(Debug)]
pub struct AssetIndex {
    root: PathBuf,
    options: IndexOptions,
    store: AssetStore,
    /// Epoch seconds of the last completed scan; 0 before any scan.
    scan_time: AtomicU64,
    cache_valid: AtomicBool,
}

impl AssetIndex {
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P, options: IndexOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
            store: AssetStore::new(),
            scan_time: AtomicU64::new(0),
            cache_valid: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the in-memory snapshot can answer queries without a rescan:
    /// a scan has completed and its age is below the configured TTL.
    ///
    /// Pure time-based policy; filesystem changes are not watched, so a
    /// caller needing freshness must scan with `force_refresh = true`.
    #[must_use]
    pub fn is_cache_valid(&self) -> bool {
        if !self.cache_valid.load(Ordering::Acquire) {
            return false;
        }
        let scanned = self.scan_time.load(Ordering::Acquire);
        let now = epoch_secs(SystemTime::now());
        now.saturating_sub(scanned) < self.options.cache_ttl.as_secs()
    }

    /// Scan the root, classifying every file with a mapped extension.
    ///
    /// Returns `true` on completion (including the cache-hit fast path when
    /// `force_refresh` is false and the snapshot is still valid). Returns
    /// `false`, recording no partial state, when the root is inaccessible
    /// or the scan was cancelled. Filesystem errors never escape.
    pub fn scan(&self, force_refresh: bool) -> bool {
        if !force_refresh && self.is_cache_valid() {
            log::debug!("Scan cache hit for {}", self.root.display());
            return true;
        }

        let candidates = match walk::collect_files(&self.root) {
            Ok(files) => files,
            Err(err) => {
                log::warn!("Cannot scan {}: {err}", self.root.display());
                return false;
            }
        };

        self.cache_valid.store(false, Ordering::Release);
        self.store.clear();

        let matched: Vec<PathBuf> = candidates
            .into_iter()
            .filter(|path| classify::is_known_type(path))
            .collect();
        log::debug!(
            "Indexing {} matched files under {}",
            matched.len(),
            self.root.display()
        );

        if self.options.parallel {
            matched.par_iter().for_each(|path| {
                if self.is_cancelled() {
                    return;
                }
                if let Some(record) = self.build_record(path) {
                    self.store.insert(record);
                }
            });
        } else {
            for path in &matched {
                if self.is_cancelled() {
                    break;
                }
                if let Some(record) = self.build_record(path) {
                    self.store.insert(record);
                }
            }
        }

        if self.is_cancelled() {
            log::warn!("Scan of {} cancelled; discarding partial index", self.root.display());
            self.store.clear();
            return false;
        }

        self.scan_time
            .store(epoch_secs(SystemTime::now()), Ordering::Release);
        self.cache_valid.store(true, Ordering::Release);
        true
    }

    fn is_cancelled(&self) -> bool {
        self.options
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Classify one file into a record. Returns `None` when the file
    /// vanished or cannot be stat'ed, or when it lies outside the root.
    fn build_record(&self, path: &Path) -> Option<AssetRecord> {
        let relative_path = self.relative_key(path)?;

        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(err) => {
                log::warn!("Skipping {}: {err}", path.display());
                return None;
            }
        };

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let asset_type = classify::detect_type(path);
        let category = classify::categorize(Path::new(&relative_path));
        let size_bytes = metadata.len();
        let modified_at = metadata.modified().map_or(0, epoch_secs);

        let mut warnings = Vec::new();
        if size_bytes == 0 {
            warnings.push("File is empty".to_string());
        }

        let dependencies = extract::extract_dependencies(path)
            .into_iter()
            .filter_map(|dep| self.relative_key(&dep))
            .collect();

        Some(AssetRecord {
            relative_path,
            name,
            asset_type,
            category,
            size_bytes,
            modified_at,
            metadata: extract::extract_metadata(path),
            dependencies,
            is_valid: true,
            issues: Vec::new(),
            warnings,
        })
    }

    /// Path relative to the scan root with `/` separators, the stable
    /// record key.
    fn relative_key(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<&str> = relative
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(parts.join("/"))
    }

    /// Re-classify a single file after a targeted filesystem event.
    ///
    /// Returns `true` when the path now has a record; a vanished or
    /// unmapped file is removed from the index and yields `false`.
    pub fn update_asset(&self, relative_path: &str) -> bool {
        let absolute = self.root.join(relative_path);

        if !absolute.is_file() || !classify::is_known_type(&absolute) {
            self.store.remove(relative_path);
            return false;
        }

        match self.build_record(&absolute) {
            Some(record) => {
                self.store.insert(record);
                true
            }
            None => {
                self.store.remove(relative_path);
                false
            }
        }
    }

    /// Remove a single record, scrubbing category and type group entries.
    pub fn remove_asset(&self, relative_path: &str) -> bool {
        self.store.remove(relative_path).is_some()
    }

    #[must_use]
    pub fn get_asset_by_path(&self, relative_path: &str) -> Option<AssetRecord> {
        self.store.get(relative_path)
    }

    #[must_use]
    pub fn get_assets_by_category(&self, category: Category) -> Vec<AssetRecord> {
        self.store.by_category(category)
    }

    #[must_use]
    pub fn get_assets_by_type(&self, asset_type: AssetType) -> Vec<AssetRecord> {
        self.store.by_type(asset_type)
    }

    #[must_use]
    pub fn all_assets(&self) -> Vec<AssetRecord> {
        self.store.all()
    }

    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        self.store.category_counts()
    }

    #[must_use]
    pub fn type_counts(&self) -> Vec<(AssetType, usize)> {
        self.store.type_counts()
    }

    /// Epoch seconds of the last completed scan, 0 before any scan.
    #[must_use]
    pub fn scan_time(&self) -> u64 {
        self.scan_time.load(Ordering::Acquire)
    }

    /// Persist the current snapshot. Failure is logged, never raised.
    pub fn save_cache<P: AsRef<Path>>(&self, path: P) -> bool {
        let assets = self.store.all();
        match crate::io::snapshot::write_snapshot(path.as_ref(), self.scan_time(), &assets) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to save cache to {}: {err}", path.as_ref().display());
                false
            }
        }
    }

    /// Load a snapshot, fully replacing the in-memory index and re-deriving
    /// the group maps. A version mismatch or malformed file is a cache miss
    /// (`false`) and leaves the in-memory state untouched.
    pub fn load_cache<P: AsRef<Path>>(&self, path: P) -> bool {
        match crate::io::snapshot::read_snapshot(path.as_ref()) {
            Ok(snapshot) => {
                self.store.replace_all(snapshot.assets);
                self.scan_time.store(snapshot.scan_time, Ordering::Release);
                self.cache_valid.store(true, Ordering::Release);
                true
            }
            Err(err) => {
                log::debug!(
                    "Cache miss for {}: {err}",
                    path.as_ref().display()
                );
                false
            }
        }
    }
}
