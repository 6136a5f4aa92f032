//! Data models for asset records, validation results, and cache snapshots

use serde::{Deserialize, Serialize};

/// Coarse asset classification derived from the file extension.
///
/// Serialized in lowercase, matching [`AssetType::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Model,
    Texture,
    Material,
    Audio,
    Video,
    Unknown,
}

impl AssetType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Model => "model",
            AssetType::Texture => "texture",
            AssetType::Material => "material",
            AssetType::Audio => "audio",
            AssetType::Video => "video",
            AssetType::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "model" => Some(AssetType::Model),
            "texture" => Some(AssetType::Texture),
            "material" => Some(AssetType::Material),
            "audio" => Some(AssetType::Audio),
            "video" => Some(AssetType::Video),
            "unknown" => Some(AssetType::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every asset type, in display order.
pub const ASSET_TYPES: [AssetType; 6] = [
    AssetType::Model,
    AssetType::Texture,
    AssetType::Material,
    AssetType::Audio,
    AssetType::Video,
    AssetType::Unknown,
];

/// Heuristic semantic grouping for an asset, derived from filename keywords
/// with a directory-structure fallback. Not authoritative metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Buildings,
    Characters,
    Props,
    Environment,
    Vehicles,
    Misc,
}

/// Every named category, in display order. `Misc` is the fallback and is
/// never matched by name against directory segments.
pub const NAMED_CATEGORIES: [Category; 5] = [
    Category::Buildings,
    Category::Characters,
    Category::Props,
    Category::Environment,
    Category::Vehicles,
];

impl Category {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Buildings => "Buildings",
            Category::Characters => "Characters",
            Category::Props => "Props",
            Category::Environment => "Environment",
            Category::Vehicles => "Vehicles",
            Category::Misc => "Misc",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "buildings" => Some(Category::Buildings),
            "characters" => Some(Category::Characters),
            "props" => Some(Category::Props),
            "environment" => Some(Category::Environment),
            "vehicles" => Some(Category::Vehicles),
            "misc" => Some(Category::Misc),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cheap structural metadata attached to an asset record.
///
/// Closed variant set so consumers match exhaustively instead of probing a
/// string-keyed bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetMetadata {
    /// Line-counted stats for text mesh formats (one streaming pass, no DOM).
    MeshStats {
        vertices: u64,
        faces: u64,
        materials: u64,
    },
    /// Binary formats whose structure needs a full SDK to read.
    External { note: String },
    #[default]
    None,
}

/// One entry per discovered file in the index.
///
/// `relative_path` is the unique key within one scan root; re-indexing the
/// same path overwrites the prior record. Wire names follow the persisted
/// cache contract (`path`, `type`, `file_size`, `last_modified`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(rename = "path")]
    pub relative_path: String,
    /// Filename without extension, display only.
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub category: Category,
    #[serde(rename = "file_size")]
    pub size_bytes: u64,
    /// Seconds since the Unix epoch, captured at scan time.
    #[serde(rename = "last_modified")]
    pub modified_at: u64,
    #[serde(default)]
    pub metadata: AssetMetadata,
    /// Relative paths of files this asset textually references, only those
    /// that existed on disk at scan time.
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

/// Ordinal issue rank. Derived ordering follows declaration order, so
/// `Info < Warning < Error < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single observation made while validating one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub description: String,
    pub file_path: String,
    /// Free-text detail, empty when there is nothing to add.
    #[serde(default)]
    pub context: String,
    /// Free-text suggested fix, empty when there is nothing to add.
    #[serde(default)]
    pub recommendation: String,
}

impl ValidationIssue {
    #[must_use]
    pub fn new(severity: Severity, description: impl Into<String>, file_path: &str) -> Self {
        Self {
            severity,
            description: description.into(),
            file_path: file_path.to_string(),
            context: String::new(),
            recommendation: String::new(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    #[must_use]
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = recommendation.into();
        self
    }
}

/// Outcome of validating one asset.
///
/// Constructed fresh per validation call and mutated only through
/// [`ValidationResult::add_issue`], which keeps the per-severity counters
/// and the validity flag consistent with the issue list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub asset_path: String,
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
    pub info_count: u32,
    pub warning_count: u32,
    pub error_count: u32,
    pub critical_count: u32,
    pub total_issues: u32,
}

impl ValidationResult {
    #[must_use]
    pub fn new(asset_path: impl Into<String>) -> Self {
        Self {
            asset_path: asset_path.into(),
            is_valid: true,
            issues: Vec::new(),
            info_count: 0,
            warning_count: 0,
            error_count: 0,
            critical_count: 0,
            total_issues: 0,
        }
    }

    /// Record one issue, updating the severity counters and validity flag.
    ///
    /// A result stays valid while it carries only INFO/WARNING issues;
    /// ERROR and CRITICAL both invalidate it.
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Info => self.info_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Error => self.error_count += 1,
            Severity::Critical => self.critical_count += 1,
        }
        self.total_issues += 1;
        self.is_valid = self.error_count == 0 && self.critical_count == 0;
        self.issues.push(issue);
    }

    /// Count of issues at exactly the given severity.
    #[must_use]
    pub fn count_at(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Info => self.info_count,
            Severity::Warning => self.warning_count,
            Severity::Error => self.error_count,
            Severity::Critical => self.critical_count,
        }
    }
}

/// Aggregate counters across a batch of validation results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    pub files_validated: u64,
    pub valid_files: u64,
    pub files_with_errors: u64,
    pub files_with_warnings: u64,
    pub info_issues: u64,
    pub warning_issues: u64,
    pub error_issues: u64,
    pub critical_issues: u64,
    pub total_issues: u64,
}

impl ValidationStats {
    /// Fold one result into the running totals.
    pub fn observe(&mut self, result: &ValidationResult) {
        self.files_validated += 1;
        if result.is_valid {
            self.valid_files += 1;
        }
        if result.error_count > 0 || result.critical_count > 0 {
            self.files_with_errors += 1;
        }
        if result.warning_count > 0 {
            self.files_with_warnings += 1;
        }
        self.info_issues += u64::from(result.info_count);
        self.warning_issues += u64::from(result.warning_count);
        self.error_issues += u64::from(result.error_count);
        self.critical_issues += u64::from(result.critical_count);
        self.total_issues += u64::from(result.total_issues);
    }

    /// Accumulate a whole batch.
    #[must_use]
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let mut stats = Self::default();
        for result in results {
            stats.observe(result);
        }
        stats
    }
}

/// Persisted projection of one completed scan.
///
/// Loading a snapshot fully replaces the in-memory index; partial merges
/// are not supported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSnapshot {
    /// Schema version string; a mismatch is treated as a cache miss.
    pub version: String,
    /// Seconds since the Unix epoch when the scan completed.
    pub scan_time: u64,
    pub assets: Vec<AssetRecord>,
}
