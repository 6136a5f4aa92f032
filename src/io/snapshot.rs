//! Cache snapshot read/write operations
//!
//! The persisted index is a versioned JSON document carrying the scan
//! timestamp and the full asset record set. Anything unreadable (missing
//! file, malformed JSON, unknown schema version) reads back as an error
//! the caller treats as a cache miss, never as a fatal condition.

use crate::models::{AssetRecord, CacheSnapshot};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Error, ErrorKind, Result};
use std::path::Path;

/// Schema version stamped into every written snapshot. Bump on any change
/// to the asset entry shape; older readers then rescan instead of
/// misreading.
pub const CACHE_VERSION: &str = "1.0";

#[derive(Serialize)]
struct SnapshotDocument<'a> {
    version: &'a str,
    scan_time: u64,
    assets: &'a [AssetRecord],
}

/// Write a snapshot of the given records to a JSON file, creating parent
/// directories as needed.
pub fn write_snapshot(path: &Path, scan_time: u64, assets: &[AssetRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let document = SnapshotDocument {
        version: CACHE_VERSION,
        scan_time,
        assets,
    };

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document).map_err(Error::other)?;
    Ok(())
}

/// Read a snapshot back, verifying the schema version.
pub fn read_snapshot(path: &Path) -> Result<CacheSnapshot> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let snapshot: CacheSnapshot =
        serde_json::from_reader(reader).map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

    if snapshot.version != CACHE_VERSION {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "unsupported cache version '{}' (expected '{CACHE_VERSION}')",
                snapshot.version
            ),
        ));
    }

    Ok(snapshot)
}
