//! Lightweight metadata and dependency extraction for text mesh formats.
//!
//! OBJ and MTL files are scanned line by line in a single pass with three
//! counters and no DOM, keeping extraction O(file size) without a parser
//! dependency. Binary formats get a fixed placeholder note instead of a
//! partial parse.

use crate::models::AssetMetadata;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Facts gathered from one streaming pass over an OBJ file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ObjScan {
    pub vertices: u64,
    pub faces: u64,
    pub material_refs: u64,
    /// First `mtllib` target, if any.
    pub mtllib: Option<String>,
}

/// Scan an OBJ file, counting vertex/face/material-reference lines and
/// capturing the material-library reference. Comment lines are ignored.
pub fn scan_obj(path: &Path) -> io::Result<ObjScan> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut scan = ObjScan::default();

    for line_result in reader.lines() {
        let line = line_result?;
        let line = line.trim_start();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("v ") {
            scan.vertices += 1;
        } else if line.starts_with("f ") {
            scan.faces += 1;
        } else if line.starts_with("usemtl ") {
            scan.material_refs += 1;
        } else if scan.mtllib.is_none()
            && let Some(rest) = line.strip_prefix("mtllib ")
        {
            // Material libraries with spaces in the name are rare enough
            // that the first token matches observed exporter output.
            if let Some(name) = rest.split_whitespace().next() {
                scan.mtllib = Some(name.to_string());
            }
        }
    }

    Ok(scan)
}

/// Texture targets referenced by `map_*` directives in an MTL file, in
/// file order, unresolved. Also reports whether any `newmtl` definition
/// was seen.
#[derive(Debug, Default, Clone)]
pub struct MtlScan {
    pub has_material_definition: bool,
    pub texture_refs: Vec<String>,
}

/// Scan an MTL file for material definitions and texture-map directives.
///
/// Map directives may carry option flags (`map_Kd -s 1 1 1 tex.png`); the
/// final whitespace token is the referenced file.
pub fn scan_mtl(path: &Path) -> io::Result<MtlScan> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut scan = MtlScan::default();

    for line_result in reader.lines() {
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("newmtl") {
            scan.has_material_definition = true;
        } else if line.starts_with("map_") {
            if let Some(target) = line.split_whitespace().last() {
                scan.texture_refs.push(target.to_string());
            }
        }
    }

    Ok(scan)
}

/// Extract cheap structural metadata for the given file, dispatching on
/// its extension. Formats without a cheap scan yield `None`; binary scene
/// formats yield the external-SDK placeholder.
#[must_use]
pub fn extract_metadata(path: &Path) -> AssetMetadata {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "obj" => match scan_obj(path) {
            Ok(scan) => AssetMetadata::MeshStats {
                vertices: scan.vertices,
                faces: scan.faces,
                materials: scan.material_refs,
            },
            Err(err) => {
                log::debug!("OBJ metadata scan failed for {}: {err}", path.display());
                AssetMetadata::None
            }
        },
        "fbx" => AssetMetadata::External {
            note: "FBX structure requires external SDK".to_string(),
        },
        "blend" => AssetMetadata::External {
            note: "Blender file structure requires external SDK".to_string(),
        },
        _ => AssetMetadata::None,
    }
}

/// Discover on-disk dependencies of an asset.
///
/// For an OBJ this derives the sibling material library by swapping the
/// extension to `.mtl`; when that file exists it becomes a dependency and
/// its texture-map directives are resolved relative to the asset's
/// directory, adding only targets present on disk. Every returned path is
/// absolute; the caller relativizes against its scan root.
#[must_use]
pub fn extract_dependencies(path: &Path) -> Vec<PathBuf> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if ext != "obj" {
        return Vec::new();
    }

    let mut dependencies = Vec::new();
    let sibling_mtl = path.with_extension("mtl");
    if !sibling_mtl.is_file() {
        return dependencies;
    }
    dependencies.push(sibling_mtl.clone());

    let asset_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    match scan_mtl(&sibling_mtl) {
        Ok(scan) => {
            for texture in scan.texture_refs {
                let resolved = asset_dir.join(&texture);
                if resolved.is_file() {
                    dependencies.push(resolved);
                }
            }
        }
        Err(err) => {
            log::debug!(
                "MTL dependency scan failed for {}: {err}",
                sibling_mtl.display()
            );
        }
    }

    dependencies
}
