//! Shared classification tables mapping extensions to asset types and
//! filename/path heuristics to categories.
//!
//! Both the indexer and the validator resolve types through this module so
//! the two can never disagree about what an extension means.

use crate::models::{AssetType, Category};
use std::path::Path;

/// Filename keyword table, scanned in order with first match winning.
///
/// Order is load-bearing: `tree` must precede `prop` so `tree_prop` lands
/// in Environment, and `character` must precede `car` so character meshes
/// do not land in Vehicles.
pub const CATEGORY_KEYWORDS: [(&str, Category); 10] = [
    ("building", Category::Buildings),
    ("house", Category::Buildings),
    ("character", Category::Characters),
    ("person", Category::Characters),
    ("tree", Category::Environment),
    ("plant", Category::Environment),
    ("vehicle", Category::Vehicles),
    ("car", Category::Vehicles),
    ("prop", Category::Props),
    ("object", Category::Props),
];

/// Map a bare extension (no dot) to its asset type. Case-insensitive;
/// unmapped extensions are `Unknown`.
#[must_use]
pub fn type_for_extension(ext: &str) -> AssetType {
    match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
        "obj" | "fbx" | "blend" | "gltf" | "glb" | "dae" | "3ds" | "stl" | "ply" => {
            AssetType::Model
        }
        "png" | "jpg" | "jpeg" | "tga" | "bmp" | "tif" | "tiff" | "exr" | "hdr" | "dds"
        | "webp" => AssetType::Texture,
        "mtl" => AssetType::Material,
        "wav" | "mp3" | "ogg" | "flac" | "aiff" => AssetType::Audio,
        "mp4" | "avi" | "mov" | "mkv" | "webm" => AssetType::Video,
        _ => AssetType::Unknown,
    }
}

/// Detect the asset type of a path from its extension alone.
#[must_use]
pub fn detect_type(path: &Path) -> AssetType {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(AssetType::Unknown, type_for_extension)
}

/// Whether the indexer and directory validation should consider this file.
/// Files with unmapped extensions are skipped entirely.
#[must_use]
pub fn is_known_type(path: &Path) -> bool {
    detect_type(path) != AssetType::Unknown
}

/// Resolve an asset's category from its relative path.
///
/// Ordered rules, first match wins:
/// 1. filename keyword from [`CATEGORY_KEYWORDS`] (substring match on the
///    lowercased stem),
/// 2. the directory segment immediately under a `Models` component,
///    matched against category names,
/// 3. `Misc`.
///
/// Rule 1 deliberately beats rule 2: `tree_prop.obj` inside `Vehicles/`
/// categorizes as Environment because the filename says so.
#[must_use]
pub fn categorize(relative_path: &Path) -> Category {
    if let Some(stem) = relative_path.file_stem().and_then(|s| s.to_str()) {
        let stem = stem.to_ascii_lowercase();
        for (keyword, category) in &CATEGORY_KEYWORDS {
            if stem.contains(keyword) {
                return *category;
            }
        }
    }

    if let Some(category) = category_from_models_dir(relative_path) {
        return category;
    }

    Category::Misc
}

/// Look for a `Models/<Category>/...` convention among the directory
/// components (the filename itself never participates).
fn category_from_models_dir(relative_path: &Path) -> Option<Category> {
    let parent = relative_path.parent()?;
    let components: Vec<&str> = parent
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    for pair in components.windows(2) {
        if pair[0].eq_ignore_ascii_case("models") {
            if let Some(category) = Category::from_label(pair[1]) {
                return Some(category);
            }
        }
    }

    None
}
