//! Format-specific validation rules, dispatched by extension.
//!
//! Each rule is independent and appends to the shared result. Signature
//! mismatches on binary containers grade as WARNING because alternate
//! sub-formats are common (ASCII FBX, mislabeled images); missing geometry
//! and unresolved references grade as ERROR because the asset cannot be
//! used as-is. That asymmetry is deliberate.

use crate::models::{AssetType, Severity, ValidationIssue, ValidationResult};
use crate::services::{classify, extract};
use std::path::Path;

/// `Kaydara FBX Binary  ` - the first 20 bytes of every binary FBX file.
const FBX_MAGIC: &[u8] = b"Kaydara FBX Binary  ";
/// Magic + NUL + 0x1A 0x00 + u32 LE version.
const FBX_HEADER_LEN: usize = 27;
const FBX_VERSION_OFFSET: usize = 23;
/// Versions produced by SDKs from FBX 6.0 through 7.7.
const FBX_VERSION_RANGE: std::ops::RangeInclusive<u32> = 6000..=7700;
/// A binary FBX below this carries a header and nothing else.
const FBX_MIN_SIZE: u64 = 100;

const BLEND_MAGIC: &[u8] = b"BLENDER";
/// Magic + pointer-size flag + endianness flag + 3 version digits.
const BLEND_HEADER_LEN: usize = 12;
const BLEND_MIN_SIZE: u64 = 64;

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];
const TIFF_LE_MAGIC: [u8; 4] = [0x49, 0x49, 0x2A, 0x00];
const TIFF_BE_MAGIC: [u8; 4] = [0x4D, 0x4D, 0x00, 0x2A];
const EXR_MAGIC: [u8; 4] = [0x76, 0x2F, 0x31, 0x01];

/// Run the format stage for one asset.
///
/// Extensions without rules (including recognized audio/video types and
/// anything unmapped) pass through untouched; absence of evidence is not
/// evidence of absence.
pub fn check_format(path: &Path, prefix: &[u8], file_size: u64, result: &mut ValidationResult) {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "obj" => check_obj(path, result),
        "fbx" => check_fbx(prefix, file_size, result),
        "blend" => check_blend(prefix, file_size, result),
        "mtl" => check_mtl(path, result),
        _ if classify::type_for_extension(&ext) == AssetType::Texture => {
            check_texture(&ext, prefix, result);
        }
        _ => log::trace!("No format rules for extension '{ext}'"),
    }
}

/// Text mesh rules: geometry presence and material-library resolution.
fn check_obj(path: &Path, result: &mut ValidationResult) {
    let asset_path = result.asset_path.clone();

    let scan = match extract::scan_obj(path) {
        Ok(scan) => scan,
        Err(err) => {
            result.add_issue(
                ValidationIssue::new(Severity::Error, "Could not read OBJ contents", &asset_path)
                    .with_context(err.to_string())
                    .with_recommendation("The file may be corrupt; re-export it"),
            );
            return;
        }
    };

    if scan.vertices == 0 {
        result.add_issue(
            ValidationIssue::new(Severity::Error, "Mesh defines no vertices", &asset_path)
                .with_recommendation("Re-export the mesh; it contains no geometry"),
        );
    }
    if scan.faces == 0 {
        result.add_issue(
            ValidationIssue::new(Severity::Warning, "Mesh defines no faces", &asset_path)
                .with_context("vertex data without face data renders as nothing")
                .with_recommendation("Check the export settings if faces were expected"),
        );
    }

    if let Some(mtllib) = &scan.mtllib {
        let resolved = path.parent().unwrap_or_else(|| Path::new("")).join(mtllib);
        if !resolved.is_file() {
            result.add_issue(
                ValidationIssue::new(
                    Severity::Error,
                    "Referenced material library not found",
                    &asset_path,
                )
                .with_context(format!("mtllib {mtllib}"))
                .with_recommendation("Restore the .mtl next to the mesh or remove the reference"),
            );
        }
    }
}

/// Binary exchange-format rules: header, signature, version, plausible size.
fn check_fbx(prefix: &[u8], file_size: u64, result: &mut ValidationResult) {
    let asset_path = result.asset_path.clone();

    if file_size < FBX_MIN_SIZE {
        result.add_issue(
            ValidationIssue::new(Severity::Error, "File too small to be an FBX scene", &asset_path)
                .with_context(format!("{file_size} bytes"))
                .with_recommendation("The export likely failed; re-export the scene"),
        );
    }

    if prefix.len() < FBX_HEADER_LEN {
        result.add_issue(
            ValidationIssue::new(Severity::Error, "FBX header is truncated", &asset_path)
                .with_context(format!("{} of {FBX_HEADER_LEN} header bytes", prefix.len())),
        );
        return;
    }

    if &prefix[..FBX_MAGIC.len()] != FBX_MAGIC {
        // Not an error: ASCII FBX and other exchange sub-formats share the
        // extension without the binary signature.
        result.add_issue(
            ValidationIssue::new(
                Severity::Warning,
                "Signature does not match binary FBX",
                &asset_path,
            )
            .with_context("file may be ASCII FBX or another exchange sub-format")
            .with_recommendation("Open it in an FBX-aware tool to confirm the variant"),
        );
        return;
    }

    let version = u32::from_le_bytes([
        prefix[FBX_VERSION_OFFSET],
        prefix[FBX_VERSION_OFFSET + 1],
        prefix[FBX_VERSION_OFFSET + 2],
        prefix[FBX_VERSION_OFFSET + 3],
    ]);
    if FBX_VERSION_RANGE.contains(&version) {
        result.add_issue(ValidationIssue::new(
            Severity::Info,
            format!("FBX binary version {version}"),
            &asset_path,
        ));
    } else {
        result.add_issue(
            ValidationIssue::new(
                Severity::Warning,
                "FBX version outside the known-good range",
                &asset_path,
            )
            .with_context(format!(
                "version {version}, expected {}..={}",
                FBX_VERSION_RANGE.start(),
                FBX_VERSION_RANGE.end()
            ))
            .with_recommendation("Import may fail; convert with a current FBX SDK"),
        );
    }
}

/// Native scene-format rules: magic, header flags, plausible size.
fn check_blend(prefix: &[u8], file_size: u64, result: &mut ValidationResult) {
    let asset_path = result.asset_path.clone();

    if file_size < BLEND_MIN_SIZE {
        result.add_issue(
            ValidationIssue::new(
                Severity::Error,
                "File too small to be a Blender scene",
                &asset_path,
            )
            .with_context(format!("{file_size} bytes"))
            .with_recommendation("The save likely failed; recover from a .blend1 backup"),
        );
    }

    if prefix.len() < BLEND_MAGIC.len() || &prefix[..BLEND_MAGIC.len()] != BLEND_MAGIC {
        result.add_issue(
            ValidationIssue::new(Severity::Error, "Blender signature mismatch", &asset_path)
                .with_context("expected the file to start with BLENDER")
                .with_recommendation("The file is not a Blender scene or its header is damaged"),
        );
        return;
    }

    if prefix.len() >= BLEND_HEADER_LEN {
        let pointer_width = match prefix[7] {
            b'-' => "64-bit pointers",
            b'_' => "32-bit pointers",
            _ => "unknown pointer width",
        };
        let endianness = match prefix[8] {
            b'v' => "little-endian",
            b'V' => "big-endian",
            _ => "unknown byte order",
        };
        let version = String::from_utf8_lossy(&prefix[9..BLEND_HEADER_LEN]).into_owned();
        result.add_issue(
            ValidationIssue::new(
                Severity::Info,
                format!("Blender header: {pointer_width}, {endianness}"),
                &asset_path,
            )
            .with_context(format!("saved by Blender {version}")),
        );
    }
}

/// Material-library rules: definition presence and texture resolution.
fn check_mtl(path: &Path, result: &mut ValidationResult) {
    let asset_path = result.asset_path.clone();

    let scan = match extract::scan_mtl(path) {
        Ok(scan) => scan,
        Err(err) => {
            result.add_issue(
                ValidationIssue::new(Severity::Error, "Could not read MTL contents", &asset_path)
                    .with_context(err.to_string())
                    .with_recommendation("The file may be corrupt; re-export it"),
            );
            return;
        }
    };

    if !scan.has_material_definition {
        result.add_issue(
            ValidationIssue::new(
                Severity::Warning,
                "No material definitions (newmtl) found",
                &asset_path,
            )
            .with_recommendation("Meshes referencing this library will import without materials"),
        );
    }

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    for target in &scan.texture_refs {
        let resolved = base_dir.join(target);
        if !resolved.is_file() {
            result.add_issue(
                ValidationIssue::new(Severity::Error, "Referenced texture not found", &asset_path)
                    .with_context(format!("map directive target: {target}"))
                    .with_recommendation("Restore the texture or fix the map path"),
            );
        }
    }
}

/// Image rules: byte prefix against the magic claimed by the extension.
fn check_texture(ext: &str, prefix: &[u8], result: &mut ValidationResult) {
    let asset_path = result.asset_path.clone();

    match magic_matches(ext, prefix) {
        // Formats without a reliable signature (tga) are not judged.
        None => {}
        Some(true) => {}
        Some(false) => {
            result.add_issue(
                ValidationIssue::new(
                    Severity::Warning,
                    "Image signature does not match the extension",
                    &asset_path,
                )
                .with_context(format!("leading bytes are not valid {ext} magic"))
                .with_recommendation(
                    "The extension may simply be wrong; verify with an image tool",
                ),
            );
        }
    }
}

/// Compare a byte prefix against the known signatures for an extension.
/// `None` means the extension has no reliable magic to check.
fn magic_matches(ext: &str, prefix: &[u8]) -> Option<bool> {
    let signatures: &[&[u8]] = match ext {
        "png" => &[&PNG_MAGIC],
        "jpg" | "jpeg" => &[&JPEG_MAGIC],
        "gif" => &[b"GIF87a", b"GIF89a"],
        "bmp" => &[b"BM"],
        "tif" | "tiff" => &[&TIFF_LE_MAGIC, &TIFF_BE_MAGIC],
        "dds" => &[b"DDS "],
        "exr" => &[&EXR_MAGIC],
        "hdr" => &[b"#?RADIANCE", b"#?RGBE"],
        "webp" => {
            return Some(
                prefix.len() >= 12 && prefix.starts_with(b"RIFF") && &prefix[8..12] == b"WEBP",
            );
        }
        _ => return None,
    };

    Some(signatures.iter().any(|sig| prefix.starts_with(sig)))
}
