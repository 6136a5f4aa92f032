//! Unit tests for OBJ/MTL scanning and metadata extraction

#[cfg(test)]
mod tests {
    use crate::fixtures::{mtl_source, obj_source, write_file_sync};
    use ava::models::AssetMetadata;
    use ava::services::extract::{extract_dependencies, extract_metadata, scan_mtl, scan_obj};
    use tempfile::TempDir;

    #[test]
    fn test_scan_obj_counts_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mesh.obj");
        write_file_sync(&path, obj_source(5, 3, Some("mesh.mtl"))).unwrap();

        let scan = scan_obj(&path).unwrap();
        assert_eq!(scan.vertices, 5);
        assert_eq!(scan.faces, 3);
        assert_eq!(scan.material_refs, 1);
        assert_eq!(scan.mtllib.as_deref(), Some("mesh.mtl"));
    }

    #[test]
    fn test_scan_obj_ignores_comments_and_non_geometry() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mesh.obj");
        write_file_sync(
            &path,
            "# v 1 2 3\n\n  v 1.0 2.0 3.0\nvt 0.0 0.0\nvn 0 1 0\nf 1 2 3\n",
        )
        .unwrap();

        let scan = scan_obj(&path).unwrap();
        assert_eq!(scan.vertices, 1, "comment, vt, and vn lines must not count");
        assert_eq!(scan.faces, 1);
        assert!(scan.mtllib.is_none());
    }

    #[test]
    fn test_scan_obj_keeps_first_mtllib() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mesh.obj");
        write_file_sync(&path, "mtllib first.mtl\nmtllib second.mtl\nv 0 0 0\n").unwrap();

        let scan = scan_obj(&path).unwrap();
        assert_eq!(scan.mtllib.as_deref(), Some("first.mtl"));
    }

    #[test]
    fn test_scan_mtl_takes_last_token_of_map_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lib.mtl");
        write_file_sync(
            &path,
            "newmtl walls\nKd 0.8 0.8 0.8\nmap_Kd -s 1 1 1 brick.png\nmap_Bump bump.tga\n",
        )
        .unwrap();

        let scan = scan_mtl(&path).unwrap();
        assert!(scan.has_material_definition);
        assert_eq!(scan.texture_refs, vec!["brick.png", "bump.tga"]);
    }

    #[test]
    fn test_scan_mtl_without_definitions() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lib.mtl");
        write_file_sync(&path, "# only a comment\nmap_Kd tex.png\n").unwrap();

        let scan = scan_mtl(&path).unwrap();
        assert!(!scan.has_material_definition);
        assert_eq!(scan.texture_refs, vec!["tex.png"]);
    }

    #[test]
    fn test_metadata_variants_by_extension() {
        let temp = TempDir::new().unwrap();

        let obj = temp.path().join("mesh.obj");
        write_file_sync(&obj, obj_source(2, 1, None)).unwrap();
        assert_eq!(
            extract_metadata(&obj),
            AssetMetadata::MeshStats {
                vertices: 2,
                faces: 1,
                materials: 0
            }
        );

        let fbx = temp.path().join("scene.fbx");
        write_file_sync(&fbx, b"irrelevant").unwrap();
        match extract_metadata(&fbx) {
            AssetMetadata::External { note } => assert!(note.contains("FBX")),
            other => panic!("expected external metadata, got {other:?}"),
        }

        let png = temp.path().join("image.png");
        write_file_sync(&png, b"irrelevant").unwrap();
        assert_eq!(extract_metadata(&png), AssetMetadata::None);
    }

    #[test]
    fn test_dependencies_include_only_existing_files() {
        let temp = TempDir::new().unwrap();
        let obj = temp.path().join("mesh.obj");
        write_file_sync(&obj, obj_source(2, 1, Some("mesh.mtl"))).unwrap();
        write_file_sync(
            temp.path().join("mesh.mtl"),
            mtl_source(&["walls"], &["present.png", "missing.png"]),
        )
        .unwrap();
        write_file_sync(temp.path().join("present.png"), b"png").unwrap();

        let deps = extract_dependencies(&obj);
        assert_eq!(deps.len(), 2, "sibling mtl plus the one existing texture");
        assert!(deps[0].ends_with("mesh.mtl"));
        assert!(deps[1].ends_with("present.png"));
    }

    #[test]
    fn test_no_dependencies_without_sibling_mtl() {
        let temp = TempDir::new().unwrap();
        let obj = temp.path().join("mesh.obj");
        write_file_sync(&obj, obj_source(2, 1, Some("gone.mtl"))).unwrap();

        assert!(extract_dependencies(&obj).is_empty());
    }

    #[test]
    fn test_non_obj_files_have_no_dependencies() {
        let temp = TempDir::new().unwrap();
        let png = temp.path().join("image.png");
        write_file_sync(&png, b"png").unwrap();

        assert!(extract_dependencies(&png).is_empty());
    }
}
